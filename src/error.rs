use std::time::Duration;

use thiserror::Error;

/// Failure of a single outbound request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {cause}")]
    Transport { url: String, cause: String },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed payload from {url}: {reason}")]
    Malformed { url: String, reason: String },

    #[error("request to {url} timed out after {}ms", .after.as_millis())]
    Timeout { url: String, after: Duration },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure that aborts a whole roster call. Per-pokemon failures never end up here.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to load Pokémon data: {0}")]
    Listing(#[source] FetchError),

    #[error("Failed to load Pokémon of type {category}: {source}")]
    Category {
        category: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to load Pokémon count: {0}")]
    Count(#[source] FetchError),

    #[error("Failed to load Pokémon types: {0}")]
    Types(#[source] FetchError),

    #[error("Failed to load Pokémon details: {0}")]
    Details(#[source] FetchError),
}

impl RosterError {
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            RosterError::Listing(cause)
            | RosterError::Count(cause)
            | RosterError::Types(cause)
            | RosterError::Details(cause) => cause,
            RosterError::Category { source, .. } => source,
        }
    }

    /// Status code returned by the remote api, if it answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        self.fetch_error().status()
    }
}

/// A detail payload carried fewer base stats than the six a pokemon has.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected 6 base stats, found {found}")]
pub struct IncompleteStats {
    pub found: usize,
}

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid api base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
