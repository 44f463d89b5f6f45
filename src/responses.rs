use std::{
    fmt::{Debug, Display},
    sync::atomic::Ordering,
};

use actix_web::{
    body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, HttpResponseBuilder, ResponseError,
};
use serde::Serialize;

use crate::{error::RosterError, IS_DEBUG_ON};

fn is_debug_on() -> bool {
    IS_DEBUG_ON.load(Ordering::Relaxed)
}

/// `{"error": ...}` body, only handed out while debug is on.
#[derive(Debug, Serialize)]
pub struct JsonError<Err> {
    error: Err,
    #[serde(skip)]
    status_code: StatusCode,
}

impl<Err> JsonError<Err> {
    pub fn new(error: Err, status_code: StatusCode) -> Self {
        Self { error, status_code }
    }
}

impl<Err: Debug> Display for JsonError<Err> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self.error, self.status_code)
    }
}

impl<Err: Serialize + Debug> ResponseError for JsonError<Err> {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponseBuilder::new(self.status_code).json(self)
    }
}

/// Status only, no body.
#[derive(Debug)]
pub struct EmptyError {
    status_code: StatusCode,
}

impl EmptyError {
    pub fn new(status_code: StatusCode) -> Self {
        Self { status_code }
    }
}

impl Display for EmptyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_code)
    }
}

impl ResponseError for EmptyError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponseBuilder::new(self.status_code).finish()
    }
}

/// Error handler for the json/path/query extractor configs.
pub fn config_error_handler<Err: ResponseError + 'static>(
    err: Err,
    _: &HttpRequest,
) -> actix_web::Error {
    let status_code = err.status_code();
    if is_debug_on() {
        JsonError::new(err.to_string(), status_code).into()
    } else {
        EmptyError::new(status_code).into()
    }
}

pub fn response_from_error(error: impl Serialize + Debug, status_code: StatusCode) -> HttpResponse {
    if is_debug_on() {
        JsonError::new(error, status_code).error_response()
    } else {
        EmptyError::new(status_code).error_response()
    }
}

/// 404 when PokeAPI doesn't know what was asked for, 502 for anything else it got wrong.
pub fn response_from_roster_error(error: &RosterError) -> HttpResponse {
    let status_code = match error.upstream_status() {
        Some(404) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    response_from_error(error.to_string(), status_code)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::error::FetchError;

    #[rstest]
    #[case(
        RosterError::Category {
            category: "cosmic".into(),
            source: FetchError::Status { url: "u".into(), status: 404 },
        },
        StatusCode::NOT_FOUND
    )]
    #[case(
        RosterError::Listing(FetchError::Status { url: "u".into(), status: 500 }),
        StatusCode::BAD_GATEWAY
    )]
    #[case(
        RosterError::Types(FetchError::Transport { url: "u".into(), cause: "refused".into() }),
        StatusCode::BAD_GATEWAY
    )]
    fn maps_roster_errors_to_statuses(#[case] error: RosterError, #[case] expected: StatusCode) {
        assert_eq!(response_from_roster_error(&error).status(), expected);
    }
}
