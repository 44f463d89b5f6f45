use std::time::Duration;

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

const DEFAULT_ADDRESS: &str = "0.0.0.0:80";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_address: String,
    pub is_debug_on: bool,
    pub api_base_url: String,
    /// `None` when the timeout is disabled with `request_timeout_ms=0`.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Config {
    /// Environment variables:
    /// - `address` (default: 0.0.0.0:80)
    /// - `debug` (`1` enables)
    /// - `api_base_url` (default: https://pokeapi.co/api/v2)
    /// - `request_timeout_ms` (default: 10000, 0 disables)
    /// - `user_agent`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_ms = match lookup("request_timeout_ms") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid request_timeout_ms '{raw}', using the default");
                DEFAULT_REQUEST_TIMEOUT_MS
            }),
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Self {
            bind_address: lookup("address").unwrap_or_else(|| DEFAULT_ADDRESS.into()),
            is_debug_on: lookup("debug").is_some_and(|val| val == "1"),
            api_base_url: lookup("api_base_url").unwrap_or_else(|| POKEAPI_BASE_URL.into()),
            request_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            user_agent: lookup("user_agent").unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
        }
    }
}
