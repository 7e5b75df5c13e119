use log::LevelFilter;

/// Local storage key the bearer token is kept under
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Client configuration, fixed at build time
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base_url: String,
    pub token_storage_key: String,
    pub log_level: LevelFilter,
}

impl ClientConfig {
    /// Read `PAYMENTS_API_BASE_URL` and `PAYMENTS_LOG_LEVEL` captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PAYMENTS_API_BASE_URL"),
            option_env!("PAYMENTS_LOG_LEVEL"),
        )
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            token_storage_key: defaults.token_storage_key,
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}
