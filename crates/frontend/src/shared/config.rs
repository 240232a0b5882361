//! Build-time configuration of the frontend.
//!
//! Values are baked in at compile time (`API_BASE_URL=... trunk build`),
//! there is no runtime config file in the browser.

/// Port the backend listens on when no explicit base URL is configured.
pub const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Explicit API base URL, e.g. "https://api.example.com"
    pub api_base_url: Option<String>,
    pub log_level: log::Level,
}

impl FrontendConfig {
    /// Read the values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("API_BASE_URL"), option_env!("LOG_LEVEL"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        let log_level = log_level
            .and_then(|s| s.trim().parse::<log::Level>().ok())
            .unwrap_or(log::Level::Debug);

        Self {
            api_base_url,
            log_level,
        }
    }
}
