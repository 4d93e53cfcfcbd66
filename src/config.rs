//! Application Configuration
//!
//! Values are baked in at build time (`FOOD_API_URL`, `FOOD_LOG_LEVEL`).

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST backend base URL
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn new(api_url: impl Into<String>, log_level: LevelFilter) -> Self {
        Self {
            api_url: api_url.into(),
            log_level,
        }
    }

    /// Read the build-time environment
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("FOOD_API_URL"), option_env!("FOOD_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let log_level = log_level
            .map(console_logger::parse_level)
            .unwrap_or(LevelFilter::Info);
        Self::new(api_url, log_level)
    }

    /// Join a resource path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, LevelFilter::Info)
    }
}
