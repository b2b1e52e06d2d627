use crate::constants::DEFAULT_TRAINING_API_BASE;

/// Route configuration for the training API.
///
/// The base is usually relative (`/training/api`) because the dashboard is
/// served by the same backend it talks to. A different base can be injected
/// at build time via the `TRAINING_API_BASE` environment variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_url(option_env!("TRAINING_API_BASE").unwrap_or(DEFAULT_TRAINING_API_BASE))
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a full API URL for a given path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = ApiConfig::from_url("https://bot.example.com/training/api//");
        assert_eq!(cfg.base_url(), "https://bot.example.com/training/api");
        assert_eq!(cfg.url("/stats"), "https://bot.example.com/training/api/stats");
    }

    #[test]
    fn default_points_at_relative_training_api() {
        if option_env!("TRAINING_API_BASE").is_none() {
            assert_eq!(ApiConfig::default().url("/stats"), "/training/api/stats");
        }
    }
}
