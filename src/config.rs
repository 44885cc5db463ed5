use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Gemini API key; AI enrichment is disabled when absent
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Gemini API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Gemini model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Upper bound on a single Gemini call, in seconds
    #[serde(default = "default_gemini_timeout_secs")]
    pub gemini_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-pro".to_string()
}

fn default_gemini_timeout_secs() -> u64 {
    5
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The API key, with blank values treated as missing
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn gemini_timeout(&self) -> Duration {
        Duration::from_secs(self.gemini_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();

        assert_eq!(config.api_key(), None);
        assert_eq!(config.gemini_api_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.gemini_model, "gemini-pro");
        assert_eq!(config.gemini_timeout(), Duration::from_secs(5));
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_reads_uppercase_variables() {
        let config = Config::from_vars(vars(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_TIMEOUT_SECS", "2"),
            ("PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.gemini_timeout(), Duration::from_secs(2));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = Config::from_vars(vars(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_invalid_port_fails() {
        let result = Config::from_vars(vars(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
