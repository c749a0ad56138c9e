use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Fragella API key
    pub fragella_api_key: String,

    /// Fragella API base URL
    #[serde(default = "default_fragella_api_url")]
    pub fragella_api_url: String,

    /// Directory holding the interaction log and inventory JSON files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout for a single catalog request, in seconds. Requests are not retried.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Populate the catalog from a fixed list of search terms at startup
    #[serde(default = "default_seed_catalog")]
    pub seed_catalog: bool,
}

fn default_fragella_api_url() -> String {
    "https://api.fragella.com".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_seed_catalog() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let vars = vec![("FRAGELLA_API_KEY".to_string(), "secret".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.fragella_api_key, "secret");
        assert_eq!(config.fragella_api_url, "https://api.fragella.com");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert!(config.seed_catalog);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let vars: Vec<(String, String)> = vec![];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
