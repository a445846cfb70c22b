pub type Result<T> = core::result::Result<T, SurgeError>;

#[derive(thiserror::Error, Debug)]
pub enum SurgeError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("http client: {0}")]
    Client(String),
}

pub mod config {
    use serde::Deserialize;
    use std::env;
    use std::time::Duration;

    /// Resolved run configuration: one target, one credential, one burst size.
    /// Fixed for the duration of a run; the dispatcher never mutates it.
    #[derive(Debug, Clone, Deserialize)]
    pub struct SurgeConfig {
        pub target_url: String,
        pub api_key: String,
        pub requests: usize,
        pub timeout_secs: Option<u64>,
    }

    impl Default for SurgeConfig {
        fn default() -> Self {
            Self {
                target_url: String::from("http://localhost:8080/proxy/orders"),
                api_key: String::from("test_api_key_1"),
                requests: 20,
                timeout_secs: Some(30),
            }
        }
    }

    impl SurgeConfig {
        pub fn load() -> Self {
            if let Ok(path) = env::var("SURGE_CONFIG") {
                let Ok(text) = std::fs::read_to_string(path) else { return Self::default() };
                let Ok(cfg) = serde_yaml::from_str::<SurgeConfig>(&text) else { return Self::default() };
                return cfg;
            }
            let mut cfg = Self::default();
            if let Ok(url) = env::var("SURGE_URL") {
                cfg.target_url = url;
            }
            if let Ok(key) = env::var("SURGE_API_KEY") {
                cfg.api_key = key;
            }
            if let Some(v) = env::var("SURGE_REQUESTS").ok().and_then(|v| v.parse().ok()) { cfg.requests = v; }
            if let Some(v) = env::var("SURGE_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()) { cfg.timeout_secs = Some(v); }
            cfg
        }

        pub fn timeout(&self) -> Option<Duration> {
            self.timeout_secs.map(Duration::from_secs)
        }
    }
}
