use crate::models::{DEFAULT_ENDPOINT, PLACEHOLDER_API_KEY};

pub const API_KEY_VAR: &str = "SERVICE_API_KEY";
pub const ENDPOINT_VAR: &str = "SERVICE_ENDPOINT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).unwrap_or_else(|| {
            tracing::warn!("{} not set, using placeholder key", API_KEY_VAR);
            PLACEHOLDER_API_KEY.to_string()
        });
        let endpoint = lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self { api_key, endpoint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_placeholders() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.api_key, "YOUR_API_KEY");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn reads_both_variables() {
        let config = Config::from_lookup(|name| match name {
            API_KEY_VAR => Some("k".to_string()),
            ENDPOINT_VAR => Some("http://localhost:9000/v1/service".to_string()),
            _ => None,
        });
        assert_eq!(
            config,
            Config {
                api_key: "k".to_string(),
                endpoint: "http://localhost:9000/v1/service".to_string(),
            }
        );
    }
}
