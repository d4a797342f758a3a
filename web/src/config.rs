use std::env;

pub const API_URL_VAR: &str = "BOOKING_API_URL";
pub const DEFAULT_API_URL: &str = "http://backend:5000";

/// Where the server reaches the remote booking API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_address() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, DEFAULT_API_URL);

        let blank = ApiConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(blank.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn reads_and_normalizes_configured_address() {
        let config = ApiConfig::from_lookup(|key| {
            (key == API_URL_VAR).then(|| "http://localhost:5000/".to_string())
        });
        assert_eq!(config.base_url, "http://localhost:5000");
    }
}
