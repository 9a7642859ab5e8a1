//! Application configuration module
//!
//! Provides configuration types shared by the wallet and site clients.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Backend base URL
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the backend base URL. A trailing slash is stripped so endpoint
    /// paths can always start with `/`.
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_server_url() {
        let config = AppConfig::builder()
            .server_url("http://localhost:8000".to_string())
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn strips_trailing_slash() {
        let config = AppConfig::builder()
            .server_url("http://localhost:8000/".to_string())
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn rejects_non_http_url() {
        let result = AppConfig::builder()
            .server_url("ftp://example.com".to_string())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }
}
