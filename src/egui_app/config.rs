use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default backend URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend URL
const SERVER_URL_ENV: &str = "NOVAPAY_API_URL";

/// Client configuration: backend location plus the in-memory mirror of the
/// bearer token for the running session. The durable copy of the token
/// lives in [`crate::egui_app::session::SessionStore`].
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .build()
            .expect("default app config is valid");
        Self { app, token: None }
    }
}

impl Config {
    /// Create a new configuration, resolving the backend URL from the
    /// environment at startup
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app, token: None })
    }

    /// Set the bearer token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the bearer token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
