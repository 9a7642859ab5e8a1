/**
 * Authentication Module
 *
 * HTTP client functions for the auth endpoints. These do network I/O only;
 * applying results to the session is the AuthContext's job.
 */

use crate::egui_app::config::Config;
use crate::shared::error::extract_detail;
use crate::shared::user::{LoginRequest, LoginResponse, RegisterRequest, UserProfile};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::Runtime;

/// Authentication failures, by how the caller reacts to them
#[derive(Debug, Error, Clone)]
pub enum AuthError {
    /// Token missing, expired or rejected during verification. Handled by
    /// silently demoting to logged-out; never shown to the user.
    #[error("session expired or token rejected")]
    Unauthorized,

    /// Login rejected
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Registration rejected
    #[error("{0}")]
    Validation(String),

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),
}

fn runtime() -> Result<Runtime, AuthError> {
    Runtime::new().map_err(|e| AuthError::Network(format!("failed to create runtime: {}", e)))
}

/// Validate a stored token against the backend and fetch the profile.
///
/// Every non-success status collapses to `Unauthorized`: the caller purges
/// the session the same way whether the token expired, was malformed or
/// was revoked.
pub fn verify(config: &Config, token: &str) -> Result<UserProfile, AuthError> {
    let client = Client::new();
    let url = config.api_url("/api/auth/me");
    let token = token.to_string();

    runtime()?.block_on(async {
        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Unauthorized);
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| AuthError::Network(format!("failed to parse profile: {}", e)))
    })
}

/// Exchange credentials for a token, then fetch the profile with it.
///
/// The two requests form one logical operation: a login that cannot also
/// produce the profile is reported as a failure.
pub fn login(
    config: &Config,
    email: String,
    password: String,
) -> Result<(String, UserProfile), AuthError> {
    let client = Client::new();
    let login_url = config.api_url("/api/auth/login");
    let me_url = config.api_url("/api/auth/me");

    let request = LoginRequest { email, password };

    runtime()?.block_on(async {
        let response = client
            .post(&login_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidCredentials);
        }

        let login_response: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Network(format!("failed to parse response: {}", e)))?;
        let token = login_response.access_token;

        let me_response = client
            .get(&me_url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !me_response.status().is_success() {
            return Err(AuthError::InvalidCredentials);
        }

        let user: UserProfile = me_response
            .json()
            .await
            .map_err(|e| AuthError::Network(format!("failed to parse profile: {}", e)))?;

        Ok((token, user))
    })
}

/// Create an account. Does not authenticate the caller; a successful
/// registration still requires a normal login.
pub fn register(config: &Config, request: &RegisterRequest) -> Result<(), AuthError> {
    let client = Client::new();
    let url = config.api_url("/api/auth/register");

    runtime()?.block_on(async {
        let response = client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(&body)
                .unwrap_or_else(|| format!("registration failed ({})", status));
            return Err(AuthError::Validation(detail));
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use assert_matches::assert_matches;

    fn config_for(server: &mockito::ServerGuard) -> Config {
        Config::with_builder(AppConfig::builder().server_url(server.url())).unwrap()
    }

    const PROFILE_BODY: &str = r#"{
        "id": "u1",
        "email": "user@example.com",
        "full_name": "Test User",
        "balance": 10.0,
        "premium": false,
        "two_factor_enabled": false
    }"#;

    #[test]
    fn verify_returns_profile_on_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/auth/me")
            .match_header("authorization", "Bearer tok1")
            .with_status(200)
            .with_body(PROFILE_BODY)
            .create();

        let user = verify(&config_for(&server), "tok1").unwrap();
        assert_eq!(user.email, "user@example.com");
        mock.assert();
    }

    #[test]
    fn verify_maps_any_rejection_to_unauthorized() {
        let mut server = mockito::Server::new();
        for status in [401, 403, 500] {
            let _mock = server
                .mock("GET", "/api/auth/me")
                .with_status(status)
                .create();
            let result = verify(&config_for(&server), "stale");
            assert_matches!(result, Err(AuthError::Unauthorized));
        }
    }

    #[test]
    fn login_exchanges_credentials_and_fetches_profile() {
        let mut server = mockito::Server::new();
        let _login = server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(r#"{"access_token": "tok1"}"#)
            .create();
        let _me = server
            .mock("GET", "/api/auth/me")
            .match_header("authorization", "Bearer tok1")
            .with_status(200)
            .with_body(PROFILE_BODY)
            .create();

        let (token, user) = login(
            &config_for(&server),
            "user@example.com".to_string(),
            "secret".to_string(),
        )
        .unwrap();
        assert_eq!(token, "tok1");
        assert_eq!(user.id, "u1");
    }

    #[test]
    fn login_rejection_is_invalid_credentials() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"detail": "Invalid credentials"}"#)
            .create();

        let result = login(
            &config_for(&server),
            "user@example.com".to_string(),
            "wrong".to_string(),
        );
        assert_matches!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn register_success_carries_no_token() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/auth/register")
            .with_status(200)
            .with_body(r#"{"message": "created"}"#)
            .create();

        let request = RegisterRequest {
            email: "new@example.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(register(&config_for(&server), &request).is_ok());
    }

    #[test]
    fn register_rejection_surfaces_backend_detail() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/auth/register")
            .with_status(400)
            .with_body(r#"{"detail": "Email already registered"}"#)
            .create();

        let result = register(&config_for(&server), &RegisterRequest::default());
        match result {
            Err(AuthError::Validation(detail)) => assert_eq!(detail, "Email already registered"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
