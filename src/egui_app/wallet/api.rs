//! Wallet API Client
//!
//! Authenticated calls for the dashboard and the account settings screens.

use crate::egui_app::config::Config;
use crate::shared::error::ApiError;
use crate::shared::user::{
    BiometricToggle, MessageResponse, PersonalDataUpdate, SecuritySettings, TwoFactorMethod,
    TwoFactorToggle, VerifyCodeRequest,
};
use crate::shared::wallet::Transaction;
use reqwest::{Client, Response};
use tokio::runtime::Runtime;

/// Wallet API client
pub struct WalletApiClient {
    config: Config,
    client: Client,
}

async fn success_or_error(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

impl WalletApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn runtime() -> Result<Runtime, ApiError> {
        Runtime::new().map_err(|e| ApiError::network(format!("failed to create runtime: {}", e)))
    }

    fn bearer(&self) -> Result<String, ApiError> {
        let token = self.config.get_token().ok_or(ApiError::Unauthorized)?;
        Ok(format!("Bearer {}", token))
    }

    /// Fetch the transaction history, newest first
    pub fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = self.config.api_url("/api/transactions");
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .get(&url)
                .header("Authorization", &bearer)
                .send()
                .await?;
            let response = success_or_error(response).await?;
            let mut transactions: Vec<Transaction> = response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))?;
            transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(transactions)
        })
    }

    /// Fetch the current 2FA and biometric settings
    pub fn security_settings(&self) -> Result<SecuritySettings, ApiError> {
        let url = self.config.api_url("/api/user/security-settings");
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .get(&url)
                .header("Authorization", &bearer)
                .send()
                .await?;
            let response = success_or_error(response).await?;
            response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// Update contact and address data. The backend re-checks the password
    /// carried in the body before applying anything.
    pub fn update_personal_data(&self, update: &PersonalDataUpdate) -> Result<(), ApiError> {
        let url = self.config.api_url("/api/user/update-data");
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .put(&url)
                .header("Authorization", &bearer)
                .json(update)
                .send()
                .await?;
            success_or_error(response).await?;
            Ok(())
        })
    }

    /// Enable or disable two-factor authentication
    pub fn toggle_two_factor(
        &self,
        enable: bool,
        method: Option<TwoFactorMethod>,
    ) -> Result<String, ApiError> {
        let url = self.config.api_url("/api/user/enable-2fa");
        let bearer = self.bearer()?;
        let body = TwoFactorToggle { enable, method };

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", &bearer)
                .json(&body)
                .send()
                .await?;
            let response = success_or_error(response).await?;
            let ack: MessageResponse = response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))?;
            Ok(ack.message)
        })
    }

    /// Ask the backend to email a verification code
    pub fn send_email_code(&self) -> Result<(), ApiError> {
        let url = self.config.api_url("/api/user/send-email-2fa");
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", &bearer)
                .json(&serde_json::json!({}))
                .send()
                .await?;
            success_or_error(response).await?;
            Ok(())
        })
    }

    /// Submit a 2FA code for verification
    pub fn verify_code(&self, code: String) -> Result<(), ApiError> {
        let url = self.config.api_url("/api/user/verify-2fa");
        let bearer = self.bearer()?;
        let body = VerifyCodeRequest { code };

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", &bearer)
                .json(&body)
                .send()
                .await?;
            success_or_error(response).await?;
            Ok(())
        })
    }

    /// Enable or disable biometric login
    pub fn toggle_biometric(&self, enable: bool) -> Result<(), ApiError> {
        let url = self.config.api_url("/api/user/biometric");
        let bearer = self.bearer()?;
        let body = BiometricToggle { enable };

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", &bearer)
                .json(&body)
                .send()
                .await?;
            success_or_error(response).await?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use assert_matches::assert_matches;

    fn client_for(server: &mockito::ServerGuard, token: Option<&str>) -> WalletApiClient {
        let mut config =
            Config::with_builder(AppConfig::builder().server_url(server.url())).unwrap();
        config.set_token(token.map(|t| t.to_string()));
        WalletApiClient::new(config)
    }

    #[test]
    fn missing_token_short_circuits_to_unauthorized() {
        let server = mockito::Server::new();
        let client = client_for(&server, None);
        assert_matches!(client.fetch_transactions(), Err(ApiError::Unauthorized));
    }

    #[test]
    fn transactions_are_sorted_newest_first() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/transactions")
            .match_header("authorization", "Bearer tok1")
            .with_status(200)
            .with_body(
                r#"[
                {"id": "t1", "tipo": "deposito", "descricao": "Deposito", "valor": 100.0,
                 "status": "concluido", "created_at": "2025-06-01T10:00:00Z"},
                {"id": "t2", "tipo": "pix", "descricao": "PIX", "valor": 50.0,
                 "status": "concluido", "created_at": "2025-06-03T10:00:00Z"}
            ]"#,
            )
            .create();

        let client = client_for(&server, Some("tok1"));
        let transactions = client.fetch_transactions().unwrap();
        assert_eq!(transactions[0].id, "t2");
        assert_eq!(transactions[1].id, "t1");
    }

    #[test]
    fn rejected_code_surfaces_detail() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/user/verify-2fa")
            .with_status(400)
            .with_body(r#"{"detail": "Invalid code"}"#)
            .create();

        let client = client_for(&server, Some("tok1"));
        let result = client.verify_code("000000".to_string());
        match result {
            Err(ApiError::Rejected { detail }) => assert_eq!(detail, "Invalid code"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn expired_token_maps_to_unauthorized() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/user/security-settings")
            .with_status(401)
            .create();

        let client = client_for(&server, Some("stale"));
        assert_matches!(client.security_settings(), Err(ApiError::Unauthorized));
    }
}
