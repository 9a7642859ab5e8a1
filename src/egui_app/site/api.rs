//! Site API Client
//!
//! Public reads for the showcase screen and authenticated CMS calls for
//! the admin dashboard, including the multipart logo upload.

use std::collections::HashMap;
use std::path::Path;

use crate::egui_app::config::Config;
use crate::shared::error::ApiError;
use crate::shared::site::{
    Company, CompanyCreate, CompanyUpdate, SiteConfig, SiteContent, SiteContentUpdate,
    UploadResponse,
};
use reqwest::{Client, Response};
use tokio::runtime::Runtime;

/// Everything the public home screen needs, fetched in one go
#[derive(Debug, Clone, Default)]
pub struct PublicBundle {
    pub companies: Vec<Company>,
    pub content: HashMap<String, SiteContent>,
    pub config: SiteConfig,
}

/// Site API client
pub struct SiteApiClient {
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

impl SiteApiClient {
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

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.config.api_url(path)).send().await?;
        let response = success_or_error(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// Companies, content sections and site configuration for the public
    /// screen. No authentication needed.
    pub fn fetch_public_bundle(&self) -> Result<PublicBundle, ApiError> {
        Self::runtime()?.block_on(async {
            let companies: Vec<Company> = self.get_json("/api/companies").await?;
            let sections: Vec<SiteContent> = self.get_json("/api/content").await?;
            let config: SiteConfig = self.get_json("/api/config").await?;

            let content = sections
                .into_iter()
                .map(|section| (section.section.clone(), section))
                .collect();

            Ok(PublicBundle {
                companies,
                content,
                config,
            })
        })
    }

    pub fn create_company(&self, company: &CompanyCreate) -> Result<Company, ApiError> {
        let url = self.config.api_url("/api/companies");
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", &bearer)
                .json(company)
                .send()
                .await?;
            let response = success_or_error(response).await?;
            response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    pub fn update_company(&self, id: &str, update: &CompanyUpdate) -> Result<Company, ApiError> {
        let url = self.config.api_url(&format!("/api/companies/{}", id));
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .put(&url)
                .header("Authorization", &bearer)
                .json(update)
                .send()
                .await?;
            let response = success_or_error(response).await?;
            response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    pub fn delete_company(&self, id: &str) -> Result<(), ApiError> {
        let url = self.config.api_url(&format!("/api/companies/{}", id));
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .delete(&url)
                .header("Authorization", &bearer)
                .send()
                .await?;
            success_or_error(response).await?;
            Ok(())
        })
    }

    pub fn update_section(
        &self,
        section: &str,
        update: &SiteContentUpdate,
    ) -> Result<SiteContent, ApiError> {
        let url = self.config.api_url(&format!("/api/content/{}", section));
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .put(&url)
                .header("Authorization", &bearer)
                .json(update)
                .send()
                .await?;
            let response = success_or_error(response).await?;
            response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    pub fn update_config(&self, config: &SiteConfig) -> Result<SiteConfig, ApiError> {
        let url = self.config.api_url("/api/config");
        let bearer = self.bearer()?;

        Self::runtime()?.block_on(async {
            let response = self
                .client
                .put(&url)
                .header("Authorization", &bearer)
                .json(config)
                .send()
                .await?;
            let response = success_or_error(response).await?;
            response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// Upload the site logo from a local file
    pub fn upload_logo(&self, path: &str) -> Result<UploadResponse, ApiError> {
        self.upload_image("/api/upload/logo", path)
    }

    /// Upload a company logo from a local file
    pub fn upload_company_logo(&self, path: &str) -> Result<UploadResponse, ApiError> {
        self.upload_image("/api/upload/company-logo", path)
    }

    fn upload_image(&self, endpoint: &str, path: &str) -> Result<UploadResponse, ApiError> {
        let url = self.config.api_url(endpoint);
        let bearer = self.bearer()?;

        let bytes = std::fs::read(path)
            .map_err(|e| ApiError::network(format!("failed to read {}: {}", path, e)))?;
        let file_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "logo".to_string());
        let mime = mime_for(&file_name);

        Self::runtime()?.block_on(async {
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(mime)
                .map_err(|e| ApiError::decode(e.to_string()))?;
            let form = reqwest::multipart::Form::new().part("file", part);

            let response = self
                .client
                .post(&url)
                .header("Authorization", &bearer)
                .multipart(form)
                .send()
                .await?;
            let response = success_or_error(response).await?;
            response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }
}

/// The backend only accepts images; anything unrecognized is rejected
/// client-side with a generic type the server will refuse too.
fn mime_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use assert_matches::assert_matches;

    fn client_for(server: &mockito::ServerGuard, token: Option<&str>) -> SiteApiClient {
        let mut config =
            Config::with_builder(AppConfig::builder().server_url(server.url())).unwrap();
        config.set_token(token.map(|t| t.to_string()));
        SiteApiClient::new(config)
    }

    #[test]
    fn public_bundle_requires_no_token() {
        let mut server = mockito::Server::new();
        let _companies = server
            .mock("GET", "/api/companies")
            .with_status(200)
            .with_body(r#"[{"id": "c1", "name": "Acme", "description": "Widgets"}]"#)
            .create();
        let _content = server
            .mock("GET", "/api/content")
            .with_status(200)
            .with_body(r#"[{"section": "hero", "title": "NovaPay", "content": "Welcome"}]"#)
            .create();
        let _config = server
            .mock("GET", "/api/config")
            .with_status(200)
            .with_body("{}")
            .create();

        let bundle = client_for(&server, None).fetch_public_bundle().unwrap();
        assert_eq!(bundle.companies.len(), 1);
        assert_eq!(bundle.content["hero"].content, "Welcome");
        assert_eq!(bundle.config.primary_color, "#8B5CF6");
    }

    #[test]
    fn mutations_without_token_are_unauthorized() {
        let server = mockito::Server::new();
        let client = client_for(&server, None);
        let result = client.delete_company("c1");
        assert_matches!(result, Err(ApiError::Unauthorized));
    }

    #[test]
    fn delete_missing_company_is_not_found() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("DELETE", "/api/companies/ghost")
            .with_status(404)
            .with_body(r#"{"detail": "Company not found"}"#)
            .create();

        let client = client_for(&server, Some("tok1"));
        assert_matches!(client.delete_company("ghost"), Err(ApiError::NotFound));
    }

    #[test]
    fn mime_detection() {
        assert_eq!(mime_for("logo.PNG"), "image/png");
        assert_eq!(mime_for("logo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("archive.zip"), "application/octet-stream");
    }
}
