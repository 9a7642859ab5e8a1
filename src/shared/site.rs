//! Holding-site domain types
//!
//! Companies, editable page content sections and the site configuration
//! managed through the admin CMS. Public reads use the same shapes.

use serde::{Deserialize, Serialize};

/// A portfolio company shown on the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body for `POST /api/companies`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyCreate {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Body for `PUT /api/companies/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One editable content section of the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub section: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
}

/// Body for `PUT /api/content/{section}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
}

/// Site-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default = "default_primary")]
    pub primary_color: String,
    #[serde(default = "default_secondary")]
    pub secondary_color: String,
    #[serde(default = "default_accent")]
    pub accent_color: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            logo_url: None,
            primary_color: default_primary(),
            secondary_color: default_secondary(),
            accent_color: default_accent(),
        }
    }
}

fn default_primary() -> String {
    "#8B5CF6".to_string()
}

fn default_secondary() -> String {
    "#06B6D4".to_string()
}

fn default_accent() -> String {
    "#14B8A6".to_string()
}

/// Success shape of the logo upload endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub logo_url: String,
}

/// The editable content section keys, in page order
pub const CONTENT_SECTIONS: [(&str, &str); 4] = [
    ("hero", "Hero"),
    ("about", "About"),
    ("differentials", "Differentials"),
    ("footer", "Footer"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_optional_fields_default() {
        let json = r#"{"id": "c1", "name": "Acme", "description": "Widgets"}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.logo_url, None);
        assert_eq!(company.website, None);
        assert_eq!(company.category, None);
    }

    #[test]
    fn update_skips_absent_fields() {
        let update = CompanyUpdate {
            name: Some("Acme Labs".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"name":"Acme Labs"}"#);
    }

    #[test]
    fn site_config_defaults() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.primary_color, "#8B5CF6");
        assert_eq!(config.secondary_color, "#06B6D4");
        assert_eq!(config.accent_color, "#14B8A6");
        assert_eq!(config.logo_url, None);
    }

    #[test]
    fn content_sections_cover_page() {
        let keys: Vec<&str> = CONTENT_SECTIONS.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["hero", "about", "differentials", "footer"]);
    }
}
