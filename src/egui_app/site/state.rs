//! Site State
//!
//! Application state for the holding-site client: the public showcase data,
//! the admin CMS forms and every in-flight site API call.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crate::egui_app::config::Config;
use crate::egui_app::context::AuthContext;
use crate::egui_app::debug::{DebugCategory, DebugLogger};
use crate::egui_app::route::SiteRoute;
use crate::egui_app::session::SessionStore;
use crate::egui_app::site::api::{PublicBundle, SiteApiClient};
use crate::shared::error::ApiError;
use crate::shared::site::{
    Company, CompanyCreate, CompanyUpdate, SiteConfig, SiteContent, SiteContentUpdate,
};

const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Active tab on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Companies,
    Content,
    Config,
}

/// Company create/edit form
#[derive(Debug, Clone, Default)]
pub struct CompanyForm {
    /// `Some` while editing an existing company
    pub editing_id: Option<String>,
    pub name: String,
    pub description: String,
    pub website: String,
    pub category: String,
    pub logo_url: String,
}

impl CompanyForm {
    pub fn from_company(company: &Company) -> Self {
        Self {
            editing_id: Some(company.id.clone()),
            name: company.name.clone(),
            description: company.description.clone(),
            website: company.website.clone().unwrap_or_default(),
            category: company.category.clone().unwrap_or_default(),
            logo_url: company.logo_url.clone().unwrap_or_default(),
        }
    }

    fn optional(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn to_create(&self) -> CompanyCreate {
        CompanyCreate {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            logo_url: Self::optional(&self.logo_url),
            website: Self::optional(&self.website),
            category: Self::optional(&self.category),
        }
    }

    pub fn to_update(&self) -> CompanyUpdate {
        CompanyUpdate {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            logo_url: Self::optional(&self.logo_url),
            website: Self::optional(&self.website),
            category: Self::optional(&self.category),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err("Name and description are required".to_string());
        }
        Ok(())
    }
}

/// Content section edit form
#[derive(Debug, Clone)]
pub struct ContentForm {
    pub section: String,
    pub title: String,
    pub content: String,
}

type BundleResult = Result<PublicBundle, ApiError>;
type OpResult = Result<String, ApiError>;

/// Which admin call is in flight, so its result can be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteOp {
    SaveCompany,
    SaveContent,
    DeleteCompany,
    UploadLogo,
}

/// Showcase data plus CMS working state
pub struct SiteState {
    pub companies: Vec<Company>,
    pub content: HashMap<String, SiteContent>,
    pub site_config: SiteConfig,
    pub public_loaded: bool,
    pub is_loading_public: bool,

    pub admin_tab: AdminTab,
    pub company_form: CompanyForm,
    pub company_form_error: Option<String>,
    /// Company id awaiting delete confirmation
    pub pending_delete: Option<String>,
    pub content_form: Option<ContentForm>,
    pub logo_path_input: String,

    message: Option<(bool, String, Instant)>,
    pending_public: Option<Receiver<BundleResult>>,
    pending_op: Option<(SiteOp, Receiver<OpResult>)>,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            companies: Vec::new(),
            content: HashMap::new(),
            site_config: SiteConfig::default(),
            public_loaded: false,
            is_loading_public: false,
            admin_tab: AdminTab::Companies,
            company_form: CompanyForm::default(),
            company_form_error: None,
            pending_delete: None,
            content_form: None,
            logo_path_input: String::new(),
            message: None,
            pending_public: None,
            pending_op: None,
        }
    }

    /// Drop CMS working state on logout; the public data stays, it is not
    /// session-scoped.
    pub fn reset_admin(&mut self) {
        self.admin_tab = AdminTab::Companies;
        self.company_form = CompanyForm::default();
        self.company_form_error = None;
        self.pending_delete = None;
        self.content_form = None;
        self.logo_path_input.clear();
        self.message = None;
        self.pending_op = None;
    }

    pub fn is_saving(&self) -> bool {
        self.pending_op.is_some()
    }

    pub fn message(&self) -> Option<(bool, &str)> {
        self.message
            .as_ref()
            .map(|(success, text, _)| (*success, text.as_str()))
    }

    pub fn show_message(&mut self, success: bool, text: impl Into<String>) {
        self.message = Some((success, text.into(), Instant::now()));
    }

    /// Section lookup for the public screen
    pub fn section(&self, key: &str) -> Option<&SiteContent> {
        self.content.get(key)
    }

    pub fn load_public(&mut self, config: &Config) {
        if self.pending_public.is_some() {
            return;
        }
        self.is_loading_public = true;

        let client = SiteApiClient::new(config.clone());
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(client.fetch_public_bundle());
        });
        self.pending_public = Some(rx);
    }

    /// Create or update depending on the form's editing state
    pub fn save_company(&mut self, config: &Config) {
        if self.pending_op.is_some() {
            return;
        }
        if let Err(error) = self.company_form.validate() {
            self.company_form_error = Some(error);
            return;
        }
        self.company_form_error = None;

        // The form is only cleared once the backend accepts the change, so
        // a rejection leaves the inputs in place for correction.
        let form = self.company_form.clone();
        self.spawn_op(config, SiteOp::SaveCompany, move |client| {
            match &form.editing_id {
                Some(id) => client
                    .update_company(id, &form.to_update())
                    .map(|company| format!("{} updated", company.name)),
                None => client
                    .create_company(&form.to_create())
                    .map(|company| format!("{} created", company.name)),
            }
        });
    }

    pub fn delete_company(&mut self, config: &Config, id: String) {
        if self.pending_op.is_some() {
            return;
        }
        self.pending_delete = None;
        self.spawn_op(config, SiteOp::DeleteCompany, move |client| {
            client.delete_company(&id).map(|()| "Company deleted".to_string())
        });
    }

    pub fn save_content(&mut self, config: &Config) {
        if self.pending_op.is_some() {
            return;
        }
        let Some(form) = self.content_form.clone() else {
            return;
        };
        if form.content.trim().is_empty() {
            self.show_message(false, "Content cannot be empty");
            return;
        }

        let update = SiteContentUpdate {
            title: if form.title.trim().is_empty() {
                None
            } else {
                Some(form.title.trim().to_string())
            },
            content: form.content.trim().to_string(),
        };
        let section = form.section;
        self.spawn_op(config, SiteOp::SaveContent, move |client| {
            client
                .update_section(&section, &update)
                .map(|updated| format!("Section '{}' updated", updated.section))
        });
    }

    pub fn upload_logo(&mut self, config: &Config) {
        if self.pending_op.is_some() {
            return;
        }
        let path = self.logo_path_input.trim().to_string();
        if path.is_empty() {
            self.show_message(false, "Enter the path of an image file first");
            return;
        }
        self.spawn_op(config, SiteOp::UploadLogo, move |client| {
            client
                .upload_logo(&path)
                .map(|response| format!("Logo updated ({})", response.logo_url))
        });
    }

    fn spawn_op(
        &mut self,
        config: &Config,
        op: SiteOp,
        call: impl FnOnce(SiteApiClient) -> OpResult + Send + 'static,
    ) {
        let client = SiteApiClient::new(config.clone());
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(call(client));
        });
        self.pending_op = Some((op, rx));
    }

    /// Drain in-flight results. A finished mutation schedules a refetch so
    /// the lists always show backend truth rather than locally patched
    /// copies.
    pub fn poll(&mut self, logger: &DebugLogger) {
        if let Some(rx) = self.pending_public.take() {
            match rx.try_recv() {
                Ok(Ok(bundle)) => {
                    logger.info(
                        DebugCategory::Api,
                        format!("loaded {} companies", bundle.companies.len()),
                    );
                    self.companies = bundle.companies;
                    self.content = bundle.content;
                    self.site_config = bundle.config;
                    self.is_loading_public = false;
                    self.public_loaded = true;
                }
                Ok(Err(err)) => {
                    logger.error(DebugCategory::Api, format!("public data failed: {}", err));
                    self.is_loading_public = false;
                    self.public_loaded = true;
                }
                Err(TryRecvError::Empty) => self.pending_public = Some(rx),
                Err(TryRecvError::Disconnected) => {
                    self.is_loading_public = false;
                    self.public_loaded = true;
                }
            }
        }

        if let Some((op, rx)) = self.pending_op.take() {
            match rx.try_recv() {
                Ok(Ok(message)) => {
                    self.apply_op(op);
                    self.show_message(true, message);
                    self.public_loaded = false;
                }
                Ok(Err(err)) => {
                    logger.error(DebugCategory::Api, format!("admin call failed: {}", err));
                    self.show_message(false, err.to_string());
                }
                Err(TryRecvError::Empty) => self.pending_op = Some((op, rx)),
                Err(TryRecvError::Disconnected) => {
                    self.show_message(false, "Request failed, please try again");
                }
            }
        }

        if let Some((_, _, since)) = &self.message {
            if since.elapsed() > MESSAGE_TTL {
                self.message = None;
            }
        }
    }

    fn apply_op(&mut self, op: SiteOp) {
        match op {
            SiteOp::SaveCompany => {
                self.company_form = CompanyForm::default();
                self.company_form_error = None;
            }
            SiteOp::SaveContent => {
                self.content_form = None;
            }
            SiteOp::UploadLogo => {
                self.logo_path_input.clear();
            }
            SiteOp::DeleteCompany => {}
        }
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

/// Central application state for the site app
pub struct SiteAppState {
    pub auth: AuthContext,
    pub route: SiteRoute,
    pub email_input: String,
    pub password_input: String,
    pub show_password: bool,
    pub login_error: Option<String>,
    pub site: SiteState,
    pub debug_logger: DebugLogger,
    pub debug_view_expanded: bool,
    pub debug_filter_category: Option<DebugCategory>,
}

impl SiteAppState {
    pub fn new() -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(DebugCategory::State, "site app starting");

        let auth = AuthContext::new(
            Config::new(),
            SessionStore::new("site"),
            debug_logger.clone(),
        );

        Self {
            auth,
            route: SiteRoute::Home,
            email_input: String::new(),
            password_input: String::new(),
            show_password: false,
            login_error: None,
            site: SiteState::new(),
            debug_logger,
            debug_view_expanded: false,
            debug_filter_category: None,
        }
    }

    pub fn poll(&mut self) {
        self.auth.poll();
        self.site.poll(&self.debug_logger);

        if self.auth.is_authenticated() && !self.password_input.is_empty() {
            self.password_input.clear();
            self.login_error = None;
        }
    }

    pub fn handle_login(&mut self) {
        if self.email_input.trim().is_empty() || self.password_input.is_empty() {
            self.login_error = Some("Email and password are required".to_string());
            return;
        }
        self.login_error = None;
        self.auth
            .login(self.email_input.trim().to_string(), self.password_input.clone());
    }

    pub fn logout(&mut self) {
        self.auth.logout();
        self.site.reset_admin();
        self.email_input.clear();
        self.password_input.clear();
        self.login_error = None;
        self.route = SiteRoute::Home;
    }
}

impl Default for SiteAppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        Company {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            description: "Widgets".to_string(),
            logo_url: None,
            website: Some("https://acme.example".to_string()),
            category: Some("Tech".to_string()),
        }
    }

    #[test]
    fn form_round_trips_a_company() {
        let form = CompanyForm::from_company(&company());
        assert_eq!(form.editing_id.as_deref(), Some("c1"));
        let update = form.to_update();
        assert_eq!(update.name.as_deref(), Some("Acme"));
        assert_eq!(update.website.as_deref(), Some("https://acme.example"));
        assert_eq!(update.logo_url, None);
    }

    #[test]
    fn empty_optional_fields_serialize_as_absent() {
        let form = CompanyForm {
            name: "Acme".to_string(),
            description: "Widgets".to_string(),
            ..Default::default()
        };
        let create = form.to_create();
        assert_eq!(create.website, None);
        assert_eq!(create.category, None);
    }

    #[test]
    fn form_requires_name_and_description() {
        let form = CompanyForm {
            name: "Acme".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn reset_admin_keeps_public_data() {
        let mut state = SiteState::new();
        state.companies = vec![company()];
        state.public_loaded = true;
        state.pending_delete = Some("c1".to_string());
        state.reset_admin();
        assert_eq!(state.companies.len(), 1);
        assert!(state.public_loaded);
        assert_eq!(state.pending_delete, None);
    }
}
