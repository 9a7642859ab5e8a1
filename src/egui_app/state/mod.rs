use crate::egui_app::config::Config;
use crate::egui_app::context::AuthContext;
use crate::egui_app::debug::{DebugCategory, DebugLogger};
use crate::egui_app::route::WalletRoute;
use crate::egui_app::session::SessionStore;
use crate::egui_app::wallet::WalletState;
use crate::shared::user::RegisterRequest;

/// Registration form inputs; the masked fields hold their masked value
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub cpf: String,
    pub rg: String,
    pub phone: String,
    pub birth_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub error: Option<String>,
}

impl RegisterForm {
    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            cpf: self.cpf.clone(),
            rg: self.rg.clone(),
            phone: self.phone.clone(),
            birth_date: self.birth_date.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            password: self.password.clone(),
        }
    }

    /// Client-side checks before the request goes out
    fn validate(&self) -> Result<(), String> {
        let required = [
            (&self.full_name, "full name"),
            (&self.email, "email"),
            (&self.cpf, "CPF"),
            (&self.rg, "RG"),
            (&self.phone, "phone"),
            (&self.birth_date, "birth date"),
            (&self.address, "address"),
            (&self.city, "city"),
            (&self.state, "state"),
            (&self.postal_code, "postal code"),
        ];
        for (value, name) in required {
            if value.trim().is_empty() {
                return Err(format!("Please fill in your {}", name));
            }
        }
        if !self.email.contains('@') || !self.email.contains('.') {
            return Err("Please enter a valid email address".to_string());
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters".to_string());
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

/// Central application state for the wallet app
pub struct AppState {
    pub auth: AuthContext,
    pub route: WalletRoute,
    pub email_input: String,
    pub password_input: String,
    pub show_password: bool,
    pub login_error: Option<String>,
    pub register_form: RegisterForm,
    pub wallet: WalletState,
    pub debug_logger: DebugLogger,
    pub debug_view_expanded: bool,
    pub debug_filter_category: Option<DebugCategory>,
}

impl AppState {
    pub fn new() -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(DebugCategory::State, "wallet app starting");

        let auth = AuthContext::new(
            Config::new(),
            SessionStore::new("wallet"),
            debug_logger.clone(),
        );

        Self {
            auth,
            route: WalletRoute::Login,
            email_input: String::new(),
            password_input: String::new(),
            show_password: false,
            login_error: None,
            register_form: RegisterForm::default(),
            wallet: WalletState::new(),
            debug_logger,
            debug_view_expanded: false,
            debug_filter_category: None,
        }
    }

    /// Drain every in-flight result. Called once per frame before rendering.
    pub fn poll(&mut self) {
        self.auth.poll();
        self.wallet.poll(&self.debug_logger);

        if self.auth.take_registered() {
            self.register_form.password.clear();
            self.register_form.confirm_password.clear();
            self.register_form.error = None;
            self.route = WalletRoute::Login;
        }

        // A successful login leaves the form behind; failed attempts keep
        // the inputs for correction.
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

    pub fn handle_register(&mut self) {
        match self.register_form.validate() {
            Ok(()) => {
                self.register_form.error = None;
                self.auth.register(self.register_form.to_request());
            }
            Err(message) => {
                self.register_form.error = Some(message);
            }
        }
    }

    pub fn logout(&mut self) {
        self.auth.logout();
        self.wallet.reset();
        self.email_input.clear();
        self.password_input.clear();
        self.login_error = None;
        self.register_form = RegisterForm::default();
        self.route = WalletRoute::Login;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            full_name: "Maria da Silva".to_string(),
            email: "maria@example.com".to_string(),
            cpf: "123.456.789-01".to_string(),
            rg: "12.345.678-9".to_string(),
            phone: "(11) 99999-8888".to_string(),
            birth_date: "1990-04-12".to_string(),
            address: "Rua das Flores, 123".to_string(),
            city: "Sao Paulo".to_string(),
            state: "SP".to_string(),
            postal_code: "01310-100".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn short_password_is_rejected() {
        let mut form = valid_form();
        form.password = "12345".to_string();
        form.confirm_password = "12345".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let mut form = valid_form();
        form.confirm_password = "different".to_string();
        assert_eq!(form.validate().unwrap_err(), "Passwords do not match");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut form = valid_form();
        form.city = String::new();
        assert_eq!(form.validate().unwrap_err(), "Please fill in your city");
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            "Please enter a valid email address"
        );
    }
}
