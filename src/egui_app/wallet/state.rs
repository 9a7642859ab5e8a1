//! Wallet State
//!
//! Dashboard and settings state for the wallet app: transaction history,
//! the settings tabs and every in-flight wallet API call.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crate::egui_app::config::Config;
use crate::egui_app::debug::{DebugCategory, DebugLogger};
use crate::egui_app::wallet::api::WalletApiClient;
use crate::shared::error::ApiError;
use crate::shared::user::{PersonalDataUpdate, SecuritySettings, TwoFactorMethod};
use crate::shared::wallet::{Transaction, TransactionKind};

/// Settings screen messages disappear after this long
const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Active tab on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Personal,
    Security,
    Biometric,
}

/// Personal-data form inputs
#[derive(Debug, Clone, Default)]
pub struct PersonalForm {
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub password_confirmation: String,
    pub show_password: bool,
}

/// Which settings call is in flight, so its result can be applied
#[derive(Debug, Clone)]
pub enum SettingsOp {
    Personal,
    TwoFactor {
        enable: bool,
        method: Option<TwoFactorMethod>,
    },
    EmailCode,
    VerifyCode,
    Biometric {
        enable: bool,
    },
}

type TransactionsResult = Result<Vec<Transaction>, ApiError>;
type SecurityResult = Result<SecuritySettings, ApiError>;
type OpResult = Result<String, ApiError>;

/// The main state for the wallet screens
pub struct WalletState {
    pub transactions: Vec<Transaction>,
    pub filter: Option<TransactionKind>,
    pub show_balance: bool,
    pub is_loading_transactions: bool,
    pub transactions_loaded: bool,

    pub settings_tab: SettingsTab,
    pub personal: PersonalForm,
    pub security: SecuritySettings,
    pub security_loaded: bool,
    pub code_input: String,
    /// Set after enabling the authenticator-app method, until the first
    /// code is confirmed
    pub totp_enrolling: bool,

    message: Option<(bool, String, Instant)>,

    pending_transactions: Option<Receiver<TransactionsResult>>,
    pending_security: Option<Receiver<SecurityResult>>,
    pending_op: Option<(SettingsOp, Receiver<OpResult>)>,
}

impl WalletState {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            filter: None,
            show_balance: true,
            is_loading_transactions: false,
            transactions_loaded: false,
            settings_tab: SettingsTab::Personal,
            personal: PersonalForm::default(),
            security: SecuritySettings::default(),
            security_loaded: false,
            code_input: String::new(),
            totp_enrolling: false,
            message: None,
            pending_transactions: None,
            pending_security: None,
            pending_op: None,
        }
    }

    /// Forget everything on logout
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Transactions passing the active kind filter, newest first
    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| self.filter.map(|kind| tx.kind == kind).unwrap_or(true))
            .collect()
    }

    pub fn is_saving(&self) -> bool {
        self.pending_op.is_some()
    }

    /// Current settings-screen message, if not expired
    pub fn message(&self) -> Option<(bool, &str)> {
        self.message
            .as_ref()
            .map(|(success, text, _)| (*success, text.as_str()))
    }

    pub fn show_message(&mut self, success: bool, text: impl Into<String>) {
        self.message = Some((success, text.into(), Instant::now()));
    }

    pub fn load_transactions(&mut self, config: &Config) {
        if self.pending_transactions.is_some() {
            return;
        }
        self.is_loading_transactions = true;

        let client = WalletApiClient::new(config.clone());
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(client.fetch_transactions());
        });
        self.pending_transactions = Some(rx);
    }

    pub fn load_security_settings(&mut self, config: &Config) {
        if self.pending_security.is_some() {
            return;
        }

        let client = WalletApiClient::new(config.clone());
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(client.security_settings());
        });
        self.pending_security = Some(rx);
    }

    pub fn save_personal_data(&mut self, config: &Config) {
        if self.pending_op.is_some() {
            return;
        }
        if self.personal.password_confirmation.is_empty() {
            self.show_message(false, "Confirm your password to save changes");
            return;
        }

        let update = PersonalDataUpdate {
            phone: self.personal.phone.clone(),
            address: self.personal.address.clone(),
            city: self.personal.city.clone(),
            state: self.personal.state.clone(),
            password_confirmation: self.personal.password_confirmation.clone(),
        };
        self.spawn_op(config, SettingsOp::Personal, move |client| {
            client
                .update_personal_data(&update)
                .map(|()| "Personal data updated".to_string())
        });
    }

    pub fn toggle_two_factor(&mut self, config: &Config, enable: bool, method: Option<TwoFactorMethod>) {
        if self.pending_op.is_some() {
            return;
        }
        self.spawn_op(
            config,
            SettingsOp::TwoFactor { enable, method },
            move |client| client.toggle_two_factor(enable, method),
        );
    }

    pub fn send_email_code(&mut self, config: &Config) {
        if self.pending_op.is_some() {
            return;
        }
        self.spawn_op(config, SettingsOp::EmailCode, move |client| {
            client
                .send_email_code()
                .map(|()| "Verification code sent by email".to_string())
        });
    }

    pub fn verify_code(&mut self, config: &Config) {
        if self.pending_op.is_some() || self.code_input.is_empty() {
            return;
        }
        let code = self.code_input.clone();
        self.spawn_op(config, SettingsOp::VerifyCode, move |client| {
            client
                .verify_code(code)
                .map(|()| "Code verified".to_string())
        });
    }

    pub fn toggle_biometric(&mut self, config: &Config, enable: bool) {
        if self.pending_op.is_some() {
            return;
        }
        self.spawn_op(config, SettingsOp::Biometric { enable }, move |client| {
            client.toggle_biometric(enable).map(|()| {
                if enable {
                    "Biometric login enabled".to_string()
                } else {
                    "Biometric login disabled".to_string()
                }
            })
        });
    }

    fn spawn_op(
        &mut self,
        config: &Config,
        op: SettingsOp,
        call: impl FnOnce(WalletApiClient) -> OpResult + Send + 'static,
    ) {
        let client = WalletApiClient::new(config.clone());
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(call(client));
        });
        self.pending_op = Some((op, rx));
    }

    /// Drain in-flight results and expire the message. Called once per frame.
    pub fn poll(&mut self, logger: &DebugLogger) {
        if let Some(rx) = self.pending_transactions.take() {
            match rx.try_recv() {
                Ok(Ok(transactions)) => {
                    logger.info(
                        DebugCategory::Api,
                        format!("loaded {} transactions", transactions.len()),
                    );
                    self.transactions = transactions;
                    self.is_loading_transactions = false;
                    self.transactions_loaded = true;
                }
                Ok(Err(err)) => {
                    logger.error(DebugCategory::Api, format!("transactions failed: {}", err));
                    self.is_loading_transactions = false;
                    self.transactions_loaded = true;
                }
                Err(TryRecvError::Empty) => self.pending_transactions = Some(rx),
                Err(TryRecvError::Disconnected) => {
                    self.is_loading_transactions = false;
                    self.transactions_loaded = true;
                }
            }
        }

        if let Some(rx) = self.pending_security.take() {
            match rx.try_recv() {
                Ok(Ok(settings)) => {
                    self.security = settings;
                    self.security_loaded = true;
                }
                Ok(Err(err)) => {
                    logger.error(DebugCategory::Api, format!("security settings failed: {}", err));
                    self.security_loaded = true;
                }
                Err(TryRecvError::Empty) => self.pending_security = Some(rx),
                Err(TryRecvError::Disconnected) => self.security_loaded = true,
            }
        }

        if let Some((op, rx)) = self.pending_op.take() {
            match rx.try_recv() {
                Ok(Ok(message)) => {
                    self.apply_op(&op);
                    self.show_message(true, message);
                }
                Ok(Err(err)) => {
                    logger.error(DebugCategory::Api, format!("settings call failed: {}", err));
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

    fn apply_op(&mut self, op: &SettingsOp) {
        match op {
            SettingsOp::Personal => {
                self.personal.password_confirmation.clear();
            }
            SettingsOp::TwoFactor { enable, method } => {
                self.security.two_factor_enabled = *enable;
                self.security.two_factor_method = if *enable { *method } else { None };
                self.totp_enrolling = *enable && *method == Some(TwoFactorMethod::Totp);
            }
            SettingsOp::EmailCode => {}
            SettingsOp::VerifyCode => {
                self.code_input.clear();
                self.totp_enrolling = false;
            }
            SettingsOp::Biometric { enable } => {
                self.security.biometric_enabled = *enable;
            }
        }
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn transaction(id: &str, kind: TransactionKind) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind,
            description: "test".to_string(),
            amount: 10.0,
            status: "concluido".to_string(),
            cashback: None,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn filter_none_passes_everything() {
        let mut state = WalletState::new();
        state.transactions = vec![
            transaction("t1", TransactionKind::Deposit),
            transaction("t2", TransactionKind::Pix),
        ];
        assert_eq!(state.filtered_transactions().len(), 2);
    }

    #[test]
    fn filter_by_kind() {
        let mut state = WalletState::new();
        state.transactions = vec![
            transaction("t1", TransactionKind::Deposit),
            transaction("t2", TransactionKind::Pix),
            transaction("t3", TransactionKind::Pix),
        ];
        state.filter = Some(TransactionKind::Pix);
        let filtered = state.filtered_transactions();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|tx| tx.kind == TransactionKind::Pix));
    }

    #[test]
    fn reset_clears_loaded_data() {
        let mut state = WalletState::new();
        state.transactions = vec![transaction("t1", TransactionKind::Deposit)];
        state.transactions_loaded = true;
        state.show_balance = false;
        state.reset();
        assert!(state.transactions.is_empty());
        assert!(!state.transactions_loaded);
        assert!(state.show_balance);
    }

    #[test]
    fn two_factor_result_applies_to_state() {
        let mut state = WalletState::new();
        state.apply_op(&SettingsOp::TwoFactor {
            enable: true,
            method: Some(TwoFactorMethod::Totp),
        });
        assert!(state.security.two_factor_enabled);
        assert!(state.totp_enrolling);

        state.apply_op(&SettingsOp::VerifyCode);
        assert!(!state.totp_enrolling);

        state.apply_op(&SettingsOp::TwoFactor {
            enable: false,
            method: None,
        });
        assert!(!state.security.two_factor_enabled);
        assert_eq!(state.security.two_factor_method, None);
    }
}
