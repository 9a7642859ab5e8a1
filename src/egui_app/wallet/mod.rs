//! Wallet feature module
//!
//! API client and screen state for the wallet dashboard and account
//! settings.

pub mod api;
pub mod state;

pub use api::WalletApiClient;
pub use state::{SettingsTab, WalletState};
