//! Shared Module
//!
//! Types and data structures shared between the wallet and site clients
//! and, shape-wise, with the REST backend. Everything here is plain data
//! designed for JSON serialization.

/// Account, auth and security types
pub mod user;

/// Wallet transactions
pub mod wallet;

/// Holding-site content and companies
pub mod site;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ApiError;
pub use user::{RegisterRequest, SecuritySettings, TwoFactorMethod, UserProfile};
pub use wallet::{Transaction, TransactionKind};
