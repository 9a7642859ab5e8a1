//! egui Native Desktop Clients
//!
//! This module contains everything client-side: the shared auth/session
//! core and the two app binaries built on top of it.
//!
//! # Architecture
//!
//! - **`config`** - Backend location and the in-memory token mirror
//! - **`session`** - Durable token persistence (one file per app namespace)
//! - **`auth`** - Auth HTTP client functions (verify / login / register)
//! - **`context`** - The session state machine and notice queue
//! - **`route`** - Route gates and the guard resolution
//! - **`masks`** - Input masks and display formatting
//! - **`wallet`** - Wallet API client and dashboard/settings state
//! - **`site`** - Holding-site API client, CMS state and views
//! - **`state`** / **`views`** - Wallet app state and screens
//! - **`theme`** - Colors and styling helpers
//! - **`debug`** - In-app log ring buffer
//!
//! Two binaries share this module: `wallet_app` (`main.rs`) and
//! `site_app` (`site_main.rs`).

pub mod auth;
pub mod config;
pub mod context;
pub mod debug;
pub mod masks;
pub mod route;
pub mod session;
pub mod site;
pub mod state;
pub mod theme;
pub mod views;
pub mod wallet;

// Re-export commonly used types
pub use auth::AuthError;
pub use config::Config;
pub use context::{AuthContext, Notice, NoticeKind, Session};
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use route::{Disposition, Gate, SiteRoute, WalletRoute};
pub use session::SessionStore;
pub use state::AppState;
