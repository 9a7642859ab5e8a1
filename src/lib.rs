//! NovaPay - Main Library
//!
//! Client suite for the NovaPay product family: a consumer wallet app and
//! the Nova Holdings showcase site with its admin CMS. Both are native
//! desktop applications (egui/eframe) against the same REST backend
//! family, and both share one session/auth core.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types exchanged with the backend
//!   - Account, transaction, company and content shapes
//!   - Error taxonomy of the API clients
//!   - Application configuration
//!
//! - **`egui_app`** - The desktop clients
//!   - Session store, auth client and the session state machine
//!   - Route gates and guard resolution
//!   - Wallet screens (dashboard, settings, registration)
//!   - Site screens (public showcase, admin CMS)
//!
//! # Session model
//!
//! On startup the persisted token (if any) is verified once against the
//! backend; the session is a tagged state (`Initializing`, `Authenticated`,
//! `Unauthenticated`) consumed by the route guard. All network calls run on
//! worker threads and report back over channels polled each frame, so the
//! UI thread never blocks.

/// Shared types and data structures
pub mod shared;

/// egui native desktop apps
pub mod egui_app;
