//! Holding-site feature module
//!
//! Public showcase screen and the admin CMS: API client, state and views.

pub mod api;
pub mod state;
pub mod views;

pub use api::{PublicBundle, SiteApiClient};
pub use state::{AdminTab, SiteAppState, SiteState};
