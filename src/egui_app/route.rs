//! Route guard
//!
//! Screens declare a [`Gate`]; [`resolve`] decides each frame whether the
//! requested screen renders, waits behind a neutral placeholder, or
//! redirects. While the session is still verifying, both gated kinds sit
//! behind the placeholder so no redirect can flash before verification
//! completes.

use crate::egui_app::context::Session;

/// Access policy of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Requires an authenticated session
    Protected,
    /// Only for logged-out users (login, register); authenticated users are
    /// sent to their landing screen
    Public,
    /// Rendered regardless of session state
    Open,
}

/// Guard decision for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Render,
    Placeholder,
    RedirectToLogin,
    RedirectToHome,
}

/// Decide how to treat a screen given the current session.
pub fn resolve(gate: Gate, session: &Session) -> Disposition {
    match (gate, session) {
        (Gate::Open, _) => Disposition::Render,
        (_, Session::Initializing) => Disposition::Placeholder,
        (Gate::Protected, Session::Unauthenticated) => Disposition::RedirectToLogin,
        (Gate::Protected, Session::Authenticated { .. }) => Disposition::Render,
        (Gate::Public, Session::Authenticated { .. }) => Disposition::RedirectToHome,
        (Gate::Public, Session::Unauthenticated) => Disposition::Render,
    }
}

/// Wallet app screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletRoute {
    Login,
    Register,
    Help,
    Dashboard,
    Settings,
}

impl WalletRoute {
    pub fn gate(&self) -> Gate {
        match self {
            WalletRoute::Login | WalletRoute::Register => Gate::Public,
            WalletRoute::Help => Gate::Open,
            WalletRoute::Dashboard | WalletRoute::Settings => Gate::Protected,
        }
    }
}

/// Site app screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    AdminLogin,
    Admin,
}

impl SiteRoute {
    pub fn gate(&self) -> Gate {
        match self {
            SiteRoute::Home => Gate::Open,
            SiteRoute::AdminLogin => Gate::Public,
            SiteRoute::Admin => Gate::Protected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::user::UserProfile;

    fn authenticated() -> Session {
        Session::Authenticated {
            user: UserProfile {
                id: "u1".to_string(),
                email: "user@example.com".to_string(),
                full_name: String::new(),
                balance: 0.0,
                premium: false,
                two_factor_enabled: false,
            },
        }
    }

    #[test]
    fn loading_renders_placeholder_for_both_gated_kinds() {
        // No redirect may fire until verification settles.
        assert_eq!(
            resolve(Gate::Protected, &Session::Initializing),
            Disposition::Placeholder
        );
        assert_eq!(
            resolve(Gate::Public, &Session::Initializing),
            Disposition::Placeholder
        );
    }

    #[test]
    fn open_routes_always_render() {
        assert_eq!(resolve(Gate::Open, &Session::Initializing), Disposition::Render);
        assert_eq!(resolve(Gate::Open, &Session::Unauthenticated), Disposition::Render);
        assert_eq!(resolve(Gate::Open, &authenticated()), Disposition::Render);
    }

    #[test]
    fn protected_redirects_logged_out_users_to_login() {
        assert_eq!(
            resolve(Gate::Protected, &Session::Unauthenticated),
            Disposition::RedirectToLogin
        );
        assert_eq!(resolve(Gate::Protected, &authenticated()), Disposition::Render);
    }

    #[test]
    fn public_redirects_logged_in_users_home() {
        assert_eq!(
            resolve(Gate::Public, &authenticated()),
            Disposition::RedirectToHome
        );
        assert_eq!(
            resolve(Gate::Public, &Session::Unauthenticated),
            Disposition::Render
        );
    }

    #[test]
    fn wallet_route_gates() {
        assert_eq!(WalletRoute::Login.gate(), Gate::Public);
        assert_eq!(WalletRoute::Register.gate(), Gate::Public);
        assert_eq!(WalletRoute::Help.gate(), Gate::Open);
        assert_eq!(WalletRoute::Dashboard.gate(), Gate::Protected);
        assert_eq!(WalletRoute::Settings.gate(), Gate::Protected);
    }

    #[test]
    fn site_route_gates() {
        assert_eq!(SiteRoute::Home.gate(), Gate::Open);
        assert_eq!(SiteRoute::AdminLogin.gate(), Gate::Public);
        assert_eq!(SiteRoute::Admin.gate(), Gate::Protected);
    }
}
