//! Auth Context
//!
//! Single source of truth for session state. One `AuthContext` is built at
//! the application root and injected into the app state; views only ever
//! observe the tagged [`Session`] and the transient notice, never an error
//! value from the network layer.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crate::egui_app::auth::{self, AuthError};
use crate::egui_app::config::Config;
use crate::egui_app::debug::{DebugCategory, DebugLogger};
use crate::egui_app::session::SessionStore;
use crate::shared::user::{RegisterRequest, UserProfile};

/// How long a transient notice stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Authentication state of the running client.
///
/// The tagged representation makes the stale combination "not loading, no
/// user, yet authenticated" unrepresentable: there is no separate
/// `authenticated` flag to drift out of sync.
#[derive(Debug, Clone)]
pub enum Session {
    /// Startup token verification is in flight
    Initializing,
    /// Token verified; profile on hand
    Authenticated { user: UserProfile },
    /// No token, or the token was rejected and purged
    Unauthenticated,
}

impl Session {
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::Authenticated { user } => Some(user),
            _ => None,
        }
    }
}

/// Kind of transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-facing notification (toast analog)
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

type VerifyResult = Result<UserProfile, AuthError>;
type LoginResult = Result<(String, UserProfile), AuthError>;
type RegisterResult = Result<(), AuthError>;

/// Owns the session state machine: durable token store, in-flight worker
/// receivers and the notice queue.
pub struct AuthContext {
    config: Config,
    store: SessionStore,
    session: Session,
    verify_rx: Option<Receiver<VerifyResult>>,
    login_rx: Option<Receiver<LoginResult>>,
    register_rx: Option<Receiver<RegisterResult>>,
    login_pending: bool,
    register_pending: bool,
    registered: bool,
    notice: Option<(Notice, Instant)>,
    logger: DebugLogger,
}

impl AuthContext {
    /// Build the context and start the one-and-only verification attempt.
    ///
    /// No persisted token means `Unauthenticated` immediately; the backend
    /// is not contacted at all in that case.
    pub fn new(mut config: Config, store: SessionStore, logger: DebugLogger) -> Self {
        let mut verify_rx = None;
        let session = match store.read() {
            Some(token) => {
                config.set_token(Some(token.clone()));
                logger.info(DebugCategory::Session, "stored token found, verifying");
                let cfg = config.clone();
                let (tx, rx) = channel();
                std::thread::spawn(move || {
                    let _ = tx.send(auth::verify(&cfg, &token));
                });
                verify_rx = Some(rx);
                Session::Initializing
            }
            None => {
                logger.info(DebugCategory::Session, "no stored token, starting logged out");
                Session::Unauthenticated
            }
        };

        Self {
            config,
            store,
            session,
            verify_rx,
            login_rx: None,
            register_rx: None,
            login_pending: false,
            register_pending: false,
            registered: false,
            notice: None,
            logger,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn login_pending(&self) -> bool {
        self.login_pending
    }

    pub fn register_pending(&self) -> bool {
        self.register_pending
    }

    /// Configuration snapshot carrying the current token, for resource API
    /// clients
    pub fn api_config(&self) -> Config {
        self.config.clone()
    }

    /// Current transient notice, if it has not expired yet
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|(notice, _)| notice)
    }

    fn push_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some((
            Notice {
                kind,
                text: text.into(),
            },
            Instant::now(),
        ));
    }

    /// True exactly once after a successful registration; the register view
    /// uses it to switch back to the login screen.
    pub fn take_registered(&mut self) -> bool {
        std::mem::take(&mut self.registered)
    }

    /// Drain worker results and expire the notice. Called once per frame.
    pub fn poll(&mut self) {
        self.poll_verify();
        self.poll_login();
        self.poll_register();

        if let Some((_, since)) = &self.notice {
            if since.elapsed() > NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    fn poll_verify(&mut self) {
        let Some(rx) = self.verify_rx.take() else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(user)) => {
                self.logger
                    .info(DebugCategory::Auth, format!("session verified: {}", user.email));
                self.session = Session::Authenticated { user };
            }
            Ok(Err(err)) => {
                // The normal "not logged in" path: purge and demote, no notice.
                self.logger
                    .warn(DebugCategory::Auth, format!("verification failed: {}", err));
                self.purge();
            }
            Err(TryRecvError::Empty) => {
                self.verify_rx = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                self.logger
                    .warn(DebugCategory::Auth, "verification worker died");
                self.purge();
            }
        }
    }

    fn poll_login(&mut self) {
        let Some(rx) = self.login_rx.take() else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok((token, user))) => {
                self.login_pending = false;
                if let Err(err) = self.store.write(&token) {
                    self.logger
                        .warn(DebugCategory::Session, format!("token not persisted: {}", err));
                }
                self.config.set_token(Some(token));
                self.logger
                    .info(DebugCategory::Auth, format!("logged in: {}", user.email));
                self.session = Session::Authenticated { user };
                self.push_notice(NoticeKind::Success, "Welcome back!");
            }
            Ok(Err(err)) => {
                self.login_pending = false;
                self.logger
                    .error(DebugCategory::Auth, format!("login failed: {}", err));
                self.push_notice(NoticeKind::Error, err.to_string());
            }
            Err(TryRecvError::Empty) => {
                self.login_rx = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                self.login_pending = false;
                self.push_notice(NoticeKind::Error, "Login failed, please try again");
            }
        }
    }

    fn poll_register(&mut self) {
        let Some(rx) = self.register_rx.take() else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(())) => {
                self.register_pending = false;
                self.registered = true;
                self.logger.info(DebugCategory::Auth, "account created");
                self.push_notice(NoticeKind::Success, "Account created, you can sign in now");
            }
            Ok(Err(err)) => {
                self.register_pending = false;
                self.logger
                    .error(DebugCategory::Auth, format!("registration failed: {}", err));
                self.push_notice(NoticeKind::Error, err.to_string());
            }
            Err(TryRecvError::Empty) => {
                self.register_rx = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                self.register_pending = false;
                self.push_notice(NoticeKind::Error, "Registration failed, please try again");
            }
        }
    }

    /// Start a login. Ignored while a previous login is still in flight.
    pub fn login(&mut self, email: String, password: String) {
        if self.login_pending {
            return;
        }
        self.login_pending = true;
        self.notice = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::login(&config, email, password));
        });
        self.login_rx = Some(rx);
    }

    /// Start a registration. Never changes authentication state, whatever
    /// the outcome.
    pub fn register(&mut self, request: RegisterRequest) {
        if self.register_pending {
            return;
        }
        self.register_pending = true;
        self.notice = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::register(&config, &request));
        });
        self.register_rx = Some(rx);
    }

    /// Synchronous logout: purge the token and drop interest in any result
    /// still in flight, so a late verify or login cannot resurrect the
    /// session. Idempotent.
    pub fn logout(&mut self) {
        self.logger.info(DebugCategory::Session, "logged out");
        self.verify_rx = None;
        self.login_rx = None;
        self.login_pending = false;
        self.purge();
    }

    fn purge(&mut self) {
        if let Err(err) = self.store.clear() {
            self.logger
                .warn(DebugCategory::Session, format!("token not cleared: {}", err));
        }
        self.config.clear_token();
        self.session = Session::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_accessors() {
        assert!(Session::Initializing.is_loading());
        assert!(!Session::Initializing.is_authenticated());
        assert!(!Session::Unauthenticated.is_loading());
        assert!(Session::Unauthenticated.user().is_none());
    }

    #[test]
    fn authenticated_exposes_user() {
        let user = UserProfile {
            id: "u1".to_string(),
            email: "user@example.com".to_string(),
            full_name: "Test User".to_string(),
            balance: 0.0,
            premium: false,
            two_factor_enabled: false,
        };
        let session = Session::Authenticated { user };
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().id, "u1");
    }
}
