//! Session lifecycle integration tests
//!
//! Exercises the auth context against a mock backend and an isolated
//! token store: startup verification, login, logout and registration.

use std::time::{Duration, Instant};

use novapay::egui_app::config::Config;
use novapay::egui_app::context::{AuthContext, NoticeKind};
use novapay::egui_app::debug::DebugLogger;
use novapay::egui_app::session::SessionStore;
use novapay::shared::config::AppConfig;
use novapay::shared::user::RegisterRequest;

const PROFILE_BODY: &str = r#"{
    "id": "u1",
    "email": "user@example.com",
    "full_name": "Test User",
    "balance": 125.5,
    "premium": false,
    "two_factor_enabled": false
}"#;

fn config_for(server: &mockito::ServerGuard) -> Config {
    Config::with_builder(AppConfig::builder().server_url(server.url())).unwrap()
}

fn store_in(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::with_dir(dir.path(), "wallet")
}

fn context(server: &mockito::ServerGuard, store: SessionStore) -> AuthContext {
    AuthContext::new(config_for(server), store, DebugLogger::new(100))
}

/// Poll until the predicate holds or a generous deadline passes.
fn poll_until(ctx: &mut AuthContext, what: &str, pred: impl Fn(&AuthContext) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        ctx.poll();
        if pred(ctx) {
            return;
        }
        if Instant::now() > deadline {
            panic!("timed out waiting for {}", what);
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn startup_without_token_never_calls_verify() {
    let mut server = mockito::Server::new();
    let me = server.mock("GET", "/api/auth/me").expect(0).create();
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, store_in(&dir));
    assert!(!ctx.is_loading());
    assert!(!ctx.is_authenticated());

    // A few frames later nothing has changed and the backend stayed quiet
    for _ in 0..10 {
        ctx.poll();
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(!ctx.is_authenticated());
    me.assert();
}

#[test]
fn startup_with_valid_token_authenticates() {
    let mut server = mockito::Server::new();
    let _me = server
        .mock("GET", "/api/auth/me")
        .match_header("authorization", "Bearer tok1")
        .with_status(200)
        .with_body(PROFILE_BODY)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.write("tok1").unwrap();

    let mut ctx = context(&server, store.clone());
    assert!(ctx.is_loading());

    poll_until(&mut ctx, "verification", |ctx| !ctx.is_loading());
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.user().unwrap().email, "user@example.com");
    assert_eq!(ctx.user().unwrap().balance, 125.5);
    // The token survives a successful verification
    assert_eq!(store.read(), Some("tok1".to_string()));
}

#[test]
fn startup_with_rejected_token_purges_it() {
    let mut server = mockito::Server::new();
    let _me = server
        .mock("GET", "/api/auth/me")
        .with_status(401)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.write("stale").unwrap();

    let mut ctx = context(&server, store.clone());
    poll_until(&mut ctx, "verification", |ctx| !ctx.is_loading());

    assert!(!ctx.is_authenticated());
    assert_eq!(store.read(), None);
    // Silent demotion: being logged out is not an error notice
    assert!(ctx.notice().is_none());
}

#[test]
fn login_success_persists_token_and_authenticates() {
    let mut server = mockito::Server::new();
    let _login = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(r#"{"access_token": "tok1"}"#)
        .create();
    let _me = server
        .mock("GET", "/api/auth/me")
        .match_header("authorization", "Bearer tok1")
        .with_status(200)
        .with_body(PROFILE_BODY)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut ctx = context(&server, store.clone());
    ctx.login("user@example.com".to_string(), "secret".to_string());
    assert!(ctx.login_pending());

    poll_until(&mut ctx, "login", |ctx| ctx.is_authenticated());
    assert!(!ctx.login_pending());
    assert_eq!(store.read(), Some("tok1".to_string()));
    assert_eq!(ctx.notice().unwrap().kind, NoticeKind::Success);
}

#[test]
fn login_failure_leaves_session_untouched() {
    let mut server = mockito::Server::new();
    let _login = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"detail": "Invalid credentials"}"#)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut ctx = context(&server, store.clone());
    ctx.login("user@example.com".to_string(), "wrong".to_string());
    poll_until(&mut ctx, "login rejection", |ctx| !ctx.login_pending());

    assert!(!ctx.is_authenticated());
    assert_eq!(store.read(), None);
    assert_eq!(ctx.notice().unwrap().kind, NoticeKind::Error);
}

#[test]
fn logout_is_idempotent() {
    let mut server = mockito::Server::new();
    let _login = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(r#"{"access_token": "tok1"}"#)
        .create();
    let _me = server
        .mock("GET", "/api/auth/me")
        .with_status(200)
        .with_body(PROFILE_BODY)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut ctx = context(&server, store.clone());
    ctx.login("user@example.com".to_string(), "secret".to_string());
    poll_until(&mut ctx, "login", |ctx| ctx.is_authenticated());

    ctx.logout();
    assert!(!ctx.is_authenticated());
    assert_eq!(store.read(), None);

    ctx.logout();
    assert!(!ctx.is_authenticated());
    assert_eq!(store.read(), None);
}

#[test]
fn register_reports_success_without_authenticating() {
    let mut server = mockito::Server::new();
    let _register = server
        .mock("POST", "/api/auth/register")
        .with_status(200)
        .with_body(r#"{"message": "created"}"#)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut ctx = context(&server, store.clone());
    ctx.register(RegisterRequest {
        email: "new@example.com".to_string(),
        password: "secret1".to_string(),
        ..Default::default()
    });
    poll_until(&mut ctx, "registration", |ctx| !ctx.register_pending());

    assert!(ctx.take_registered());
    assert!(!ctx.take_registered());
    assert!(!ctx.is_authenticated());
    assert_eq!(store.read(), None);
}

#[test]
fn register_failure_changes_nothing() {
    let mut server = mockito::Server::new();
    let _register = server
        .mock("POST", "/api/auth/register")
        .with_status(400)
        .with_body(r#"{"detail": "Email already registered"}"#)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut ctx = context(&server, store.clone());
    ctx.register(RegisterRequest::default());
    poll_until(&mut ctx, "registration rejection", |ctx| {
        !ctx.register_pending()
    });

    assert!(!ctx.take_registered());
    assert!(!ctx.is_authenticated());
    let notice = ctx.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("Email already registered"));
}

#[test]
fn verify_landing_after_logout_cannot_resurrect_the_session() {
    let mut server = mockito::Server::new();
    let _me = server
        .mock("GET", "/api/auth/me")
        .with_status(200)
        .with_body(PROFILE_BODY)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.write("tok1").unwrap();

    // Logout before the verification result is ever polled; the receiver
    // is dropped, so even a successful response goes nowhere.
    let mut ctx = context(&server, store.clone());
    ctx.logout();

    for _ in 0..20 {
        ctx.poll();
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(!ctx.is_authenticated());
    assert_eq!(store.read(), None);
}
