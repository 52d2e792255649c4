//! Integration tests for Stockpile.
//!
//! Each test boots two servers in-process on ephemeral ports: a fake
//! inventory API implementing the envelope contract ([`fake_api`]) and the
//! real admin app pointed at it. A `reqwest` client with a cookie store
//! plays the operator's browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockpile-integration-tests
//! ```
//!
//! No external services are required.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fake_api;

use stockpile_admin::{app, config::AdminConfig, state::AppState};

/// The two in-process servers a test talks to.
pub struct TestContext {
    /// Base URL of the admin app.
    pub admin_url: String,
    /// Handle to the fake inventory API behind it.
    pub api: fake_api::FakeApi,
}

impl TestContext {
    /// Start the fake inventory API and the admin app wired to it.
    pub async fn start() -> Self {
        let api = fake_api::spawn().await;

        let config = AdminConfig {
            api_url: api.base_url.clone(),
            host: "127.0.0.1".parse().expect("loopback address"),
            port: 0,
        };
        let state = AppState::new(config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind admin listener");
        let addr = listener.local_addr().expect("admin listener address");

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.expect("admin server");
        });

        Self {
            admin_url: format!("http://{addr}"),
            api,
        }
    }
}

/// A browser-like client: follows redirects and keeps cookies.
#[must_use]
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

/// A cookie-keeping client that surfaces redirects instead of following
/// them, for asserting on `Location` headers.
#[must_use]
pub fn no_redirect_browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("reqwest client")
}

/// Log in through the login form and return the cookie-holding client.
pub async fn login_as(ctx: &TestContext, email: &str, password: &str) -> reqwest::Client {
    let client = browser();
    let resp = client
        .post(format!("{}/login", ctx.admin_url))
        .form(&[("email", email), ("password", password)])
        .send()
        .await
        .expect("login request");
    assert_eq!(
        resp.url().path(),
        "/dashboard",
        "login did not reach the dashboard"
    );
    client
}

/// Log in as the seeded super-admin.
pub async fn login_as_admin(ctx: &TestContext) -> reqwest::Client {
    login_as(ctx, fake_api::ADMIN_EMAIL, fake_api::ADMIN_PASSWORD).await
}
