//! Route guard behavior: who gets redirected where.

use reqwest::StatusCode;
use stockpile_integration_tests::{
    TestContext, fake_api, login_as, login_as_admin, no_redirect_browser,
};

#[tokio::test]
async fn the_dashboard_requires_a_session() {
    let ctx = TestContext::start().await;
    let client = no_redirect_browser();

    let resp = client
        .get(format!("{}/dashboard/product", ctx.admin_url))
        .send()
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/login");
}

#[tokio::test]
async fn the_login_page_bounces_authenticated_visitors() {
    let ctx = TestContext::start().await;
    let client = no_redirect_browser();

    let resp = client
        .post(format!("{}/login", ctx.admin_url))
        .form(&[
            ("email", fake_api::ADMIN_EMAIL),
            ("password", fake_api::ADMIN_PASSWORD),
        ])
        .send()
        .await
        .expect("login");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/dashboard");

    let resp = client
        .get(format!("{}/login", ctx.admin_url))
        .send()
        .await
        .expect("login page");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/dashboard");
}

#[tokio::test]
async fn an_authenticated_session_reaches_protected_pages() {
    let ctx = TestContext::start().await;
    let client = no_redirect_browser();

    let resp = client
        .post(format!("{}/login", ctx.admin_url))
        .form(&[
            ("email", fake_api::ADMIN_EMAIL),
            ("password", fake_api::ADMIN_PASSWORD),
        ])
        .send()
        .await
        .expect("login");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = client
        .get(format!("{}/dashboard/product", ctx.admin_url))
        .send()
        .await
        .expect("product page");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn the_session_survives_the_next_visit() {
    let ctx = TestContext::start().await;
    let client = login_as_admin(&ctx).await;

    // A fresh request with the same cookie jar is the browser-reload case.
    let resp = client
        .get(format!("{}/dashboard", ctx.admin_url))
        .send()
        .await
        .expect("reload");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("body");
    assert!(body.contains(fake_api::ADMIN_NAME));
}

#[tokio::test]
async fn wrong_credentials_land_back_on_the_login_page() {
    let ctx = TestContext::start().await;
    let client = stockpile_integration_tests::browser();

    let resp = client
        .post(format!("{}/login", ctx.admin_url))
        .form(&[("email", fake_api::ADMIN_EMAIL), ("password", "nope")])
        .send()
        .await
        .expect("login");

    assert_eq!(resp.url().path(), "/login");
    let body = resp.text().await.expect("body");
    assert!(body.contains("Invalid email or password"));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let ctx = TestContext::start().await;
    let client = login_as_admin(&ctx).await;

    let resp = client
        .post(format!("{}/logout", ctx.admin_url))
        .send()
        .await
        .expect("logout");
    assert_eq!(resp.url().path(), "/login");

    let resp = client
        .get(format!("{}/dashboard", ctx.admin_url))
        .send()
        .await
        .expect("dashboard after logout");
    assert_eq!(resp.url().path(), "/login");
}

#[tokio::test]
async fn the_sidebar_follows_the_permission_level() {
    let ctx = TestContext::start().await;

    // The super-admin sees every entry, including level-3-only "Product".
    let admin = login_as_admin(&ctx).await;
    let body = admin
        .get(format!("{}/dashboard/category", ctx.admin_url))
        .send()
        .await
        .expect("admin category page")
        .text()
        .await
        .expect("body");
    assert!(body.contains("Audit log"));
    assert!(body.contains("/dashboard/product"));

    // A manager (level 2) only sees the level-2 entries.
    let manager = login_as(&ctx, fake_api::MANAGER_EMAIL, fake_api::MANAGER_PASSWORD).await;
    let body = manager
        .get(format!("{}/dashboard/category", ctx.admin_url))
        .send()
        .await
        .expect("manager category page")
        .text()
        .await
        .expect("body");
    assert!(body.contains("Suppliers"));
    assert!(!body.contains("Audit log"));
    assert!(!body.contains("/dashboard/transactions"));
}
