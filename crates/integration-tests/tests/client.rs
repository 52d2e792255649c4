//! `InventoryClient` behavior against the fake API: caching, in-flight
//! de-duplication, invalidation, and envelope handling.

use stockpile_admin::api::{ApiError, CategoryInput, InventoryClient};
use stockpile_admin::config::AdminConfig;
use stockpile_integration_tests::fake_api::{self, FakeApi};

fn client_for(api: &FakeApi) -> InventoryClient {
    let config = AdminConfig {
        api_url: api.base_url.clone(),
        host: "127.0.0.1".parse().expect("loopback address"),
        port: 0,
    };
    InventoryClient::new(&config)
}

#[tokio::test]
async fn concurrent_list_calls_share_one_upstream_request() {
    let api = fake_api::spawn().await;
    let client = client_for(&api);
    let token = Some(fake_api::ADMIN_TOKEN);

    let (first, second) = tokio::join!(client.list_categories(token), client.list_categories(token));
    let first = first.expect("first list");
    let second = second.expect("second list");

    assert_eq!(first, second);
    assert_eq!(api.category_list_hits(), 1);

    // A later call is served from the cache without a new request.
    client.list_categories(token).await.expect("cached list");
    assert_eq!(api.category_list_hits(), 1);
}

#[tokio::test]
async fn mutations_invalidate_the_list_cache() {
    let api = fake_api::spawn().await;
    let client = client_for(&api);
    let token = Some(fake_api::ADMIN_TOKEN);

    let before = client.list_categories(token).await.expect("initial list");
    assert!(before.is_empty());
    assert_eq!(api.category_list_hits(), 1);

    client
        .create_category(
            token,
            &CategoryInput {
                name: "Tools".to_string(),
                description: "Hand tools".to_string(),
            },
        )
        .await
        .expect("create");

    // The cache key was dropped, so the next read goes upstream and sees
    // the new row.
    let after = client.list_categories(token).await.expect("fresh list");
    assert_eq!(api.category_list_hits(), 2);
    let created = after.first().expect("one category");
    assert_eq!(created.name, "Tools");
    assert_eq!(created.description, "Hand tools");
}

#[tokio::test]
async fn a_null_data_payload_reads_as_an_empty_list() {
    let api = fake_api::spawn().await;
    let client = client_for(&api);

    // The fake audit endpoint answers {"success":true,"data":null}.
    let entries = client
        .list_audit_logs(Some(fake_api::ADMIN_TOKEN))
        .await
        .expect("audit log");
    assert!(entries.is_empty());
}

#[tokio::test]
async fn a_failure_envelope_surfaces_as_an_api_error() {
    let api = fake_api::spawn().await;
    let client = client_for(&api);

    let err = client
        .login(fake_api::ADMIN_EMAIL, "wrong-password")
        .await
        .expect_err("rejected login");
    assert!(matches!(err, ApiError::Api(_)));
}

#[tokio::test]
async fn a_missing_token_is_an_authorization_error() {
    let api = fake_api::spawn().await;
    let client = client_for(&api);

    let err = client
        .list_categories(None)
        .await
        .expect_err("unauthorized list");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn login_returns_the_user_and_token() {
    let api = fake_api::spawn().await;
    let client = client_for(&api);

    let payload = client
        .login(fake_api::ADMIN_EMAIL, fake_api::ADMIN_PASSWORD)
        .await
        .expect("login");
    assert_eq!(payload.user.role, "admin");
    assert_eq!(payload.token, fake_api::ADMIN_TOKEN);
}
