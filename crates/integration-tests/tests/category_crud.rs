//! The category screen end to end: create, rename, delete.

use reqwest::StatusCode;
use stockpile_integration_tests::{TestContext, login_as_admin};

#[tokio::test]
async fn category_round_trip() {
    let ctx = TestContext::start().await;
    let client = login_as_admin(&ctx).await;
    let base = format!("{}/dashboard/category", ctx.admin_url);

    // Starts empty.
    let body = client
        .get(&base)
        .send()
        .await
        .expect("initial list")
        .text()
        .await
        .expect("body");
    assert!(body.contains("No data available."));

    // Create; the redirect lands back on the list, which now has the row.
    let resp = client
        .post(&base)
        .form(&[("name", "Tools"), ("description", "Hand tools")])
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Category created successfully"));
    assert!(body.contains(">Tools<"));
    assert!(body.contains(">Hand tools<"));

    let id = ctx.api.category_id("Tools").expect("created category id");

    // Rename.
    let resp = client
        .post(format!("{base}/{id}"))
        .form(&[("name", "Tools2"), ("description", "Hand tools")])
        .send()
        .await
        .expect("update");
    let body = resp.text().await.expect("body");
    assert!(body.contains("Category updated successfully"));
    assert!(body.contains(">Tools2<"));
    assert!(!body.contains(">Tools<"));

    // Delete.
    let resp = client
        .post(format!("{base}/{id}/delete"))
        .send()
        .await
        .expect("delete");
    let body = resp.text().await.expect("body");
    assert!(body.contains("Category deleted successfully"));
    assert!(!body.contains(">Tools2<"));
    assert!(body.contains("No data available."));
}

#[tokio::test]
async fn a_failed_update_shows_an_error_flash() {
    let ctx = TestContext::start().await;
    let client = login_as_admin(&ctx).await;

    // No such id upstream -> the API answers success:false.
    let resp = client
        .post(format!(
            "{}/dashboard/category/missing-id",
            ctx.admin_url
        ))
        .form(&[("name", "Ghost"), ("description", "")])
        .send()
        .await
        .expect("update");

    let body = resp.text().await.expect("body");
    assert!(body.contains("Could not update the category"));
}
