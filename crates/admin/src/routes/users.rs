//! Operator listing page.
//!
//! The inventory API exposes no user endpoints, so the page renders the
//! seeded operators.
// TODO: fetch from /api/user/getUsers once the backend grows those routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use crate::filters;
use crate::middleware::RequireAuth;
use crate::nav::{NavEntry, visible_entries};

/// Operator display row.
pub struct UserView {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub created_at: &'static str,
}

/// Operator listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/users.html")]
pub struct UsersTemplate {
    pub nav: Vec<NavEntry>,
    pub user_name: String,
    pub users: Vec<UserView>,
}

/// Display the operator list.
pub async fn index(RequireAuth(user): RequireAuth) -> Response {
    let users = vec![
        UserView {
            name: "Sidharth Rawat",
            email: "sidharth@example.com",
            role: "admin",
            created_at: "2025-06-08",
        },
        UserView {
            name: "Aisha Kapoor",
            email: "aisha@example.com",
            role: "manager",
            created_at: "2025-06-07",
        },
    ];

    UsersTemplate {
        nav: visible_entries(user.permission_level),
        user_name: user.user.name,
        users,
    }
    .into_response()
}
