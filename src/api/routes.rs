use axum::routing::get;
use axum::Router;

use super::handlers::{create_user, health, list_users, not_found, welcome};
use crate::clients::UserClient;

/// Builds the application router around an injected user client.
///
/// Known paths hit with an unsupported method fall through to the same 404
/// as unknown paths.
pub fn router(user_client: UserClient) -> Router {
    Router::new()
        .route("/", get(welcome).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .route(
            "/api/users",
            get(list_users).post(create_user).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(user_client)
}
