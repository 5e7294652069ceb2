use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::error::ApiError;
use crate::clients::UserClient;
use crate::domain::{CreateUserRequest, User};

#[derive(Serialize)]
pub struct WelcomeResponse {
    message: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

#[derive(Serialize)]
pub struct UsersResponse {
    users: Vec<User>,
}

#[derive(Serialize)]
pub struct CreatedUserResponse {
    message: &'static str,
    user: User,
}

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the User API",
        status: "running",
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[instrument(skip(client))]
pub async fn list_users(State(client): State<UserClient>) -> Result<Json<UsersResponse>, ApiError> {
    let users = client.list_users().await?;
    debug!(count = users.len(), "Listing users");
    Ok(Json(UsersResponse { users }))
}

/// Validation happens here, before the actor sees anything.
#[instrument(skip(client, body), fields(body_len = body.len()))]
pub async fn create_user(
    State(client): State<UserClient>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    let payload = parse_create_request(&body)?.validate().map_err(|e| {
        warn!(error = %e, "Rejected create_user request");
        ApiError::from(e)
    })?;

    let user = client.create_user(payload).await?;
    info!(user_id = user.id, "Responding with created user");

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            message: "User created successfully",
            user,
        }),
    ))
}

pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!(%method, %uri, "No route matched");
    ApiError::NotFound
}

/// An empty body reads as `{}`. Anything else must be a JSON object.
fn parse_create_request(body: &[u8]) -> Result<CreateUserRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateUserRequest::default());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => {
            serde_json::from_value(value).map_err(|_| ApiError::MalformedBody)
        }
        Ok(_) => Err(ApiError::MalformedBody),
        Err(e) => {
            debug!(error = %e, "Body is not valid JSON");
            Err(ApiError::MalformedBody)
        }
    }
}
