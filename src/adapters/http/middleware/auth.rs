//! User identity extractors for axum.
//!
//! Authentication is owned by the backend in front of this service. It
//! forwards the verified user id in the `x-user-id` header; this module only
//! turns that header into a [`UserId`].
//!
//! ```text
//! Gateway (verifies session) → x-user-id header → RequireUser extractor → handler
//! ```
//!
//! # Example
//!
//! ```ignore
//! async fn my_handler(RequireUser(user_id): RequireUser) -> impl IntoResponse {
//!     format!("Hello, {}!", user_id)
//! }
//! ```

use axum::{
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::UserId;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires a user id.
///
/// Returns 401 Unauthorized when the header is missing, blank or not UTF-8.
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserId);

impl<S> axum::extract::FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { user_from_parts(parts).map(RequireUser) })
    }
}

fn user_from_parts(parts: &Parts) -> Result<UserId, AuthRejection> {
    let value = parts
        .headers
        .get(USER_ID_HEADER)
        .ok_or(AuthRejection::MissingUser)?;
    let raw = value.to_str().map_err(|_| AuthRejection::InvalidUser)?;
    UserId::new(raw.trim()).map_err(|_| AuthRejection::MissingUser)
}

/// Rejection type for identity failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// No user id header was provided.
    MissingUser,
    /// The header was present but unreadable.
    InvalidUser,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AuthRejection::MissingUser => "Authentication required",
            AuthRejection::InvalidUser => "Invalid user identity",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "code": "UNAUTHENTICATED",
                "message": message,
            })),
        )
            .into_response()
    }
}
