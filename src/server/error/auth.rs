use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id in the session.
    ///
    /// The request reached a guarded endpoint without logging in first.
    /// Results in a 401 Unauthorized response.
    #[error("Request has no authenticated session")]
    NotAuthenticated,

    /// The session references a user id that no longer exists.
    ///
    /// The account was deleted while a session for it was still live. The
    /// session can no longer be trusted, so the request is rejected the same
    /// way as an unauthenticated one.
    #[error("Session user {0} no longer exists in the database")]
    UserNotInDatabase(i32),

    /// Login failed because the username is unknown or the password is wrong.
    ///
    /// Both cases map to the same message so the response does not reveal
    /// which usernames exist. Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Hashing a password during registration failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Missing or stale sessions and bad credentials all become 401 responses
/// with client-safe messages; hashing failures are logged and become a
/// generic 500.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::PasswordHash(msg) => {
                tracing::error!("Password hashing failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
