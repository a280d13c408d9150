use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::auth::{dto::MessageResponse, repo::StoreError};

/// Failure kinds for the auth flow. Everything client-caused maps to 400;
/// anything unexpected maps to 500 with a fixed generic body, and the
/// detail only reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Malformed or missing client input.
    #[error("{0}")]
    Validation(String),
    /// A unique field (the email) is already taken.
    #[error("{0}")]
    Conflict(String),
    /// Unknown email or wrong password. One fixed message for both, so
    /// responses never reveal which factor failed.
    #[error("Invalid Credentials")]
    InvalidCredentials,
    /// Unexpected fault in a collaborator (store, hasher, signer).
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AuthError::Conflict("Email already exists".into()),
            StoreError::Other(e) => AuthError::Internal(e),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::Validation(_) | AuthError::Conflict(_) | AuthError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Internal(e) => {
                error!(error = ?e, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let cases = [
            AuthError::Validation("All fields are required".into()),
            AuthError::Conflict("Email already exists".into()),
            AuthError::InvalidCredentials,
        ];
        for err in cases {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn internal_errors_hide_their_detail() {
        let err = AuthError::Internal(anyhow::anyhow!("pool exhausted on shard 7"));
        assert_eq!(err.to_string(), "Internal server error");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn duplicate_store_error_becomes_conflict() {
        let err: AuthError = StoreError::DuplicateEmail.into();
        assert_eq!(err.to_string(), "Email already exists");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
