//! Client wrappers for the auth API endpoints. These keep session-aware
//! requests in one place so route code never builds requests by hand.

use crate::{
    app_lib::{
        get_json_with_credentials, post_empty_with_credentials, post_json_with_credentials,
        AppError,
    },
    features::auth::types::{CurrentUser, LoginRequest, MessageResponse},
};

/// Logs in and lets the server set the session cookie.
/// The request must include credentials so the `HttpOnly` cookie lands.
pub async fn login(request: &LoginRequest) -> Result<MessageResponse, AppError> {
    post_json_with_credentials("/auth/login", request).await
}

/// Fetches the signed-in user using cookie-based auth.
pub async fn current_user() -> Result<CurrentUser, AppError> {
    get_json_with_credentials("/auth/me").await
}

/// Clears the session cookie on the server.
pub async fn logout() -> Result<(), AppError> {
    post_empty_with_credentials("/auth/logout").await
}
