use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    Json,
};
use tracing::{error, warn};

use crate::{
    auth::{cookie::extract_session_token, dto::MessageResponse, dto::PublicUser, jwt::JwtKeys},
    state::AppState,
};

/// Session middleware: resolves the session cookie to the caller's
/// identity before the handler runs. Expired or tampered tokens, and
/// tokens for users that no longer exist, are rejected here with 401.
pub struct CurrentUser(pub PublicUser);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = (StatusCode, Json<MessageResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers).ok_or_else(|| {
            unauthorized("Unauthorized - No Token Provided")
        })?;

        let keys = JwtKeys::from_ref(state);
        let claims = match keys.verify(&token) {
            Ok(claims) => claims,
            Err(_) => {
                warn!("invalid or expired session token");
                return Err(unauthorized("Unauthorized - Invalid Token"));
            }
        };

        let user = state.store.find_by_id(claims.sub).await.map_err(|e| {
            error!(error = ?e, user_id = %claims.sub, "session user lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Internal server error")),
            )
        })?;

        match user {
            Some(user) => Ok(CurrentUser(user.into())),
            None => {
                warn!(user_id = %claims.sub, "session token for a missing user");
                Err(unauthorized("Unauthorized - User Not Found"))
            }
        }
    }
}

fn unauthorized(message: &str) -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::UNAUTHORIZED, Json(MessageResponse::new(message)))
}
