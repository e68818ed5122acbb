use crate::error::ErrorResponse;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

/// JWT claims structure. `sub` carries the username of the authenticated
/// principal; the backing user row is resolved per request.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Caller identity extracted from the bearer token and stored in request
/// extensions by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
}

// FromRequestParts rather than Extension so the extractor composes with
// Multipart in upload handlers.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new("Not authenticated")),
                )
            })
    }
}
