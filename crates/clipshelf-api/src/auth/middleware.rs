use crate::auth::models::{AuthContext, JwtClaims};
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use clipshelf_core::AppError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    decoding_key: DecodingKey,
}

impl AuthState {
    pub fn new(jwt_secret: &str) -> Self {
        AuthState {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}

/// Middleware validating the HS256 bearer token on every protected route.
/// On success the caller identity lands in request extensions; handlers pick
/// it up through the `AuthContext` extractor.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return HttpAppError(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        ))
        .into_response();
    };

    let claims = match decode::<JwtClaims>(
        token,
        &auth_state.decoding_key,
        &Validation::new(Algorithm::HS256),
    ) {
        Ok(data) => data.claims,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected bearer token");
            return HttpAppError(AppError::Unauthorized("Invalid token".to_string()))
                .into_response();
        }
    };

    request.extensions_mut().insert(AuthContext {
        username: claims.sub,
    });

    next.run(request).await
}
