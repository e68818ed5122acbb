//! JWT minting for tests

use clipshelf_api::auth::JwtClaims;
use jsonwebtoken::{encode, EncodingKey, Header};

pub const TEST_JWT_SECRET: &str = "test-secret-not-for-production";

/// Mint a valid bearer token for the given username.
pub fn token_for(username: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = JwtClaims {
        sub: username.to_string(),
        iat: now,
        exp: now + 3600,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("encode test token")
}
