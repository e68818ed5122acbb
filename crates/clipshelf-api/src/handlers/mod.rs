pub mod health;
pub mod video_delete;
pub mod video_get;
pub mod video_list;
pub mod video_stream;
pub mod video_upload;

use crate::auth::AuthContext;
use crate::state::AppState;
use clipshelf_core::models::User;
use clipshelf_core::AppError;

/// Resolve the authenticated principal to its user row. A missing row means
/// the auth system and the user store disagree; that is a server fault, not
/// a 404.
pub(crate) async fn resolve_user(
    state: &AppState,
    auth: &AuthContext,
) -> Result<User, AppError> {
    state
        .users
        .find_by_username(&auth.username)
        .await?
        .ok_or_else(|| {
            tracing::error!(
                username = %auth.username,
                "Authenticated principal has no backing user record"
            );
            AppError::Internal("User not found".to_string())
        })
}
