use crate::auth::AuthContext;
use crate::error::ErrorResponse;
use crate::handlers::resolve_user;
use crate::services::VideoService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use clipshelf_core::models::VideoSummary;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/videos/my-videos",
    tag = "videos",
    responses(
        (status = 200, description = "Videos owned by the requester, newest first", body = [VideoSummary]),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_my_videos(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
) -> Result<Json<Vec<VideoSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let fail = |msg: String| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(format!(
                "Failed to retrieve videos: {}",
                msg
            ))),
        )
    };

    let user = resolve_user(&state, &auth)
        .await
        .map_err(|e| fail(e.to_string()))?;

    let videos = VideoService::new(&state)
        .list_for_owner(&user)
        .await
        .map_err(|e| fail(e.to_string()))?;

    Ok(Json(videos))
}
