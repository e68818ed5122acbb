use crate::auth::AuthContext;
use crate::error::ErrorResponse;
use crate::handlers::resolve_user;
use crate::services::VideoService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use clipshelf_core::models::VideoSummary;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/videos/{id}",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video details", body = VideoSummary),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Video belongs to another user", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
pub async fn get_video_info(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> Result<Json<VideoSummary>, (StatusCode, Json<ErrorResponse>)> {
    let user = resolve_user(&state, &auth).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )
    })?;

    let video = VideoService::new(&state).get_by_id(id).await.map_err(|e| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(e.to_string())),
        )
    })?;

    if video.user_id != user.id {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("Access denied")),
        ));
    }

    Ok(Json(VideoSummary::from_video(video, user.username)))
}
