use crate::auth::AuthContext;
use crate::error::ErrorResponse;
use crate::handlers::resolve_user;
use crate::services::VideoService;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

#[utoipa::path(
    get,
    path = "/api/videos/{id}/stream",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Raw video bytes with the stored content type"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Video belongs to another user", body = ErrorResponse),
        (status = 404, description = "Video or stored file not found", body = ErrorResponse),
        (status = 500, description = "Path resolution failed", body = ErrorResponse)
    )
)]
pub async fn stream_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
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

    let path = state.storage.resolve(&video.filename).map_err(|e| {
        tracing::error!(video_id = id, error = %e, "Failed to resolve stored file path");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(format!("Invalid file path: {}", e))),
        )
    })?;

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(
                video_id = id,
                path = %path.display(),
                error = %e,
                "Stored file missing or unreadable"
            );
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Video file not found")),
            ));
        }
    };

    let content_type = video
        .content_type
        .as_deref()
        .unwrap_or("application/octet-stream");

    // Stream straight from disk; the file is never buffered wholly in memory
    let body = Body::from_stream(ReaderStream::new(file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", video.filename),
        )
        .body(body)
        .map_err(|e| {
            tracing::error!(video_id = id, error = %e, "Failed to build stream response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to build response")),
            )
        })
}
