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
use serde_json::{json, Value};
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/videos/{id}",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video deleted successfully"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 400, description = "Video not found or not owned by the requester", body = ErrorResponse)
    )
)]
pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    // Not-found and permission-denied deliberately collapse to one status
    let fail = |msg: String| (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg)));

    let user = resolve_user(&state, &auth)
        .await
        .map_err(|e| fail(e.to_string()))?;

    VideoService::new(&state)
        .delete(id, &user)
        .await
        .map_err(|e| {
            tracing::debug!(video_id = id, username = %user.username, error = %e, "Delete rejected");
            fail(e.to_string())
        })?;

    Ok(Json(json!({ "message": "Video deleted successfully" })))
}
