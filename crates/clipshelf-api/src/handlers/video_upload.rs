use crate::auth::AuthContext;
use crate::error::ErrorResponse;
use crate::handlers::resolve_user;
use crate::services::VideoService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use clipshelf_core::models::VideoUploadResponse;
use std::sync::Arc;

/// Parsed multipart upload form
struct UploadForm {
    data: Bytes,
    original_name: Option<String>,
    content_type: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, String> {
    let mut form = UploadForm {
        data: Bytes::new(),
        original_name: None,
        content_type: None,
        title: None,
        description: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Invalid multipart body: {}", e))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                form.original_name = field.file_name().map(|s| s.to_string());
                form.content_type = field.content_type().map(|s| s.to_string());
                form.data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file field: {}", e))?;
            }
            Some("title") => {
                form.title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| format!("Failed to read title field: {}", e))?,
                );
            }
            Some("description") => {
                form.description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| format!("Failed to read description field: {}", e))?,
                );
            }
            _ => {}
        }
    }

    Ok(form)
}

/// The boundary contract collapses every upload failure to 500.
fn upload_failure(msg: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!(
            "Failed to upload video: {}",
            msg
        ))),
    )
}

#[utoipa::path(
    post,
    path = "/api/videos/upload",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Video uploaded successfully", body = VideoUploadResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Upload failed", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    multipart: Multipart,
) -> Result<(StatusCode, Json<VideoUploadResponse>), (StatusCode, Json<ErrorResponse>)> {
    let form = read_form(multipart).await.map_err(upload_failure)?;

    let user = resolve_user(&state, &auth)
        .await
        .map_err(|e| upload_failure(e.to_string()))?;

    let video = VideoService::new(&state)
        .upload(
            &form.data,
            form.original_name.as_deref(),
            form.content_type,
            form.title.as_deref().unwrap_or(""),
            form.description,
            &user,
        )
        .await
        .map_err(|e| {
            tracing::debug!(username = %user.username, error = %e, "Upload rejected");
            upload_failure(e.to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(VideoUploadResponse {
            video_id: video.id,
            message: "Video uploaded successfully".to_string(),
            filename: video.filename,
            file_size: video.file_size,
        }),
    ))
}
