use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Maximum length for the optional description field
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Persisted video record. `filename` is the server-generated on-disk name;
/// `file_path` is the absolute path under the storage root at upload time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub filename: String,
    pub file_path: String,
    pub content_type: Option<String>,
    pub file_size: i64,
    pub uploaded_at: DateTime<Utc>,
    pub user_id: i64,
}

/// Insert payload for a video row. The id and timestamp are store-assigned.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub description: Option<String>,
    pub filename: String,
    pub file_path: String,
    pub content_type: Option<String>,
    pub file_size: i64,
    pub user_id: i64,
}

/// Read-only projection of a video returned to callers. Omits the internal
/// file path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub filename: String,
    pub content_type: Option<String>,
    pub file_size: i64,
    pub uploaded_at: DateTime<Utc>,
    pub uploader_username: String,
}

impl VideoSummary {
    pub fn from_video(video: Video, uploader_username: String) -> Self {
        VideoSummary {
            id: video.id,
            title: video.title,
            description: video.description,
            filename: video.filename,
            content_type: video.content_type,
            file_size: video.file_size,
            uploaded_at: video.uploaded_at,
            uploader_username,
        }
    }
}

/// Response body for a successful upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadResponse {
    pub video_id: i64,
    pub message: String,
    pub filename: String,
    pub file_size: i64,
}
