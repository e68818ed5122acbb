//! Video service
//!
//! Orchestrates the file store and the metadata store: store-then-persist on
//! upload, DTO projection for reads, ownership-gated delete. Ownership checks
//! for read paths stay in the handlers; delete enforces its own because the
//! check and the destructive action must not be separated.

use crate::error::storage_app_error;
use crate::state::AppState;
use clipshelf_core::models::video::MAX_DESCRIPTION_CHARS;
use clipshelf_core::models::{NewVideo, User, Video, VideoSummary};
use clipshelf_core::AppError;
use clipshelf_db::VideoRepository;
use clipshelf_storage::LocalStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct VideoService {
    storage: Arc<LocalStorage>,
    videos: VideoRepository,
}

impl VideoService {
    pub fn new(state: &AppState) -> Self {
        VideoService {
            storage: state.storage.clone(),
            videos: state.videos.clone(),
        }
    }

    /// Store the uploaded bytes, then persist the metadata row. The two steps
    /// are not transactional: a crash in between leaves an orphaned file,
    /// never a row without a file.
    pub async fn upload(
        &self,
        data: &[u8],
        original_name: Option<&str>,
        content_type: Option<String>,
        title: &str,
        description: Option<String>,
        owner: &User,
    ) -> Result<Video, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidInput("Title is required".to_string()));
        }
        if let Some(desc) = &description {
            if desc.chars().count() > MAX_DESCRIPTION_CHARS {
                return Err(AppError::InvalidInput(format!(
                    "Description exceeds {} characters",
                    MAX_DESCRIPTION_CHARS
                )));
            }
        }

        let filename = self
            .storage
            .store(data, original_name, &owner.username)
            .await
            .map_err(storage_app_error)?;
        let file_path = self.storage.root().join(&filename).display().to_string();

        let video = self
            .videos
            .create(&NewVideo {
                title: title.to_string(),
                description,
                filename,
                file_path,
                content_type,
                // Declared size from the upload, not re-measured from disk
                file_size: data.len() as i64,
                user_id: owner.id,
            })
            .await?;

        Ok(video)
    }

    /// All of an owner's videos, newest upload first, projected to DTOs.
    /// An owner with no videos gets an empty list, not an error.
    pub async fn list_for_owner(&self, owner: &User) -> Result<Vec<VideoSummary>, AppError> {
        let videos = self.videos.list_by_user(owner.id).await?;
        Ok(videos
            .into_iter()
            .map(|v| VideoSummary::from_video(v, owner.username.clone()))
            .collect())
    }

    /// Fetch by id. Performs no ownership check; callers compare
    /// `video.user_id` against the requester before revealing anything.
    pub async fn get_by_id(&self, id: i64) -> Result<Video, AppError> {
        self.videos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Video not found with id: {}", id)))
    }

    /// Delete a video owned by `requester`. The file removal is attempted
    /// before the row removal and its failure is swallowed: a leaked file on
    /// disk is acceptable, a listed video with no row is not.
    pub async fn delete(&self, id: i64, requester: &User) -> Result<(), AppError> {
        let video = self.get_by_id(id).await?;

        if video.user_id != requester.id {
            return Err(AppError::Forbidden(
                "You don't have permission to delete this video".to_string(),
            ));
        }

        if let Err(e) = self.storage.delete(&video.filename).await {
            tracing::warn!(
                video_id = id,
                filename = %video.filename,
                error = %e,
                "Failed to delete stored file; removing metadata row anyway"
            );
        }

        self.videos.delete_by_id(id).await?;
        Ok(())
    }
}
