use clipshelf_core::models::{NewVideo, Video};
use clipshelf_core::AppError;
use sqlx::PgPool;

#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a video row; the id and upload timestamp are store-assigned.
    pub async fn create(&self, video: &NewVideo) -> Result<Video, AppError> {
        let created = sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (title, description, filename, file_path, content_type, file_size, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, filename, file_path, content_type, file_size, uploaded_at, user_id
            "#,
        )
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.filename)
        .bind(&video.file_path)
        .bind(&video.content_type)
        .bind(video.file_size)
        .bind(video.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(filename = %video.filename, error = %e, "Failed to insert video");
            AppError::Database(e)
        })?;

        tracing::info!(
            video_id = created.id,
            user_id = created.user_id,
            filename = %created.filename,
            "Created video record"
        );
        Ok(created)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, title, description, filename, file_path, content_type, file_size, uploaded_at, user_id
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(video_id = id, error = %e, "Failed to fetch video by id");
            AppError::Database(e)
        })?;

        Ok(video)
    }

    /// All videos owned by a user, most recent upload first. Ties on the
    /// timestamp fall back to the id so the order stays stable.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Video>, AppError> {
        let videos = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, title, description, filename, file_path, content_type, file_size, uploaded_at, user_id
            FROM videos
            WHERE user_id = $1
            ORDER BY uploaded_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(user_id = user_id, error = %e, "Failed to list videos for user");
            AppError::Database(e)
        })?;

        Ok(videos)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(video_id = id, error = %e, "Failed to delete video row");
                AppError::Database(e)
            })?;

        tracing::info!(video_id = id, "Deleted video record");
        Ok(())
    }
}
