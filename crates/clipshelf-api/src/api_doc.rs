//! OpenAPI document assembly

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clipshelf API",
        description = "Personal video upload, listing, streaming, and deletion"
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::video_upload::upload_video,
        crate::handlers::video_list::list_my_videos,
        crate::handlers::video_get::get_video_info,
        crate::handlers::video_stream::stream_video,
        crate::handlers::video_delete::delete_video,
    ),
    components(schemas(
        clipshelf_core::models::VideoSummary,
        clipshelf_core::models::VideoUploadResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video management endpoints"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
