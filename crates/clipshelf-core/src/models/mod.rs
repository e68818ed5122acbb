pub mod user;
pub mod video;

pub use user::User;
pub use video::{NewVideo, Video, VideoSummary, VideoUploadResponse};
