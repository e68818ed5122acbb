//! Clipshelf database layer
//!
//! Repository structs over a shared `PgPool`. All queries are runtime
//! `query_as` with explicit binds; failures map to `AppError::Database`.

mod users;
mod videos;

pub use users::UserRepository;
pub use videos::VideoRepository;
