//! Shared application state

use clipshelf_db::{UserRepository, VideoRepository};
use clipshelf_storage::LocalStorage;
use sqlx::PgPool;
use std::sync::Arc;

/// Everything a handler needs, shared behind an `Arc`. Configuration stays
/// outside: the router layers consume it at build time.
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub videos: VideoRepository,
    pub storage: Arc<LocalStorage>,
}

impl AppState {
    pub fn new(pool: PgPool, storage: Arc<LocalStorage>) -> Self {
        AppState {
            users: UserRepository::new(pool.clone()),
            videos: VideoRepository::new(pool),
            storage,
        }
    }
}
