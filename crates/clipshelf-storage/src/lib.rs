//! Clipshelf Storage
//!
//! Local filesystem file store for uploaded videos. Files are stored flat
//! under a single configured root directory with server-generated
//! collision-resistant names (`{owner}_{uuid}{.ext}`).

mod error;
mod local;

pub use error::{StorageError, StorageResult};
pub use local::LocalStorage;
