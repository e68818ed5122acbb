//! Clipshelf API
//!
//! The HTTP surface: authentication middleware, request handlers, the video
//! service, and application setup. Exposed as a library so integration tests
//! can build the router against their own database and storage root.

pub mod api_doc;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
