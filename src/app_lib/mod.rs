//! Shared client plumbing: configuration, the HTTP wrapper and the error type.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in the feature clients. The wrapper does not store
//! credentials itself; the session lives in the cookie jar of the underlying
//! client, so callers must still avoid logging request bodies that carry
//! passwords.

pub mod api;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
