//! # Projectdesk
//!
//! Client for a small project-management API: account registration and login,
//! project listing and editing, and file uploads.
//!
//! ## Session Model
//!
//! The API keeps a cookie-based session. A successful `POST /users/login`
//! sets the session cookie, which the shared [`ApiClient`] replays on every
//! later request. The client-side view of that session is owned by an
//! [`AuthContext`]; it exposes `{user, is_loading, is_authenticated}` and
//! notifies subscribers on every transition.
//!
//! - **Login leniency:** any non-error login response yields an authenticated
//!   session, even when the body carries no user record.
//! - **No persistence:** the session record lives in memory only and does not
//!   survive a restart.
//!
//! ## Layout
//!
//! - [`app_lib`]: configuration, errors and the HTTP wrapper.
//! - [`features`]: endpoint modules per domain plus the auth state holder.
//! - [`routes`]: the static path-to-view table.
//! - [`cli`]: the `projectdesk` command-line front end.

pub mod app_lib;
pub mod cli;
pub mod features;
pub mod routes;

pub use app_lib::{ApiClient, AppConfig, AppError};
pub use features::auth::{AuthContext, AuthState, Credentials, NewUser, User};

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
