//! Project CRUD endpoints. Payloads are passed through untouched; the API
//! owns the project shape and enforces authorization.

pub mod client;

pub use client::{create_project, delete_project, get_project, list_projects, update_project};
