//! File upload endpoint. A single multipart POST, no chunking.

pub mod client;

pub use client::{upload_file, upload_path};
