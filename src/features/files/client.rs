use crate::app_lib::{ApiClient, AppError};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, instrument};

pub const UPLOAD_PATH: &str = "/files/upload";
/// Multipart field the API reads the upload from.
pub const FILE_FIELD: &str = "file";

const DEFAULT_FILE_NAME: &str = "upload";

/// Uploads `bytes` as `file_name`. The API answers with an identifier or URL
/// for the stored file, returned here untouched.
///
/// # Errors
/// Returns an `AppError` if the request fails or is rejected.
#[instrument(skip(api, bytes), fields(size = bytes.len()))]
pub async fn upload_file(
    api: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<Value, AppError> {
    let part = Part::bytes(bytes).file_name(file_name.to_string());
    let form = Form::new().part(FILE_FIELD, part);

    api.post_multipart(UPLOAD_PATH, form).await
}

/// Reads a file from disk and uploads it under its own file name.
///
/// # Errors
/// Returns `AppError::File` if the file cannot be read, or the upload failure.
#[instrument(skip(api))]
pub async fn upload_path(api: &ApiClient, path: &Path) -> Result<Value, AppError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| AppError::File(format!("Failed to read {}: {err}", path.display())))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_FILE_NAME);
    debug!(file_name, "uploading file");

    upload_file(api, file_name, bytes).await
}
