//! Client helpers for project endpoints. These functions keep endpoint paths
//! centralized and rely on the session cookie already held by the client.

use crate::app_lib::{ApiClient, AppError};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

pub const PROJECTS_PATH: &str = "/projects";

fn project_path(id: i64) -> String {
    format!("{PROJECTS_PATH}/{id}")
}

/// Lists projects, optionally filtered by a search term.
///
/// Blank search terms are dropped rather than sent as `?search=`.
///
/// # Errors
/// Returns an `AppError` if the request fails or is rejected.
#[instrument(skip(api))]
pub async fn list_projects(api: &ApiClient, search: Option<&str>) -> Result<Value, AppError> {
    match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => api.get(PROJECTS_PATH, &[("search", term)]).await,
        None => api.get(PROJECTS_PATH, &[]).await,
    }
}

/// Fetches one project.
///
/// # Errors
/// Returns an `AppError` if the request fails or is rejected.
#[instrument(skip(api))]
pub async fn get_project(api: &ApiClient, id: i64) -> Result<Value, AppError> {
    api.get(&project_path(id), &[]).await
}

/// # Errors
/// Returns an `AppError` if the payload cannot be encoded or the request fails.
#[instrument(skip_all)]
pub async fn create_project<B: Serialize + ?Sized>(
    api: &ApiClient,
    project: &B,
) -> Result<Value, AppError> {
    api.post(PROJECTS_PATH, project).await
}

/// # Errors
/// Returns an `AppError` if the payload cannot be encoded or the request fails.
#[instrument(skip(api, project))]
pub async fn update_project<B: Serialize + ?Sized>(
    api: &ApiClient,
    id: i64,
    project: &B,
) -> Result<Value, AppError> {
    api.put(&project_path(id), project).await
}

/// # Errors
/// Returns an `AppError` if the request fails or is rejected.
#[instrument(skip(api))]
pub async fn delete_project(api: &ApiClient, id: i64) -> Result<Value, AppError> {
    api.delete(&project_path(id)).await
}
