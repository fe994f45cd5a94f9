//! Client wrappers for the account endpoints. Each function maps one auth
//! action to one request; session bookkeeping lives in
//! [`AuthContext`](super::AuthContext), not here.

use crate::{
    app_lib::{ApiClient, AppError},
    features::auth::types::{Credentials, NewUser},
};
use serde_json::Value;
use tracing::instrument;

pub const REGISTER_PATH: &str = "/users/register";
pub const LOGIN_PATH: &str = "/users/login";
pub const AUTH_PATH: &str = "/users/auth";
pub const LOGOUT_PATH: &str = "/users/logout";

/// Creates an account. The response body is provider-defined.
///
/// # Errors
/// Returns an `AppError` if the request fails or is rejected.
#[instrument(skip_all, fields(email = %user.email))]
pub async fn register(api: &ApiClient, user: &NewUser) -> Result<Value, AppError> {
    api.post(REGISTER_PATH, user).await
}

/// Posts credentials; the server answers with the session cookie.
///
/// # Errors
/// Returns an `AppError` if the request fails or is rejected.
#[instrument(skip_all, fields(email = %credentials.email))]
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<Value, AppError> {
    api.post(LOGIN_PATH, credentials).await
}

/// Fetches the user bound to the current session cookie.
///
/// # Errors
/// Returns an `AppError` if the request fails or is rejected.
#[instrument(skip_all)]
pub async fn auth(api: &ApiClient) -> Result<Value, AppError> {
    api.get(AUTH_PATH, &[]).await
}

/// Invalidates the server-side session.
///
/// # Errors
/// Returns an `AppError` if the request fails or is rejected.
#[instrument(skip_all)]
pub async fn logout(api: &ApiClient) -> Result<Value, AppError> {
    api.post_empty(LOGOUT_PATH).await
}
