use crate::{
    app_lib::ApiClient,
    cli::globals::GlobalArgs,
    features::auth::AuthContext,
};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

/// Builds a signed-out auth context for the configured API.
pub(super) fn connect(globals: &GlobalArgs) -> Result<AuthContext> {
    let api = ApiClient::new(&globals.config).context("Failed to configure API client")?;
    Ok(AuthContext::new(api))
}

/// Brings the session up for this process.
///
/// Logs in when credentials were given; otherwise runs the startup session
/// check, which leaves the context signed out if the API knows no session.
pub(super) async fn open(auth: &AuthContext, globals: &GlobalArgs) -> Result<()> {
    match globals.credentials() {
        Some(credentials) => {
            auth.login(&credentials).await.context("Login failed")?;
        }
        None => {
            debug!("no credentials given, checking for an existing session");
            auth.init().await;
        }
    }
    Ok(())
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
