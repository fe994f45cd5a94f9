pub mod auth;
pub mod files;
pub mod projects;
pub mod route;

// Shared setup for actions that talk to the API.
mod session;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

#[derive(Debug)]
pub enum Action {
    Auth(auth::Args),
    Projects(projects::Args),
    Upload(files::Args),
    Route(route::Args),
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute().await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
