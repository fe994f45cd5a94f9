use crate::cli::actions::{Action, auth, files, projects, route};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Auth(args) => auth::execute(args).await,
        Action::Projects(args) => projects::execute(args).await,
        Action::Upload(args) => files::execute(args).await,
        Action::Route(args) => route::execute(&args),
    }
}
