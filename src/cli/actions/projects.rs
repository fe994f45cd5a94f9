use crate::cli::{
    actions::session::{connect, open, print_json},
    globals::GlobalArgs,
};
use crate::features::projects;
use anyhow::Result;
use serde_json::Value;

#[derive(Debug)]
pub enum Command {
    List { search: Option<String> },
    Get { id: i64 },
    Create { data: Value },
    Update { id: i64, data: Value },
    Delete { id: i64 },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a project action and print the API response.
/// # Errors
/// Returns an error if the session cannot be opened or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let auth = connect(&args.globals)?;
    open(&auth, &args.globals).await?;
    let api = auth.api();

    let body = match args.command {
        Command::List { search } => projects::list_projects(api, search.as_deref()).await?,
        Command::Get { id } => projects::get_project(api, id).await?,
        Command::Create { data } => projects::create_project(api, &data).await?,
        Command::Update { id, data } => projects::update_project(api, id, &data).await?,
        Command::Delete { id } => projects::delete_project(api, id).await?,
    };

    print_json(&body)
}
