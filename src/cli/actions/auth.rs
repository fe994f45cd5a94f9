use crate::cli::{
    actions::session::{connect, open, print_json},
    globals::GlobalArgs,
};
use crate::features::auth::types::NewUser;
use anyhow::{Context, Result};
use serde_json::json;

#[derive(Debug)]
pub enum Command {
    Login,
    Register { name: String },
    Whoami,
    Logout,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute an account action.
/// # Errors
/// Returns an error if credentials are missing or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let auth = connect(&args.globals)?;

    match args.command {
        Command::Login => {
            let credentials = args.globals.require_credentials()?;
            let user = auth.login(&credentials).await.context("Login failed")?;
            print_json(&user)
        }
        Command::Register { name } => {
            let credentials = args.globals.require_credentials()?;
            let user = NewUser {
                name,
                email: credentials.email,
                password: credentials.password,
            };
            let body = auth.register(&user).await.context("Registration failed")?;
            print_json(&body)
        }
        Command::Whoami => {
            open(&auth, &args.globals).await?;
            print_json(&auth.user())
        }
        Command::Logout => {
            open(&auth, &args.globals).await?;
            auth.logout().await.context("Logout failed")?;
            print_json(&json!({ "authenticated": auth.is_authenticated() }))
        }
    }
}
