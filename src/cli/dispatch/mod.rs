//! Command-line argument dispatch.
//!
//! This module turns validated CLI matches into an [`Action`], resolving the
//! API configuration from the arguments on top of [`AppConfig::load`].

use crate::app_lib::AppConfig;
use crate::cli::actions::{Action, auth, files, projects, route};
use crate::cli::commands::{self, projects as project_args, session};
use crate::cli::globals::GlobalArgs;
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::path::PathBuf;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((commands::CMD_LOGIN, _)) => auth_action(matches, auth::Command::Login),
        Some((commands::CMD_REGISTER, sub)) => {
            let name = sub
                .get_one::<String>("name")
                .cloned()
                .context("missing required argument: --name")?;
            auth_action(matches, auth::Command::Register { name })
        }
        Some((commands::CMD_WHOAMI, _)) => auth_action(matches, auth::Command::Whoami),
        Some((commands::CMD_LOGOUT, _)) => auth_action(matches, auth::Command::Logout),
        Some((project_args::CMD_PROJECTS, sub)) => Ok(Action::Projects(projects::Args {
            globals: globals(matches)?,
            command: project_command(sub)?,
        })),
        Some((commands::CMD_UPLOAD, sub)) => {
            let path = sub
                .get_one::<PathBuf>("file")
                .cloned()
                .context("missing required argument: <file>")?;
            Ok(Action::Upload(files::Args {
                globals: globals(matches)?,
                path,
            }))
        }
        Some((commands::CMD_ROUTE, sub)) => {
            let path = sub
                .get_one::<String>("path")
                .cloned()
                .context("missing required argument: <path>")?;
            Ok(Action::Route(route::Args { path }))
        }
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}

fn auth_action(matches: &clap::ArgMatches, command: auth::Command) -> Result<Action> {
    Ok(Action::Auth(auth::Args {
        globals: globals(matches)?,
        command,
    }))
}

fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let options = session::Options::parse(matches)?;

    let mut config = AppConfig::load()?;
    if let Some(url) = options.api_url {
        config.api_base_url = url;
    }
    if let Some(timeout) = options.timeout {
        config.timeout = timeout;
    }

    let mut globals = GlobalArgs::new(config);
    globals.email = options.email;
    globals.password = options.password;

    Ok(globals)
}

fn project_command(matches: &clap::ArgMatches) -> Result<projects::Command> {
    match matches.subcommand() {
        Some(("list", sub)) => Ok(projects::Command::List {
            search: sub.get_one::<String>(project_args::ARG_SEARCH).cloned(),
        }),
        Some(("get", sub)) => Ok(projects::Command::Get { id: project_id(sub)? }),
        Some(("create", sub)) => Ok(projects::Command::Create {
            data: project_data(sub)?,
        }),
        Some(("update", sub)) => Ok(projects::Command::Update {
            id: project_id(sub)?,
            data: project_data(sub)?,
        }),
        Some(("delete", sub)) => Ok(projects::Command::Delete { id: project_id(sub)? }),
        Some((name, _)) => Err(anyhow!("unknown projects command: {name}")),
        None => Err(anyhow!("missing projects command")),
    }
}

fn project_id(matches: &clap::ArgMatches) -> Result<i64> {
    matches
        .get_one::<i64>(project_args::ARG_ID)
        .copied()
        .context("missing required argument: <id>")
}

fn project_data(matches: &clap::ArgMatches) -> Result<Value> {
    matches
        .get_one::<Value>(project_args::ARG_DATA)
        .cloned()
        .context("missing required argument: --data")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serde_json::json;
    use std::time::Duration;

    fn dispatch(args: &[&str]) -> Result<Action> {
        temp_env::with_vars_unset(
            [
                "PROJECTDESK_API_BASE_URL",
                "PROJECTDESK_TIMEOUT_MS",
                "PROJECTDESK_EMAIL",
                "PROJECTDESK_PASSWORD",
            ],
            || {
                let matches = commands::new().get_matches_from(args.iter().copied());
                handler(&matches)
            },
        )
    }

    #[test]
    fn login_carries_connection_and_credentials() {
        let action = dispatch(&[
            "projectdesk",
            "login",
            "--api-url",
            "http://localhost:3000",
            "--timeout",
            "750",
            "--email",
            "a@b.com",
            "--password",
            "x",
        ])
        .unwrap();

        let Action::Auth(args) = action else {
            panic!("expected auth action");
        };
        assert!(matches!(args.command, auth::Command::Login));
        assert_eq!(args.globals.config.api_base_url, "http://localhost:3000");
        assert_eq!(args.globals.config.timeout, Duration::from_millis(750));
        let credentials = args.globals.credentials().unwrap();
        assert_eq!(credentials.email, "a@b.com");
        assert_eq!(credentials.password.expose_secret(), "x");
    }

    #[test]
    fn register_reads_name() {
        let action = dispatch(&["projectdesk", "register", "--name", "Ann"]).unwrap();
        let Action::Auth(args) = action else {
            panic!("expected auth action");
        };
        assert!(matches!(args.command, auth::Command::Register { ref name } if name == "Ann"));
    }

    #[test]
    fn projects_update_parses_id_and_data() {
        let action = dispatch(&[
            "projectdesk",
            "projects",
            "update",
            "12",
            "--data",
            r#"{"name":"Roadmap"}"#,
        ])
        .unwrap();

        let Action::Projects(args) = action else {
            panic!("expected projects action");
        };
        match args.command {
            projects::Command::Update { id, data } => {
                assert_eq!(id, 12);
                assert_eq!(data, json!({"name": "Roadmap"}));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn projects_list_search_is_optional() {
        let action = dispatch(&["projectdesk", "projects", "list"]).unwrap();
        let Action::Projects(args) = action else {
            panic!("expected projects action");
        };
        assert!(matches!(args.command, projects::Command::List { search: None }));
    }

    #[test]
    fn upload_and_route_map_to_actions() {
        let action = dispatch(&["projectdesk", "upload", "logo.png"]).unwrap();
        assert!(
            matches!(action, Action::Upload(ref args) if args.path == PathBuf::from("logo.png"))
        );

        let action = dispatch(&["projectdesk", "route", "/projects/3"]).unwrap();
        assert!(matches!(action, Action::Route(ref args) if args.path == "/projects/3"));
    }
}
