pub mod logging;
pub mod projects;
pub mod session;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_UPLOAD: &str = "upload";
pub const CMD_ROUTE: &str = "route";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("projectdesk")
        .about("Project management client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(CMD_LOGIN).about("Log in with --email/--password and print the session user"))
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create an account for --email/--password")
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help("Display name for the new account")
                        .required(true),
                ),
        )
        .subcommand(Command::new(CMD_WHOAMI).about("Print the user bound to the current session"))
        .subcommand(Command::new(CMD_LOGOUT).about("End the current session"))
        .subcommand(projects::command())
        .subcommand(
            Command::new(CMD_UPLOAD).about("Upload a file").arg(
                Arg::new("file")
                    .help("Path of the file to upload")
                    .required(true)
                    .value_parser(clap::value_parser!(PathBuf)),
            ),
        )
        .subcommand(
            Command::new(CMD_ROUTE)
                .about("Resolve an application path to its view")
                .arg(Arg::new("path").help("Path, example: /projects/7/edit").required(true)),
        );

    let command = session::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::session::{ARG_API_URL, ARG_EMAIL, ARG_PASSWORD, ARG_TIMEOUT};

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "projectdesk");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Project management client".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_global_args_after_subcommand() {
        temp_env::with_vars_unset(
            [
                "PROJECTDESK_API_BASE_URL",
                "PROJECTDESK_TIMEOUT_MS",
                "PROJECTDESK_EMAIL",
                "PROJECTDESK_PASSWORD",
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "projectdesk",
                    "whoami",
                    "--api-url",
                    "http://localhost:3000",
                    "--timeout",
                    "2500",
                    "--email",
                    "a@b.com",
                    "--password",
                    "x",
                ]);

                assert_eq!(matches.subcommand_name(), Some(CMD_WHOAMI));
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                    Some("http://localhost:3000")
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(2500));
                assert_eq!(
                    matches.get_one::<String>(ARG_EMAIL).map(String::as_str),
                    Some("a@b.com")
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_PASSWORD).map(String::as_str),
                    Some("x")
                );
            },
        );
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let result = new().try_get_matches_from(vec!["projectdesk", "login", "--email", "nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = new().try_get_matches_from(vec!["projectdesk", "whoami", "--timeout", "0"]);
        assert!(result.is_err());

        temp_env::with_vars([("PROJECTDESK_TIMEOUT_MS", Some("0"))], || {
            let result = new().try_get_matches_from(vec!["projectdesk", "whoami"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_subcommand_is_required() {
        let result = new().try_get_matches_from(vec!["projectdesk"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("PROJECTDESK_API_BASE_URL", Some("https://api.projectdesk.dev")),
                ("PROJECTDESK_TIMEOUT_MS", Some("1500")),
                ("PROJECTDESK_EMAIL", Some("a@b.com")),
                ("PROJECTDESK_PASSWORD", Some("secret")),
                ("PROJECTDESK_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["projectdesk", "whoami"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                    Some("https://api.projectdesk.dev")
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(1500));
                assert_eq!(
                    matches.get_one::<String>(ARG_EMAIL).map(String::as_str),
                    Some("a@b.com")
                );
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("PROJECTDESK_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["projectdesk", "whoami"]);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("PROJECTDESK_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["projectdesk".to_string(), "whoami".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
