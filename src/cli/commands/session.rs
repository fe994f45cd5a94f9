//! Connection and credential arguments shared by every subcommand.

use crate::app_lib::config::{ENV_API_BASE_URL, ENV_TIMEOUT_MS};
use anyhow::Result;
use clap::{Arg, Command, builder::ValueParser};
use regex::Regex;
use secrecy::SecretString;
use std::time::Duration;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[must_use]
pub fn validator_email() -> ValueParser {
    ValueParser::from(move |email: &str| -> std::result::Result<String, String> {
        let email = email.trim();
        if valid_email(email) {
            Ok(email.to_string())
        } else {
            Err("invalid email address".to_string())
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("API base URL, example: https://api.projectdesk.dev")
                .env(ENV_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in milliseconds (default: 10000)")
                .env(ENV_TIMEOUT_MS)
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Account email, used to log in before running the command")
                .env("PROJECTDESK_EMAIL")
                .global(true)
                .value_parser(validator_email()),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long(ARG_PASSWORD)
                .help("Account password")
                .env("PROJECTDESK_PASSWORD")
                .hide_env_values(true)
                .global(true),
        )
}

/// Values read from the shared arguments; `None` means "not given".
#[derive(Debug)]
pub struct Options {
    pub api_url: Option<String>,
    pub timeout: Option<Duration>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

impl Options {
    /// # Errors
    /// This function returns a `Result` for consistency with other option parsers,
    /// though currently it always returns `Ok`.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        Ok(Self {
            api_url: matches.get_one::<String>(ARG_API_URL).cloned(),
            timeout: matches
                .get_one::<u64>(ARG_TIMEOUT)
                .map(|ms| Duration::from_millis(*ms)),
            email: matches.get_one::<String>(ARG_EMAIL).cloned(),
            password: matches
                .get_one::<String>(ARG_PASSWORD)
                .map(|password| SecretString::from(password.clone())),
        })
    }
}
