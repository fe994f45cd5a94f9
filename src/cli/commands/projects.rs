use clap::{Arg, Command, builder::ValueParser};
use serde_json::Value;

pub const CMD_PROJECTS: &str = "projects";
pub const ARG_ID: &str = "id";
pub const ARG_SEARCH: &str = "search";
pub const ARG_DATA: &str = "data";

/// Parses `--data` as a JSON object.
#[must_use]
pub fn validator_json_object() -> ValueParser {
    ValueParser::from(move |data: &str| -> std::result::Result<Value, String> {
        match serde_json::from_str::<Value>(data) {
            Ok(value) if value.is_object() => Ok(value),
            Ok(_) => Err("project data must be a JSON object".to_string()),
            Err(err) => Err(format!("invalid JSON: {err}")),
        }
    })
}

fn id_arg() -> Arg {
    Arg::new(ARG_ID)
        .help("Project id")
        .required(true)
        .value_parser(clap::value_parser!(i64))
}

fn data_arg() -> Arg {
    Arg::new(ARG_DATA)
        .short('d')
        .long(ARG_DATA)
        .help(r#"Project payload as a JSON object, example: '{"name":"Roadmap"}'"#)
        .required(true)
        .value_parser(validator_json_object())
}

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_PROJECTS)
        .about("List, show, create, update and delete projects")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list").about("List projects").arg(
                Arg::new(ARG_SEARCH)
                    .short('s')
                    .long(ARG_SEARCH)
                    .help("Only list projects matching this term"),
            ),
        )
        .subcommand(Command::new("get").about("Show one project").arg(id_arg()))
        .subcommand(
            Command::new("create")
                .about("Create a project")
                .arg(data_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Replace a project")
                .arg(id_arg())
                .arg(data_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a project")
                .arg(id_arg()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_validator_rejects_non_objects() {
        let command = Command::new("t").arg(Arg::new("d").value_parser(validator_json_object()));

        assert!(
            command
                .clone()
                .try_get_matches_from(["t", r#"{"name":"x"}"#])
                .is_ok()
        );
        assert!(command.clone().try_get_matches_from(["t", "[1,2]"]).is_err());
        assert!(command.try_get_matches_from(["t", "{oops"]).is_err());
    }
}
