use crate::cli::actions::session::print_json;
use crate::routes;
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub path: String,
}

/// Print the view a path resolves to.
/// # Errors
/// Returns an error if the match cannot be printed.
pub fn execute(args: &Args) -> Result<()> {
    print_json(&routes::resolve(&args.path))
}
