use crate::cli::{
    actions::session::{connect, open, print_json},
    globals::GlobalArgs,
};
use crate::features::files;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub path: PathBuf,
}

/// Upload a file and print the API response.
/// # Errors
/// Returns an error if the file cannot be read or the upload fails.
pub async fn execute(args: Args) -> Result<()> {
    let auth = connect(&args.globals)?;
    open(&auth, &args.globals).await?;

    let body = files::upload_path(auth.api(), &args.path)
        .await
        .with_context(|| format!("Failed to upload {}", args.path.display()))?;

    print_json(&body)
}
