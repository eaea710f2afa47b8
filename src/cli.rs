// Command line surface and the per-operation handlers. The surface is
// `deepai <operation> <image1> [<image2>]`: one operation per run, image
// arguments positional, no operation flags and no batch lists.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::api::ApiClient;
use crate::credentials;
use crate::error::DeepaiError;
use crate::ops::{self, Operation};
use crate::output;
use crate::paths;
use crate::ui;

#[derive(Parser, Debug)]
#[command(
    name = "deepai",
    version,
    about = "Send images through the DeepAI machine learning endpoints",
    after_help = after_help()
)]
pub struct Cli {
    /// Operation to run (see the list below)
    pub operation: String,

    /// Image to process
    pub image: PathBuf,

    /// Second image (similarity only)
    pub image2: Option<PathBuf>,
}

fn after_help() -> String {
    format!(
        "{}\nCredentials:\n  The API key is read from $DEEPAI_API_KEY, then from ~/{}, and is\n  requested interactively on first use.",
        ops::operations_help(),
        credentials::RC_FILE_NAME,
    )
}

/// Installations that link one program name per operation dispatch on the
/// invoked name: when the binary (or a symlink to it) is named after an
/// operation, insert that name as the operation token. `file_stem` drops
/// both the directory prefix and any `.exe` suffix from argument zero.
pub fn multicall(mut args: Vec<OsString>) -> Vec<OsString> {
    let alias = args
        .first()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|name| Operation::from_name(name).is_some())
        .map(str::to_owned);

    if let Some(name) = alias {
        args.insert(1, name.into());
    }

    args
}

/// Route to exactly one handler. Inputs are validated before the credential
/// lookup, so a bad path never triggers the first-run key prompt.
pub fn run(cli: Cli) -> Result<()> {
    let operation = Operation::from_name(&cli.operation)
        .ok_or_else(|| DeepaiError::UnknownOperation(cli.operation.clone()))?;

    match operation {
        Operation::Similarity => similarity(&cli),
        _ => transform(operation, &cli),
    }
}

/// Shared flow for the four image-producing operations: resolve the input,
/// submit it, download the result next to the input, report the saved path.
fn transform(operation: Operation, cli: &Cli) -> Result<()> {
    let image = resolve(&cli.image, operation)?;

    let api = ApiClient::new(credentials::load_or_prompt()?)?;

    let spinner = ui::spinner("Uploading...");
    let output_url = api.transform(operation, &image);
    spinner.finish_and_clear();
    let output_url = output_url?;

    let destination = output::output_path(&image, operation);
    output::download(&output_url, &destination)?;
    println!("File saved to: {}", destination.display());
    Ok(())
}

/// Similarity submits two images and prints the score; no file is written.
fn similarity(cli: &Cli) -> Result<()> {
    let operation = Operation::Similarity;
    let image1 = resolve(&cli.image, operation)?;
    let image2 = cli
        .image2
        .as_deref()
        .ok_or_else(|| DeepaiError::missing_images(operation))?;
    let image2 = resolve(image2, operation)?;

    let api = ApiClient::new(credentials::load_or_prompt()?)?;

    let spinner = ui::spinner("Uploading...");
    let output = api.similarity(&image1, &image2);
    spinner.finish_and_clear();

    println!("{}", output?);
    Ok(())
}

fn resolve(raw: &Path, operation: Operation) -> Result<PathBuf> {
    paths::resolve(raw).map_err(|_| DeepaiError::invalid_image(raw, operation).into())
}
