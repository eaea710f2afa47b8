// Result persistence: derive the local output filename from the input and
// the operation, then fetch the remote result into it. Downloads are a
// plain GET of the presigned URL the API hands back, so no auth header.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::DeepaiError;
use crate::ops::Operation;
use crate::ui;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// `photos/cat.jpg` + colorize -> `photos/cat.colorize.jpg`. The result is
/// always a jpeg, whatever the input extension was.
pub fn output_path(input: &Path, operation: Operation) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(format!(".{}.jpg", operation.name()));
    input.with_file_name(name)
}

/// Fetch `url` into `dest`, streaming through a byte progress bar. One
/// attempt only; a failure names the URL so the user can retry by hand,
/// and a partially written file is removed rather than left looking like
/// a result.
pub fn download(url: &str, dest: &Path) -> Result<()> {
    let client = Client::builder()
        .user_agent(concat!("deepai-cli/", env!("CARGO_PKG_VERSION")))
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .map_err(|err| DeepaiError::DownloadFailure {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(DeepaiError::DownloadFailure {
            url: url.to_string(),
            reason: format!("server answered {}", response.status()),
        }
        .into());
    }

    let bar = ui::download_bar(response.content_length());
    let mut file =
        File::create(dest).with_context(|| format!("Failed to create {}", dest.display()))?;
    let copied = io::copy(&mut bar.wrap_read(response), &mut file);
    bar.finish_and_clear();

    if let Err(err) = copied {
        drop(file);
        let _ = fs::remove_file(dest);
        return Err(DeepaiError::DownloadFailure {
            url: url.to_string(),
            reason: err.to_string(),
        }
        .into());
    }

    Ok(())
}
