// Credential store. The API key lives in a per-user dotfile and is asked
// for interactively exactly once; after that every run reads it silently.
// Lookup order: `DEEPAI_API_KEY` in the environment, then the rc file, then
// the prompt.

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::DeepaiError;
use crate::ui;

/// Name of the key file in the user's home directory.
pub const RC_FILE_NAME: &str = ".deepapi.rc";

/// Produce the API key, prompting and persisting it on first use. Fails
/// with `MissingCredential` when no key exists anywhere and stdin is not a
/// terminal, so scripted runs stop instead of hanging on a prompt.
pub fn load_or_prompt() -> Result<String> {
    if let Some(key) = env_key() {
        return Ok(key);
    }

    let path = rc_path();
    if let Some(key) = read_key(&path) {
        return Ok(key);
    }

    if !io::stdin().is_tty() {
        return Err(DeepaiError::MissingCredential.into());
    }

    let key = ui::prompt_api_key()?;
    if key.is_empty() {
        return Err(DeepaiError::MissingCredential.into());
    }

    store(&path, &key)?;
    Ok(key)
}

fn env_key() -> Option<String> {
    let key = env::var("DEEPAI_API_KEY").ok()?;
    let key = key.trim();
    (!key.is_empty()).then(|| key.to_string())
}

/// `DEEPAI_RC` relocates the key file (the test suite uses this); the
/// default is `~/.deepapi.rc`. An empty value counts as unset.
fn rc_path() -> PathBuf {
    if let Ok(rc) = env::var("DEEPAI_RC") {
        if !rc.is_empty() {
            return PathBuf::from(rc);
        }
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(RC_FILE_NAME)
}

fn read_key(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let key = contents.trim();
    (!key.is_empty()).then(|| key.to_string())
}

/// Persist the entered key. Creates the file with owner-only permissions,
/// fills in a blank file, and leaves any file that already holds a key (or
/// cannot be read) untouched.
fn store(path: &Path, key: &str) -> Result<()> {
    match fs::read_to_string(path) {
        Ok(existing) if !existing.trim().is_empty() => return Ok(()),
        Err(err) if err.kind() != io::ErrorKind::NotFound => return Ok(()),
        _ => {}
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .with_context(|| format!("Failed to save API key to {}", path.display()))?;
    file.write_all(key.as_bytes())
        .with_context(|| format!("Failed to save API key to {}", path.display()))?;
    Ok(())
}
