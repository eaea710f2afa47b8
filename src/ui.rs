// Interaction layer: the first-run API key prompt (via `dialoguer`) and the
// progress indicators shown around the two network stages. Everything else
// the tool prints goes straight to stdout/stderr from the handlers.

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Ask for an API key on the terminal, pointing at the dashboard page
/// where keys are issued. Runs at most once per machine; the entered key
/// is persisted by the caller.
pub fn prompt_api_key() -> Result<String> {
    println!("No local API Key found, enter yours or get one from: ");
    println!("https://deepai.org/dashboard/profile");
    let key: String = Input::new().with_prompt("DeepAPI Key").interact_text()?;
    Ok(key.trim().to_string())
}

/// Spinner shown while a request is in flight. The steady tick keeps it
/// moving even though the HTTP call blocks this thread.
pub fn spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Byte-count bar for the result download; falls back to a spinner when the
/// server does not announce a length.
pub fn download_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(length) => {
            let bar = ProgressBar::new(length);
            bar.set_style(ProgressStyle::with_template("{bar:40} {bytes}/{total_bytes}").unwrap());
            bar
        }
        None => spinner("Downloading..."),
    }
}
