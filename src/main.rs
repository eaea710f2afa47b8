// Entrypoint for the CLI application.
// - Keeps `main` small: rewrite the arguments for operation-named
//   binaries, parse, run the selected handler and map errors to exit
//   codes.
// - Usage mistakes (bad image path, unknown operation) print the short
//   usage text and exit 2; everything else reports through anyhow's
//   chain formatting and exits 1.

use std::process::ExitCode;

use clap::Parser;

use deepai_cli::cli::{self, Cli};
use deepai_cli::error::DeepaiError;

fn main() -> ExitCode {
    let args = cli::multicall(std::env::args_os().collect());
    let cli = Cli::parse_from(args);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<DeepaiError>() {
        Some(known) if known.is_usage() => {
            eprintln!("{known}");
            ExitCode::from(2)
        }
        _ => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
