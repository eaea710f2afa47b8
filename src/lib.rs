// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) is a thin shell over these modules.
//
// Module responsibilities:
// - `ops`: The closed set of supported operations and their endpoint,
//   usage and documentation metadata.
// - `cli`: Argument parsing, the per-operation handlers and the
//   operation-named binary aliasing.
// - `credentials`: API key lookup across the environment, the rc file
//   and the interactive first-run prompt.
// - `paths`: Input image validation and absolutization.
// - `api`: Encapsulates HTTP interactions with the DeepAI endpoints
//   (multipart upload, response decoding).
// - `output`: Result download and the derived output path beside the
//   input image.
// - `ui`: Terminal prompts and progress indicators.
// - `error`: The error type shared by all of the above.
pub mod api;
pub mod cli;
pub mod credentials;
pub mod error;
pub mod ops;
pub mod output;
pub mod paths;
pub mod ui;
