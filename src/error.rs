// Error taxonomy for the crate. Every failure a user can hit has a variant
// here, so `main` can pick an exit code and usage mistakes keep their
// console banner while network errors surface with their cause.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ops::Operation;

#[derive(Debug, Error)]
pub enum DeepaiError {
    /// No key in the environment or on disk, and stdin is not a terminal,
    /// so the first-run prompt cannot be shown.
    #[error("no API key is configured and there is no terminal to prompt for one")]
    MissingCredential,

    /// A referenced image does not exist, or a required image argument was
    /// never supplied. Displays the banner the usage strings were written
    /// for: the offending path (when there is one) followed by the
    /// operation's usage text.
    #[error("{}{}", banner(.path), .usage)]
    InvalidInput {
        path: Option<PathBuf>,
        usage: &'static str,
    },

    /// The dispatch token named no registered operation.
    #[error("unknown operation `{0}` (expected colorize, superres, similarity, deepdream or waifu2x)")]
    UnknownOperation(String),

    /// The inference submission failed: network, auth or server side.
    #[error("{operation} request failed: {reason}")]
    RemoteCallFailure {
        operation: &'static str,
        reason: String,
    },

    /// The result artifact could not be fetched or written.
    #[error("download of {url} failed: {reason}")]
    DownloadFailure { url: String, reason: String },
}

impl DeepaiError {
    /// Resolution of `path` failed while preparing `operation`.
    pub fn invalid_image(path: &Path, operation: Operation) -> Self {
        DeepaiError::InvalidInput {
            path: Some(path.to_path_buf()),
            usage: operation.usage(),
        }
    }

    /// An image argument required by `operation` was not supplied.
    pub fn missing_images(operation: Operation) -> Self {
        DeepaiError::InvalidInput {
            path: None,
            usage: operation.usage(),
        }
    }

    /// Usage-class errors exit with code 2 and print their banner bare;
    /// everything else is a runtime failure and exits 1.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            DeepaiError::InvalidInput { .. } | DeepaiError::UnknownOperation(_)
        )
    }
}

fn banner(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("Invalid Image(s)\n  {}\n", path.display()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_image_shows_path_and_usage() {
        let err = DeepaiError::invalid_image(Path::new("ghost.jpg"), Operation::Colorize);
        let text = err.to_string();
        assert!(text.contains("Invalid Image(s)"));
        assert!(text.contains("ghost.jpg"));
        assert!(text.contains("USAGE: colorize image.jpg"));
    }

    #[test]
    fn missing_images_is_the_bare_usage_text() {
        let err = DeepaiError::missing_images(Operation::Similarity);
        assert_eq!(
            err.to_string(),
            "Missing Images.\n  USAGE: similarity image1.jpg image2.jpg"
        );
    }

    #[test]
    fn only_input_errors_count_as_usage() {
        assert!(DeepaiError::UnknownOperation("blur".into()).is_usage());
        assert!(DeepaiError::missing_images(Operation::Waifu2x).is_usage());
        assert!(!DeepaiError::MissingCredential.is_usage());
        assert!(!DeepaiError::RemoteCallFailure {
            operation: "colorize",
            reason: "connection refused".into(),
        }
        .is_usage());
    }
}
