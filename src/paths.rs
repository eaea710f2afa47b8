// Input path handling. Every operation runs this before anything touches
// the network: the raw argument becomes an absolute path and must point at
// an existing regular file.

use std::io;
use std::path::{Path, PathBuf};

/// Make a user-supplied image path absolute against the current working
/// directory and confirm it refers to a regular file. Symlinks are kept as
/// named, so the derived output file lands next to the path the user gave.
pub fn resolve(raw: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(raw)?;

    if !absolute.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such image file: {}", absolute.display()),
        ));
    }

    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_an_existing_file_to_an_absolute_path() {
        let dir = TempDir::new().unwrap();
        let image = dir.path().join("cat.jpg");
        fs::write(&image, b"jpeg bytes").unwrap();

        let resolved = resolve(&image).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("cat.jpg"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let image = dir.path().join("cat.jpg");
        fs::write(&image, b"jpeg bytes").unwrap();

        let first = resolve(&image).unwrap();
        let second = resolve(&first).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_files_are_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(&dir.path().join("ghost.jpg")).is_err());
    }

    #[test]
    fn directories_are_not_images() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(dir.path()).is_err());
    }

    #[test]
    fn relative_paths_to_nothing_are_rejected() {
        assert!(resolve(Path::new("definitely-not-a-real-image-here.jpg")).is_err());
    }
}
