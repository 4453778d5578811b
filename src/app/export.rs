//! Saving the buffer as a plain-text file.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::app::error::Result;

/// Fixed name of the exported file.
pub const DOWNLOAD_FILENAME: &str = "myTextFile.txt";

/// The directory exports land in: the user's download directory, falling
/// back to the home directory, then the working directory.
fn download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write `text` as `DOWNLOAD_FILENAME` inside `dir`.
pub fn save_into(dir: &Path, text: &str) -> Result<PathBuf> {
    let path = dir.join(DOWNLOAD_FILENAME);
    fs::write(&path, text)?;
    info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(path)
}

/// Write `text` into the user's download directory.
pub fn save_to_downloads(text: &str) -> Result<PathBuf> {
    save_into(&download_dir(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_into_writes_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_into(dir.path(), "hello world").unwrap();

        assert_eq!(path.file_name().unwrap().to_str(), Some(DOWNLOAD_FILENAME));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
    }

    #[test]
    fn test_save_into_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        save_into(dir.path(), "first").unwrap();
        let path = save_into(dir.path(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_save_into_missing_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(save_into(&missing, "text").is_err());
    }
}
