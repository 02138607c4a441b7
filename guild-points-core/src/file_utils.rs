//! File utility functions.

use crate::error::{GuildPointsError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open a text file for buffered line-by-line reading.
pub fn open_text_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        GuildPointsError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open {}: {}", path.display(), e),
        ))
    })?;
    Ok(BufReader::new(file))
}

/// Write text to a file, creating missing parent directories.
pub fn write_text_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sql");

        let err = open_text_file(&path).unwrap_err();
        match err {
            GuildPointsError::Io(io) => {
                assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
                assert!(io.to_string().contains("missing.sql"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("guild_data.json");

        write_text_file(&path, "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
