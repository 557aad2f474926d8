use std::fs;
use std::path::Path;

use anyhow::Result;
use hexscan_core::FileReader;
use tracing::info;

use crate::SourceError;

/// Whole-file UTF-8 reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8FileReader;

impl FileReader for Utf8FileReader {
    fn read(&self, path: &Path) -> Result<String> {
        info!("Reading file: {}", path.display());

        let content = fs::read_to_string(path).map_err(SourceError::Io)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_success() {
        let dir = std::env::temp_dir().join(format!("hexscan_rf_{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("palette.txt");
        std::fs::write(&file, "primary #336699\nmuted #ccc\n").unwrap();

        let reader = Utf8FileReader;
        let content = reader.read(&file).unwrap();
        assert!(content.contains("#336699"));
        assert!(content.contains("#ccc"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_file_not_found() {
        let reader = Utf8FileReader;
        let err = reader.read(Path::new("/nonexistent/palette.txt")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
