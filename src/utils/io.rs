//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", path.display()))))
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// The rename is atomic on POSIX filesystems, so readers always see
/// either the old content or the new content, never a partial write.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some("write".to_string()),
        )
    })?;

    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some("write".to_string()),
        )
    })?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("write {}", tmp_path.display())))
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("rename {}", path.display())))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<html></html>").unwrap();

        let content = read_file(&path).unwrap();
        assert_eq!(content, "<html></html>");
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/page.html"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_file_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "old").unwrap();

        write_file_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("page.html.tmp").exists());
    }

    #[test]
    fn write_file_atomic_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.html");

        write_file_atomic(&path, "content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }
}
