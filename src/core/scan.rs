//! Directory scanning for candidate HTML files.

use std::path::{Path, PathBuf};

use crate::defaults::HTML_EXTENSIONS;
use crate::error::{Error, Result};

/// How far below the scan root to look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Direct children of the root only.
    Shallow,
    /// The entire subtree.
    Recursive,
}

/// Directories that never contain site pages, skipped at any depth.
const SKIP_DIRS: &[&str] = &["node_modules", "vendor", ".git", ".svn", ".hg"];

/// Find all HTML files under `root`, sorted in lexicographic path order
/// so runs are reproducible.
///
/// The root must exist and be a directory. An empty result is not an
/// error; callers report it distinctly.
pub fn find_html_files(root: &Path, mode: ScanMode) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::scan_root_missing(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(Error::scan_root_not_directory(root.display().to_string()));
    }

    let mut files = match mode {
        ScanMode::Shallow => glob_children(root)?,
        ScanMode::Recursive => {
            let mut found = Vec::new();
            walk_recursive(root, &mut found);
            found
        }
    };

    files.sort();
    Ok(files)
}

/// Shallow scan: one glob pattern per extension, direct children only.
fn glob_children(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for ext in HTML_EXTENSIONS {
        let pattern = root.join(format!("*.{}", ext));
        let pattern = pattern.to_string_lossy();

        let entries = glob::glob(&pattern)
            .map_err(|e| Error::validation_invalid_pattern(pattern.to_string(), e.to_string()))?;

        files.extend(
            entries
                .filter_map(|entry| entry.ok())
                .filter(|path| path.is_file()),
        );
    }

    Ok(files)
}

fn walk_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        log_status!("scan", "Cannot read directory {}", dir.display());
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if SKIP_DIRS.contains(&name.as_str()) {
                continue;
            }
            walk_recursive(&path, files);
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if HTML_EXTENSIONS.contains(&ext) {
                files.push(path);
            }
        }
    }
}

/// Count of directory levels between a file and the scan root.
///
/// A root-level file is 0 deep; `a/b/c.html` is 2 deep.
pub fn depth_below_root(root: &Path, path: &Path) -> usize {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().count().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn shallow_scan_only_direct_children() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("index.html"));
        touch(&dir.path().join("about.htm"));
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("nested.html"));

        let files = find_html_files(dir.path(), ScanMode::Shallow).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["about.htm", "index.html"]);
    }

    #[test]
    fn recursive_scan_finds_nested_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("index.html"));
        let sub = dir.path().join("texts").join("older");
        fs::create_dir_all(&sub).unwrap();
        touch(&sub.join("story.html"));

        let files = find_html_files(dir.path(), ScanMode::Recursive).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("texts/older/story.html")));
    }

    #[test]
    fn results_are_sorted_lexicographically() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("zebra.html"));
        touch(&dir.path().join("apple.html"));
        touch(&dir.path().join("mango.html"));

        let files = find_html_files(dir.path(), ScanMode::Shallow).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn missing_root_is_an_error() {
        let result = find_html_files(Path::new("/nonexistent/site"), ScanMode::Recursive);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code.as_str(), "scan.root_missing");
    }

    #[test]
    fn file_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("index.html");
        touch(&file);

        let result = find_html_files(&file, ScanMode::Shallow);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code.as_str(), "scan.root_not_directory");
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let files = find_html_files(dir.path(), ScanMode::Recursive).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn non_html_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("page.html"));
        fs::write(dir.path().join("style.css"), "body {}").unwrap();
        fs::write(dir.path().join("navbar.js"), "function loadNavbar() {}").unwrap();

        let files = find_html_files(dir.path(), ScanMode::Recursive).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn vcs_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        let git = dir.path().join(".git");
        fs::create_dir(&git).unwrap();
        touch(&git.join("index.html"));
        touch(&dir.path().join("index.html"));

        let files = find_html_files(dir.path(), ScanMode::Recursive).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("index.html"));
        assert!(!files[0].to_string_lossy().contains(".git"));
    }

    #[test]
    fn depth_of_root_level_file_is_zero() {
        assert_eq!(
            depth_below_root(Path::new("/site"), Path::new("/site/index.html")),
            0
        );
    }

    #[test]
    fn depth_counts_directory_levels() {
        assert_eq!(
            depth_below_root(Path::new("/site"), Path::new("/site/a/b/c.html")),
            2
        );
    }
}
