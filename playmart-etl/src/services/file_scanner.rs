//! Source file scanner
//!
//! Recursive discovery of ingestible files under a root directory, matched
//! by extension only. An absent root or a tree with no matches yields an
//! empty list, not an error; unreadable entries are logged and skipped.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Recursive source file scanner with an extension filter
pub struct FileScanner {
    extension: String,
    ignore_patterns: Vec<String>,
}

impl FileScanner {
    /// Create new file scanner for one extension (compared case-insensitively)
    ///
    /// Ignores system files like .DS_Store, Thumbs.db, .git, etc.
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_ascii_lowercase(),
            ignore_patterns: vec![
                ".DS_Store".to_string(),
                "Thumbs.db".to_string(),
                ".git".to_string(),
                ".svn".to_string(),
            ],
        }
    }

    /// Scan directory for matching files
    ///
    /// Returns absolute paths, sorted by file name per directory so runs
    /// enumerate in a stable order. Traversal never aborts the run: access
    /// errors are logged at `warn` and the offending entry is skipped.
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            debug!("Source directory absent or not a directory: {}", root.display());
            return Vec::new();
        }

        // Canonicalize once so every yielded path is absolute
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

        let mut files = Vec::new();

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e));

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.matches_extension(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    warn!("Error accessing entry: {}", e);
                    // Continue scanning, don't abort
                }
            }
        }

        debug!("{} matching files discovered under {}", files.len(), root.display());

        files
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        let file_name = entry.file_name().to_string_lossy();
        self.ignore_patterns.iter().any(|pattern| file_name.contains(pattern.as_str()))
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}
