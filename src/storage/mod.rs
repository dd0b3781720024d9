//! Content store for raw and converted page content
//!
//! Each crawl run writes two parallel directory hierarchies that mirror the
//! site's path structure: one for raw HTML, one for converted Markdown.
//! The store is a snapshot, not a log; creating it clears whatever a
//! previous run left behind.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from content store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to prepare directory {path}: {source}")]
    Prepare {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Filesystem store holding one crawl run's page content
#[derive(Debug)]
pub struct ContentStore {
    html_dir: PathBuf,
    markdown_dir: PathBuf,
}

impl ContentStore {
    /// Creates a content store rooted at the two output directories
    ///
    /// Both directories are cleared and recreated, replacing any output
    /// from a previous run.
    ///
    /// # Arguments
    ///
    /// * `html_dir` - Root directory for raw HTML
    /// * `markdown_dir` - Root directory for converted Markdown
    ///
    /// # Returns
    ///
    /// * `Ok(ContentStore)` - Store with both hierarchies ready
    /// * `Err(StoreError)` - A directory could not be cleared or created
    pub fn create(html_dir: &Path, markdown_dir: &Path) -> Result<Self, StoreError> {
        for dir in [html_dir, markdown_dir] {
            clear_directory(dir)?;
        }

        Ok(Self {
            html_dir: html_dir.to_path_buf(),
            markdown_dir: markdown_dir.to_path_buf(),
        })
    }

    /// Maps a canonical path to the file stem used in both hierarchies
    ///
    /// The root path maps to `index`; any other path is used as-is without
    /// its leading slash, so nested pages land in nested directories.
    pub fn file_stem(canonical_path: &str) -> &str {
        if canonical_path == "/" {
            "index"
        } else {
            canonical_path.trim_start_matches('/')
        }
    }

    /// Persists raw HTML for a page
    ///
    /// # Arguments
    ///
    /// * `canonical_path` - The page's canonical path
    /// * `content` - The raw markup
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Location of the written file, for the page record
    /// * `Err(StoreError)` - The write failed; other pages are unaffected
    pub fn write_html(&self, canonical_path: &str, content: &str) -> Result<PathBuf, StoreError> {
        write_file(&self.html_dir, Self::file_stem(canonical_path), "html", content)
    }

    /// Persists converted Markdown for a page
    pub fn write_markdown(
        &self,
        canonical_path: &str,
        content: &str,
    ) -> Result<PathBuf, StoreError> {
        write_file(
            &self.markdown_dir,
            Self::file_stem(canonical_path),
            "md",
            content,
        )
    }
}

/// Clears all prior content under a directory, creating it if absent
fn clear_directory(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() {
        tracing::debug!("Clearing directory: {}", dir.display());
        std::fs::remove_dir_all(dir).map_err(|source| StoreError::Prepare {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    std::fs::create_dir_all(dir).map_err(|source| StoreError::Prepare {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes one file under a hierarchy root, creating parent directories
fn write_file(root: &Path, stem: &str, extension: &str, content: &str) -> Result<PathBuf, StoreError> {
    let path = root.join(format!("{}.{}", stem, extension));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Prepare {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(&path, content).map_err(|source| StoreError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_store(dir: &tempfile::TempDir) -> ContentStore {
        ContentStore::create(&dir.path().join("html"), &dir.path().join("markdown")).unwrap()
    }

    #[test]
    fn test_file_stem_root() {
        assert_eq!(ContentStore::file_stem("/"), "index");
    }

    #[test]
    fn test_file_stem_nested() {
        assert_eq!(ContentStore::file_stem("/writing/post-1"), "writing/post-1");
    }

    #[test]
    fn test_write_root_page() {
        let dir = tempdir().unwrap();
        let store = create_store(&dir);

        let path = store.write_html("/", "<html></html>").unwrap();
        assert_eq!(path, dir.path().join("html").join("index.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_nested_page_creates_directories() {
        let dir = tempdir().unwrap();
        let store = create_store(&dir);

        let path = store.write_markdown("/writing/post-1", "# Post 1\n").unwrap();
        assert_eq!(
            path,
            dir.path().join("markdown").join("writing").join("post-1.md")
        );
        assert!(path.exists());
    }

    #[test]
    fn test_parallel_hierarchies() {
        let dir = tempdir().unwrap();
        let store = create_store(&dir);

        let html = store.write_html("/about", "<html></html>").unwrap();
        let md = store.write_markdown("/about", "About\n").unwrap();

        assert_eq!(html, dir.path().join("html").join("about.html"));
        assert_eq!(md, dir.path().join("markdown").join("about.md"));
    }

    #[test]
    fn test_create_replaces_previous_run() {
        let dir = tempdir().unwrap();

        let store = create_store(&dir);
        let stale = store.write_html("/old-page", "<html></html>").unwrap();
        assert!(stale.exists());

        // A new run clears both hierarchies
        let _store = create_store(&dir);
        assert!(!stale.exists());
        assert!(dir.path().join("html").exists());
    }
}
