//! Query helpers over a generated sitemap
//!
//! Downstream consumers need three operations: list every page with its
//! display metadata, fetch a page's content by canonical path, and match a
//! keyword against titles and descriptions. The sitemap's shape makes each
//! of these a direct lookup or filter over the mapping.

use crate::sitemap::Sitemap;
use thiserror::Error;

/// Errors from query operations
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("No page recorded for path: {0}")]
    NotFound(String),

    #[error("Page {0} has no converted content")]
    NoContent(String),

    #[error("Failed to read content file: {0}")]
    Io(#[from] std::io::Error),
}

/// Display metadata for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub path: String,
    pub title: String,
    pub description: String,
}

/// Lists every page with its title and description, in discovery order
pub fn list_pages(sitemap: &Sitemap) -> Vec<PageSummary> {
    sitemap
        .iter()
        .map(|record| PageSummary {
            path: record.path.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
        })
        .collect()
}

/// Returns the converted Markdown content for a canonical path
///
/// # Arguments
///
/// * `sitemap` - The loaded sitemap document
/// * `path` - Canonical path of the page
///
/// # Returns
///
/// * `Ok(String)` - The Markdown content
/// * `Err(QueryError)` - Unknown path, no converted content, or read failure
pub fn page_markdown(sitemap: &Sitemap, path: &str) -> Result<String, QueryError> {
    let record = sitemap
        .get(path)
        .ok_or_else(|| QueryError::NotFound(path.to_string()))?;

    if record.markdown.is_empty() {
        return Err(QueryError::NoContent(path.to_string()));
    }

    Ok(std::fs::read_to_string(&record.markdown)?)
}

/// Returns the raw HTML content for a canonical path
pub fn page_html(sitemap: &Sitemap, path: &str) -> Result<String, QueryError> {
    let record = sitemap
        .get(path)
        .ok_or_else(|| QueryError::NotFound(path.to_string()))?;

    Ok(std::fs::read_to_string(&record.html)?)
}

/// Finds pages whose title or description contains the keyword
///
/// Matching is case-insensitive. Returns canonical paths in discovery
/// order.
pub fn search(sitemap: &Sitemap, keyword: &str) -> Vec<String> {
    let needle = keyword.to_lowercase();
    sitemap
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.description.to_lowercase().contains(&needle)
        })
        .map(|record| record.path.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::PageRecord;

    fn sample_sitemap() -> Sitemap {
        let mut sitemap = Sitemap::new();
        sitemap.insert(PageRecord {
            path: "/".to_string(),
            html: "./html/index.html".to_string(),
            markdown: "./markdown/index.md".to_string(),
            title: "Home".to_string(),
            description: "Personal site of a generative artist".to_string(),
        });
        sitemap.insert(PageRecord {
            path: "/writing".to_string(),
            html: "./html/writing.html".to_string(),
            markdown: "./markdown/writing.md".to_string(),
            title: "Writing".to_string(),
            description: "Essays and notes".to_string(),
        });
        sitemap
    }

    #[test]
    fn test_list_pages_in_order() {
        let pages = list_pages(&sample_sitemap());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].path, "/");
        assert_eq!(pages[1].title, "Writing");
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let hits = search(&sample_sitemap(), "WRITING");
        assert_eq!(hits, vec!["/writing".to_string()]);
    }

    #[test]
    fn test_search_matches_description() {
        let hits = search(&sample_sitemap(), "generative");
        assert_eq!(hits, vec!["/".to_string()]);
    }

    #[test]
    fn test_search_no_match() {
        let hits = search(&sample_sitemap(), "nonexistent");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_page_markdown_unknown_path() {
        let result = page_markdown(&sample_sitemap(), "/missing");
        assert!(matches!(result, Err(QueryError::NotFound(_))));
    }

    #[test]
    fn test_page_markdown_empty_location() {
        let mut sitemap = sample_sitemap();
        sitemap.insert(PageRecord {
            path: "/broken".to_string(),
            html: "./html/broken.html".to_string(),
            markdown: String::new(),
            title: String::new(),
            description: String::new(),
        });
        let result = page_markdown(&sitemap, "/broken");
        assert!(matches!(result, Err(QueryError::NoContent(_))));
    }

    #[test]
    fn test_page_markdown_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let md_path = dir.path().join("index.md");
        std::fs::write(&md_path, "# Home\n").unwrap();

        let mut sitemap = Sitemap::new();
        sitemap.insert(PageRecord {
            path: "/".to_string(),
            html: String::new(),
            markdown: md_path.display().to_string(),
            title: "Home".to_string(),
            description: String::new(),
        });

        let content = page_markdown(&sitemap, "/").unwrap();
        assert_eq!(content, "# Home\n");
    }
}
