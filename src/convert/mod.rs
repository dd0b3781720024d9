//! Converter adapter for turning raw HTML into Markdown
//!
//! The pipeline treats conversion as an opaque capability behind the
//! [`Converter`] trait: raw markup in, normalized text out, or a failure
//! signal. The default implementation wraps the `htmd` crate. A failing
//! conversion never aborts a crawl; the coordinator degrades the page to
//! empty converted content.

use htmd::HtmlToMarkdown;
use thiserror::Error;

/// Conversion failure for a single page
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Markdown conversion failed: {0}")]
    Conversion(String),
}

/// The content-conversion capability
///
/// Implementations must be usable from the async coordinator, hence the
/// `Send + Sync` bound.
pub trait Converter: Send + Sync {
    /// Converts raw HTML markup to Markdown
    fn convert(&self, html: &str) -> Result<String, ConvertError>;
}

/// Default converter backed by `htmd`
///
/// Scripts and styles carry no prose, so they are skipped outright.
pub struct MarkdownConverter {
    inner: HtmlToMarkdown,
}

impl MarkdownConverter {
    /// Creates a converter with the default element handling
    pub fn new() -> Self {
        let inner = HtmlToMarkdown::builder()
            .skip_tags(vec!["script", "style"])
            .build();

        Self { inner }
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for MarkdownConverter {
    fn convert(&self, html: &str) -> Result<String, ConvertError> {
        self.inner
            .convert(html)
            .map_err(|e| ConvertError::Conversion(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_heading() {
        let converter = MarkdownConverter::new();
        let markdown = converter
            .convert("<html><body><h1>Hello</h1></body></html>")
            .unwrap();
        assert!(markdown.contains("# Hello"));
    }

    #[test]
    fn test_convert_paragraph_and_link() {
        let converter = MarkdownConverter::new();
        let markdown = converter
            .convert(r#"<p>Read <a href="/writing">my writing</a>.</p>"#)
            .unwrap();
        assert!(markdown.contains("[my writing](/writing)"));
    }

    #[test]
    fn test_scripts_skipped() {
        let converter = MarkdownConverter::new();
        let markdown = converter
            .convert("<body><script>alert(1)</script><p>Text</p></body>")
            .unwrap();
        assert!(!markdown.contains("alert"));
        assert!(markdown.contains("Text"));
    }

    #[test]
    fn test_empty_input() {
        let converter = MarkdownConverter::new();
        let markdown = converter.convert("").unwrap();
        assert!(markdown.trim().is_empty());
    }
}
