//! HTML parsing: link extraction and page metadata
//!
//! Parsing is best-effort. Malformed markup degrades to an empty link set
//! and empty metadata for that page; it never aborts the crawl. Links are
//! returned as canonical paths, already filtered to the crawl's origin.

use crate::url::{canonical_path, Origin};
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from one HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Page title; empty string if absent
    pub title: String,

    /// Meta description; empty string if absent
    pub description: String,

    /// Canonical paths of same-origin links found on the page
    pub links: Vec<String>,
}

/// Parses a page and extracts metadata plus same-origin links
///
/// # Link Extraction Rules
///
/// - `<a href="...">` targets are resolved against `page_url`, so relative
///   and absolute references land on the same canonical path
/// - Cross-origin targets are discarded
/// - `javascript:`, `mailto:`, `tel:`, and `data:` targets are skipped
/// - Fragment-only anchors and `download` links are skipped
/// - Malformed targets are skipped silently
///
/// # Arguments
///
/// * `html` - The raw markup
/// * `page_url` - The page's own URL, for resolving relative references
/// * `origin` - The crawl origin; links elsewhere are dropped
pub fn parse_page(html: &str, page_url: &Url, origin: &Origin) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        description: extract_description(&document),
        links: extract_links(&document, page_url, origin),
    }
}

/// Extracts the page title, cleaned; empty string if absent
fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|element| clean_text(&element.text().collect::<String>()))
        .unwrap_or_default()
}

/// Extracts the meta description, cleaned; empty string if absent
fn extract_description(document: &Html) -> String {
    let Ok(selector) = Selector::parse(r#"meta[name="description"]"#) else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(clean_text)
        .unwrap_or_default()
}

/// Collapses runs of whitespace (including CR/LF) into single spaces and
/// trims the ends
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts canonical paths of all same-origin links in the document
fn extract_links(document: &Html, page_url: &Url, origin: &Origin) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();

    for element in document.select(&selector) {
        if element.value().attr("download").is_some() {
            continue;
        }

        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(url) = resolve_link(href, page_url) {
            if origin.same_origin(&url) {
                links.push(canonical_path(&url));
            }
        }
    }

    links
}

/// Resolves an href to an absolute URL, or `None` if it should be skipped
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let url = page_url.join(href).ok()?;

    if url.scheme() == "http" || url.scheme() == "https" {
        Some(url)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Origin {
        Origin::from_seed("https://example.com/").unwrap()
    }

    fn page_url() -> Url {
        Url::parse("https://example.com/writing/post-1").unwrap()
    }

    fn parse(html: &str) -> ParsedPage {
        parse_page(html, &page_url(), &origin())
    }

    #[test]
    fn test_extract_title() {
        let parsed = parse("<html><head><title>Post 1</title></head><body></body></html>");
        assert_eq!(parsed.title, "Post 1");
    }

    #[test]
    fn test_title_whitespace_collapsed() {
        let parsed = parse("<html><head><title>  Post\r\n  One  </title></head></html>");
        assert_eq!(parsed.title, "Post One");
    }

    #[test]
    fn test_missing_title_is_empty_string() {
        let parsed = parse("<html><head></head><body></body></html>");
        assert_eq!(parsed.title, "");
    }

    #[test]
    fn test_extract_description() {
        let parsed = parse(
            r#"<html><head><meta name="description" content="A post about things."></head></html>"#,
        );
        assert_eq!(parsed.description, "A post about things.");
    }

    #[test]
    fn test_missing_description_is_empty_string() {
        let parsed = parse("<html><head><title>T</title></head></html>");
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_description_whitespace_collapsed() {
        let parsed = parse(
            "<html><head><meta name=\"description\" content=\"line one\nline   two\"></head></html>",
        );
        assert_eq!(parsed.description, "line one line two");
    }

    #[test]
    fn test_relative_link_resolved_against_page() {
        let parsed = parse(r#"<body><a href="post-2">Next</a></body>"#);
        assert_eq!(parsed.links, vec!["/writing/post-2".to_string()]);
    }

    #[test]
    fn test_absolute_path_link() {
        let parsed = parse(r#"<body><a href="/about">About</a></body>"#);
        assert_eq!(parsed.links, vec!["/about".to_string()]);
    }

    #[test]
    fn test_same_origin_absolute_url() {
        let parsed = parse(r#"<body><a href="https://example.com/contact">C</a></body>"#);
        assert_eq!(parsed.links, vec!["/contact".to_string()]);
    }

    #[test]
    fn test_cross_origin_link_discarded() {
        let parsed = parse(r#"<body><a href="https://other.com/page">Other</a></body>"#);
        assert!(parsed.links.is_empty());
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let parsed = parse(r#"<body><a href="/writing/">Writing</a></body>"#);
        assert_eq!(parsed.links, vec!["/writing".to_string()]);
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        let parsed = parse(r##"<body><a href="/page?utm=1#section">P</a></body>"##);
        assert_eq!(parsed.links, vec!["/page".to_string()]);
    }

    #[test]
    fn test_special_schemes_skipped() {
        let parsed = parse(
            r#"<body>
            <a href="javascript:void(0)">JS</a>
            <a href="mailto:me@example.com">Mail</a>
            <a href="tel:+1234567890">Call</a>
            <a href="data:text/html,x">Data</a>
            </body>"#,
        );
        assert!(parsed.links.is_empty());
    }

    #[test]
    fn test_fragment_only_anchor_skipped() {
        let parsed = parse(r##"<body><a href="#top">Top</a></body>"##);
        assert!(parsed.links.is_empty());
    }

    #[test]
    fn test_download_link_skipped() {
        let parsed = parse(r#"<body><a href="/file.zip" download>Get</a></body>"#);
        assert!(parsed.links.is_empty());
    }

    #[test]
    fn test_malformed_href_skipped_silently() {
        let parsed = parse(r#"<body><a href="https://">Bad</a><a href="/ok">Ok</a></body>"#);
        assert_eq!(parsed.links, vec!["/ok".to_string()]);
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        let parsed = parse("<html><body><div><a href=");
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.description, "");
        assert!(parsed.links.is_empty());
    }

    #[test]
    fn test_mixed_links() {
        let parsed = parse(
            r#"<body>
            <a href="/writing">Writing</a>
            <a href="https://other.com/away">Away</a>
            <a href="/about">About</a>
            </body>"#,
        );
        assert_eq!(
            parsed.links,
            vec!["/writing".to_string(), "/about".to_string()]
        );
    }
}
