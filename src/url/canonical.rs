use url::Url;

/// Derives the canonical path for a URL
///
/// The canonical path is the sole identity of a page within a crawl run.
/// Query string and fragment are dropped, and a single trailing slash is
/// stripped so that `/writing/` and `/writing` name the same page. The
/// root path stays `/`.
///
/// # Arguments
///
/// * `url` - The absolute URL of the page
///
/// # Returns
///
/// The canonical path, always beginning with `/`
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_scribe::url::canonical_path;
///
/// let url = Url::parse("https://example.com/writing/?page=2#top").unwrap();
/// assert_eq!(canonical_path(&url), "/writing");
///
/// let url = Url::parse("https://example.com").unwrap();
/// assert_eq!(canonical_path(&url), "/");
/// ```
pub fn canonical_path(url: &Url) -> String {
    strip_trailing_slash(url.path())
}

/// Canonicalizes a raw path string
///
/// Applies the same rules as [`canonical_path`] to a string that may not
/// have gone through URL parsing: drops any fragment or query suffix,
/// ensures a leading slash, and strips a single trailing slash except for
/// the root. Canonicalization is idempotent.
///
/// # Examples
///
/// ```
/// use site_scribe::url::canonicalize;
///
/// assert_eq!(canonicalize("writing/"), "/writing");
/// assert_eq!(canonicalize("/about?ref=nav"), "/about");
/// assert_eq!(canonicalize(""), "/");
/// ```
pub fn canonicalize(path: &str) -> String {
    let path = path.split(['#', '?']).next().unwrap_or("");

    if path.is_empty() {
        return "/".to_string();
    }

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    strip_trailing_slash(&path)
}

/// Strips a single trailing slash, keeping the root path intact
fn strip_trailing_slash(path: &str) -> String {
    if path.len() > 1 {
        if let Some(stripped) = path.strip_suffix('/') {
            return stripped.to_string();
        }
    }
    if path.is_empty() {
        return "/".to_string();
    }
    path.to_string()
}
