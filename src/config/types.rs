use serde::Deserialize;

/// Main configuration structure for Site-Scribe
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The site to mirror
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Seed URL the crawl starts from; also defines the site origin
    #[serde(rename = "seed-url")]
    pub seed_url: String,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of concurrent page fetches
    #[serde(
        rename = "max-concurrent-fetches",
        default = "default_max_concurrent_fetches"
    )]
    pub max_concurrent_fetches: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Optional cap on the number of pages fetched in one run
    ///
    /// When unset the crawl runs until the frontier drains.
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<u32>,
}

/// Output locations for the content store and sitemap document
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory holding raw HTML, mirroring the site hierarchy
    #[serde(rename = "html-dir", default = "default_html_dir")]
    pub html_dir: String,

    /// Directory holding converted Markdown, mirroring the site hierarchy
    #[serde(rename = "markdown-dir", default = "default_markdown_dir")]
    pub markdown_dir: String,

    /// Path the sitemap JSON document is written to
    #[serde(rename = "sitemap-path", default = "default_sitemap_path")]
    pub sitemap_path: String,
}

fn default_max_concurrent_fetches() -> u32 {
    4
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("site-scribe/{}", env!("CARGO_PKG_VERSION"))
}

fn default_html_dir() -> String {
    "./html".to_string()
}

fn default_markdown_dir() -> String {
    "./markdown".to_string()
}

fn default_sitemap_path() -> String {
    "./site_map.json".to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: default_max_concurrent_fetches(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
            max_pages: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html_dir: default_html_dir(),
            markdown_dir: default_markdown_dir(),
            sitemap_path: default_sitemap_path(),
        }
    }
}

impl Config {
    /// Builds a configuration for a seed URL with default crawler and
    /// output settings
    pub fn for_seed(seed_url: &str) -> Self {
        Self {
            site: SiteConfig {
                seed_url: seed_url.to_string(),
            },
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
