//! HTTP fetcher for page content
//!
//! Wraps reqwest with the crawl's client settings and classifies every
//! outcome so the coordinator can apply the partial-failure policy: a
//! failed page is logged and skipped, never fatal (except for the seed).

use crate::config::CrawlerConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of fetching one page
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched an HTML page
    Success {
        /// Final URL after redirects
        final_url: Url,
        /// Raw markup
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// HTTP status code
        status: u16,
    },

    /// The response was not HTML
    NotHtml {
        /// The Content-Type received
        content_type: String,
    },

    /// Connection, TLS, or timeout failure
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchOutcome {
    /// Short description of a failure outcome, for logging and seed errors
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status } => Some(format!("HTTP {}", status)),
            Self::NotHtml { content_type } => {
                Some(format!("Expected HTML, got {}", content_type))
            }
            Self::NetworkError { error } => Some(error.clone()),
        }
    }
}

/// Builds the HTTP client used for the whole run
///
/// # Arguments
///
/// * `config` - Crawler configuration (timeout, user agent)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and classifies the outcome
///
/// Redirects are followed by the client; the final URL is reported so the
/// coordinator can reject pages that redirected off-origin. Responses
/// without an HTML Content-Type are classified as [`FetchOutcome::NotHtml`]
/// and excluded from the sitemap like any other per-page failure.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> FetchOutcome {
    tracing::debug!("Fetching: {}", url);

    let response = match client.get(url.clone()).send().await {
        Ok(r) => r,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            return FetchOutcome::NetworkError { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::HttpError {
            status: status.as_u16(),
        };
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    // Servers that omit Content-Type get the benefit of the doubt
    if !content_type.is_empty() && !content_type.contains("text/html") {
        return FetchOutcome::NotHtml { content_type };
    }

    let final_url = response.url().clone();

    match response.text().await {
        Ok(body) => FetchOutcome::Success { final_url, body },
        Err(e) => FetchOutcome::NetworkError {
            error: format!("Failed to read body: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = CrawlerConfig::default();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_failure_reason_success_is_none() {
        let outcome = FetchOutcome::Success {
            final_url: Url::parse("https://example.com/").unwrap(),
            body: String::new(),
        };
        assert!(outcome.failure_reason().is_none());
    }

    #[test]
    fn test_failure_reason_http_error() {
        let outcome = FetchOutcome::HttpError { status: 404 };
        assert_eq!(outcome.failure_reason().unwrap(), "HTTP 404");
    }

    #[test]
    fn test_failure_reason_not_html() {
        let outcome = FetchOutcome::NotHtml {
            content_type: "application/pdf".to_string(),
        };
        assert!(outcome.failure_reason().unwrap().contains("application/pdf"));
    }

    // Network behavior is covered by the wiremock integration tests
}
