//! Crawler module: fetching, parsing, and crawl coordination
//!
//! This module contains the traversal core of the pipeline:
//! - The frontier (work queue plus visited set)
//! - HTTP fetching with outcome classification
//! - HTML parsing for links and metadata
//! - The coordinator that drives a run to completion

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use frontier::Frontier;
pub use parser::{parse_page, ParsedPage};

use crate::config::Config;
use crate::sitemap::Sitemap;
use crate::ScribeError;

/// Runs a complete crawl for the given configuration
///
/// This is the main entry point: it clears the output hierarchies, crawls
/// every same-origin page reachable from the seed, writes raw and converted
/// content, and saves the sitemap document.
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(Sitemap)` - The generated sitemap
/// * `Err(ScribeError)` - Setup failed or the seed was unreachable
pub async fn crawl(config: Config) -> Result<Sitemap, ScribeError> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
