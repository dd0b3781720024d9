//! Crawl coordinator: the driving loop of the pipeline
//!
//! The coordinator owns the frontier, the sitemap under construction, the
//! content store, and the converter. Fetches run concurrently in a
//! `JoinSet`, but every completion is handled here on a single task, so
//! frontier bookkeeping needs no locking and a path can never be fetched
//! twice by racing completions.

use crate::config::{validate, Config};
use crate::convert::{Converter, MarkdownConverter};
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_page;
use crate::sitemap::{PageRecord, Sitemap};
use crate::storage::ContentStore;
use crate::url::Origin;
use crate::ScribeError;
use reqwest::Client;
use std::path::Path;
use tokio::task::JoinSet;

/// Orchestrates one crawl run from seed to saved sitemap
pub struct Coordinator {
    config: Config,
    origin: Origin,
    client: Client,
    frontier: Frontier,
    store: ContentStore,
    converter: Box<dyn Converter>,
    sitemap: Sitemap,
    seed_path: String,
}

impl Coordinator {
    /// Creates a coordinator with the default Markdown converter
    ///
    /// Validates the configuration, clears the output hierarchies, and
    /// builds the HTTP client. Nothing is fetched until [`Coordinator::run`].
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(ScribeError)` - Invalid configuration or output setup failure
    pub fn new(config: Config) -> Result<Self, ScribeError> {
        Self::with_converter(config, Box::new(MarkdownConverter::new()))
    }

    /// Creates a coordinator with a caller-supplied converter
    ///
    /// The converter is an opaque capability; tests use this to inject
    /// failing or canned conversions.
    pub fn with_converter(
        config: Config,
        converter: Box<dyn Converter>,
    ) -> Result<Self, ScribeError> {
        validate(&config)?;

        let origin = Origin::from_seed(&config.site.seed_url)?;
        let client = build_http_client(&config.crawler)?;
        let store = ContentStore::create(
            Path::new(&config.output.html_dir),
            Path::new(&config.output.markdown_dir),
        )?;
        let seed_path = origin.seed_path();

        Ok(Self {
            config,
            origin,
            client,
            frontier: Frontier::new(),
            store,
            converter,
            sitemap: Sitemap::new(),
            seed_path,
        })
    }

    /// Runs the crawl to completion and returns the sitemap
    ///
    /// The loop dispatches pending paths into a `JoinSet` up to the
    /// configured concurrency, then handles one completion at a time:
    /// store raw content, convert, record, and feed discovered links back
    /// into the frontier. The run ends when the frontier is empty and no
    /// fetch is in flight. The sitemap is saved before returning.
    ///
    /// # Returns
    ///
    /// * `Ok(Sitemap)` - Best-effort sitemap; per-page failures are excluded
    /// * `Err(ScribeError)` - The seed itself could not be fetched, or the
    ///   sitemap document could not be written
    pub async fn run(mut self) -> Result<Sitemap, ScribeError> {
        tracing::info!("Starting crawl of {}", self.origin.seed_url());

        let start_time = std::time::Instant::now();
        let max_concurrent = self.config.crawler.max_concurrent_fetches.max(1) as usize;
        let mut in_flight: JoinSet<(String, FetchOutcome)> = JoinSet::new();
        let mut dispatched: u32 = 0;
        let mut completed: u32 = 0;

        self.frontier.enqueue(&self.seed_path);

        loop {
            while in_flight.len() < max_concurrent && self.within_page_cap(dispatched) {
                let Some(path) = self.frontier.next() else {
                    break;
                };

                let url = match self.origin.resolve(&path) {
                    Ok(u) => u,
                    Err(e) => {
                        tracing::warn!("Cannot resolve {}: {}", path, e);
                        continue;
                    }
                };

                dispatched += 1;
                let client = self.client.clone();
                in_flight.spawn(async move {
                    let outcome = fetch_page(&client, &url).await;
                    (path, outcome)
                });
            }

            // Frontier drained and nothing in flight: traversal complete
            let Some(joined) = in_flight.join_next().await else {
                break;
            };

            match joined {
                Ok((path, outcome)) => self.complete_page(path, outcome)?,
                Err(e) => tracing::error!("Fetch task failed: {}", e),
            }

            completed += 1;
            if completed % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages fetched, {} recorded, {} pending",
                    completed,
                    self.sitemap.len(),
                    self.frontier.pending_len()
                );
            }
        }

        let sitemap_path = Path::new(&self.config.output.sitemap_path);
        self.sitemap.save(sitemap_path)?;

        tracing::info!(
            "Crawl complete: {} pages recorded in {:?}, sitemap saved to {}",
            self.sitemap.len(),
            start_time.elapsed(),
            sitemap_path.display()
        );

        Ok(self.sitemap)
    }

    /// Whether another fetch may be dispatched under the optional page cap
    fn within_page_cap(&self, dispatched: u32) -> bool {
        match self.config.crawler.max_pages {
            Some(cap) => dispatched < cap,
            None => true,
        }
    }

    /// Handles one completed fetch
    ///
    /// Success stores raw content, converts it, records the page, and
    /// enqueues discovered links. Any per-page failure is logged and the
    /// path stays excluded from the sitemap; a seed that fails or redirects
    /// off-origin is fatal, since no partial output is meaningful without it.
    fn complete_page(&mut self, path: String, outcome: FetchOutcome) -> Result<(), ScribeError> {
        let (final_url, body) = match outcome {
            FetchOutcome::Success { final_url, body } => (final_url, body),
            failure => {
                let reason = failure.failure_reason().unwrap_or_default();
                if path == self.seed_path && self.sitemap.is_empty() {
                    return Err(ScribeError::SeedUnreachable {
                        url: self.origin.seed_url().to_string(),
                        reason,
                    });
                }
                tracing::warn!("Excluding {}: {}", path, reason);
                return Ok(());
            }
        };

        if !self.origin.same_origin(&final_url) {
            if path == self.seed_path && self.sitemap.is_empty() {
                return Err(ScribeError::SeedUnreachable {
                    url: self.origin.seed_url().to_string(),
                    reason: format!("redirected off-origin to {}", final_url),
                });
            }
            tracing::info!("Excluding {}: redirected off-origin to {}", path, final_url);
            return Ok(());
        }

        let parsed = parse_page(&body, &final_url, &self.origin);

        let mut discovered = 0;
        for link in &parsed.links {
            if self.frontier.enqueue(link) {
                discovered += 1;
            }
        }

        let html_location = match self.store.write_html(&path, &body) {
            Ok(p) => p.display().to_string(),
            Err(e) => {
                // Raw write failure omits the record; links were already
                // enqueued, so the rest of the site is still reached.
                tracing::warn!("Omitting {} from sitemap: {}", path, e);
                return Ok(());
            }
        };

        let markdown_location = match self.converter.convert(&body) {
            Ok(markdown) => match self.store.write_markdown(&path, &markdown) {
                Ok(p) => p.display().to_string(),
                Err(e) => {
                    tracing::warn!("Markdown write failed for {}: {}", path, e);
                    String::new()
                }
            },
            Err(e) => {
                tracing::warn!("Conversion failed for {}: {}", path, e);
                String::new()
            }
        };

        tracing::debug!(
            "Processed {} ({} new links, {} pending)",
            path,
            discovered,
            self.frontier.pending_len()
        );

        self.sitemap.insert(PageRecord {
            path,
            html: html_location,
            markdown: markdown_location,
            title: parsed.title,
            description: parsed.description,
        });

        Ok(())
    }
}
