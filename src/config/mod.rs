//! Configuration loading and validation
//!
//! Site-Scribe is configured with a TOML file naming the seed URL, crawler
//! behavior, and output locations. Loading always runs the validation pass
//! so a bad configuration fails before any network or filesystem work.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig};
pub use validation::validate;
