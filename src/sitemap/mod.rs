//! Sitemap construction and persistence
//!
//! The sitemap is the index a crawl run produces: an ordered mapping from
//! canonical path to a [`PageRecord`] describing where the page's raw and
//! converted content live, plus its title and description. The JSON shape
//! of the document is a durable contract with downstream consumers, so the
//! field names here must not change casually.

mod query;

pub use query::{list_pages, page_html, page_markdown, search, PageSummary, QueryError};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors from persisting or loading the sitemap document
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Failed to read or write sitemap: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode or decode sitemap JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry in the sitemap, describing a single crawled page
///
/// `path` is the canonical path and the page's sole identity. `html` and
/// `markdown` are the content store locations; `markdown` is an empty
/// string when conversion or the converted write failed. `title` and
/// `description` are best-effort and may be empty, but are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub path: String,
    pub html: String,
    pub markdown: String,
    pub title: String,
    pub description: String,
}

/// An ordered mapping from canonical path to [`PageRecord`]
///
/// Records iterate in discovery order (first inserted, first out). Inserting
/// a record for a path that already exists overwrites the existing record in
/// place; the frontier's visited-set makes that a defensive guarantee rather
/// than an expected code path.
#[derive(Debug, Default, Clone)]
pub struct Sitemap {
    records: Vec<PageRecord>,
    index: HashMap<String, usize>,
}

impl Sitemap {
    /// Creates an empty sitemap
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, keyed by its canonical path
    ///
    /// Overwrites in place if the path is already present, keeping the
    /// original position in the ordering.
    pub fn insert(&mut self, record: PageRecord) {
        match self.index.get(&record.path) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(record.path.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Looks up the record for a canonical path
    pub fn get(&self, path: &str) -> Option<&PageRecord> {
        self.index.get(path).map(|&pos| &self.records[pos])
    }

    /// Whether a canonical path has a record
    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Number of records in the sitemap
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sitemap has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &PageRecord> {
        self.records.iter()
    }

    /// All canonical paths in discovery order
    pub fn paths(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.path.as_str()).collect()
    }

    /// Writes the sitemap as a pretty-printed JSON document
    ///
    /// # Arguments
    ///
    /// * `path` - Filesystem path for the JSON document
    pub fn save(&self, path: &Path) -> Result<(), SitemapError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a sitemap document written by [`Sitemap::save`]
    pub fn load(path: &Path) -> Result<Self, SitemapError> {
        let content = std::fs::read_to_string(path)?;
        let sitemap = serde_json::from_str(&content)?;
        Ok(sitemap)
    }
}

// The document's top-level value is the mapping itself, keyed by canonical
// path, in discovery order.
impl Serialize for Sitemap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.path, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sitemap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SitemapVisitor;

        impl<'de> Visitor<'de> for SitemapVisitor {
            type Value = Sitemap;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of canonical path to page record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Sitemap, A::Error> {
                let mut sitemap = Sitemap::new();
                while let Some((_key, record)) = access.next_entry::<String, PageRecord>()? {
                    sitemap.insert(record);
                }
                Ok(sitemap)
            }
        }

        deserializer.deserialize_map(SitemapVisitor)
    }
}
