//! Crawl frontier: the work queue and visited set for one run
//!
//! The frontier is the only mutable shared state in a crawl. It is owned by
//! the coordinator, which is the single writer; fetch tasks never touch it
//! directly, so the check-and-mark on the visited set is atomic with respect
//! to in-flight fetch completions by construction.

use crate::url::canonicalize;
use std::collections::{HashSet, VecDeque};

/// FIFO work queue with duplicate suppression
///
/// A path is marked seen the moment it is enqueued, so it can never be
/// queued or fetched twice in one run regardless of how many pages link to
/// it. Paths whose fetch fails stay seen and are simply never retried.
#[derive(Debug, Default)]
pub struct Frontier {
    pending: VecDeque<String>,
    seen: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a path if it has not been seen this run
    ///
    /// The path is canonicalized first, so `/writing/` and `/writing` are
    /// one entry. Duplicate discoveries are no-ops.
    ///
    /// # Arguments
    ///
    /// * `path` - A site-relative path
    ///
    /// # Returns
    ///
    /// `true` if the path was newly enqueued, `false` if it was a duplicate
    pub fn enqueue(&mut self, path: &str) -> bool {
        let canonical = canonicalize(path);

        if !self.seen.insert(canonical.clone()) {
            return false;
        }

        self.pending.push_back(canonical);
        true
    }

    /// Removes and returns the next pending path, FIFO order
    ///
    /// Returns `None` when the queue is empty. Traversal is complete only
    /// when this returns `None` *and* the caller has no fetches in flight.
    pub fn next(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    /// Number of paths waiting to be fetched
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of distinct paths seen this run (pending or already fetched)
    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }

    /// Whether the pending queue is empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_and_next_fifo() {
        let mut frontier = Frontier::new();
        assert!(frontier.enqueue("/"));
        assert!(frontier.enqueue("/writing"));
        assert!(frontier.enqueue("/about"));

        assert_eq!(frontier.next().as_deref(), Some("/"));
        assert_eq!(frontier.next().as_deref(), Some("/writing"));
        assert_eq!(frontier.next().as_deref(), Some("/about"));
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn test_duplicate_enqueue_is_noop() {
        let mut frontier = Frontier::new();
        assert!(frontier.enqueue("/page"));
        assert!(!frontier.enqueue("/page"));
        assert_eq!(frontier.pending_len(), 1);
    }

    #[test]
    fn test_visited_path_never_requeued() {
        let mut frontier = Frontier::new();
        frontier.enqueue("/page");
        assert_eq!(frontier.next().as_deref(), Some("/page"));

        // Discovered again via a back-link after being fetched
        assert!(!frontier.enqueue("/page"));
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn test_enqueue_canonicalizes() {
        let mut frontier = Frontier::new();
        assert!(frontier.enqueue("/writing/"));
        assert!(!frontier.enqueue("/writing"));
        assert!(!frontier.enqueue("/writing?page=2"));
        assert_eq!(frontier.next().as_deref(), Some("/writing"));
    }

    #[test]
    fn test_cycle_visits_each_path_once() {
        // A -> B -> A
        let mut frontier = Frontier::new();
        frontier.enqueue("/a");

        let mut fetched = Vec::new();
        while let Some(path) = frontier.next() {
            match path.as_str() {
                "/a" => {
                    frontier.enqueue("/b");
                }
                "/b" => {
                    frontier.enqueue("/a");
                }
                _ => {}
            }
            fetched.push(path);
        }

        assert_eq!(fetched, vec!["/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn test_seen_len_counts_pending_and_fetched() {
        let mut frontier = Frontier::new();
        frontier.enqueue("/a");
        frontier.enqueue("/b");
        frontier.next();

        assert_eq!(frontier.pending_len(), 1);
        assert_eq!(frontier.seen_len(), 2);
    }
}
