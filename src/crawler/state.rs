//! Crawl state: visited set, FIFO frontier, and the discovery list
//!
//! One `CrawlState` is created empty per run, mutated only by the controller,
//! and consumed for its result when the run terminates. Nothing persists
//! between runs.

use std::collections::{HashSet, VecDeque};

/// Owns the bookkeeping for a single crawl run
///
/// Invariants maintained here:
/// - a URL enters the discovery list at most once, in first-dequeue order;
/// - the frontier never contains a URL already visited;
/// - the frontier never contains duplicate pending entries (`pending` mirrors
///   the queue for O(1) membership checks).
#[derive(Debug, Default)]
pub struct CrawlState {
    /// URLs already dequeued and processed
    visited: HashSet<String>,

    /// FIFO queue of URLs awaiting processing
    frontier: VecDeque<String>,

    /// Set mirror of the frontier
    pending: HashSet<String>,

    /// Discovery result, in the order URLs were first dequeued
    discovered: Vec<String>,
}

impl CrawlState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state seeded with a single canonical URL
    pub fn seeded(seed: String) -> Self {
        let mut state = Self::new();
        state.enqueue(seed);
        state
    }

    /// Removes and returns the front of the frontier
    ///
    /// FIFO order here is what makes the traversal breadth-first.
    pub fn dequeue(&mut self) -> Option<String> {
        let url = self.frontier.pop_front()?;
        self.pending.remove(&url);
        Some(url)
    }

    /// Returns true if the URL has already been dequeued and processed
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Marks a URL visited and appends it to the discovery list
    ///
    /// Callers must check `is_visited` first; recording happens at dequeue
    /// time, before the fetch is attempted.
    pub fn record_visit(&mut self, url: String) {
        self.visited.insert(url.clone());
        self.discovered.push(url);
    }

    /// Appends a URL to the back of the frontier
    ///
    /// Refuses URLs that are already visited or already pending; returns
    /// whether the URL was actually enqueued.
    pub fn enqueue(&mut self, url: String) -> bool {
        if self.visited.contains(&url) || self.pending.contains(&url) {
            return false;
        }
        self.pending.insert(url.clone());
        self.frontier.push_back(url);
        true
    }

    /// Number of URLs recorded as visited
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs awaiting processing
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns true if the frontier is empty
    pub fn frontier_is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// The discovery list accumulated so far
    pub fn discovered(&self) -> &[String] {
        &self.discovered
    }

    /// Consumes the state, yielding the discovery list
    pub fn into_discovered(self) -> Vec<String> {
        self.discovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = CrawlState::new();
        assert_eq!(state.visited_count(), 0);
        assert!(state.frontier_is_empty());
        assert!(state.discovered().is_empty());
    }

    #[test]
    fn test_seeded_state_has_one_pending() {
        let state = CrawlState::seeded("https://example.com".to_string());
        assert_eq!(state.frontier_len(), 1);
        assert_eq!(state.visited_count(), 0);
    }

    #[test]
    fn test_dequeue_is_fifo() {
        let mut state = CrawlState::new();
        state.enqueue("https://a.com/1".to_string());
        state.enqueue("https://a.com/2".to_string());
        state.enqueue("https://a.com/3".to_string());

        assert_eq!(state.dequeue().as_deref(), Some("https://a.com/1"));
        assert_eq!(state.dequeue().as_deref(), Some("https://a.com/2"));
        assert_eq!(state.dequeue().as_deref(), Some("https://a.com/3"));
        assert_eq!(state.dequeue(), None);
    }

    #[test]
    fn test_enqueue_rejects_pending_duplicate() {
        let mut state = CrawlState::new();
        assert!(state.enqueue("https://a.com/1".to_string()));
        assert!(!state.enqueue("https://a.com/1".to_string()));
        assert_eq!(state.frontier_len(), 1);
    }

    #[test]
    fn test_enqueue_rejects_visited() {
        let mut state = CrawlState::new();
        state.record_visit("https://a.com/1".to_string());
        assert!(!state.enqueue("https://a.com/1".to_string()));
        assert!(state.frontier_is_empty());
    }

    #[test]
    fn test_dequeued_url_can_be_enqueued_until_visited() {
        let mut state = CrawlState::new();
        state.enqueue("https://a.com/1".to_string());
        let url = state.dequeue().unwrap();

        // Not yet visited, so re-enqueue is allowed
        assert!(state.enqueue(url.clone()));
        state.dequeue();
        state.record_visit(url.clone());
        assert!(!state.enqueue(url));
    }

    #[test]
    fn test_record_visit_preserves_order() {
        let mut state = CrawlState::new();
        state.record_visit("https://a.com/1".to_string());
        state.record_visit("https://a.com/2".to_string());

        assert_eq!(state.discovered(), &["https://a.com/1", "https://a.com/2"]);
        assert_eq!(state.visited_count(), 2);
    }

    #[test]
    fn test_into_discovered() {
        let mut state = CrawlState::new();
        state.record_visit("https://a.com".to_string());
        assert_eq!(state.into_discovered(), vec!["https://a.com".to_string()]);
    }
}
