//! The candidate queue and its cursor.
//!
//! Order is exactly what the remote source returned; the feed never
//! re-ranks, filters or wraps around. Exhaustion is terminal until the
//! page reloads and a fresh queue arrives.

use md_types::Profile;

#[derive(Clone, Debug, Default)]
pub struct Feed {
    queue: Vec<Profile>,
    cursor: usize,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale and rewind the cursor. Called once, when
    /// the fetch resolves.
    pub fn replace(&mut self, queue: Vec<Profile>) {
        self.queue = queue;
        self.cursor = 0;
    }

    /// The profile under the cursor, or `None` once `cursor >= queue.len()`.
    ///
    /// An empty queue is indistinguishable from a feed that has not loaded
    /// yet. That conflation is inherited behavior, kept on purpose: the
    /// widget shows the same "nothing to browse" card in both cases.
    pub fn current(&self) -> Option<&Profile> {
        self.queue.get(self.cursor)
    }

    /// Move past the current profile. Unconditional and monotonic: calling
    /// it while exhausted keeps reporting exhausted, never errors.
    pub fn advance(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_owned(),
            age: 30,
            ..Profile::default()
        }
    }

    #[test]
    fn empty_feed_reports_exhausted() {
        let feed = Feed::new();
        assert!(feed.current().is_none());
        assert!(feed.is_exhausted());
    }

    #[test]
    fn traversal_in_source_order() {
        let mut feed = Feed::new();
        feed.replace(vec![profile("a"), profile("b"), profile("c")]);

        assert_eq!(feed.len(), 3);
        assert!(!feed.is_empty());
        assert_eq!(feed.current().unwrap().name, "a");
        feed.advance();
        assert_eq!(feed.current().unwrap().name, "b");
        feed.advance();
        assert_eq!(feed.current().unwrap().name, "c");
        feed.advance();
        assert!(feed.current().is_none());
    }

    #[test]
    fn advance_past_end_stays_exhausted() {
        let mut feed = Feed::new();
        feed.replace(vec![profile("only")]);

        for _ in 0..10 {
            feed.advance();
            assert!(feed.is_exhausted());
            assert!(feed.current().is_none());
        }
    }

    #[test]
    fn replace_rewinds_cursor() {
        let mut feed = Feed::new();
        feed.replace(vec![profile("a")]);
        feed.advance();
        assert!(feed.is_exhausted());

        feed.replace(vec![profile("x"), profile("y")]);
        assert_eq!(feed.cursor(), 0);
        assert_eq!(feed.current().unwrap().name, "x");
    }
}
