use std::{collections::HashMap, hash::Hash};

/// Handed out for every request; identifies it among requests for the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    id: u64,
}

impl<K> Ticket<K> {
    #[cfg(test)]
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// Keeps the most recent request per key so late completions of older
/// requests can be recognised and dropped.
#[derive(Debug)]
pub struct RequestTracker<K> {
    next_id: u64,
    latest: HashMap<K, u64>,
}

impl<K> Default for RequestTracker<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            latest: HashMap::new(),
        }
    }
}

impl<K> RequestTracker<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, key: K) -> Ticket<K> {
        let id = self.next_id;
        self.next_id += 1;

        self.latest.insert(key.clone(), id);

        Ticket { key, id }
    }

    pub fn is_latest(&self, ticket: &Ticket<K>) -> bool {
        self.latest.get(&ticket.key) == Some(&ticket.id)
    }

    /// Marks the request as finished. Returns `false` when a newer request
    /// for the same key was issued meanwhile, i.e. the completion is stale.
    pub fn settle(&mut self, ticket: &Ticket<K>) -> bool {
        if self.is_latest(ticket) {
            self.latest.remove(&ticket.key);
            true
        } else {
            debug!("stale completion {} dropped", ticket.id);
            false
        }
    }

    #[cfg(test)]
    pub fn in_flight(&self, key: &K) -> bool {
        self.latest.contains_key(key)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_request() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue("42");

        assert!(tracker.in_flight(&"42"));
        assert!(tracker.settle(&ticket));
        assert!(!tracker.in_flight(&"42"));
    }

    #[test]
    fn test_out_of_order_completion_keeps_latest() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue("42");
        let second = tracker.issue("42");

        // second response arrives first
        assert!(tracker.settle(&second));
        assert!(!tracker.settle(&first));
    }

    #[test]
    fn test_in_order_completion_drops_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue("42");
        let second = tracker.issue("42");

        assert!(!tracker.settle(&first));
        assert!(tracker.settle(&second));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut tracker = RequestTracker::new();
        let a = tracker.issue("1");
        let b = tracker.issue("2");

        assert!(tracker.settle(&b));
        assert!(tracker.settle(&a));
        assert_eq!(a.key(), &"1");
    }

    #[test]
    fn test_new_selection_supersedes_pending_one() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue("image-preview");
        let second = tracker.issue("image-preview");

        // the earlier selection stops before showing anything else
        assert!(!tracker.is_latest(&first));
        assert!(tracker.is_latest(&second));
        assert!(tracker.settle(&second));
    }
}
