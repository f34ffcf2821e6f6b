use chrono::{DateTime, Duration, Utc};

/// A cached value together with the time of the successful fetch that
/// produced it.
#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub value: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Utc::now(),
        }
    }

    /// Freshness is wall-clock time elapsed since the last successful fetch.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        Utc::now() - self.fetched_at < ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_within_ttl() {
        let entry = CacheEntry::new(42);
        assert!(entry.is_fresh(Duration::seconds(300)));
    }

    #[test]
    fn entry_with_zero_ttl_is_stale() {
        let entry = CacheEntry::new(42);
        assert!(!entry.is_fresh(Duration::zero()));
    }

    #[test]
    fn backdated_entry_is_stale() {
        let mut entry = CacheEntry::new(42);
        entry.fetched_at = Utc::now() - Duration::seconds(301);
        assert!(!entry.is_fresh(Duration::seconds(300)));
    }

    #[test]
    fn backdated_entry_inside_window_is_fresh() {
        let mut entry = CacheEntry::new(42);
        entry.fetched_at = Utc::now() - Duration::seconds(100);
        assert!(entry.is_fresh(Duration::seconds(300)));
    }
}
