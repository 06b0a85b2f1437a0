use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::keys::QueryKey;

/// Proof that a fetch was started; only the newest ticket may store data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: QueryKey,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub body: Value,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Entry {
    generation: u64,
    snapshot: Option<Snapshot>,
    stale: bool,
}

/// Кэш ответов GET-запросов
///
/// One snapshot per key. Every fetch takes a ticket with a new generation;
/// a completion carrying an older generation is dropped, so the last
/// started fetch wins even when an earlier one resolves later.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn begin(&self, key: &QueryKey) -> FetchTicket {
        let mut entries = self.entries();
        let entry = entries.entry(key.clone()).or_default();
        entry.generation += 1;
        FetchTicket {
            key: key.clone(),
            generation: entry.generation,
        }
    }

    /// Stores the body if the ticket is still current. Returns whether it was stored.
    pub fn complete(&self, ticket: &FetchTicket, body: Value) -> bool {
        let mut entries = self.entries();
        let Some(entry) = entries.get_mut(&ticket.key) else {
            return false;
        };
        if entry.generation != ticket.generation {
            tracing::debug!(
                "Discarding superseded response for {} (generation {} < {})",
                ticket.key,
                ticket.generation,
                entry.generation
            );
            return false;
        }
        entry.snapshot = Some(Snapshot {
            body,
            fetched_at: Utc::now(),
        });
        entry.stale = false;
        true
    }

    /// Cached body unless it was invalidated.
    pub fn fresh(&self, key: &QueryKey) -> Option<Value> {
        self.entries()
            .get(key)
            .filter(|e| !e.stale)
            .and_then(|e| e.snapshot.as_ref())
            .map(|s| s.body.clone())
    }

    pub fn snapshot(&self, key: &QueryKey) -> Option<Snapshot> {
        self.entries().get(key).and_then(|e| e.snapshot.clone())
    }

    /// Marks every key with this name stale and voids tickets issued before
    /// the call. Returns how many keys held a snapshot.
    pub fn invalidate(&self, name: &str) -> usize {
        let mut count = 0;
        for (key, entry) in self.entries().iter_mut() {
            if key.name() != name {
                continue;
            }
            entry.generation += 1;
            entry.stale = true;
            if entry.snapshot.is_some() {
                count += 1;
            }
        }
        tracing::debug!("Invalidated {} cached '{}' queries", count, name);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_last_started_fetch_wins() {
        let cache = QueryCache::new();
        let key = QueryKey::WelfareChecks;
        let older = cache.begin(&key);
        let newer = cache.begin(&key);

        assert!(cache.complete(&newer, json!({"data": [2]})));
        assert!(!cache.complete(&older, json!({"data": [1]})));
        assert_eq!(cache.fresh(&key), Some(json!({"data": [2]})));
    }

    #[test]
    fn test_older_completion_first_is_replaced() {
        let cache = QueryCache::new();
        let key = QueryKey::Incidents;
        let older = cache.begin(&key);
        let newer = cache.begin(&key);
        assert!(!cache.complete(&older, json!([1])));
        assert_eq!(cache.fresh(&key), None);
        assert!(cache.complete(&newer, json!([2])));
        assert_eq!(cache.fresh(&key), Some(json!([2])));
    }

    #[test]
    fn test_invalidate_by_name() {
        let cache = QueryCache::new();
        for id in ["c1", "c2"] {
            let key = QueryKey::BranchesByCompany(id.into());
            let t = cache.begin(&key);
            cache.complete(&t, json!([]));
        }
        let t = cache.begin(&QueryKey::Companies);
        cache.complete(&t, json!([]));

        assert_eq!(cache.invalidate("branches"), 2);
        assert_eq!(cache.fresh(&QueryKey::BranchesByCompany("c1".into())), None);
        assert!(cache.snapshot(&QueryKey::BranchesByCompany("c1".into())).is_some());
        assert!(cache.fresh(&QueryKey::Companies).is_some());
    }

    #[test]
    fn test_invalidate_voids_in_flight_fetch() {
        let cache = QueryCache::new();
        let key = QueryKey::Baskets;
        let in_flight = cache.begin(&key);

        assert_eq!(cache.invalidate("baskets"), 0);
        assert!(!cache.complete(&in_flight, json!({"data": ["before"]})));
        assert_eq!(cache.fresh(&key), None);

        let refetch = cache.begin(&key);
        assert!(cache.complete(&refetch, json!({"data": ["after"]})));
        assert_eq!(cache.fresh(&key), Some(json!({"data": ["after"]})));
    }
}
