//! Last-outcome gauge store keyed by (check name, URL).

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Identity of one time series: the (name, url) pair.
///
/// The pair is the key, not the name alone: two checks sharing a name
/// but not a URL publish distinct series. Two checks sharing both race
/// on one entry under last-writer-wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckKey {
    pub name: String,
    pub url: String,
}

impl CheckKey {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Cloneable handle to the shared gauge store.
///
/// Every probe task holds a clone; the single registry-wide lock keeps
/// the remove-then-insert in `publish` atomic with respect to readers
/// and serializes concurrent writers for the same key.
#[derive(Clone, Default)]
pub struct MetricRegistry {
    entries: Arc<RwLock<HashMap<CheckKey, u8>>>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry for `key` with `value`.
    ///
    /// Removes any previously registered entry for the exact pair
    /// before inserting, so repeated probes of the same check never
    /// accumulate duplicate series. Whichever publish runs last for a
    /// key determines the visible value.
    pub async fn publish(&self, key: CheckKey, value: u8) {
        let mut entries = self.entries.write().await;
        entries.remove(&key);
        entries.insert(key, value);
    }

    /// Snapshot of every entry, sorted by (name, url).
    ///
    /// Taken under the read lock; never observes a key mid-replace.
    pub async fn read_all(&self) -> Vec<(CheckKey, u8)> {
        let entries = self.entries.read().await;
        let mut all: Vec<_> = entries.iter().map(|(k, v)| (k.clone(), *v)).collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_creates_single_entry() {
        let registry = MetricRegistry::new();
        registry
            .publish(CheckKey::new("web", "http://a.example/"), 1)
            .await;

        let all = registry.read_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].0, CheckKey::new("web", "http://a.example/"));
        assert_eq!(all[0].1, 1);
    }

    #[tokio::test]
    async fn republish_does_not_grow() {
        let registry = MetricRegistry::new();
        let key = CheckKey::new("web", "http://a.example/");

        for _ in 0..50 {
            registry.publish(key.clone(), 1).await;
        }
        assert_eq!(registry.len().await, 1);
        assert_eq!(registry.read_all().await[0].1, 1);
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let registry = MetricRegistry::new();
        let key = CheckKey::new("web", "http://a.example/");

        registry.publish(key.clone(), 1).await;
        registry.publish(key.clone(), 0).await;

        let all = registry.read_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].1, 0);
    }

    #[tokio::test]
    async fn same_name_different_url_are_distinct_series() {
        let registry = MetricRegistry::new();
        registry
            .publish(CheckKey::new("web", "http://a.example/"), 1)
            .await;
        registry
            .publish(CheckKey::new("web", "http://b.example/"), 0)
            .await;

        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn concurrent_publishers_to_distinct_keys() {
        let registry = MetricRegistry::new();
        let mut handles = Vec::new();

        for i in 0..32 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                let key = CheckKey::new(format!("check-{i}"), format!("http://host-{i}/"));
                for _ in 0..20 {
                    registry.publish(key.clone(), (i % 2) as u8).await;
                }
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let all = registry.read_all().await;
        assert_eq!(all.len(), 32);
        for (key, value) in all {
            let i: u8 = key.name.strip_prefix("check-").unwrap().parse().unwrap();
            assert_eq!(value, i % 2);
        }
    }

    #[tokio::test]
    async fn readers_never_observe_torn_replace() {
        let registry = MetricRegistry::new();
        let key = CheckKey::new("web", "http://a.example/");
        registry.publish(key.clone(), 1).await;

        let writer = {
            let registry = registry.clone();
            let key = key.clone();
            tokio::spawn(async move {
                for i in 0..200u32 {
                    registry.publish(key.clone(), (i % 2) as u8).await;
                    tokio::task::yield_now().await;
                }
            })
        };

        // Once published, the key must always be present exactly once.
        for _ in 0..200 {
            let all = registry.read_all().await;
            let count = all.iter().filter(|(k, _)| *k == key).count();
            assert_eq!(count, 1);
            tokio::task::yield_now().await;
        }
        writer.await.unwrap();
    }

    #[tokio::test]
    async fn read_all_is_sorted() {
        let registry = MetricRegistry::new();
        registry.publish(CheckKey::new("zeta", "http://z/"), 1).await;
        registry.publish(CheckKey::new("alpha", "http://a/"), 1).await;

        let all = registry.read_all().await;
        assert_eq!(all[0].0.name, "alpha");
        assert_eq!(all[1].0.name, "zeta");
    }
}
