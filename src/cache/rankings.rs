use std::collections::BTreeMap;

use log::{info, warn};

use crate::cache::JsonStore;
use crate::domain::RankingEntry;

/// Per-week memoized ranking snapshots backed by one JSON file
/// (`ISO week-Monday -> entries`).
///
/// The fetch adapters swallow their own network and parse errors and report
/// failure as an empty list, so this cache never raises either: a failed
/// fetch degrades to the most recent week already on disk.
pub struct RankingCache {
    store: JsonStore,
    key: String,
    weeks: BTreeMap<String, Vec<RankingEntry>>,
}

impl RankingCache {
    /// Open the cache file named `key` inside the store, starting from an
    /// empty map when the file does not exist yet.
    pub fn open(store: JsonStore, key: &str) -> Self {
        let weeks = store.load_or_default(key);
        Self {
            store,
            key: key.to_string(),
            weeks,
        }
    }

    /// Rankings for a week: cache hit, else fetch.
    ///
    /// A non-empty fetch result is cached and the whole map persisted. An
    /// empty result is never cached; the latest previously cached week is
    /// returned instead so a transient source outage yields slightly stale
    /// data rather than an empty table.
    pub fn get_or_fetch<F>(&mut self, week: &str, mut fetch: F) -> Vec<RankingEntry>
    where
        F: FnMut(&str) -> Vec<RankingEntry>,
    {
        if let Some(entries) = self.weeks.get(week) {
            return entries.clone();
        }

        let fresh = fetch(week);
        if fresh.is_empty() {
            warn!("Empty ranking fetch for {}, falling back to latest cached week", week);
            return self.latest_known_good();
        }

        self.weeks.insert(week.to_string(), fresh.clone());
        self.persist();
        fresh
    }

    /// Most recent cached week, or empty when nothing has been cached yet.
    pub fn latest_known_good(&self) -> Vec<RankingEntry> {
        self.weeks
            .last_key_value()
            .map(|(_, entries)| entries.clone())
            .unwrap_or_default()
    }

    /// Refetch a cached week that still holds incomplete entries.
    ///
    /// Complete weeks are immutable; an empty refetch leaves the cached data
    /// untouched. Returns whether the week was overwritten.
    pub fn refresh_incomplete<F>(&mut self, week: &str, mut fetch: F) -> bool
    where
        F: FnMut(&str) -> Vec<RankingEntry>,
    {
        let needs_refresh = match self.weeks.get(week) {
            Some(entries) => entries.iter().any(|e| !is_complete(e)),
            None => return false,
        };
        if !needs_refresh {
            return false;
        }

        let fresh = fetch(week);
        if fresh.is_empty() {
            return false;
        }

        info!("Refreshed incomplete ranking week {}", week);
        self.weeks.insert(week.to_string(), fresh);
        self.persist();
        true
    }

    pub fn contains(&self, week: &str) -> bool {
        self.weeks.contains_key(week)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.key, &self.weeks) {
            warn!("Failed to persist ranking cache {}: {:#}", self.key, e);
        }
    }
}

/// An entry is complete once the optional Points and DOB fields carry real
/// values (zero points counts as missing, matching the feed's placeholder).
pub fn is_complete(entry: &RankingEntry) -> bool {
    let has_points = entry.points.is_some_and(|p| p != 0.0);
    let has_dob = entry.dob.as_deref().is_some_and(|d| !d.is_empty());
    has_points && has_dob
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rank;

    fn entry(player: &str, rank: i64) -> RankingEntry {
        RankingEntry {
            player: player.to_string(),
            rank: Rank::Num(rank),
            country: "ARG".to_string(),
            key: player.to_string(),
            points: None,
            played: None,
            dob: None,
        }
    }

    fn cache_with_week(week: &str, entries: Vec<RankingEntry>) -> RankingCache {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        let mut cache = RankingCache::open(store, "wta_rankings_cache");
        cache.weeks.insert(week.to_string(), entries);
        // Tempdir is dropped here; persistence is not under test.
        cache
    }

    #[test]
    fn test_cache_hit_skips_fetch() {
        let mut cache = cache_with_week("2025-01-06", vec![entry("A", 1)]);

        let result = cache.get_or_fetch("2025-01-06", |_| panic!("fetch on cache hit"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].player, "A");
    }

    #[test]
    fn test_fetch_miss_stores_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        let mut cache = RankingCache::open(store, "wta_rankings_cache");

        let result = cache.get_or_fetch("2025-01-13", |_| vec![entry("B", 2)]);
        assert_eq!(result[0].player, "B");
        assert!(cache.contains("2025-01-13"));

        // The map was persisted and survives a reopen.
        let store = JsonStore::new(dir.path()).unwrap();
        let reopened = RankingCache::open(store, "wta_rankings_cache");
        assert!(reopened.contains("2025-01-13"));
    }

    #[test]
    fn test_empty_fetch_falls_back_to_latest_cached_week() {
        let mut cache = cache_with_week("2025-01-06", vec![entry("A", 1)]);

        let result = cache.get_or_fetch("2025-01-13", |_| vec![]);
        assert_eq!(result[0].player, "A");
        // The outage week itself is not cached.
        assert!(!cache.contains("2025-01-13"));
    }

    #[test]
    fn test_empty_fetch_on_empty_cache_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        let mut cache = RankingCache::open(store, "wta_rankings_cache");

        assert!(cache.get_or_fetch("2025-01-13", |_| vec![]).is_empty());
    }

    #[test]
    fn test_refresh_incomplete_overwrites_only_incomplete_weeks() {
        let incomplete = entry("A", 1);
        let mut complete = entry("A", 1);
        complete.points = Some(120.0);
        complete.dob = Some("2000-03-01".to_string());

        let mut cache = cache_with_week("2025-01-06", vec![incomplete]);
        assert!(cache.refresh_incomplete("2025-01-06", |_| vec![complete.clone()]));
        assert!(!cache.refresh_incomplete("2025-01-06", |_| panic!("week is complete")));
    }

    #[test]
    fn test_is_complete_requires_nonzero_points_and_dob() {
        let mut e = entry("A", 1);
        assert!(!is_complete(&e));
        e.points = Some(0.0);
        e.dob = Some("2000-03-01".to_string());
        assert!(!is_complete(&e));
        e.points = Some(15.0);
        assert!(is_complete(&e));
    }
}
