use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use log::info;

use crate::cache::JsonStore;
use crate::domain::{EntryListEntry, EntryType};

/// Reconcile a freshly scraped entry list with the previously cached one.
///
/// Scrapes are flaky: a page section (typically Qualifying) can fail to
/// render, or legitimately be empty before sign-in closes. The merge is
/// therefore per-bucket last-known-good: the MAIN and QUAL draws are
/// replaced independently, and only when the fresh scrape produced at least
/// one entry for that bucket. Alternates travel with the MAIN bucket since
/// the sources list them on the same page section.
pub fn merge_entry_list(
    cached: &[EntryListEntry],
    fresh: Vec<EntryListEntry>,
) -> Vec<EntryListEntry> {
    let (fresh_main, fresh_qual): (Vec<_>, Vec<_>) =
        fresh.into_iter().partition(|e| e.entry_type != EntryType::Qual);

    let pick = |fresh_bucket: Vec<EntryListEntry>, entry_type_is_qual: bool| {
        if fresh_bucket.is_empty() {
            cached
                .iter()
                .filter(|e| (e.entry_type == EntryType::Qual) == entry_type_is_qual)
                .cloned()
                .collect()
        } else {
            fresh_bucket
        }
    };

    let mut merged = pick(fresh_main, false);
    merged.extend(pick(fresh_qual, true));
    merged
}

/// On-disk entry-list cache, keyed by tournament identifier (a source URL
/// for WTA events, a lower-cased short code for ITF events).
pub struct EntryListCache {
    store: JsonStore,
    key: String,
    lists: BTreeMap<String, Vec<EntryListEntry>>,
}

impl EntryListCache {
    pub fn open(store: JsonStore, key: &str) -> Self {
        let lists = store.load_or_default(key);
        Self {
            store,
            key: key.to_string(),
            lists,
        }
    }

    pub fn get(&self, tournament_key: &str) -> &[EntryListEntry] {
        self.lists.get(tournament_key).map_or(&[], Vec::as_slice)
    }

    /// Merge a fresh scrape for one tournament into the cache and return the
    /// merged list.
    pub fn merge_fresh(
        &mut self,
        tournament_key: &str,
        fresh: Vec<EntryListEntry>,
    ) -> &[EntryListEntry] {
        let merged = merge_entry_list(self.get(tournament_key), fresh);
        self.lists.insert(tournament_key.to_string(), merged);
        self.get(tournament_key)
    }

    /// Drop tournaments that left the upcoming window, so the cache does not
    /// accumulate the whole season.
    pub fn prune_inactive(&mut self, active_keys: &HashSet<String>) {
        let before = self.lists.len();
        self.lists.retain(|key, _| active_keys.contains(key));
        let dropped = before - self.lists.len();
        if dropped > 0 {
            info!("Pruned {} inactive tournaments from entry-list cache", dropped);
        }
    }

    /// Write the whole map back to disk.
    pub fn persist(&self) -> Result<()> {
        self.store.save(&self.key, &self.lists)
    }
}
