use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use log::warn;
use serde::Serialize;
use serde_json::Value;

use crate::config::ReportSettings;
use crate::report::matches::{format_match_line, has_match_shape, load_csv_rows, row_key};
use crate::report::snapshot::{
    CalendarSnapshotRow, CALENDAR_SNAPSHOT_KEY, ENTRY_LISTS_KEY, TOURNAMENT_SNAPSHOT_KEY,
};

/// Tracked players present in a tournament's entry list before the run but
/// gone after it.
#[derive(Debug, Clone, Serialize)]
pub struct Withdrawal {
    pub tournament_key: String,
    pub tournament_name: String,
    pub players: Vec<String>,
}

/// A tournament whose entry list went from empty to populated.
#[derive(Debug, Clone, Serialize)]
pub struct NewEntryList {
    pub tournament_key: String,
    pub tournament_name: String,
    pub entries_count: usize,
}

/// New rows found in one match CSV file, capped to keep notification
/// payloads bounded.
#[derive(Debug, Clone, Serialize)]
pub struct AddedMatches {
    pub count: usize,
    pub items: Vec<String>,
    pub truncated: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub withdrawals: Vec<Withdrawal>,
    pub new_entry_lists: Vec<NewEntryList>,
    pub added_matches: BTreeMap<String, AddedMatches>,
    pub added_calendar_tournaments: Vec<CalendarSnapshotRow>,
}

/// Compare two snapshot directories and collect every change worth
/// notifying about.
///
/// Missing or malformed files are empty baselines, never errors: on a first
/// run every section simply reports nothing. Snapshot JSON is read
/// untyped since the before directory may hold files written by older runs.
pub fn compute_report(before_dir: &Path, after_dir: &Path, settings: &ReportSettings) -> RunReport {
    let mut report = RunReport::default();

    let before_entry: BTreeMap<String, Vec<Value>> =
        load_json_or_default(&before_dir.join(json_file(ENTRY_LISTS_KEY)));
    let after_entry: BTreeMap<String, Vec<Value>> =
        load_json_or_default(&after_dir.join(json_file(ENTRY_LISTS_KEY)));
    let before_tourney: BTreeMap<String, Value> =
        load_json_or_default(&before_dir.join(json_file(TOURNAMENT_SNAPSHOT_KEY)));
    let after_tourney: BTreeMap<String, Value> =
        load_json_or_default(&after_dir.join(json_file(TOURNAMENT_SNAPSHOT_KEY)));

    if !before_entry.is_empty() && !after_entry.is_empty() {
        let keys: BTreeSet<&String> = before_entry.keys().chain(after_entry.keys()).collect();
        for key in keys {
            let old_entries = before_entry.get(key).map_or(&[][..], Vec::as_slice);
            let new_entries = after_entry.get(key).map_or(&[][..], Vec::as_slice);

            let old_tracked = tracked_players(old_entries, &settings.tracked_nationality);
            let new_tracked = tracked_players(new_entries, &settings.tracked_nationality);

            let withdrew: Vec<String> =
                old_tracked.difference(&new_tracked).cloned().collect();
            if !withdrew.is_empty() {
                report.withdrawals.push(Withdrawal {
                    tournament_key: key.clone(),
                    tournament_name: tournament_label(key, &before_tourney, &after_tourney),
                    players: withdrew,
                });
            }

            if old_entries.is_empty() && !new_entries.is_empty() {
                report.new_entry_lists.push(NewEntryList {
                    tournament_key: key.clone(),
                    tournament_name: tournament_label(key, &before_tourney, &after_tourney),
                    entries_count: new_entries.len(),
                });
            }
        }
    }

    report.added_matches = diff_match_files(before_dir, after_dir, settings);
    report.added_calendar_tournaments = diff_calendar(before_dir, after_dir);

    report
}

fn json_file(key: &str) -> String {
    format!("{}.json", key)
}

fn load_json_or_default<T: serde::de::DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }
    let Ok(json) = std::fs::read_to_string(path) else {
        return T::default();
    };
    match serde_json::from_str(&json) {
        Ok(data) => data,
        Err(e) => {
            warn!("Ignoring malformed snapshot file {}: {}", path.display(), e);
            T::default()
        }
    }
}

fn value_str<'a>(row: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or("")
}

/// Upper-cased names of tracked-nationality players in one entry list.
fn tracked_players(entries: &[Value], nationality: &str) -> BTreeSet<String> {
    let mut players = BTreeSet::new();
    for row in entries {
        let country = value_str(row, &["country", "Country"]).to_uppercase();
        if country != nationality {
            continue;
        }
        let name = value_str(row, &["name", "player", "Player"]).to_uppercase();
        if !name.is_empty() {
            players.insert(name);
        }
    }
    players
}

fn tournament_label(
    key: &str,
    before: &BTreeMap<String, Value>,
    after: &BTreeMap<String, Value>,
) -> String {
    for snapshot in [after, before] {
        if let Some(info) = snapshot.get(key) {
            let name = value_str(info, &["name"]);
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }
    key.to_string()
}

fn csv_files(dir: &Path) -> BTreeSet<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return BTreeSet::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| name.to_lowercase().ends_with(".csv"))
        .collect()
}

fn diff_match_files(
    before_dir: &Path,
    after_dir: &Path,
    settings: &ReportSettings,
) -> BTreeMap<String, AddedMatches> {
    let before_files = csv_files(before_dir);
    let after_files = csv_files(after_dir);

    let mut added_matches = BTreeMap::new();
    for csv_name in after_files {
        let (after_headers, after_rows) = load_csv_rows(&after_dir.join(&csv_name));
        if after_rows.is_empty() || !has_match_shape(&after_headers) {
            continue;
        }
        // No baseline for a brand-new file: nothing to diff against yet.
        if !before_files.contains(&csv_name) {
            continue;
        }

        let (before_headers, before_rows) = load_csv_rows(&before_dir.join(&csv_name));
        let before_keys: HashSet<String> = before_rows
            .iter()
            .filter_map(|row| row_key(row, &before_headers))
            .collect();

        let added: Vec<String> = after_rows
            .iter()
            .filter(|row| {
                row_key(row, &after_headers).is_some_and(|key| !before_keys.contains(&key))
            })
            .map(format_match_line)
            .collect();

        if !added.is_empty() {
            let cap = settings.max_match_lines_per_file;
            added_matches.insert(
                csv_name,
                AddedMatches {
                    count: added.len(),
                    truncated: added.len() > cap,
                    items: added.into_iter().take(cap).collect(),
                },
            );
        }
    }
    added_matches
}

fn diff_calendar(before_dir: &Path, after_dir: &Path) -> Vec<CalendarSnapshotRow> {
    let before: Vec<Value> = load_json_or_default(&before_dir.join(json_file(CALENDAR_SNAPSHOT_KEY)));
    let after: Vec<Value> = load_json_or_default(&after_dir.join(json_file(CALENDAR_SNAPSHOT_KEY)));

    if before.is_empty() || after.is_empty() {
        return Vec::new();
    }

    let row_tuple = |row: &Value| {
        (
            value_str(row, &["week_label"]).to_string(),
            value_str(row, &["name"]).to_string(),
            value_str(row, &["level"]).to_string(),
            value_str(row, &["column"]).to_string(),
            value_str(row, &["continent"]).to_string(),
        )
    };

    let before_keys: HashSet<_> = before.iter().filter(|r| r.is_object()).map(row_tuple).collect();

    after
        .iter()
        .filter(|row| row.is_object() && !before_keys.contains(&row_tuple(row)))
        .map(|row| CalendarSnapshotRow {
            week_label: value_str(row, &["week_label"]).to_string(),
            column: value_str(row, &["column"]).to_string(),
            continent: value_str(row, &["continent"]).to_string(),
            name: value_str(row, &["name"]).to_string(),
            level: value_str(row, &["level"]).to_string(),
            surface: value_str(row, &["surface"]).to_string(),
        })
        .collect()
}
