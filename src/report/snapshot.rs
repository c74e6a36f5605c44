use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::cache::JsonStore;
use crate::calendar::CalendarWeek;
use crate::config::Continent;
use crate::domain::{CalendarColumn, TournamentSummary};

// Store keys of the point-in-time files the diff reporter compares.
pub const TOURNAMENT_SNAPSHOT_KEY: &str = "tournament_snapshot";
pub const CALENDAR_SNAPSHOT_KEY: &str = "calendar_snapshot";
pub const ENTRY_LISTS_KEY: &str = "entry_lists_cache";

/// Weekly tournament groups assembled by the pipeline:
/// week label -> tournament key -> summary.
pub type TournamentGroups = BTreeMap<String, BTreeMap<String, TournamentSummary>>;

/// One tournament in `tournament_snapshot.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSnapshotEntry {
    pub name: String,
    pub level: String,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    pub week: String,
}

/// One row of `calendar_snapshot.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSnapshotRow {
    #[serde(default)]
    pub week_label: String,
    #[serde(default)]
    pub column: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub surface: String,
}

/// Flatten weekly tournament groups into the per-key snapshot map.
pub fn build_tournament_snapshot(
    groups: &TournamentGroups,
) -> BTreeMap<String, TournamentSnapshotEntry> {
    let mut snapshot = BTreeMap::new();
    for (week, tournaments) in groups {
        for (key, info) in tournaments {
            snapshot.insert(
                key.clone(),
                TournamentSnapshotEntry {
                    name: info.name.clone(),
                    level: info.level.clone(),
                    start_date: info.start_date.clone(),
                    end_date: info.end_date.clone(),
                    week: week.clone(),
                },
            );
        }
    }
    snapshot
}

/// Flatten the calendar grid into snapshot rows, deduplicated.
pub fn build_calendar_snapshot(weeks: &[CalendarWeek]) -> Vec<CalendarSnapshotRow> {
    let mut rows = Vec::new();
    let mut seen = HashSet::new();

    for week in weeks {
        for column in CalendarColumn::ALL {
            for continent in Continent::ALL {
                for slot in week.slots(column, continent) {
                    let row = CalendarSnapshotRow {
                        week_label: week.week_label.clone(),
                        column: column.key().to_string(),
                        continent: continent.key().to_string(),
                        name: slot.name.clone(),
                        level: slot.level.clone(),
                        surface: slot.surface.clone(),
                    };
                    let key = (
                        row.week_label.clone(),
                        row.column.clone(),
                        row.continent.clone(),
                        row.name.clone(),
                        row.level.clone(),
                        row.surface.clone(),
                    );
                    if seen.insert(key) {
                        rows.push(row);
                    }
                }
            }
        }
    }
    rows
}

/// Persist both snapshot files at the end of a run.
pub fn write_snapshots(
    store: &JsonStore,
    tournament_snapshot: &BTreeMap<String, TournamentSnapshotEntry>,
    calendar_rows: &[CalendarSnapshotRow],
) -> Result<()> {
    store.save(TOURNAMENT_SNAPSHOT_KEY, tournament_snapshot)?;
    store.save(CALENDAR_SNAPSHOT_KEY, calendar_rows)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_calendar;
    use crate::domain::TournamentRecord;
    use chrono::NaiveDate;

    #[test]
    fn test_tournament_snapshot_carries_week_label() {
        let mut groups: TournamentGroups = BTreeMap::new();
        groups.entry("Week of June 16".to_string()).or_default().insert(
            "t1".to_string(),
            TournamentSummary {
                name: "WTA 500 Berlin".to_string(),
                level: "WTA500".to_string(),
                start_date: Some("2025-06-16".to_string()),
                end_date: None,
            },
        );

        let snapshot = build_tournament_snapshot(&groups);
        assert_eq!(snapshot["t1"].week, "Week of June 16");
        assert_eq!(snapshot["t1"].name, "WTA 500 Berlin");
    }

    #[test]
    fn test_calendar_snapshot_rows_round_trip_store() {
        let records = vec![TournamentRecord {
            name: "Event".to_string(),
            level: "W75".to_string(),
            surface: "Clay".to_string(),
            country: "ARG".to_string(),
            start_date: "2025-06-16".to_string(),
            end_date: None,
        }];
        let weeks = build_calendar(&records, NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
        let rows = build_calendar_snapshot(&weeks);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].column, "itf");
        assert_eq!(rows[0].continent, "south_america");
        assert_eq!(rows[0].week_label, "Week of June 16");

        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        write_snapshots(&store, &BTreeMap::new(), &rows).unwrap();

        let reloaded: Vec<CalendarSnapshotRow> = store.load_or_default(CALENDAR_SNAPSHOT_KEY);
        assert_eq!(reloaded, rows);
    }
}
