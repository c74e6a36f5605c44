use serde::{Deserialize, Serialize};

/// Tournament data as reported by a federation feed, one record per scrape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub name: String,
    pub level: String,
    #[serde(default)]
    pub surface: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
}

/// Which draw an entry-list row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    Main,
    Qual,
    Alt,
}

/// One row of a tournament entry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryListEntry {
    #[serde(default)]
    pub pos: String,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub rank: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub pos_num: i64,
}

/// WTA ranks are plain numbers; ITF ranks arrive as strings ("ITF 143").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
    Num(i64),
    Text(String),
}

/// One player's row in a weekly ranking snapshot. Field names follow the
/// cache file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Rank")]
    pub rank: Rank,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Key", default)]
    pub key: String,
    #[serde(rename = "Points", default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(rename = "Played", default, skip_serializing_if = "Option::is_none")]
    pub played: Option<i64>,
    #[serde(rename = "DOB", default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

/// Per-tournament summary kept in the weekly tournament groups built by the
/// pipeline (week label -> tournament key -> summary).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub name: String,
    pub level: String,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
}
