use std::path::PathBuf;

use crate::domain::PlayerAliases;

/// Settings for the run report generator.
pub struct ReportSettings {
    /// IOC code of the tracked nationality.
    pub tracked_nationality: String,
    /// Cap on match lines reported per CSV file, to keep notification
    /// payloads bounded.
    pub max_match_lines_per_file: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            tracked_nationality: "ARG".to_string(),
            max_match_lines_per_file: 50,
        }
    }
}

pub struct AppConfig {
    /// Directory holding cache and snapshot files.
    pub data_dir: PathBuf,
    /// Alias table mapping display names to the spellings each source uses.
    pub aliases_file: PathBuf,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            aliases_file: PathBuf::from("player_aliases.json"),
            report: ReportSettings::default(),
        }
    }

    /// Load the player alias table once at startup; a missing file resolves
    /// every name to itself.
    pub fn load_aliases(&self) -> anyhow::Result<PlayerAliases> {
        PlayerAliases::load(&self.aliases_file)
    }
}

// Passed explicitly into the components that need it (dependency injection)
// rather than held in module-level statics, so each piece stays testable in
// isolation.
