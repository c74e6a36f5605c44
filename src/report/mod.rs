mod diff;
mod markdown;
pub mod matches;
pub mod snapshot;

pub use diff::{compute_report, AddedMatches, NewEntryList, RunReport, Withdrawal};
pub use markdown::render_markdown;
pub use snapshot::{
    build_calendar_snapshot, build_tournament_snapshot, write_snapshots, CalendarSnapshotRow,
    TournamentGroups, TournamentSnapshotEntry,
};
