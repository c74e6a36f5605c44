pub mod levels;
pub mod models;
pub mod names;

pub use levels::{itf_level_from_name, sort_order, CalendarColumn};
pub use models::*;
pub use names::{fix_display_name, title_case, PlayerAliases};
