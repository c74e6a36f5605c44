mod builder;
pub mod weeks;

pub use builder::{build_calendar, CalendarSlot, CalendarWeek};
pub use weeks::{monday_map, next_monday, schedule_monday, week_label};
