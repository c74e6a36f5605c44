use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const DATE_FMT: &str = "%Y-%m-%d";

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sort-stability sentinel for records whose date string cannot be parsed.
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid sentinel date")
}

/// Parse a feed date, tolerating a timestamp suffix. Bad input degrades to
/// the sentinel so one malformed record cannot abort an aggregation pass.
pub fn parse_date_or_sentinel(raw: &str) -> NaiveDate {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, DATE_FMT) {
        return d;
    }
    // Feeds sometimes send "2025-06-09T00:00:00(.000Z)".
    let date_part = raw.split('T').next().unwrap_or(raw);
    if let Ok(d) = NaiveDate::parse_from_str(date_part, DATE_FMT) {
        return d;
    }
    sentinel_date()
}

/// The Monday strictly after `today`. When today already is a Monday the
/// window advances a full week: the calendar always starts with a complete
/// upcoming week, never the current partial one.
pub fn next_monday(today: NaiveDate) -> NaiveDate {
    let mut days_until = (7 - today.weekday().num_days_from_monday()) % 7;
    if days_until == 0 {
        days_until = 7;
    }
    today + Days::new(u64::from(days_until))
}

/// Monday of the week containing `date`. Weekend start dates roll forward:
/// a tournament starting on Saturday or Sunday belongs to the week about to
/// begin, not the one ending.
pub fn schedule_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date - Days::new(u64::from(date.weekday().num_days_from_monday())),
    }
}

/// Plain Monday of the week containing `date`.
pub fn monday_containing(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Monday `weeks_back` whole weeks before the week containing `date`.
/// Ranking snapshots are published per week-Monday, so cutoff lookups walk
/// back in Monday steps.
pub fn monday_offset(date: NaiveDate, weeks_back: u64) -> NaiveDate {
    monday_containing(date) - Days::new(weeks_back * 7)
}

/// "Week of June 9" style label for a week's Monday.
pub fn week_label(monday: NaiveDate) -> String {
    let month = MONTHS_EN[monday.month0() as usize];
    format!("Week of {} {}", month, monday.day())
}

/// Upcoming week window: ISO Monday date -> week label, for the given number
/// of weeks starting at the next full week.
pub fn monday_map(today: NaiveDate, num_weeks: u64) -> BTreeMap<String, String> {
    let start = next_monday(today);
    let mut map = BTreeMap::new();
    for offset in 0..num_weeks {
        let monday = start + Days::new(offset * 7);
        map.insert(monday.format(DATE_FMT).to_string(), week_label(monday));
    }
    map
}
