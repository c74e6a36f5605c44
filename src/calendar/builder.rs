use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Days, NaiveDate};
use log::info;

use crate::calendar::weeks::{next_monday, parse_date_or_sentinel, week_label};
use crate::config::Continent;
use crate::domain::{sort_order, CalendarColumn, TournamentRecord};

/// Minimum day-overlap between a tournament and a week for the tournament to
/// appear in that week's grid. A tournament spanning a week boundary lands
/// in whichever week hosts the majority of it; a 2-week event with at least
/// 4 days in each week appears in both.
const MIN_OVERLAP_DAYS: i64 = 4;

/// One tournament inside a calendar cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSlot {
    pub name: String,
    pub level: String,
    pub surface: String,
}

/// One calendar week: a grid of (column, continent) cells.
#[derive(Debug, Clone)]
pub struct CalendarWeek {
    pub monday: NaiveDate,
    pub week_label: String,
    columns: HashMap<CalendarColumn, HashMap<Continent, Vec<CalendarSlot>>>,
    pub has_any: bool,
}

impl CalendarWeek {
    fn new(monday: NaiveDate) -> Self {
        Self {
            monday,
            week_label: week_label(monday),
            columns: HashMap::new(),
            has_any: false,
        }
    }

    fn push(&mut self, column: CalendarColumn, continent: Continent, slot: CalendarSlot) {
        self.columns
            .entry(column)
            .or_default()
            .entry(continent)
            .or_default()
            .push(slot);
    }

    fn sort_cells(&mut self) {
        for cells in self.columns.values_mut() {
            for slots in cells.values_mut() {
                slots.sort_by_key(|s| sort_order(&s.level));
            }
        }
        self.has_any = self
            .columns
            .values()
            .any(|cells| cells.values().any(|slots| !slots.is_empty()));
    }

    /// Tournaments in one grid cell, high tier first.
    pub fn slots(&self, column: CalendarColumn, continent: Continent) -> &[CalendarSlot] {
        self.columns
            .get(&column)
            .and_then(|cells| cells.get(&continent))
            .map_or(&[], Vec::as_slice)
    }
}

struct ParsedTournament {
    name: String,
    level: String,
    surface: String,
    continent: Continent,
    start: NaiveDate,
    end: NaiveDate,
}

/// Bucket tournaments into the weekly grid from the next full week through
/// the end of the year.
///
/// Duplicate names across feeds are collapsed (first record wins), Grand
/// Slam qualifying weeks are synthesized from the main draw's start date,
/// and trailing all-empty weeks are trimmed so the grid does not run into
/// the off-season. Empty weeks in the middle of the season are kept.
pub fn build_calendar(tournaments: &[TournamentRecord], today: NaiveDate) -> Vec<CalendarWeek> {
    let start_monday = next_monday(today);
    let parsed = parse_tournaments(tournaments);

    let end_of_year = NaiveDate::from_ymd_opt(start_monday.year(), 12, 31)
        .unwrap_or(start_monday);
    let total_weeks = (end_of_year - start_monday).num_days() / 7 + 1;

    let mut weeks = Vec::with_capacity(total_weeks as usize);
    for offset in 0..total_weeks {
        let monday = start_monday + Days::new(offset as u64 * 7);
        let sunday = monday + Days::new(6);
        let mut week = CalendarWeek::new(monday);

        for t in &parsed {
            if overlap_days(t.start, t.end, monday, sunday) >= MIN_OVERLAP_DAYS {
                week.push(
                    CalendarColumn::from_level(&t.level),
                    t.continent,
                    CalendarSlot {
                        name: t.name.clone(),
                        level: t.level.clone(),
                        surface: t.surface.clone(),
                    },
                );
            }
        }

        week.sort_cells();
        weeks.push(week);
    }

    // Trim the empty off-season tail, never mid-season gap weeks.
    while weeks.last().is_some_and(|w| !w.has_any) {
        weeks.pop();
    }

    info!("Built calendar: {} weeks from {}", weeks.len(), start_monday);
    weeks
}

/// Inclusive day count shared by the two ranges, or 0 when disjoint.
fn overlap_days(start: NaiveDate, end: NaiveDate, monday: NaiveDate, sunday: NaiveDate) -> i64 {
    let overlap_start = start.max(monday);
    let overlap_end = end.min(sunday);
    if overlap_start > overlap_end {
        return 0;
    }
    (overlap_end - overlap_start).num_days() + 1
}

fn parse_tournaments(tournaments: &[TournamentRecord]) -> Vec<ParsedTournament> {
    let mut parsed = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for t in tournaments {
        // The same event can be reported by multiple feeds.
        if !seen.insert(t.name.as_str()) {
            continue;
        }
        let start = parse_date_or_sentinel(&t.start_date);
        let end = match &t.end_date {
            Some(raw) => parse_date_or_sentinel(raw),
            None => start + Days::new(6),
        };
        parsed.push(ParsedTournament {
            name: t.name.clone(),
            level: t.level.clone(),
            surface: t.surface.clone(),
            continent: Continent::from_country(&t.country),
            start,
            end,
        });
    }

    // Qualifying draws for the majors are not separately reported; infer
    // them as the seven days before the main draw.
    let quals: Vec<ParsedTournament> = parsed
        .iter()
        .filter(|t| is_grand_slam(&t.level))
        .map(|gs| {
            let end = gs.start - Days::new(1);
            ParsedTournament {
                name: format!("{} Qualifying", gs.name),
                level: gs.level.clone(),
                surface: gs.surface.clone(),
                continent: gs.continent,
                start: end - Days::new(6),
                end,
            }
        })
        .collect();
    parsed.extend(quals);

    parsed
}

fn is_grand_slam(level: &str) -> bool {
    level.to_lowercase().replace(' ', "") == "grandslam"
}
