/// One of the three columns of the weekly calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarColumn {
    WtaTour,
    Wta125,
    Itf,
}

impl CalendarColumn {
    pub const ALL: [CalendarColumn; 3] =
        [CalendarColumn::WtaTour, CalendarColumn::Wta125, CalendarColumn::Itf];

    /// Stable key used in snapshot files.
    pub fn key(&self) -> &'static str {
        match self {
            CalendarColumn::WtaTour => "wta_tour",
            CalendarColumn::Wta125 => "wta_125",
            CalendarColumn::Itf => "itf",
        }
    }

    /// Route a tournament level string to its calendar column.
    ///
    /// Level strings arrive in several spellings ("WTA 1000", "wta1000"), so
    /// matching is done on the lowercased, space-stripped form. Anything not
    /// recognized as tour-level or WTA 125 is an ITF event.
    pub fn from_level(level: &str) -> CalendarColumn {
        match normalize_level(level).as_str() {
            "grandslam" | "wta1000" | "wta500" | "wta250" | "finals" | "wtafinals" => {
                CalendarColumn::WtaTour
            }
            "wta125" => CalendarColumn::Wta125,
            _ => CalendarColumn::Itf,
        }
    }
}

fn normalize_level(level: &str) -> String {
    level.to_lowercase().replace(' ', "")
}

/// Display priority of a tournament level within a calendar cell.
/// Lower sorts first; unknown levels go to the bottom.
pub fn sort_order(level: &str) -> u32 {
    match normalize_level(level).as_str() {
        "grandslam" => 0,
        "wta1000" => 1,
        "wta500" => 2,
        "wta250" => 3,
        "wta125" => 4,
        "w100" => 5,
        "w75" => 6,
        "w60" => 7,
        "w50" => 8,
        "w35" => 9,
        "w25" => 10,
        "w15" => 11,
        _ => 99,
    }
}

/// ITF feeds carry the prize level only inside the tournament name
/// ("W75 Buenos Aires", "Suzhou 100k"). First matching rule wins.
const ITF_LEVEL_RULES: &[(&str, &[&str])] = &[
    ("W100", &["W100", "100k"]),
    ("W75", &["W75", "75k"]),
    ("W60", &["W60", "60k"]),
    ("W50", &["W50", "50k"]),
    ("W35", &["W35", "35k"]),
    ("W25", &["W25", "25k"]),
    ("W15", &["W15", "15k"]),
];

/// Infer an ITF tournament's level from its name; defaults to W15.
pub fn itf_level_from_name(name: &str) -> &'static str {
    for (level, needles) in ITF_LEVEL_RULES {
        if needles.iter().any(|n| name.contains(n)) {
            return level;
        }
    }
    "W15"
}
