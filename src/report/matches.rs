use std::collections::HashMap;
use std::path::Path;

use log::warn;

/// One CSV row keyed by header name. The match history files come from
/// several loaders with different column naming conventions, so rows are
/// kept as loose maps and read through alias lists.
pub type CsvRow = HashMap<String, String>;

/// Read a headered CSV file. Unreadable files and unparseable rows degrade
/// to empty output; the reporter treats them as having nothing to compare.
pub fn load_csv_rows(path: &Path) -> (Vec<String>, Vec<CsvRow>) {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            warn!("Skipping unreadable CSV {}: {}", path.display(), e);
            return (Vec::new(), Vec::new());
        }
    };

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(str::to_string).collect(),
        Err(e) => {
            warn!("Skipping CSV without headers {}: {}", path.display(), e);
            return (Vec::new(), Vec::new());
        }
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let Ok(record) = record else { continue };
        let row: CsvRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }

    (headers, rows)
}

/// A file is match-shaped when it has a matchId column or both winner and
/// loser name columns.
pub fn has_match_shape(headers: &[String]) -> bool {
    let has = |name: &str| headers.iter().any(|h| h == name);
    has("matchId") || (has("winnerName") && has("loserName"))
}

/// Uniqueness key for one match row: the matchId when the file carries one,
/// else a composite of the identifying columns.
pub fn row_key(row: &CsvRow, headers: &[String]) -> Option<String> {
    for id_col in ["matchId", "MATCHID"] {
        if headers.iter().any(|h| h == id_col) {
            let id = row.get(id_col).map(|v| v.trim()).unwrap_or_default();
            return if id.is_empty() { None } else { Some(id.to_string()) };
        }
    }

    const COMPOSITE: [&str; 6] =
        ["date", "tournamentName", "winnerName", "loserName", "roundName", "draw"];
    if COMPOSITE.iter().all(|k| row.contains_key(*k)) {
        let parts: Vec<&str> = COMPOSITE
            .iter()
            .map(|k| row.get(*k).map(|v| v.trim()).unwrap_or_default())
            .collect();
        return Some(parts.join("||"));
    }
    None
}

/// First non-empty value among the naming variants a column goes by.
pub fn field<'a>(row: &'a CsvRow, names: &[&str]) -> &'a str {
    names
        .iter()
        .filter_map(|n| row.get(*n))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .unwrap_or("")
}

/// Human-readable one-liner for a match row, used in the run report.
pub fn format_match_line(row: &CsvRow) -> String {
    let date = field(row, &["date", "DATE", "matchDate"]);
    let tournament = field(row, &["tournamentName", "TOURNAMENT", "tournament"]);
    let winner = field(row, &["winnerName", "_winnerName"]);
    let loser = field(row, &["loserName", "_loserName"]);
    let result = field(row, &["result", "SCORE"]);
    let round_name = field(row, &["roundName", "ROUND"]);

    let matchup = if winner.is_empty() && loser.is_empty() {
        String::new()
    } else {
        format!("{} def. {}", winner, loser).trim().to_string()
    };

    [date, tournament, round_name, matchup.as_str(), result]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn row(pairs: &[(&str, &str)]) -> CsvRow {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_row_key_prefers_match_id() {
        let headers = vec!["matchId".to_string(), "winnerName".to_string()];
        let r = row(&[("matchId", " 42 "), ("winnerName", "A")]);
        assert_eq!(row_key(&r, &headers), Some("42".to_string()));
    }

    #[test]
    fn test_row_key_empty_match_id_is_no_key() {
        let headers = vec!["matchId".to_string()];
        let r = row(&[("matchId", "")]);
        assert_eq!(row_key(&r, &headers), None);
    }

    #[test]
    fn test_row_key_composite_fallback() {
        let headers: Vec<String> =
            ["date", "tournamentName", "winnerName", "loserName", "roundName", "draw"]
                .iter()
                .map(|s| s.to_string())
                .collect();
        let r = row(&[
            ("date", "2025-06-16"),
            ("tournamentName", "W75 Buenos Aires"),
            ("winnerName", "A"),
            ("loserName", "B"),
            ("roundName", "QF"),
            ("draw", "S"),
        ]);
        assert_eq!(
            row_key(&r, &headers),
            Some("2025-06-16||W75 Buenos Aires||A||B||QF||S".to_string())
        );
    }

    #[test]
    fn test_match_shape_detection() {
        let shaped = vec!["winnerName".to_string(), "loserName".to_string()];
        let unshaped = vec!["week_date".to_string(), "rank".to_string()];
        assert!(has_match_shape(&shaped));
        assert!(!has_match_shape(&unshaped));
    }

    #[test]
    fn test_format_match_line_skips_empty_parts() {
        let r = row(&[
            ("date", "2025-06-16"),
            ("winnerName", "A"),
            ("loserName", "B"),
            ("result", "6-0 6-0"),
        ]);
        assert_eq!(format_match_line(&r), "2025-06-16 | A def. B | 6-0 6-0");
    }

    #[test]
    fn test_load_csv_rows_reads_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "matchId,winnerName,loserName").unwrap();
        writeln!(f, "1,A,B").unwrap();

        let (headers, rows) = load_csv_rows(&path);
        assert_eq!(headers, vec!["matchId", "winnerName", "loserName"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["winnerName"], "A");
    }

    #[test]
    fn test_missing_csv_degrades_to_empty() {
        let (headers, rows) = load_csv_rows(Path::new("/nonexistent/file.csv"));
        assert!(headers.is_empty());
        assert!(rows.is_empty());
    }
}
