use chrono::Utc;

use crate::report::diff::RunReport;

/// Render the run report as the Markdown document mailed out after each
/// batch run.
pub fn render_markdown(report: &RunReport) -> String {
    let now_utc = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Website Update Report ({})", now_utc));
    lines.push(String::new());

    lines.push("## 1) Argentine Withdrawals (WTA/ITF)".to_string());
    if report.withdrawals.is_empty() {
        lines.push("- None detected.".to_string());
    } else {
        for item in &report.withdrawals {
            lines.push(format!("- {}: {}", item.tournament_name, item.players.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("## 2) Tournaments that now have an Entry List".to_string());
    if report.new_entry_lists.is_empty() {
        lines.push("- None detected.".to_string());
    } else {
        for item in &report.new_entry_lists {
            lines.push(format!("- {} ({} entries)", item.tournament_name, item.entries_count));
        }
    }

    lines.push(String::new());
    lines.push("## 3) Matches Added to CSV Files".to_string());
    if report.added_matches.is_empty() {
        lines.push("- None detected.".to_string());
    } else {
        for (csv_name, payload) in &report.added_matches {
            lines.push(format!("- {}: {} new match(es)", csv_name, payload.count));
            for line in &payload.items {
                lines.push(format!("  - {}", line));
            }
            if payload.truncated {
                lines.push(format!("  - ... and {} more", payload.count - payload.items.len()));
            }
        }
    }

    lines.push(String::new());
    lines.push("## 4) Tournaments Added to Calendar".to_string());
    if report.added_calendar_tournaments.is_empty() {
        lines.push("- None detected.".to_string());
    } else {
        for item in &report.added_calendar_tournaments {
            lines.push(format!(
                "- {} | {} | {} | {} | {}",
                item.week_label, item.name, item.level, item.column, item.continent
            ));
        }
    }

    lines.push(String::new());
    lines.push("## Notes".to_string());
    lines.push(
        "- Diff compares pre-run snapshots vs post-run `data/` files in this workflow run."
            .to_string(),
    );
    lines.push(
        "- On first run (or when a snapshot file is missing), sections may show `None detected` \
         because no baseline exists."
            .to_string(),
    );
    lines.push("- Match lists are capped per CSV to keep email size manageable.".to_string());
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::diff::{AddedMatches, Withdrawal};

    #[test]
    fn test_empty_report_renders_all_sections() {
        let markdown = render_markdown(&RunReport::default());
        assert!(markdown.starts_with("# Website Update Report ("));
        assert!(markdown.contains("## 1) Argentine Withdrawals (WTA/ITF)"));
        assert!(markdown.contains("## 2) Tournaments that now have an Entry List"));
        assert!(markdown.contains("## 3) Matches Added to CSV Files"));
        assert!(markdown.contains("## 4) Tournaments Added to Calendar"));
        assert_eq!(markdown.matches("- None detected.").count(), 4);
    }

    #[test]
    fn test_sections_with_content() {
        let mut report = RunReport::default();
        report.withdrawals.push(Withdrawal {
            tournament_key: "t1".to_string(),
            tournament_name: "W75 Buenos Aires".to_string(),
            players: vec!["A".to_string(), "B".to_string()],
        });
        report.added_matches.insert(
            "m.csv".to_string(),
            AddedMatches {
                count: 51,
                items: vec!["line".to_string()],
                truncated: true,
            },
        );

        let markdown = render_markdown(&report);
        assert!(markdown.contains("- W75 Buenos Aires: A, B"));
        assert!(markdown.contains("- m.csv: 51 new match(es)"));
        assert!(markdown.contains("  - ... and 50 more"));
    }
}
