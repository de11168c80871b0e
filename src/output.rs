//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output and the
//! roster count table printed after a diff.

use tabled::{Table, Tabled};

use crate::report::MissingReport;
use crate::roster::Roster;

/// Trait for human-readable key-value output.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for MissingReport {
    fn pretty_print(&self) -> String {
        let header = if self.district_name.is_empty() {
            format!("District {}", self.district_id)
        } else {
            format!("District {} ({})", self.district_name, self.district_id)
        };
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];
        if self.is_empty() {
            lines.push("No discrepancies found".to_string());
            return lines.join("\n");
        }

        for (label, ids) in [
            ("Students", &self.missing_students),
            ("Teachers", &self.missing_teachers),
            ("Schools", &self.missing_schools),
        ] {
            if ids.is_empty() {
                lines.push(format!("{label:<16}none missing"));
            } else {
                lines.push(format!("{label:<16}{} missing: {}", ids.len(), ids.join(", ")));
            }
        }

        lines.join("\n")
    }
}

#[derive(Tabled)]
struct CountRow {
    collection: &'static str,
    accelerator: usize,
    growth: usize,
}

/// Side-by-side record counts of two rosters.
pub fn count_table(accelerator: &Roster, growth: &Roster) -> String {
    let rows: Vec<CountRow> = accelerator
        .counts()
        .into_iter()
        .zip(growth.counts())
        .map(|((collection, accelerator), (_, growth))| CountRow {
            collection,
            accelerator,
            growth,
        })
        .collect();

    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_pretty_print_format() {
        let report = MissingReport {
            district_name: "Springfield".to_string(),
            district_id: "d123".to_string(),
            missing_students: vec!["s9".to_string(), "s10".to_string()],
            ..Default::default()
        };

        let output = report.pretty_print();
        assert!(output.starts_with("District Springfield (d123)"));
        assert!(output.contains("2 missing: s9, s10"));
        assert!(output.contains("Teachers        none missing"));
    }

    #[test]
    fn test_report_without_discrepancies() {
        let report = MissingReport {
            district_name: "Springfield".to_string(),
            district_id: "d123".to_string(),
            ..Default::default()
        };

        let output = report.pretty_print();
        assert!(output.starts_with("District Springfield (d123)"));
        assert!(output.ends_with("No discrepancies found"));
        assert!(!output.contains("none missing"));
    }

    #[test]
    fn test_count_table_has_every_collection() {
        let table = count_table(&Roster::default(), &Roster::default());
        for name in [
            "districts",
            "schools",
            "students",
            "teachers",
            "district_admins",
            "school_admins",
            "sections",
        ] {
            assert!(table.contains(name), "missing {name} in\n{table}");
        }
        assert!(table.contains("accelerator"));
    }
}
