use crate::diff::{
    DiffHunk, DiffOptions, DiffStats, SideBySideRow, compute_side_by_side_rows_with, locate_hunks,
};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Everything a host needs to draw one comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffReport {
    pub rows: Vec<SideBySideRow>,
    pub hunks: Vec<DiffHunk>,
    pub stats: DiffStats,
}

impl DiffReport {
    pub fn compute(baseline: &str, working: &str, options: &DiffOptions) -> Self {
        let started = Instant::now();

        let rows = compute_side_by_side_rows_with(baseline, working, options);
        let hunks = locate_hunks(&rows);
        let stats = DiffStats::from_rows(&rows, &hunks);

        debug!(
            rows = rows.len(),
            hunks = hunks.len(),
            added = stats.added_count,
            removed = stats.removed_count,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Computed diff"
        );

        Self { rows, hunks, stats }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn report_serializes_rows_hunks_and_stats() {
        let report = DiffReport::compute("a\nb", "a\nx", &DiffOptions::default());
        let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        let rows = json["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["left"]["kind"], "context");
        assert_eq!(rows[1]["left"]["kind"], "removed");
        assert_eq!(rows[1]["right"]["kind"], "added");
        assert_eq!(rows[1]["right"]["segments"][0]["text"], "x");
        assert_eq!(rows[1]["right"]["segments"][0]["highlighted"], true);

        assert_eq!(json["hunks"][0]["start_index"], 1);
        assert_eq!(json["hunks"][0]["end_index"], 1);
        assert_eq!(json["stats"]["added_count"], 1);
        assert_eq!(json["stats"]["has_changes"], true);
    }

    #[test]
    fn blank_cells_serialize_without_line_number() {
        let report = DiffReport::compute("a\nb\nc", "a\nc", &DiffOptions::default());
        let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        let right = &json["rows"][1]["right"];
        assert_eq!(right["kind"], "blank");
        assert!(right["line_number"].is_null());
        assert_eq!(right["segments"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn identical_documents_give_an_empty_report() {
        let report = DiffReport::compute("same", "same", &DiffOptions::default());
        assert!(report.is_empty());
        assert!(!report.stats.has_changes);
    }
}
