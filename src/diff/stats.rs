use super::types::{CellKind, DiffHunk, SideBySideRow};
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added_count: usize,
    pub removed_count: usize,
    pub hunk_count: usize,
    pub has_changes: bool,
}

impl DiffStats {
    /// Count rows once the hunks are known.
    pub fn from_rows(rows: &[SideBySideRow], hunks: &[DiffHunk]) -> Self {
        Self {
            added_count: added_count(rows),
            removed_count: removed_count(rows),
            hunk_count: hunks.len(),
            has_changes: has_changes(rows),
        }
    }
}

/// Rows whose right cell is an addition
pub fn added_count(rows: &[SideBySideRow]) -> usize {
    rows.iter()
        .filter(|row| row.right.kind == CellKind::Added)
        .count()
}

/// Rows whose left cell is a removal
pub fn removed_count(rows: &[SideBySideRow]) -> usize {
    rows.iter()
        .filter(|row| row.left.kind == CellKind::Removed)
        .count()
}

pub fn has_changes(rows: &[SideBySideRow]) -> bool {
    rows.iter().any(SideBySideRow::is_changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::align::compute_side_by_side_rows;
    use crate::diff::hunk::locate_hunks;

    #[test]
    fn counts_modification_and_padding_rows() {
        // b -> x is one pair, y and z are extra additions, d is a pure removal
        let rows = compute_side_by_side_rows("a\nb\nc\nd\n", "a\nx\ny\nz\nc\n");
        let hunks = locate_hunks(&rows);
        let stats = DiffStats::from_rows(&rows, &hunks);
        assert_eq!(stats.added_count, 3);
        assert_eq!(stats.removed_count, 2);
        assert_eq!(stats.hunk_count, 2);
        assert!(stats.has_changes);
    }

    #[test]
    fn empty_rows_have_no_changes() {
        let stats = DiffStats::from_rows(&[], &[]);
        assert_eq!(stats, DiffStats::default());
    }
}
