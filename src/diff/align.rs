use super::line::compute_line_changes;
use super::options::DiffOptions;
use super::types::{CellKind, DiffSegment, LineChange, LineTag, SideBySideRow, SideCell};
use super::word::diff_words;

/// Which column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Compute the side-by-side grid with default options.
///
/// Returns no rows when the baseline is empty or both documents are identical.
pub fn compute_side_by_side_rows(baseline: &str, working: &str) -> Vec<SideBySideRow> {
    compute_side_by_side_rows_with(baseline, working, &DiffOptions::default())
}

/// Compute the side-by-side grid.
pub fn compute_side_by_side_rows_with(
    baseline: &str,
    working: &str,
    options: &DiffOptions,
) -> Vec<SideBySideRow> {
    if baseline.is_empty() || baseline == working {
        return Vec::new();
    }

    let changes = compute_line_changes(baseline, working, options.algorithm);
    align_rows(&changes, options.inline_highlight)
}

/// Turn a line-level edit script into rows.
///
/// A `Removed` record directly followed by an `Added` record is a modification group:
/// its lines are paired by position and the longer side's extra lines face blanks.
/// Pairing is purely positional, so adjacent but unrelated removals and insertions
/// are still shown as modifications.
pub fn align_rows(changes: &[LineChange<'_>], inline_highlight: bool) -> Vec<SideBySideRow> {
    let mut aligner = RowAligner::new(inline_highlight);
    let mut i = 0usize;

    while i < changes.len() {
        let change = &changes[i];
        match change.tag {
            LineTag::Unchanged => aligner.push_context(&change.lines),
            LineTag::Removed => {
                if let Some(added) = changes.get(i + 1).filter(|c| c.tag == LineTag::Added) {
                    aligner.push_modification(&change.lines, &added.lines);
                    i += 2;
                    continue;
                }
                aligner.push_removed(&change.lines);
            }
            LineTag::Added => aligner.push_added(&change.lines),
        }
        i += 1;
    }

    aligner.finish()
}

/// Rebuild one side's document from the grid.
pub fn side_text(rows: &[SideBySideRow], side: Side) -> String {
    let mut text = String::new();
    for row in rows {
        let cell = match side {
            Side::Left => &row.left,
            Side::Right => &row.right,
        };
        if cell.is_blank() {
            continue;
        }
        text.push_str(&cell.text());
        if cell.newline {
            text.push('\n');
        }
    }
    text
}

struct RowAligner {
    inline_highlight: bool,
    left_number: usize,
    right_number: usize,
    rows: Vec<SideBySideRow>,
}

impl RowAligner {
    fn new(inline_highlight: bool) -> Self {
        Self {
            inline_highlight,
            left_number: 1,
            right_number: 1,
            rows: Vec::new(),
        }
    }

    fn push_context(&mut self, lines: &[&str]) {
        for line in lines {
            let (text, newline) = strip_newline(line);
            let left = self.left_cell(CellKind::Context, plain_segments(text), newline);
            let right = self.right_cell(CellKind::Context, plain_segments(text), newline);
            self.rows.push(SideBySideRow { left, right });
        }
    }

    fn push_removed(&mut self, lines: &[&str]) {
        for line in lines {
            let (text, newline) = strip_newline(line);
            let left = self.left_cell(CellKind::Removed, plain_segments(text), newline);
            self.rows.push(SideBySideRow {
                left,
                right: SideCell::blank(),
            });
        }
    }

    fn push_added(&mut self, lines: &[&str]) {
        for line in lines {
            let (text, newline) = strip_newline(line);
            let right = self.right_cell(CellKind::Added, plain_segments(text), newline);
            self.rows.push(SideBySideRow {
                left: SideCell::blank(),
                right,
            });
        }
    }

    fn push_modification(&mut self, removed: &[&str], added: &[&str]) {
        let len = removed.len().max(added.len());

        for j in 0..len {
            let row = match (removed.get(j), added.get(j)) {
                (Some(old), Some(new)) => {
                    let (old_text, old_newline) = strip_newline(old);
                    let (new_text, new_newline) = strip_newline(new);
                    let (left_segments, right_segments) = if self.inline_highlight {
                        let words = diff_words(old_text, new_text);
                        (words.left, words.right)
                    } else {
                        (plain_segments(old_text), plain_segments(new_text))
                    };
                    SideBySideRow {
                        left: self.left_cell(CellKind::Removed, left_segments, old_newline),
                        right: self.right_cell(CellKind::Added, right_segments, new_newline),
                    }
                }
                (Some(old), None) => {
                    let (text, newline) = strip_newline(old);
                    SideBySideRow {
                        left: self.left_cell(CellKind::Removed, plain_segments(text), newline),
                        right: SideCell::blank(),
                    }
                }
                (None, Some(new)) => {
                    let (text, newline) = strip_newline(new);
                    SideBySideRow {
                        left: SideCell::blank(),
                        right: self.right_cell(CellKind::Added, plain_segments(text), newline),
                    }
                }
                (None, None) => break,
            };
            self.rows.push(row);
        }
    }

    fn left_cell(&mut self, kind: CellKind, segments: Vec<DiffSegment>, newline: bool) -> SideCell {
        let cell = SideCell::line(kind, self.left_number, segments, newline);
        self.left_number += 1;
        cell
    }

    fn right_cell(&mut self, kind: CellKind, segments: Vec<DiffSegment>, newline: bool) -> SideCell {
        let cell = SideCell::line(kind, self.right_number, segments, newline);
        self.right_number += 1;
        cell
    }

    fn finish(self) -> Vec<SideBySideRow> {
        self.rows
    }
}

fn strip_newline(line: &str) -> (&str, bool) {
    match line.strip_suffix('\n') {
        Some(text) => (text, true),
        None => (line, false),
    }
}

fn plain_segments(text: &str) -> Vec<DiffSegment> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![DiffSegment::plain(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::options::DiffAlgorithm;
    use pretty_assertions::assert_eq;

    fn kinds(rows: &[SideBySideRow]) -> Vec<(CellKind, CellKind)> {
        rows.iter().map(|r| (r.left.kind, r.right.kind)).collect()
    }

    #[test]
    fn identical_documents_produce_no_rows() {
        assert!(compute_side_by_side_rows("a\nb\nc", "a\nb\nc").is_empty());
    }

    #[test]
    fn empty_baseline_produces_no_rows() {
        assert!(compute_side_by_side_rows("", "a").is_empty());
    }

    #[test]
    fn single_line_change_is_fully_highlighted() {
        let rows = compute_side_by_side_rows("a\nb", "a\nx");
        assert_eq!(
            kinds(&rows),
            vec![
                (CellKind::Context, CellKind::Context),
                (CellKind::Removed, CellKind::Added)
            ]
        );
        assert_eq!(rows[1].left.segments, vec![DiffSegment::highlighted("b")]);
        assert_eq!(rows[1].right.segments, vec![DiffSegment::highlighted("x")]);
        assert_eq!(rows[1].left.line_number, Some(2));
        assert_eq!(rows[1].right.line_number, Some(2));
    }

    #[test]
    fn pure_removal_faces_a_blank() {
        let rows = compute_side_by_side_rows("a\nb\nc", "a\nc");
        assert_eq!(
            kinds(&rows),
            vec![
                (CellKind::Context, CellKind::Context),
                (CellKind::Removed, CellKind::Blank),
                (CellKind::Context, CellKind::Context)
            ]
        );
        assert_eq!(rows[1].left.text(), "b");
        assert_eq!(rows[1].right, SideCell::blank());
        assert_eq!(rows[2].left.line_number, Some(3));
        assert_eq!(rows[2].right.line_number, Some(2));
    }

    #[test]
    fn pure_addition_faces_a_blank() {
        let rows = compute_side_by_side_rows("a\nc\n", "a\nb\nc\n");
        assert_eq!(rows[1].left, SideCell::blank());
        assert_eq!(rows[1].right.kind, CellKind::Added);
        assert_eq!(rows[1].right.segments, vec![DiffSegment::plain("b")]);
        assert_eq!(rows[2].left.line_number, Some(2));
        assert_eq!(rows[2].right.line_number, Some(3));
    }

    #[test]
    fn longer_added_block_pads_left_with_blanks() {
        let changes = vec![
            LineChange::new(LineTag::Unchanged, vec!["{\n"]),
            LineChange::new(LineTag::Removed, vec!["  \"a\": 1\n"]),
            LineChange::new(LineTag::Added, vec!["  \"a\": 2,\n", "  \"b\": 3,\n", "  \"c\": 4\n"]),
            LineChange::new(LineTag::Unchanged, vec!["}"]),
        ];
        let rows = align_rows(&changes, true);
        assert_eq!(
            kinds(&rows),
            vec![
                (CellKind::Context, CellKind::Context),
                (CellKind::Removed, CellKind::Added),
                (CellKind::Blank, CellKind::Added),
                (CellKind::Blank, CellKind::Added),
                (CellKind::Context, CellKind::Context)
            ]
        );
        assert!(rows[1].left.has_highlight());
        assert!(!rows[2].right.has_highlight());
        assert_eq!(rows[4].left.line_number, Some(3));
        assert_eq!(rows[4].right.line_number, Some(5));
    }

    #[test]
    fn added_then_removed_is_not_a_modification() {
        let changes = vec![
            LineChange::new(LineTag::Added, vec!["new\n"]),
            LineChange::new(LineTag::Removed, vec!["old\n"]),
        ];
        let rows = align_rows(&changes, true);
        assert_eq!(
            kinds(&rows),
            vec![
                (CellKind::Blank, CellKind::Added),
                (CellKind::Removed, CellKind::Blank)
            ]
        );
    }

    #[test]
    fn inline_highlight_can_be_disabled() {
        let options = DiffOptions {
            algorithm: DiffAlgorithm::Myers,
            inline_highlight: false,
        };
        let rows = compute_side_by_side_rows_with("hello cat\n", "hello dog\n", &options);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].left.segments, vec![DiffSegment::plain("hello cat")]);
        assert_eq!(rows[0].right.segments, vec![DiffSegment::plain("hello dog")]);
    }

    #[test]
    fn trailing_newline_difference_is_an_unhighlighted_pair() {
        let rows = compute_side_by_side_rows("a\nb", "a\nb\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].left.kind, CellKind::Removed);
        assert_eq!(rows[1].right.kind, CellKind::Added);
        assert!(!rows[1].left.has_highlight());
        assert!(!rows[1].right.has_highlight());
        assert!(!rows[1].left.newline);
        assert!(rows[1].right.newline);
    }

    #[test]
    fn empty_lines_keep_their_numbers() {
        let rows = compute_side_by_side_rows("a\n\nb\n", "a\n\nc\n");
        assert_eq!(rows[1].left.kind, CellKind::Context);
        assert!(rows[1].left.segments.is_empty());
        assert_eq!(rows[1].left.line_number, Some(2));
        assert_eq!(rows[2].right.line_number, Some(3));
    }

    #[test]
    fn sides_rebuild_their_documents() {
        let baseline = "one\ntwo\nthree\n\nfive";
        let working = "zero\none\n2\nthree\nfive\nsix\n";
        let rows = compute_side_by_side_rows(baseline, working);
        assert_eq!(side_text(&rows, Side::Left), baseline);
        assert_eq!(side_text(&rows, Side::Right), working);
    }
}
