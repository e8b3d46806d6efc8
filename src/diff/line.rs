use super::options::DiffAlgorithm;
use super::types::{LineChange, LineTag};
use similar::{DiffTag, TextDiff};

/// Split a document into lines, each keeping its `\n` terminator.
///
/// Only `\n` ends a line; a `\r` before it stays part of the line text. A document
/// without a trailing newline does not get an empty final line, and the empty
/// document has no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Compute the line-level edit script between two documents.
///
/// Replacements come out as a `Removed` record immediately followed by an `Added`
/// record. Neighbouring records never share a tag.
pub fn compute_line_changes<'a>(
    baseline: &'a str,
    working: &'a str,
    algorithm: DiffAlgorithm,
) -> Vec<LineChange<'a>> {
    let old_lines = split_lines(baseline);
    let new_lines = split_lines(working);

    let diff = TextDiff::configure()
        .algorithm(algorithm.to_similar())
        .diff_slices(&old_lines, &new_lines);

    let mut changes: Vec<LineChange<'a>> = Vec::new();

    for op in diff.ops() {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_lines(&mut changes, LineTag::Unchanged, &old_lines[old_range]),
            DiffTag::Delete => push_lines(&mut changes, LineTag::Removed, &old_lines[old_range]),
            DiffTag::Insert => push_lines(&mut changes, LineTag::Added, &new_lines[new_range]),
            DiffTag::Replace => {
                push_lines(&mut changes, LineTag::Removed, &old_lines[old_range]);
                push_lines(&mut changes, LineTag::Added, &new_lines[new_range]);
            }
        }
    }

    changes
}

fn push_lines<'a>(changes: &mut Vec<LineChange<'a>>, tag: LineTag, lines: &[&'a str]) {
    if lines.is_empty() {
        return;
    }
    match changes.last_mut() {
        Some(last) if last.tag == tag => last.lines.extend_from_slice(lines),
        _ => changes.push(LineChange::new(tag, lines.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(changes: &[LineChange<'_>], skip: LineTag) -> String {
        changes
            .iter()
            .filter(|c| c.tag != skip)
            .flat_map(|c| c.lines.iter().copied())
            .collect()
    }

    #[test]
    fn split_keeps_terminators_without_trailing_empty_line() {
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
        assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
        assert_eq!(split_lines("a\n\n"), vec!["a\n", "\n"]);
        assert_eq!(split_lines("x\r\ny"), vec!["x\r\n", "y"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn identical_documents_are_one_unchanged_block() {
        let changes = compute_line_changes("a\nb\nc", "a\nb\nc", DiffAlgorithm::Myers);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].tag, LineTag::Unchanged);
        assert_eq!(changes[0].lines, vec!["a\n", "b\n", "c"]);
    }

    #[test]
    fn replaced_line_is_removed_then_added() {
        let changes = compute_line_changes("a\nold\nc\n", "a\nnew\nc\n", DiffAlgorithm::Myers);
        let tags: Vec<LineTag> = changes.iter().map(|c| c.tag).collect();
        assert_eq!(
            tags,
            vec![
                LineTag::Unchanged,
                LineTag::Removed,
                LineTag::Added,
                LineTag::Unchanged
            ]
        );
        assert_eq!(changes[1].lines, vec!["old\n"]);
        assert_eq!(changes[2].lines, vec!["new\n"]);
    }

    #[test]
    fn records_reconstruct_both_documents() {
        let baseline = "{\n  \"a\": 1,\n  \"b\": 2\n}\n";
        let working = "{\n  \"a\": 1,\n  \"b\": 3,\n  \"c\": 4\n}";
        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience] {
            let changes = compute_line_changes(baseline, working, algorithm);
            assert_eq!(rebuild(&changes, LineTag::Added), baseline);
            assert_eq!(rebuild(&changes, LineTag::Removed), working);
        }
    }

    #[test]
    fn neighbouring_records_never_share_a_tag() {
        let changes = compute_line_changes("a\nb\nc\nd\n", "x\nb\ny\nz\nw\n", DiffAlgorithm::Myers);
        for pair in changes.windows(2) {
            assert_ne!(pair[0].tag, pair[1].tag);
        }
    }

    #[test]
    fn empty_baseline_is_all_added() {
        let changes = compute_line_changes("", "a\nb", DiffAlgorithm::Myers);
        assert_eq!(changes, vec![LineChange::new(LineTag::Added, vec!["a\n", "b"])]);
    }
}
