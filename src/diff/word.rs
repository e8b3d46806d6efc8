//! Word-level diff of one modification pair.
//!
//! Lines are cut into tokens: a run of word characters (alphanumeric or `_`), a run
//! of whitespace, or a single character of anything else. `"key": [1, 2]` becomes
//! `"`, `key`, `"`, `:`, ` `, `[`, `1`, `,`, ` `, `2`, `]`.

use super::types::DiffSegment;
use similar::{Algorithm, ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Word,
    Space,
    Symbol,
}

impl TokenClass {
    fn of(ch: char) -> Self {
        if ch.is_alphanumeric() || ch == '_' {
            TokenClass::Word
        } else if ch.is_whitespace() {
            TokenClass::Space
        } else {
            TokenClass::Symbol
        }
    }
}

/// Split a line into diff tokens. Concatenating the tokens gives back the line.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenClass> = None;

    for (idx, ch) in line.char_indices() {
        let class = TokenClass::of(ch);
        if let Some(prev) = current
            && (prev != class || class == TokenClass::Symbol)
        {
            tokens.push(&line[start..idx]);
            start = idx;
        }
        current = Some(class);
    }
    if current.is_some() {
        tokens.push(&line[start..]);
    }

    tokens
}

/// Highlighted segments for both sides of a modification pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDiff {
    pub left: Vec<DiffSegment>,
    pub right: Vec<DiffSegment>,
}

/// Diff two lines token by token.
///
/// The left side holds the tokens of `old`, highlighted where they are missing from
/// `new`; the right side holds the tokens of `new`, highlighted where they are missing
/// from `old`. Neighbouring tokens with the same state are merged into one segment.
pub fn diff_words(old: &str, new: &str) -> WordDiff {
    let old_tokens = tokenize(old);
    let new_tokens = tokenize(new);

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(&old_tokens, &new_tokens);

    let mut left = SegmentBuilder::default();
    let mut right = SegmentBuilder::default();

    for change in diff.iter_all_changes() {
        let text = change.value();
        match change.tag() {
            ChangeTag::Equal => {
                left.push(text, false);
                right.push(text, false);
            }
            ChangeTag::Delete => left.push(text, true),
            ChangeTag::Insert => right.push(text, true),
        }
    }

    WordDiff {
        left: left.finish(),
        right: right.finish(),
    }
}

#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<DiffSegment>,
}

impl SegmentBuilder {
    fn push(&mut self, text: &str, highlighted: bool) {
        match self.segments.last_mut() {
            Some(last) if last.highlighted == highlighted => last.text.push_str(text),
            _ => self.segments.push(DiffSegment {
                text: text.to_string(),
                highlighted,
            }),
        }
    }

    fn finish(self) -> Vec<DiffSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenizer_splits_words_spaces_and_symbols() {
        assert_eq!(
            tokenize("  \"key\": [1, 22]"),
            vec!["  ", "\"", "key", "\"", ":", " ", "[", "1", ",", " ", "22", "]"]
        );
        assert_eq!(tokenize("snake_case  x"), vec!["snake_case", "  ", "x"]);
        assert_eq!(tokenize("=>"), vec!["=", ">"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn tokenizer_handles_multibyte_text() {
        assert_eq!(tokenize("héllo wörld!"), vec!["héllo", " ", "wörld", "!"]);
        assert_eq!(tokenize("我爱你 ok"), vec!["我爱你", " ", "ok"]);
    }

    #[test]
    fn single_token_lines_are_fully_highlighted() {
        let diff = diff_words("b", "x");
        assert_eq!(diff.left, vec![DiffSegment::highlighted("b")]);
        assert_eq!(diff.right, vec![DiffSegment::highlighted("x")]);
    }

    #[test]
    fn only_changed_word_is_highlighted() {
        let diff = diff_words("hello cat", "hello dog");
        assert_eq!(
            diff.left,
            vec![DiffSegment::plain("hello "), DiffSegment::highlighted("cat")]
        );
        assert_eq!(
            diff.right,
            vec![DiffSegment::plain("hello "), DiffSegment::highlighted("dog")]
        );
    }

    #[test]
    fn punctuation_changes_are_separate_tokens() {
        let diff = diff_words("  \"b\": 2", "  \"b\": 3,");
        assert_eq!(
            diff.left,
            vec![DiffSegment::plain("  \"b\": "), DiffSegment::highlighted("2")]
        );
        assert_eq!(
            diff.right,
            vec![DiffSegment::plain("  \"b\": "), DiffSegment::highlighted("3,")]
        );
    }

    #[test]
    fn identical_lines_have_no_highlight() {
        let diff = diff_words("same line", "same line");
        assert_eq!(diff.left, vec![DiffSegment::plain("same line")]);
        assert_eq!(diff.right, diff.left);
    }

    #[test]
    fn empty_side_yields_no_segments() {
        let diff = diff_words("", "added");
        assert!(diff.left.is_empty());
        assert_eq!(diff.right, vec![DiffSegment::highlighted("added")]);
    }

    #[test]
    fn segments_reconstruct_each_line() {
        let old = "let total = price * qty;";
        let new = "let total: f64 = price * quantity;";
        let diff = diff_words(old, new);
        let left: String = diff.left.iter().map(|s| s.text.as_str()).collect();
        let right: String = diff.right.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(left, old);
        assert_eq!(right, new);
    }
}
