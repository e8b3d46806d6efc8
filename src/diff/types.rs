use serde::Serialize;

/// Tag of one record in the line-level edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTag {
    Unchanged,
    Removed,
    Added,
}

/// A run of lines sharing the same tag. Lines keep their `\n` terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange<'a> {
    pub tag: LineTag,
    pub lines: Vec<&'a str>,
}

impl<'a> LineChange<'a> {
    pub fn new(tag: LineTag, lines: Vec<&'a str>) -> Self {
        Self { tag, lines }
    }
}

/// A run of characters inside one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSegment {
    pub text: String,
    pub highlighted: bool,
}

impl DiffSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Context,
    Added,
    Removed,
    Blank,
}

/// One side of a row. Blank cells have no line number and no segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideCell {
    pub line_number: Option<usize>,
    pub kind: CellKind,
    pub segments: Vec<DiffSegment>,
    /// Whether the source line ended with `\n`.
    pub newline: bool,
}

impl SideCell {
    pub fn blank() -> Self {
        Self {
            line_number: None,
            kind: CellKind::Blank,
            segments: Vec::new(),
            newline: false,
        }
    }

    pub fn line(
        kind: CellKind,
        line_number: usize,
        segments: Vec<DiffSegment>,
        newline: bool,
    ) -> Self {
        debug_assert!(kind != CellKind::Blank);
        Self {
            line_number: Some(line_number),
            kind,
            segments,
            newline,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.kind == CellKind::Blank
    }

    /// Line text without its terminator.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn has_highlight(&self) -> bool {
        self.segments.iter().any(|s| s.highlighted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideBySideRow {
    pub left: SideCell,
    pub right: SideCell,
}

impl SideBySideRow {
    /// A row is changed when either side is not context.
    pub fn is_changed(&self) -> bool {
        self.left.kind != CellKind::Context || self.right.kind != CellKind::Context
    }
}

/// Inclusive row bounds of one run of changed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffHunk {
    pub start_index: usize,
    pub end_index: usize,
}

impl DiffHunk {
    pub fn row_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, row_index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&row_index)
    }
}
