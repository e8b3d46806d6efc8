//! Side-by-side diff engine.
//!
//! The pipeline is:
//! - [`line`]: line-level edit script between baseline and working copy
//! - [`word`]: token-level diff of one removed/added line pair
//! - [`align`]: the two-column grid of rows, with inline highlights
//! - [`hunk`]: contiguous change regions and next/previous navigation
//!
//! Everything here is a pure function of the two input texts except [`HunkCursor`].

pub mod align;
pub mod hunk;
pub mod line;
pub mod options;
pub mod stats;
pub mod types;
pub mod word;

pub use align::{Side, align_rows, compute_side_by_side_rows, compute_side_by_side_rows_with, side_text};
pub use hunk::{Direction, HunkCursor, Navigation, locate_hunks, navigate};
pub use line::{compute_line_changes, split_lines};
pub use options::{DiffAlgorithm, DiffOptions};
pub use stats::{DiffStats, added_count, has_changes, removed_count};
pub use types::{CellKind, DiffHunk, DiffSegment, LineChange, LineTag, SideBySideRow, SideCell};
pub use word::{WordDiff, diff_words, tokenize};
