use super::types::{DiffHunk, SideBySideRow};

/// Group maximal runs of changed rows into hunks, in row order.
pub fn locate_hunks(rows: &[SideBySideRow]) -> Vec<DiffHunk> {
    let mut hunks = Vec::new();
    let mut in_hunk = false;
    let mut start = 0usize;

    for (i, row) in rows.iter().enumerate() {
        let changed = row.is_changed();
        if changed && !in_hunk {
            in_hunk = true;
            start = i;
        } else if !changed && in_hunk {
            in_hunk = false;
            hunks.push(DiffHunk {
                start_index: start,
                end_index: i - 1,
            });
        }
    }

    if in_hunk {
        hunks.push(DiffHunk {
            start_index: start,
            end_index: rows.len() - 1,
        });
    }

    hunks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Outcome of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub cursor: Option<usize>,
    /// First row of the selected hunk, for scrolling the view
    pub target_row: Option<usize>,
}

/// Move the cursor one hunk forward or backward, wrapping at both ends.
///
/// A cursor past the end of `hunks` is clamped to the last hunk first. With no
/// hunks, nothing is selected and there is no target row.
pub fn navigate(hunks: &[DiffHunk], cursor: Option<usize>, direction: Direction) -> Navigation {
    let count = hunks.len();
    if count == 0 {
        return Navigation {
            cursor: None,
            target_row: None,
        };
    }

    let current = cursor.map(|c| c.min(count - 1));
    let next = match direction {
        Direction::Next => match current {
            Some(c) if c + 1 < count => c + 1,
            _ => 0,
        },
        Direction::Previous => match current {
            Some(c) if c > 0 => c - 1,
            _ => count - 1,
        },
    };

    Navigation {
        cursor: Some(next),
        target_row: Some(hunks[next].start_index),
    }
}

/// Selected hunk of a diff view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HunkCursor {
    index: Option<usize>,
}

impl HunkCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Select the next hunk and return the row to scroll to.
    pub fn next(&mut self, hunks: &[DiffHunk]) -> Option<usize> {
        self.step(hunks, Direction::Next)
    }

    /// Select the previous hunk and return the row to scroll to.
    pub fn previous(&mut self, hunks: &[DiffHunk]) -> Option<usize> {
        self.step(hunks, Direction::Previous)
    }

    pub fn step(&mut self, hunks: &[DiffHunk], direction: Direction) -> Option<usize> {
        let navigation = navigate(hunks, self.index, direction);
        self.index = navigation.cursor;
        navigation.target_row
    }

    /// Keep the cursor valid after the hunk list was recomputed.
    pub fn clamp_to(&mut self, hunk_count: usize) {
        self.index = match (self.index, hunk_count) {
            (_, 0) => None,
            (Some(i), n) => Some(i.min(n - 1)),
            (None, _) => None,
        };
    }

    pub fn active_hunk(&self, hunks: &[DiffHunk]) -> Option<DiffHunk> {
        self.index.and_then(|i| hunks.get(i).copied())
    }

    /// Whether `row_index` lies inside the selected hunk.
    pub fn contains_row(&self, hunks: &[DiffHunk], row_index: usize) -> bool {
        self.active_hunk(hunks)
            .is_some_and(|hunk| hunk.contains(row_index))
    }
}
