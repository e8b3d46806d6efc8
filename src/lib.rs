//! SideDiff library
//!
//! The [`diff`] module is the engine: line and word edit scripts, the side-by-side
//! grid and hunk navigation. [`session`] wraps it in owned, memoized state for a
//! host view; the remaining modules make up the egui viewer.

pub mod app;
pub mod cli;
pub mod config;
pub mod constant;
pub mod diff;
pub mod error;
pub mod loader;
pub mod report;
pub mod session;
pub mod style;
pub mod ui;

pub use diff::{
    CellKind, DiffHunk, DiffSegment, Direction, SideBySideRow, SideCell, compute_side_by_side_rows,
    locate_hunks, navigate,
};
pub use report::DiffReport;
pub use session::{DiffSession, SessionEvent};
