//! Owned diff state for a host view.
//!
//! Holds both documents, the current [`DiffReport`] and the hunk cursor. Setters only
//! recompute when the inputs actually changed; recent reports are kept in a small
//! cache keyed on the xxh64 hashes of both texts, so flipping back to an earlier
//! pair of documents is free. Hosts that want to react to changes call
//! [`DiffSession::subscribe`].

use crate::constant::REPORT_CACHE_CAPACITY;
use crate::diff::{DiffHunk, DiffOptions, DiffStats, Direction, HunkCursor, SideBySideRow};
use crate::report::DiffReport;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::debug;
use xxhash_rust::xxh64::xxh64;

/// Notifications sent to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The report was replaced
    Recomputed { row_count: usize, hunk_count: usize },
    /// A hunk was selected; `row` is where the view should scroll
    Navigated { hunk: usize, row: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReportKey {
    baseline: u64,
    working: u64,
    options: DiffOptions,
}

impl ReportKey {
    fn new(baseline: &str, working: &str, options: DiffOptions) -> Self {
        Self {
            baseline: xxh64(baseline.as_bytes(), 0),
            working: xxh64(working.as_bytes(), 0),
            options,
        }
    }
}

pub struct DiffSession {
    baseline: String,
    working: String,
    options: DiffOptions,
    key: ReportKey,
    report: Arc<DiffReport>,
    cache: Vec<(ReportKey, Arc<DiffReport>)>,
    cursor: HunkCursor,
    subscribers: Vec<Sender<SessionEvent>>,
}

impl Default for DiffSession {
    fn default() -> Self {
        Self::new(DiffOptions::default())
    }
}

impl DiffSession {
    pub fn new(options: DiffOptions) -> Self {
        Self::with_documents(String::new(), String::new(), options)
    }

    pub fn with_documents(
        baseline: impl Into<String>,
        working: impl Into<String>,
        options: DiffOptions,
    ) -> Self {
        let baseline = baseline.into();
        let working = working.into();
        let key = ReportKey::new(&baseline, &working, options);
        let report = Arc::new(DiffReport::compute(&baseline, &working, &options));

        Self {
            baseline,
            working,
            options,
            key,
            cache: vec![(key, Arc::clone(&report))],
            report,
            cursor: HunkCursor::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn working(&self) -> &str {
        &self.working
    }

    pub fn options(&self) -> DiffOptions {
        self.options
    }

    pub fn report(&self) -> Arc<DiffReport> {
        Arc::clone(&self.report)
    }

    pub fn rows(&self) -> &[SideBySideRow] {
        &self.report.rows
    }

    pub fn hunks(&self) -> &[DiffHunk] {
        &self.report.hunks
    }

    pub fn stats(&self) -> DiffStats {
        self.report.stats
    }

    pub fn has_baseline(&self) -> bool {
        !self.baseline.is_empty()
    }

    /// Replace the baseline. Returns whether the report changed.
    pub fn set_baseline(&mut self, text: impl Into<String>) -> bool {
        self.baseline = text.into();
        self.refresh()
    }

    /// Replace the working copy. Returns whether the report changed.
    pub fn set_working(&mut self, text: impl Into<String>) -> bool {
        self.working = text.into();
        self.refresh()
    }

    pub fn set_documents(&mut self, baseline: impl Into<String>, working: impl Into<String>) -> bool {
        self.baseline = baseline.into();
        self.working = working.into();
        self.refresh()
    }

    pub fn set_options(&mut self, options: DiffOptions) -> bool {
        self.options = options;
        self.refresh()
    }

    /// Take the working copy as the new baseline.
    pub fn promote_working(&mut self) -> bool {
        self.baseline.clone_from(&self.working);
        self.refresh()
    }

    /// Throw away working-copy edits.
    pub fn restore_baseline(&mut self) -> bool {
        self.working.clone_from(&self.baseline);
        self.refresh()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn active_hunk(&self) -> Option<DiffHunk> {
        self.cursor.active_hunk(&self.report.hunks)
    }

    pub fn is_active_row(&self, row_index: usize) -> bool {
        self.cursor.contains_row(&self.report.hunks, row_index)
    }

    pub fn next_hunk(&mut self) -> Option<usize> {
        self.navigate(Direction::Next)
    }

    pub fn previous_hunk(&mut self) -> Option<usize> {
        self.navigate(Direction::Previous)
    }

    /// Move the hunk cursor and return the row the view should scroll to.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let target = self.cursor.step(&self.report.hunks, direction);
        if let (Some(hunk), Some(row)) = (self.cursor.index(), target) {
            debug!(hunk, row, ?direction, "Navigated to hunk");
            self.notify(SessionEvent::Navigated { hunk, row });
        }
        target
    }

    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    fn refresh(&mut self) -> bool {
        let key = ReportKey::new(&self.baseline, &self.working, self.options);
        if key == self.key {
            return false;
        }

        let report = match self.cache.iter().position(|(k, _)| *k == key) {
            Some(pos) => {
                let (_, report) = self.cache.remove(pos);
                debug!("Reusing cached diff report");
                report
            }
            None => Arc::new(DiffReport::compute(&self.baseline, &self.working, &self.options)),
        };

        self.cache.insert(0, (key, Arc::clone(&report)));
        self.cache.truncate(REPORT_CACHE_CAPACITY);

        self.key = key;
        self.report = report;
        self.cursor.clamp_to(self.report.hunks.len());

        self.notify(SessionEvent::Recomputed {
            row_count: self.report.rows.len(),
            hunk_count: self.report.hunks.len(),
        });
        true
    }

    fn notify(&mut self, event: SessionEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
