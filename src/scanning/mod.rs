//! Recognises delimiters in text and runs them through a [`BalanceTracker`]

mod symbols;
mod tags;

use tracing::debug;

use crate::{
    options::{CheckOptions, Mode},
    report::Report,
    tracker::BalanceTracker,
};

impl CheckOptions {
    /// Scan `source` once, left to right, and report every structural finding.
    ///
    /// Checking is deterministic: the same input and options always produce
    /// the same report.
    pub fn check<'a>(&self, source: &'a str) -> Report<'a> {
        let kind = self.mode.kind();
        let halt = self.halts_on_unexpected_close();
        debug!(mode = kind.name(), halt, bytes = source.len(), "scanning");

        let mut tracker = BalanceTracker::new(halt).with_pending_limit(self.pending_limit);
        match &self.mode {
            Mode::Symbols(pairs) => symbols::scan(source, pairs, &mut tracker),
            Mode::Tags(void) => tags::scan(source, void, &mut tracker),
        }
        let (diagnostics, halted) = tracker.finish();

        debug!(diagnostics = diagnostics.len(), halted, "scan finished");
        Report::new(kind, diagnostics, halted)
    }
}
