use std::fmt::{self, Display, Formatter};

use crate::{options::ModeKind, tracker::Diagnostic};

/// The outcome of one balance check
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report<'a> {
    mode: ModeKind,
    balanced: bool,
    halted: bool,
    diagnostics: Vec<Diagnostic<'a>>,
}

impl<'a> Report<'a> {
    pub(crate) fn new(mode: ModeKind, diagnostics: Vec<Diagnostic<'a>>, halted: bool) -> Self {
        Report {
            mode,
            balanced: diagnostics.is_empty(),
            halted,
            diagnostics,
        }
    }

    /// True when nothing at all was reported
    pub fn balanced(&self) -> bool {
        self.balanced
    }

    /// True when a stray closer stopped the scan before the end of input
    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn mode(&self) -> ModeKind {
        self.mode
    }

    /// Findings in the order they were encountered
    pub fn diagnostics(&self) -> &[Diagnostic<'a>] {
        &self.diagnostics
    }

    /// The final line of the human-readable report
    pub fn summary(&self) -> String {
        let count = self.diagnostics.len();
        match (count, self.halted) {
            (0, _) => "balanced".to_string(),
            (1, false) => "1 issue found".to_string(),
            (1, true) => "1 issue found (scan stopped early)".to_string(),
            (n, false) => format!("{n} issues found"),
            (n, true) => format!("{n} issues found (scan stopped early)"),
        }
    }
}

/// One line per diagnostic, followed by the summary line.
impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        write!(f, "{}", self.summary())
    }
}
