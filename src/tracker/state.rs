use tracing::trace;

use crate::tracker::{Diagnostic, Stack, Symbol, Token};

/// Whether the scanner should keep feeding tokens
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Flow {
    Continue,
    Halt,
}

/// An opener waiting for its counterpart
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Pending<'a> {
    token: Token<'a>,
    expects: Symbol<'a>,
}

/// Matches closers against openers in LIFO order and accumulates findings.
///
/// The tracker knows nothing about how tokens are recognised; scanners feed
/// it openers (together with the closer they expect) and closers.
#[derive(Debug)]
pub struct BalanceTracker<'a> {
    pending: Vec<Pending<'a>>,
    diagnostics: Vec<Diagnostic<'a>>,
    halt_on_unexpected_close: bool,
    pending_limit: Option<usize>,
    halted: bool,
}

impl<'a> BalanceTracker<'a> {
    pub fn new(halt_on_unexpected_close: bool) -> Self {
        BalanceTracker {
            pending: Vec::new(),
            diagnostics: Vec::new(),
            halt_on_unexpected_close,
            pending_limit: None,
            halted: false,
        }
    }

    /// Only list the `limit` most recent openers when input ends unbalanced.
    /// A limit of zero lists everything.
    pub fn with_pending_limit(mut self, limit: Option<usize>) -> Self {
        self.pending_limit = limit.filter(|&limit| limit > 0);
        self
    }

    pub fn depth(&self) -> usize {
        self.pending.len()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn diagnostics(&self) -> &[Diagnostic<'a>] {
        &self.diagnostics
    }

    /// Record an opener. `expects` is the symbol that will close it.
    pub fn observe_open(&mut self, token: Token<'a>, expects: Symbol<'a>) -> Flow {
        if self.halted {
            return Flow::Halt;
        }
        trace!(symbol = %token.symbol, offset = token.position.offset, depth = self.depth(), "open");
        self.pending.push(Pending { token, expects });
        Flow::Continue
    }

    /// Match a closer against the most recent opener.
    pub fn observe_close(&mut self, token: Token<'a>) -> Flow {
        if self.halted {
            return Flow::Halt;
        }
        trace!(
            symbol = %token.symbol,
            offset = token.position.offset,
            expected = ?self.pending.peek().map(|p| p.expects),
            "close"
        );

        match self.pending.pop() {
            None => {
                self.diagnostics
                    .push(Diagnostic::UnexpectedClose { close: token });
                if self.halt_on_unexpected_close {
                    self.halted = true;
                    return Flow::Halt;
                }
            },
            Some(open) if open.expects != token.symbol => {
                self.diagnostics.push(Diagnostic::Mismatch {
                    open: open.token,
                    close: token,
                    expected: open.expects,
                });
            },
            Some(_) => {},
        }
        Flow::Continue
    }

    /// Observe that the input ended. This function is idempotent.
    pub fn observe_eof(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let total = self.pending.len();
        let shown = self.pending_limit.unwrap_or(total);
        let pending = self.pending.tail(shown).iter().map(|p| p.token).collect();
        self.pending.clear();
        self.diagnostics
            .push(Diagnostic::UnclosedAtEof { pending, total });
    }

    /// Close out the scan, returning the findings and whether scanning halted early.
    pub fn finish(mut self) -> (Vec<Diagnostic<'a>>, bool) {
        self.observe_eof();
        (self.diagnostics, self.halted)
    }
}
