use std::fmt::{self, Display, Formatter};

use crate::tracker::{Symbol, Token};

/// A structural finding.
///
/// Diagnostics are accumulated and reported; they are never raised as errors.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Diagnostic<'a> {
    /// A closing delimiter arrived while nothing was open.
    UnexpectedClose { close: Token<'a> },

    /// A closing delimiter did not pair with the most recently opened one.
    /// The opener has been consumed regardless.
    Mismatch {
        open: Token<'a>,
        close: Token<'a>,
        expected: Symbol<'a>,
    },

    /// Input ended with openers still pending. `pending` holds the most
    /// recent entries (oldest first), `total` how many there were before
    /// any truncation.
    UnclosedAtEof {
        pending: Vec<Token<'a>>,
        total: usize,
    },
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Diagnostic::UnexpectedClose { close } => {
                write!(f, "error: unexpected closing {close}")
            },
            Diagnostic::Mismatch {
                open,
                close,
                expected,
            } => write!(
                f,
                "error: mismatched closing {close}, expected {} for opening {open}",
                expected.as_closer(),
            ),
            Diagnostic::UnclosedAtEof { pending, total } => {
                f.write_str("error: unclosed at end of input")?;
                if pending.len() < *total {
                    write!(f, " (showing last {} of {total})", pending.len())?;
                }
                f.write_str(": ")?;
                for (index, token) in pending.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{token}")?;
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Position;

    #[test]
    fn mismatch_names_both_sides() {
        let diagnostic = Diagnostic::Mismatch {
            open: Token::open(Symbol::Char('('), Position::new(0, 1, 1)),
            close: Token::close(Symbol::Char(']'), Position::new(1, 1, 2)),
            expected: Symbol::Char(')'),
        };
        assert_eq!(
            diagnostic.to_string(),
            "error: mismatched closing ']' at offset 1 (1:2), expected ')' for opening '(' at offset 0 (1:1)"
        );
    }

    #[test]
    fn truncated_listing_mentions_total() {
        let diagnostic = Diagnostic::UnclosedAtEof {
            pending: vec![Token::open(Symbol::Tag("main"), Position::new(40, 9, 1))],
            total: 3,
        };
        assert_eq!(
            diagnostic.to_string(),
            "error: unclosed at end of input (showing last 1 of 3): <main> at line 9"
        );
    }
}
