//! Checks that brackets and markup tags in a text document are balanced.
//!
//! The checker is a structural heuristic, not a lexer: it does not know about
//! strings or comments, and it never repairs anything. It scans a document
//! once and reports, in order, every closer without an opener, every closer
//! that pairs with the wrong opener, and whatever is still open at the end.
//!
//! ```
//! use delimit::{CheckOptions, Diagnostic};
//!
//! let report = CheckOptions::symbols().check("(]");
//! assert!(!report.balanced());
//! assert!(matches!(report.diagnostics(), [Diagnostic::Mismatch { .. }]));
//!
//! let report = CheckOptions::tags().check("<br><img src='x'/>");
//! assert!(report.balanced());
//! ```
//!
//! Two delimiter models exist. Symbol mode looks at single characters such as
//! `(`, `[` and `{` and keeps going no matter what it finds. Tag mode looks at
//! `<name>`, `</name>` and `<name/>` one line at a time and stops at the
//! first closing tag that has nothing to close. Either behaviour can be
//! overridden through [`CheckOptions`].
//!
//! The [`editing`] module holds the line-range edits used to patch the
//! imbalances a check turns up.

mod document;
pub mod editing;
mod error;
pub mod options;
mod report;
mod scanning;
pub mod tracker;

pub use self::{
    document::Document,
    error::Error,
    options::{CheckOptions, Mode, ModeKind, SymbolPairs, VoidTags},
    report::Report,
    tracker::{Diagnostic, Position, Symbol, Token, TokenKind},
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
