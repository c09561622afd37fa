//! Delimiter tokens and the LIFO tracker that pairs them

mod diagnostic;
mod stack;
mod state;
mod token;

pub use self::{
    diagnostic::Diagnostic,
    state::{BalanceTracker, Flow},
    token::{Position, Symbol, Token, TokenKind},
};
pub(crate) use self::stack::Stack;
