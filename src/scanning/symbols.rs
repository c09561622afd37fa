use crate::{
    options::SymbolPairs,
    tracker::{BalanceTracker, Flow, Position, Symbol, Token},
};

/// Feed every bracket character of `source` to `tracker`.
///
/// Strings and comments are not recognised; a bracket inside a string
/// literal counts like any other.
pub(crate) fn scan<'a>(source: &'a str, pairs: &SymbolPairs, tracker: &mut BalanceTracker<'a>) {
    let mut line = 1;
    let mut column = 1;

    for (offset, c) in source.chars().enumerate() {
        let position = Position::new(offset, line, column);

        let flow = if let Some(close) = pairs.closer_for(c) {
            tracker.observe_open(Token::open(Symbol::Char(c), position), Symbol::Char(close))
        } else if pairs.is_closer(c) {
            tracker.observe_close(Token::close(Symbol::Char(c), position))
        } else {
            Flow::Continue
        };
        if flow == Flow::Halt {
            break;
        }

        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
}
