use std::sync::LazyLock;

use regex::Regex;

use crate::{
    options::VoidTags,
    tracker::{BalanceTracker, Flow, Position, Symbol, Token},
};

// 1: closing slash, 2: tag name, 3: self-closing slash
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/)?([a-zA-Z0-9.]+)(?:[^>]*?(/)?)?>").expect("tag pattern is valid")
});

/// Feed every paired markup tag of `source` to `tracker`, one line at a time.
///
/// Tags never span lines here, and void or self-closing tags are skipped
/// entirely.
pub(crate) fn scan<'a>(source: &'a str, void: &VoidTags, tracker: &mut BalanceTracker<'a>) {
    let mut line_offset = 0;

    'lines: for (index, line) in source.split('\n').enumerate() {
        for captures in TAG.captures_iter(line) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(2)) else {
                continue;
            };
            let name = name.as_str();
            if void.contains(name) || captures.get(3).is_some() {
                continue;
            }

            let column = line[..whole.start()].chars().count();
            let position = Position::new(line_offset + column, index + 1, column + 1);
            let symbol = Symbol::Tag(name);

            let flow = if captures.get(1).is_some() {
                tracker.observe_close(Token::close(symbol, position))
            } else {
                tracker.observe_open(Token::open(symbol, position), symbol)
            };
            if flow == Flow::Halt {
                break 'lines;
            }
        }
        line_offset += line.chars().count() + 1;
    }
}
