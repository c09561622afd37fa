//! What to scan for and how to react to it

use std::collections::BTreeSet;

use crate::Error;

/// Elements that never need a closing tag
pub const DEFAULT_VOID_TAGS: [&str; 13] = [
    "br", "hr", "img", "input", "link", "meta", "area", "base", "col", "embed", "source", "track",
    "wbr",
];

/// Opening and closing characters recognised in symbol mode.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SymbolPairs {
    pairs: Vec<(char, char)>,
}

impl Default for SymbolPairs {
    fn default() -> Self {
        SymbolPairs {
            pairs: vec![('(', ')'), ('[', ']'), ('{', '}')],
        }
    }
}

impl SymbolPairs {
    /// Build a pair table. Every character may appear only once across all
    /// pairs, and an opener may not be its own closer.
    pub fn new(pairs: impl IntoIterator<Item = (char, char)>) -> Result<Self, Error> {
        let pairs: Vec<(char, char)> = pairs.into_iter().collect();
        if pairs.is_empty() {
            return Err(Error::config("at least one delimiter pair is required"));
        }

        let mut seen = BTreeSet::new();
        for &(open, close) in &pairs {
            if open == close {
                return Err(Error::config(format!(
                    "{open:?} cannot both open and close a region"
                )));
            }
            for c in [open, close] {
                if !seen.insert(c) {
                    return Err(Error::config(format!("{c:?} appears in more than one pair")));
                }
            }
        }

        Ok(SymbolPairs { pairs })
    }

    /// Parse a table written as consecutive opener/closer characters, e.g. `()[]{}<>`.
    pub fn parse(spec: &str) -> Result<Self, Error> {
        let chars: Vec<char> = spec.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(Error::config(format!(
                "delimiter pairs {spec:?} have an odd number of characters"
            )));
        }
        Self::new(chars.chunks(2).map(|pair| (pair[0], pair[1])))
    }

    /// The closer that matches `open`, if `open` is an opener
    pub fn closer_for(&self, open: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|&&(o, _)| o == open)
            .map(|&(_, close)| close)
    }

    pub fn is_closer(&self, c: char) -> bool {
        self.pairs.iter().any(|&(_, close)| close == c)
    }

    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }
}

/// Tag names that are always treated as self-closing. Names are case-sensitive.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VoidTags(BTreeSet<String>);

impl Default for VoidTags {
    fn default() -> Self {
        DEFAULT_VOID_TAGS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for VoidTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        VoidTags(iter.into_iter().map(Into::into).collect())
    }
}

impl VoidTags {
    /// No void tags at all; every opening tag must be closed or self-closed.
    pub fn none() -> Self {
        VoidTags(BTreeSet::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// The delimiter model a scan uses
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Mode {
    /// Character-level brackets, scanned character by character
    Symbols(SymbolPairs),
    /// Markup tags, scanned line by line
    Tags(VoidTags),
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Symbols(_) => ModeKind::Symbols,
            Mode::Tags(_) => ModeKind::Tags,
        }
    }
}

/// [`Mode`] without its configuration, for reporting
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ModeKind {
    Symbols,
    Tags,
}

impl ModeKind {
    /// Tag mode gives up after a stray closer; symbol mode keeps going.
    pub fn halts_on_unexpected_close(self) -> bool {
        matches!(self, ModeKind::Tags)
    }

    pub fn name(self) -> &'static str {
        match self {
            ModeKind::Symbols => "symbols",
            ModeKind::Tags => "tags",
        }
    }
}

/// Configuration of a single balance check.
///
/// ```
/// # use delimit::CheckOptions;
/// let options = CheckOptions::tags().with_pending_limit(Some(5));
/// assert!(!options.check("<div>").balanced());
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CheckOptions {
    pub(crate) mode: Mode,
    pub(crate) pending_limit: Option<usize>,
    pub(crate) halt_on_unexpected_close: Option<bool>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self::symbols()
    }
}

impl CheckOptions {
    pub fn new(mode: Mode) -> Self {
        CheckOptions {
            mode,
            pending_limit: None,
            halt_on_unexpected_close: None,
        }
    }

    /// Brackets, parentheses and braces
    pub fn symbols() -> Self {
        Self::new(Mode::Symbols(SymbolPairs::default()))
    }

    /// Markup tags with the standard set of void elements
    pub fn tags() -> Self {
        Self::new(Mode::Tags(VoidTags::default()))
    }

    /// List at most `limit` of the most recent unclosed openers at end of input.
    /// `Some(0)` means no limit, like `None`.
    pub fn with_pending_limit(mut self, limit: Option<usize>) -> Self {
        self.pending_limit = limit.filter(|&limit| limit > 0);
        self
    }

    /// Override whether a closer with nothing open stops the scan.
    /// By default only tag mode stops.
    pub fn with_halt_on_unexpected_close(mut self, halt: bool) -> Self {
        self.halt_on_unexpected_close = Some(halt);
        self
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn halts_on_unexpected_close(&self) -> bool {
        self.halt_on_unexpected_close
            .unwrap_or_else(|| self.mode.kind().halts_on_unexpected_close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pairs() {
        let pairs = SymbolPairs::default();
        assert_eq!(pairs.closer_for('('), Some(')'));
        assert_eq!(pairs.closer_for('{'), Some('}'));
        assert_eq!(pairs.closer_for(')'), None);
        assert!(pairs.is_closer(']'));
        assert!(!pairs.is_closer('<'));
    }

    #[test]
    fn parse_pairs() {
        let pairs = SymbolPairs::parse("()<>").unwrap();
        assert_eq!(pairs.pairs(), &[('(', ')'), ('<', '>')]);
    }

    #[test]
    fn reject_bad_pairs() {
        assert!(SymbolPairs::parse("").is_err());
        assert!(SymbolPairs::parse("(").is_err());
        assert!(SymbolPairs::parse("||").is_err());
        assert!(SymbolPairs::parse("()(]").is_err());
        assert!(SymbolPairs::parse("())(").is_err());
    }

    #[test]
    fn default_void_tags() {
        let void = VoidTags::default();
        assert!(void.contains("br"));
        assert!(void.contains("wbr"));
        assert!(!void.contains("div"));
        assert!(!void.contains("BR"));
        assert_eq!(void.iter().count(), DEFAULT_VOID_TAGS.len());
    }

    #[test]
    fn halting_defaults_follow_mode() {
        assert!(!CheckOptions::symbols().halts_on_unexpected_close());
        assert!(CheckOptions::tags().halts_on_unexpected_close());
        assert!(!CheckOptions::tags()
            .with_halt_on_unexpected_close(false)
            .halts_on_unexpected_close());
    }

    #[test]
    fn mode_is_kept() {
        let options = CheckOptions::tags();
        assert_eq!(options.mode(), &Mode::Tags(VoidTags::default()));
        assert_eq!(options.mode().kind(), ModeKind::Tags);
    }
}
