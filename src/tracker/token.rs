use std::fmt::{self, Display, Formatter};

/// Whether a delimiter opens or closes a region
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// The beginning of a region
    Open,
    /// The end of a region
    Close,
}

/// The delimiter itself; borrowed from the scanned text where possible
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Symbol<'a> {
    /// A single bracket-like character
    Char(char),
    /// The name of a markup tag, without angle brackets or slashes
    Tag(&'a str),
}

impl Symbol<'_> {
    /// Render the symbol the way it appears when closing a region.
    pub fn as_closer(&self) -> String {
        match *self {
            Symbol::Char(c) => format!("'{c}'"),
            Symbol::Tag(name) => format!("</{name}>"),
        }
    }

    /// Render the symbol the way it appears when opening a region.
    pub fn as_opener(&self) -> String {
        match *self {
            Symbol::Char(c) => format!("'{c}'"),
            Symbol::Tag(name) => format!("<{name}>"),
        }
    }
}

impl Display for Symbol<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Tag(name) => f.write_str(name),
        }
    }
}

/// Where a token was seen.
///
/// `offset` counts characters (not bytes) from the start of the document and
/// starts at zero; `line` and `column` start at one.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single delimiter occurrence
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub symbol: Symbol<'a>,
    pub position: Position,
}

impl<'a> Token<'a> {
    pub fn open(symbol: Symbol<'a>, position: Position) -> Self {
        Token {
            kind: TokenKind::Open,
            symbol,
            position,
        }
    }

    pub fn close(symbol: Symbol<'a>, position: Position) -> Self {
        Token {
            kind: TokenKind::Close,
            symbol,
            position,
        }
    }

    /// Where the token was seen, in the unit that suits its symbol: character
    /// offsets for brackets, line numbers for tags.
    pub fn location(&self) -> String {
        match self.symbol {
            Symbol::Char(_) => format!("offset {} ({})", self.position.offset, self.position),
            Symbol::Tag(_) => format!("line {}", self.position.line),
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let rendered = match self.kind {
            TokenKind::Open => self.symbol.as_opener(),
            TokenKind::Close => self.symbol.as_closer(),
        };
        write!(f, "{} at {}", rendered, self.location())
    }
}
