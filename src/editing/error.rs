use thiserror::Error;

/// Why a line-range edit was refused. The buffer is never modified when one
/// of these is returned.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum EditError {
    /// A line number points outside the document.
    #[error("line {line} is out of range (document has {len} lines)")]
    LineOutOfRange { line: usize, len: usize },

    /// Start lies after end, or a line number is zero.
    #[error("invalid line range {start}-{end}")]
    InvalidRange { start: usize, end: usize },

    /// A block cannot be moved next to one of its own lines.
    #[error("target line {after} lies inside the moved range {start}-{end}")]
    TargetInsideRange {
        start: usize,
        end: usize,
        after: usize,
    },

    /// The document is shorter than the caller expected it to be.
    #[error("document has {len} lines, expected at least {min}; refusing to edit")]
    TooShort { len: usize, min: usize },
}
