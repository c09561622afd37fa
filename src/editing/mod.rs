//! Line-range edits for documents too large to patch by hand
//!
//! A document is split into a [`LineBuffer`] and a [`RangeTransform`] is applied
//! to it. Every line number is checked before anything is touched:
//!
//! ```
//! # use delimit::editing::{EditError, LineBuffer, RangeTransform};
//! #
//! let mut buffer = LineBuffer::from_text("<div>\n<p>hi</p>");
//! let insert = RangeTransform::Insert { at: 3, lines: vec!["</div>".to_string()] };
//! insert.apply(&mut buffer)?;
//! assert_eq!(buffer.to_text(), "<div>\n<p>hi</p>\n</div>");
//!
//! let bogus = RangeTransform::Move { start: 2, end: 3, after: 3 };
//! assert!(bogus.apply(&mut buffer).is_err());
//! # Ok::<(), EditError>(())
//! ```

mod buffer;
mod error;
mod transform;

pub use self::{
    buffer::LineBuffer,
    error::EditError,
    transform::{ContextLine, EditSummary, RangeTransform},
};
