use std::{io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

use crate::editing::EditError;

/// An operational failure.
///
/// Structural findings are never reported through this type; see
/// [`Diagnostic`](crate::Diagnostic) for those.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The document could not be read or written.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not UTF-8 text.
    #[error("{} is not valid UTF-8", path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The checker was configured with something it cannot use.
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    /// A line-range edit could not be applied.
    #[error(transparent)]
    Edit(#[from] EditError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The message should not be capitalized and should not end with a period.
    pub fn config(reason: impl std::fmt::Display) -> Self {
        Error::Config {
            reason: reason.to_string(),
        }
    }
}
