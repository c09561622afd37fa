use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    editing::{EditSummary, LineBuffer, RangeTransform},
    CheckOptions, Error, Report,
};

/// A text document loaded into memory in one piece.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Read the file at `path`, which must hold UTF-8 text.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::io(path, source))?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded document");
        Self::from_bytes(path, bytes)
    }

    /// Read a whole document from `reader`; `name` is used in messages only.
    pub fn from_reader(name: impl Into<PathBuf>, mut reader: impl Read) -> Result<Self, Error> {
        let path = name.into();
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| Error::io(&path, source))?;
        Self::from_bytes(path, bytes)
    }

    pub fn from_text(name: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Document {
            path: name.into(),
            text: text.into(),
        }
    }

    fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self, Error> {
        let path = path.into();
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Document { path, text }),
            Err(source) => Err(Error::Utf8 { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Run a balance check over the whole document.
    pub fn check(&self, options: &CheckOptions) -> Report<'_> {
        options.check(&self.text)
    }

    /// Apply a line-range edit in memory. Nothing changes when the edit is
    /// refused, including when the document has fewer than `min_lines` lines.
    pub fn apply(
        &mut self,
        transform: &RangeTransform,
        min_lines: Option<usize>,
    ) -> Result<EditSummary, Error> {
        let mut buffer = LineBuffer::from_text(&self.text);
        if let Some(min) = min_lines {
            buffer.require_lines(min)?;
        }
        let summary = transform.apply(&mut buffer)?;
        self.text = buffer.to_text();
        Ok(summary)
    }

    /// Write the current text back to where it came from.
    pub fn save(&self) -> Result<(), Error> {
        fs::write(&self.path, &self.text).map_err(|source| Error::io(&self.path, source))?;
        debug!(path = %self.path.display(), bytes = self.text.len(), "saved document");
        Ok(())
    }
}
