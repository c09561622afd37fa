use crate::editing::EditError;

/// A document viewed as an ordered sequence of lines.
///
/// Lines are split on `\n` only and joined back the same way, so carriage
/// returns and a trailing newline survive an edit untouched.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn from_text(text: &str) -> Self {
        LineBuffer {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Split text that is about to be inserted. Unlike [`LineBuffer::from_text`],
    /// a single trailing newline does not produce an extra empty line, and
    /// empty text yields no lines at all.
    pub fn fragment(text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let text = text.strip_suffix('\n').unwrap_or(text);
        text.split('\n').map(str::to_string).collect()
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line `number`, counting from one
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    /// Refuse to go on when the document is suspiciously short.
    pub fn require_lines(&self, min: usize) -> Result<(), EditError> {
        if self.len() < min {
            Err(EditError::TooShort {
                len: self.len(),
                min,
            })
        } else {
            Ok(())
        }
    }
}
