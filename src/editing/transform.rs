use std::fmt::{self, Display, Formatter};

use tracing::info;

use crate::editing::{EditError, LineBuffer};

/// A line-addressed edit. Line numbers count from one and ranges are inclusive.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RangeTransform {
    /// Insert `lines` so that the first of them becomes line `at`.
    /// `at` may be one past the last line to append.
    Insert { at: usize, lines: Vec<String> },

    /// Cut lines `start..=end` and paste them directly after line `after`,
    /// numbered as before the cut. `after == 0` moves the block to the top.
    Move {
        start: usize,
        end: usize,
        after: usize,
    },

    /// Replace lines `start..=end` with `lines`, which may be empty.
    Replace {
        start: usize,
        end: usize,
        lines: Vec<String>,
    },
}

/// A line the edit touched, shown so the caller can sanity-check the result
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ContextLine {
    pub label: &'static str,
    pub number: usize,
    pub text: String,
}

/// What an applied [`RangeTransform`] did
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EditSummary {
    pub description: String,
    pub context: Vec<ContextLine>,
}

impl Display for EditSummary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.description)?;
        for line in &self.context {
            write!(f, "\n{} (line {}): {}", line.label, line.number, line.text.trim())?;
        }
        Ok(())
    }
}

fn check_line(line: usize, len: usize) -> Result<(), EditError> {
    if line == 0 || line > len {
        Err(EditError::LineOutOfRange { line, len })
    } else {
        Ok(())
    }
}

fn check_range(start: usize, end: usize, len: usize) -> Result<(), EditError> {
    if start == 0 || start > end {
        return Err(EditError::InvalidRange { start, end });
    }
    check_line(end, len)
}

fn context(buffer: &LineBuffer, label: &'static str, number: usize) -> Option<ContextLine> {
    buffer.line(number).map(|text| ContextLine {
        label,
        number,
        text: text.to_string(),
    })
}

impl RangeTransform {
    /// Check every line number against a document of `len` lines.
    pub fn validate(&self, len: usize) -> Result<(), EditError> {
        match *self {
            RangeTransform::Insert { at, .. } => {
                if at == 0 || at > len + 1 {
                    return Err(EditError::LineOutOfRange { line: at, len });
                }
            },
            RangeTransform::Move { start, end, after } => {
                check_range(start, end, len)?;
                if after > len {
                    return Err(EditError::LineOutOfRange { line: after, len });
                }
                if (start..=end).contains(&after) {
                    return Err(EditError::TargetInsideRange { start, end, after });
                }
            },
            RangeTransform::Replace { start, end, .. } => check_range(start, end, len)?,
        }
        Ok(())
    }

    /// Apply the edit. On error the buffer is left exactly as it was.
    pub fn apply(&self, buffer: &mut LineBuffer) -> Result<EditSummary, EditError> {
        self.validate(buffer.len())?;

        let summary = match self {
            RangeTransform::Insert { at, lines } => {
                let mut summary = EditSummary {
                    description: format!("inserted {} line(s) at line {at}", lines.len()),
                    context: context(buffer, "before", at - 1).into_iter().collect(),
                };
                let index = at - 1;
                buffer
                    .lines_mut()
                    .splice(index..index, lines.iter().cloned());
                summary
                    .context
                    .extend(context(buffer, "after", at + lines.len()));
                summary
            },
            RangeTransform::Move { start, end, after } => {
                let (start, end, after) = (*start, *end, *after);
                let count = end - start + 1;
                let lines = buffer.lines_mut();
                let block: Vec<String> = lines.drain(start - 1..end).collect();
                let index = if after < start { after } else { after - count };
                lines.splice(index..index, block);
                EditSummary {
                    description: format!("moved {count} line(s) from {start}-{end} to after line {after}"),
                    context: Vec::new(),
                }
            },
            RangeTransform::Replace { start, end, lines } => {
                let (start, end) = (*start, *end);
                let removed = [
                    context(buffer, "first removed", start),
                    context(buffer, "last removed", end),
                ]
                .into_iter()
                .flatten()
                .collect();
                buffer
                    .lines_mut()
                    .splice(start - 1..end, lines.iter().cloned());
                EditSummary {
                    description: format!(
                        "replaced lines {start}-{end} with {} line(s)",
                        lines.len()
                    ),
                    context: removed,
                }
            },
        };

        info!(edit = %summary.description, lines = buffer.len(), "edit applied");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> LineBuffer {
        let text: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
        LineBuffer::from_text(&text.join("\n"))
    }

    fn lines(buffer: &LineBuffer) -> Vec<&str> {
        buffer.lines().iter().map(String::as_str).collect()
    }

    #[test]
    fn insert_in_the_middle() {
        let mut buffer = numbered(3);
        let summary = RangeTransform::Insert {
            at: 2,
            lines: vec!["</div>".to_string()],
        }
        .apply(&mut buffer)
        .unwrap();
        assert_eq!(lines(&buffer), vec!["1", "</div>", "2", "3"]);
        assert_eq!(summary.context[0].text, "1");
        assert_eq!(summary.context[1].text, "2");
    }

    #[test]
    fn insert_can_append() {
        let mut buffer = numbered(2);
        RangeTransform::Insert {
            at: 3,
            lines: vec!["x".to_string()],
        }
        .apply(&mut buffer)
        .unwrap();
        assert_eq!(lines(&buffer), vec!["1", "2", "x"]);
    }

    #[test]
    fn move_down() {
        let mut buffer = numbered(8);
        RangeTransform::Move {
            start: 2,
            end: 3,
            after: 6,
        }
        .apply(&mut buffer)
        .unwrap();
        assert_eq!(lines(&buffer), vec!["1", "4", "5", "6", "2", "3", "7", "8"]);
    }

    #[test]
    fn move_up_and_to_top() {
        let mut buffer = numbered(5);
        RangeTransform::Move {
            start: 4,
            end: 5,
            after: 1,
        }
        .apply(&mut buffer)
        .unwrap();
        assert_eq!(lines(&buffer), vec!["1", "4", "5", "2", "3"]);

        let mut buffer = numbered(3);
        RangeTransform::Move {
            start: 3,
            end: 3,
            after: 0,
        }
        .apply(&mut buffer)
        .unwrap();
        assert_eq!(lines(&buffer), vec!["3", "1", "2"]);
    }

    #[test]
    fn replace_and_delete() {
        let mut buffer = numbered(5);
        let summary = RangeTransform::Replace {
            start: 2,
            end: 4,
            lines: vec!["placeholder".to_string()],
        }
        .apply(&mut buffer)
        .unwrap();
        assert_eq!(lines(&buffer), vec!["1", "placeholder", "5"]);
        assert_eq!(summary.context[0].number, 2);
        assert_eq!(summary.context[1].text, "4");

        RangeTransform::Replace {
            start: 2,
            end: 2,
            lines: Vec::new(),
        }
        .apply(&mut buffer)
        .unwrap();
        assert_eq!(lines(&buffer), vec!["1", "5"]);
    }

    #[test]
    fn bad_ranges_leave_the_buffer_alone() {
        let original = numbered(4);
        let cases = [
            (
                RangeTransform::Insert {
                    at: 0,
                    lines: Vec::new(),
                },
                EditError::LineOutOfRange { line: 0, len: 4 },
            ),
            (
                RangeTransform::Insert {
                    at: 6,
                    lines: Vec::new(),
                },
                EditError::LineOutOfRange { line: 6, len: 4 },
            ),
            (
                RangeTransform::Replace {
                    start: 3,
                    end: 2,
                    lines: Vec::new(),
                },
                EditError::InvalidRange { start: 3, end: 2 },
            ),
            (
                RangeTransform::Replace {
                    start: 2,
                    end: 9,
                    lines: Vec::new(),
                },
                EditError::LineOutOfRange { line: 9, len: 4 },
            ),
            (
                RangeTransform::Move {
                    start: 1,
                    end: 3,
                    after: 2,
                },
                EditError::TargetInsideRange {
                    start: 1,
                    end: 3,
                    after: 2,
                },
            ),
            (
                RangeTransform::Move {
                    start: 1,
                    end: 2,
                    after: 5,
                },
                EditError::LineOutOfRange { line: 5, len: 4 },
            ),
        ];

        for (transform, expected) in cases {
            let mut buffer = original.clone();
            assert_eq!(transform.apply(&mut buffer), Err(expected));
            assert_eq!(buffer, original);
        }
    }
}
