use super::cursor::LineCursor;
use super::header;
use super::line::DiffLine;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// One side of a hunk header: `<start>[,<count>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HunkRange {
    pub start: u32,
    /// Declared line count; 1 when the header omits it
    pub count: u32,
}

impl fmt::Display for HunkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.start),
            n => write!(f, "{},{}", self.start, n),
        }
    }
}

/// A single hunk from a unified diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    pub old: HunkRange,
    pub new: HunkRange,
    pub lines: Vec<DiffLine>,
}

/// What a body line contributes to the hunk
enum BodyLine<'a> {
    Deleted(&'a str),
    Added(&'a str),
    Context(&'a str),
    Ignored,
}

impl<'a> BodyLine<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(content) = line.strip_prefix('-') {
            BodyLine::Deleted(content)
        } else if let Some(content) = line.strip_prefix('+') {
            BodyLine::Added(content)
        } else if let Some(content) = line.strip_prefix(' ') {
            BodyLine::Context(content)
        } else if line.starts_with('\\') || is_binary_notice(line) {
            BodyLine::Ignored
        } else {
            // Context line whose leading space was lost in transport
            BodyLine::Context(line)
        }
    }
}

fn is_binary_notice(line: &str) -> bool {
    line.starts_with("Binary files ") && line.ends_with(" differ")
}

impl Hunk {
    /// Parse a hunk from diff text (header + content lines).
    ///
    /// Returns `None` if the first line is not a valid hunk header.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut cursor = LineCursor::new(text);
        let (old, new) = header::parse_hunk_header(cursor.peek()?)?;
        cursor.advance();
        Some(Self::parse_body(old, new, &mut cursor))
    }

    /// Consume body lines after an already-parsed header.
    ///
    /// Stops (without consuming) at the next `@@` line or the next
    /// well-formed `diff --git` line. Line numbers are assigned from the
    /// header's start positions in encounter order.
    pub(crate) fn parse_body(old: HunkRange, new: HunkRange, cursor: &mut LineCursor<'_>) -> Self {
        let mut lines = Vec::new();
        let mut old_line = old.start;
        let mut new_line = new.start;

        while let Some(line) = cursor.peek() {
            if header::is_hunk_marker(line) {
                break;
            }
            if header::is_file_marker(line) {
                if header::parse_git_header(line).is_some() {
                    break;
                }
                debug!(
                    line = cursor.line_number(),
                    "skipping malformed file header inside hunk"
                );
                cursor.advance();
                continue;
            }
            cursor.advance();

            match BodyLine::classify(line) {
                BodyLine::Deleted(content) => {
                    lines.push(DiffLine::Deleted {
                        old_line,
                        content: content.to_string(),
                    });
                    old_line = old_line.saturating_add(1);
                }
                BodyLine::Added(content) => {
                    lines.push(DiffLine::Added {
                        new_line,
                        content: content.to_string(),
                    });
                    new_line = new_line.saturating_add(1);
                }
                BodyLine::Context(content) => {
                    lines.push(DiffLine::Context {
                        old_line,
                        new_line,
                        content: content.to_string(),
                    });
                    old_line = old_line.saturating_add(1);
                    new_line = new_line.saturating_add(1);
                }
                BodyLine::Ignored => trace!(line, "ignoring marker line"),
            }
        }

        Hunk { old, new, lines }
    }

    /// Number of lines that exist in the old file (deleted + context)
    #[must_use]
    pub fn old_len(&self) -> usize {
        self.lines.iter().filter(|l| l.old_line().is_some()).count()
    }

    /// Number of lines that exist in the new file (added + context)
    #[must_use]
    pub fn new_len(&self) -> usize {
        self.lines.iter().filter(|l| l.new_line().is_some()).count()
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@@ -{} +{} @@", self.old, self.new)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
