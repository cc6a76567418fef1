use super::cursor::LineCursor;
use super::header;
use super::hunk::Hunk;
use super::line::DiffLine;
use serde::Serialize;
use std::fmt;
use std::ops::{Add, AddAssign};
use tracing::{debug, trace};

/// A complete diff for a single file.
///
/// Contains all hunks (change blocks) for one file from a git diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    /// Path before the change (from `diff --git a/<path>`)
    pub old_path: String,
    /// Path after the change (from `diff --git ... b/<path>`)
    pub new_path: String,
    /// All hunks for this file; empty for binary or metadata-only changes
    pub hunks: Vec<Hunk>,
}

/// Added/deleted line totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStat {
    pub additions: usize,
    pub deletions: usize,
}

impl Add for DiffStat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        DiffStat {
            additions: self.additions + rhs.additions,
            deletions: self.deletions + rhs.deletions,
        }
    }
}

impl AddAssign for DiffStat {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for DiffStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} -{}", self.additions, self.deletions)
    }
}

impl FileDiff {
    /// Parse a single-file diff starting at its `diff --git` line.
    ///
    /// Returns `None` if the first line is not a well-formed file header.
    /// Anything after a second file header is ignored.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut cursor = LineCursor::new(text);
        let (old_path, new_path) = header::parse_git_header(cursor.peek()?)?;
        cursor.advance();
        Some(Self::parse_body(old_path, new_path, &mut cursor))
    }

    /// Consume everything belonging to one file after its header line.
    ///
    /// Metadata lines (mode, index, rename, similarity) are skipped, then
    /// one `---` and one `+++` line, then hunks until the next well-formed
    /// `diff --git` line, which is left for the caller.
    pub(crate) fn parse_body(
        old_path: String,
        new_path: String,
        cursor: &mut LineCursor<'_>,
    ) -> Self {
        let mut hunks = Vec::new();

        while let Some(line) = cursor.peek() {
            if header::is_hunk_marker(line) || line.starts_with("---") || line.starts_with("+++")
            {
                break;
            }
            if header::parse_git_header(line).is_some() {
                debug!(path = %new_path, "file section has no hunks");
                return FileDiff {
                    old_path,
                    new_path,
                    hunks,
                };
            }
            trace!(line, "skipping file metadata");
            cursor.advance();
        }

        if cursor.peek().is_some_and(|l| l.starts_with("---")) {
            cursor.advance();
        }
        if cursor.peek().is_some_and(|l| l.starts_with("+++")) {
            cursor.advance();
        }

        while let Some(line) = cursor.peek() {
            if header::parse_git_header(line).is_some() {
                break;
            }
            cursor.advance();

            match header::parse_hunk_header(line) {
                Some((old, new)) => hunks.push(Hunk::parse_body(old, new, cursor)),
                None if header::is_hunk_marker(line) => {
                    debug!(
                        line = cursor.line_number() - 1,
                        header = line,
                        "skipping malformed hunk header"
                    );
                }
                None => trace!(line, "dropping line outside any hunk"),
            }
        }

        FileDiff {
            old_path,
            new_path,
            hunks,
        }
    }

    /// Path to show for this file: the new path, or the old one if the new
    /// path is empty
    #[must_use]
    pub fn display_path(&self) -> &str {
        if self.new_path.is_empty() {
            &self.old_path
        } else {
            &self.new_path
        }
    }

    /// Count added and deleted lines across all hunks
    #[must_use]
    pub fn stat(&self) -> DiffStat {
        self.hunks
            .iter()
            .flat_map(|hunk| &hunk.lines)
            .fold(DiffStat::default(), |mut stat, line| {
                match line {
                    DiffLine::Added { .. } => stat.additions += 1,
                    DiffLine::Deleted { .. } => stat.deletions += 1,
                    DiffLine::Context { .. } => {}
                }
                stat
            })
    }
}

impl fmt::Display for FileDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hunks parsed without a file header have no paths to restate
        if !self.old_path.is_empty() || !self.new_path.is_empty() {
            writeln!(f, "diff --git a/{} b/{}", self.old_path, self.new_path)?;
            writeln!(f, "--- a/{}", self.old_path)?;
            writeln!(f, "+++ b/{}", self.new_path)?;
        }

        for hunk in &self.hunks {
            write!(f, "{}", hunk)?;
        }

        Ok(())
    }
}
