use super::cursor::LineCursor;
use super::file::{DiffStat, FileDiff};
use super::header;
use serde::Serialize;
use tracing::{debug, trace};

/// A complete git diff containing changes for multiple files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub files: Vec<FileDiff>,
}

impl Diff {
    /// Parse unified diff text into file diffs, in input order.
    ///
    /// Never fails: lines that fit no expected shape are skipped and
    /// parsing resumes at the next recognizable marker. A hunk that shows
    /// up before any `diff --git` line (a bare review-comment hunk) is
    /// collected into a file diff with empty paths.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut cursor = LineCursor::new(text);
        let mut files = Vec::new();

        while let Some(line) = cursor.peek() {
            if let Some((old_path, new_path)) = header::parse_git_header(line) {
                cursor.advance();
                files.push(FileDiff::parse_body(old_path, new_path, &mut cursor));
            } else if header::parse_hunk_header(line).is_some() {
                files.push(FileDiff::parse_body(String::new(), String::new(), &mut cursor));
            } else {
                if header::is_file_marker(line) {
                    debug!(
                        line = cursor.line_number(),
                        "skipping malformed file header"
                    );
                } else {
                    trace!(line, "skipping line outside any file");
                }
                cursor.advance();
            }
        }

        debug!(files = files.len(), "parsed diff");
        Diff { files }
    }

    /// Count added and deleted lines across all files
    #[must_use]
    pub fn stat(&self) -> DiffStat {
        self.files
            .iter()
            .map(FileDiff::stat)
            .fold(DiffStat::default(), |total, stat| total + stat)
    }
}

impl std::fmt::Display for Diff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for file_diff in &self.files {
            write!(f, "{}", file_diff)?;
        }
        Ok(())
    }
}
