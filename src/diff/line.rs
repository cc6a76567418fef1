use serde::Serialize;
use std::fmt;

/// Classification of a line inside a hunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Deleted,
    Context,
}

/// A single physical line from a hunk body, with its marker stripped.
///
/// The variant decides which side(s) of the diff the line exists on:
/// added lines only have a new line number, deleted lines only an old one,
/// context lines both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffLine {
    /// Line present only in the new file
    Added { new_line: u32, content: String },
    /// Line present only in the old file
    Deleted { old_line: u32, content: String },
    /// Unchanged line present in both files
    Context {
        old_line: u32,
        new_line: u32,
        content: String,
    },
}

impl DiffLine {
    /// Line number in the old file, if the line exists there
    #[must_use]
    pub fn old_line(&self) -> Option<u32> {
        match self {
            DiffLine::Deleted { old_line, .. } | DiffLine::Context { old_line, .. } => {
                Some(*old_line)
            }
            DiffLine::Added { .. } => None,
        }
    }

    /// Line number in the new file, if the line exists there
    #[must_use]
    pub fn new_line(&self) -> Option<u32> {
        match self {
            DiffLine::Added { new_line, .. } | DiffLine::Context { new_line, .. } => {
                Some(*new_line)
            }
            DiffLine::Deleted { .. } => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        match self {
            DiffLine::Added { .. } => ChangeKind::Added,
            DiffLine::Deleted { .. } => ChangeKind::Deleted,
            DiffLine::Context { .. } => ChangeKind::Context,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            DiffLine::Added { content, .. }
            | DiffLine::Deleted { content, .. }
            | DiffLine::Context { content, .. } => content,
        }
    }
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind() {
            ChangeKind::Added => '+',
            ChangeKind::Deleted => '-',
            ChangeKind::Context => ' ',
        };
        write!(f, "{}{}", marker, self.content())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn added_line_has_only_new_number() {
        let line = DiffLine::Added {
            new_line: 12,
            content: "let x = 1;".to_string(),
        };
        assert_eq!(line.old_line(), None);
        assert_eq!(line.new_line(), Some(12));
        assert_eq!(line.kind(), ChangeKind::Added);
        assert_eq!(line.content(), "let x = 1;");
    }

    #[test]
    fn deleted_line_has_only_old_number() {
        let line = DiffLine::Deleted {
            old_line: 7,
            content: String::new(),
        };
        assert_eq!(line.old_line(), Some(7));
        assert_eq!(line.new_line(), None);
        assert_eq!(line.kind(), ChangeKind::Deleted);
    }

    #[test]
    fn context_line_has_both_numbers() {
        let line = DiffLine::Context {
            old_line: 3,
            new_line: 4,
            content: "fn main() {".to_string(),
        };
        assert_eq!(line.old_line(), Some(3));
        assert_eq!(line.new_line(), Some(4));
        assert_eq!(line.kind(), ChangeKind::Context);
    }

    #[test]
    fn render_restores_markers() {
        let added = DiffLine::Added {
            new_line: 1,
            content: "new".to_string(),
        };
        let deleted = DiffLine::Deleted {
            old_line: 1,
            content: "old".to_string(),
        };
        let context = DiffLine::Context {
            old_line: 2,
            new_line: 2,
            content: "same".to_string(),
        };
        assert_eq!(added.to_string(), "+new");
        assert_eq!(deleted.to_string(), "-old");
        assert_eq!(context.to_string(), " same");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let line = DiffLine::Deleted {
            old_line: 5,
            content: "gone".to_string(),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "deleted", "old_line": 5, "content": "gone"})
        );
    }
}
