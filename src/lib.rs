//! Parse unified diffs and render them as side-by-side plain text.
//!
//! ```
//! use side_diff::{RenderOptions, side_by_side};
//!
//! let text = "@@ -1,2 +1,2 @@\n keep\n-old\n+new\n";
//! let rendered = side_by_side(text, &RenderOptions::default());
//! assert!(rendered.contains("- old"));
//! assert!(rendered.contains("+ new"));
//! ```

use error_set::error_set;
use std::io::Read;
use std::path::Path;

pub mod diff;
pub mod render;

pub use diff::{ChangeKind, Diff, DiffLine, DiffStat, FileDiff, Hunk, HunkRange};
pub use render::{RenderOptions, format};

error_set! {
    /// Top-level error for side-diff command-line operations
    SideDiffError := InputError || OutputError

    /// Errors from reading diff text
    InputError := {
        #[display("Failed to read {path}: {message}")]
        ReadFailed { path: String, message: String },
        #[display("Failed to read diff from stdin: {message}")]
        StdinFailed { message: String },
        #[display("Invalid UTF-8 in {path}: {message}")]
        InvalidUtf8 { path: String, message: String },
    }

    /// Errors from producing output
    OutputError := {
        #[display("Failed to serialize diff as JSON: {message}")]
        JsonFailed { message: String },
    }
}

/// Parse unified diff text. Never fails; see [`Diff::parse`].
#[must_use]
pub fn parse(text: &str) -> Diff {
    Diff::parse(text)
}

/// Parse `text` and render it side by side in one step
#[must_use]
pub fn side_by_side(text: &str, options: &RenderOptions) -> String {
    render::format(&Diff::parse(text), options)
}

/// Read diff text from a file, or from stdin when `path` is `None` or `-`
pub fn read_source(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let bytes = std::fs::read(path).map_err(|e| InputError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            String::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8 {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| InputError::StdinFailed {
                    message: e.to_string(),
                })?;
            Ok(text)
        }
    }
}

/// Serialize the parsed structure as pretty-printed JSON
pub fn to_json(diff: &Diff) -> Result<String, OutputError> {
    serde_json::to_string_pretty(diff).map_err(|e| OutputError::JsonFailed {
        message: e.to_string(),
    })
}
