//! Unified diff parsing.
//!
//! [`Diff::parse`] turns `diff --git` output (or a bare hunk, as found in a
//! review comment) into files, hunks and numbered lines in one forward pass.

mod cursor;
pub mod file;
pub mod full;
mod header;
pub mod hunk;
pub mod line;

pub use file::{DiffStat, FileDiff};
pub use full::Diff;
pub use hunk::{Hunk, HunkRange};
pub use line::{ChangeKind, DiffLine};
