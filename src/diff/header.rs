//! Grammars for the two marker lines that structure a unified diff:
//! the `diff --git a/<old> b/<new>` file header and the
//! `@@ -<start>[,<count>] +<start>[,<count>] @@` hunk header.

use super::hunk::HunkRange;
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, u32 as decimal},
    combinator::{opt, rest},
    sequence::preceded,
};

const FILE_MARKER: &str = "diff --git";
const HUNK_MARKER: &str = "@@";

/// True for any line that claims to start a file section, well-formed or not
pub(crate) fn is_file_marker(line: &str) -> bool {
    line.starts_with(FILE_MARKER)
}

/// True for any line that claims to start a hunk, well-formed or not
pub(crate) fn is_hunk_marker(line: &str) -> bool {
    line.starts_with(HUNK_MARKER)
}

/// `<start>[,<count>]`; an omitted count means a single line
fn range(input: &str) -> IResult<&str, HunkRange> {
    (decimal, opt(preceded(char(','), decimal)))
        .map(|(start, count)| HunkRange {
            start,
            count: count.unwrap_or(1),
        })
        .parse(input)
}

fn hunk_header(input: &str) -> IResult<&str, (HunkRange, HunkRange)> {
    (
        preceded(tag("@@ -"), range),
        preceded(tag(" +"), range),
        tag(" @@"),
    )
        .map(|(old, new, _)| (old, new))
        .parse(input)
}

fn git_header(input: &str) -> IResult<&str, &str> {
    preceded(tag("diff --git a/"), rest).parse(input)
}

/// Parse a hunk header into its old and new ranges.
///
/// Anything after the closing `@@` (usually a section heading) is ignored.
pub(crate) fn parse_hunk_header(line: &str) -> Option<(HunkRange, HunkRange)> {
    hunk_header(line).ok().map(|(_, ranges)| ranges)
}

/// Parse a `diff --git a/<old> b/<new>` line into its two paths.
///
/// The split happens at the last ` b/` so that paths containing spaces
/// stay whole. Both paths must be non-empty.
pub(crate) fn parse_git_header(line: &str) -> Option<(String, String)> {
    let (_, paths) = git_header(line).ok()?;
    let (old_path, new_path) = paths.rsplit_once(" b/")?;
    if old_path.is_empty() || new_path.is_empty() {
        return None;
    }
    Some((old_path.to_string(), new_path.to_string()))
}
