//! Side-by-side plain-text rendering of a parsed [`Diff`].
//!
//! Output looks like this (line numbers on, default width):
//!
//! ```text
//!
//! File: src/lib.rs
//! ─────────────────── ... ───────────────────
//!                  Old                  │                  New
//! ─────────────────── ... ───────────────────
//!    1   context                        │    1   context
//!                                       │    2 + added
//! ```
//!
//! The output is meant for fixed-width contexts such as a Markdown code
//! block, so widths are counted in `char`s.

mod pairing;

pub use pairing::{Row, pair_lines};

use crate::diff::{ChangeKind, Diff, DiffLine, FileDiff};

const LINE_NUMBER_WIDTH: usize = 4;
const MARKER_WIDTH: usize = 2;
const SEPARATOR: &str = " │ ";
const RULE: char = '─';
const ELLIPSIS: char = '…';

/// Layout settings for [`format`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width budget for one column, gutter included
    pub total_width: usize,
    /// Whether to print old/new line numbers in each column's gutter
    pub show_line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            total_width: 80,
            show_line_numbers: true,
        }
    }
}

impl RenderOptions {
    fn line_number_width(&self) -> usize {
        if self.show_line_numbers {
            LINE_NUMBER_WIDTH
        } else {
            0
        }
    }

    /// Characters of line text that fit in a column
    #[must_use]
    pub fn content_width(&self) -> usize {
        self.total_width
            .saturating_sub(self.line_number_width() + MARKER_WIDTH + 1)
    }

    /// Full width of one column: gutter, marker and text
    #[must_use]
    pub fn column_width(&self) -> usize {
        let gutter = if self.show_line_numbers {
            LINE_NUMBER_WIDTH + 1
        } else {
            0
        };
        gutter + MARKER_WIDTH + self.content_width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Old,
    New,
}

impl Side {
    fn line_number(self, line: &DiffLine) -> Option<u32> {
        match self {
            Side::Old => line.old_line(),
            Side::New => line.new_line(),
        }
    }

    fn marker(self, kind: ChangeKind) -> &'static str {
        match (self, kind) {
            (Side::Old, ChangeKind::Deleted) => "- ",
            (Side::New, ChangeKind::Added) => "+ ",
            _ => "  ",
        }
    }
}

/// Render a parsed diff as two aligned columns, old on the left.
///
/// Each file gets a blank line, a `File:` heading, an `Old`/`New` header
/// framed by rules, then one row per paired line. Hunks are separated by a
/// blank row. Trailing whitespace is trimmed from every output line.
#[must_use]
pub fn format(diff: &Diff, options: &RenderOptions) -> String {
    diff.files
        .iter()
        .map(|file_diff| format_file(file_diff, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_file(file_diff: &FileDiff, options: &RenderOptions) -> String {
    let column = options.column_width();
    let rule: String = std::iter::repeat_n(RULE, 2 * column + SEPARATOR.chars().count()).collect();

    let mut out = vec![
        String::new(),
        format!("File: {}", file_diff.display_path()),
        rule.clone(),
        join_columns(&center("Old", column), &center("New", column)),
        rule,
    ];

    for (i, hunk) in file_diff.hunks.iter().enumerate() {
        if i > 0 {
            let blank = " ".repeat(column);
            out.push(join_columns(&blank, &blank));
        }
        for row in pair_lines(&hunk.lines) {
            out.push(join_columns(
                &format_cell(row.old, Side::Old, options),
                &format_cell(row.new, Side::New, options),
            ));
        }
    }

    out.iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_columns(old: &str, new: &str) -> String {
    format!("{old}{SEPARATOR}{new}")
}

/// One column of one row, exactly `column_width` characters wide
fn format_cell(line: Option<&DiffLine>, side: Side, options: &RenderOptions) -> String {
    let Some(line) = line else {
        return " ".repeat(options.column_width());
    };

    let mut cell = String::with_capacity(options.column_width());
    if options.show_line_numbers {
        match side.line_number(line) {
            Some(n) => cell.push_str(&format!("{n:>LINE_NUMBER_WIDTH$} ")),
            None => cell.push_str(&" ".repeat(LINE_NUMBER_WIDTH + 1)),
        }
    }
    cell.push_str(side.marker(line.kind()));
    cell.push_str(&fit(line.content(), options.content_width()));
    cell
}

/// Truncate with a trailing ellipsis or right-pad to exactly `width` chars
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        if width == 0 {
            return String::new();
        }
        let mut fitted: String = text.chars().take(width - 1).collect();
        fitted.push(ELLIPSIS);
        fitted
    } else {
        let mut fitted = String::with_capacity(text.len() + width - len);
        fitted.push_str(text);
        fitted.extend(std::iter::repeat_n(' ', width - len));
        fitted
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
