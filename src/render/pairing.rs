use crate::diff::DiffLine;

/// One display row: what goes in the old column and what goes in the new
/// column. `None` renders as a blank column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub old: Option<&'a DiffLine>,
    pub new: Option<&'a DiffLine>,
}

fn is_deleted(line: &DiffLine) -> bool {
    matches!(line, DiffLine::Deleted { .. })
}

fn is_added(line: &DiffLine) -> bool {
    matches!(line, DiffLine::Added { .. })
}

/// Align a hunk's lines into side-by-side rows.
///
/// Context lines fill both columns. A run of deletions immediately followed
/// by a run of additions is a replacement block and is zipped position by
/// position, the shorter side padded with blanks, so "these N lines became
/// these M lines" reads across. Unpaired deletions or additions get a blank
/// opposite column.
#[must_use]
pub fn pair_lines(lines: &[DiffLine]) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if let DiffLine::Context { .. } = lines[i] {
            rows.push(Row {
                old: Some(&lines[i]),
                new: Some(&lines[i]),
            });
            i += 1;
            continue;
        }

        let deleted_end = i + lines[i..].iter().take_while(|l| is_deleted(l)).count();
        let added_end = deleted_end
            + lines[deleted_end..]
                .iter()
                .take_while(|l| is_added(l))
                .count();

        let deleted = &lines[i..deleted_end];
        let added = &lines[deleted_end..added_end];

        for k in 0..deleted.len().max(added.len()) {
            rows.push(Row {
                old: deleted.get(k),
                new: added.get(k),
            });
        }

        i = added_end;
    }

    rows
}
