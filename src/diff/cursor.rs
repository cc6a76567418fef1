/// Forward-only cursor over the physical lines of a diff.
///
/// Parsing functions share one cursor and only ever look at the current
/// line, so the whole input is read in a single pass.
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// Current line, or `None` once the input is exhausted
    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub(crate) fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// 1-based number of the current line, for diagnostics
    pub(crate) fn line_number(&self) -> usize {
        self.pos + 1
    }
}
