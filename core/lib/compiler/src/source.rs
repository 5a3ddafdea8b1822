use std::fmt::Display;

/// Describes a location within an opcode specification, used for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Formats this location prefixed with the name of the file it came from.
    pub fn describe(&self, file: &str) -> String {
        format!("{file}:{}:{}", self.line, self.col)
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
