//! Source positions for diagnostic anchoring.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A position in the host's source model.
///
/// The host resolver attaches one to every symbol it produces; diagnostics
/// carry it back so the host can pinpoint the offending declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File the declaration lives in
    pub file: PathBuf,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

impl SourceLocation {
    /// Create a new location.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        debug_assert!(line > 0, "lines are 1-based");
        debug_assert!(column > 0, "columns are 1-based");

        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let location = SourceLocation::new("demo/Registry.src", 12, 5);
        assert_eq!(location.to_string(), "demo/Registry.src:12:5");
    }
}
