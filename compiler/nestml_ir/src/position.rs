//! Source positions.
//!
//! Provides a compact 8-byte line/column pair rendered as `line:column`.

use std::fmt;

/// A position in NESTML source text.
///
/// Layout: 8 bytes total
/// - line: u32 - 1-based source line
/// - column: u32 - 1-based source column
///
/// The diagnostic layer treats positions as opaque values: they are produced
/// by the parser, threaded through checkers, and only ever rendered.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        SourcePosition { line, column }
    }
}

impl fmt::Debug for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// Size assertion to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::SourcePosition;
    crate::static_assert_size!(SourcePosition, 8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_position_basic() {
        let pos = SourcePosition::new(4, 10);
        assert_eq!(pos.line, 4);
        assert_eq!(pos.column, 10);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(SourcePosition::new(4, 10).to_string(), "4:10");
        assert_eq!(SourcePosition::new(128, 1).to_string(), "128:1");
    }

    #[test]
    fn test_position_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SourcePosition::new(1, 1));
        set.insert(SourcePosition::new(1, 1)); // duplicate
        set.insert(SourcePosition::new(2, 1));
        assert_eq!(set.len(), 2);
    }
}
