//! Indentation state for the writer.

use core::fmt;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// Current nesting depth. Displays as the matching run of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indentation {
    level: usize,
}

impl Indentation {
    #[cfg(test)]
    pub(crate) fn level(self) -> usize {
        self.level
    }

    pub fn push(&mut self) {
        self.level += 1;
    }

    pub fn pop(&mut self) {
        self.level = self.level.saturating_sub(1);
    }
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.level * INDENT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_display_width() {
        let mut indent = Indentation::default();
        assert_eq!(format!("{}", indent), "");
        indent.push();
        indent.push();
        assert_eq!(format!("{}", indent), "        ");
        indent.pop();
        assert_eq!(format!("{}", indent), "    ");
    }

    #[test]
    fn test_pop_saturates() {
        let mut indent = Indentation::default();
        indent.pop();
        assert_eq!(indent.level(), 0);
    }
}
