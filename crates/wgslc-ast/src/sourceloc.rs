//! Source locations for AST nodes.
//!
//! The front end decides how to encode a location (byte offset, packed
//! line/column, ...). Back ends only carry it through into diagnostics.

use core::fmt;

/// Opaque source location identifier.
///
/// The default value `!0` (all-ones) represents an unknown location, which
/// is what nodes built by hand (tests, synthesized code) carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLoc(u32);

impl SourceLoc {
    /// Create a new source location from raw bits.
    pub fn new(bits: u32) -> Self {
        SourceLoc(bits)
    }

    /// Get the raw bits of this source location.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Check if this is the default (unknown) source location.
    pub fn is_default(self) -> bool {
        self.0 == !0
    }
}

impl Default for SourceLoc {
    fn default() -> Self {
        SourceLoc(!0)
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            write!(f, "srcloc(unknown)")
        } else {
            write!(f, "srcloc({})", self.0)
        }
    }
}
