//! Attributes attached to declarations, members and parameters.

use alloc::string::String;
use core::fmt;

/// Pipeline stage an entry point runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
    Compute,
}

impl Stage {
    /// WGSL spelling of the stage (`@vertex`, ...), without the `@`.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
            Stage::Compute => "compute",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A WGSL attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `@builtin(name)`: binds to a pipeline-supplied value.
    Builtin(String),
    /// `@location(n)`: inter-stage I/O slot.
    Location(u32),
    /// `@vertex`, `@fragment` or `@compute`.
    Stage(Stage),
}

impl Attribute {
    pub fn builtin(name: impl Into<String>) -> Self {
        Attribute::Builtin(name.into())
    }

    /// The stage, if this is a stage attribute.
    pub fn as_stage(&self) -> Option<Stage> {
        match self {
            Attribute::Stage(stage) => Some(*stage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_stage() {
        assert_eq!(Attribute::Stage(Stage::Fragment).as_stage(), Some(Stage::Fragment));
        assert_eq!(Attribute::Location(0).as_stage(), None);
        assert_eq!(Attribute::builtin("position").as_stage(), None);
    }

    #[test]
    fn test_stage_name() {
        assert_eq!(Stage::Vertex.name(), "vertex");
        assert_eq!(Stage::Fragment.name(), "fragment");
        assert_eq!(Stage::Compute.name(), "compute");
    }
}
