//! Entry points discovered while emitting a module.

use alloc::string::String;

use wgslc_ast::Stage;

/// Metal function names of the module's pipeline entry points.
///
/// A field is empty when the module has no function for that stage. Names
/// are the emitted (escaped) names, which is what pipeline setup has to
/// look up in the compiled Metal library.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryPoints {
    pub vertex: String,
    pub fragment: String,
    pub compute: String,
}

impl EntryPoints {
    pub fn get(&self, stage: Stage) -> &str {
        match stage {
            Stage::Vertex => &self.vertex,
            Stage::Fragment => &self.fragment,
            Stage::Compute => &self.compute,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty() && self.compute.is_empty()
    }

    /// Record `name` for `stage`. The first function seen for a stage wins;
    /// returns `false` if the stage was already taken.
    pub(crate) fn record(&mut self, stage: Stage, name: &str) -> bool {
        let slot = match stage {
            Stage::Vertex => &mut self.vertex,
            Stage::Fragment => &mut self.fragment,
            Stage::Compute => &mut self.compute,
        };
        if !slot.is_empty() {
            return false;
        }
        slot.push_str(name);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_record_wins() {
        let mut entry_points = EntryPoints::default();
        assert!(entry_points.is_empty());
        assert!(entry_points.record(Stage::Vertex, "vs_main"));
        assert!(!entry_points.record(Stage::Vertex, "vs_other"));
        assert_eq!(entry_points.get(Stage::Vertex), "vs_main");
        assert_eq!(entry_points.get(Stage::Fragment), "");
        assert!(!entry_points.is_empty());
    }
}
