//! Attribute translation: `@builtin`, `@location` and stage attributes.

use alloc::string::String;
use core::fmt::Write;

use wgslc_ast::{Attribute, Stage};

use crate::{
    error::{CodegenError, CodegenResult},
    writer::MetalWriter,
};

/// WGSL builtin names and the Metal attribute they bind to.
const BUILTINS: &[(&str, &str)] = &[
    ("vertex_index", "vertex_id"),
    ("instance_index", "instance_id"),
    ("position", "position"),
    ("front_facing", "front_facing"),
    ("frag_depth", "depth(any)"),
    ("sample_index", "sample_id"),
    ("sample_mask", "sample_mask"),
    ("local_invocation_id", "thread_position_in_threadgroup"),
    ("local_invocation_index", "thread_index_in_threadgroup"),
    ("global_invocation_id", "thread_position_in_grid"),
    ("workgroup_id", "threadgroup_position_in_grid"),
    ("num_workgroups", "threadgroups_per_grid"),
];

/// Metal attribute body for a WGSL builtin, `None` if the name is unknown.
pub fn translate_builtin(name: &str) -> Option<&'static str> {
    BUILTINS
        .iter()
        .find(|(wgsl, _)| *wgsl == name)
        .map(|(_, metal)| *metal)
}

/// Metal function qualifier for a pipeline stage.
pub fn stage_qualifier(stage: Stage) -> &'static str {
    match stage {
        Stage::Vertex => "vertex",
        Stage::Fragment => "fragment",
        Stage::Compute => "compute",
    }
}

impl MetalWriter<'_> {
    pub(crate) fn write_attribute(&mut self, attribute: &Attribute) -> CodegenResult<()> {
        match attribute {
            Attribute::Builtin(name) => self.write_builtin(name),
            Attribute::Stage(stage) => {
                write!(self.out, "[[{}]]", stage_qualifier(*stage))?;
                Ok(())
            }
            Attribute::Location(location) => {
                write!(self.out, "[[attribute({})]]", location)?;
                Ok(())
            }
        }
    }

    fn write_builtin(&mut self, name: &str) -> CodegenResult<()> {
        let Some(metal) = translate_builtin(name) else {
            return Err(CodegenError::UnknownBuiltin {
                name: String::from(name),
                context: self.context(),
            });
        };
        write!(self.out, "[[{}]]", metal)?;
        Ok(())
    }

    /// Attributes that trail a declarator: each one preceded by a space.
    pub(crate) fn write_trailing_attributes(&mut self, attributes: &[Attribute]) -> CodegenResult<()> {
        for attribute in attributes {
            self.out.push(' ');
            self.write_attribute(attribute)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::render_with;

    fn render(attribute: &Attribute) -> CodegenResult<String> {
        render_with(|w| w.write_attribute(attribute))
    }

    #[test]
    fn test_stage_attributes() {
        assert_eq!(render(&Attribute::Stage(Stage::Vertex)).unwrap(), "[[vertex]]");
        assert_eq!(render(&Attribute::Stage(Stage::Fragment)).unwrap(), "[[fragment]]");
        assert_eq!(render(&Attribute::Stage(Stage::Compute)).unwrap(), "[[compute]]");
    }

    #[test]
    fn test_builtins() {
        assert_eq!(render(&Attribute::builtin("vertex_index")).unwrap(), "[[vertex_id]]");
        assert_eq!(render(&Attribute::builtin("position")).unwrap(), "[[position]]");
        assert_eq!(render(&Attribute::builtin("frag_depth")).unwrap(), "[[depth(any)]]");
        assert_eq!(
            render(&Attribute::builtin("global_invocation_id")).unwrap(),
            "[[thread_position_in_grid]]"
        );
    }

    #[test]
    fn test_unknown_builtin_is_an_error() {
        match render(&Attribute::builtin("not_a_builtin")) {
            Err(CodegenError::UnknownBuiltin { name, .. }) => assert_eq!(name, "not_a_builtin"),
            other => panic!("expected UnknownBuiltin, got {:?}", other),
        }
    }

    #[test]
    fn test_location() {
        assert_eq!(render(&Attribute::Location(0)).unwrap(), "[[attribute(0)]]");
        assert_eq!(render(&Attribute::Location(15)).unwrap(), "[[attribute(15)]]");
    }

    #[test]
    fn test_trailing_attributes() {
        let attributes = [Attribute::builtin("position"), Attribute::Location(1)];
        let out = render_with(|w| w.write_trailing_attributes(&attributes)).unwrap();
        assert_eq!(out, " [[position]] [[attribute(1)]]");
    }
}
