//! Top-level emission: structs, functions and module-scope variables.

use core::fmt::Write;

use log::{debug, trace, warn};
use wgslc_ast::{Declaration, FunctionDecl, Parameter, ShaderModule, StructDecl, StructMember, VariableDecl};

use crate::{
    error::{CodegenError, CodegenResult},
    names::Namer,
    writer::MetalWriter,
};

impl MetalWriter<'_> {
    /// Emit every declaration of `module` in document order.
    pub fn write_module(&mut self, module: &ShaderModule) -> CodegenResult<()> {
        self.namer = Namer::for_module(module);
        for declaration in &module.declarations {
            match declaration {
                Declaration::Struct(structure) => self.write_struct(structure)?,
                Declaration::Function(function) => self.write_function(function)?,
                Declaration::Variable(variable) => self.write_global_variable(variable)?,
            }
        }
        debug!(
            "emitted {} declarations (vertex: {:?}, fragment: {:?}, compute: {:?})",
            module.declarations.len(),
            self.entry_points.vertex,
            self.entry_points.fragment,
            self.entry_points.compute,
        );
        Ok(())
    }

    fn write_function(&mut self, function: &FunctionDecl) -> CodegenResult<()> {
        trace!("emitting function `{}`", function.name);
        self.within("function", &function.name, function.loc, |w| {
            let Some(return_type) = &function.return_type else {
                return Err(CodegenError::MissingReturnType {
                    context: w.context(),
                });
            };

            for attribute in &function.attributes {
                w.write_attribute(attribute)?;
                w.out.push(' ');
            }
            w.write_type(return_type)?;

            let name = w.namer.name(&function.name).into_owned();
            write!(w.out, " {}(", name)?;
            for (i, parameter) in function.parameters.iter().enumerate() {
                if i > 0 {
                    w.out.push_str(", ");
                }
                w.write_parameter(parameter)?;
            }
            w.out.push_str(")\n{\n");
            w.indented(|w| w.write_compound_statement(&function.body))?;
            w.out.push_str("}\n\n");

            if let Some(stage) = function.stage() {
                if w.entry_points.record(stage, &name) {
                    debug!("{} entry point `{}`", stage, name);
                } else {
                    warn!(
                        "ignoring second {} entry point `{}`; already have `{}`",
                        stage,
                        name,
                        w.entry_points.get(stage)
                    );
                }
            }
            Ok(())
        })
    }

    fn write_parameter(&mut self, parameter: &Parameter) -> CodegenResult<()> {
        self.within("parameter", &parameter.name, parameter.loc, |w| {
            w.write_type(&parameter.ty)?;
            write!(w.out, " {}", w.namer.name(&parameter.name))?;
            w.write_trailing_attributes(&parameter.attributes)
        })
    }

    fn write_struct(&mut self, structure: &StructDecl) -> CodegenResult<()> {
        trace!("emitting struct `{}`", structure.name);
        self.within("struct", &structure.name, structure.loc, |w| {
            writeln!(w.out, "{}struct {} {{", w.indent, w.namer.name(&structure.name))?;
            w.indented(|w| {
                for member in &structure.members {
                    w.write_struct_member(member)?;
                }
                Ok(())
            })?;
            write!(w.out, "{}}};\n\n", w.indent)?;
            Ok(())
        })
    }

    fn write_struct_member(&mut self, member: &StructMember) -> CodegenResult<()> {
        self.within("member", &member.name, member.loc, |w| {
            write!(w.out, "{}", w.indent)?;
            w.write_type(&member.ty)?;
            write!(w.out, " {}", w.namer.name(&member.name))?;
            w.write_trailing_attributes(&member.attributes)?;
            w.out.push_str(";\n");
            Ok(())
        })
    }

    /// Program-scope variables live in Metal's `constant` address space,
    /// which requires an initializer.
    fn write_global_variable(&mut self, variable: &VariableDecl) -> CodegenResult<()> {
        trace!("emitting module-scope variable `{}`", variable.name);
        if variable.initializer.is_none() {
            return Err(CodegenError::MissingGlobalInitializer {
                name: variable.name.clone(),
                context: self.context(),
            });
        }
        write!(self.out, "{}constant ", self.indent)?;
        self.write_variable(variable)?;
        self.out.push_str(";\n\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use wgslc_ast::{Attribute, CompoundStatement, Expression, SourceLoc, Stage, Statement, TypeDecl};

    use super::*;
    use crate::writer::render_with;

    fn render(module: &ShaderModule) -> CodegenResult<String> {
        render_with(|w| w.write_module(module))
    }

    fn vec4f() -> TypeDecl {
        TypeDecl::vec(4, TypeDecl::named("f32")).unwrap()
    }

    #[test]
    fn test_struct() {
        let module = ShaderModule::new(vec![Declaration::Struct(StructDecl::new(
            "Vertex",
            vec![
                StructMember::new("position", vec4f(), vec![Attribute::builtin("position")]),
                StructMember::new("color", vec4f(), vec![Attribute::Location(0)]),
                StructMember::new("weight", TypeDecl::named("f32"), vec![]),
            ],
        ))]);
        assert_eq!(
            render(&module).unwrap(),
            "struct Vertex {\n\
             \x20   vec<float, 4> position [[position]];\n\
             \x20   vec<float, 4> color [[attribute(0)]];\n\
             \x20   float weight;\n\
             };\n\n"
        );
    }

    #[test]
    fn test_function() {
        let function = FunctionDecl::new(
            "vs",
            vec![
                Parameter::new("idx", TypeDecl::named("u32"), vec![Attribute::builtin("vertex_index")]),
                Parameter::new("scale", TypeDecl::named("f32"), vec![]),
            ],
            vec4f(),
            CompoundStatement::new(vec![Statement::ret(Some(Expression::ident("p")))]),
        )
        .with_attributes(vec![Attribute::Stage(Stage::Vertex)]);
        let module = ShaderModule::new(vec![Declaration::Function(function)]);

        assert_eq!(
            render(&module).unwrap(),
            "[[vertex]] vec<float, 4> vs(unsigned idx [[vertex_id]], float scale)\n\
             {\n\
             \x20   return p;\n\
             }\n\n"
        );
    }

    #[test]
    fn test_function_without_parameters_or_attributes() {
        let function = FunctionDecl::new("helper", vec![], TypeDecl::named("void"), CompoundStatement::default());
        let module = ShaderModule::new(vec![Declaration::Function(function)]);
        assert_eq!(render(&module).unwrap(), "void helper()\n{\n}\n\n");
    }

    #[test]
    fn test_missing_return_type() {
        let mut function = FunctionDecl::new("f", vec![], TypeDecl::named("void"), CompoundStatement::default());
        function.return_type = None;
        function.loc = SourceLoc::new(12);
        let module = ShaderModule::new(vec![Declaration::Function(function)]);
        match render(&module) {
            Err(CodegenError::MissingReturnType { context }) => {
                assert_eq!(context.path, "function `f`");
                assert_eq!(context.loc, SourceLoc::new(12));
            }
            other => panic!("expected MissingReturnType, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_builtin_reports_parameter() {
        let function = FunctionDecl::new(
            "fs",
            vec![Parameter::new("p", vec4f(), vec![Attribute::builtin("bogus")])],
            TypeDecl::named("void"),
            CompoundStatement::default(),
        );
        let module = ShaderModule::new(vec![Declaration::Function(function)]);
        let err = render(&module).unwrap_err();
        assert_eq!(err.context().unwrap().path, "function `fs` > parameter `p`");
    }

    #[test]
    fn test_global_variable() {
        let variable = VariableDecl::new(
            "SCALE",
            Some(TypeDecl::named("f32")),
            Some(Expression::Float32Literal(2.0)),
        );
        let module = ShaderModule::new(vec![Declaration::Variable(variable)]);
        assert_eq!(render(&module).unwrap(), "constant float SCALE = 2.0f;\n\n");
    }

    #[test]
    fn test_global_variable_requires_initializer() {
        let variable = VariableDecl::new("SCALE", Some(TypeDecl::named("f32")), None);
        let module = ShaderModule::new(vec![Declaration::Variable(variable)]);
        assert!(matches!(
            render(&module),
            Err(CodegenError::MissingGlobalInitializer { .. })
        ));
    }

    #[test]
    fn test_reserved_names_are_escaped_consistently() {
        let module = ShaderModule::new(vec![
            Declaration::Struct(StructDecl::new(
                "kernel",
                vec![StructMember::new("float", TypeDecl::named("f32"), vec![])],
            )),
            Declaration::Function(FunctionDecl::new(
                "main",
                vec![Parameter::new("k", TypeDecl::named("kernel"), vec![])],
                TypeDecl::named("f32"),
                CompoundStatement::new(vec![Statement::ret(Some(Expression::field(
                    Expression::ident("k"),
                    "float",
                )))]),
            )),
        ]);
        assert_eq!(
            render(&module).unwrap(),
            "struct kernel_ {\n    float float_;\n};\n\n\
             float main_(kernel_ k)\n{\n    return k.float_;\n}\n\n"
        );
    }
}
