//! Statement emission.
//!
//! Simple statements are written as one line: indentation, the statement,
//! `;`. A compound statement emits its children only; whoever opens a block
//! (a function body, a nested block) supplies the braces around it.

use core::fmt::Write;

use wgslc_ast::{AssignmentStatement, CompoundStatement, ReturnStatement, Statement, VariableDecl};

use crate::{
    error::{CodegenError, CodegenResult},
    writer::MetalWriter,
};

impl MetalWriter<'_> {
    pub(crate) fn write_statement(&mut self, statement: &Statement) -> CodegenResult<()> {
        match statement {
            Statement::Compound(block) => self.write_block(block),
            Statement::Assignment(assignment) => {
                self.write_simple_statement(|w| w.write_assignment(assignment))
            }
            Statement::Return(ret) => self.write_simple_statement(|w| w.write_return(ret)),
            Statement::Variable(variable) => {
                self.write_simple_statement(|w| w.write_variable(variable))
            }
        }
    }

    /// Emit every child of `compound` at the current indentation.
    pub(crate) fn write_compound_statement(&mut self, compound: &CompoundStatement) -> CodegenResult<()> {
        for statement in &compound.statements {
            self.write_statement(statement)?;
        }
        Ok(())
    }

    /// A block nested in a statement list keeps its own scope in Metal.
    fn write_block(&mut self, block: &CompoundStatement) -> CodegenResult<()> {
        writeln!(self.out, "{}{{", self.indent)?;
        self.indented(|w| w.write_compound_statement(block))?;
        writeln!(self.out, "{}}}", self.indent)?;
        Ok(())
    }

    fn write_simple_statement<F>(&mut self, f: F) -> CodegenResult<()>
    where
        F: FnOnce(&mut Self) -> CodegenResult<()>,
    {
        write!(self.out, "{}", self.indent)?;
        f(self)?;
        self.out.push_str(";\n");
        Ok(())
    }

    fn write_assignment(&mut self, assignment: &AssignmentStatement) -> CodegenResult<()> {
        if let Some(lhs) = &assignment.lhs {
            self.write_expression(lhs)?;
            self.out.push_str(" = ");
        }
        self.write_expression(&assignment.rhs)
    }

    fn write_return(&mut self, ret: &ReturnStatement) -> CodegenResult<()> {
        self.out.push_str("return");
        if let Some(expression) = &ret.expression {
            self.out.push(' ');
            self.write_expression(expression)?;
        }
        Ok(())
    }

    /// `Type name` with an optional ` = initializer`; no terminator.
    pub(crate) fn write_variable(&mut self, variable: &VariableDecl) -> CodegenResult<()> {
        self.within("variable", &variable.name, variable.loc, |w| {
            let Some(ty) = &variable.ty else {
                return Err(CodegenError::MissingVariableType {
                    name: variable.name.clone(),
                    context: w.context(),
                });
            };
            w.write_type(ty)?;
            write!(w.out, " {}", w.namer.name(&variable.name))?;
            if let Some(initializer) = &variable.initializer {
                w.out.push_str(" = ");
                w.write_expression(initializer)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use wgslc_ast::{Expression, TypeDecl};

    use super::*;
    use crate::writer::render_with;

    fn render(statement: &Statement) -> CodegenResult<String> {
        render_with(|w| w.indented(|w| w.write_statement(statement)))
    }

    #[test]
    fn test_assignment() {
        let statement = Statement::assign(Expression::ident("a"), Expression::AbstractIntLiteral(1));
        assert_eq!(render(&statement).unwrap(), "    a = 1;\n");
    }

    #[test]
    fn test_expression_statement() {
        let statement = Statement::expression(Expression::call_named("discard_fragment", vec![]));
        assert_eq!(render(&statement).unwrap(), "    discard_fragment();\n");
    }

    #[test]
    fn test_return() {
        assert_eq!(render(&Statement::ret(None)).unwrap(), "    return;\n");
        let statement = Statement::ret(Some(Expression::ident("v")));
        assert_eq!(render(&statement).unwrap(), "    return v;\n");
    }

    #[test]
    fn test_return_array() {
        let array = TypeDecl::array(TypeDecl::named("f32"), Expression::AbstractIntLiteral(2));
        let value = Expression::call(
            array,
            vec![Expression::Float32Literal(1.0), Expression::Float32Literal(2.0)],
        );
        let statement = Statement::ret(Some(value));
        assert_eq!(
            render(&statement).unwrap(),
            "    return {\n        1.0f,\n        2.0f,\n    };\n"
        );
    }

    #[test]
    fn test_variable() {
        let statement = Statement::Variable(VariableDecl::new(
            "x",
            Some(TypeDecl::named("f32")),
            Some(Expression::Float32Literal(0.5)),
        ));
        assert_eq!(render(&statement).unwrap(), "    float x = 0.5f;\n");

        let statement = Statement::Variable(VariableDecl::new("y", Some(TypeDecl::named("i32")), None));
        assert_eq!(render(&statement).unwrap(), "    int y;\n");
    }

    #[test]
    fn test_variable_without_type() {
        let statement = Statement::Variable(VariableDecl::new("x", None, None));
        match render(&statement) {
            Err(CodegenError::MissingVariableType { name, context }) => {
                assert_eq!(name, "x");
                assert_eq!(context.path, "variable `x`");
            }
            other => panic!("expected MissingVariableType, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_block() {
        let statement = Statement::block(vec![
            Statement::assign(Expression::ident("a"), Expression::ident("b")),
            Statement::block(vec![Statement::ret(None)]),
        ]);
        assert_eq!(
            render(&statement).unwrap(),
            "    {\n        a = b;\n        {\n            return;\n        }\n    }\n"
        );
    }

    #[test]
    fn test_compound_emits_children_only() {
        let compound = CompoundStatement::new(vec![Statement::ret(None)]);
        let out = render_with(|w| w.write_compound_statement(&compound)).unwrap();
        assert_eq!(out, "return;\n");
    }
}
