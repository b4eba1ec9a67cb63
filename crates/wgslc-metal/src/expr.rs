//! Expression emission.

use alloc::format;
use core::fmt::Write;

use wgslc_ast::{CallableExpression, Expression, TypeDecl, UnaryOperation};

use crate::{
    error::{CodegenError, CodegenResult},
    literal,
    writer::MetalWriter,
};

fn unary_operator(operation: UnaryOperation) -> &'static str {
    match operation {
        UnaryOperation::Negate => "-",
        UnaryOperation::Complement => "~",
        UnaryOperation::Not => "!",
    }
}

/// The tree has no parenthesis nodes; grouping is implied by shape. These
/// operands would re-associate (or lex as `--`) if printed bare, so they
/// get explicit parentheses.
fn needs_parentheses(operand: &Expression) -> bool {
    match operand {
        Expression::Unary { .. } => true,
        Expression::AbstractIntLiteral(value) => *value < 0,
        Expression::Int32Literal(value) => *value < 0,
        Expression::AbstractFloatLiteral(value) => value.is_sign_negative(),
        Expression::Float32Literal(value) => value.is_sign_negative(),
        Expression::Uint32Literal(_)
        | Expression::BoolLiteral(_)
        | Expression::Identifier(_)
        | Expression::ArrayAccess { .. }
        | Expression::StructureAccess { .. }
        | Expression::Callable(_) => false,
    }
}

impl MetalWriter<'_> {
    pub(crate) fn write_expression(&mut self, expr: &Expression) -> CodegenResult<()> {
        match expr {
            Expression::AbstractIntLiteral(value) => {
                self.out.push_str(&literal::abstract_int(*value));
            }
            Expression::Int32Literal(value) => {
                self.out.push_str(&literal::int32(*value));
            }
            Expression::Uint32Literal(value) => {
                self.out.push_str(&literal::uint32(*value));
            }
            Expression::AbstractFloatLiteral(value) => {
                let text = literal::abstract_float(*value).ok_or_else(|| CodegenError::NonFiniteLiteral {
                    value: format!("{:?}", value),
                    context: self.context(),
                })?;
                self.out.push_str(&text);
            }
            Expression::Float32Literal(value) => {
                let text = literal::float32(*value).ok_or_else(|| CodegenError::NonFiniteLiteral {
                    value: format!("{:?}", value),
                    context: self.context(),
                })?;
                self.out.push_str(&text);
            }
            Expression::BoolLiteral(value) => {
                self.out.push_str(literal::boolean(*value));
            }
            Expression::Identifier(name) => {
                self.out.push_str(&self.namer.name(name));
            }
            Expression::ArrayAccess { base, index } => {
                self.write_operand(base)?;
                self.out.push('[');
                self.write_expression(index)?;
                self.out.push(']');
            }
            Expression::StructureAccess { base, field } => {
                self.write_operand(base)?;
                write!(self.out, ".{}", self.namer.name(field))?;
            }
            Expression::Unary { operation, operand } => {
                self.out.push_str(unary_operator(*operation));
                self.write_operand(operand)?;
            }
            Expression::Callable(call) => self.write_callable(call)?,
        }
        Ok(())
    }

    /// Operands of postfix and unary operators. A brace initializer is only
    /// legal as a whole initializer or return value, never as an operand.
    fn write_operand(&mut self, operand: &Expression) -> CodegenResult<()> {
        if let Expression::Callable(CallableExpression {
            target: TypeDecl::Array(_),
            ..
        }) = operand
        {
            return Err(CodegenError::ArrayConstructorOperand {
                context: self.context(),
            });
        }
        if needs_parentheses(operand) {
            self.out.push('(');
            self.write_expression(operand)?;
            self.out.push(')');
            Ok(())
        } else {
            self.write_expression(operand)
        }
    }

    /// Array construction and calls share WGSL syntax but not Metal syntax:
    /// `array<T, N>(a, b)` becomes a brace initializer, everything else is
    /// an ordinary call of the translated target.
    fn write_callable(&mut self, call: &CallableExpression) -> CodegenResult<()> {
        match &call.target {
            TypeDecl::Array(_) => self.write_aggregate_initializer(&call.arguments),
            target @ (TypeDecl::Named(_) | TypeDecl::Parameterized(_)) => {
                self.write_type(target)?;
                self.out.push('(');
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_expression(argument)?;
                }
                self.out.push(')');
                Ok(())
            }
        }
    }

    /// One element per line, one level deeper than the braces; the closing
    /// brace sits at the current level.
    fn write_aggregate_initializer(&mut self, elements: &[Expression]) -> CodegenResult<()> {
        self.out.push_str("{\n");
        self.indented(|w| {
            for element in elements {
                write!(w.out, "{}", w.indent)?;
                w.write_expression(element)?;
                w.out.push_str(",\n");
            }
            Ok(())
        })?;
        write!(self.out, "{}}}", self.indent)?;
        Ok(())
    }
}
