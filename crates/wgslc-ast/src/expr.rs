//! Expressions.

use alloc::{boxed::Box, string::String, vec::Vec};

use crate::types::TypeDecl;

/// Prefix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperation {
    /// `-e`
    Negate,
    /// `~e`
    Complement,
    /// `!e`
    Not,
}

/// A call-shaped expression: `target(arguments...)`.
///
/// WGSL uses the same syntax for function calls and value constructors, so
/// the target is a type reference. A named target is either a function or a
/// constructible type (`f32(x)`, `MyStruct(a, b)`); an array target builds
/// an array value.
#[derive(Debug, Clone, PartialEq)]
pub struct CallableExpression {
    pub target: TypeDecl,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Integer literal without a suffix, before concretization.
    AbstractIntLiteral(i64),
    /// `123i`
    Int32Literal(i32),
    /// `123u`
    Uint32Literal(u32),
    /// Float literal without a suffix, before concretization.
    AbstractFloatLiteral(f64),
    /// `1.5f`
    Float32Literal(f32),
    BoolLiteral(bool),
    Identifier(String),
    /// `base[index]`
    ArrayAccess {
        base: Box<Expression>,
        index: Box<Expression>,
    },
    /// `base.field`
    StructureAccess {
        base: Box<Expression>,
        field: String,
    },
    Unary {
        operation: UnaryOperation,
        operand: Box<Expression>,
    },
    Callable(CallableExpression),
}

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn index(base: Expression, index: Expression) -> Self {
        Expression::ArrayAccess {
            base: Box::new(base),
            index: Box::new(index),
        }
    }

    pub fn field(base: Expression, field: impl Into<String>) -> Self {
        Expression::StructureAccess {
            base: Box::new(base),
            field: field.into(),
        }
    }

    pub fn unary(operation: UnaryOperation, operand: Expression) -> Self {
        Expression::Unary {
            operation,
            operand: Box::new(operand),
        }
    }

    pub fn negate(operand: Expression) -> Self {
        Self::unary(UnaryOperation::Negate, operand)
    }

    pub fn call(target: TypeDecl, arguments: Vec<Expression>) -> Self {
        Expression::Callable(CallableExpression { target, arguments })
    }

    /// Call of a function (or named type constructor) by name.
    pub fn call_named(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self::call(TypeDecl::named(name), arguments)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_call_named_targets_named_type() {
        let call = Expression::call_named("foo", vec![Expression::AbstractIntLiteral(1)]);
        match call {
            Expression::Callable(callable) => {
                assert_eq!(callable.target, TypeDecl::named("foo"));
                assert_eq!(callable.arguments.len(), 1);
            }
            other => panic!("expected callable, got {:?}", other),
        }
    }

    #[test]
    fn test_field_and_index_nest() {
        let expr = Expression::field(
            Expression::index(Expression::ident("a"), Expression::AbstractIntLiteral(0)),
            "x",
        );
        let Expression::StructureAccess { base, field } = expr else {
            panic!("expected structure access");
        };
        assert_eq!(field, "x");
        assert!(matches!(*base, Expression::ArrayAccess { .. }));
    }
}
