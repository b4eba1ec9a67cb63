//! Statements.

use alloc::vec::Vec;

use crate::{decl::VariableDecl, expr::Expression};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(AssignmentStatement),
    Return(ReturnStatement),
    Compound(CompoundStatement),
    /// Function-local `var` / `let` / `const`.
    Variable(VariableDecl),
}

/// `lhs = rhs;`, or a bare expression statement when `lhs` is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub lhs: Option<Expression>,
    pub rhs: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStatement {
    pub statements: Vec<Statement>,
}

impl Statement {
    pub fn assign(lhs: Expression, rhs: Expression) -> Self {
        Statement::Assignment(AssignmentStatement { lhs: Some(lhs), rhs })
    }

    /// An expression evaluated for its side effects.
    pub fn expression(expr: Expression) -> Self {
        Statement::Assignment(AssignmentStatement { lhs: None, rhs: expr })
    }

    pub fn ret(expression: Option<Expression>) -> Self {
        Statement::Return(ReturnStatement { expression })
    }

    pub fn block(statements: Vec<Statement>) -> Self {
        Statement::Compound(CompoundStatement { statements })
    }
}

impl CompoundStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}
