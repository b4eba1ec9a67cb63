//! WGSL abstract syntax tree.
//!
//! This crate defines the tree that the front end (parser + validator)
//! hands to the code generators:
//! - Declarations (structs, functions, module-scope variables)
//! - Types (named, array, parameterized)
//! - Attributes (builtins, locations, pipeline stages)
//! - Statements and expressions
//!
//! The tree is plain owned data. Back ends only read it.

#![no_std]

extern crate alloc;

mod attribute;
mod decl;
mod expr;
mod sourceloc;
mod stmt;
mod types;

pub use attribute::{Attribute, Stage};
pub use decl::{Declaration, FunctionDecl, Parameter, ShaderModule, StructDecl, StructMember, VariableDecl};
pub use expr::{CallableExpression, Expression, UnaryOperation};
pub use sourceloc::SourceLoc;
pub use stmt::{AssignmentStatement, CompoundStatement, ReturnStatement, Statement};
pub use types::{ArrayType, NamedType, ParameterizedBase, ParameterizedType, TypeDecl};
