//! Module-level declarations and the module root.

use alloc::{string::String, vec::Vec};

use crate::{
    attribute::{Attribute, Stage},
    expr::Expression,
    sourceloc::SourceLoc,
    stmt::CompoundStatement,
    types::TypeDecl,
};

/// Root of a translation unit. Declarations are kept in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShaderModule {
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Struct(StructDecl),
    Function(FunctionDecl),
    Variable(VariableDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// Always present after validation; functions without an explicit
    /// result get a synthesized void-like type.
    pub return_type: Option<TypeDecl>,
    pub attributes: Vec<Attribute>,
    pub body: CompoundStatement,
    pub loc: SourceLoc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeDecl,
    pub attributes: Vec<Attribute>,
    pub loc: SourceLoc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: String,
    pub members: Vec<StructMember>,
    pub loc: SourceLoc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructMember {
    pub name: String,
    pub ty: TypeDecl,
    pub attributes: Vec<Attribute>,
    pub loc: SourceLoc,
}

/// A variable, at module scope or inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub name: String,
    /// Resolved by the validator when the source left it implicit.
    pub ty: Option<TypeDecl>,
    pub initializer: Option<Expression>,
    pub loc: SourceLoc,
}

impl ShaderModule {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }
}

impl FunctionDecl {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: TypeDecl,
        body: CompoundStatement,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type: Some(return_type),
            attributes: Vec::new(),
            body,
            loc: SourceLoc::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// The pipeline stage this function is an entry point for, if any.
    pub fn stage(&self) -> Option<Stage> {
        self.attributes.iter().find_map(Attribute::as_stage)
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeDecl, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            ty,
            attributes,
            loc: SourceLoc::default(),
        }
    }
}

impl StructDecl {
    pub fn new(name: impl Into<String>, members: Vec<StructMember>) -> Self {
        Self {
            name: name.into(),
            members,
            loc: SourceLoc::default(),
        }
    }
}

impl StructMember {
    pub fn new(name: impl Into<String>, ty: TypeDecl, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            ty,
            attributes,
            loc: SourceLoc::default(),
        }
    }
}

impl VariableDecl {
    pub fn new(name: impl Into<String>, ty: Option<TypeDecl>, initializer: Option<Expression>) -> Self {
        Self {
            name: name.into(),
            ty,
            initializer,
            loc: SourceLoc::default(),
        }
    }
}
