//! Error types for Metal code generation.
//!
//! The generator only ever sees modules that passed validation, so every
//! variant here means either a front-end contract break or a construct this
//! backend does not lower yet. None of them are recoverable for the module
//! being emitted.

use alloc::string::String;
use core::fmt;

use thiserror::Error;
use wgslc_ast::{ParameterizedBase, SourceLoc};

/// Result type for Metal code generation.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Identifies the node an error was raised for.
///
/// `path` lists the enclosing declarations, e.g.
/// ``function `main` > parameter `idx` ``. `loc` is the location of the
/// innermost enclosing node that carries one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeContext {
    pub path: String,
    pub loc: SourceLoc,
}

impl fmt::Display for NodeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "module scope ({})", self.loc)
        } else {
            write!(f, "{} ({})", self.path, self.loc)
        }
    }
}

/// Error that can occur while emitting Metal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("function has no return type in {context}")]
    MissingReturnType { context: NodeContext },

    #[error("array type has no element type in {context}")]
    MissingArrayElementType { context: NodeContext },

    #[error("array type has no element count in {context}")]
    MissingArrayElementCount { context: NodeContext },

    #[error("variable `{name}` has no resolved type in {context}")]
    MissingVariableType { name: String, context: NodeContext },

    #[error("module-scope variable `{name}` has no initializer in {context}")]
    MissingGlobalInitializer { name: String, context: NodeContext },

    #[error("unknown builtin `{name}` in {context}")]
    UnknownBuiltin { name: String, context: NodeContext },

    #[error("matrix type `{base}` is not supported by the Metal backend in {context}")]
    UnsupportedMatrixType {
        base: ParameterizedBase,
        context: NodeContext,
    },

    #[error("array constructor used as an operand in {context}; bind it to a variable first")]
    ArrayConstructorOperand { context: NodeContext },

    #[error("literal `{value}` has no Metal representation in {context}")]
    NonFiniteLiteral { value: String, context: NodeContext },

    #[error("failed to write Metal source")]
    Format(#[from] fmt::Error),
}

impl CodegenError {
    /// The offending node, for every variant except `Format`.
    pub fn context(&self) -> Option<&NodeContext> {
        match self {
            CodegenError::MissingReturnType { context }
            | CodegenError::MissingArrayElementType { context }
            | CodegenError::MissingArrayElementCount { context }
            | CodegenError::ArrayConstructorOperand { context }
            | CodegenError::MissingVariableType { context, .. }
            | CodegenError::MissingGlobalInitializer { context, .. }
            | CodegenError::UnknownBuiltin { context, .. }
            | CodegenError::UnsupportedMatrixType { context, .. }
            | CodegenError::NonFiniteLiteral { context, .. } => Some(context),
            CodegenError::Format(_) => None,
        }
    }
}
