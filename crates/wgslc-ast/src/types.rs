//! Type declarations as they appear in source.

use alloc::{boxed::Box, string::String};
use core::fmt;

use crate::expr::Expression;

/// A type as written in the source program.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecl {
    /// A scalar or user type referenced by name (`f32`, `MyStruct`).
    Named(NamedType),
    /// `array<T, N>`
    Array(ArrayType),
    /// `vecN<T>` or `matCxR<T>`
    Parameterized(ParameterizedType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
}

/// `array<T, N>`.
///
/// Both parts are optional in the tree because the parser produces the
/// node before the validator has resolved them. A validated module has
/// both present.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub element_type: Option<Box<TypeDecl>>,
    pub element_count: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedType {
    pub base: ParameterizedBase,
    pub element_type: Box<TypeDecl>,
}

/// Template bases that take a single element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterizedBase {
    Vec2,
    Vec3,
    Vec4,
    Mat2x2,
    Mat2x3,
    Mat2x4,
    Mat3x2,
    Mat3x3,
    Mat3x4,
    Mat4x2,
    Mat4x3,
    Mat4x4,
}

impl ParameterizedBase {
    pub const ALL: [ParameterizedBase; 12] = [
        ParameterizedBase::Vec2,
        ParameterizedBase::Vec3,
        ParameterizedBase::Vec4,
        ParameterizedBase::Mat2x2,
        ParameterizedBase::Mat2x3,
        ParameterizedBase::Mat2x4,
        ParameterizedBase::Mat3x2,
        ParameterizedBase::Mat3x3,
        ParameterizedBase::Mat3x4,
        ParameterizedBase::Mat4x2,
        ParameterizedBase::Mat4x3,
        ParameterizedBase::Mat4x4,
    ];

    /// Component count for vector bases, `None` for matrices.
    pub fn vector_rank(self) -> Option<u32> {
        match self {
            ParameterizedBase::Vec2 => Some(2),
            ParameterizedBase::Vec3 => Some(3),
            ParameterizedBase::Vec4 => Some(4),
            _ => None,
        }
    }

    /// `(columns, rows)` for matrix bases, `None` for vectors.
    pub fn matrix_shape(self) -> Option<(u32, u32)> {
        match self {
            ParameterizedBase::Vec2 | ParameterizedBase::Vec3 | ParameterizedBase::Vec4 => None,
            ParameterizedBase::Mat2x2 => Some((2, 2)),
            ParameterizedBase::Mat2x3 => Some((2, 3)),
            ParameterizedBase::Mat2x4 => Some((2, 4)),
            ParameterizedBase::Mat3x2 => Some((3, 2)),
            ParameterizedBase::Mat3x3 => Some((3, 3)),
            ParameterizedBase::Mat3x4 => Some((3, 4)),
            ParameterizedBase::Mat4x2 => Some((4, 2)),
            ParameterizedBase::Mat4x3 => Some((4, 3)),
            ParameterizedBase::Mat4x4 => Some((4, 4)),
        }
    }
}

impl fmt::Display for ParameterizedBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rank) = self.vector_rank() {
            return write!(f, "vec{}", rank);
        }
        match self.matrix_shape() {
            Some((columns, rows)) => write!(f, "mat{}x{}", columns, rows),
            None => Ok(()),
        }
    }
}

impl TypeDecl {
    pub fn named(name: impl Into<String>) -> Self {
        TypeDecl::Named(NamedType { name: name.into() })
    }

    /// A fully resolved `array<element, count>`.
    pub fn array(element: TypeDecl, count: Expression) -> Self {
        TypeDecl::Array(ArrayType {
            element_type: Some(Box::new(element)),
            element_count: Some(Box::new(count)),
        })
    }

    pub fn parameterized(base: ParameterizedBase, element: TypeDecl) -> Self {
        TypeDecl::Parameterized(ParameterizedType {
            base,
            element_type: Box::new(element),
        })
    }

    /// `vecN<element>`; `rank` must be 2, 3 or 4.
    pub fn vec(rank: u32, element: TypeDecl) -> Option<Self> {
        let base = match rank {
            2 => ParameterizedBase::Vec2,
            3 => ParameterizedBase::Vec3,
            4 => ParameterizedBase::Vec4,
            _ => return None,
        };
        Some(Self::parameterized(base, element))
    }
}
