//! Type-name translation: WGSL type syntax to Metal type syntax.

use core::fmt::Write;

use wgslc_ast::{ArrayType, NamedType, ParameterizedBase, ParameterizedType, TypeDecl};

use crate::{
    error::{CodegenError, CodegenResult},
    writer::MetalWriter,
};

/// WGSL predeclared scalar names and their Metal spelling.
///
/// `void` is the type the front end synthesizes for functions that declare
/// no result.
const SCALAR_NAMES: &[(&str, &str)] = &[
    ("i32", "int"),
    ("f32", "float"),
    ("u32", "unsigned"),
    ("f16", "half"),
    ("bool", "bool"),
    ("void", "void"),
];

/// Metal spelling of a predeclared WGSL scalar, `None` for any other name.
pub fn translate_scalar_name(name: &str) -> Option<&'static str> {
    SCALAR_NAMES
        .iter()
        .find(|(wgsl, _)| *wgsl == name)
        .map(|(_, metal)| *metal)
}

impl MetalWriter<'_> {
    pub(crate) fn write_type(&mut self, ty: &TypeDecl) -> CodegenResult<()> {
        match ty {
            TypeDecl::Named(named) => self.write_named_type(named),
            TypeDecl::Array(array) => self.write_array_type(array),
            TypeDecl::Parameterized(parameterized) => self.write_parameterized_type(parameterized),
        }
    }

    fn write_named_type(&mut self, named: &NamedType) -> CodegenResult<()> {
        match translate_scalar_name(&named.name) {
            Some(metal) => self.out.push_str(metal),
            // Struct names and anything else Metal already understands.
            None => self.out.push_str(&self.namer.name(&named.name)),
        }
        Ok(())
    }

    fn write_array_type(&mut self, array: &ArrayType) -> CodegenResult<()> {
        let Some(element_type) = array.element_type.as_deref() else {
            return Err(CodegenError::MissingArrayElementType {
                context: self.context(),
            });
        };
        let Some(element_count) = array.element_count.as_deref() else {
            return Err(CodegenError::MissingArrayElementCount {
                context: self.context(),
            });
        };

        self.out.push_str("array<");
        self.write_type(element_type)?;
        self.out.push_str(", ");
        self.write_expression(element_count)?;
        self.out.push('>');
        Ok(())
    }

    fn write_parameterized_type(&mut self, ty: &ParameterizedType) -> CodegenResult<()> {
        let rank = match ty.base {
            ParameterizedBase::Vec2 => 2,
            ParameterizedBase::Vec3 => 3,
            ParameterizedBase::Vec4 => 4,
            // TODO: lower matCxR<T> to Metal's matrix<T, C, R> once matrix
            // constructors and column access are handled in expressions.
            ParameterizedBase::Mat2x2
            | ParameterizedBase::Mat2x3
            | ParameterizedBase::Mat2x4
            | ParameterizedBase::Mat3x2
            | ParameterizedBase::Mat3x3
            | ParameterizedBase::Mat3x4
            | ParameterizedBase::Mat4x2
            | ParameterizedBase::Mat4x3
            | ParameterizedBase::Mat4x4 => {
                return Err(CodegenError::UnsupportedMatrixType {
                    base: ty.base,
                    context: self.context(),
                });
            }
        };

        self.out.push_str("vec<");
        self.write_type(&ty.element_type)?;
        write!(self.out, ", {}>", rank)?;
        Ok(())
    }
}
