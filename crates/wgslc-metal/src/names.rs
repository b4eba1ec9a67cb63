//! Identifier naming for Metal.
//!
//! WGSL and Metal (C++14) do not share a reserved-word set, so a valid WGSL
//! identifier such as `kernel` or `class` would not compile as Metal. Such
//! names are respelled by a [`Namer`] built from the whole module, so a new
//! spelling never lands on an identifier the module already uses.

use alloc::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet},
    format,
    string::String,
    vec::Vec,
};

use wgslc_ast::{Declaration, Expression, ShaderModule, Statement, TypeDecl, VariableDecl};

use crate::types::translate_scalar_name;

/// Metal and C++ keywords plus names Metal predeclares at global scope.
/// Sorted, for `binary_search`.
const RESERVED: &[&str] = &[
    "INFINITY", "NAN", "alignas", "alignof", "and", "and_eq", "array", "asm", "auto", "bitand",
    "bitor", "bool", "bool2", "bool3", "bool4", "break", "case", "catch", "char", "char16_t",
    "char32_t", "class", "compl", "const", "const_cast", "constant", "constexpr", "continue",
    "decltype", "default", "delete", "device", "do", "double", "dynamic_cast", "else", "enum",
    "explicit", "export", "extern", "false", "float", "float2", "float2x2", "float2x3",
    "float2x4", "float3", "float3x2", "float3x3", "float3x4", "float4", "float4x2", "float4x3",
    "float4x4", "for", "fragment", "friend", "goto", "half", "half2", "half3", "half4", "if",
    "inline", "int", "int2", "int3", "int4", "kernel", "long", "main", "metal", "mutable",
    "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq",
    "packed_float2", "packed_float3", "packed_float4", "private", "protected", "ptrdiff_t",
    "public", "register", "reinterpret_cast", "return", "sampler", "short", "signed", "size_t",
    "sizeof", "static", "static_assert", "static_cast", "struct", "switch", "template",
    "texture1d", "texture2d", "texture3d", "texturecube", "this", "thread", "thread_local",
    "threadgroup", "threadgroup_imageblock", "throw", "true", "try", "typedef", "typeid",
    "typename", "uchar", "uint", "uint2", "uint3", "uint4", "ulong", "union", "unsigned",
    "ushort", "using", "vec", "vertex", "virtual", "visible", "void", "volatile", "wchar_t",
    "while", "xor", "xor_eq",
];

/// Whether `name` collides with a reserved Metal name.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.binary_search(&name).is_ok()
}

/// Metal spellings for the identifiers of one module.
///
/// A reserved name becomes `name_`, or `name_1`, `name_2` and so on when that
/// spelling is already one of the module's identifiers. Spellings are chosen
/// per source name, so every declaration and use of a name agree and no two
/// source names share a spelling.
#[derive(Debug, Clone, Default)]
pub struct Namer {
    renamed: BTreeMap<String, String>,
}

impl Namer {
    /// Collect every identifier `module` mentions and respell the reserved ones.
    pub fn for_module(module: &ShaderModule) -> Self {
        let mut taken = BTreeSet::new();
        for declaration in &module.declarations {
            collect_declaration(declaration, &mut taken);
        }

        let reserved: Vec<String> = taken.iter().filter(|name| is_reserved(name)).cloned().collect();
        let mut renamed = BTreeMap::new();
        for name in reserved {
            let mut spelling = format!("{}_", name);
            let mut suffix = 1u32;
            while taken.contains(&spelling) {
                spelling = format!("{}_{}", name, suffix);
                suffix += 1;
            }
            taken.insert(spelling.clone());
            renamed.insert(name, spelling);
        }
        Self { renamed }
    }

    /// The Metal spelling of `name`.
    ///
    /// A reserved name the module never mentioned only reaches here when a
    /// writer emits nodes outside [`MetalWriter::write_module`]; it gets the
    /// plain `name_` spelling.
    ///
    /// [`MetalWriter::write_module`]: crate::MetalWriter::write_module
    pub fn name<'a>(&'a self, name: &'a str) -> Cow<'a, str> {
        match self.renamed.get(name) {
            Some(spelling) => Cow::Borrowed(spelling),
            None if is_reserved(name) => Cow::Owned(format!("{}_", name)),
            None => Cow::Borrowed(name),
        }
    }
}

fn collect_declaration(declaration: &Declaration, taken: &mut BTreeSet<String>) {
    match declaration {
        Declaration::Struct(structure) => {
            taken.insert(structure.name.clone());
            for member in &structure.members {
                taken.insert(member.name.clone());
                collect_type(&member.ty, taken);
            }
        }
        Declaration::Function(function) => {
            taken.insert(function.name.clone());
            for parameter in &function.parameters {
                taken.insert(parameter.name.clone());
                collect_type(&parameter.ty, taken);
            }
            if let Some(return_type) = &function.return_type {
                collect_type(return_type, taken);
            }
            for statement in &function.body.statements {
                collect_statement(statement, taken);
            }
        }
        Declaration::Variable(variable) => collect_variable(variable, taken),
    }
}

fn collect_variable(variable: &VariableDecl, taken: &mut BTreeSet<String>) {
    taken.insert(variable.name.clone());
    if let Some(ty) = &variable.ty {
        collect_type(ty, taken);
    }
    if let Some(initializer) = &variable.initializer {
        collect_expression(initializer, taken);
    }
}

fn collect_statement(statement: &Statement, taken: &mut BTreeSet<String>) {
    match statement {
        Statement::Assignment(assignment) => {
            if let Some(lhs) = &assignment.lhs {
                collect_expression(lhs, taken);
            }
            collect_expression(&assignment.rhs, taken);
        }
        Statement::Return(ret) => {
            if let Some(expression) = &ret.expression {
                collect_expression(expression, taken);
            }
        }
        Statement::Compound(block) => {
            for statement in &block.statements {
                collect_statement(statement, taken);
            }
        }
        Statement::Variable(variable) => collect_variable(variable, taken),
    }
}

fn collect_expression(expression: &Expression, taken: &mut BTreeSet<String>) {
    match expression {
        Expression::Identifier(name) => {
            taken.insert(name.clone());
        }
        Expression::ArrayAccess { base, index } => {
            collect_expression(base, taken);
            collect_expression(index, taken);
        }
        Expression::StructureAccess { base, field } => {
            collect_expression(base, taken);
            taken.insert(field.clone());
        }
        Expression::Unary { operand, .. } => collect_expression(operand, taken),
        Expression::Callable(call) => {
            collect_type(&call.target, taken);
            for argument in &call.arguments {
                collect_expression(argument, taken);
            }
        }
        Expression::AbstractIntLiteral(_)
        | Expression::Int32Literal(_)
        | Expression::Uint32Literal(_)
        | Expression::AbstractFloatLiteral(_)
        | Expression::Float32Literal(_)
        | Expression::BoolLiteral(_) => {}
    }
}

fn collect_type(ty: &TypeDecl, taken: &mut BTreeSet<String>) {
    match ty {
        // Predeclared scalars are translated, never respelled.
        TypeDecl::Named(named) => {
            if translate_scalar_name(&named.name).is_none() {
                taken.insert(named.name.clone());
            }
        }
        TypeDecl::Array(array) => {
            if let Some(element_type) = &array.element_type {
                collect_type(element_type, taken);
            }
            if let Some(element_count) = &array.element_count {
                collect_expression(element_count, taken);
            }
        }
        TypeDecl::Parameterized(parameterized) => collect_type(&parameterized.element_type, taken),
    }
}
