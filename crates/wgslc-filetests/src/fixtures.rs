//! Named modules the `.msl` filetests run against.
//!
//! The backend only consumes trees, so test inputs are built here with the
//! `wgslc-ast` constructors rather than parsed from WGSL text.

use wgslc_ast::{
    ArrayType, Attribute, CompoundStatement, Declaration, Expression, FunctionDecl,
    ParameterizedBase, Parameter, ShaderModule, SourceLoc, Stage, Statement, StructDecl,
    StructMember, TypeDecl, UnaryOperation, VariableDecl,
};

/// Every fixture name [`fixture`] knows.
pub const FIXTURE_NAMES: &[&str] = &[
    "vertex_struct",
    "triangle",
    "compute",
    "reserved_names",
    "reserved_collisions",
    "nested_blocks",
    "literals",
    "globals",
    "array_missing_count",
    "array_missing_element",
    "matrix_member",
    "indexed_array_constructor",
    "unknown_builtin",
    "missing_return_type",
];

/// Build the fixture called `name`.
pub fn fixture(name: &str) -> Option<ShaderModule> {
    let module = match name {
        "vertex_struct" => vertex_struct(),
        "triangle" => triangle(),
        "compute" => compute(),
        "reserved_names" => reserved_names(),
        "reserved_collisions" => reserved_collisions(),
        "nested_blocks" => nested_blocks(),
        "literals" => literals(),
        "globals" => globals(),
        "array_missing_count" => array_missing_count(),
        "array_missing_element" => array_missing_element(),
        "matrix_member" => matrix_member(),
        "indexed_array_constructor" => indexed_array_constructor(),
        "unknown_builtin" => unknown_builtin(),
        "missing_return_type" => missing_return_type(),
        _ => return None,
    };
    Some(module)
}

fn f32_ty() -> TypeDecl {
    TypeDecl::named("f32")
}

fn vec_ty(rank: u32) -> TypeDecl {
    let base = match rank {
        2 => ParameterizedBase::Vec2,
        3 => ParameterizedBase::Vec3,
        _ => ParameterizedBase::Vec4,
    };
    TypeDecl::parameterized(base, f32_ty())
}

fn int(value: i64) -> Expression {
    Expression::AbstractIntLiteral(value)
}

fn float(value: f32) -> Expression {
    Expression::Float32Literal(value)
}

fn function(name: &str, parameters: Vec<Parameter>, return_type: TypeDecl, body: Vec<Statement>) -> FunctionDecl {
    FunctionDecl::new(name, parameters, return_type, CompoundStatement::new(body))
}

/// `struct Vertex { @builtin(position) position: vec4<f32> }` and a vertex
/// entry point returning it.
fn vertex_struct() -> ShaderModule {
    ShaderModule::new(vec![
        Declaration::Struct(StructDecl::new(
            "Vertex",
            vec![StructMember::new("position", vec_ty(4), vec![Attribute::builtin("position")])],
        )),
        Declaration::Function(
            function(
                "vs_main",
                vec![Parameter::new("v", TypeDecl::named("Vertex"), vec![])],
                TypeDecl::named("Vertex"),
                vec![Statement::ret(Some(Expression::ident("v")))],
            )
            .with_attributes(vec![Attribute::Stage(Stage::Vertex)]),
        ),
    ])
}

/// The usual hello-triangle pipeline: positions from a constant array
/// indexed by the vertex index, a solid fragment color.
fn triangle() -> ShaderModule {
    let positions_ty = TypeDecl::array(vec_ty(2), int(3));
    let vec2 = |x: f32, y: f32| Expression::call(vec_ty(2), vec![float(x), float(y)]);

    let vertex = function(
        "vs_main",
        vec![Parameter::new(
            "index",
            TypeDecl::named("u32"),
            vec![Attribute::builtin("vertex_index")],
        )],
        TypeDecl::named("VertexOutput"),
        vec![
            Statement::Variable(VariableDecl::new(
                "positions",
                Some(positions_ty.clone()),
                Some(Expression::call(
                    positions_ty,
                    vec![vec2(0.0, 0.5), vec2(-0.5, -0.5), vec2(0.5, -0.5)],
                )),
            )),
            Statement::Variable(VariableDecl::new("out", Some(TypeDecl::named("VertexOutput")), None)),
            Statement::assign(
                Expression::field(Expression::ident("out"), "position"),
                Expression::call(
                    vec_ty(4),
                    vec![
                        Expression::index(Expression::ident("positions"), Expression::ident("index")),
                        float(0.0),
                        float(1.0),
                    ],
                ),
            ),
            Statement::ret(Some(Expression::ident("out"))),
        ],
    )
    .with_attributes(vec![Attribute::Stage(Stage::Vertex)]);

    let fragment = function(
        "fs_main",
        vec![Parameter::new("input", TypeDecl::named("VertexOutput"), vec![])],
        vec_ty(4),
        vec![Statement::ret(Some(Expression::call(
            vec_ty(4),
            vec![float(1.0), float(0.0), float(0.0), float(1.0)],
        )))],
    )
    .with_attributes(vec![Attribute::Stage(Stage::Fragment)]);

    ShaderModule::new(vec![
        Declaration::Struct(StructDecl::new(
            "VertexOutput",
            vec![
                StructMember::new("position", vec_ty(4), vec![Attribute::builtin("position")]),
                StructMember::new("color", vec_ty(4), vec![Attribute::Location(0)]),
            ],
        )),
        Declaration::Function(vertex),
        Declaration::Function(fragment),
    ])
}

fn compute() -> ShaderModule {
    let id = Parameter::new(
        "id",
        TypeDecl::parameterized(ParameterizedBase::Vec3, TypeDecl::named("u32")),
        vec![Attribute::builtin("global_invocation_id")],
    );
    ShaderModule::new(vec![
        Declaration::Function(function(
            "touch",
            vec![Parameter::new("i", TypeDecl::named("u32"), vec![])],
            TypeDecl::named("void"),
            vec![],
        )),
        Declaration::Function(
            function(
                "cs_main",
                vec![id],
                TypeDecl::named("void"),
                vec![
                    Statement::expression(Expression::call_named(
                        "touch",
                        vec![Expression::field(Expression::ident("id"), "x")],
                    )),
                    Statement::ret(None),
                ],
            )
            .with_attributes(vec![Attribute::Stage(Stage::Compute)]),
        ),
    ])
}

/// WGSL identifiers that are Metal keywords.
fn reserved_names() -> ShaderModule {
    ShaderModule::new(vec![
        Declaration::Struct(StructDecl::new(
            "device",
            vec![StructMember::new("half", f32_ty(), vec![])],
        )),
        Declaration::Function(
            function(
                "main",
                vec![Parameter::new("kernel", TypeDecl::named("device"), vec![])],
                vec_ty(4),
                vec![Statement::ret(Some(Expression::call(
                    vec_ty(4),
                    vec![
                        Expression::field(Expression::ident("kernel"), "half"),
                        float(0.0),
                        float(0.0),
                        float(1.0),
                    ],
                )))],
            )
            .with_attributes(vec![Attribute::Stage(Stage::Fragment)]),
        ),
    ])
}

/// Keywords whose plain respelling is already a user identifier.
fn reserved_collisions() -> ShaderModule {
    ShaderModule::new(vec![
        Declaration::Variable(VariableDecl::new("device_", Some(f32_ty()), Some(float(0.5)))),
        Declaration::Function(function(
            "scale",
            vec![
                Parameter::new("device", f32_ty(), vec![]),
                Parameter::new("kernel", f32_ty(), vec![]),
            ],
            f32_ty(),
            vec![Statement::block(vec![
                Statement::Variable(VariableDecl::new("kernel_", Some(f32_ty()), Some(float(1.0)))),
                Statement::ret(Some(Expression::call_named(
                    "mul",
                    vec![Expression::ident("kernel"), Expression::ident("device_")],
                ))),
            ])],
        )),
    ])
}

fn nested_blocks() -> ShaderModule {
    ShaderModule::new(vec![Declaration::Function(function(
        "shadowing",
        vec![],
        TypeDecl::named("i32"),
        vec![
            Statement::Variable(VariableDecl::new("x", Some(TypeDecl::named("i32")), Some(int(1)))),
            Statement::block(vec![
                Statement::Variable(VariableDecl::new("x", Some(TypeDecl::named("i32")), Some(int(2)))),
                Statement::expression(Expression::call_named("use_value", vec![Expression::ident("x")])),
            ]),
            Statement::ret(Some(Expression::ident("x"))),
        ],
    ))])
}

/// Literals at the edges of their types.
fn literals() -> ShaderModule {
    let values = vec![
        Expression::Int32Literal(i32::MIN),
        Expression::Int32Literal(i32::MAX),
        Expression::AbstractIntLiteral(1 << 40),
        Expression::Uint32Literal(u32::MAX),
        Expression::Float32Literal(f32::MAX),
        Expression::Float32Literal(1e-7),
        Expression::Float32Literal(-0.0),
        Expression::AbstractFloatLiteral(0.1),
        Expression::BoolLiteral(false),
        Expression::unary(UnaryOperation::Negate, Expression::Int32Literal(-3)),
    ];
    ShaderModule::new(vec![Declaration::Function(function(
        "literals",
        vec![],
        TypeDecl::named("void"),
        values.into_iter().map(|value| Statement::expression(Expression::call_named("sink", vec![value]))).collect(),
    ))])
}

fn globals() -> ShaderModule {
    ShaderModule::new(vec![
        Declaration::Variable(VariableDecl::new("SCALE", Some(f32_ty()), Some(float(2.0)))),
        Declaration::Function(function(
            "scaled",
            vec![Parameter::new("x", f32_ty(), vec![])],
            f32_ty(),
            vec![Statement::ret(Some(Expression::call_named(
                "mul",
                vec![Expression::ident("x"), Expression::ident("SCALE")],
            )))],
        )),
    ])
}

fn array_missing_count() -> ShaderModule {
    let broken = TypeDecl::Array(ArrayType {
        element_type: Some(Box::new(f32_ty())),
        element_count: None,
    });
    ShaderModule::new(vec![Declaration::Struct(StructDecl {
        name: String::from("Weights"),
        members: vec![StructMember::new("values", broken, vec![])],
        loc: SourceLoc::new(40),
    })])
}

fn array_missing_element() -> ShaderModule {
    let broken = TypeDecl::Array(ArrayType {
        element_type: None,
        element_count: Some(Box::new(int(4))),
    });
    ShaderModule::new(vec![Declaration::Function(function(
        "f",
        vec![Parameter::new("values", broken, vec![])],
        TypeDecl::named("void"),
        vec![],
    ))])
}

fn matrix_member() -> ShaderModule {
    ShaderModule::new(vec![Declaration::Struct(StructDecl::new(
        "Uniforms",
        vec![StructMember::new(
            "transform",
            TypeDecl::parameterized(ParameterizedBase::Mat4x4, f32_ty()),
            vec![],
        )],
    ))])
}

fn indexed_array_constructor() -> ShaderModule {
    let ty = TypeDecl::array(f32_ty(), int(2));
    let constructor = Expression::call(ty, vec![float(1.0), float(2.0)]);
    ShaderModule::new(vec![Declaration::Function(function(
        "pick",
        vec![Parameter::new("i", TypeDecl::named("i32"), vec![])],
        f32_ty(),
        vec![Statement::ret(Some(Expression::index(constructor, Expression::ident("i"))))],
    ))])
}

fn unknown_builtin() -> ShaderModule {
    ShaderModule::new(vec![Declaration::Function(
        function(
            "vs_main",
            vec![Parameter::new("p", TypeDecl::named("u32"), vec![Attribute::builtin("draw_index")])],
            vec_ty(4),
            vec![],
        )
        .with_attributes(vec![Attribute::Stage(Stage::Vertex)]),
    )])
}

fn missing_return_type() -> ShaderModule {
    let mut broken = function("broken", vec![], TypeDecl::named("void"), vec![]);
    broken.return_type = None;
    ShaderModule::new(vec![Declaration::Function(broken)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_builds() {
        for name in FIXTURE_NAMES {
            assert!(fixture(name).is_some(), "fixture `{}` missing", name);
        }
        assert!(fixture("no_such_fixture").is_none());
    }
}
