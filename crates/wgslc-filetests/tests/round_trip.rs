//! Emitted literals and initializers read back as the values they encode.

use proptest::prelude::*;
use wgslc_ast::{Declaration, Expression, ShaderModule, TypeDecl, VariableDecl};
use wgslc_filetests::{parse_aggregate, parse_literal, Element, MetalLiteral};
use wgslc_metal::{literal, render_metal_functions};

fn finite_f32() -> impl Strategy<Value = f32> {
    any::<f32>().prop_filter("finite", |v| v.is_finite())
}

/// The initializer text of `constant array<f32, N> values = ...;`.
fn render_array(values: &[f32]) -> String {
    let ty = TypeDecl::array(TypeDecl::named("f32"), Expression::AbstractIntLiteral(values.len() as i64));
    let init = Expression::call(ty.clone(), values.iter().copied().map(Expression::Float32Literal).collect());
    let module = ShaderModule::new(vec![Declaration::Variable(VariableDecl::new("values", Some(ty), Some(init)))]);
    let (out, _) = render_metal_functions(&module).unwrap();
    let start = out.find(" = ").unwrap() + 3;
    let end = out.rfind(";\n\n").unwrap();
    out[start..end].to_string()
}

proptest! {
    #[test]
    fn float32_reads_back_exactly(value in finite_f32()) {
        let text = literal::float32(value).unwrap();
        match parse_literal(&text) {
            Ok(MetalLiteral::Float(read)) => prop_assert_eq!(read.to_bits(), value.to_bits()),
            other => prop_assert!(false, "`{}` read as {:?}", text, other),
        }
    }

    #[test]
    fn int32_reads_back_exactly(value in any::<i32>()) {
        let text = literal::int32(value);
        prop_assert_eq!(parse_literal(&text), Ok(MetalLiteral::Int(value as i64)));
    }

    #[test]
    fn abstract_int_reads_back_exactly(value in any::<i64>()) {
        let text = literal::abstract_int(value);
        prop_assert_eq!(parse_literal(&text), Ok(MetalLiteral::Int(value)));
    }

    #[test]
    fn uint32_reads_back_exactly(value in any::<u32>()) {
        let text = literal::uint32(value);
        prop_assert_eq!(parse_literal(&text), Ok(MetalLiteral::Uint(value as u64)));
    }

    #[test]
    fn array_initializer_keeps_elements_in_order(values in prop::collection::vec(finite_f32(), 0..8)) {
        let text = render_array(&values);
        let elements = parse_aggregate(&text).unwrap();
        prop_assert_eq!(elements.len(), values.len());
        for (element, value) in elements.iter().zip(&values) {
            let Element::Text(text) = element else {
                return Err(TestCaseError::fail(format!("nested aggregate for {}", value)));
            };
            match parse_literal(text) {
                Ok(MetalLiteral::Float(read)) => prop_assert_eq!(read.to_bits(), value.to_bits()),
                other => prop_assert!(false, "`{}` read as {:?}", text, other),
            }
        }
    }
}

#[test]
fn nested_array_initializer() {
    let inner_ty = TypeDecl::array(TypeDecl::named("i32"), Expression::AbstractIntLiteral(2));
    let outer_ty = TypeDecl::array(inner_ty.clone(), Expression::AbstractIntLiteral(2));
    let row = |a: i32, b: i32| {
        Expression::call(inner_ty.clone(), vec![Expression::Int32Literal(a), Expression::Int32Literal(b)])
    };
    let module = ShaderModule::new(vec![Declaration::Variable(VariableDecl::new(
        "grid",
        Some(outer_ty.clone()),
        Some(Expression::call(outer_ty, vec![row(1, 2), row(3, i32::MIN)])),
    ))]);
    let (out, _) = render_metal_functions(&module).unwrap();
    let start = out.find(" = ").unwrap() + 3;
    let end = out.rfind(";\n\n").unwrap();

    let text = |s: &str| Element::Text(s.to_string());
    assert_eq!(
        parse_aggregate(&out[start..end]),
        Ok(vec![
            Element::Aggregate(vec![text("1"), text("2")]),
            Element::Aggregate(vec![text("3"), text("(-2147483647 - 1)")]),
        ])
    );
}
