//! Reading emitted Metal text back into values.
//!
//! Only the shapes the backend produces are accepted: literal spellings from
//! `wgslc_metal::literal` and the multi-line brace initializers written for
//! array constructors.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    multi::{many0, many1},
    number::complete::recognize_float,
    sequence::{delimited, pair, terminated, tuple},
    IResult,
};

/// A scalar literal as Metal would read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetalLiteral {
    /// `int` or `long`.
    Int(i64),
    Uint(u64),
    Float(f32),
    Bool(bool),
}

/// One element of a brace initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Any non-aggregate expression, verbatim.
    Text(String),
    Aggregate(Vec<Element>),
}

/// Error from the reader, with the byte offset where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    pub message: String,
    pub position: usize,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read error at position {}: {}", self.position, self.message)
    }
}

impl std::error::Error for ReadError {}

fn read_error(input: &str, err: nom::Err<nom::error::Error<&str>>, message: &str) -> ReadError {
    let position = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => input.len() - e.input.len(),
        nom::Err::Incomplete(_) => input.len(),
    };
    ReadError {
        message: String::from(message),
        position,
    }
}

/// Parse a complete literal, e.g. `42`, `7u`, `(-2147483647 - 1)`, `1.5f`.
pub fn parse_literal(input: &str) -> Result<MetalLiteral, ReadError> {
    all_consuming(literal)(input)
        .map(|(_, literal)| literal)
        .map_err(|err| read_error(input, err, "expected a Metal literal"))
}

/// Parse a complete brace initializer.
pub fn parse_aggregate(input: &str) -> Result<Vec<Element>, ReadError> {
    all_consuming(delimited(multispace0, aggregate, multispace0))(input)
        .map(|(_, elements)| elements)
        .map_err(|err| read_error(input, err, "expected a brace initializer"))
}

fn literal(input: &str) -> IResult<&str, MetalLiteral> {
    alt((
        map(min_integer, MetalLiteral::Int),
        map(float, MetalLiteral::Float),
        map(unsigned, MetalLiteral::Uint),
        map(integer, MetalLiteral::Int),
        value(MetalLiteral::Bool(true), tag("true")),
        value(MetalLiteral::Bool(false), tag("false")),
    ))(input)
}

/// Signed decimal digits with an optional `L` suffix.
fn integer(input: &str) -> IResult<&str, i64> {
    terminated(
        map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| s.parse::<i64>()),
        opt(char('L')),
    )(input)
}

/// `(-N - 1)`, the spelling of the most negative `int` and `long`.
fn min_integer(input: &str) -> IResult<&str, i64> {
    map_res(
        delimited(char('('), integer, tag(" - 1)")),
        |n: i64| n.checked_sub(1).ok_or("integer underflow"),
    )(input)
}

fn unsigned(input: &str) -> IResult<&str, u64> {
    terminated(map_res(digit1, |s: &str| s.parse::<u64>()), char('u'))(input)
}

/// A float needs a `.` or an exponent before its `f` suffix.
fn float(input: &str) -> IResult<&str, f32> {
    map_res(
        terminated(recognize_float, char('f')),
        |s: &str| {
            if s.contains(['.', 'e', 'E']) {
                s.parse::<f32>().map_err(|_| "invalid float")
            } else {
                Err("float without `.` or exponent")
            }
        },
    )(input)
}

fn aggregate(input: &str) -> IResult<&str, Vec<Element>> {
    delimited(
        pair(char('{'), multispace0),
        many0(terminated(element, pair(char(','), multispace0))),
        char('}'),
    )(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    alt((map(aggregate, Element::Aggregate), map(text, |s: &str| Element::Text(String::from(s)))))(input)
}

/// Expression text up to the next top-level `,`; parentheses may nest.
fn text(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((parenthesized, take_while1(|c: char| !",(){}\n".contains(c))))))(input)
}

fn parenthesized(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('('),
        many0(alt((parenthesized, take_while1(|c: char| !"()".contains(c))))),
        char(')'),
    )))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(parse_literal("0"), Ok(MetalLiteral::Int(0)));
        assert_eq!(parse_literal("-5"), Ok(MetalLiteral::Int(-5)));
        assert_eq!(parse_literal("1099511627776L"), Ok(MetalLiteral::Int(1 << 40)));
        assert_eq!(parse_literal("(-2147483647 - 1)"), Ok(MetalLiteral::Int(i32::MIN as i64)));
        assert_eq!(parse_literal("(-9223372036854775807L - 1)"), Ok(MetalLiteral::Int(i64::MIN)));
    }

    #[test]
    fn test_unsigned() {
        assert_eq!(parse_literal("4294967295u"), Ok(MetalLiteral::Uint(u32::MAX as u64)));
        assert!(parse_literal("-1u").is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse_literal("1.0f"), Ok(MetalLiteral::Float(1.0)));
        assert_eq!(parse_literal("-0.5f"), Ok(MetalLiteral::Float(-0.5)));
        assert_eq!(parse_literal("1e-7f"), Ok(MetalLiteral::Float(1e-7)));
        assert_eq!(parse_literal("3.4028235e38f"), Ok(MetalLiteral::Float(f32::MAX)));
        // `1f` is not a legal literal.
        assert!(parse_literal("1f").is_err());
        assert!(parse_literal("1.0").is_err());
    }

    #[test]
    fn test_booleans() {
        assert_eq!(parse_literal("true"), Ok(MetalLiteral::Bool(true)));
        assert_eq!(parse_literal("false"), Ok(MetalLiteral::Bool(false)));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse_literal("12 ").unwrap_err();
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_flat_aggregate() {
        let text = "{\n    1.0f,\n    2.0f,\n}";
        assert_eq!(
            parse_aggregate(text),
            Ok(vec![Element::Text("1.0f".into()), Element::Text("2.0f".into())])
        );
    }

    #[test]
    fn test_calls_inside_aggregate() {
        let text = "{\n    float2(0.0f, 0.5f),\n    float2(-0.5f, (-0.5f)),\n}";
        assert_eq!(
            parse_aggregate(text),
            Ok(vec![
                Element::Text("float2(0.0f, 0.5f)".into()),
                Element::Text("float2(-0.5f, (-0.5f))".into()),
            ])
        );
    }

    #[test]
    fn test_nested_aggregate() {
        let text = "{\n    {\n        1,\n    },\n    {\n    },\n}";
        assert_eq!(
            parse_aggregate(text),
            Ok(vec![
                Element::Aggregate(vec![Element::Text("1".into())]),
                Element::Aggregate(vec![]),
            ])
        );
    }

    #[test]
    fn test_unterminated_aggregate() {
        assert!(parse_aggregate("{\n    1,\n").is_err());
    }
}
