//! Numeric literal spelling.
//!
//! Every function here produces text that a Metal compiler reads back as
//! exactly the stored value:
//! - integers whose magnitude has no positive literal form are written as
//!   a parenthesized subtraction
//! - floats use the shortest round-trip decimal, always with a `.` or an
//!   exponent so the `f` suffix is legal
//! - Metal has no `double`, so abstract floats are narrowed to `f32`

use alloc::{
    format,
    string::{String, ToString},
};

/// `AbstractInt`: `int` when it fits, `long` otherwise.
pub fn abstract_int(value: i64) -> String {
    if value == i64::MIN {
        return String::from("(-9223372036854775807L - 1)");
    }
    match i32::try_from(value) {
        Ok(narrow) => int32(narrow),
        Err(_) => format!("{}L", value),
    }
}

pub fn int32(value: i32) -> String {
    if value == i32::MIN {
        // `-2147483648` is unary minus applied to a `long`.
        return String::from("(-2147483647 - 1)");
    }
    value.to_string()
}

pub fn uint32(value: u32) -> String {
    format!("{}u", value)
}

/// `None` for NaN and infinities, which have no literal form.
pub fn float32(value: f32) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    // Debug is the shortest representation that parses back to the same
    // bits, and never prints a bare integer.
    Some(format!("{:?}f", value))
}

/// `None` if the value is not finite as an `f32`.
pub fn abstract_float(value: f64) -> Option<String> {
    float32(value as f32)
}

pub fn boolean(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
