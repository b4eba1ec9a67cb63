//! Metal Shading Language backend.
//!
//! Translates a validated WGSL [`ShaderModule`] into Metal source in a
//! single pass, streaming text straight into the caller's buffer, and
//! reports which functions are the pipeline entry points.
//!
//! Output conventions:
//! - four spaces per nesting level
//! - attributes in `[[...]]` form (`[[vertex]]`, `[[position]]`,
//!   `[[attribute(0)]]`)
//! - a blank line after every top-level definition

#![no_std]

extern crate alloc;

mod attributes;
mod decl;
mod entry_points;
mod error;
mod expr;
mod indent;
pub mod literal;
mod names;
mod stmt;
mod types;
mod writer;

use alloc::string::String;

pub use attributes::{stage_qualifier, translate_builtin};
pub use entry_points::EntryPoints;
pub use error::{CodegenError, CodegenResult, NodeContext};
pub use indent::INDENT_WIDTH;
pub use names::{is_reserved, Namer};
pub use types::translate_scalar_name;
pub use writer::MetalWriter;
use wgslc_ast::ShaderModule;

/// Append the Metal rendering of `module` to `out`.
///
/// On error `out` may hold a partial rendering and should be discarded.
pub fn emit_metal_functions(out: &mut String, module: &ShaderModule) -> CodegenResult<EntryPoints> {
    let mut writer = MetalWriter::new(out);
    writer.write_module(module)?;
    Ok(writer.finish())
}

/// Render `module` into a fresh buffer.
pub fn render_metal_functions(module: &ShaderModule) -> CodegenResult<(String, EntryPoints)> {
    let mut out = String::new();
    let entry_points = emit_metal_functions(&mut out, module)?;
    Ok((out, entry_points))
}
