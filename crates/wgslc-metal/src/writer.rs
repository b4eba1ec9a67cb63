//! The writer that streams Metal source into a caller-owned buffer.
//!
//! Emission is split by concern across `decl`, `stmt`, `expr`, `types` and
//! `attributes`, each adding methods to [`MetalWriter`]. The writer is the
//! only mutable state of a translation: the output buffer, the indentation
//! depth, the identifier spellings, the path of enclosing nodes used for
//! diagnostics, and the entry points seen so far.

use alloc::{format, string::String, vec::Vec};

use wgslc_ast::SourceLoc;

use crate::{
    entry_points::EntryPoints,
    error::{CodegenResult, NodeContext},
    indent::Indentation,
    names::Namer,
};

/// One enclosing node on the diagnostic path.
#[derive(Debug, Clone)]
struct Frame {
    kind: &'static str,
    name: String,
    loc: SourceLoc,
}

pub struct MetalWriter<'a> {
    pub(crate) out: &'a mut String,
    pub(crate) indent: Indentation,
    pub(crate) entry_points: EntryPoints,
    pub(crate) namer: Namer,
    frames: Vec<Frame>,
}

impl<'a> MetalWriter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self {
            out,
            indent: Indentation::default(),
            entry_points: EntryPoints::default(),
            namer: Namer::default(),
            frames: Vec::new(),
        }
    }

    /// Finish writing and return the entry points found.
    pub fn finish(self) -> EntryPoints {
        self.entry_points
    }

    /// Run `f` one indentation level deeper. The level is restored even
    /// when `f` fails.
    pub(crate) fn indented<F>(&mut self, f: F) -> CodegenResult<()>
    where
        F: FnOnce(&mut Self) -> CodegenResult<()>,
    {
        self.indent.push();
        let result = f(self);
        self.indent.pop();
        result
    }

    /// Run `f` with `kind name` pushed on the diagnostic path.
    pub(crate) fn within<F>(&mut self, kind: &'static str, name: &str, loc: SourceLoc, f: F) -> CodegenResult<()>
    where
        F: FnOnce(&mut Self) -> CodegenResult<()>,
    {
        self.frames.push(Frame {
            kind,
            name: String::from(name),
            loc,
        });
        let result = f(self);
        self.frames.pop();
        result
    }

    /// Describe the node currently being emitted.
    pub(crate) fn context(&self) -> NodeContext {
        let path = self
            .frames
            .iter()
            .map(|frame| format!("{} `{}`", frame.kind, frame.name))
            .collect::<Vec<_>>()
            .join(" > ");
        let loc = self
            .frames
            .iter()
            .rev()
            .map(|frame| frame.loc)
            .find(|loc| !loc.is_default())
            .unwrap_or_default();
        NodeContext { path, loc }
    }
}

/// Render whatever `f` writes into a fresh buffer.
#[cfg(test)]
pub(crate) fn render_with<F>(f: F) -> CodegenResult<String>
where
    F: FnOnce(&mut MetalWriter<'_>) -> CodegenResult<()>,
{
    let mut out = String::new();
    let mut writer = MetalWriter::new(&mut out);
    f(&mut writer)?;
    Ok(out)
}
