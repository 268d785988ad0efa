//! Kernel Source Renderer
//!
//! Turns statement lists over an [`ExprArena`] into kernel C source in a
//! single pass.
//!
//! ```text
//! ExprArena + [Stmt]
//!        ↓
//!   CodegenContext   (indentation, depth limit, diagnostics)
//!        ↓
//!   emit_stmt / emit_expr
//!        ↓
//!   CodegenOutput    (source text + builder diagnostics)
//! ```
//!
//! Every node kind has a rendering; a tree that cannot be rendered (dangling
//! ids, cycles, declaring a literal) fails with a [`CodegenError`] instead of
//! producing partial text.

pub mod c;
mod context;
mod error;
mod options;
mod stack;

use tt_ir::{ExprArena, ExprId, Stmt};

pub use context::CodegenContext;
pub use error::{CodegenError, Diagnostic};
pub use options::{CodegenOptions, DEFAULT_INDENT_WIDTH, DEFAULT_MAX_DEPTH};

/// Rendered source plus whatever misuse was noticed along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodegenOutput {
    pub code: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Render `stmts` in order into one source text.
pub fn render(
    arena: &ExprArena,
    stmts: &[Stmt],
    options: CodegenOptions,
) -> Result<CodegenOutput, CodegenError> {
    let mut ctx = CodegenContext::new(arena, options);
    for stmt in stmts {
        c::emit_stmt(&mut ctx, stmt)?;
    }
    debug_assert_eq!(ctx.indent_level(), 0, "unbalanced indentation");
    Ok(CodegenOutput {
        code: ctx.take_output(),
        diagnostics: ctx.take_diagnostics(),
    })
}

/// Render a single expression with default options.
pub fn render_expr(arena: &ExprArena, id: ExprId) -> Result<String, CodegenError> {
    c::emit_expr(arena, id, DEFAULT_MAX_DEPTH)
}

#[cfg(test)]
mod tests;
