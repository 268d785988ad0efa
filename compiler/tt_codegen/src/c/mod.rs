//! Rendering into the kernel C dialect.

mod expr;
mod function;
mod stmt;

pub use expr::emit_expr;
pub use stmt::emit_stmt;
