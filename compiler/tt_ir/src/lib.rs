//! TT Kernel IR
//!
//! Data types for kernel programs built through the DSL:
//!
//! - [`PrimKind`]: the 13 element kinds and their type keywords
//! - [`Variable`]: named storage (scalar, array, matrix, indirections) or a literal
//! - [`Placeholder`]: pre-enumerated formal-parameter slots
//! - [`ExprKind`] / [`ExprArena`]: expression nodes addressed by [`ExprId`]
//! - [`Stmt`]: statements, which own their bodies
//! - [`FunctionDecl`]: callable signatures
//!
//! Nothing here renders text beyond declaration fragments; see `tt_codegen`.

mod arena;
mod expr;
mod expr_id;
mod function;
mod kind;
mod literal;
mod operators;
mod placeholder;
mod stmt;
mod variable;

pub use arena::ExprArena;
pub use expr::ExprKind;
pub use expr_id::{ExprId, ExprRange};
pub use function::{FunctionDecl, ValueForm, ValueType};
pub use kind::PrimKind;
pub use literal::Literal;
pub use operators::{BinaryOp, UnaryOp};
pub use placeholder::{Placeholder, SlotShape, PLACEHOLDERS, PLACEHOLDER_COUNT, PLACEHOLDER_SLOTS};
pub use stmt::{Branch, IncludePath, Stmt, SwitchCase};
pub use variable::{Dims, Variable};
