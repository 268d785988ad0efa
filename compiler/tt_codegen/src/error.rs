//! Render failures and builder diagnostics.

use std::fmt;

use tt_ir::ExprId;

/// A tree the renderer cannot turn into text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodegenError {
    /// The id does not resolve in the arena being rendered.
    UnknownExpr { id: ExprId },
    /// The node exists but has no textual form in its position.
    UnhandledNode { id: ExprId, reason: &'static str },
    /// A node refers to a child allocated after it. Arena trees only grow
    /// upward, so this means the tree is cyclic or was assembled by hand.
    ForwardReference { parent: ExprId, child: ExprId },
    /// An `if` chain whose first arm has no condition.
    MissingCondition,
    NestingTooDeep { limit: usize },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::UnknownExpr { id } => {
                write!(f, "expression {id} does not exist in this kernel")
            }
            CodegenError::UnhandledNode { id, reason } => {
                write!(f, "unhandled node {id}: {reason}")
            }
            CodegenError::ForwardReference { parent, child } => write!(
                f,
                "expression {parent} refers to later expression {child} (cyclic tree?)"
            ),
            CodegenError::MissingCondition => {
                write!(f, "first arm of an if chain has no condition")
            }
            CodegenError::NestingTooDeep { limit } => {
                write!(f, "nesting exceeds the limit of {limit} levels")
            }
        }
    }
}

impl std::error::Error for CodegenError {}

/// Builder misuse that still renders.
///
/// These are reported next to the output rather than failing the render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A compound statement with nothing in its body.
    EmptyBody { construct: &'static str },
    /// An `if` with no arms at all; nothing is emitted for it.
    EmptyIf,
    /// A `switch` with no cases and no default.
    EmptySwitch,
    /// An `else` arm followed by further arms.
    MisplacedElse { position: usize },
    MultipleElse { count: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptyBody { construct } => write!(f, "empty body in `{construct}`"),
            Diagnostic::EmptyIf => write!(f, "`if` without any branches was skipped"),
            Diagnostic::EmptySwitch => write!(f, "`switch` without cases or default"),
            Diagnostic::MisplacedElse { position } => {
                write!(f, "`else` at position {position} is not the last branch")
            }
            Diagnostic::MultipleElse { count } => {
                write!(f, "`if` chain has {count} `else` branches")
            }
        }
    }
}
