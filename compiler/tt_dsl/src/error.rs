use std::fmt;

use tt_ir::ExprId;

/// Symbol table misuse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolError {
    /// `try_instance` asked for a name that already exists with another
    /// shape or kind.
    ShapeMismatch {
        name: String,
        existing: String,
        requested: String,
    },
    /// The handle does not point at a variable leaf.
    NotAVariable { id: ExprId },
    /// The handle belongs to a different context.
    ForeignHandle { id: ExprId },
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolError::ShapeMismatch {
                name,
                existing,
                requested,
            } => write!(
                f,
                "`{name}` is already declared as {existing}, cannot redeclare as {requested}"
            ),
            SymbolError::NotAVariable { id } => write!(f, "expression {id} is not a variable"),
            SymbolError::ForeignHandle { id } => {
                write!(f, "expression {id} belongs to another kernel context")
            }
        }
    }
}

impl std::error::Error for SymbolError {}
