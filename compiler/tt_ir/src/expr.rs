//! Expression nodes.

use smallvec::SmallVec;

use crate::{BinaryOp, ExprId, ExprRange, FunctionDecl, UnaryOp, Variable};

/// One node of an expression tree. Children are arena ids.
///
/// Assignment and declaration are expressions, so `declare(x) = e` is a
/// single `Assign` whose target is a `Declaration`.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Variable(Variable),
    /// Declares the variable node it points at.
    Declaration(ExprId),
    Assign {
        target: ExprId,
        value: ExprId,
    },
    Index {
        base: ExprId,
        index: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Call {
        decl: FunctionDecl,
        args: ExprRange,
    },
}

impl ExprKind {
    /// Direct children stored inline in the node. Call arguments live in
    /// the arena's list storage and are not included.
    pub fn inline_children(&self) -> SmallVec<[ExprId; 2]> {
        match *self {
            ExprKind::Variable(_) | ExprKind::Call { .. } => SmallVec::new(),
            ExprKind::Declaration(id) | ExprKind::Unary { operand: id, .. } => {
                smallvec::smallvec![id]
            }
            ExprKind::Assign {
                target: a,
                value: b,
            }
            | ExprKind::Index { base: a, index: b }
            | ExprKind::Binary {
                left: a, right: b, ..
            } => smallvec::smallvec![a, b],
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            ExprKind::Variable(v) => Some(v),
            _ => None,
        }
    }
}
