//! Statement nodes.
//!
//! Statements own their bodies directly; only expressions live in the
//! arena.

use std::fmt;

use crate::{ExprId, FunctionDecl, Placeholder};

/// Target of an include directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IncludePath {
    /// `#include <cstdint>`
    System(String),
    /// `#include "dataflow_api.h"`
    Local(String),
}

impl fmt::Display for IncludePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludePath::System(path) => write!(f, "<{path}>"),
            IncludePath::Local(path) => write!(f, "\"{path}\""),
        }
    }
}

/// One arm of an `if` chain. The arm without a condition is the `else`.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub cond: Option<ExprId>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchCase {
    pub value: ExprId,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// An expression terminated with `;`.
    Expr(ExprId),
    For {
        init: ExprId,
        cond: ExprId,
        step: ExprId,
        body: Vec<Stmt>,
    },
    While {
        cond: ExprId,
        body: Vec<Stmt>,
    },
    If {
        branches: Vec<Branch>,
    },
    Switch {
        subject: ExprId,
        cases: Vec<SwitchCase>,
        default: Option<Vec<Stmt>>,
    },
    FunctionDef {
        decl: FunctionDecl,
        params: Vec<Placeholder>,
        body: Vec<Stmt>,
    },
    Comment(String),
    Include(IncludePath),
}

impl Stmt {
    /// Name of the construct, used in empty-body diagnostics.
    pub fn construct_name(&self) -> &'static str {
        match self {
            Stmt::Expr(_) => "expression",
            Stmt::For { .. } => "for",
            Stmt::While { .. } => "while",
            Stmt::If { .. } => "if",
            Stmt::Switch { .. } => "switch",
            Stmt::FunctionDef { .. } => "function",
            Stmt::Comment(_) => "comment",
            Stmt::Include(_) => "include",
        }
    }
}
