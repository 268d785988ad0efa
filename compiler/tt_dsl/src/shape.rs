//! Requested shapes for new symbols.

use tt_ir::{PrimKind, Variable};

/// What `instance` should create under a fresh name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VarShape {
    Scalar(PrimKind),
    Array(PrimKind, usize),
    Matrix(PrimKind, Vec<usize>),
    Pointer(Box<VarShape>),
    Reference(Box<VarShape>),
}

impl VarShape {
    pub fn pointer(inner: VarShape) -> Self {
        VarShape::Pointer(Box::new(inner))
    }

    pub fn reference(inner: VarShape) -> Self {
        VarShape::Reference(Box::new(inner))
    }

    pub fn into_variable(self, name: &str) -> Variable {
        match self {
            VarShape::Scalar(kind) => Variable::scalar(kind, name),
            VarShape::Array(kind, len) => Variable::array(kind, name, len),
            VarShape::Matrix(kind, dims) => Variable::matrix(kind, name, dims),
            VarShape::Pointer(inner) => Variable::pointer(inner.into_variable(name)),
            VarShape::Reference(inner) => Variable::reference(inner.into_variable(name)),
        }
    }
}

/// Short description for logs and errors, e.g. `i32 array [4]`.
pub(crate) fn describe(var: &Variable) -> String {
    match var {
        Variable::Array { len, .. } => format!("{} array [{len}]", var.kind()),
        Variable::Matrix { dims, .. } => format!("{} matrix {dims:?}", var.kind()),
        Variable::Pointer(inner) | Variable::Reference(inner) => {
            format!("{} to {}", var.shape_name(), describe(inner))
        }
        _ => format!("{} {}", var.kind(), var.shape_name()),
    }
}
