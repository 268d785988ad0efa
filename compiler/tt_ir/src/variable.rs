//! Storage leaves of the expression tree.

use std::fmt::Write;

use smallvec::SmallVec;

use crate::{Literal, Placeholder, PrimKind};

/// Matrix dimensions, in declared order.
pub type Dims = SmallVec<[usize; 4]>;

/// A reference to storage, or a constant.
///
/// Named shapes never carry a value and `Literal` never carries a name.
#[derive(Clone, Debug, PartialEq)]
pub enum Variable {
    Scalar { kind: PrimKind, name: String },
    Literal(Literal),
    Array { kind: PrimKind, name: String, len: usize },
    Matrix { kind: PrimKind, name: String, dims: Dims },
    /// Indirection over a named shape.
    Pointer(Box<Variable>),
    Reference(Box<Variable>),
    /// A formal parameter slot of the enclosing function definition.
    Placeholder(Placeholder),
}

impl Variable {
    pub fn scalar(kind: PrimKind, name: impl Into<String>) -> Self {
        Variable::Scalar {
            kind,
            name: name.into(),
        }
    }

    pub fn array(kind: PrimKind, name: impl Into<String>, len: usize) -> Self {
        Variable::Array {
            kind,
            name: name.into(),
            len,
        }
    }

    pub fn matrix(
        kind: PrimKind,
        name: impl Into<String>,
        dims: impl IntoIterator<Item = usize>,
    ) -> Self {
        Variable::Matrix {
            kind,
            name: name.into(),
            dims: dims.into_iter().collect(),
        }
    }

    pub fn pointer(inner: Variable) -> Self {
        Variable::Pointer(Box::new(inner))
    }

    pub fn reference(inner: Variable) -> Self {
        Variable::Reference(Box::new(inner))
    }

    /// Element kind. Indirections report their pointee's kind.
    pub fn kind(&self) -> PrimKind {
        match self {
            Variable::Scalar { kind, .. }
            | Variable::Array { kind, .. }
            | Variable::Matrix { kind, .. } => *kind,
            Variable::Literal(lit) => lit.kind(),
            Variable::Pointer(inner) | Variable::Reference(inner) => inner.kind(),
            Variable::Placeholder(p) => p.kind(),
        }
    }

    /// Declared identifier. `None` for literals and placeholders, whose
    /// text is a value or a derived label rather than a stored name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Variable::Scalar { name, .. }
            | Variable::Array { name, .. }
            | Variable::Matrix { name, .. } => Some(name),
            Variable::Pointer(inner) | Variable::Reference(inner) => inner.name(),
            Variable::Literal(_) | Variable::Placeholder(_) => None,
        }
    }

    /// Human-readable shape, used in diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Variable::Scalar { .. } => "scalar",
            Variable::Literal(_) => "literal",
            Variable::Array { .. } => "array",
            Variable::Matrix { .. } => "matrix",
            Variable::Pointer(_) => "pointer",
            Variable::Reference(_) => "reference",
            Variable::Placeholder(_) => "placeholder",
        }
    }

    /// Declaration text, e.g. `int32_t b [10]`.
    ///
    /// Returns `None` for a literal, or an indirection over one, since
    /// neither names any storage. A matrix with no dimensions renders no
    /// brackets at all.
    pub fn declaration(&self) -> Option<String> {
        match self {
            Variable::Scalar { kind, name } => Some(format!("{} {name}", kind.keyword())),
            Variable::Array { kind, name, len } => {
                Some(format!("{} {name} [{len}]", kind.keyword()))
            }
            Variable::Matrix { kind, name, dims } => {
                let mut text = format!("{} {name}", kind.keyword());
                if !dims.is_empty() {
                    text.push(' ');
                    for d in dims {
                        let _ = write!(text, "[{d}]");
                    }
                }
                Some(text)
            }
            Variable::Pointer(inner) | Variable::Reference(inner) => {
                let name = inner.name()?;
                Some(format!("{} * {name}", inner.kind().keyword()))
            }
            Variable::Placeholder(p) => Some(p.param_text()),
            Variable::Literal(_) => None,
        }
    }

    /// Text used when the variable appears inside an expression.
    pub fn reference_text(&self) -> String {
        match self {
            Variable::Literal(lit) => lit.to_string(),
            Variable::Placeholder(p) => p.label(),
            other => other.name().unwrap_or_default().to_owned(),
        }
    }
}

impl From<Literal> for Variable {
    fn from(lit: Literal) -> Self {
        Variable::Literal(lit)
    }
}

impl From<Placeholder> for Variable {
    fn from(p: Placeholder) -> Self {
        Variable::Placeholder(p)
    }
}

#[cfg(test)]
mod tests;
