//! Function signatures used by call nodes and function definitions.

use std::borrow::Cow;
use std::fmt;

use crate::PrimKind;

/// Storage form of a parameter or return value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueForm {
    Scalar,
    Array,
    Matrix,
    Pointer,
}

/// Kind plus form, e.g. `uint32_t *`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValueType {
    pub kind: PrimKind,
    pub form: ValueForm,
}

impl ValueType {
    pub const fn scalar(kind: PrimKind) -> Self {
        ValueType {
            kind,
            form: ValueForm::Scalar,
        }
    }

    pub const fn array(kind: PrimKind) -> Self {
        ValueType {
            kind,
            form: ValueForm::Array,
        }
    }

    pub const fn matrix(kind: PrimKind) -> Self {
        ValueType {
            kind,
            form: ValueForm::Matrix,
        }
    }

    pub const fn pointer(kind: PrimKind) -> Self {
        ValueType {
            kind,
            form: ValueForm::Pointer,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.kind.keyword();
        match self.form {
            ValueForm::Scalar => f.write_str(keyword),
            ValueForm::Array => write!(f, "{keyword} []"),
            ValueForm::Matrix => write!(f, "{keyword} [][]"),
            ValueForm::Pointer => write!(f, "{keyword} *"),
        }
    }
}

/// Name, parameter types and return type of a callable.
///
/// Built-in intrinsics are `const` values borrowing static data; user
/// functions own theirs. A missing return type means `void`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionDecl {
    name: Cow<'static, str>,
    params: Cow<'static, [ValueType]>,
    ret: Option<ValueType>,
}

impl FunctionDecl {
    /// Entry point every kernel defines.
    pub const KERNEL_MAIN: FunctionDecl = FunctionDecl::builtin("kernel_main", &[], None);

    pub const fn builtin(
        name: &'static str,
        params: &'static [ValueType],
        ret: Option<ValueType>,
    ) -> Self {
        FunctionDecl {
            name: Cow::Borrowed(name),
            params: Cow::Borrowed(params),
            ret,
        }
    }

    pub fn new(name: impl Into<String>, params: Vec<ValueType>, ret: Option<ValueType>) -> Self {
        FunctionDecl {
            name: Cow::Owned(name.into()),
            params: Cow::Owned(params),
            ret,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn params(&self) -> &[ValueType] {
        &self.params
    }

    #[inline]
    pub fn ret(&self) -> Option<ValueType> {
        self.ret
    }

    /// Return type keyword, `void` when there is none.
    pub fn return_text(&self) -> String {
        self.ret.map_or_else(|| "void".to_string(), |t| t.to_string())
    }
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_text(), self.name)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str(")")
    }
}
