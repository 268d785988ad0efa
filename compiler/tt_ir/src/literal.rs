//! Constant values attached to expression leaves.

use std::fmt;

use crate::PrimKind;

/// A constant of one primitive kind.
///
/// Half-precision kinds carry their raw 16-bit pattern; the target dialect
/// has no native literal syntax for them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Literal {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Fp16a(u16),
    Fp16b(u16),
    F32(f32),
    F64(f64),
    Bool(bool),
}

impl Literal {
    pub const fn kind(self) -> PrimKind {
        match self {
            Literal::I8(_) => PrimKind::I8,
            Literal::I16(_) => PrimKind::I16,
            Literal::I32(_) => PrimKind::I32,
            Literal::I64(_) => PrimKind::I64,
            Literal::U8(_) => PrimKind::U8,
            Literal::U16(_) => PrimKind::U16,
            Literal::U32(_) => PrimKind::U32,
            Literal::U64(_) => PrimKind::U64,
            Literal::Fp16a(_) => PrimKind::Fp16a,
            Literal::Fp16b(_) => PrimKind::Fp16b,
            Literal::F32(_) => PrimKind::F32,
            Literal::F64(_) => PrimKind::F64,
            Literal::Bool(_) => PrimKind::Bool,
        }
    }
}

/// Renders the literal as target-dialect text.
///
/// Integers print in decimal. Floats use the shortest text that parses back
/// to the same value, so no precision is lost; `f32` values get an `f`
/// suffix. Non-finite values map to the `NAN`/`INFINITY` macros.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Literal::I8(v) => write!(f, "{v}"),
            Literal::I16(v) => write!(f, "{v}"),
            Literal::I32(v) => write!(f, "{v}"),
            Literal::I64(v) => write!(f, "{v}"),
            Literal::U8(v) => write!(f, "{v}"),
            Literal::U16(v) | Literal::Fp16a(v) | Literal::Fp16b(v) => write!(f, "{v}"),
            Literal::U32(v) => write!(f, "{v}"),
            Literal::U64(v) => write!(f, "{v}"),
            Literal::F32(v) => {
                if v.is_finite() {
                    write!(f, "{v:?}f")
                } else {
                    write_non_finite(f, v.is_nan(), v.is_sign_negative())
                }
            }
            Literal::F64(v) => {
                if v.is_finite() {
                    write!(f, "{v:?}")
                } else {
                    write_non_finite(f, v.is_nan(), v.is_sign_negative())
                }
            }
            Literal::Bool(v) => f.write_str(if v { "true" } else { "false" }),
        }
    }
}

fn write_non_finite(f: &mut fmt::Formatter<'_>, nan: bool, negative: bool) -> fmt::Result {
    if nan {
        f.write_str("NAN")
    } else if negative {
        f.write_str("-INFINITY")
    } else {
        f.write_str("INFINITY")
    }
}

macro_rules! impl_from_native {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for Literal {
                #[inline]
                fn from(v: $native) -> Self {
                    Literal::$variant(v)
                }
            }
        )*
    };
}

impl_from_native! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

#[cfg(test)]
mod tests;
