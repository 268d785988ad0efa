//! Primitive element kinds.

use std::fmt;

/// The 13 element kinds a kernel variable can hold.
///
/// Each kind knows its type keyword in the target dialect and the short
/// name used when deriving placeholder labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    /// Half precision, format A. Carried as raw bits.
    Fp16a,
    /// Half precision, format B (bfloat16). Carried as raw bits.
    Fp16b,
    F32,
    F64,
    Bool,
}

impl PrimKind {
    /// Every kind, in declaration order.
    pub const ALL: [PrimKind; 13] = [
        PrimKind::I8,
        PrimKind::I16,
        PrimKind::I32,
        PrimKind::I64,
        PrimKind::U8,
        PrimKind::U16,
        PrimKind::U32,
        PrimKind::U64,
        PrimKind::Fp16a,
        PrimKind::Fp16b,
        PrimKind::F32,
        PrimKind::F64,
        PrimKind::Bool,
    ];

    /// Type keyword used in declarations.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimKind::I8 => "int8_t",
            PrimKind::I16 => "int16_t",
            PrimKind::I32 => "int32_t",
            PrimKind::I64 => "int64_t",
            PrimKind::U8 => "uint8_t",
            PrimKind::U16 | PrimKind::Fp16a | PrimKind::Fp16b => "uint16_t",
            PrimKind::U32 => "uint32_t",
            PrimKind::U64 => "uint64_t",
            PrimKind::F32 => "float",
            PrimKind::F64 => "double",
            PrimKind::Bool => "bool",
        }
    }

    /// Short name used in placeholder labels (`i32`, `fp16b`, ...).
    pub const fn short_name(self) -> &'static str {
        match self {
            PrimKind::I8 => "i8",
            PrimKind::I16 => "i16",
            PrimKind::I32 => "i32",
            PrimKind::I64 => "i64",
            PrimKind::U8 => "u8",
            PrimKind::U16 => "u16",
            PrimKind::U32 => "u32",
            PrimKind::U64 => "u64",
            PrimKind::Fp16a => "fp16a",
            PrimKind::Fp16b => "fp16b",
            PrimKind::F32 => "fp32",
            PrimKind::F64 => "fp64",
            PrimKind::Bool => "bool",
        }
    }
}

impl fmt::Display for PrimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
