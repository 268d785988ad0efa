//! Generic formal-parameter slots.
//!
//! A placeholder stands in for one parameter of a function definition. There
//! are [`PLACEHOLDER_SLOTS`] slots for every (kind, shape) pair, and each slot
//! has a fixed label such as `s_i32_3` or `m_fp16b_0`, so two definitions
//! using the same slot agree on the parameter name.

use std::fmt;

use crate::PrimKind;

/// Slots per (kind, shape) combination.
pub const PLACEHOLDER_SLOTS: u8 = 8;

/// Number of entries in [`PLACEHOLDERS`].
pub const PLACEHOLDER_COUNT: usize =
    PrimKind::ALL.len() * SlotShape::ALL.len() * PLACEHOLDER_SLOTS as usize;

/// Storage shape of a placeholder parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotShape {
    Scalar,
    Array,
    Matrix,
}

impl SlotShape {
    /// Every shape, in declaration order.
    pub const ALL: [SlotShape; 3] = [SlotShape::Scalar, SlotShape::Array, SlotShape::Matrix];

    const fn prefix(self) -> &'static str {
        match self {
            SlotShape::Scalar => "s",
            SlotShape::Array => "a",
            SlotShape::Matrix => "m",
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            SlotShape::Scalar => "",
            SlotShape::Array => " []",
            SlotShape::Matrix => " [][]",
        }
    }
}

/// One formal-parameter slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placeholder {
    kind: PrimKind,
    shape: SlotShape,
    ordinal: u8,
}

impl Placeholder {
    /// Look up a slot. Returns `None` when `ordinal` is outside `0..8`.
    pub const fn new(kind: PrimKind, shape: SlotShape, ordinal: u8) -> Option<Self> {
        if ordinal < PLACEHOLDER_SLOTS {
            Some(Placeholder {
                kind,
                shape,
                ordinal,
            })
        } else {
            None
        }
    }

    /// Get the element kind.
    #[inline]
    pub const fn kind(self) -> PrimKind {
        self.kind
    }

    /// Get the storage shape.
    #[inline]
    pub const fn shape(self) -> SlotShape {
        self.shape
    }

    /// Get the slot number within its (kind, shape) group.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self.ordinal
    }

    /// Identifier used for the parameter, e.g. `a_u32_1`.
    pub fn label(self) -> String {
        self.to_string()
    }

    /// Formal parameter text: `uint32_t a_u32_1 []`.
    pub fn param_text(self) -> String {
        format!("{} {}{}", self.kind.keyword(), self.label(), self.shape.suffix())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.shape.prefix(),
            self.kind.short_name(),
            self.ordinal
        )
    }
}

/// Every placeholder slot, ordered by kind, then shape, then ordinal.
pub static PLACEHOLDERS: [Placeholder; PLACEHOLDER_COUNT] = build_catalog();

#[allow(clippy::cast_possible_truncation)]
const fn build_catalog() -> [Placeholder; PLACEHOLDER_COUNT] {
    let per_kind = SlotShape::ALL.len() * PLACEHOLDER_SLOTS as usize;
    let mut out = [Placeholder {
        kind: PrimKind::I8,
        shape: SlotShape::Scalar,
        ordinal: 0,
    }; PLACEHOLDER_COUNT];
    let mut i = 0;
    while i < PLACEHOLDER_COUNT {
        out[i] = Placeholder {
            kind: PrimKind::ALL[i / per_kind],
            shape: SlotShape::ALL[(i / PLACEHOLDER_SLOTS as usize) % SlotShape::ALL.len()],
            ordinal: (i % PLACEHOLDER_SLOTS as usize) as u8,
        };
        i += 1;
    }
    out
}
