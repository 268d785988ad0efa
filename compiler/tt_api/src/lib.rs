//! TT Intrinsic Catalog
//!
//! Signatures of the device-side functions kernels call, as
//! [`FunctionDecl`] constants for building call nodes:
//!
//! ```
//! use tt_api::args::GET_ARG_VAL;
//! use tt_dsl::{args, Brisc, KernelContext, PrimKind};
//!
//! let ctx = KernelContext::<Brisc>::new();
//! let src = ctx.scalar("src_addr", PrimKind::U32);
//! let init = src.declare().assign(ctx.call(&GET_ARG_VAL, args![0]));
//! assert_eq!(init.render().ok().as_deref(), Some("uint32_t src_addr = get_arg_val( 0 )"));
//! ```
//!
//! Calls are not checked against these signatures; the device compiler
//! does that.

use tt_ir::FunctionDecl;

/// Parameter and return types used by the catalog.
mod sig {
    use tt_ir::{PrimKind, ValueType};

    pub(crate) const I32: ValueType = ValueType::scalar(PrimKind::I32);
    pub(crate) const U8: ValueType = ValueType::scalar(PrimKind::U8);
    pub(crate) const U32: ValueType = ValueType::scalar(PrimKind::U32);
    pub(crate) const U64: ValueType = ValueType::scalar(PrimKind::U64);
    pub(crate) const BOOL: ValueType = ValueType::scalar(PrimKind::Bool);
    pub(crate) const U32_PTR: ValueType = ValueType::pointer(PrimKind::U32);
}

/// Declare `IDENT = "name"(PARAMS) -> RET;` constants plus an `ALL` table.
macro_rules! intrinsics {
    (@ret) => { None };
    (@ret $ret:ident) => { Some($crate::sig::$ret) };
    ($($ident:ident = $name:literal ( $($param:ident),* ) $(-> $ret:ident)? ;)*) => {
        $(
            pub const $ident: FunctionDecl = FunctionDecl::builtin(
                $name,
                &[$($crate::sig::$param),*],
                intrinsics!(@ret $($ret)?),
            );
        )*

        /// Every declaration in this module.
        pub static ALL: &[&FunctionDecl] = &[$(&$ident),*];
    };
}

pub mod args;
pub mod circular_buffer;
pub mod compute;
pub mod debug;
pub mod noc;
pub mod pack;

pub use noc::HwConst;

/// Every declaration, grouped by module.
pub fn catalog() -> impl Iterator<Item = &'static FunctionDecl> {
    [
        debug::ALL,
        args::ALL,
        circular_buffer::ALL,
        noc::ALL,
        compute::ALL,
        pack::ALL,
    ]
    .into_iter()
    .flatten()
    .copied()
}

/// First declaration named `name`.
///
/// The circular-buffer calls exist for both data-movement and compute
/// cores; the data-movement variant comes first.
pub fn find(name: &str) -> Option<&'static FunctionDecl> {
    catalog().find(|decl| decl.name() == name)
}

#[cfg(test)]
mod tests;
