//! TT Kernel DSL
//!
//! Build accelerator kernels as typed trees in Rust and render them to
//! kernel C source.
//!
//! ```text
//! KernelContext<R>        symbol table + arena for one role
//!        ↓  instance / scalar / array / literal
//! Expr<'ctx, R>           operators build new nodes
//!        ↓  for_ / while_ / if_ / switch_ / kernel_main
//! Statement<'ctx, R>
//!        ↓  Kernel::new (renders once)
//! Kernel<R>               source text + provenance
//! ```
//!
//! ```
//! use tt_dsl::{stmts, Brisc, Kernel, KernelContext, PrimKind};
//!
//! let ctx = KernelContext::<Brisc>::new();
//! let x = ctx.scalar("x", PrimKind::I32);
//! let kernel = Kernel::new(&ctx, stmts![ctx.kernel_main(stmts![x.declare().assign(0)])])
//!     .map_err(|e| e.to_string())?;
//! assert_eq!(kernel.source(), "void kernel_main() {\n    int32_t x = 0;\n}\n");
//! # Ok::<(), String>(())
//! ```

mod context;
mod error;
mod expr;
mod import;
mod kernel;
mod role;
mod shape;
mod stmt;

use std::sync::Once;

pub use context::KernelContext;
pub use error::SymbolError;
pub use expr::{Expr, Operand};
pub use kernel::Kernel;
pub use role::{Brisc, Crisc, Ncrisc, Role, RoleClass};
pub use shape::VarShape;
pub use stmt::{IfChain, Statement, SwitchBuilder};

pub use tt_codegen::{CodegenError, CodegenOptions, Diagnostic};
pub use tt_ir::{
    FunctionDecl, IncludePath, Literal, Placeholder, PrimKind, SlotShape, ValueForm, ValueType,
    Variable, PLACEHOLDERS,
};

/// Build a statement list, converting each element with `Statement::from`.
#[macro_export]
macro_rules! stmts {
    ($($stmt:expr),* $(,)?) => {
        ::std::vec![$($crate::Statement::from($stmt)),*]
    };
}

/// Build a call argument list, converting each element with `Operand::from`.
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::Operand::from($arg)),*]
    };
}

static TRACING_INIT: Once = Once::new();

/// Install a log subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once. Enable with `RUST_LOG=tt_dsl=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
