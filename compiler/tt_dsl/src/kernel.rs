//! The rendered, immutable kernel.

use std::fmt;
use std::marker::PhantomData;

use tt_codegen::{render, CodegenError, CodegenOptions, Diagnostic};

use crate::{KernelContext, Role, Statement};

/// Source text for one role, plus where it was built.
///
/// Rendering happens once, in the constructor. Afterwards the kernel only
/// exposes what was produced.
///
/// Statements carry their role, so a kernel cannot be assembled from
/// statements built for another core:
///
/// ```compile_fail
/// use tt_dsl::{stmts, Brisc, Kernel, KernelContext, Ncrisc, PrimKind};
///
/// let reader = KernelContext::<Brisc>::new();
/// let writer = KernelContext::<Ncrisc>::new();
/// let x = reader.scalar("x", PrimKind::I32);
/// let _ = Kernel::new(&writer, stmts![x.assign(1)]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Kernel<R: Role> {
    source: String,
    provenance: String,
    diagnostics: Vec<Diagnostic>,
    _role: PhantomData<R>,
}

impl<R: Role> Kernel<R> {
    pub fn new<'ctx>(
        ctx: &'ctx KernelContext<R>,
        stmts: Vec<Statement<'ctx, R>>,
    ) -> Result<Self, CodegenError> {
        Self::with_options(ctx, stmts, CodegenOptions::default())
    }

    pub fn with_options<'ctx>(
        ctx: &'ctx KernelContext<R>,
        stmts: Vec<Statement<'ctx, R>>,
        options: CodegenOptions,
    ) -> Result<Self, CodegenError> {
        let stmts = ctx.absorb(stmts);
        let output = render(&ctx.arena(), &stmts, options)?;
        tracing::debug!(
            role = R::NAME,
            provenance = ctx.provenance(),
            bytes = output.code.len(),
            diagnostics = output.diagnostics.len(),
            "rendered kernel"
        );
        Ok(Kernel {
            source: output.code,
            provenance: ctx.provenance().to_string(),
            diagnostics: output.diagnostics,
            _role: PhantomData,
        })
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn provenance(&self) -> &str {
        &self.provenance
    }

    /// Builder misuse noticed while rendering.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn role(&self) -> &'static str {
        R::NAME
    }
}

impl<R: Role> fmt::Display for Kernel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<R: Role> fmt::Debug for Kernel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel")
            .field("role", &R::NAME)
            .field("provenance", &self.provenance)
            .field("bytes", &self.source.len())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}
