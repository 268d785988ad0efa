//! Per-role symbol table and expression storage.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::panic::Location;

use rustc_hash::FxHashMap;
use tt_ir::{ExprArena, ExprId, ExprKind, ExprRange, FunctionDecl, Literal, Placeholder, PrimKind, Variable};

use crate::shape::describe;
use crate::{Expr, Operand, Role, SymbolError, VarShape};

/// One kernel-building session for role `R`.
///
/// Owns the expression arena and the name-to-node table. Handles borrow the
/// context, so nodes can be aliased freely while the context lives. Nothing
/// here is shared between contexts; build independent kernels on separate
/// threads with one context each.
pub struct KernelContext<R: Role> {
    arena: RefCell<ExprArena>,
    symbols: RefCell<FxHashMap<String, ExprId>>,
    provenance: String,
    _role: PhantomData<R>,
}

impl<R: Role> KernelContext<R> {
    /// Create a context whose provenance is the caller's source location.
    #[track_caller]
    pub fn new() -> Self {
        let here = Location::caller();
        Self::with_provenance(format!("{}:{}", here.file(), here.line()))
    }

    pub fn with_provenance(provenance: impl Into<String>) -> Self {
        let provenance = provenance.into();
        tracing::debug!(role = R::NAME, %provenance, "new kernel context");
        KernelContext {
            arena: RefCell::new(ExprArena::with_capacity(64)),
            symbols: RefCell::new(FxHashMap::default()),
            provenance,
            _role: PhantomData,
        }
    }

    #[inline]
    pub fn provenance(&self) -> &str {
        &self.provenance
    }

    /// Look up `name`, creating it with `shape` if unseen.
    ///
    /// An existing entry is returned as is, even when `shape` asks for
    /// something else; the mismatch is logged. Use [`try_instance`] to get an
    /// error instead.
    ///
    /// [`try_instance`]: KernelContext::try_instance
    pub fn instance(&self, name: &str, shape: VarShape) -> Expr<'_, R> {
        match self.try_instance(name, shape) {
            Ok(expr) => expr,
            Err(err) => {
                tracing::warn!(%err, "reusing existing symbol");
                let id = self.symbols.borrow().get(name).copied();
                // try_instance only fails for names it found.
                Expr::new(self, id.unwrap_or(ExprId::INVALID))
            }
        }
    }

    /// Like [`instance`](KernelContext::instance), but a shape or kind
    /// mismatch with an existing entry is an error.
    pub fn try_instance(&self, name: &str, shape: VarShape) -> Result<Expr<'_, R>, SymbolError> {
        let requested = shape.into_variable(name);
        let existing = self.symbols.borrow().get(name).copied();
        if let Some(id) = existing {
            let arena = self.arena.borrow();
            return match arena.get(id).and_then(ExprKind::as_variable) {
                Some(var) if *var == requested => Ok(Expr::new(self, id)),
                Some(var) => Err(SymbolError::ShapeMismatch {
                    name: name.to_string(),
                    existing: describe(var),
                    requested: describe(&requested),
                }),
                None => Err(SymbolError::NotAVariable { id }),
            };
        }
        Ok(self.intern(name.to_string(), requested))
    }

    pub fn scalar(&self, name: &str, kind: PrimKind) -> Expr<'_, R> {
        self.instance(name, VarShape::Scalar(kind))
    }

    pub fn array(&self, name: &str, kind: PrimKind, len: usize) -> Expr<'_, R> {
        self.instance(name, VarShape::Array(kind, len))
    }

    pub fn matrix(
        &self,
        name: &str,
        kind: PrimKind,
        dims: impl IntoIterator<Item = usize>,
    ) -> Expr<'_, R> {
        self.instance(name, VarShape::Matrix(kind, dims.into_iter().collect()))
    }

    /// Pointer to a scalar of `kind`.
    pub fn pointer(&self, name: &str, kind: PrimKind) -> Expr<'_, R> {
        self.instance(name, VarShape::pointer(VarShape::Scalar(kind)))
    }

    pub fn reference(&self, name: &str, kind: PrimKind) -> Expr<'_, R> {
        self.instance(name, VarShape::reference(VarShape::Scalar(kind)))
    }

    pub fn lookup(&self, name: &str) -> Option<Expr<'_, R>> {
        let id = self.symbols.borrow().get(name).copied()?;
        Some(Expr::new(self, id))
    }

    /// Declared names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.symbols.borrow().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.symbols.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.borrow().is_empty()
    }

    /// An unnamed constant. Literals are never interned.
    pub fn literal(&self, value: impl Into<Literal>) -> Expr<'_, R> {
        let id = self.alloc(ExprKind::Variable(Variable::Literal(value.into())));
        Expr::new(self, id)
    }

    /// Reference a formal parameter slot inside a function body.
    pub fn placeholder(&self, slot: Placeholder) -> Expr<'_, R> {
        let id = self.alloc(ExprKind::Variable(Variable::Placeholder(slot)));
        Expr::new(self, id)
    }

    /// Call `decl` with `args`. Arity and types are not checked.
    pub fn call<'ctx>(
        &'ctx self,
        decl: &FunctionDecl,
        args: impl IntoIterator<Item = Operand<'ctx, R>>,
    ) -> Expr<'ctx, R> {
        let ids: Vec<ExprId> = args.into_iter().map(|arg| self.attach(arg)).collect();
        let args = self.alloc_list(ids);
        let id = self.alloc(ExprKind::Call {
            decl: decl.clone(),
            args,
        });
        Expr::new(self, id)
    }

    /// Mutate the variable behind `handle` in place. Every alias of the
    /// node sees the change. Renaming does not re-key the symbol table.
    ///
    /// If `f` leaves the entry without a name (a literal or placeholder),
    /// the entry is left as it was and `NotAVariable` is returned.
    ///
    /// `f` must not call back into this context; the arena is borrowed
    /// mutably while it runs.
    pub fn update_variable(
        &self,
        handle: Expr<'_, R>,
        f: impl FnOnce(&mut Variable),
    ) -> Result<(), SymbolError> {
        let id = handle.id();
        if !handle.belongs_to(self) {
            return Err(SymbolError::ForeignHandle { id });
        }
        let mut arena = self.arena.borrow_mut();
        let Some(ExprKind::Variable(var)) = arena.get_mut(id) else {
            return Err(SymbolError::NotAVariable { id });
        };
        if var.name().is_none() {
            return Err(SymbolError::NotAVariable { id });
        }
        let mut updated = var.clone();
        f(&mut updated);
        if updated.name().is_none() {
            return Err(SymbolError::NotAVariable { id });
        }
        *var = updated;
        Ok(())
    }

    fn intern(&self, name: String, var: Variable) -> Expr<'_, R> {
        let id = self.alloc(ExprKind::Variable(var));
        self.symbols.borrow_mut().insert(name, id);
        Expr::new(self, id)
    }

    /// Find or create the entry for a variable imported from elsewhere.
    pub(crate) fn intern_variable(&self, var: &Variable) -> ExprId {
        let Some(name) = var.name() else {
            return self.alloc(ExprKind::Variable(var.clone()));
        };
        if let Some(&id) = self.symbols.borrow().get(name) {
            return id;
        }
        self.intern(name.to_string(), var.clone()).id()
    }

    pub(crate) fn alloc(&self, kind: ExprKind) -> ExprId {
        self.arena.borrow_mut().alloc_expr(kind)
    }

    pub(crate) fn alloc_list(&self, ids: Vec<ExprId>) -> ExprRange {
        self.arena.borrow_mut().alloc_expr_list(ids)
    }

    pub(crate) fn arena(&self) -> Ref<'_, ExprArena> {
        self.arena.borrow()
    }

    /// Turn an operand into a node id in this context.
    pub(crate) fn attach(&self, operand: Operand<'_, R>) -> ExprId {
        match operand {
            Operand::Expr(expr) if expr.belongs_to(self) => expr.id(),
            Operand::Expr(expr) => self.import(expr.context(), expr.id()),
            Operand::Literal(lit) => self.alloc(ExprKind::Variable(Variable::Literal(lit))),
        }
    }
}

impl<R: Role> Default for KernelContext<R> {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Role> fmt::Debug for KernelContext<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelContext")
            .field("role", &R::NAME)
            .field("provenance", &self.provenance)
            .field("symbols", &self.len())
            .field("nodes", &self.arena.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
