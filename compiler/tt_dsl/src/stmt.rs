//! Statement handles and control-flow builders.
//!
//! Builders are consumed by value. `if_` returns an [`IfChain`] that grows
//! with `else_if_` and is closed by `else_`, which hands back a finished
//! [`Statement`]; an `else` can therefore only ever be the last arm.
//! `switch_` works the same way with `case_` and `default_`.
//!
//! ```compile_fail
//! use tt_dsl::{stmts, Brisc, KernelContext, PrimKind};
//!
//! let ctx = KernelContext::<Brisc>::new();
//! let x = ctx.scalar("x", PrimKind::I32);
//! let _ = ctx
//!     .if_(x.lt(1), stmts![x.assign(1)])
//!     .else_(stmts![x.assign(2)])
//!     .else_if_(x.lt(3), stmts![x.assign(3)]);
//! ```

use std::fmt;

use tt_ir::{Branch, FunctionDecl, IncludePath, Placeholder, Stmt, SwitchCase};

use crate::{Expr, KernelContext, Operand, Role};

/// A statement built against some context of role `R`.
pub struct Statement<'ctx, R: Role> {
    /// Context the statement's expressions live in. `None` for statements
    /// that reference no expressions.
    origin: Option<&'ctx KernelContext<R>>,
    stmt: Stmt,
}

impl<'ctx, R: Role> Statement<'ctx, R> {
    fn bound(ctx: &'ctx KernelContext<R>, stmt: Stmt) -> Self {
        Statement {
            origin: Some(ctx),
            stmt,
        }
    }

    /// `// text`, one comment line per line of `text`.
    pub fn comment(text: impl Into<String>) -> Self {
        Statement {
            origin: None,
            stmt: Stmt::Comment(text.into()),
        }
    }

    /// `#include <path>`
    pub fn include_system(path: impl Into<String>) -> Self {
        Statement {
            origin: None,
            stmt: Stmt::Include(IncludePath::System(path.into())),
        }
    }

    /// `#include "path"`
    pub fn include_local(path: impl Into<String>) -> Self {
        Statement {
            origin: None,
            stmt: Stmt::Include(IncludePath::Local(path.into())),
        }
    }

    pub fn as_stmt(&self) -> &Stmt {
        &self.stmt
    }

    /// Rebase onto `ctx`, copying expressions if built elsewhere.
    pub(crate) fn into_stmt(self, ctx: &KernelContext<R>) -> Stmt {
        match self.origin {
            Some(origin) if !std::ptr::eq(origin, ctx) => ctx.import_stmt(origin, self.stmt),
            _ => self.stmt,
        }
    }
}

impl<'ctx, R: Role> From<Expr<'ctx, R>> for Statement<'ctx, R> {
    fn from(expr: Expr<'ctx, R>) -> Self {
        Statement::bound(expr.context(), Stmt::Expr(expr.id()))
    }
}

impl<R: Role> fmt::Debug for Statement<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("role", &R::NAME)
            .field("stmt", &self.stmt)
            .finish()
    }
}

/// An `if` chain under construction.
#[must_use = "an if chain does nothing until converted into a Statement"]
pub struct IfChain<'ctx, R: Role> {
    ctx: &'ctx KernelContext<R>,
    branches: Vec<Branch>,
}

impl<'ctx, R: Role> IfChain<'ctx, R> {
    pub fn else_if_(
        mut self,
        cond: impl Into<Operand<'ctx, R>>,
        body: Vec<Statement<'ctx, R>>,
    ) -> Self {
        let cond = self.ctx.attach(cond.into());
        self.branches.push(Branch {
            cond: Some(cond),
            body: self.ctx.absorb(body),
        });
        self
    }

    /// Close the chain with a final `else`.
    pub fn else_(mut self, body: Vec<Statement<'ctx, R>>) -> Statement<'ctx, R> {
        self.branches.push(Branch {
            cond: None,
            body: self.ctx.absorb(body),
        });
        self.into()
    }
}

impl<'ctx, R: Role> From<IfChain<'ctx, R>> for Statement<'ctx, R> {
    fn from(chain: IfChain<'ctx, R>) -> Self {
        Statement::bound(
            chain.ctx,
            Stmt::If {
                branches: chain.branches,
            },
        )
    }
}

/// A `switch` under construction.
#[must_use = "a switch does nothing until converted into a Statement"]
pub struct SwitchBuilder<'ctx, R: Role> {
    ctx: &'ctx KernelContext<R>,
    subject: tt_ir::ExprId,
    cases: Vec<SwitchCase>,
}

impl<'ctx, R: Role> SwitchBuilder<'ctx, R> {
    /// Add `case value : { body } break;`. Cases render in the order added.
    pub fn case_(
        mut self,
        value: impl Into<Operand<'ctx, R>>,
        body: Vec<Statement<'ctx, R>>,
    ) -> Self {
        let value = self.ctx.attach(value.into());
        self.cases.push(SwitchCase {
            value,
            body: self.ctx.absorb(body),
        });
        self
    }

    /// Close the switch with a `default` arm, rendered after every case.
    pub fn default_(self, body: Vec<Statement<'ctx, R>>) -> Statement<'ctx, R> {
        let default = Some(self.ctx.absorb(body));
        Statement::bound(
            self.ctx,
            Stmt::Switch {
                subject: self.subject,
                cases: self.cases,
                default,
            },
        )
    }
}

impl<'ctx, R: Role> From<SwitchBuilder<'ctx, R>> for Statement<'ctx, R> {
    fn from(builder: SwitchBuilder<'ctx, R>) -> Self {
        Statement::bound(
            builder.ctx,
            Stmt::Switch {
                subject: builder.subject,
                cases: builder.cases,
                default: None,
            },
        )
    }
}

impl<R: Role> KernelContext<R> {
    pub(crate) fn absorb<'ctx>(&self, body: Vec<Statement<'ctx, R>>) -> Vec<Stmt> {
        body.into_iter().map(|s| s.into_stmt(self)).collect()
    }

    /// `for ( init ; cond ; step ) { body }`
    pub fn for_<'ctx>(
        &'ctx self,
        init: impl Into<Operand<'ctx, R>>,
        cond: impl Into<Operand<'ctx, R>>,
        step: impl Into<Operand<'ctx, R>>,
        body: Vec<Statement<'ctx, R>>,
    ) -> Statement<'ctx, R> {
        let init = self.attach(init.into());
        let cond = self.attach(cond.into());
        let step = self.attach(step.into());
        let body = self.absorb(body);
        Statement::bound(
            self,
            Stmt::For {
                init,
                cond,
                step,
                body,
            },
        )
    }

    /// `while ( cond ) { body }`
    pub fn while_<'ctx>(
        &'ctx self,
        cond: impl Into<Operand<'ctx, R>>,
        body: Vec<Statement<'ctx, R>>,
    ) -> Statement<'ctx, R> {
        let cond = self.attach(cond.into());
        let body = self.absorb(body);
        Statement::bound(self, Stmt::While { cond, body })
    }

    /// Start an `if` chain.
    pub fn if_<'ctx>(
        &'ctx self,
        cond: impl Into<Operand<'ctx, R>>,
        body: Vec<Statement<'ctx, R>>,
    ) -> IfChain<'ctx, R> {
        let cond = self.attach(cond.into());
        IfChain {
            ctx: self,
            branches: vec![Branch {
                cond: Some(cond),
                body: self.absorb(body),
            }],
        }
    }

    pub fn switch_<'ctx>(&'ctx self, subject: impl Into<Operand<'ctx, R>>) -> SwitchBuilder<'ctx, R> {
        SwitchBuilder {
            ctx: self,
            subject: self.attach(subject.into()),
            cases: Vec::new(),
        }
    }

    /// Define `decl` with `params` as its formal parameters.
    pub fn function<'ctx>(
        &'ctx self,
        decl: &FunctionDecl,
        params: &[Placeholder],
        body: Vec<Statement<'ctx, R>>,
    ) -> Statement<'ctx, R> {
        let body = self.absorb(body);
        Statement::bound(
            self,
            Stmt::FunctionDef {
                decl: decl.clone(),
                params: params.to_vec(),
                body,
            },
        )
    }

    pub fn comment(&self, text: impl Into<String>) -> Statement<'_, R> {
        Statement::comment(text)
    }

    pub fn include_system(&self, path: impl Into<String>) -> Statement<'_, R> {
        Statement::include_system(path)
    }

    pub fn include_local(&self, path: impl Into<String>) -> Statement<'_, R> {
        Statement::include_local(path)
    }

    /// `void kernel_main() { body }`
    pub fn kernel_main<'ctx>(&'ctx self, body: Vec<Statement<'ctx, R>>) -> Statement<'ctx, R> {
        self.function(&FunctionDecl::KERNEL_MAIN, &[], body)
    }
}
