//! Copying nodes between contexts of the same role.
//!
//! A handle built against one context can be used in another. Its tree is
//! copied into the receiving arena; named variables resolve through the
//! receiving symbol table, so `x` in both contexts stays one node.

use rustc_hash::{FxHashMap, FxHashSet};
use tt_ir::{ExprId, ExprKind, Stmt};

use crate::{KernelContext, Role};

impl<R: Role> KernelContext<R> {
    /// Copy the tree rooted at `root` in `source` into this context.
    pub(crate) fn import(&self, source: &KernelContext<R>, root: ExprId) -> ExprId {
        let mut importer = Importer::new(self, source);
        importer.expr(root)
    }

    /// Copy every expression a foreign statement refers to.
    pub(crate) fn import_stmt(&self, source: &KernelContext<R>, stmt: Stmt) -> Stmt {
        let mut importer = Importer::new(self, source);
        importer.stmt(stmt)
    }
}

struct Importer<'a, R: Role> {
    target: &'a KernelContext<R>,
    source: &'a KernelContext<R>,
    /// Source id to target id, for nodes already copied.
    copied: FxHashMap<ExprId, ExprId>,
}

impl<'a, R: Role> Importer<'a, R> {
    fn new(target: &'a KernelContext<R>, source: &'a KernelContext<R>) -> Self {
        Importer {
            target,
            source,
            copied: FxHashMap::default(),
        }
    }

    fn expr(&mut self, root: ExprId) -> ExprId {
        if let Some(&id) = self.copied.get(&root) {
            return id;
        }

        // Collect the reachable set without recursion. Children always have
        // smaller ids than their parents, so ascending order copies every
        // child before anything that refers to it.
        let mut reachable = FxHashSet::default();
        let mut pending = vec![root];
        {
            let arena = self.source.arena();
            while let Some(id) = pending.pop() {
                if self.copied.contains_key(&id) || !reachable.insert(id) {
                    continue;
                }
                let Some(node) = arena.get(id) else { continue };
                pending.extend(node.inline_children());
                if let ExprKind::Call { args, .. } = node {
                    pending.extend(arena.get_list(*args).unwrap_or_default());
                }
            }
        }
        let mut order: Vec<ExprId> = reachable.into_iter().collect();
        order.sort_unstable();

        for id in order {
            let node = self.source.arena().get(id).cloned();
            let new_id = match node {
                Some(ExprKind::Variable(var)) => self.target.intern_variable(&var),
                Some(ExprKind::Call { decl, args }) => {
                    let ids: Vec<ExprId> = self
                        .source
                        .arena()
                        .get_list(args)
                        .unwrap_or_default()
                        .iter()
                        .map(|a| self.map(*a))
                        .collect();
                    let args = self.target.alloc_list(ids);
                    self.target.alloc(ExprKind::Call { decl, args })
                }
                Some(other) => {
                    let kind = self.remap(other);
                    self.target.alloc(kind)
                }
                // Dangling ids stay dangling; rendering reports them.
                None => ExprId::INVALID,
            };
            self.copied.insert(id, new_id);
        }
        self.map(root)
    }

    fn map(&self, id: ExprId) -> ExprId {
        self.copied.get(&id).copied().unwrap_or(ExprId::INVALID)
    }

    fn remap(&self, kind: ExprKind) -> ExprKind {
        match kind {
            ExprKind::Declaration(id) => ExprKind::Declaration(self.map(id)),
            ExprKind::Assign { target, value } => ExprKind::Assign {
                target: self.map(target),
                value: self.map(value),
            },
            ExprKind::Index { base, index } => ExprKind::Index {
                base: self.map(base),
                index: self.map(index),
            },
            ExprKind::Binary { op, left, right } => ExprKind::Binary {
                op,
                left: self.map(left),
                right: self.map(right),
            },
            ExprKind::Unary { op, operand } => ExprKind::Unary {
                op,
                operand: self.map(operand),
            },
            leaf @ (ExprKind::Variable(_) | ExprKind::Call { .. }) => leaf,
        }
    }

    fn stmts(&mut self, stmts: Vec<Stmt>) -> Vec<Stmt> {
        stmts.into_iter().map(|s| self.stmt(s)).collect()
    }

    fn stmt(&mut self, stmt: Stmt) -> Stmt {
        match stmt {
            Stmt::Expr(id) => Stmt::Expr(self.expr(id)),
            Stmt::For {
                init,
                cond,
                step,
                body,
            } => Stmt::For {
                init: self.expr(init),
                cond: self.expr(cond),
                step: self.expr(step),
                body: self.stmts(body),
            },
            Stmt::While { cond, body } => Stmt::While {
                cond: self.expr(cond),
                body: self.stmts(body),
            },
            Stmt::If { branches } => Stmt::If {
                branches: branches
                    .into_iter()
                    .map(|b| tt_ir::Branch {
                        cond: b.cond.map(|c| self.expr(c)),
                        body: self.stmts(b.body),
                    })
                    .collect(),
            },
            Stmt::Switch {
                subject,
                cases,
                default,
            } => Stmt::Switch {
                subject: self.expr(subject),
                cases: cases
                    .into_iter()
                    .map(|c| tt_ir::SwitchCase {
                        value: self.expr(c.value),
                        body: self.stmts(c.body),
                    })
                    .collect(),
                default: default.map(|d| self.stmts(d)),
            },
            Stmt::FunctionDef { decl, params, body } => Stmt::FunctionDef {
                decl,
                params,
                body: self.stmts(body),
            },
            inert @ (Stmt::Comment(_) | Stmt::Include(_)) => inert,
        }
    }
}
