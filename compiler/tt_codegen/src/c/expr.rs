//! Expression rendering.

use tt_ir::{ExprArena, ExprId, ExprKind, UnaryOp, Variable};

use crate::stack::ensure_sufficient_stack;
use crate::CodegenError;

/// Render one expression tree.
///
/// Fails on ids that do not resolve, on children that are not older than
/// their parent, on declarations of things that are not named storage, and
/// on trees deeper than `max_depth`.
pub fn emit_expr(arena: &ExprArena, id: ExprId, max_depth: usize) -> Result<String, CodegenError> {
    let mut out = String::new();
    ExprWriter { arena, max_depth }.write(&mut out, id, None, 0)?;
    Ok(out)
}

struct ExprWriter<'a> {
    arena: &'a ExprArena,
    max_depth: usize,
}

impl ExprWriter<'_> {
    fn node(&self, id: ExprId, parent: Option<ExprId>) -> Result<&ExprKind, CodegenError> {
        if let Some(parent) = parent {
            if id >= parent {
                return Err(CodegenError::ForwardReference { parent, child: id });
            }
        }
        self.arena.get(id).ok_or(CodegenError::UnknownExpr { id })
    }

    fn write(
        &self,
        out: &mut String,
        id: ExprId,
        parent: Option<ExprId>,
        depth: usize,
    ) -> Result<(), CodegenError> {
        if depth > self.max_depth {
            return Err(CodegenError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        let node = self.node(id, parent)?;
        ensure_sufficient_stack(|| self.write_node(out, id, node, depth))
    }

    fn child(
        &self,
        out: &mut String,
        child: ExprId,
        parent: ExprId,
        depth: usize,
    ) -> Result<(), CodegenError> {
        self.write(out, child, Some(parent), depth + 1)
    }

    fn write_node(
        &self,
        out: &mut String,
        id: ExprId,
        node: &ExprKind,
        depth: usize,
    ) -> Result<(), CodegenError> {
        match node {
            ExprKind::Variable(var) => out.push_str(&var.reference_text()),
            ExprKind::Declaration(target) => {
                let var = self.declared_variable(*target, id)?;
                let text = var.declaration().ok_or(CodegenError::UnhandledNode {
                    id: *target,
                    reason: "a literal cannot be declared",
                })?;
                out.push_str(&text);
            }
            ExprKind::Assign { target, value } => {
                self.child(out, *target, id, depth)?;
                out.push_str(" = ");
                self.child(out, *value, id, depth)?;
            }
            ExprKind::Index { base, index } => {
                self.child(out, *base, id, depth)?;
                out.push_str(" [ ");
                self.child(out, *index, id, depth)?;
                out.push_str(" ]");
            }
            ExprKind::Binary { op, left, right } => {
                self.child(out, *left, id, depth)?;
                out.push(' ');
                out.push_str(op.as_symbol());
                out.push(' ');
                self.child(out, *right, id, depth)?;
            }
            ExprKind::Unary { op, operand } => match op {
                UnaryOp::Neg => {
                    out.push('-');
                    let start = out.len();
                    self.child(out, *operand, id, depth)?;
                    // `--` reads as a decrement.
                    if out[start..].starts_with('-') {
                        out.insert(start, ' ');
                    }
                }
                UnaryOp::Not => {
                    out.push('!');
                    self.child(out, *operand, id, depth)?;
                }
                UnaryOp::Paren => {
                    out.push_str("( ");
                    self.child(out, *operand, id, depth)?;
                    out.push_str(" )");
                }
            },
            ExprKind::Call { decl, args } => {
                let args = self.arena.get_list(*args).ok_or(CodegenError::UnhandledNode {
                    id,
                    reason: "call arguments are not stored in this arena",
                })?;
                out.push_str(decl.name());
                if args.is_empty() {
                    out.push_str("()");
                } else {
                    out.push_str("( ");
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(" , ");
                        }
                        self.child(out, *arg, id, depth)?;
                    }
                    out.push_str(" )");
                }
            }
        }
        Ok(())
    }

    fn declared_variable(&self, target: ExprId, parent: ExprId) -> Result<&Variable, CodegenError> {
        self.node(target, Some(parent))?
            .as_variable()
            .ok_or(CodegenError::UnhandledNode {
                id: target,
                reason: "only variables can be declared",
            })
    }
}
