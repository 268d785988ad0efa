//! Statement rendering.
//!
//! Every statement writes its own indentation. Simple statements end in
//! `;`. Comments and includes take no terminator. Compound statements open
//! a brace on their header line and close it at their own level, with the
//! body one level deeper.

use tt_ir::{Branch, ExprId, Stmt, SwitchCase};

use super::emit_expr;
use super::function::emit_function_def;
use crate::stack::ensure_sufficient_stack;
use crate::{CodegenContext, CodegenError, Diagnostic};

pub fn emit_stmt(ctx: &mut CodegenContext<'_>, stmt: &Stmt) -> Result<(), CodegenError> {
    let construct = stmt.construct_name();
    match stmt {
        Stmt::Expr(id) => {
            let text = expr(ctx, *id)?;
            ctx.writeln(&format!("{text};"));
        }
        Stmt::Comment(text) => emit_comment(ctx, text),
        Stmt::Include(path) => ctx.writeln(&format!("#include {path}")),
        Stmt::For {
            init,
            cond,
            step,
            body,
        } => {
            let header = format!(
                "for ( {} ; {} ; {} ) {{",
                expr(ctx, *init)?,
                expr(ctx, *cond)?,
                expr(ctx, *step)?
            );
            ctx.writeln(&header);
            emit_body(ctx, construct, body)?;
            ctx.writeln("}");
        }
        Stmt::While { cond, body } => {
            let header = format!("while ( {} ) {{", expr(ctx, *cond)?);
            ctx.writeln(&header);
            emit_body(ctx, construct, body)?;
            ctx.writeln("}");
        }
        Stmt::If { branches } => emit_if(ctx, construct, branches)?,
        Stmt::Switch {
            subject,
            cases,
            default,
        } => emit_switch(ctx, *subject, cases, default.as_deref())?,
        Stmt::FunctionDef { decl, params, body } => {
            emit_function_def(ctx, construct, decl, params, body)?;
        }
    }
    Ok(())
}

/// Render a body one level deeper than the current line.
pub(crate) fn emit_body(
    ctx: &mut CodegenContext<'_>,
    construct: &'static str,
    body: &[Stmt],
) -> Result<(), CodegenError> {
    if body.is_empty() {
        ctx.report(Diagnostic::EmptyBody { construct });
    }
    ctx.nested(|ctx| {
        for stmt in body {
            ensure_sufficient_stack(|| emit_stmt(ctx, stmt))?;
        }
        Ok(())
    })
}

fn expr(ctx: &CodegenContext<'_>, id: ExprId) -> Result<String, CodegenError> {
    emit_expr(ctx.arena(), id, ctx.options().max_depth)
}

fn emit_comment(ctx: &mut CodegenContext<'_>, text: &str) {
    if text.is_empty() {
        ctx.writeln("//");
        return;
    }
    for line in text.lines() {
        if line.is_empty() {
            ctx.writeln("//");
        } else {
            ctx.writeln(&format!("// {line}"));
        }
    }
}

fn emit_if(
    ctx: &mut CodegenContext<'_>,
    construct: &'static str,
    branches: &[Branch],
) -> Result<(), CodegenError> {
    if branches.is_empty() {
        ctx.report(Diagnostic::EmptyIf);
        return Ok(());
    }
    check_else_placement(ctx, branches);

    for (i, branch) in branches.iter().enumerate() {
        let header = match (i, branch.cond) {
            (0, Some(cond)) => format!("if ( {} ) {{", expr(ctx, cond)?),
            (0, None) => return Err(CodegenError::MissingCondition),
            (_, Some(cond)) => format!("}} else if ( {} ) {{", expr(ctx, cond)?),
            (_, None) => "} else {".to_string(),
        };
        ctx.writeln(&header);
        emit_body(ctx, construct, &branch.body)?;
    }
    ctx.writeln("}");
    Ok(())
}

/// An `else` arm must be unique and last. Violations render anyway.
fn check_else_placement(ctx: &mut CodegenContext<'_>, branches: &[Branch]) {
    let last = branches.len() - 1;
    let mut count = 0;
    for (position, branch) in branches.iter().enumerate() {
        if branch.cond.is_none() {
            count += 1;
            if position != last && position != 0 {
                ctx.report(Diagnostic::MisplacedElse { position });
            }
        }
    }
    if count > 1 {
        ctx.report(Diagnostic::MultipleElse { count });
    }
}

fn emit_switch(
    ctx: &mut CodegenContext<'_>,
    subject: ExprId,
    cases: &[SwitchCase],
    default: Option<&[Stmt]>,
) -> Result<(), CodegenError> {
    if cases.is_empty() && default.is_none() {
        ctx.report(Diagnostic::EmptySwitch);
    }
    let header = format!("switch ( {} ) {{", expr(ctx, subject)?);
    ctx.writeln(&header);
    ctx.nested(|ctx| {
        for case in cases {
            let label = format!("case {} : {{", expr(ctx, case.value)?);
            ctx.writeln(&label);
            emit_body(ctx, "case", &case.body)?;
            ctx.writeln("} break;");
        }
        if let Some(body) = default {
            ctx.writeln("default: {");
            emit_body(ctx, "default", body)?;
            ctx.writeln("} break;");
        }
        Ok(())
    })?;
    ctx.writeln("}");
    Ok(())
}
