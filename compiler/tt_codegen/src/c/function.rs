//! Function definitions.

use tt_ir::{FunctionDecl, Placeholder, Stmt};

use super::stmt::emit_body;
use crate::{CodegenContext, CodegenError};

/// Render `ret name( params ) { body }`.
///
/// Parameters come from the placeholder list, not from `decl`'s parameter
/// types, so the body can refer to them by label.
pub(crate) fn emit_function_def(
    ctx: &mut CodegenContext<'_>,
    construct: &'static str,
    decl: &FunctionDecl,
    params: &[Placeholder],
    body: &[Stmt],
) -> Result<(), CodegenError> {
    ctx.writeln(&signature(decl, params));
    emit_body(ctx, construct, body)?;
    ctx.writeln("}");
    Ok(())
}

fn signature(decl: &FunctionDecl, params: &[Placeholder]) -> String {
    let ret = decl.return_text();
    if params.is_empty() {
        return format!("{ret} {}() {{", decl.name());
    }
    let params: Vec<String> = params.iter().map(|p| p.param_text()).collect();
    format!("{ret} {}( {} ) {{", decl.name(), params.join(", "))
}
