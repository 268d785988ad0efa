#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::{Brisc, Crisc};

#[test]
fn provenance_is_caller_location() {
    let ctx = KernelContext::<Brisc>::new();
    assert!(ctx.provenance().starts_with(file!()), "{}", ctx.provenance());
    assert!(ctx.provenance().contains(':'));

    let named = KernelContext::<Brisc>::with_provenance("reader.rs:12");
    assert_eq!(named.provenance(), "reader.rs:12");
}

#[test]
fn instance_interns_by_name() {
    let ctx = KernelContext::<Brisc>::new();
    let a = ctx.scalar("x", PrimKind::I32);
    let b = ctx.scalar("x", PrimKind::I32);
    assert_eq!(a.id(), b.id());
    assert_eq!(ctx.len(), 1);
}

#[test]
fn instance_with_other_shape_returns_original_entry() {
    let ctx = KernelContext::<Brisc>::new();
    let original = ctx.scalar("x", PrimKind::I32);
    let again = ctx.array("x", PrimKind::F32, 16);

    assert_eq!(again.id(), original.id());
    assert_eq!(
        again.variable(),
        Some(Variable::scalar(PrimKind::I32, "x"))
    );
    assert_eq!(ctx.len(), 1);
}

#[test]
fn try_instance_reports_mismatch() {
    let ctx = KernelContext::<Crisc>::new();
    ctx.array("buf", PrimKind::U32, 4);

    let err = ctx
        .try_instance("buf", VarShape::Array(PrimKind::U32, 8))
        .unwrap_err();
    assert_eq!(
        err,
        SymbolError::ShapeMismatch {
            name: "buf".into(),
            existing: "u32 array [4]".into(),
            requested: "u32 array [8]".into(),
        }
    );
    assert!(ctx
        .try_instance("buf", VarShape::Array(PrimKind::U32, 4))
        .is_ok());
}

#[test]
fn lookup_and_names() {
    let ctx = KernelContext::<Brisc>::new();
    assert!(ctx.is_empty());
    ctx.scalar("zeta", PrimKind::U8);
    ctx.matrix("alpha", PrimKind::F64, [2, 2]);
    ctx.pointer("sem", PrimKind::U32);

    assert_eq!(ctx.names(), vec!["alpha", "sem", "zeta"]);
    assert!(ctx.lookup("alpha").is_some());
    assert!(ctx.lookup("missing").is_none());
    assert_eq!(
        ctx.lookup("sem").and_then(|e| e.variable()),
        Some(Variable::pointer(Variable::scalar(PrimKind::U32, "sem")))
    );
}

#[test]
fn literals_and_placeholders_are_not_interned() {
    let ctx = KernelContext::<Brisc>::new();
    let one = ctx.literal(1);
    let other_one = ctx.literal(1);
    assert_ne!(one.id(), other_one.id());

    let slot = Placeholder::new(PrimKind::U32, tt_ir::SlotShape::Scalar, 0).unwrap();
    assert_eq!(ctx.placeholder(slot).render().unwrap(), "s_u32_0");
    assert!(ctx.is_empty());
}

#[test]
fn update_variable_is_visible_through_aliases() {
    let ctx = KernelContext::<Brisc>::new();
    let first = ctx.array("tile", PrimKind::U16, 16);
    let alias = ctx.array("tile", PrimKind::U16, 16);

    ctx.update_variable(first, |var| {
        if let Variable::Array { len, .. } = var {
            *len = 32;
        }
    })
    .unwrap();

    let decl = alias.declare().render().unwrap();
    assert_eq!(decl, "uint16_t tile [32]");
}

#[test]
fn update_variable_rejects_non_variables_and_foreign_handles() {
    let ctx = KernelContext::<Brisc>::new();
    let x = ctx.scalar("x", PrimKind::I32);
    let sum = x + 1;
    assert_eq!(
        ctx.update_variable(sum, |_| {}),
        Err(SymbolError::NotAVariable { id: sum.id() })
    );

    let lit = ctx.literal(3);
    assert_eq!(
        ctx.update_variable(lit, |_| {}),
        Err(SymbolError::NotAVariable { id: lit.id() })
    );

    let other = KernelContext::<Brisc>::new();
    let y = other.scalar("y", PrimKind::I32);
    assert_eq!(
        ctx.update_variable(y, |_| {}),
        Err(SymbolError::ForeignHandle { id: y.id() })
    );
}

#[test]
fn update_variable_keeps_entry_when_name_is_dropped() {
    let ctx = KernelContext::<Brisc>::new();
    let x = ctx.scalar("x", PrimKind::I32);

    assert_eq!(
        ctx.update_variable(x, |var| *var = Literal::I32(7).into()),
        Err(SymbolError::NotAVariable { id: x.id() })
    );

    assert_eq!(x.declare().render().unwrap(), "int32_t x");
    assert_eq!(ctx.lookup("x").map(|e| e.id()), Some(x.id()));
}

#[test]
fn call_builds_argument_list() {
    let ctx = KernelContext::<Brisc>::new();
    let decl = FunctionDecl::new("noc_async_read", Vec::new(), None);
    let addr = ctx.scalar("src_addr", PrimKind::U64);
    let call = ctx.call(&decl, crate::args![addr, 1024u32, true]);
    assert_eq!(
        call.render().unwrap(),
        "noc_async_read( src_addr , 1024 , true )"
    );

    let empty = ctx.call(&decl, []);
    assert_eq!(empty.render().unwrap(), "noc_async_read()");
}
