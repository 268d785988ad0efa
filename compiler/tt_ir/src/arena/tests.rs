use super::*;
use crate::{BinaryOp, FunctionDecl, Literal, PrimKind, Variable};

#[test]
fn alloc_returns_sequential_ids() {
    let mut arena = ExprArena::new();
    let a = arena.alloc_expr(ExprKind::Variable(Variable::scalar(PrimKind::I32, "a")));
    let b = arena.alloc_expr(ExprKind::Variable(Literal::I32(1).into()));
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.len(), 2);
}

#[test]
fn children_precede_parents() {
    let mut arena = ExprArena::new();
    let a = arena.alloc_expr(ExprKind::Variable(Variable::scalar(PrimKind::I32, "a")));
    let one = arena.alloc_expr(ExprKind::Variable(Literal::I32(1).into()));
    let sum = arena.alloc_expr(ExprKind::Binary {
        op: BinaryOp::Add,
        left: a,
        right: one,
    });

    let node = arena.get(sum).map(ExprKind::inline_children);
    assert_eq!(node.as_deref(), Some(&[a, one][..]));
    assert!(a < sum && one < sum);
}

#[test]
fn expr_lists_round_trip() {
    let mut arena = ExprArena::new();
    let x = arena.alloc_expr(ExprKind::Variable(Literal::U32(0).into()));
    let y = arena.alloc_expr(ExprKind::Variable(Literal::U32(1).into()));
    let args = arena.alloc_expr_list([x, y]);
    let call = arena.alloc_expr(ExprKind::Call {
        decl: FunctionDecl::new("noc_async_read_barrier", Vec::new(), None),
        args,
    });

    assert_eq!(arena.get_list(args), Some(&[x, y][..]));
    assert!(arena.get(call).is_some());
    assert_eq!(arena.get_list(ExprRange::EMPTY), Some(&[][..]));
    assert_eq!(arena.alloc_expr_list([]), ExprRange::EMPTY);
}

#[test]
fn unknown_ids_are_none() {
    let arena = ExprArena::new();
    assert!(arena.get(ExprId::new(3)).is_none());
    assert!(arena.get(ExprId::INVALID).is_none());
    assert!(arena.get_list(ExprRange::new(5, 2)).is_none());
}
