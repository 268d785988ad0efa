#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tt_ir::{
    BinaryOp, Branch, ExprArena, ExprId, ExprKind, FunctionDecl, IncludePath, Literal,
    Placeholder, PrimKind, SlotShape, Stmt, SwitchCase, UnaryOp, Variable,
};

use super::*;

fn var(arena: &mut ExprArena, name: &str) -> ExprId {
    arena.alloc_expr(ExprKind::Variable(Variable::scalar(PrimKind::I32, name)))
}

fn lit(arena: &mut ExprArena, v: i32) -> ExprId {
    arena.alloc_expr(ExprKind::Variable(Literal::I32(v).into()))
}

fn bin(arena: &mut ExprArena, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
    arena.alloc_expr(ExprKind::Binary { op, left, right })
}

fn assign(arena: &mut ExprArena, target: ExprId, value: ExprId) -> ExprId {
    arena.alloc_expr(ExprKind::Assign { target, value })
}

fn render_default(arena: &ExprArena, stmts: &[Stmt]) -> CodegenOutput {
    render(arena, stmts, CodegenOptions::default()).unwrap()
}

#[test]
fn every_binary_operator_has_its_token() {
    let ops = [
        (BinaryOp::Add, "+"),
        (BinaryOp::Sub, "-"),
        (BinaryOp::Mul, "*"),
        (BinaryOp::Div, "/"),
        (BinaryOp::Mod, "%"),
        (BinaryOp::Lt, "<"),
        (BinaryOp::LtEq, "<="),
        (BinaryOp::Gt, ">"),
        (BinaryOp::GtEq, ">="),
        (BinaryOp::Eq, "=="),
        (BinaryOp::NotEq, "!="),
        (BinaryOp::And, "&&"),
        (BinaryOp::Or, "||"),
        (BinaryOp::BitAnd, "&"),
        (BinaryOp::BitOr, "|"),
        (BinaryOp::BitXor, "^"),
    ];
    for (op, token) in ops {
        let mut arena = ExprArena::new();
        let a = var(&mut arena, "a");
        let b = var(&mut arena, "b");
        let e = bin(&mut arena, op, a, b);
        assert_eq!(render_expr(&arena, e).unwrap(), format!("a {token} b"));
    }
}

#[test]
fn unary_index_and_assign() {
    let mut arena = ExprArena::new();
    let buf = arena.alloc_expr(ExprKind::Variable(Variable::array(PrimKind::U32, "buf", 8)));
    let i = var(&mut arena, "i");
    let at = arena.alloc_expr(ExprKind::Index { base: buf, index: i });
    let x = var(&mut arena, "x");
    let neg = arena.alloc_expr(ExprKind::Unary {
        op: UnaryOp::Neg,
        operand: x,
    });
    let paren = arena.alloc_expr(ExprKind::Unary {
        op: UnaryOp::Paren,
        operand: neg,
    });
    let not = arena.alloc_expr(ExprKind::Unary {
        op: UnaryOp::Not,
        operand: paren,
    });
    let set = assign(&mut arena, at, not);

    assert_eq!(render_expr(&arena, set).unwrap(), "buf [ i ] = !( -x )");
}

#[test]
fn double_negation_does_not_form_a_decrement() {
    let mut arena = ExprArena::new();
    let x = var(&mut arena, "x");
    let neg = arena.alloc_expr(ExprKind::Unary {
        op: UnaryOp::Neg,
        operand: x,
    });
    let neg_neg = arena.alloc_expr(ExprKind::Unary {
        op: UnaryOp::Neg,
        operand: neg,
    });
    let minus_one = lit(&mut arena, -1);
    let neg_lit = arena.alloc_expr(ExprKind::Unary {
        op: UnaryOp::Neg,
        operand: minus_one,
    });
    let sub = bin(&mut arena, BinaryOp::Sub, x, minus_one);

    assert_eq!(render_expr(&arena, neg_neg).unwrap(), "- -x");
    assert_eq!(render_expr(&arena, neg_lit).unwrap(), "- -1");
    assert_eq!(render_expr(&arena, sub).unwrap(), "x - -1");
}

#[test]
fn declaration_uses_declaration_text() {
    let mut arena = ExprArena::new();
    let m = arena.alloc_expr(ExprKind::Variable(Variable::matrix(
        PrimKind::I32,
        "c",
        [10, 10],
    )));
    let decl = arena.alloc_expr(ExprKind::Declaration(m));
    assert_eq!(render_expr(&arena, decl).unwrap(), "int32_t c [10][10]");

    let x = var(&mut arena, "x");
    let dx = arena.alloc_expr(ExprKind::Declaration(x));
    let zero = lit(&mut arena, 0);
    let init = assign(&mut arena, dx, zero);
    assert_eq!(render_expr(&arena, init).unwrap(), "int32_t x = 0");
}

#[test]
fn declaring_a_literal_fails_loudly() {
    let mut arena = ExprArena::new();
    let five = lit(&mut arena, 5);
    let decl = arena.alloc_expr(ExprKind::Declaration(five));
    assert_eq!(
        render_expr(&arena, decl),
        Err(CodegenError::UnhandledNode {
            id: five,
            reason: "a literal cannot be declared",
        })
    );

    let sum = bin(&mut arena, BinaryOp::Add, five, five);
    let bad = arena.alloc_expr(ExprKind::Declaration(sum));
    assert!(matches!(
        render_expr(&arena, bad),
        Err(CodegenError::UnhandledNode { .. })
    ));
}

#[test]
fn calls_render_arguments_in_order() {
    let mut arena = ExprArena::new();
    let decl = FunctionDecl::new("get_arg_val", Vec::new(), None);
    let zero = lit(&mut arena, 0);
    let args = arena.alloc_expr_list([zero]);
    let inner = arena.alloc_expr(ExprKind::Call { decl, args });

    let a = var(&mut arena, "a");
    let outer_args = arena.alloc_expr_list([inner, a]);
    let outer = arena.alloc_expr(ExprKind::Call {
        decl: FunctionDecl::new("cb_push_back", Vec::new(), None),
        args: outer_args,
    });
    let none = arena.alloc_expr_list([]);
    let bare = arena.alloc_expr(ExprKind::Call {
        decl: FunctionDecl::new("tile_regs_acquire", Vec::new(), None),
        args: none,
    });

    assert_eq!(
        render_expr(&arena, outer).unwrap(),
        "cb_push_back( get_arg_val( 0 ) , a )"
    );
    assert_eq!(render_expr(&arena, bare).unwrap(), "tile_regs_acquire()");
}

#[test]
fn unknown_and_forward_ids_are_errors() {
    let mut arena = ExprArena::new();
    assert_eq!(
        render_expr(&arena, ExprId::new(9)),
        Err(CodegenError::UnknownExpr { id: ExprId::new(9) })
    );

    let a = var(&mut arena, "a");
    // Hand-built node pointing at itself.
    let self_ref = arena.alloc_expr(ExprKind::Binary {
        op: BinaryOp::Add,
        left: a,
        right: ExprId::new(1),
    });
    assert_eq!(
        render_expr(&arena, self_ref),
        Err(CodegenError::ForwardReference {
            parent: self_ref,
            child: self_ref,
        })
    );
}

#[test]
fn simple_statements() {
    let mut arena = ExprArena::new();
    let a = var(&mut arena, "a");
    let zero = lit(&mut arena, 0);
    let set = assign(&mut arena, a, zero);
    let stmts = vec![
        Stmt::Include(IncludePath::System("cstdint".into())),
        Stmt::Include(IncludePath::Local("dataflow_api.h".into())),
        Stmt::Comment("reset\n\ncounter".into()),
        Stmt::Expr(set),
    ];

    assert_eq!(
        render_default(&arena, &stmts).code,
        "#include <cstdint>\n\
         #include \"dataflow_api.h\"\n\
         // reset\n\
         //\n\
         // counter\n\
         a = 0;\n"
    );
}

#[test]
fn for_and_while_loops() {
    let mut arena = ExprArena::new();
    let i = var(&mut arena, "i");
    let n = var(&mut arena, "n");
    let zero = lit(&mut arena, 0);
    let one = lit(&mut arena, 1);
    let init = assign(&mut arena, i, zero);
    let cond = bin(&mut arena, BinaryOp::Lt, i, n);
    let next = bin(&mut arena, BinaryOp::Add, i, one);
    let step = assign(&mut arena, i, next);
    let body_expr = bin(&mut arena, BinaryOp::Mul, n, n);

    let stmts = vec![Stmt::While {
        cond,
        body: vec![Stmt::For {
            init,
            cond,
            step,
            body: vec![Stmt::Expr(body_expr)],
        }],
    }];

    assert_eq!(
        render_default(&arena, &stmts).code,
        "while ( i < n ) {\n    for ( i = 0 ; i < n ; i = i + 1 ) {\n        n * n;\n    }\n}\n"
    );
}

#[test]
fn if_chain_keywords_follow_condition_presence() {
    let mut arena = ExprArena::new();
    let c1 = var(&mut arena, "c1");
    let c2 = var(&mut arena, "c2");
    let b1 = var(&mut arena, "b1");
    let b2 = var(&mut arena, "b2");
    let b3 = var(&mut arena, "b3");
    let stmts = vec![Stmt::If {
        branches: vec![
            Branch {
                cond: Some(c1),
                body: vec![Stmt::Expr(b1)],
            },
            Branch {
                cond: Some(c2),
                body: vec![Stmt::Expr(b2)],
            },
            Branch {
                cond: None,
                body: vec![Stmt::Expr(b3)],
            },
        ],
    }];

    let out = render_default(&arena, &stmts);
    assert_eq!(
        out.code,
        "if ( c1 ) {\n    b1;\n} else if ( c2 ) {\n    b2;\n} else {\n    b3;\n}\n"
    );
    assert!(out.diagnostics.is_empty());
}

#[test]
fn misplaced_and_repeated_else_render_with_diagnostics() {
    let mut arena = ExprArena::new();
    let c = var(&mut arena, "c");
    let b = var(&mut arena, "b");
    let body = || vec![Stmt::Expr(b)];
    let stmts = vec![Stmt::If {
        branches: vec![
            Branch {
                cond: Some(c),
                body: body(),
            },
            Branch {
                cond: None,
                body: body(),
            },
            Branch {
                cond: Some(c),
                body: body(),
            },
            Branch {
                cond: None,
                body: body(),
            },
        ],
    }];

    let out = render_default(&arena, &stmts);
    assert_eq!(
        out.code,
        "if ( c ) {\n    b;\n} else {\n    b;\n} else if ( c ) {\n    b;\n} else {\n    b;\n}\n"
    );
    assert_eq!(
        out.diagnostics,
        vec![
            Diagnostic::MisplacedElse { position: 1 },
            Diagnostic::MultipleElse { count: 2 },
        ]
    );
}

#[test]
fn if_without_leading_condition_is_an_error() {
    let arena = ExprArena::new();
    let stmts = vec![Stmt::If {
        branches: vec![Branch {
            cond: None,
            body: Vec::new(),
        }],
    }];
    assert_eq!(
        render(&arena, &stmts, CodegenOptions::default()),
        Err(CodegenError::MissingCondition)
    );
}

#[test]
fn empty_bodies_are_reported() {
    let mut arena = ExprArena::new();
    let c = var(&mut arena, "c");
    let stmts = vec![
        Stmt::If {
            branches: Vec::new(),
        },
        Stmt::While {
            cond: c,
            body: Vec::new(),
        },
        Stmt::Switch {
            subject: c,
            cases: Vec::new(),
            default: None,
        },
    ];

    let out = render_default(&arena, &stmts);
    assert_eq!(out.code, "while ( c ) {\n}\nswitch ( c ) {\n}\n");
    assert_eq!(
        out.diagnostics,
        vec![
            Diagnostic::EmptyIf,
            Diagnostic::EmptyBody {
                construct: "while"
            },
            Diagnostic::EmptySwitch,
        ]
    );
}

#[test]
fn switch_cases_then_default() {
    let mut arena = ExprArena::new();
    let x = var(&mut arena, "x");
    let one = lit(&mut arena, 1);
    let two = lit(&mut arena, 2);
    let b1 = var(&mut arena, "b1");
    let b2 = var(&mut arena, "b2");
    let b3 = var(&mut arena, "b3");
    let stmts = vec![Stmt::Switch {
        subject: x,
        cases: vec![
            SwitchCase {
                value: one,
                body: vec![Stmt::Expr(b1)],
            },
            SwitchCase {
                value: two,
                body: vec![Stmt::Expr(b2)],
            },
        ],
        default: Some(vec![Stmt::Expr(b3)]),
    }];

    assert_eq!(
        render_default(&arena, &stmts).code,
        "switch ( x ) {\n\
         \x20   case 1 : {\n\
         \x20       b1;\n\
         \x20   } break;\n\
         \x20   case 2 : {\n\
         \x20       b2;\n\
         \x20   } break;\n\
         \x20   default: {\n\
         \x20       b3;\n\
         \x20   } break;\n\
         }\n"
    );
}

#[test]
fn function_definitions() {
    let mut arena = ExprArena::new();
    let a = var(&mut arena, "a");
    let main = vec![Stmt::FunctionDef {
        decl: FunctionDecl::KERNEL_MAIN,
        params: Vec::new(),
        body: vec![Stmt::Expr(a)],
    }];
    assert_eq!(
        render_default(&arena, &main).code,
        "void kernel_main() {\n    a;\n}\n"
    );

    let slots: Vec<Placeholder> = [(SlotShape::Scalar, 0), (SlotShape::Array, 1)]
        .into_iter()
        .filter_map(|(shape, n)| Placeholder::new(PrimKind::U32, shape, n))
        .collect();
    let helper = vec![Stmt::FunctionDef {
        decl: FunctionDecl::new(
            "scale",
            Vec::new(),
            Some(tt_ir::ValueType::scalar(PrimKind::F32)),
        ),
        params: slots,
        body: Vec::new(),
    }];
    let out = render_default(&arena, &helper);
    assert_eq!(
        out.code,
        "float scale( uint32_t s_u32_0, uint32_t a_u32_1 [] ) {\n}\n"
    );
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::EmptyBody {
            construct: "function"
        }]
    );
}

#[test]
fn deep_expression_hits_depth_limit() {
    let mut arena = ExprArena::new();
    let mut e = var(&mut arena, "x");
    for _ in 0..64 {
        e = arena.alloc_expr(ExprKind::Unary {
            op: UnaryOp::Neg,
            operand: e,
        });
    }
    assert_eq!(
        c::emit_expr(&arena, e, 16),
        Err(CodegenError::NestingTooDeep { limit: 16 })
    );
    assert_eq!(render_expr(&arena, e).map(|s| s.len()), Ok(128));
}

#[test]
fn deeply_nested_blocks_render_with_default_limit() {
    let mut arena = ExprArena::new();
    let c = var(&mut arena, "c");
    let mut stmt = Stmt::Expr(c);
    for _ in 0..500 {
        stmt = Stmt::While {
            cond: c,
            body: vec![stmt],
        };
    }
    let out = render_default(&arena, &[stmt]);
    assert_eq!(out.code.matches("while").count(), 500);
    assert!(out.code.ends_with("}\n"));
}
