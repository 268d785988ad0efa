//! Property tests for the renderer over generated statement trees.
//!
//! Checks that rendering is deterministic and that every block closes at
//! the indentation it opened at.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use tt_codegen::{render, CodegenOptions};
use tt_ir::{BinaryOp, Branch, ExprArena, ExprId, ExprKind, Literal, PrimKind, Stmt, SwitchCase, Variable};

/// Shape of a statement tree, independent of any arena.
#[derive(Clone, Debug)]
enum Shape {
    Leaf(i32),
    Loop(Vec<Shape>),
    While(Vec<Shape>),
    If(Vec<Vec<Shape>>, Option<Vec<Shape>>),
    Switch(Vec<Vec<Shape>>, Option<Vec<Shape>>),
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = any::<i32>().prop_map(Shape::Leaf);
    leaf.prop_recursive(5, 48, 4, |inner| {
        let body = prop::collection::vec(inner, 0..4);
        prop_oneof![
            body.clone().prop_map(Shape::Loop),
            body.clone().prop_map(Shape::While),
            (
                prop::collection::vec(body.clone(), 1..3),
                prop::option::of(body.clone())
            )
                .prop_map(|(arms, other)| Shape::If(arms, other)),
            (prop::collection::vec(body.clone(), 0..3), prop::option::of(body))
                .prop_map(|(cases, default)| Shape::Switch(cases, default)),
        ]
    })
}

struct Builder {
    arena: ExprArena,
    x: ExprId,
}

impl Builder {
    fn new() -> Self {
        let mut arena = ExprArena::new();
        let x = arena.alloc_expr(ExprKind::Variable(Variable::scalar(PrimKind::I32, "x")));
        Builder { arena, x }
    }

    fn lit(&mut self, v: i32) -> ExprId {
        self.arena.alloc_expr(ExprKind::Variable(Literal::I32(v).into()))
    }

    fn cond(&mut self, v: i32) -> ExprId {
        let rhs = self.lit(v);
        self.arena.alloc_expr(ExprKind::Binary {
            op: BinaryOp::Lt,
            left: self.x,
            right: rhs,
        })
    }

    fn body(&mut self, shapes: &[Shape]) -> Vec<Stmt> {
        shapes.iter().map(|s| self.stmt(s)).collect()
    }

    fn stmt(&mut self, shape: &Shape) -> Stmt {
        match shape {
            Shape::Leaf(v) => {
                let value = self.lit(*v);
                Stmt::Expr(self.arena.alloc_expr(ExprKind::Assign {
                    target: self.x,
                    value,
                }))
            }
            Shape::Loop(body) => {
                let init = self.cond(0);
                let cond = self.cond(1);
                let step = self.cond(2);
                Stmt::For {
                    init,
                    cond,
                    step,
                    body: self.body(body),
                }
            }
            Shape::While(body) => Stmt::While {
                cond: self.cond(3),
                body: self.body(body),
            },
            Shape::If(arms, other) => {
                let mut branches: Vec<Branch> = arms
                    .iter()
                    .enumerate()
                    .map(|(i, arm)| Branch {
                        cond: Some(self.cond(i32::try_from(i).unwrap())),
                        body: self.body(arm),
                    })
                    .collect();
                if let Some(other) = other {
                    branches.push(Branch {
                        cond: None,
                        body: self.body(other),
                    });
                }
                Stmt::If { branches }
            }
            Shape::Switch(cases, default) => Stmt::Switch {
                subject: self.x,
                cases: cases
                    .iter()
                    .enumerate()
                    .map(|(i, case)| SwitchCase {
                        value: self.lit(i32::try_from(i).unwrap()),
                        body: self.body(case),
                    })
                    .collect(),
                default: default.as_ref().map(|d| self.body(d)),
            },
        }
    }
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn rendering_is_deterministic(shapes in prop::collection::vec(shape_strategy(), 1..5)) {
        let mut b = Builder::new();
        let stmts = b.body(&shapes);
        let first = render(&b.arena, &stmts, CodegenOptions::default()).unwrap();
        let second = render(&b.arena, &stmts, CodegenOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blocks_close_at_their_opening_indent(shapes in prop::collection::vec(shape_strategy(), 1..5)) {
        let mut b = Builder::new();
        let stmts = b.body(&shapes);
        let out = render(&b.arena, &stmts, CodegenOptions::default()).unwrap();

        let mut open: Vec<usize> = Vec::new();
        for line in out.code.lines() {
            let indent = indent_of(line);
            let text = line.trim_start();
            if text.starts_with('}') {
                let opened = open.pop();
                prop_assert_eq!(opened, Some(indent), "line {:?}", line);
            }
            if text.ends_with('{') {
                if let Some(&parent) = open.last() {
                    prop_assert!(indent > parent);
                }
                open.push(indent);
            }
        }
        prop_assert!(open.is_empty());
        // Top-level statements start at column zero.
        prop_assert_eq!(out.code.lines().next().map(indent_of), Some(0));
    }
}
