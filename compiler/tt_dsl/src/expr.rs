//! Expression handles and operator overloading.
//!
//! An [`Expr`] is a copyable reference to a node in a [`KernelContext`].
//! Operators build new nodes in the same context. Native right-hand
//! operands become literals of the matching kind: a bare integer is `i32`,
//! a bare float is `f64`.

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};

use tt_codegen::{render_expr, CodegenError};
use tt_ir::{BinaryOp, ExprId, ExprKind, Literal, UnaryOp, Variable};

use crate::{KernelContext, Role};

#[derive(Copy, Clone)]
pub struct Expr<'ctx, R: Role> {
    ctx: &'ctx KernelContext<R>,
    id: ExprId,
}

/// Anything usable as a child node: a handle or a native value.
#[derive(Copy, Clone, Debug)]
pub enum Operand<'ctx, R: Role> {
    Expr(Expr<'ctx, R>),
    Literal(Literal),
}

impl<'ctx, R: Role> Expr<'ctx, R> {
    pub(crate) fn new(ctx: &'ctx KernelContext<R>, id: ExprId) -> Self {
        Expr { ctx, id }
    }

    #[inline]
    pub fn id(self) -> ExprId {
        self.id
    }

    #[inline]
    pub fn context(self) -> &'ctx KernelContext<R> {
        self.ctx
    }

    pub(crate) fn belongs_to(self, ctx: &KernelContext<R>) -> bool {
        std::ptr::eq(self.ctx, ctx)
    }

    /// The variable leaf behind this handle, if it is one.
    pub fn variable(self) -> Option<Variable> {
        self.ctx
            .arena()
            .get(self.id)
            .and_then(ExprKind::as_variable)
            .cloned()
    }

    /// Render this expression on its own.
    pub fn render(self) -> Result<String, CodegenError> {
        render_expr(&self.ctx.arena(), self.id)
    }

    fn wrap(self, kind: ExprKind) -> Self {
        Expr::new(self.ctx, self.ctx.alloc(kind))
    }

    fn binary(self, op: BinaryOp, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        let right = self.ctx.attach(rhs.into());
        self.wrap(ExprKind::Binary {
            op,
            left: self.id,
            right,
        })
    }

    fn unary(self, op: UnaryOp) -> Self {
        self.wrap(ExprKind::Unary {
            op,
            operand: self.id,
        })
    }

    /// Declaration of this variable, rendered with its type.
    pub fn declare(self) -> Self {
        self.wrap(ExprKind::Declaration(self.id))
    }

    /// `self = value`
    pub fn assign(self, value: impl Into<Operand<'ctx, R>>) -> Self {
        let value = self.ctx.attach(value.into());
        self.wrap(ExprKind::Assign {
            target: self.id,
            value,
        })
    }

    /// `self [ index ]`
    pub fn at(self, index: impl Into<Operand<'ctx, R>>) -> Self {
        let index = self.ctx.attach(index.into());
        self.wrap(ExprKind::Index {
            base: self.id,
            index,
        })
    }

    pub fn lt(self, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        self.binary(BinaryOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        self.binary(BinaryOp::LtEq, rhs)
    }

    pub fn gt(self, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        self.binary(BinaryOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        self.binary(BinaryOp::GtEq, rhs)
    }

    pub fn equals(self, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        self.binary(BinaryOp::Eq, rhs)
    }

    pub fn not_equals(self, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        self.binary(BinaryOp::NotEq, rhs)
    }

    /// Logical `&&`.
    pub fn and(self, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        self.binary(BinaryOp::And, rhs)
    }

    /// Logical `||`.
    pub fn or(self, rhs: impl Into<Operand<'ctx, R>>) -> Self {
        self.binary(BinaryOp::Or, rhs)
    }

    /// `( self )`
    pub fn paren(self) -> Self {
        self.unary(UnaryOp::Paren)
    }
}

impl<R: Role> fmt::Debug for Expr<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Expr");
        s.field("role", &R::NAME).field("id", &self.id);
        if let Ok(text) = self.render() {
            s.field("text", &text);
        }
        s.finish()
    }
}

impl<'ctx, R: Role> From<Expr<'ctx, R>> for Operand<'ctx, R> {
    fn from(expr: Expr<'ctx, R>) -> Self {
        Operand::Expr(expr)
    }
}

impl<R: Role> From<Literal> for Operand<'_, R> {
    fn from(lit: Literal) -> Self {
        Operand::Literal(lit)
    }
}

macro_rules! impl_operand_from_native {
    ($($native:ty),*) => {
        $(
            impl<R: Role> From<$native> for Operand<'_, R> {
                #[inline]
                fn from(v: $native) -> Self {
                    Operand::Literal(Literal::from(v))
                }
            }
        )*
    };
}

impl_operand_from_native!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool);

macro_rules! impl_binary_ops {
    ($($trait:ident :: $method:ident => $op:ident),* $(,)?) => {
        $(
            impl<'ctx, R: Role, T: Into<Operand<'ctx, R>>> $trait<T> for Expr<'ctx, R> {
                type Output = Expr<'ctx, R>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.binary(BinaryOp::$op, rhs)
                }
            }
        )*
    };
}

impl_binary_ops! {
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => Div,
    Rem::rem => Mod,
    BitAnd::bitand => BitAnd,
    BitOr::bitor => BitOr,
    BitXor::bitxor => BitXor,
}

/// Native left-hand operands: `1 + x`.
macro_rules! impl_native_lhs_ops {
    (@one $native:ty, $($trait:ident :: $method:ident => $op:ident),*) => {
        $(
            impl<'ctx, R: Role> $trait<Expr<'ctx, R>> for $native {
                type Output = Expr<'ctx, R>;

                fn $method(self, rhs: Expr<'ctx, R>) -> Self::Output {
                    let ctx = rhs.context();
                    let left = ctx.literal(self).id();
                    Expr::new(ctx, ctx.alloc(ExprKind::Binary {
                        op: BinaryOp::$op,
                        left,
                        right: rhs.id(),
                    }))
                }
            }
        )*
    };
    ($($native:ty),*) => {
        $(
            impl_native_lhs_ops!(@one $native, Add::add => Add, Sub::sub => Sub,
                Mul::mul => Mul, Div::div => Div, Rem::rem => Mod);
        )*
    };
}

impl_native_lhs_ops!(i32, i64, u32, u64, f32, f64);

impl<R: Role> Neg for Expr<'_, R> {
    type Output = Self;

    fn neg(self) -> Self {
        self.unary(UnaryOp::Neg)
    }
}

/// Logical negation, `!self`.
impl<R: Role> Not for Expr<'_, R> {
    type Output = Self;

    fn not(self) -> Self {
        self.unary(UnaryOp::Not)
    }
}
