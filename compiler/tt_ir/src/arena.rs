//! Flat storage for expression nodes.

use crate::{ExprId, ExprKind, ExprRange};

/// Owns every expression node of one kernel under construction.
///
/// Nodes are only appended, and a node can only name ids that already
/// exist, so the stored trees are acyclic.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(capacity),
            expr_lists: Vec::with_capacity(capacity / 4),
        }
    }

    /// Append a node and return its id.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = u32::try_from(self.exprs.len())
            .ok()
            .filter(|&raw| raw != u32::MAX)
            .map(ExprId::new);
        let Some(id) = id else {
            panic!("expression arena exhausted")
        };
        self.exprs.push(kind);
        id
    }

    /// Store a run of argument ids. An empty run is [`ExprRange::EMPTY`].
    ///
    /// # Panics
    /// Panics on more than `u16::MAX` arguments.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(ids);
        let len = self.expr_lists.len() - start;
        if len == 0 {
            return ExprRange::EMPTY;
        }
        let (Ok(start), Ok(len)) = (u32::try_from(start), u16::try_from(len)) else {
            panic!("argument list too long: {len} entries")
        };
        ExprRange::new(start, len)
    }

    /// Get a node by id.
    #[inline]
    pub fn get(&self, id: ExprId) -> Option<&ExprKind> {
        self.exprs.get(id.index())
    }

    /// Get a node by id, mutably.
    #[inline]
    pub fn get_mut(&mut self, id: ExprId) -> Option<&mut ExprKind> {
        self.exprs.get_mut(id.index())
    }

    /// Ids in `range`, or `None` if the range was not produced by this arena.
    pub fn get_list(&self, range: ExprRange) -> Option<&[ExprId]> {
        let start = range.start as usize;
        self.expr_lists.get(start..start + range.len())
    }

    /// Number of nodes allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Check if no node has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

#[cfg(test)]
mod tests;
