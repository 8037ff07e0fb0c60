use crate::{Expr, RootId};
use std::collections::BTreeSet;
use std::sync::Arc;

/// DeferredFrame is the caller-facing handle of a deferred expression tree.
/// Frames are cheap to clone, and clones share their tree.
#[derive(Debug)]
pub struct DeferredFrame<P> {
    expr: Arc<Expr<P>>,
}

impl<P> Clone for DeferredFrame<P> {
    fn clone(&self) -> Self {
        Self {
            expr: self.expr.clone(),
        }
    }
}

impl<P> DeferredFrame<P> {
    pub fn wrap(expr: Arc<Expr<P>>) -> Self {
        Self { expr }
    }

    pub fn expr(&self) -> &Arc<Expr<P>> {
        &self.expr
    }

    pub fn into_expr(self) -> Arc<Expr<P>> {
        self.expr
    }

    pub fn placeholders(&self) -> BTreeSet<RootId> {
        self.expr.placeholders()
    }

    /// Derive a frame applying `operation` to this one.
    pub fn compute(&self, operation: impl Into<String>, proxy: P) -> Self {
        Self::wrap(Expr::computed(operation, proxy, [self.expr.clone()]))
    }

    /// Derive a frame applying `operation` over this frame and `others`, in order.
    pub fn combine(&self, operation: impl Into<String>, proxy: P, others: &[&Self]) -> Self {
        let args = std::iter::once(self.expr.clone())
            .chain(others.iter().map(|other| other.expr.clone()))
            .collect::<Vec<_>>();

        Self::wrap(Expr::computed(operation, proxy, args))
    }
}
