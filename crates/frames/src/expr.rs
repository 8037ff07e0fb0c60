use crate::RootId;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Expr is a node of an immutable expression DAG.
/// Sub-trees are shared through `Arc`, and a single placeholder
/// may be reachable from many independently-built trees.
#[derive(Debug)]
pub enum Expr<P> {
    /// Placeholder for the value bound by a Root node.
    Placeholder(RootId),
    /// Operation over the values of argument expressions,
    /// having a proxy of its result shape.
    Computed {
        operation: String,
        proxy: P,
        args: Vec<Arc<Expr<P>>>,
    },
}

impl<P> Expr<P> {
    pub fn placeholder(root: RootId) -> Arc<Self> {
        Arc::new(Expr::Placeholder(root))
    }

    pub fn computed(
        operation: impl Into<String>,
        proxy: P,
        args: impl IntoIterator<Item = Arc<Expr<P>>>,
    ) -> Arc<Self> {
        Arc::new(Expr::Computed {
            operation: operation.into(),
            proxy,
            args: args.into_iter().collect(),
        })
    }

    /// Set of Root nodes reachable from this expression.
    pub fn placeholders(&self) -> BTreeSet<RootId> {
        let mut out = BTreeSet::new();
        let mut stack = vec![self];

        while let Some(expr) = stack.pop() {
            match expr {
                Expr::Placeholder(root) => {
                    out.insert(*root);
                }
                Expr::Computed { args, .. } => stack.extend(args.iter().map(|arg| &**arg)),
            }
        }
        out
    }

    /// Feed the structure of this expression into `hasher`.
    /// Proxies are opaque and don't participate.
    pub fn fingerprint(&self, hasher: &mut xxhash_rust::xxh3::Xxh3) {
        match self {
            Expr::Placeholder(root) => {
                hasher.update(b"P");
                hasher.update(&u64::from(root.index()).to_be_bytes());
            }
            Expr::Computed {
                operation, args, ..
            } => {
                hasher.update(b"C");
                hasher.update(&(operation.len() as u64).to_be_bytes());
                hasher.update(operation.as_bytes());
                hasher.update(&(args.len() as u64).to_be_bytes());

                for arg in args {
                    arg.fingerprint(hasher);
                }
            }
        }
    }
}
