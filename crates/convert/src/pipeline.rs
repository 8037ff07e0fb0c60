use frames::{Expr, RootId};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Pipeline is the host collection runtime into which frames are materialized.
pub trait Pipeline<P> {
    /// Handle to a collection of this pipeline.
    type Collection: Clone;

    /// Apply, under `label`, a single transform which reads the `inputs`
    /// bound to each Root node and produces one output collection for each
    /// of the indexed `outputs`. Expressions sharing a Root node read the
    /// same input, and the pipeline may share work across correlated outputs.
    ///
    /// The returned map is keyed on the indices of `outputs`.
    fn apply_expressions(
        &mut self,
        label: &str,
        inputs: BTreeMap<RootId, Self::Collection>,
        outputs: BTreeMap<usize, Arc<Expr<P>>>,
    ) -> anyhow::Result<BTreeMap<usize, Self::Collection>>;

    /// Infer a schema proxy of the `collection`, if its schema is known.
    fn infer_proxy(&self, _collection: &Self::Collection) -> Option<P> {
        None
    }
}
