use crate::{label, Error, LabelStrategy, Materialized, Options, Pipeline, Request, SingleResult};
use frames::{DeferredFrame, Expr, Reference, RootId, Roots};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Session owns the Root nodes of frames lifted from collections
/// of a pipeline, and materializes frames back into collections.
/// Frames may only be materialized by the Session which lifted them.
pub struct Session<C, P> {
    roots: Roots<C, P>,
    options: Options,
    // Number of labels derived under LabelStrategy::Counter.
    derived: u64,
}

impl<C, P> Default for Session<C, P> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<C, P> Session<C, P> {
    pub fn new(options: Options) -> Self {
        Self {
            roots: Roots::new(),
            options,
            derived: 0,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn roots(&self) -> &Roots<C, P> {
        &self.roots
    }

    /// Lift a `collection` into a deferred frame, having a `proxy` which
    /// describes the tabular shape of its eventual contents.
    /// Nothing is computed until the frame is materialized.
    pub fn lift(&mut self, collection: C, proxy: P) -> DeferredFrame<P> {
        self.bind(Reference::Collection(collection), proxy)
    }

    /// Lift a `collection` having a schema proxy which is inferred by the `pipeline`.
    pub fn lift_inferred<R>(&mut self, pipeline: &R, collection: C) -> Result<DeferredFrame<P>, Error>
    where
        R: Pipeline<P, Collection = C>,
    {
        let proxy = pipeline
            .infer_proxy(&collection)
            .ok_or(Error::MissingProxy)?;

        Ok(self.lift(collection, proxy))
    }

    /// Bind an arbitrary `reference` as the Root of a new deferred frame.
    /// Only frames rooted in collections can be materialized.
    pub fn bind(&mut self, reference: Reference<C>, proxy: P) -> DeferredFrame<P> {
        let root = self.roots.insert(proxy, reference);
        tracing::debug!(%root, "bound root of deferred frame");

        DeferredFrame::wrap(Expr::placeholder(root))
    }

    /// Materialize the frames of the `request` by applying a single transform
    /// to the `pipeline`, which reads each distinct Root node of the frames
    /// exactly once.
    pub fn materialize<R>(
        &mut self,
        pipeline: &mut R,
        request: Request<'_, P>,
    ) -> Result<Materialized<C>, Error>
    where
        R: Pipeline<P, Collection = C>,
        C: Clone,
    {
        if request.is_empty() {
            return Err(Error::NoFrames);
        }
        let Request {
            frames,
            label,
            always_return_sequence,
        } = request;

        let label = match label {
            Some(label) => label,
            None => self.derive_label(&frames),
        };

        let placeholders: BTreeSet<RootId> = frames
            .iter()
            .flat_map(|(_, frame)| frame.placeholders())
            .collect();

        let inputs = placeholders
            .iter()
            .map(|root| self.extract_input(*root).map(|input| (*root, input)))
            .collect::<Result<BTreeMap<_, _>, Error>>()?;

        let outputs: BTreeMap<usize, Arc<Expr<P>>> = frames
            .iter()
            .enumerate()
            .map(|(index, (_, frame))| (index, frame.expr().clone()))
            .collect();

        tracing::debug!(
            %label,
            inputs = inputs.len(),
            outputs = outputs.len(),
            "applying dataframe expressions transform"
        );

        let mut results = pipeline
            .apply_expressions(&label, inputs, outputs)
            .map_err(|detail| Error::Apply {
                label: label.clone(),
                detail,
            })?;

        let mut sequence = Vec::with_capacity(frames.len());
        for index in 0..frames.len() {
            match results.remove(&index) {
                Some(collection) => sequence.push(collection),
                None => return Err(Error::MissingOutput { label, index }),
            }
        }

        let single = match self.options.single_result {
            SingleResult::OneInput => placeholders.len() == 1,
            SingleResult::OneFrame => frames.len() == 1,
        };
        let always_return_sequence =
            always_return_sequence.unwrap_or(self.options.always_return_sequence);

        if !single || always_return_sequence {
            return Ok(Materialized::Sequence(sequence));
        }
        if sequence.len() != 1 {
            tracing::warn!(
                %label,
                frames = sequence.len(),
                "requested frames read a single input, and only the first frame's result is returned (request a sequence to receive all of them)"
            );
        }
        // `sequence` has an entry for each of at least one frame.
        Ok(Materialized::Single(sequence.swap_remove(0)))
    }

    fn derive_label(&mut self, frames: &[(Option<String>, &DeferredFrame<P>)]) -> String {
        let label = label::to_dataframe(frames.iter().map(|(name, _)| name.as_deref()));

        match self.options.label_strategy {
            LabelStrategy::Names => label,
            LabelStrategy::Counter => {
                self.derived += 1;
                format!("{label} #{}", self.derived)
            }
            LabelStrategy::Structural => {
                let mut hasher = xxhash_rust::xxh3::Xxh3::new();
                for (_, frame) in frames {
                    frame.expr().fingerprint(&mut hasher);
                }
                format!("{label} [{:016x}]", hasher.digest())
            }
        }
    }

    fn extract_input(&self, root: RootId) -> Result<C, Error>
    where
        C: Clone,
    {
        let node = self.roots.get(root).ok_or(Error::UnknownRoot { root })?;

        match node.reference.as_collection() {
            Some(collection) => Ok(collection.clone()),
            None => Err(Error::InvalidRoot { root }),
        }
    }
}
