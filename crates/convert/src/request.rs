use crate::label;
use frames::DeferredFrame;

/// Request of frames to materialize together, in order.
pub struct Request<'f, P> {
    pub(crate) frames: Vec<(Option<String>, &'f DeferredFrame<P>)>,
    pub(crate) label: Option<String>,
    pub(crate) always_return_sequence: Option<bool>,
}

impl<'f, P> Default for Request<'f, P> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            label: None,
            always_return_sequence: None,
        }
    }
}

impl<'f, P> Request<'f, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an anonymous frame.
    pub fn frame(mut self, frame: &'f DeferredFrame<P>) -> Self {
        self.frames.push((None, frame));
        self
    }

    /// Add a frame having a `name` for use in derived labels.
    pub fn named(mut self, name: impl Into<String>, frame: &'f DeferredFrame<P>) -> Self {
        self.frames.push((Some(name.into()), frame));
        self
    }

    /// Add a frame given the source text of its argument expression,
    /// which names the frame if it's a plain binding.
    pub fn binding(mut self, source: &str, frame: &'f DeferredFrame<P>) -> Self {
        let name = label::binding_name(source).map(str::to_string);
        self.frames.push((name, frame));
        self
    }

    /// Use `label` for the applied transform, rather than deriving one.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Require a sequence of results, even if the request has a single input.
    pub fn always_return_sequence(mut self, always: bool) -> Self {
        self.always_return_sequence = Some(always);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Materialized collections of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized<C> {
    /// The request had a single result (see `SingleResult`).
    Single(C),
    /// Results of each requested frame, in request order.
    Sequence(Vec<C>),
}

impl<C> Materialized<C> {
    pub fn len(&self) -> usize {
        match self {
            Materialized::Single(_) => 1,
            Materialized::Sequence(seq) => seq.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn single(self) -> Option<C> {
        match self {
            Materialized::Single(collection) => Some(collection),
            Materialized::Sequence(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<C> {
        match self {
            Materialized::Single(collection) => vec![collection],
            Materialized::Sequence(seq) => seq,
        }
    }
}
