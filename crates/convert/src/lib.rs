//! Conversion between pipeline collections and deferred frames.
//!
//! Collections are lifted into frames with [`Session::lift`], composed by
//! tabular operations into expression trees, and finally materialized back
//! into collections by [`Session::materialize`] (or the [`materialize!`]
//! macro), which applies a single batched transform for all requested frames.
use frames::RootId;

#[macro_use]
mod macros;
mod label;
mod options;
mod pipeline;
mod request;
mod session;

pub use frames::{DeferredFrame, Expr, Reference};
pub use label::{binding_name, ANONYMOUS};
pub use options::{LabelStrategy, Options, SingleResult};
pub use pipeline::Pipeline;
pub use request::{Materialized, Request};
pub use session::Session;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("at least one frame must be given to materialize")]
    NoFrames,
    #[error("{root} is not bound to a collection: expression roots must have been created with lift")]
    InvalidRoot { root: RootId },
    #[error("{root} was not created by this session")]
    UnknownRoot { root: RootId },
    #[error("a schema proxy must be given when it cannot be inferred from the collection")]
    MissingProxy,
    #[error("transform {label:?} produced no output for requested frame {index}")]
    MissingOutput { label: String, index: usize },
    #[error("failed to apply transform {label:?}")]
    Apply {
        label: String,
        #[source]
        detail: anyhow::Error,
    },
}
