use serde::{Deserialize, Serialize};

/// Options of a Session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Strategy for labels which are derived, rather than given.
    pub label_strategy: LabelStrategy,
    /// When a materialization returns a single collection.
    pub single_result: SingleResult,
    /// Default of requests which don't say whether a sequence is required.
    pub always_return_sequence: bool,
}

/// LabelStrategy disambiguates derived `ToDataframe(...)` labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelStrategy {
    /// Frame names only: `ToDataframe(sales, ...)`.
    #[default]
    Names,
    /// Suffix a per-session sequence number: `ToDataframe(sales) #3`.
    Counter,
    /// Suffix a hash of the requested expressions: `ToDataframe(sales) [0123456789abcdef]`.
    Structural,
}

/// SingleResult selects when an un-wrapped single collection is returned
/// instead of a sequence.
///
/// `OneInput` keys off the number of distinct Root nodes, not the number of
/// requested frames. Several frames computed from one shared input then
/// produce a single result (the first frame's), and callers wanting each of
/// them must set `always_return_sequence`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SingleResult {
    /// Exactly one distinct Root node was read.
    #[default]
    OneInput,
    /// Exactly one frame was requested.
    OneFrame,
}
