use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

// Source of unique ids of Roots arenas.
static NEXT_ARENA: AtomicU64 = AtomicU64::new(0);

/// RootId is the identity of a Root node: the arena which allocated it,
/// and its dense index within that arena. Two Roots which wrap equal
/// references remain distinct unless they are the same allocation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RootId {
    arena: u64,
    index: u32,
}

impl RootId {
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for RootId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "root#{}", self.index)
    }
}
impl Debug for RootId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

/// Reference is the value bound by a Root node.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<C> {
    /// Handle to a collection of the host pipeline.
    Collection(C),
    /// Any other bound value. Frames rooted here can be composed,
    /// but cannot be materialized into a collection.
    Value(serde_json::Value),
}

impl<C> Reference<C> {
    pub fn as_collection(&self) -> Option<&C> {
        match self {
            Reference::Collection(collection) => Some(collection),
            Reference::Value(_) => None,
        }
    }
}

/// Root is a leaf of expression trees, binding a reference
/// to the proxy which describes its eventual tabular shape.
#[derive(Debug, Clone)]
pub struct Root<C, P> {
    pub proxy: P,
    pub reference: Reference<C>,
}

/// Roots is an append-only arena of Root nodes.
/// RootIds of one arena never resolve within another.
#[derive(Debug)]
pub struct Roots<C, P> {
    arena: u64,
    nodes: Vec<Root<C, P>>,
}

impl<C, P> Default for Roots<C, P> {
    fn default() -> Self {
        Self {
            arena: NEXT_ARENA.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }
}

impl<C, P> Roots<C, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new Root, returning its fresh and unique RootId.
    pub fn insert(&mut self, proxy: P, reference: Reference<C>) -> RootId {
        let index = u32::try_from(self.nodes.len()).expect("arena holds fewer than 2^32 roots");
        self.nodes.push(Root { proxy, reference });

        RootId {
            arena: self.arena,
            index,
        }
    }

    /// Fetch the Root of `id`, if it was allocated by this arena.
    pub fn get(&self, id: RootId) -> Option<&Root<C, P>> {
        if id.arena != self.arena {
            return None;
        }
        self.nodes.get(id.index as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
