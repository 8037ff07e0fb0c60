//! Deferred, schema-aware frames over collections that are materialized later.
//!
//! A [`DeferredFrame`] wraps an immutable tree of [`Expr`] nodes. Leaves of
//! the tree are placeholders which refer to Root nodes allocated in a
//! [`Roots`] arena, each binding a collection (or other value) to the schema
//! proxy describing its shape.
mod expr;
mod frame;
mod roots;

pub use expr::Expr;
pub use frame::DeferredFrame;
pub use roots::{Reference, Root, RootId, Roots};
