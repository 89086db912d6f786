//! A generic tree-diffing engine.
//!
//! Given two rooted, ordered trees of any caller-defined node type, [`TreeMatcher`]
//! produces an [`Operation`] edit script describing how to turn one into the other.
//! [`Driver`] then walks that script back against the original trees and dispatches
//! typed callbacks — `replace`, `delete`, `insert`, `equal`, `descend`, `ascend` — to a
//! caller-supplied consumer, in either of two dialects: whole matched runs at a time
//! ([`Apply`]), or one node at a time ([`SingleApply`], layered on top via
//! [`SingleNodeDriver`]).
//!
//! The crate knows nothing about what a node actually is. Callers implement [`Adapter`]
//! to describe shallow equality, a hash consistent with it, and a node's children; the
//! matcher and driver work entirely in terms of that contract.
//!
//! Move detection and tree-edit-distance optimality are explicitly out of scope: the
//! matcher is a straightforward recursive descent over shallow-equal candidate pairs,
//! with per-sibling-list alignment done by a classic edit-distance table (see
//! `align` internals). See `SPEC_FULL.md` for the full design rationale.

mod adapter;
mod align;
mod apply;
mod operation;
mod tree_matcher;

#[cfg(test)]
mod test_support;

pub use adapter::Adapter;
pub use apply::{Apply, Driver, SingleApply, SingleNodeDriver};
pub use operation::{Operation, Tag};
pub use tree_matcher::TreeMatcher;
