/// A capability contract over a caller-supplied node type `T`.
///
/// The library never constructs or owns a `T`; it only ever borrows one through these
/// three methods. Implementations must be pure and referentially transparent: two calls
/// with equal arguments must produce equal results for as long as a [`crate::TreeMatcher`]
/// or [`crate::Driver`] call is in progress.
///
/// # Invariant
///
/// For all nodes `a`, `b`: `shallow_equals(a, b)` implies `shallow_hash(a) == shallow_hash(b)`.
/// Violating this does not cause undefined behavior, but it can make the matcher miss
/// matches that `shallow_equals` alone would have found, since [`shallow_hash`] is used as
/// a cheap pre-filter in the sequence alignment (see `align`).
///
/// [`shallow_hash`]: Adapter::shallow_hash
pub trait Adapter<T> {
    /// Equivalence of a single node's own payload, ignoring its children.
    fn shallow_equals(&self, a: &T, b: &T) -> bool;

    /// Any hash consistent with [`shallow_equals`](Adapter::shallow_equals): equal nodes
    /// (by that relation) must hash equal.
    fn shallow_hash(&self, node: &T) -> u64;

    /// The node's ordered child list, borrowed for the lifetime of `node`.
    fn children<'t>(&self, node: &'t T) -> Vec<&'t T>;
}
