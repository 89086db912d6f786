//! The apply driver: walks a precomputed edit script against the original trees and
//! dispatches callbacks to a caller-supplied consumer.

use crate::adapter::Adapter;
use crate::operation::{Operation, Tag};

/// The run dialect: `replace`/`delete`/`insert`/`equal` receive the whole matched slice
/// for a block at once.
///
/// This is the dialect [`Driver`] dispatches to directly; [`SingleApply`] is layered on
/// top of it via [`SingleNodeDriver`].
pub trait Apply<T> {
    /// The error a callback can fail with; propagated unchanged out of [`Driver::apply`].
    type Error;

    fn replace(&mut self, before: &[&T], after: &[&T]) -> Result<(), Self::Error>;
    fn delete(&mut self, before: &[&T]) -> Result<(), Self::Error>;
    fn insert(&mut self, after: &[&T]) -> Result<(), Self::Error>;
    fn equal(&mut self, before: &[&T], after: &[&T]) -> Result<(), Self::Error>;
    fn descend(&mut self, before: &T, after: &T) -> Result<(), Self::Error>;
    fn ascend(&mut self) -> Result<(), Self::Error>;
}

/// The single-node dialect: `replace`/`delete`/`insert`/`equal` fire once per element of
/// a block instead of once per block.
pub trait SingleApply<T> {
    type Error;

    /// For unequal-length `Replace` blocks, elements are paired up to `min(len)`; any
    /// remainder is reported via [`delete`](SingleApply::delete)/[`insert`](SingleApply::insert)
    /// instead, never as a partially-`None` replace (see `SPEC_FULL.md` §4.3.1).
    fn replace(&mut self, before: Option<&T>, after: Option<&T>) -> Result<(), Self::Error>;
    fn delete(&mut self, before: &T) -> Result<(), Self::Error>;
    fn insert(&mut self, after: &T) -> Result<(), Self::Error>;
    fn equal(&mut self, before: &T, after: &T) -> Result<(), Self::Error>;
    fn descend(&mut self, before: &T, after: &T) -> Result<(), Self::Error>;
    fn ascend(&mut self) -> Result<(), Self::Error>;
}

/// Adapts any [`SingleApply`] consumer into an [`Apply`] consumer by fanning each block
/// out into one single-node callback per element.
///
/// This is the "layer the single-node dialect atop the run dialect" option from
/// `spec.md` §9, rather than implementing both traversals independently.
pub struct SingleNodeDriver<'c, C> {
    consumer: &'c mut C,
}

impl<'c, C> SingleNodeDriver<'c, C> {
    pub fn new(consumer: &'c mut C) -> Self {
        Self { consumer }
    }
}

impl<T, C: SingleApply<T>> Apply<T> for SingleNodeDriver<'_, C> {
    type Error = C::Error;

    fn replace(&mut self, before: &[&T], after: &[&T]) -> Result<(), Self::Error> {
        let paired = before.len().min(after.len());
        for i in 0..paired {
            self.consumer.replace(Some(before[i]), Some(after[i]))?;
        }
        for b in &before[paired..] {
            self.consumer.delete(b)?;
        }
        for a in &after[paired..] {
            self.consumer.insert(a)?;
        }
        Ok(())
    }

    fn delete(&mut self, before: &[&T]) -> Result<(), Self::Error> {
        for b in before {
            self.consumer.delete(b)?;
        }
        Ok(())
    }

    fn insert(&mut self, after: &[&T]) -> Result<(), Self::Error> {
        for a in after {
            self.consumer.insert(a)?;
        }
        Ok(())
    }

    fn equal(&mut self, before: &[&T], after: &[&T]) -> Result<(), Self::Error> {
        for (b, a) in before.iter().zip(after.iter()) {
            self.consumer.equal(b, a)?;
        }
        Ok(())
    }

    fn descend(&mut self, before: &T, after: &T) -> Result<(), Self::Error> {
        self.consumer.descend(before, after)
    }

    fn ascend(&mut self) -> Result<(), Self::Error> {
        self.consumer.ascend()
    }
}

/// One level of an in-progress traversal: the operation list being walked at this depth,
/// how far through it the driver has gotten, and the before/after child lists those
/// operations' ranges index into.
struct Frame<'a, 'ops, T> {
    ops: &'ops [Operation],
    idx: usize,
    bc: Vec<&'a T>,
    ac: Vec<&'a T>,
}

/// Walks an edit script against the two trees it was computed from, in lock-step, and
/// dispatches callbacks to an [`Apply`] consumer.
pub struct Driver<'a, T, A: Adapter<T>> {
    adapter: A,
    before_root: &'a T,
    after_root: &'a T,
}

impl<'a, T, A: Adapter<T>> Driver<'a, T, A> {
    pub fn new(adapter: A, before_root: &'a T, after_root: &'a T) -> Self {
        Self {
            adapter,
            before_root,
            after_root,
        }
    }

    /// Drives the top-level (single-element) operation list produced by
    /// [`crate::TreeMatcher::compute_operations`] against `consumer`.
    ///
    /// Maintains its own explicit descent stack rather than relying on host call-stack
    /// recursion depth: `descent_stack` records every `(before, after)` pair currently
    /// descended into, bounding the driver's auxiliary state to the tree depth.
    ///
    /// # Panics
    ///
    /// Panics if `operations` does not contain exactly one element, or if any
    /// operation's ranges exceed the actual child-list lengths encountered while
    /// traversing — both are programmer errors (an operation list from anywhere other
    /// than a matching `TreeMatcher` run), not recoverable conditions.
    pub fn apply<C: Apply<T>>(&self, operations: &[Operation], consumer: &mut C) -> Result<(), C::Error> {
        assert_eq!(operations.len(), 1, "top-level operation list must have exactly one element");

        let mut descent_stack: Vec<(&'a T, &'a T)> = Vec::new();
        let mut frames = vec![Frame {
            ops: operations,
            idx: 0,
            bc: vec![self.before_root],
            ac: vec![self.after_root],
        }];

        loop {
            let Some(top) = frames.len().checked_sub(1) else { break };
            let ops = frames[top].ops;
            let idx = frames[top].idx;

            let Some(op) = ops.get(idx) else {
                frames.pop();
                if frames.is_empty() {
                    break;
                }
                descent_stack.pop();
                consumer.ascend()?;
                continue;
            };
            frames[top].idx += 1;

            match op.tag {
                Tag::Descend => {
                    let before = frames[top].bc[op.before_start];
                    let after = frames[top].ac[op.after_start];
                    consumer.descend(before, after)?;
                    descent_stack.push((before, after));

                    let bc = self.adapter.children(before);
                    let ac = self.adapter.children(after);
                    let sub = op.sub.as_deref().expect("a Descend operation must carry sub-operations");
                    frames.push(Frame { ops: sub, idx: 0, bc, ac });
                }
                Tag::Equal => {
                    let frame = &frames[top];
                    consumer.equal(&frame.bc[op.before_start..op.before_end], &frame.ac[op.after_start..op.after_end])?;
                }
                Tag::Replace => {
                    let frame = &frames[top];
                    consumer.replace(&frame.bc[op.before_start..op.before_end], &frame.ac[op.after_start..op.after_end])?;
                }
                Tag::Delete => {
                    consumer.delete(&frames[top].bc[op.before_start..op.before_end])?;
                }
                Tag::Insert => {
                    consumer.insert(&frames[top].ac[op.after_start..op.after_end])?;
                }
            }
        }

        Ok(())
    }
}
