use itertools::Itertools;
use log::{debug, trace};

use crate::align::{self, BlockTag};
use crate::adapter::Adapter;
use crate::operation::Operation;

/// Computes the edit script between two rooted, ordered trees.
///
/// Construct one per `(adapter, before_root, after_root)` triple and call
/// [`compute_operations`](TreeMatcher::compute_operations) once; the matcher holds no
/// mutable state between siblings, so nothing prevents calling it more than once, but
/// there is also nothing to gain from doing so.
#[derive(Debug)]
pub struct TreeMatcher<'a, T, A: Adapter<T>> {
    adapter: A,
    before_root: &'a T,
    after_root: &'a T,
}

impl<'a, T, A: Adapter<T>> TreeMatcher<'a, T, A> {
    pub fn new(adapter: A, before_root: &'a T, after_root: &'a T) -> Self {
        Self {
            adapter,
            before_root,
            after_root,
        }
    }

    /// Computes the top-level edit script: always a single [`Operation`], `Descend` if
    /// the two roots are shallow-equal, `Replace` otherwise.
    pub fn compute_operations(&self) -> Vec<Operation> {
        debug!("matching roots");

        let op = if self.adapter.shallow_equals(self.before_root, self.after_root) {
            let before_children = self.adapter.children(self.before_root);
            let after_children = self.adapter.children(self.after_root);
            let sub = self.match_sequence(&before_children, &after_children);
            debug!("roots are shallow-equal, descending into {} sub-operation(s)", sub.len());
            Operation::descend(0, 0, sub)
        } else {
            debug!("roots differ, replacing");
            Operation::replace(0, 1, 0, 1)
        };

        vec![op]
    }

    /// Aligns two ordered sibling lists into a list of [`Operation`]s, resolving any
    /// width-one `Equal` block by recursing into that pair's children (see
    /// `SPEC_FULL.md` §4.2.1 for the full rationale).
    fn match_sequence(&self, before: &[&'a T], after: &[&'a T]) -> Vec<Operation> {
        trace!("aligning {} before sibling(s) against {} after sibling(s)", before.len(), after.len());

        align::diff(&self.adapter, before, after)
            .into_iter()
            .map(|block| {
                let width_one_pair =
                    block.tag == BlockTag::Equal && block.before_end - block.before_start == 1 && block.after_end - block.after_start == 1;

                if width_one_pair {
                    self.resolve_singleton(before[block.before_start], after[block.after_start], block.before_start, block.after_start)
                } else {
                    match block.tag {
                        BlockTag::Equal => Operation::equal(block.before_start, block.before_end, block.after_start, block.after_end),
                        BlockTag::Replace => Operation::replace(block.before_start, block.before_end, block.after_start, block.after_end),
                        BlockTag::Delete => Operation::delete(block.before_start, block.before_end, block.after_start),
                        BlockTag::Insert => Operation::insert(block.before_start, block.after_start, block.after_end),
                    }
                }
            })
            .collect_vec()
    }

    /// Resolves a single shallow-equal candidate pair into either a bare `Equal` (their
    /// subtrees are deep-equal, nothing to express) or a `Descend` carrying the diff of
    /// their children.
    fn resolve_singleton(&self, b: &'a T, a: &'a T, before_at: usize, after_at: usize) -> Operation {
        let bc = self.adapter.children(b);
        let ac = self.adapter.children(a);
        let sub = self.match_sequence(&bc, &ac);

        if Operation::all_trivially_equal(&sub) {
            Operation::equal(before_at, before_at + 1, after_at, after_at + 1)
        } else {
            Operation::descend(before_at, after_at, sub)
        }
    }
}
