use std::fmt;

/// The kind of edit a single [`Operation`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The before/after slices are element-wise shallow-equal; no edit needed.
    Equal,
    /// Both slices are non-empty and shallow-unequal; the before slice is replaced by the after slice.
    Replace,
    /// The before slice is removed; the after slice is empty.
    Delete,
    /// The after slice is newly added; the before slice is empty.
    Insert,
    /// A single shallow-equal pair of nodes whose children differ; `sub` describes that difference.
    Descend,
}

/// One entry in an edit script.
///
/// `before_start..before_end` and `after_start..after_end` are half-open ranges into
/// whatever sibling list this operation was produced against (the two root lists at the
/// top level, or the children of a [`Tag::Descend`] pair one level down).
///
/// `sub` is `Some` if and only if `tag == Tag::Descend`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub tag: Tag,
    pub before_start: usize,
    pub before_end: usize,
    pub after_start: usize,
    pub after_end: usize,
    pub sub: Option<Vec<Operation>>,
}

impl Operation {
    pub(crate) fn equal(before_start: usize, before_end: usize, after_start: usize, after_end: usize) -> Self {
        Self {
            tag: Tag::Equal,
            before_start,
            before_end,
            after_start,
            after_end,
            sub: None,
        }
    }

    pub(crate) fn replace(before_start: usize, before_end: usize, after_start: usize, after_end: usize) -> Self {
        Self {
            tag: Tag::Replace,
            before_start,
            before_end,
            after_start,
            after_end,
            sub: None,
        }
    }

    pub(crate) fn delete(before_start: usize, before_end: usize, after_at: usize) -> Self {
        Self {
            tag: Tag::Delete,
            before_start,
            before_end,
            after_start: after_at,
            after_end: after_at,
            sub: None,
        }
    }

    pub(crate) fn insert(before_at: usize, after_start: usize, after_end: usize) -> Self {
        Self {
            tag: Tag::Insert,
            before_start: before_at,
            before_end: before_at,
            after_start,
            after_end,
            sub: None,
        }
    }

    pub(crate) fn descend(before_at: usize, after_at: usize, sub: Vec<Operation>) -> Self {
        Self {
            tag: Tag::Descend,
            before_start: before_at,
            before_end: before_at + 1,
            after_start: after_at,
            after_end: after_at + 1,
            sub: Some(sub),
        }
    }

    /// `true` when every operation in a `match_sequence` result is a bare [`Tag::Equal`],
    /// meaning the aligned ranges are deep-equal and nothing needs to be expressed.
    ///
    /// Vacuously `true` for an empty slice (two empty sibling lists are trivially equal).
    pub(crate) fn all_trivially_equal(ops: &[Operation]) -> bool {
        ops.iter().all(|op| op.tag == Tag::Equal)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Equal => "Equal",
            Tag::Replace => "Replace",
            Tag::Delete => "Delete",
            Tag::Insert => "Insert",
            Tag::Descend => "Descend",
        };
        write!(f, "{name}")
    }
}
