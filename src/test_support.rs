//! Minimal tree fixture shared by this crate's own unit tests.
//!
//! Mirrors the `MockNode`/`MockAdapter` pair the distilled test suite was built against:
//! a node is just an integer tag plus an ordered list of children, and two nodes are
//! shallow-equal exactly when their tags match.

use crate::adapter::Adapter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MockNode {
    pub internal: i32,
    pub children: Vec<MockNode>,
}

impl MockNode {
    pub fn new(internal: i32) -> Self {
        Self { internal, children: Vec::new() }
    }

    pub fn with(mut self, child: MockNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MockAdapter;

impl Adapter<MockNode> for MockAdapter {
    fn shallow_equals(&self, a: &MockNode, b: &MockNode) -> bool {
        a.internal == b.internal
    }

    fn shallow_hash(&self, node: &MockNode) -> u64 {
        node.internal as u64
    }

    fn children<'t>(&self, node: &'t MockNode) -> Vec<&'t MockNode> {
        node.children.iter().collect()
    }
}
