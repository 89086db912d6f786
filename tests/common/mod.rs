//! Shared fixture for the integration tests: an external-crate equivalent of the
//! in-crate `test_support` module, built only against the public `Adapter` trait.

use treediff_core::Adapter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub internal: i32,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(internal: i32) -> Self {
        Self { internal, children: Vec::new() }
    }

    pub fn with(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NodeAdapter;

impl Adapter<Node> for NodeAdapter {
    fn shallow_equals(&self, a: &Node, b: &Node) -> bool {
        a.internal == b.internal
    }

    fn shallow_hash(&self, node: &Node) -> u64 {
        node.internal as u64
    }

    fn children<'t>(&self, node: &'t Node) -> Vec<&'t Node> {
        node.children.iter().collect()
    }
}
