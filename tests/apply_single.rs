//! Exercises `SingleNodeDriver`/`SingleApply` (the single-node dialect): each callback
//! should fire once per element, with unequal-length replace blocks paired up to
//! `min(len)` and the remainder reported as delete/insert.

mod common;

use common::{Node, NodeAdapter};
use pretty_assertions::assert_eq;
use std::convert::Infallible;
use treediff_core::{Driver, SingleApply, SingleNodeDriver, TreeMatcher};

#[derive(Debug, Default)]
struct Log {
    replaced: Vec<(Option<i32>, Option<i32>)>,
    deleted: Vec<i32>,
    inserted: Vec<i32>,
    equaled: Vec<(i32, i32)>,
    descends: Vec<(i32, i32)>,
    ascends: usize,
}

impl SingleApply<Node> for Log {
    type Error = Infallible;

    fn replace(&mut self, before: Option<&Node>, after: Option<&Node>) -> Result<(), Infallible> {
        self.replaced.push((before.map(|n| n.internal), after.map(|n| n.internal)));
        Ok(())
    }

    fn delete(&mut self, before: &Node) -> Result<(), Infallible> {
        self.deleted.push(before.internal);
        Ok(())
    }

    fn insert(&mut self, after: &Node) -> Result<(), Infallible> {
        self.inserted.push(after.internal);
        Ok(())
    }

    fn equal(&mut self, before: &Node, after: &Node) -> Result<(), Infallible> {
        self.equaled.push((before.internal, after.internal));
        Ok(())
    }

    fn descend(&mut self, before: &Node, after: &Node) -> Result<(), Infallible> {
        self.descends.push((before.internal, after.internal));
        Ok(())
    }

    fn ascend(&mut self) -> Result<(), Infallible> {
        self.ascends += 1;
        Ok(())
    }
}

#[test]
fn equal_run_fires_one_equal_call_per_pair() {
    let before = Node::new(0).with(Node::new(1)).with(Node::new(2)).with(Node::new(3));
    let after = Node::new(0).with(Node::new(1)).with(Node::new(2)).with(Node::new(3));
    let ops = TreeMatcher::new(NodeAdapter, &before, &after).compute_operations();

    let mut log = Log::default();
    {
        let driver = Driver::new(NodeAdapter, &before, &after);
        let mut fanout = SingleNodeDriver::new(&mut log);
        driver.apply(&ops, &mut fanout).unwrap();
    }

    assert_eq!(log.equaled, vec![(1, 1), (2, 2), (3, 3)]);
    assert_eq!(log.ascends, 1);
}

#[test]
fn unequal_length_replace_pairs_up_to_min_len_then_delete_insert() {
    let before = Node::new(0).with(Node::new(1)).with(Node::new(2)).with(Node::new(3));
    let after = Node::new(0).with(Node::new(8));
    let ops = TreeMatcher::new(NodeAdapter, &before, &after).compute_operations();

    let mut log = Log::default();
    {
        let driver = Driver::new(NodeAdapter, &before, &after);
        let mut fanout = SingleNodeDriver::new(&mut log);
        driver.apply(&ops, &mut fanout).unwrap();
    }

    assert_eq!(log.replaced, vec![(Some(1), Some(8))]);
    assert_eq!(log.deleted, vec![2, 3]);
    assert!(log.inserted.is_empty());
}

#[test]
fn descend_and_ascend_bracket_each_level() {
    let before = Node::new(1).with(Node::new(2).with(Node::new(3)));
    let after = Node::new(1).with(Node::new(2).with(Node::new(4)));
    let ops = TreeMatcher::new(NodeAdapter, &before, &after).compute_operations();

    let mut log = Log::default();
    {
        let driver = Driver::new(NodeAdapter, &before, &after);
        let mut fanout = SingleNodeDriver::new(&mut log);
        driver.apply(&ops, &mut fanout).unwrap();
    }

    assert_eq!(log.descends, vec![(1, 1), (2, 2)]);
    assert_eq!(log.ascends, 2);
    assert_eq!(log.replaced, vec![(Some(3), Some(4))]);
}
