//! Preorder traversal over a tree of nodes.

use crate::{Node as _, SyntaxNode, Terminal};

/// Preorder walk event.
#[derive(Clone, Copy, Debug)]
pub enum WalkEvent<'a> {
    Enter(&'a SyntaxNode),
    Leave(&'a SyntaxNode),
}

impl<'a> WalkEvent<'a> {
    /// Returns the node this event is about.
    pub fn node(self) -> &'a SyntaxNode {
        match self {
            WalkEvent::Enter(node) | WalkEvent::Leave(node) => node,
        }
    }
}

/// Preorder traversal that reports entering and leaving every node.
#[derive(Clone)]
pub struct Preorder<'a> {
    stack: Vec<(&'a SyntaxNode, std::slice::Iter<'a, SyntaxNode>)>,
    root: Option<&'a SyntaxNode>,
}

impl<'a> Preorder<'a> {
    fn new(start: &'a SyntaxNode) -> Self {
        Self { stack: Vec::new(), root: Some(start) }
    }

    /// Skips the rest of the most recently entered node, including its
    /// `Leave` event.
    pub fn skip_subtree(&mut self) {
        assert!(self.stack.pop().is_some(), "must have a subtree to skip");
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            let root = self.root.take()?;
            self.stack.push((root, root.children().iter()));
            return Some(WalkEvent::Enter(root));
        }
        let (_, active_node) = self.stack.last_mut()?;
        match active_node.next() {
            Some(child) => {
                self.stack.push((child, child.children().iter()));
                Some(WalkEvent::Enter(child))
            }
            None => {
                let (exited_node, _) = self.stack.pop()?;
                Some(WalkEvent::Leave(exited_node))
            }
        }
    }
}

impl SyntaxNode {
    /// Returns a preorder iterator starting and ending with `self`.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self)
    }

    /// Iterates over `self` and every node below it, in preorder.
    pub fn descendants(&self) -> impl Iterator<Item = &Self> + Clone {
        self.preorder().filter_map(|event| match event {
            WalkEvent::Enter(node) => Some(node),
            WalkEvent::Leave(_) => None,
        })
    }

    /// Iterates over every leaf in this subtree, left to right.
    pub fn terminals(&self) -> impl Iterator<Item = &Terminal> + Clone {
        self.descendants().filter_map(Self::as_terminal)
    }
}
