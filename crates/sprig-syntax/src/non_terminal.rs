use std::{fmt, mem, slice};

use text_size::TextSize;
use triomphe::{Arc, ThinArc};

use crate::{Node, NodeKind, NodeText, SyntaxNode, Terminal};

/// Branch node holding a label and an ordered list of children.
///
/// The label is independent of the children's own text.
#[derive(Clone, Debug)]
pub struct NonTerminal {
    line: u32,
    text: Option<NodeText>,
    children: Children,
}

impl NonTerminal {
    /// Creates a branch with a set label.
    pub fn new(
        line: u32,
        text: impl Into<NodeText>,
        children: impl IntoIterator<Item = SyntaxNode>,
    ) -> Self {
        Self::from_parts(line, Some(text.into()), children)
    }

    /// Creates a branch from raw parts. The children are moved in as given.
    pub fn from_parts(
        line: u32,
        text: Option<NodeText>,
        children: impl IntoIterator<Item = SyntaxNode>,
    ) -> Self {
        Self { line, text, children: Children::new(children.into_iter().collect()) }
    }

    /// Returns the label buffer, if set.
    pub fn node_text(&self) -> Option<&NodeText> {
        self.text.as_ref()
    }

    /// Length of the label. An unset label has length zero.
    pub fn text_len(&self) -> TextSize {
        self.text.as_ref().map_or(TextSize::new(0), NodeText::len)
    }

    /// Total length of the text of every leaf under this node.
    pub fn token_text_len(&self) -> TextSize {
        self.children().iter().flat_map(|child| child.terminals()).map(Terminal::text_len).sum()
    }

    /// Returns `true` if both labels point at the same allocation.
    pub fn shares_text_with(&self, other: &Self) -> bool {
        match (&self.text, &other.text) {
            (Some(this), Some(other)) => this.shares_storage_with(other),
            _ => false,
        }
    }

    /// Returns `true` if both nodes point at the same child allocation.
    ///
    /// Nodes without children have no allocation to share.
    pub fn shares_children_with(&self, other: &Self) -> bool {
        self.children.shares_storage_with(&other.children)
    }

    fn label(&self) -> &[u8] {
        self.text().unwrap_or_default()
    }

    /// Compares two subtrees in order, without recursing.
    fn eq_parts(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((this, other)) = pending.pop() {
            if this.label() != other.label() || this.children().len() != other.children().len() {
                return false;
            }
            for pair in this.children().iter().zip(other.children()) {
                match pair {
                    (SyntaxNode::NonTerminal(this), SyntaxNode::NonTerminal(other)) => {
                        pending.push((this, other));
                    }
                    (SyntaxNode::Terminal(this), other) => {
                        if !this.structural_eq(Some(other)) {
                            return false;
                        }
                    }
                    (SyntaxNode::NonTerminal(_), SyntaxNode::Terminal(_)) => return false,
                }
            }
        }
        true
    }
}

/// A branch whose copy is still being assembled.
struct CopyFrame<'a> {
    /// `None` for the list passed to [`deep_copy_children`] itself.
    source: Option<&'a NonTerminal>,
    pending: slice::Iter<'a, SyntaxNode>,
    copied: Vec<SyntaxNode>,
}

impl<'a> CopyFrame<'a> {
    fn new(source: Option<&'a NonTerminal>, children: &'a [SyntaxNode]) -> Self {
        Self { source, pending: children.iter(), copied: Vec::with_capacity(children.len()) }
    }
}

/// Deep-copies a list of subtrees bottom-up without recursing.
fn deep_copy_children(children: &[SyntaxNode]) -> Vec<SyntaxNode> {
    let mut parents = Vec::new();
    let mut current = CopyFrame::new(None, children);
    loop {
        match current.pending.next() {
            Some(SyntaxNode::Terminal(leaf)) => current.copied.push(leaf.deep_copy().into()),
            Some(SyntaxNode::NonTerminal(branch)) => {
                let child = CopyFrame::new(Some(branch), branch.children());
                parents.push(mem::replace(&mut current, child));
            }
            None => {
                let Some(source) = current.source else {
                    return current.copied;
                };
                let copy = NonTerminal {
                    line: source.line,
                    text: source.text.as_ref().map(NodeText::deep_copy),
                    children: Children::new(mem::take(&mut current.copied)),
                };
                current = parents.pop().expect("only the outermost frame has no source");
                current.copied.push(copy.into());
            }
        }
    }
}

impl Node for NonTerminal {
    fn kind(&self) -> NodeKind {
        NodeKind::GreenNode
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn text(&self) -> Option<&[u8]> {
        self.text.as_ref().map(NodeText::as_bytes)
    }

    fn children(&self) -> &[SyntaxNode] {
        self.children.as_slice()
    }

    fn make(&self, line: u32, text: Option<&[u8]>, children: &[SyntaxNode]) -> Self {
        Self {
            line,
            text: text.map(NodeText::new),
            children: Children::new(deep_copy_children(children)),
        }
    }

    fn deep_copy(&self) -> Self {
        Self {
            line: self.line,
            text: self.text.as_ref().map(NodeText::deep_copy),
            children: Children::new(deep_copy_children(self.children())),
        }
    }

    fn structural_eq(&self, other: Option<&SyntaxNode>) -> bool {
        match other {
            Some(SyntaxNode::NonTerminal(other)) => self.eq_parts(other),
            _ => false,
        }
    }
}

impl PartialEq for NonTerminal {
    fn eq(&self, other: &Self) -> bool {
        self.eq_parts(other)
    }
}

/// Shared child storage. An empty list holds no allocation.
#[derive(Clone)]
struct Children {
    ptr: Option<ThinArc<(), SyntaxNode>>,
}

impl Children {
    fn new(children: Vec<SyntaxNode>) -> Self {
        if children.is_empty() {
            return Self { ptr: None };
        }
        Self { ptr: Some(ThinArc::from_header_and_iter((), children.into_iter())) }
    }

    fn as_slice(&self) -> &[SyntaxNode] {
        match &self.ptr {
            None => &[],
            Some(ptr) => &ptr.slice,
        }
    }

    fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.ptr, &other.ptr) {
            (Some(this), Some(other)) => std::ptr::eq(this.slice.as_ptr(), other.slice.as_ptr()),
            _ => false,
        }
    }
}

impl Drop for Children {
    // Nested child lists are unlinked onto a worklist before their parent list
    // is freed, so no drop recurses into a subtree.
    fn drop(&mut self) {
        let Some(ptr) = self.ptr.take() else {
            return;
        };
        let mut worklist = vec![ptr];
        while let Some(ptr) = worklist.pop() {
            let mut shared = Arc::from_thin(ptr);
            // Still aliased by a shallow clone: only the count goes down.
            let Some(children) = Arc::get_mut(&mut shared) else {
                continue;
            };
            for child in &mut children.slice {
                if let SyntaxNode::NonTerminal(branch) = child
                    && let Some(nested) = branch.children.ptr.take()
                {
                    worklist.push(nested);
                }
            }
        }
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
