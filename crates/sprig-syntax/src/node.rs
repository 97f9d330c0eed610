//! The capability contract shared by every node and the closed set of node
//! variants implementing it.

use text_size::TextSize;

use crate::{NodeKind, NonTerminal, Terminal};

/// Operations every node variant supports.
///
/// Nodes are immutable. Deriving a modified tree always goes through
/// [`Node::make`] or [`Node::deep_copy`].
pub trait Node {
    /// Returns the variant discriminator.
    fn kind(&self) -> NodeKind;

    /// Returns the line the node was created on. Never part of equality.
    fn line(&self) -> u32;

    /// Returns the raw text of the node, or `None` if it was never set.
    fn text(&self) -> Option<&[u8]>;

    /// Returns the ordered children. Always empty for leaves.
    fn children(&self) -> &[SyntaxNode];

    /// Builds a new node of the same kind as `self` from the given parts.
    ///
    /// `text` is copied into a fresh buffer and every child is deep-copied,
    /// so the result shares no storage with the arguments. Leaves ignore
    /// `children`.
    fn make(&self, line: u32, text: Option<&[u8]>, children: &[SyntaxNode]) -> Self
    where
        Self: Sized;

    /// Returns a node that aliases the text and children of `self`.
    fn shallow_clone(&self) -> Self
    where
        Self: Sized + Clone,
    {
        self.clone()
    }

    /// Returns a node that shares no storage with `self`.
    fn deep_copy(&self) -> Self
    where
        Self: Sized;

    /// Strict structural equality: kind, text and children, in order.
    ///
    /// `None` is never equal to anything, and neither is a leaf whose text is
    /// unset.
    fn structural_eq(&self, other: Option<&SyntaxNode>) -> bool;

    /// Weak equality: `true` iff `other` exists and has the same kind.
    fn kind_eq(&self, other: Option<&SyntaxNode>) -> bool {
        other.is_some_and(|other| other.kind() == self.kind())
    }
}

/// A node of either variant.
#[derive(Clone, Debug)]
pub enum SyntaxNode {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl SyntaxNode {
    /// Returns `true` for a leaf.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }

    /// Returns `true` for a branch.
    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Self::NonTerminal(_))
    }

    /// Borrows the leaf, if this is one.
    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Self::Terminal(terminal) => Some(terminal),
            Self::NonTerminal(_) => None,
        }
    }

    /// Borrows the branch, if this is one.
    pub fn as_non_terminal(&self) -> Option<&NonTerminal> {
        match self {
            Self::Terminal(_) => None,
            Self::NonTerminal(non_terminal) => Some(non_terminal),
        }
    }

    /// Unwraps the leaf, if this is one.
    pub fn into_terminal(self) -> Option<Terminal> {
        match self {
            Self::Terminal(terminal) => Some(terminal),
            Self::NonTerminal(_) => None,
        }
    }

    /// Unwraps the branch, if this is one.
    pub fn into_non_terminal(self) -> Option<NonTerminal> {
        match self {
            Self::Terminal(_) => None,
            Self::NonTerminal(non_terminal) => Some(non_terminal),
        }
    }

    /// Length of this node's own text.
    pub fn text_len(&self) -> TextSize {
        match self {
            Self::Terminal(terminal) => terminal.text_len(),
            Self::NonTerminal(non_terminal) => non_terminal.text_len(),
        }
    }

    /// Total length of the text of every leaf in this subtree.
    pub fn token_text_len(&self) -> TextSize {
        match self {
            Self::Terminal(terminal) => terminal.text_len(),
            Self::NonTerminal(non_terminal) => non_terminal.token_text_len(),
        }
    }
}

impl Node for SyntaxNode {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Terminal(terminal) => terminal.kind(),
            Self::NonTerminal(non_terminal) => non_terminal.kind(),
        }
    }

    fn line(&self) -> u32 {
        match self {
            Self::Terminal(terminal) => terminal.line(),
            Self::NonTerminal(non_terminal) => non_terminal.line(),
        }
    }

    fn text(&self) -> Option<&[u8]> {
        match self {
            Self::Terminal(terminal) => terminal.text(),
            Self::NonTerminal(non_terminal) => non_terminal.text(),
        }
    }

    fn children(&self) -> &[Self] {
        match self {
            Self::Terminal(terminal) => terminal.children(),
            Self::NonTerminal(non_terminal) => non_terminal.children(),
        }
    }

    fn make(&self, line: u32, text: Option<&[u8]>, children: &[Self]) -> Self {
        match self {
            Self::Terminal(terminal) => terminal.make(line, text, children).into(),
            Self::NonTerminal(non_terminal) => non_terminal.make(line, text, children).into(),
        }
    }

    fn deep_copy(&self) -> Self {
        match self {
            Self::Terminal(terminal) => terminal.deep_copy().into(),
            Self::NonTerminal(non_terminal) => non_terminal.deep_copy().into(),
        }
    }

    fn structural_eq(&self, other: Option<&Self>) -> bool {
        match self {
            Self::Terminal(terminal) => terminal.structural_eq(other),
            Self::NonTerminal(non_terminal) => non_terminal.structural_eq(other),
        }
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(Some(other))
    }
}

impl From<Terminal> for SyntaxNode {
    fn from(terminal: Terminal) -> Self {
        Self::Terminal(terminal)
    }
}

impl From<NonTerminal> for SyntaxNode {
    fn from(non_terminal: NonTerminal) -> Self {
        Self::NonTerminal(non_terminal)
    }
}
