use text_size::TextSize;

use crate::{Node, NodeKind, NodeText, SyntaxNode};

/// Leaf node holding the text of a single lexeme.
#[derive(Clone, Debug)]
pub struct Terminal {
    line: u32,
    text: Option<NodeText>,
}

impl Terminal {
    /// Creates a leaf with set text.
    pub fn new(line: u32, text: impl Into<NodeText>) -> Self {
        Self { line, text: Some(text.into()) }
    }

    /// Creates a leaf whose text is unset.
    ///
    /// Such a leaf never compares equal to anything, itself included.
    pub fn unset(line: u32) -> Self {
        Self { line, text: None }
    }

    /// Returns the text buffer, if set.
    pub fn node_text(&self) -> Option<&NodeText> {
        self.text.as_ref()
    }

    /// Length of the text. Unset text has length zero.
    pub fn text_len(&self) -> TextSize {
        self.text.as_ref().map_or(TextSize::new(0), NodeText::len)
    }

    /// Returns `true` if both leaves point at the same text allocation.
    pub fn shares_text_with(&self, other: &Self) -> bool {
        match (&self.text, &other.text) {
            (Some(this), Some(other)) => this.shares_storage_with(other),
            _ => false,
        }
    }
}

impl Node for Terminal {
    fn kind(&self) -> NodeKind {
        NodeKind::Token
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn text(&self) -> Option<&[u8]> {
        self.text.as_ref().map(NodeText::as_bytes)
    }

    fn children(&self) -> &[SyntaxNode] {
        &[]
    }

    fn make(&self, line: u32, text: Option<&[u8]>, _children: &[SyntaxNode]) -> Self {
        Self { line, text: text.map(NodeText::new) }
    }

    fn deep_copy(&self) -> Self {
        Self { line: self.line, text: self.text.as_ref().map(NodeText::deep_copy) }
    }

    fn structural_eq(&self, other: Option<&SyntaxNode>) -> bool {
        let (Some(text), Some(SyntaxNode::Terminal(other))) = (&self.text, other) else {
            return false;
        };
        other.text.as_ref().is_some_and(|other_text| text == other_text)
    }
}

impl PartialEq for Terminal {
    fn eq(&self, other: &Self) -> bool {
        // Same rule as `structural_eq`, without wrapping `other`.
        match (&self.text, &other.text) {
            (Some(this), Some(other)) => this == other,
            _ => false,
        }
    }
}
