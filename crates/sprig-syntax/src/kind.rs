use std::fmt;

/// Discriminator for the two node variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum NodeKind {
    /// A leaf holding the text of a single lexeme.
    Token,
    /// A branch holding a label and an ordered list of children.
    GreenNode,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::GreenNode => "green-node",
        }
    }

    pub const fn is_token(self) -> bool {
        matches!(self, Self::Token)
    }

    pub const fn is_green_node(self) -> bool {
        matches!(self, Self::GreenNode)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
