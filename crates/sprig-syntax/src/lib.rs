//! Immutable syntax tree nodes.
//!
//! A tree is made of two node variants: [`Terminal`] leaves holding the text
//! of a lexeme, and [`NonTerminal`] branches holding a label and an ordered
//! list of children. Both implement the [`Node`] contract. Storage is shared
//! and immutable, so a shallow clone aliases its source while a deep copy
//! shares nothing with it.

mod builder;
mod debug;
mod kind;
mod node;
mod non_terminal;
mod terminal;
mod text;
mod walk;

/// Event-driven tree construction.
pub use builder::{BuildError, BuilderConfig, TreeBuilder};
/// Variant discriminator.
pub use kind::NodeKind;
/// The node contract and the closed set of node variants.
pub use node::{Node, SyntaxNode};
pub use non_terminal::NonTerminal;
pub use terminal::Terminal;
/// Shared byte buffer carried by nodes.
pub use text::NodeText;
/// Preorder traversal.
pub use walk::{Preorder, WalkEvent};
