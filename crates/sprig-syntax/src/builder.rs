//! Event-driven construction of a node tree.

use thiserror::Error;
use tracing::{debug, trace};

use crate::{NodeText, NonTerminal, SyntaxNode, Terminal};

/// Misuse of [`TreeBuilder`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no node is open")]
    NoOpenNode,

    #[error("the root node is already finished")]
    MultipleRoots,

    #[error("{open} node(s) left open")]
    Unclosed { open: usize },

    #[error("no node was built")]
    Empty,
}

/// Capacities the builder preallocates.
#[derive(Clone, Copy, Debug)]
pub struct BuilderConfig {
    /// Expected nesting depth.
    pub depth_capacity: usize,
    /// Expected number of children per node.
    pub children_capacity: usize,
}

const DEFAULT_TREE_DEPTH: usize = 128;
const DEFAULT_CHILDREN_LEN: usize = 10;

impl Default for BuilderConfig {
    fn default() -> Self {
        Self { depth_capacity: DEFAULT_TREE_DEPTH, children_capacity: DEFAULT_CHILDREN_LEN }
    }
}

struct OpenNode {
    line: u32,
    text: Option<NodeText>,
    children: Vec<SyntaxNode>,
}

/// Builds a tree from `start_node` / `token` / `finish_node` events.
///
/// ```ignore
/// let mut builder = TreeBuilder::new();
/// builder.start_node(1, Some(b"expr"))?;
/// builder.token(1, Some(b"1"))?;
/// builder.finish_node()?;
/// let root = builder.finish()?;
/// ```
pub struct TreeBuilder {
    config: BuilderConfig,
    opened: Vec<OpenNode>,
    children_pool: Vec<Vec<SyntaxNode>>,
    root: Option<SyntaxNode>,
    node_count: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Creates a builder with the default capacities.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Creates a builder that preallocates per `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            opened: Vec::with_capacity(config.depth_capacity),
            children_pool: Vec::with_capacity(config.depth_capacity),
            root: None,
            node_count: 0,
        }
    }

    /// Retrieves a recycled children buffer or allocates a new one.
    fn new_children_vec(&mut self) -> Vec<SyntaxNode> {
        self.children_pool
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(self.config.children_capacity))
    }

    /// Opens a branch under the current node, or as the root.
    pub fn start_node(&mut self, line: u32, text: Option<&[u8]>) -> Result<(), BuildError> {
        if self.opened.is_empty() && self.root.is_some() {
            return Err(BuildError::MultipleRoots);
        }
        trace!(line, depth = self.opened.len(), "start node");
        let children = self.new_children_vec();
        self.opened.push(OpenNode { line, text: text.map(NodeText::new), children });
        Ok(())
    }

    /// Appends a leaf to the current node.
    pub fn token(&mut self, line: u32, text: Option<&[u8]>) -> Result<(), BuildError> {
        let parent = self.opened.last_mut().ok_or(BuildError::NoOpenNode)?;
        let token = match text {
            Some(text) => Terminal::new(line, text),
            None => Terminal::unset(line),
        };
        parent.children.push(token.into());
        self.node_count += 1;
        Ok(())
    }

    /// Closes the current node and attaches it to its parent.
    pub fn finish_node(&mut self) -> Result<(), BuildError> {
        let OpenNode { line, text, mut children } =
            self.opened.pop().ok_or(BuildError::NoOpenNode)?;
        trace!(line, children = children.len(), depth = self.opened.len(), "finish node");

        let node = NonTerminal::from_parts(line, text, children.drain(..));
        self.children_pool.push(children);
        self.node_count += 1;

        match self.opened.last_mut() {
            Some(parent) => parent.children.push(node.into()),
            None => self.root = Some(node.into()),
        }
        Ok(())
    }

    /// Returns the finished root.
    pub fn finish(self) -> Result<SyntaxNode, BuildError> {
        if !self.opened.is_empty() {
            return Err(BuildError::Unclosed { open: self.opened.len() });
        }
        let root = self.root.ok_or(BuildError::Empty)?;
        debug!(nodes = self.node_count, "finished tree");
        Ok(root)
    }
}
