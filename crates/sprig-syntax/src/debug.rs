use std::fmt;

use crate::{Node as _, SyntaxNode, WalkEvent};

impl SyntaxNode {
    /// Renders the subtree one node per line, indented by depth.
    ///
    /// Meant for snapshot tests and logs, not as an exchange format.
    pub fn debug_tree(&self) -> String {
        DebugTree(self).to_string()
    }
}

struct DebugTree<'a>(&'a SyntaxNode);

impl fmt::Display for DebugTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        for event in self.0.preorder() {
            match event {
                WalkEvent::Enter(node) => {
                    write!(f, "{:indent$}{}@{} ", "", node.kind(), node.line(), indent = depth * 2)?;
                    match node.text() {
                        Some(text) => writeln!(f, "{:?}", String::from_utf8_lossy(text))?,
                        None => writeln!(f, "<unset>")?,
                    }
                    depth += 1;
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
        }
        Ok(())
    }
}
