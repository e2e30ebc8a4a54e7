//! Plain-text tree drawing for terminals:
//!
//! ```text
//! `--> S
//!           |
//!           |`--> NP : cat
//!           |
//!            `--> VP
//! ```

use std::io::Write;

use indextree::NodeId;

use crate::error::{ParseError, Result};
use crate::syntax::tree::ParseTree;

// ASCII only: segment widths are counted in bytes.
const VERTICAL_CONNECTOR: char = '|';
const HORIZONTAL_CONNECTOR: &str = "`--> ";
const VERTICAL_SPACE_BETWEEN_NODES: usize = 1;
const HORIZONTAL_WHITESPACE: usize = 10;

#[derive(Default)]
pub struct TerminalRenderer {
    // Prefix drawn before each line; one segment per open ancestor.
    edges: String,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<W: Write>(&mut self, tree: &ParseTree, out: &mut W) -> Result<()> {
        let root_id = tree.root().ok_or(ParseError::EmptyTree)?;
        let root = tree.get_node(root_id).ok_or(ParseError::EmptyTree)?;
        let tag = root.tag.clone().ok_or(ParseError::MissingRootTag)?;

        self.edges.clear();
        self.visit(tree, root_id, &tag, out)
    }

    fn visit<W: Write>(
        &mut self,
        tree: &ParseTree,
        node_id: NodeId,
        label: &str,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "{}{HORIZONTAL_CONNECTOR}{label}", self.edges)?;

        let children = tree.get_children(node_id);
        if children.is_empty() {
            // Leaves get a spacer line; a branch with an empty child list does not.
            if tree.get_node(node_id).is_some_and(|n| n.leaf) {
                self.spacer(out)?;
            }
            return Ok(());
        }

        let segment = HORIZONTAL_WHITESPACE + 1;
        self.edges.push_str(&" ".repeat(HORIZONTAL_WHITESPACE));
        self.edges.push(VERTICAL_CONNECTOR);
        self.spacer(out)?;

        let last = children.len() - 1;
        for (index, child) in children.into_iter().enumerate() {
            if index == last {
                let start = self.edges.len() - segment;
                self.edges.replace_range(start.., &" ".repeat(segment));
            }
            let child_label = tree.get_node(child).map(|n| n.label()).unwrap_or_default();
            self.visit(tree, child, &child_label, out)?;
        }

        self.edges.truncate(self.edges.len() - segment);
        Ok(())
    }

    fn spacer<W: Write>(&self, out: &mut W) -> Result<()> {
        for _ in 0..VERTICAL_SPACE_BETWEEN_NODES {
            writeln!(out, "{}", self.edges)?;
        }
        Ok(())
    }
}

pub fn to_terminal(tree: &ParseTree) -> Result<String> {
    let mut buf = Vec::new();
    TerminalRenderer::new().render(tree, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
