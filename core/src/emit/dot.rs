//! DOT (Graphviz) emitter for parse trees.
//!
//! Node identifiers are positional: the root is `x`, the `i`-th child of `P`
//! is `P_i`. Lines are written as they are produced, so a write failure can
//! leave a partial graph behind.

use std::io::Write;

use indextree::NodeId;

use crate::config::DotOptions;
use crate::error::{ParseError, Result};
use crate::syntax::tree::{child_id, ParseTree, ROOT_ID};

const LEAF_ATTRS: &[&str] = &["shape=box"];
const ROOT_HIGHLIGHT_ATTRS: &[&str] = &["fontcolor=white", "style=filled", "bgcolor=black"];

pub struct DotEmitter<'a> {
    options: &'a DotOptions,
}

impl<'a> DotEmitter<'a> {
    pub fn new(options: &'a DotOptions) -> Self {
        Self { options }
    }

    /// Write the whole `digraph` block for `tree` to `out`.
    pub fn emit<W: Write>(&self, tree: &ParseTree, out: &mut W) -> Result<()> {
        let root_id = tree.root().ok_or(ParseError::EmptyTree)?;
        let root = tree.get_node(root_id).ok_or(ParseError::EmptyTree)?;
        let tag = root.tag.as_deref().ok_or(ParseError::MissingRootTag)?;

        writeln!(out, "digraph {} {{", self.options.graph_name)?;
        writeln!(out, "node [shape=ellipse];")?;

        let root_attrs: &[&str] = if self.options.highlight_root {
            ROOT_HIGHLIGHT_ATTRS
        } else {
            &[]
        };
        writeln!(out, "{}", self.node_line(ROOT_ID, tag, root_attrs))?;

        self.emit_children(tree, root_id, ROOT_ID, 1, out)?;

        writeln!(out, "}}")?;
        Ok(())
    }

    fn emit_children<W: Write>(
        &self,
        tree: &ParseTree,
        node_id: NodeId,
        parent_id: &str,
        depth: usize,
        out: &mut W,
    ) -> Result<()> {
        for (index, child) in tree.get_children(node_id).into_iter().enumerate() {
            let Some(data) = tree.get_node(child) else {
                continue;
            };
            let id = child_id(parent_id, index);
            let indent = self.indent(depth);
            let attrs: &[&str] = if data.leaf { LEAF_ATTRS } else { &[] };

            writeln!(out, "{indent}{}", self.node_line(&id, &data.label(), attrs))?;
            if !parent_id.is_empty() {
                writeln!(out, "{indent}{parent_id} -> {id};")?;
            }

            self.emit_children(tree, child, &id, depth + 1, out)?;
        }
        Ok(())
    }

    /// `id [label="..." attr attr];`
    fn node_line(&self, id: &str, label: &str, attrs: &[&str]) -> String {
        let label = if self.options.escape_labels {
            escape_label(label)
        } else {
            label.to_string()
        };
        let mut line = format!("{id} [label=\"{label}\"");
        for attr in attrs {
            line.push(' ');
            line.push_str(attr);
        }
        line.push_str("];");
        line
    }

    fn indent(&self, depth: usize) -> String {
        if self.options.indent {
            "\t".repeat(depth)
        } else {
            String::new()
        }
    }
}

/// Escape characters that would end a DOT quoted string early.
pub fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render `tree` into a string instead of a stream.
pub fn to_dot(tree: &ParseTree, options: &DotOptions) -> Result<String> {
    let mut buf = Vec::new();
    DotEmitter::new(options).emit(tree, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::types::NodeData;

    fn sample_tree() -> ParseTree {
        let mut tree = ParseTree::new();
        let root = tree.add_node(None, NodeData::branch("S"));
        tree.add_node(Some(root), NodeData::leaf("NP").with_text("cat"));
        let vp = tree.add_node(Some(root), NodeData::branch("VP"));
        tree.add_node(Some(vp), NodeData::leaf("V").with_text("sat"));
        tree
    }

    #[test]
    fn test_emit_default_layout() {
        let dot = to_dot(&sample_tree(), &DotOptions::default()).unwrap();
        let expected = "digraph tree {\n\
                        node [shape=ellipse];\n\
                        x [label=\"S\"];\n\
                        x_0 [label=\"NP : cat\" shape=box];\n\
                        x -> x_0;\n\
                        x_1 [label=\"VP\"];\n\
                        x -> x_1;\n\
                        x_1_0 [label=\"V : sat\" shape=box];\n\
                        x_1 -> x_1_0;\n\
                        }\n";
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_emit_with_indent_and_highlight() {
        let options = DotOptions {
            graph_name: "SystemVerilog_tree".to_string(),
            indent: true,
            highlight_root: true,
            ..Default::default()
        };
        let dot = to_dot(&sample_tree(), &options).unwrap();
        let lines: Vec<&str> = dot.lines().collect();

        assert_eq!(lines[0], "digraph SystemVerilog_tree {");
        assert_eq!(
            lines[2],
            "x [label=\"S\" fontcolor=white style=filled bgcolor=black];"
        );
        assert_eq!(lines[3], "\tx_0 [label=\"NP : cat\" shape=box];");
        assert_eq!(lines[4], "\tx -> x_0;");
        assert_eq!(lines[7], "\t\tx_1_0 [label=\"V : sat\" shape=box];");
        assert_eq!(lines[8], "\t\tx_1 -> x_1_0;");
    }

    #[test]
    fn test_labels_are_raw_unless_escaping() {
        let mut tree = ParseTree::new();
        let root = tree.add_node(None, NodeData::branch("S"));
        tree.add_node(Some(root), NodeData::leaf("STR").with_text("\"a\\b\""));

        let raw = to_dot(&tree, &DotOptions::default()).unwrap();
        assert!(raw.contains("x_0 [label=\"STR : \"a\\b\"\" shape=box];"));

        let options = DotOptions {
            escape_labels: true,
            ..Default::default()
        };
        let escaped = to_dot(&tree, &options).unwrap();
        assert!(escaped.contains("x_0 [label=\"STR : \\\"a\\\\b\\\"\" shape=box];"));
    }

    #[test]
    fn test_root_without_tag_is_an_error() {
        let mut tree = ParseTree::new();
        tree.add_node(None, NodeData::new(None, false));

        let mut buf = Vec::new();
        let err = DotEmitter::new(&DotOptions::default())
            .emit(&tree, &mut buf)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::TreeDotError::Parse(ParseError::MissingRootTag)
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_empty_tree_is_an_error() {
        let tree = ParseTree::new();
        assert!(to_dot(&tree, &DotOptions::default()).is_err());
    }
}
