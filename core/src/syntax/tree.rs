use indextree::{Arena, NodeId};

use crate::syntax::types::{Node, NodeData};

/// Positional identifier of the root node.
pub const ROOT_ID: &str = "x";

/// Identifier of the `index`-th child of the node identified by `parent`.
pub fn child_id(parent: &str, index: usize) -> String {
    format!("{parent}_{index}")
}

/// Parse tree held in an arena. Children keep their input order.
pub struct ParseTree {
    arena: Arena<NodeData>,
    root: Option<NodeId>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Copy a deserialized node and all its descendants into a new tree.
    pub fn from_node(root: &Node) -> Self {
        let mut tree = Self::new();
        tree.insert_subtree(None, root);
        tree
    }

    fn insert_subtree(&mut self, parent_id: Option<NodeId>, node: &Node) -> NodeId {
        let node_id = self.add_node(parent_id, NodeData::from(node));
        for child in node.children.iter().flatten() {
            self.insert_subtree(Some(node_id), child);
        }
        node_id
    }

    /// Add a node under `parent_id`, or as the root when `parent_id` is
    /// `None` and there is no root yet.
    pub fn add_node(&mut self, parent_id: Option<NodeId>, data: NodeData) -> NodeId {
        let node_id = self.arena.new_node(data);

        if let Some(parent) = parent_id {
            parent.append(node_id, &mut self.arena);
        } else if self.root.is_none() {
            self.root = Some(node_id);
        }

        node_id
    }

    /// Allocate a node that is not attached anywhere yet.
    pub fn add_detached(&mut self, data: NodeData) -> NodeId {
        self.arena.new_node(data)
    }

    /// Attach a detached node (and its subtree) as the last child of `parent_id`.
    pub fn attach(&mut self, parent_id: NodeId, node_id: NodeId) {
        parent_id.append(node_id, &mut self.arena);
    }

    pub fn get_node(&self, node_id: NodeId) -> Option<&NodeData> {
        self.arena.get(node_id).map(|n| n.get())
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get_children(&self, node_id: NodeId) -> Vec<NodeId> {
        node_id.children(&self.arena).collect()
    }

    /// Number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        self.root
            .map(|root| root.descendants(&self.arena).count())
            .unwrap_or(0)
    }

    /// Nodes reachable from the root in pre-order, paired with their
    /// positional identifiers.
    pub fn positions(&self) -> Vec<(String, NodeId)> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.collect_positions(root, ROOT_ID.to_string(), &mut out);
        }
        out
    }

    fn collect_positions(&self, node_id: NodeId, id: String, out: &mut Vec<(String, NodeId)>) {
        let children = self.get_children(node_id);
        out.push((id.clone(), node_id));
        for (index, child) in children.into_iter().enumerate() {
            self.collect_positions(child, child_id(&id, index), out);
        }
    }
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}
