use crate::syntax::tree::ParseTree;

/// A node picked out by [`collect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    /// Positional identifier, same as in the DOT output.
    pub id: String,
    pub label: String,
}

/// Every node whose tag is one of `tags`, in pre-order.
pub fn collect<S: AsRef<str>>(tree: &ParseTree, tags: &[S]) -> Vec<Collected> {
    tree.positions()
        .into_iter()
        .filter_map(|(id, node_id)| {
            let data = tree.get_node(node_id)?;
            data.has_tag_in(tags).then(|| Collected {
                id,
                label: data.label(),
            })
        })
        .collect()
}
