//! Tag-based tree filtering.
//!
//! Rules are either inclusions or exclusions. A node must be kept when some
//! inclusion rule matches it and no exclusion rule does. The pass runs
//! bottom-up and produces a new tree:
//!
//! - a node hit by a subtree-deleting exclusion disappears with everything
//!   below it;
//! - a node that must be kept, or that is not excluded and still has two or
//!   more surviving subtrees, is kept with those subtrees as its children;
//! - any other node is dropped and its surviving subtrees take its place in
//!   the parent.
//!
//! The root is always kept.

use indextree::NodeId;
use tracing::debug;

use crate::error::ParseError;
use crate::syntax::tree::ParseTree;
use crate::syntax::types::NodeData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule {
    /// Inclusion matching every node.
    SelectAll,
    /// Inclusion matching nodes whose tag is listed.
    IncludeTags(Vec<String>),
    /// Exclusion matching nodes whose tag is listed.
    ExcludeTags {
        tags: Vec<String>,
        delete_subtree: bool,
    },
}

impl FilterRule {
    pub fn include<I: IntoIterator<Item = String>>(tags: I) -> Self {
        FilterRule::IncludeTags(tags.into_iter().collect())
    }

    pub fn exclude<I: IntoIterator<Item = String>>(tags: I, delete_subtree: bool) -> Self {
        FilterRule::ExcludeTags {
            tags: tags.into_iter().collect(),
            delete_subtree,
        }
    }

    pub fn is_inclusion(&self) -> bool {
        !self.is_exclusion()
    }

    pub fn is_exclusion(&self) -> bool {
        matches!(self, FilterRule::ExcludeTags { .. })
    }

    pub fn requires_subtree_deletion(&self) -> bool {
        matches!(
            self,
            FilterRule::ExcludeTags {
                delete_subtree: true,
                ..
            }
        )
    }

    pub fn matches(&self, node: &NodeData) -> bool {
        match self {
            FilterRule::SelectAll => true,
            FilterRule::IncludeTags(tags) => node.has_tag_in(tags),
            FilterRule::ExcludeTags { tags, .. } => node.has_tag_in(tags),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CanKeep {
    Yes,
    No,
    NoDeleteSubtree,
}

pub struct TreeFilter<'a> {
    rules: &'a [FilterRule],
}

impl<'a> TreeFilter<'a> {
    pub fn new(rules: &'a [FilterRule]) -> Self {
        Self { rules }
    }

    /// Included by some rule and excluded by none.
    pub fn must_keep(&self, node: &NodeData) -> bool {
        let included = self
            .rules
            .iter()
            .any(|rule| rule.is_inclusion() && rule.matches(node));
        included && self.can_keep(node) == CanKeep::Yes
    }

    fn can_keep(&self, node: &NodeData) -> CanKeep {
        let mut excluded = false;
        for rule in self.rules.iter().filter(|r| r.is_exclusion()) {
            if rule.matches(node) {
                if rule.requires_subtree_deletion() {
                    return CanKeep::NoDeleteSubtree;
                }
                excluded = true;
            }
        }
        if excluded {
            CanKeep::No
        } else {
            CanKeep::Yes
        }
    }

    /// Build the filtered tree. Without rules the input is returned as is.
    pub fn apply(&self, tree: ParseTree) -> Result<ParseTree, ParseError> {
        let root_id = tree.root().ok_or(ParseError::EmptyTree)?;
        if self.rules.is_empty() {
            return Ok(tree);
        }

        let root_data = tree.get_node(root_id).ok_or(ParseError::EmptyTree)?;
        let mut out = ParseTree::new();
        let new_root = out.add_node(None, root_data.clone());
        for child in tree.get_children(root_id) {
            for survivor in self.visit(&tree, child, &mut out) {
                out.attach(new_root, survivor);
            }
        }

        debug!(
            before = tree.node_count(),
            after = out.node_count(),
            "filtered tree"
        );
        Ok(out)
    }

    fn visit(&self, src: &ParseTree, node_id: NodeId, out: &mut ParseTree) -> Vec<NodeId> {
        let Some(data) = src.get_node(node_id) else {
            return Vec::new();
        };
        let can_keep = self.can_keep(data);
        if can_keep == CanKeep::NoDeleteSubtree {
            return Vec::new();
        }

        let mut survivors = Vec::new();
        for child in src.get_children(node_id) {
            survivors.extend(self.visit(src, child, out));
        }

        let branches = can_keep == CanKeep::Yes && survivors.len() >= 2;
        if self.must_keep(data) || branches {
            let kept = out.add_detached(data.clone());
            for survivor in survivors {
                out.attach(kept, survivor);
            }
            vec![kept]
        } else {
            survivors
        }
    }
}

/// Filter `tree` with `rules`. See the module docs for the semantics.
pub fn filter_tree(tree: ParseTree, rules: &[FilterRule]) -> Result<ParseTree, ParseError> {
    TreeFilter::new(rules).apply(tree)
}
