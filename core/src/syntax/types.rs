use serde::{Deserialize, Deserializer};

/// Separator between a node's tag and its text in a display label.
pub const LABEL_SEPARATOR: &str = " : ";

/// A node as it appears in the input JSON. Every field is optional; a node
/// without `children` is a leaf, a node with `"children": []` or
/// `"children": null` is not.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Node {
    pub tag: Option<String>,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "present_children")]
    pub children: Option<Vec<Node>>,
}

// Only called when the key exists, so `null` still marks a branch.
fn present_children<'de, D>(deserializer: D) -> Result<Option<Vec<Node>>, D::Error>
where
    D: Deserializer<'de>,
{
    let children = Option::<Vec<Node>>::deserialize(deserializer)?;
    Ok(Some(children.unwrap_or_default()))
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of nodes in this subtree, self included.
    pub fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(Node::count)
            .sum::<usize>()
    }
}

/// Payload stored in the arena for each tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub tag: Option<String>,
    pub text: Option<String>,
    /// The input node had no `children` field.
    pub leaf: bool,
}

impl NodeData {
    pub fn new(tag: Option<String>, leaf: bool) -> Self {
        Self {
            tag,
            text: None,
            leaf,
        }
    }

    pub fn leaf(tag: impl Into<String>) -> Self {
        Self::new(Some(tag.into()), true)
    }

    pub fn branch(tag: impl Into<String>) -> Self {
        Self::new(Some(tag.into()), false)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// `TAG`, `TAG : TEXT`, or empty when there is no tag. Text without a
    /// tag is not shown.
    pub fn label(&self) -> String {
        match (&self.tag, &self.text) {
            (Some(tag), Some(text)) => format!("{tag}{LABEL_SEPARATOR}{text}"),
            (Some(tag), None) => tag.clone(),
            (None, _) => String::new(),
        }
    }

    pub fn has_tag_in<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.tag
            .as_deref()
            .is_some_and(|tag| tags.iter().any(|t| t.as_ref() == tag))
    }
}

impl From<&Node> for NodeData {
    fn from(node: &Node) -> Self {
        Self {
            tag: node.tag.clone(),
            text: node.text.clone(),
            leaf: node.is_leaf(),
        }
    }
}
