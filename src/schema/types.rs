//! Schema tree types

use crate::types::TypeTag;
use serde::{Deserialize, Serialize};

/// A vertex of the inferred schema tree
///
/// `children` is only populated for [`TypeTag::Object`] and
/// [`TypeTag::ArrayObject`] nodes. The formatter fills in the naming and
/// type projection fields in place; before formatting they are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Raw key as found in the sample (root: the root class name)
    pub key: String,

    /// Inferred type tag
    #[serde(rename = "type")]
    pub tag: TypeTag,

    /// Child nodes in source order (or key order once sorted)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    /// Resolved class name (composite nodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Resolved output file name (composite nodes and the root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Target-language type string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Target-language type string for doc comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_type_name: Option<String>,
}

impl Node {
    /// Create an unformatted node
    pub fn new(key: impl Into<String>, tag: TypeTag, children: Vec<Node>) -> Self {
        Self {
            key: key.into(),
            tag,
            children,
            class_name: None,
            file_name: None,
            type_name: None,
            doc_type_name: None,
        }
    }

    /// Create a node without children
    pub fn leaf(key: impl Into<String>, tag: TypeTag) -> Self {
        Self::new(key, tag, Vec::new())
    }

    /// Whether this node becomes a class of its own
    pub fn is_composite(&self) -> bool {
        self.tag.is_composite()
    }

    /// The name templates see: the class name once resolved, else the key
    pub fn name(&self) -> &str {
        self.class_name.as_deref().unwrap_or(&self.key)
    }

    /// Look up a direct child by raw key
    #[cfg(test)]
    pub(crate) fn child(&self, key: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.key == key)
    }

    /// Pre-order list of this node and every composite descendant
    pub fn composites(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            if child.is_composite() {
                out.extend(child.composites());
            }
        }
        out
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}
