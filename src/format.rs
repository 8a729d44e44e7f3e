//! Tree formatting
//!
//! Walks a freshly inferred tree and fills in the per-language fields of
//! every node: class name, type string, doc type string and file name.
//! Children can optionally be sorted by key first.

use crate::error::Result;
use crate::naming;
use crate::profile::LangProfile;
use crate::render::{render_inline, NodeView};
use crate::schema::Node;
use crate::types::TypeTag;
use serde::{Deserialize, Serialize};

/// Default class name for the root node
pub const DEFAULT_ROOT_CLASS_NAME: &str = "RootClass";

/// Default file name template when the profile has none
pub const DEFAULT_FILE_NAME_TEMPLATE: &str = "{{ Name }}";

/// Naming options that do not depend on the target language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub root_class_name: String,
    pub prefix_class_name: String,
    pub suffix_class_name: String,
    pub sort_properties: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            root_class_name: DEFAULT_ROOT_CLASS_NAME.to_string(),
            prefix_class_name: String::new(),
            suffix_class_name: String::new(),
            sort_properties: false,
        }
    }
}

/// Applies a [`LangProfile`] to a schema tree
#[derive(Debug, Clone)]
pub struct Formatter<'a> {
    profile: &'a LangProfile,
    options: &'a FormatOptions,
}

impl<'a> Formatter<'a> {
    pub fn new(profile: &'a LangProfile, options: &'a FormatOptions) -> Self {
        Self { profile, options }
    }

    /// Format the whole tree in place
    ///
    /// The root takes the configured root class name as its key and always
    /// gets a file name, whatever its type.
    pub fn format(&self, root: &mut Node) -> Result<()> {
        if root.key.is_empty() {
            root.key = if self.options.root_class_name.trim().is_empty() {
                DEFAULT_ROOT_CLASS_NAME.to_string()
            } else {
                self.options.root_class_name.clone()
            };
        }

        self.format_node(root)?;

        if root.file_name.is_none() {
            root.file_name = Some(self.file_name(root)?);
        }
        Ok(())
    }

    fn format_node(&self, node: &mut Node) -> Result<()> {
        if node.is_composite() {
            if self.options.sort_properties {
                node.children.sort_by(|a, b| a.key.cmp(&b.key));
            }
            node.class_name = Some(self.class_name(&node.key)?);
        }

        node.type_name = Some(render_type(node, self.profile)?);
        node.doc_type_name = Some(render_doc_type(node, self.profile)?);

        if node.is_composite() {
            node.file_name = Some(self.file_name(node)?);
        }

        for child in &mut node.children {
            self.format_node(child)?;
        }
        Ok(())
    }

    /// Class name for a raw key: prefix + PascalCase(key) + suffix, then the
    /// profile's class name template
    pub fn class_name(&self, key: &str) -> Result<String> {
        let base = format!(
            "{}{}{}",
            self.options.prefix_class_name,
            naming::to_pascal_case(key),
            self.options.suffix_class_name
        );

        let template = self.profile.class_name_template.as_str();
        if template.trim().is_empty() {
            return Ok(base);
        }

        let mut probe = Node::leaf(base.clone(), TypeTag::Object);
        probe.class_name = Some(base);
        render_inline("classNameTemplate", template, &NodeView::shallow(&probe))
    }

    /// File name for a node: the profile's file name template plus extension
    pub fn file_name(&self, node: &Node) -> Result<String> {
        let template = match self.profile.file_name_template.trim() {
            "" => DEFAULT_FILE_NAME_TEMPLATE,
            _ => self.profile.file_name_template.as_str(),
        };
        let stem = render_inline("fileNameTemplate", template, &NodeView::shallow(node))?;
        Ok(format!("{stem}{}", self.profile.extension()))
    }
}

/// Target-language type of a node
///
/// Composite nodes must already carry their class name so mapping entries
/// such as `"*{{ Name.PascalCase }}"` resolve to it.
pub fn render_type(node: &Node, profile: &LangProfile) -> Result<String> {
    let entry = profile.type_mapping.get(node.tag);
    render_inline("typeMapping", entry, &NodeView::shallow(node))
}

/// Target-language doc type of a node
pub fn render_doc_type(node: &Node, profile: &LangProfile) -> Result<String> {
    let entry = profile.doc_mapping().get(node.tag);
    render_inline("typeDocMapping", entry, &NodeView::shallow(node))
}
