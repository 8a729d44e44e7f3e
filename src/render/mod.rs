//! Template rendering
//!
//! Expanded templates run on a shared minijinja environment. Each template
//! sees one variable, `node`, describing the class being rendered:
//!
//! ```text
//! node.key         raw key from the sample
//! node.name        class name for objects, raw key otherwise
//! node.type        target-language type
//! node.doc_type    target-language doc type
//! node.tag         lattice tag ("arrayObject", ...)
//! node.is_array / node.is_object
//! node.properties  child nodes, same shape
//! ```

use crate::error::{Error, Result};
use crate::naming;
use crate::schema::Node;
use crate::syntax;
use minijinja::{context, AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::sync::LazyLock;

static ENGINE: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.add_filter("camel_case", naming::to_camel_case);
    env.add_filter("pascal_case", naming::to_pascal_case);
    env.add_filter("snake_case", naming::to_snake_case);
    env.add_filter("kebab_case", naming::to_kebab_case);
    env.add_filter("dot_case", naming::to_dot_case);
    env
});

/// The shared template environment
pub fn engine() -> &'static Environment<'static> {
    &ENGINE
}

/// Template-facing projection of a [`Node`]
#[derive(Debug, Clone, Serialize)]
pub struct NodeView<'a> {
    pub key: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub type_name: Option<&'a str>,
    pub doc_type: Option<&'a str>,
    pub tag: &'static str,
    pub class_name: Option<&'a str>,
    pub file_name: Option<&'a str>,
    pub is_array: bool,
    pub is_object: bool,
    pub properties: Vec<NodeView<'a>>,
}

impl<'a> NodeView<'a> {
    /// View of a node and its whole subtree
    pub fn deep(node: &'a Node) -> Self {
        let mut view = Self::shallow(node);
        view.properties = node.children.iter().map(NodeView::deep).collect();
        view
    }

    /// View of a node without its children
    pub fn shallow(node: &'a Node) -> Self {
        Self {
            key: &node.key,
            name: node.name(),
            type_name: node.type_name.as_deref(),
            doc_type: node.doc_type_name.as_deref(),
            tag: node.tag.as_str(),
            class_name: node.class_name.as_deref(),
            file_name: node.file_name.as_deref(),
            is_array: node.tag.is_array(),
            is_object: node.tag.is_object(),
            properties: Vec::new(),
        }
    }
}

/// Render a small inline template (type mapping entry, name template)
///
/// Text without any template syntax is returned as is.
pub fn render_inline(name: &str, source: &str, view: &NodeView<'_>) -> Result<String> {
    if !source.contains("{{") && !source.contains("{%") {
        return Ok(source.to_string());
    }
    let expanded = syntax::compile(source)?;
    engine()
        .render_named_str(name, &expanded, context! { node => view })
        .map_err(|e| Error::from_minijinja(name, &e))
}

/// A user template ready to render against formatted nodes
#[derive(Debug, Clone)]
pub struct Renderer {
    name: String,
    /// Whole template with split markers removed
    body: String,
    /// Content of the split section, if any
    section: Option<String>,
}

impl Renderer {
    /// Validate and expand a macro template
    pub fn compile(name: impl Into<String>, source: &str) -> Result<Self> {
        let expanded = syntax::compile(source)?;
        let section = syntax::extract_split(&expanded).map(str::to_string);
        let body = syntax::strip_split(&expanded);
        Ok(Self {
            name: name.into(),
            body,
            section,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Engine source used for the whole-tree file
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Engine source used for each split file
    pub fn section(&self) -> &str {
        self.section.as_deref().unwrap_or(&self.body)
    }

    /// Render the template for one node
    ///
    /// `split` selects the split section (when the template has one)
    /// instead of the whole body.
    pub fn render(&self, node: &Node, split: bool) -> Result<String> {
        let source = if split { self.section() } else { self.body() };
        engine()
            .render_named_str(&self.name, source, context! { node => NodeView::deep(node) })
            .map_err(|e| Error::from_minijinja(&self.name, &e))
    }
}

/// Nodes that get a file of their own
///
/// Without splitting only the root is rendered. With splitting the root and
/// every object or array-of-objects node are rendered, in pre-order.
pub fn split_nodes(root: &Node, split_by_files: bool) -> Vec<&Node> {
    if split_by_files {
        root.composites()
    } else {
        vec![root]
    }
}
