//! Namespace-qualified element lookups over a parsed document.
//!
//! Every step returns `Option`, and [`Element::require`] is the single
//! place where an absent element becomes a [`ExtractError::SchemaViolation`].
//! Callers chain `require` with `?` so the first missing element ends the
//! document.

use roxmltree::{Document, Node};

use super::error::ExtractError;

/// An element in a schedule document, bound to the schema namespace.
#[derive(Clone, Copy)]
pub struct Element<'a, 'input> {
    node: Node<'a, 'input>,
    namespace: &'a str,
}

impl<'a, 'input> Element<'a, 'input> {
    /// The document's root element.
    pub fn root(doc: &'a Document<'input>, namespace: &'a str) -> Self {
        Self {
            node: doc.root_element(),
            namespace,
        }
    }

    /// Local name of this element.
    pub fn name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<Self> {
        self.node
            .children()
            .find(|n| self.matches(n, name))
            .map(|node| self.wrap(node))
    }

    /// Last child element with the given local name.
    pub fn last_child(&self, name: &str) -> Option<Self> {
        self.node
            .children()
            .filter(|n| self.matches(n, name))
            .last()
            .map(|node| self.wrap(node))
    }

    /// All child elements with the given local name, in document order.
    pub fn children(&self, name: &str) -> Vec<Self> {
        self.node
            .children()
            .filter(|n| self.matches(n, name))
            .map(|node| self.wrap(node))
            .collect()
    }

    /// First child element with the given local name, or a schema violation.
    pub fn require(&self, name: &str) -> Result<Self, ExtractError> {
        self.child(name).ok_or_else(|| self.missing(name))
    }

    /// Last child element with the given local name, or a schema violation.
    pub fn require_last(&self, name: &str) -> Result<Self, ExtractError> {
        self.last_child(name).ok_or_else(|| self.missing(name))
    }

    /// Text content, empty if the element has none.
    pub fn text(&self) -> &'a str {
        self.node.text().unwrap_or("")
    }

    /// Slash-separated local names from the root to this element.
    pub fn path(&self) -> String {
        let mut names: Vec<&str> = self
            .node
            .ancestors()
            .filter(Node::is_element)
            .map(|n| n.tag_name().name())
            .collect();
        names.reverse();
        names.join("/")
    }

    /// Schema violation for an absent child of this element.
    pub fn missing(&self, name: &str) -> ExtractError {
        ExtractError::SchemaViolation {
            path: format!("{}/{}", self.path(), name),
        }
    }

    fn matches(&self, node: &Node<'_, '_>, name: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == name
            && node.tag_name().namespace().unwrap_or("") == self.namespace
    }

    fn wrap(&self, node: Node<'a, 'input>) -> Self {
        Self {
            node,
            namespace: self.namespace,
        }
    }
}
