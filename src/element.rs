//! Generic XML element tree the builders write into.

use indexmap::IndexMap;
use tracing::{debug, trace};

/// A single XML element with its attributes, optional text and children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates a new empty element named `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    /// Creates a new element named `tag` holding `text`.
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Self::new(tag) }
    }

    /// Sets the attribute `key` to `value`, keeping the original position if
    /// the attribute is already present.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the element name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the value of the attribute `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns an iterator over attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the child elements in insertion order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first child named `tag`.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Returns an iterator over all children named `tag`.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// Appends `child` and returns a handle to it.
    pub fn push(&mut self, child: Element) -> &mut Element {
        trace!(parent = %self.tag, tag = %child.tag, "append element");
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns the first child named `tag`, appending an empty one if there is
    /// none yet.
    pub fn child_or_insert(&mut self, tag: &str) -> &mut Element {
        match self.children.iter().position(|child| child.tag == tag) {
            Some(index) => &mut self.children[index],
            None => self.push(Element::new(tag)),
        }
    }
}

/// Appends a `tag` child holding `text` to `node` unless `node` already has a
/// child with that name.
///
/// Returns `true` if the element was inserted. A second insertion under the
/// same tag keeps the first value.
pub fn insert_unique(node: &mut Element, tag: &str, text: impl Into<String>) -> bool {
    if node.child(tag).is_some() {
        debug!(parent = %node.tag, tag, "element already present, keeping the first value");
        return false;
    }
    node.push(Element::with_text(tag, text));
    true
}
