//! Mutable document tree for stroke order diagrams
//!
//! A [`Document`] owns its nodes directly: every [`Element`] exclusively owns
//! its children, in order. Sibling order is meaningful (it is the stroke
//! order) and is only changed by the explicit insert/append/take operations.

mod parser;
mod writer;

pub use parser::parse;

use std::slice;

use crate::error::DocumentError;

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    /// Raw `<!DOCTYPE ...>` declaration, written back verbatim
    Doctype(String),
}

impl Node {
    /// The element inside this node, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable access to the element inside this node, if it is one
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    fn is_whitespace_text(&self) -> bool {
        matches!(self, Node::Text(text) if !text.is_empty() && text.chars().all(char::is_whitespace))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with a tag name, ordered attributes and ordered children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Qualified tag name, e.g. `path` or `svg`
    pub name: String,
    attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attribute`]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`Element::append_child`]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    /// Attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Value of the attribute `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Set an attribute, replacing the value in place if it already exists
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Set or replace the `style` attribute
    pub fn set_style(&mut self, style: impl Into<String>) {
        self.set_attribute("style", style);
    }

    /// Insert a child at `index`, shifting later siblings
    pub fn insert_child(&mut self, index: usize, child: impl Into<Node>) {
        self.children.insert(index, child.into());
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Remove and return all children, in order
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Child elements, skipping text and comments
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Direct child elements named `name`
    pub fn direct_children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.child_elements().filter(move |child| child.name == name)
    }

    /// All descendant elements in document (preorder) order, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Descendant elements named `name`, in document order
    pub fn elements_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.descendants().filter(move |element| element.name == name)
    }

    /// Visit every descendant element in document order
    ///
    /// `f` sees each element before its children are visited, so changes it
    /// makes to the children are visible to the rest of the walk.
    pub fn for_each_descendant_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        for child in self.children.iter_mut() {
            if let Node::Element(element) = child {
                f(element);
                element.for_each_descendant_mut(f);
            }
        }
    }

    /// Find `self` or the first descendant named `name`
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|child| child.find_mut(name))
    }

    /// Remove every whitespace-only text node below this element
    pub fn strip_whitespace_text(&mut self) {
        strip_whitespace_text(&mut self.children);
    }

    /// Serialize without adding any whitespace
    pub fn to_compact_string(&self) -> String {
        let mut out = String::new();
        writer::write_compact(&mut out, self);
        out
    }
}

fn strip_whitespace_text(nodes: &mut Vec<Node>) {
    nodes.retain(|node| !node.is_whitespace_text());
    for node in nodes.iter_mut() {
        if let Node::Element(element) = node {
            element.strip_whitespace_text();
        }
    }
}

/// Preorder iterator over descendant elements
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(_) => continue,
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A whole document: the root element plus any comments and doctype around it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Top-level nodes in document order
    pub children: Vec<Node>,
}

impl Document {
    /// Parse a document from text
    pub fn parse(source: &str) -> Result<Self, DocumentError> {
        parse(source)
    }

    /// The first element named `svg`, searching the whole tree
    pub fn svg_mut(&mut self) -> Result<&mut Element, DocumentError> {
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|element| element.find_mut("svg"))
            .ok_or(DocumentError::MissingSvg)
    }

    /// The document's root element
    pub fn root(&self) -> Option<&Element> {
        self.children.iter().find_map(Node::as_element)
    }

    /// The first comment that is a direct child of the document
    pub fn first_comment_mut(&mut self) -> Option<&mut String> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Comment(text) => Some(text),
            _ => None,
        })
    }

    /// Remove every whitespace-only text node in the document
    pub fn strip_whitespace_text(&mut self) {
        strip_whitespace_text(&mut self.children);
    }

    /// Serialize with an XML declaration, one node per line and two-space indentation
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        writer::write_pretty(&mut out, self);
        out
    }
}
