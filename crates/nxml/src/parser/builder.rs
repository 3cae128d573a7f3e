//! Tree construction stacks driven by the parser
//!
//! Elements under construction live in an arena and refer to their children
//! by index. The open-element stack holds arena indices, most recently opened
//! on top. Attributes are collected on a separate pending stack and drained
//! into the next element that gets opened.

use tracing::{trace, warn};

use crate::attribute::Attribute;
use crate::model::{Element, ElementKind};

#[derive(Debug)]
enum Body {
    Value(String),
    Complex(Vec<usize>),
}

#[derive(Debug)]
struct Node {
    name: String,
    attributes: Vec<Attribute>,
    body: Body,
}

/// A branch being assembled: children still to visit and those already built
struct Frame {
    name: String,
    attributes: Vec<Attribute>,
    pending: std::vec::IntoIter<usize>,
    children: Vec<Element>,
}

/// Mutable construction context shared by the parser states
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Option<Node>>,
    open: Vec<usize>,
    pending_attributes: Vec<Attribute>,
    roots: Vec<usize>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an attribute for the next element to be opened
    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.pending_attributes.push(attribute);
    }

    pub fn pending_attributes(&self) -> &[Attribute] {
        &self.pending_attributes
    }

    /// Forget attributes that no element will claim
    pub fn discard_attributes(&mut self) {
        if !self.pending_attributes.is_empty() {
            trace!(count = self.pending_attributes.len(), "dropping unclaimed attributes");
            self.pending_attributes.clear();
        }
    }

    /// Open a new element of the given kind on top of the stack, draining all
    /// pending attributes onto it
    pub fn open(&mut self, name: String, kind: ElementKind) -> usize {
        let body = match kind {
            ElementKind::Value => Body::Value(String::new()),
            ElementKind::Complex => Body::Complex(Vec::new()),
        };
        trace!(%name, ?kind, depth = self.open.len(), "open element");
        let index = self.nodes.len();
        self.nodes.push(Some(Node {
            name,
            attributes: std::mem::take(&mut self.pending_attributes),
            body,
        }));
        self.open.push(index);
        index
    }

    /// Assign leaf text to the element on top of the stack
    pub fn set_value(&mut self, text: String) {
        let Some(node) = self.top_node_mut() else {
            return;
        };
        match &mut node.body {
            Body::Value(value) => *value = text,
            Body::Complex(_) => warn!(name = %node.name, "ignoring text on a branch element"),
        }
    }

    /// Close the element on top of the stack
    ///
    /// A closed element with no open parent becomes a finished root; otherwise
    /// it is appended as the last child of the new top. Returns `false` when
    /// there was nothing to close.
    pub fn close(&mut self) -> bool {
        let Some(index) = self.open.pop() else {
            warn!("closing tag without an open element");
            return false;
        };
        trace!(name = self.name_of(index), depth = self.open.len(), "close element");

        let Some(&parent) = self.open.last() else {
            self.roots.push(index);
            return true;
        };

        match self.nodes.get_mut(parent).and_then(Option::as_mut) {
            Some(Node {
                body: Body::Complex(children),
                ..
            }) => children.push(index),
            _ => {
                warn!(
                    name = self.name_of(index),
                    "element closed under a leaf parent, keeping it as a root"
                );
                self.roots.push(index);
            }
        }
        true
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Whether no element has been opened yet
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.open.is_empty()
    }

    /// Name of the element on top of the stack
    pub fn top_name(&self) -> Option<&str> {
        let index = *self.open.last()?;
        self.nodes
            .get(index)
            .and_then(Option::as_ref)
            .map(|node| node.name.as_str())
    }

    /// Assemble the finished tree
    ///
    /// Closed roots come first in document order. Elements still open are
    /// drained after them from the top of the stack down, each as its own
    /// root.
    pub fn finish(mut self) -> Vec<Element> {
        if self.open.len() > 1 {
            warn!(
                count = self.open.len(),
                "unclosed elements at end of input become separate roots"
            );
        }
        let mut order = std::mem::take(&mut self.roots);
        order.extend(self.open.drain(..).rev());
        order
            .into_iter()
            .filter_map(|index| self.assemble(index))
            .collect()
    }

    /// Build the owned subtree rooted at `index` without recursing, so deep
    /// documents cannot exhaust the call stack
    fn assemble(&mut self, index: usize) -> Option<Element> {
        let mut frames: Vec<Frame> = Vec::new();
        let mut next = Some(index);
        loop {
            if let Some(index) = next.take() {
                match self.nodes.get_mut(index).and_then(Option::take) {
                    Some(Node {
                        name,
                        attributes,
                        body: Body::Value(value),
                    }) => {
                        let leaf = Element::Value {
                            name,
                            attributes,
                            value,
                        };
                        match frames.last_mut() {
                            Some(parent) => parent.children.push(leaf),
                            None => return Some(leaf),
                        }
                    }
                    Some(Node {
                        name,
                        attributes,
                        body: Body::Complex(children),
                    }) => frames.push(Frame {
                        name,
                        attributes,
                        pending: children.into_iter(),
                        children: Vec::new(),
                    }),
                    None if frames.is_empty() => return None,
                    None => {}
                }
            }

            let frame = frames.last_mut()?;
            if let Some(child) = frame.pending.next() {
                next = Some(child);
                continue;
            }
            let frame = frames.pop()?;
            let branch = Element::Complex {
                name: frame.name,
                attributes: frame.attributes,
                children: frame.children,
            };
            match frames.last_mut() {
                Some(parent) => parent.children.push(branch),
                None => return Some(branch),
            }
        }
    }

    fn top_node_mut(&mut self) -> Option<&mut Node> {
        let index = *self.open.last()?;
        self.nodes.get_mut(index).and_then(Option::as_mut)
    }

    fn name_of(&self, index: usize) -> &str {
        self.nodes
            .get(index)
            .and_then(Option::as_ref)
            .map_or("", |node| node.name.as_str())
    }
}
