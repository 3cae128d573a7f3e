//! Element tree nodes

use crate::attribute::Attribute;
use crate::model::Lookup;

/// Which of the two element shapes a node has
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Leaf element carrying inner text
    Value,
    /// Branch element carrying child elements
    Complex,
}

/// One node of the parsed tree
///
/// The kind is fixed when the element is created: a `Value` element never
/// has children and a `Complex` element never has inner text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Value {
        name: String,
        attributes: Vec<Attribute>,
        value: String,
    },
    Complex {
        name: String,
        attributes: Vec<Attribute>,
        children: Vec<Element>,
    },
}

impl Element {
    /// Create a leaf element
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Value {
            name: name.into(),
            attributes: Vec::new(),
            value: value.into(),
        }
    }

    /// Create a branch element
    pub fn complex(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Complex {
            name: name.into(),
            attributes: Vec::new(),
            children,
        }
    }

    /// Append an attribute, builder style
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().push(Attribute::new(key, value));
        self
    }

    /// Append a child to a `Complex` element
    ///
    /// A `Value` element cannot hold children, so the child is handed back.
    pub fn push_child(&mut self, child: Self) -> Result<(), Self> {
        match self {
            Self::Complex { children, .. } => {
                children.push(child);
                Ok(())
            }
            Self::Value { .. } => Err(child),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Value { .. } => ElementKind::Value,
            Self::Complex { .. } => ElementKind::Complex,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Value { name, .. } | Self::Complex { name, .. } => name,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Self::Value { attributes, .. } | Self::Complex { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        match self {
            Self::Value { attributes, .. } | Self::Complex { attributes, .. } => attributes,
        }
    }

    /// Inner text of a `Value` element
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Value { value, .. } => Some(value.as_str()),
            Self::Complex { .. } => None,
        }
    }

    /// Children of a `Complex` element; empty for `Value`
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Complex { children, .. } => children,
            Self::Value { .. } => &[],
        }
    }

    /// First attribute value stored under `key`
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| attr.key() == key)
            .map(Attribute::value)
    }

    pub fn has_attribute(&self, key: &str, value: &str) -> bool {
        self.attributes().iter().any(|attr| attr.matches(key, value))
    }

    /// First direct child named `name`
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|child| child.name() == name)
    }

    /// First direct child named `name` carrying the attribute `key="value"`
    pub fn child_with_attribute(&self, name: &str, key: &str, value: &str) -> Option<&Self> {
        self.children()
            .iter()
            .find(|child| child.name() == name && child.has_attribute(key, value))
    }

    /// All direct children named `name`, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children()
            .iter()
            .filter(move |child| child.name() == name)
    }

    /// Start a chained lookup at this element
    pub fn lookup(&self) -> Lookup<'_> {
        Lookup::from(self)
    }

    /// Canonical text rendering of this element and its subtree
    pub fn to_xml(&self) -> String {
        crate::serializer::element_to_string(self)
    }
}
