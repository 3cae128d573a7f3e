//! Chained lookups with a "not found" value

use crate::model::Element;

/// Result of a lookup that may have missed
///
/// A miss is [`Lookup::INVALID`]. Chaining from a miss stays a miss, and
/// rendering a miss yields an empty string, so paths like
/// `doc.select("catalog").child_with_attribute("book", "id", "bk103")` can be
/// written without checking every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lookup<'a> {
    element: Option<&'a Element>,
}

impl<'a> Lookup<'a> {
    pub const INVALID: Self = Self { element: None };

    pub const fn new(element: Option<&'a Element>) -> Self {
        Self { element }
    }

    pub const fn is_invalid(&self) -> bool {
        self.element.is_none()
    }

    pub const fn get(&self) -> Option<&'a Element> {
        self.element
    }

    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self::new(self.element.and_then(|el| el.child(name)))
    }

    #[must_use]
    pub fn child_with_attribute(&self, name: &str, key: &str, value: &str) -> Self {
        Self::new(
            self.element
                .and_then(|el| el.child_with_attribute(name, key, value)),
        )
    }

    /// Element name, empty on a miss
    pub fn name(&self) -> &'a str {
        self.element.map_or("", Element::name)
    }

    pub fn text(&self) -> Option<&'a str> {
        self.element.and_then(Element::text)
    }

    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.element.and_then(|el| el.attribute(key))
    }

    /// Canonical rendering; empty on a miss
    pub fn to_xml(&self) -> String {
        self.element.map(Element::to_xml).unwrap_or_default()
    }
}

impl<'a> From<&'a Element> for Lookup<'a> {
    fn from(element: &'a Element) -> Self {
        Self::new(Some(element))
    }
}

impl<'a> From<Option<&'a Element>> for Lookup<'a> {
    fn from(element: Option<&'a Element>) -> Self {
        Self::new(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        Element::complex(
            "catalog",
            vec![
                Element::value("book", "A").with_attribute("id", "bk101"),
                Element::value("book", "B").with_attribute("id", "bk103"),
            ],
        )
    }

    #[test]
    fn test_chain_hit() {
        let root = tree();
        let book = root.lookup().child_with_attribute("book", "id", "bk103");
        assert!(!book.is_invalid());
        assert_eq!(book.name(), "book");
        assert_eq!(book.text(), Some("B"));
        assert_eq!(book.attribute("id"), Some("bk103"));
    }

    #[test]
    fn test_chain_miss_propagates() {
        let root = tree();
        let miss = root.lookup().child("shelf").child("book");
        assert!(miss.is_invalid());
        assert_eq!(miss, Lookup::INVALID);
        assert_eq!(miss.name(), "");
        assert_eq!(miss.text(), None);
    }

    #[test]
    fn test_invalid_renders_empty() {
        assert_eq!(Lookup::INVALID.to_xml(), "");
        assert_eq!(Lookup::default().to_xml(), "");
    }
}
