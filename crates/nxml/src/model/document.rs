//! Document container

use crate::model::{Element, Lookup};

/// Leading `<?xml ...?>` marker
///
/// Only the version is modeled and it is always `1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Declaration;

impl Declaration {
    pub const VERSION: &'static str = "1.0";
    pub const TEXT: &'static str = "<?xml version=\"1.0\"?>";

    pub const fn version(&self) -> &'static str {
        Self::VERSION
    }

    pub const fn as_str(&self) -> &'static str {
        Self::TEXT
    }
}

/// Parsed document: a declaration followed by root elements in document order
///
/// More than one root element is allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub declaration: Declaration,
    pub roots: Vec<Element>,
}

impl Document {
    pub fn new(roots: Vec<Element>) -> Self {
        Self {
            declaration: Declaration,
            roots,
        }
    }

    pub fn push_root(&mut self, root: Element) {
        self.roots.push(root);
    }

    pub fn roots(&self) -> &[Element] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// First root element named `name`
    pub fn root(&self, name: &str) -> Option<&Element> {
        self.roots.iter().find(|root| root.name() == name)
    }

    /// First root element named `name` carrying the attribute `key="value"`
    pub fn root_with_attribute(&self, name: &str, key: &str, value: &str) -> Option<&Element> {
        self.roots
            .iter()
            .find(|root| root.name() == name && root.has_attribute(key, value))
    }

    /// Start a chained lookup at the root named `name`
    pub fn select(&self, name: &str) -> Lookup<'_> {
        Lookup::new(self.root(name))
    }

    /// Canonical text rendering of the whole document
    pub fn to_xml(&self) -> String {
        crate::serializer::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_text() {
        assert_eq!(Declaration.as_str(), "<?xml version=\"1.0\"?>");
        assert_eq!(Declaration.version(), "1.0");
    }

    #[test]
    fn test_root_lookup() {
        let doc = Document::new(vec![
            Element::value("a", "1").with_attribute("n", "x"),
            Element::value("a", "2").with_attribute("n", "y"),
        ]);
        assert_eq!(doc.root("a").and_then(Element::text), Some("1"));
        assert_eq!(
            doc.root_with_attribute("a", "n", "y").and_then(Element::text),
            Some("2")
        );
        assert!(doc.root("b").is_none());
        assert!(doc.root_with_attribute("a", "n", "z").is_none());
    }

    #[test]
    fn test_select_miss_is_invalid() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert!(doc.select("anything").is_invalid());
    }
}
