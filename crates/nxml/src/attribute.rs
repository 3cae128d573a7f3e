//! Element attributes

use std::fmt;

/// A `key="value"` pair attached to an element
///
/// The value is kept exactly as it appeared between the quotes; interpreting
/// it is up to the caller. Keys are not required to be unique on an element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attribute {
    key: String,
    value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialized value, without the surrounding quotes
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this attribute has exactly the given key and value
    pub fn matches(&self, key: &str, value: &str) -> bool {
        self.key == key && self.value == value
    }

    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Attribute {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_display() {
        let attr = Attribute::new("id", "bk103");
        assert_eq!(attr.to_string(), "id=\"bk103\"");
    }

    #[test]
    fn test_attribute_matches_exactly() {
        let attr = Attribute::from(("id", "bk103"));
        assert!(attr.matches("id", "bk103"));
        assert!(!attr.matches("id", "bk10"));
        assert!(!attr.matches("ID", "bk103"));
    }

    #[test]
    fn test_empty_value() {
        let attr = Attribute::new("flag", "");
        assert_eq!(attr.value(), "");
        assert_eq!(attr.to_string(), "flag=\"\"");
    }

    #[test]
    fn test_into_parts() {
        let (key, value) = Attribute::new("lang", "en").into_parts();
        assert_eq!((key.as_str(), value.as_str()), ("lang", "en"));
    }
}
