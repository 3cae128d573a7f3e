//! Lexical states of the parser

use std::fmt;

/// Where the parser is within the document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    /// Inside the leading declaration, waiting for `?>`
    #[default]
    Declaration,
    /// Between tags, waiting for `<`
    WaitForElementOpen,
    /// Reading a tag name after `<`
    ElementOpen,
    /// Inside a start tag, between attributes
    WaitForAttribute,
    /// Reading an attribute name
    ElementAttributeName,
    /// Reading an attribute value
    ElementAttributeValue,
    /// After a start tag, deciding between a leaf and a branch
    GetInnerElementType,
    /// Reading leaf text
    ElementValue,
    /// Inside a closing tag, waiting for `>`
    ElementClose,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Declaration => "declaration",
            Self::WaitForElementOpen => "wait-for-element-open",
            Self::ElementOpen => "element-open",
            Self::WaitForAttribute => "wait-for-attribute",
            Self::ElementAttributeName => "attribute-name",
            Self::ElementAttributeValue => "attribute-value",
            Self::GetInnerElementType => "inner-element-type",
            Self::ElementValue => "element-value",
            Self::ElementClose => "element-close",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(State::default().to_string(), "declaration");
        assert_eq!(State::ElementAttributeValue.to_string(), "attribute-value");
        assert_eq!(State::ElementClose.to_string(), "element-close");
    }
}
