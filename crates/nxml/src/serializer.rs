//! Rendering trees back to text
//!
//! Rendering is a depth-first walk that writes each element as an open tag
//! with its attributes in insertion order, then either the leaf text or the
//! children, then the matching close tag. The flattened text is passed once
//! through [`canonicalize_whitespace`].

use crate::model::{Document, Element};
use crate::utils::canonicalize_whitespace;

/// Render a document: the declaration followed by every root element
pub fn to_string(doc: &Document) -> String {
    let mut output = String::from(doc.declaration.as_str());
    for root in &doc.roots {
        write_element(root, &mut output);
    }
    canonicalize_whitespace(&output)
}

/// Render a single element and its subtree
pub fn element_to_string(element: &Element) -> String {
    let mut output = String::new();
    write_element(element, &mut output);
    canonicalize_whitespace(&output)
}

/// Pending work of the depth-first walk
enum Step<'a> {
    Open(&'a Element),
    Close(&'a Element),
}

/// Append the raw rendering of `element` to `output`
///
/// The walk keeps its own stack, so nesting depth is bounded by memory only.
pub fn write_element(element: &Element, output: &mut String) {
    let mut stack = vec![Step::Open(element)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Open(element) => {
                write_open_tag(element, output);
                match element {
                    Element::Value { value, .. } => {
                        output.push_str(value);
                        write_close_tag(element, output);
                    }
                    Element::Complex { children, .. } => {
                        stack.push(Step::Close(element));
                        stack.extend(children.iter().rev().map(Step::Open));
                    }
                }
            }
            Step::Close(element) => write_close_tag(element, output),
        }
    }
}

fn write_open_tag(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(element.name());
    for attribute in element.attributes() {
        output.push(' ');
        output.push_str(attribute.key());
        output.push_str("=\"");
        output.push_str(attribute.value());
        output.push('"');
    }
    output.push('>');
}

fn write_close_tag(element: &Element, output: &mut String) {
    output.push_str("</");
    output.push_str(element.name());
    output.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested() {
        let doc = Document::new(vec![Element::complex(
            "a",
            vec![Element::value("b", "1"), Element::value("c", "2")],
        )]);
        assert_eq!(
            to_string(&doc),
            "<?xml version=\"1.0\"?><a><b>1</b><c>2</c></a>"
        );
    }

    #[test]
    fn test_serialize_attributes_in_order() {
        let el = Element::value("book", "Title")
            .with_attribute("id", "bk103")
            .with_attribute("lang", "en");
        assert_eq!(
            element_to_string(&el),
            "<book id=\"bk103\" lang=\"en\">Title</book>"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_string(&Document::default()), "<?xml version=\"1.0\"?>");
    }

    #[test]
    fn test_empty_branch_is_not_self_closed() {
        let el = Element::complex("a", Vec::new());
        assert_eq!(element_to_string(&el), "<a></a>");
    }

    #[test]
    fn test_canonicalization_applied_to_values() {
        let el = Element::value("p", "two\t\twords\n  here");
        assert_eq!(element_to_string(&el), "<p>twowords here</p>");
    }

    #[test]
    fn test_raw_rendering_keeps_whitespace() {
        let mut output = String::new();
        write_element(&Element::value("p", "a\tb"), &mut output);
        assert_eq!(output, "<p>a\tb</p>");
    }

    #[test]
    fn test_deep_branch_renders_in_order() {
        let mut element = Element::value("v", "1");
        for _ in 0..3 {
            element = Element::complex("n", vec![element, Element::value("w", "2")]);
        }
        assert_eq!(
            element_to_string(&element),
            "<n><n><n><v>1</v><w>2</w></n><w>2</w></n><w>2</w></n>"
        );
    }
}
