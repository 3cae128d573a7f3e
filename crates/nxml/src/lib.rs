//! nxml - a minimal parser and serializer for XML-like documents
//!
//! A document is a fixed declaration followed by one or more root elements.
//! Every element is either a leaf carrying text or a branch carrying child
//! elements; there is no mixed content, no comments and no entity handling.
//!
//! # Quick Start
//!
//! ```
//! use nxml::from_str;
//! # fn main() -> Result<(), nxml::Error> {
//! let doc = from_str(
//!     r#"<?xml version="1.0"?><catalog><book id="bk103">Maeve Ascendant</book></catalog>"#,
//! )?;
//! let book = doc
//!     .select("catalog")
//!     .child_with_attribute("book", "id", "bk103");
//! assert_eq!(book.text(), Some("Maeve Ascendant"));
//! assert!(doc.select("catalog").child("magazine").is_invalid());
//!
//! assert_eq!(
//!     doc.to_xml(),
//!     r#"<?xml version="1.0"?><catalog><book id="bk103">Maeve Ascendant</book></catalog>"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Parsing is permissive by default: malformed input is absorbed rather than
//! rejected. Use [`Config::strict`] to get errors instead. Both modes reject
//! input nested deeper than 128 elements or larger than 10 MB unless the
//! limits are changed with [`Config::new`] or lifted with [`Config::unlimited`].

#![forbid(unsafe_code)]

use std::path::Path;

use tracing::{info, instrument};

pub mod attribute;
pub use attribute::Attribute;

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod model;
pub use model::{Declaration, Document, Element, ElementKind, Lookup};

pub mod parser;
pub use parser::{Config, Parser, State};

pub mod serializer;
pub mod utils;
pub use utils::{canonicalize_whitespace, load_file_as_string, save_string_to_file};

/// Parse a document with the permissive default configuration
pub fn from_str(s: &str) -> Result<Document> {
    let mut parser = Parser::new(s);
    parser.parse()
}

/// Parse a document with a custom configuration
pub fn from_str_with_config(s: &str, config: Config) -> Result<Document> {
    let mut parser = Parser::with_config(s, config);
    parser.parse()
}

/// Render a document to canonical text
pub fn to_string(doc: &Document) -> String {
    serializer::to_string(doc)
}

/// Load a file and parse it with the default configuration
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    let content = load_file_as_string(path)?;
    let doc = from_str(&content)?;
    info!(roots = doc.roots.len(), "file parsed");
    Ok(doc)
}

/// Render a document and write it to a file
pub fn write_file(path: impl AsRef<Path>, doc: &Document) -> Result<()> {
    save_string_to_file(path, &to_string(doc))
}
