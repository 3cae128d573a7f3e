//! Element tree model

pub mod document;
pub mod element;
pub mod lookup;

pub use document::{Declaration, Document};
pub use element::{Element, ElementKind};
pub use lookup::Lookup;
