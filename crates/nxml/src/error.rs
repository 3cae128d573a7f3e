//! Error types for nxml

use std::fmt;
use thiserror::Error;

/// Position in the source document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in the source document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn at(pos: Pos) -> Self {
        Self::new(pos, pos)
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
///
/// The permissive parser never reports the syntax kinds; they come from
/// strict mode only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MissingDeclaration,
    EmptyDocument,
    EmptyName,
    SelfClosingTag { name: String },
    MismatchedTag { expected: String, found: String },
    UnexpectedClosingTag { name: String },
    UnclosedElement { name: String },
    TextOutsideElement { found: char },
    UnexpectedEof,
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
    Io { path: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDeclaration => write!(f, "missing or unterminated declaration"),
            Self::EmptyDocument => write!(f, "document has no elements"),
            Self::EmptyName => write!(f, "element has an empty name"),
            Self::SelfClosingTag { name } => write!(f, "self-closing tag not supported: {name}"),
            Self::MismatchedTag { expected, found } => {
                write!(f, "mismatched closing tag: expected {expected}, found {found}")
            }
            Self::UnexpectedClosingTag { name } => write!(f, "unexpected closing tag: {name}"),
            Self::UnclosedElement { name } => write!(f, "unclosed element: {name}"),
            Self::TextOutsideElement { found } => {
                write!(f, "unexpected character outside element content: {found:?}")
            }
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
            Self::Io { path } => write!(f, "i/o failure on {path}"),
        }
    }
}

/// Main error type for nxml
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at a specific position
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::at(pos))
    }

    /// Wrap an I/O failure on `path`
    pub fn io(path: impl Into<String>, source: &std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{}: {source}", ErrorKind::Io { path: path.clone() });
        Self::with_message(ErrorKind::Io { path }, Span::empty(), message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span == Span::empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "error at {}: {}", self.span.start, self.message)
        }
    }
}

/// Result type alias for nxml
pub type Result<T> = std::result::Result<T, Error>;
