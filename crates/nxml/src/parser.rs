//! Character-driven document parser
//!
//! The parser walks the input one character at a time with one character of
//! lookahead and moves through the [`State`] machine. Tree construction
//! happens at state boundaries through the [`TreeBuilder`] stacks.
//!
//! Processing stops once the lookahead would run past the end of the input,
//! so the last character is never handled as a primary character. For a
//! well-formed document that character is the `>` of the final closing tag;
//! the element it would close is still on the stack and is drained into the
//! document as a root.
//!
//! With the default [`Config`] malformed input is absorbed: the parser never
//! reports a syntax error and may build a tree that misrepresents the text.
//! [`Config::strict`] turns those situations into errors instead.

pub mod builder;
pub mod cursor;
pub mod state;

use tracing::{debug, instrument};

use crate::attribute::Attribute;
use crate::error::{Error, ErrorKind, Pos, Result};
use crate::model::{Document, ElementKind};

pub use builder::TreeBuilder;
pub use cursor::Cursor;
pub use state::State;

/// Parser configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Report malformed input instead of absorbing it
    pub strict: bool,
    /// Maximum open-element depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Permissive parsing with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            strict: false,
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Permissive parsing with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            strict: false,
            max_depth,
            max_size,
        }
    }

    /// Strict validation with default limits
    pub const fn strict() -> Self {
        Self {
            strict: true,
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB
        }
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Document parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    state: State,
    builder: TreeBuilder,
    name: String,
    attribute_name: String,
    attribute_value: String,
    value: String,
    close_name: String,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the permissive default configuration
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    pub fn with_config(input: &'a str, config: Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            state: State::default(),
            builder: TreeBuilder::new(),
            name: String::new(),
            attribute_name: String::new(),
            attribute_value: String::new(),
            value: String::new(),
            close_name: String::new(),
        }
    }

    pub const fn state(&self) -> State {
        self.state
    }

    /// Parse the whole input into a document
    ///
    /// The parser is exhausted afterwards; calling this again yields an
    /// empty document.
    #[instrument(level = "debug", skip(self), fields(strict = self.config.strict))]
    pub fn parse(&mut self) -> Result<Document> {
        let size = self.cursor.remaining().len();
        if self.config.max_size > 0 && size > self.config.max_size {
            return Err(Error::at(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                self.cursor.position(),
            ));
        }
        debug!(size, "parsing document");

        while let (Some(current), Some(next)) = (self.cursor.current(), self.cursor.peek_next()) {
            self.step(current, next)?;
            self.cursor.advance();
        }

        if self.config.strict {
            self.finish_strict()?;
        }

        let builder = std::mem::take(&mut self.builder);
        let document = Document::new(builder.finish());
        debug!(roots = document.roots.len(), "parsed document");
        Ok(document)
    }

    fn step(&mut self, current: char, next: char) -> Result<()> {
        match self.state {
            State::Declaration => {
                if current == '?' && next == '>' {
                    // the `>` of `?>` goes with the `?`
                    self.cursor.advance();
                    self.state = State::WaitForElementOpen;
                }
            }
            State::WaitForElementOpen => match current {
                '<' => self.state = State::ElementOpen,
                c if self.config.strict && !c.is_whitespace() => {
                    return Err(self.error_here(ErrorKind::TextOutsideElement { found: c }));
                }
                _ => {}
            },
            State::ElementOpen => match current {
                '/' => {
                    self.check_self_closing()?;
                    self.state = State::ElementClose;
                }
                '>' => self.state = State::GetInnerElementType,
                ' ' => self.state = State::WaitForAttribute,
                c => self.name.push(c),
            },
            State::WaitForAttribute => match current {
                ' ' => {}
                '>' => self.state = State::GetInnerElementType,
                '/' => {
                    self.check_self_closing()?;
                    self.state = State::ElementClose;
                }
                c => {
                    self.attribute_name.push(c);
                    self.state = State::ElementAttributeName;
                }
            },
            State::ElementAttributeName => match current {
                '=' | '"' => self.state = State::ElementAttributeValue,
                c => self.attribute_name.push(c),
            },
            State::ElementAttributeValue => match current {
                '=' | '"' => {}
                '/' if self.config.strict && next == '>' => {
                    return Err(self.error_here(ErrorKind::SelfClosingTag {
                        name: self.name.clone(),
                    }));
                }
                ' ' => {
                    self.finish_attribute();
                    self.state = State::WaitForAttribute;
                }
                '>' => {
                    self.finish_attribute();
                    self.state = State::GetInnerElementType;
                }
                c => self.attribute_value.push(c),
            },
            State::GetInnerElementType => match current {
                '<' => {
                    self.open_element(ElementKind::Complex)?;
                    self.state = State::ElementOpen;
                }
                c if c.is_alphanumeric() => {
                    self.open_element(ElementKind::Value)?;
                    self.value.push(c);
                    self.state = State::ElementValue;
                }
                _ => {}
            },
            State::ElementValue => match current {
                '<' => {
                    self.builder.set_value(std::mem::take(&mut self.value));
                    self.state = State::ElementClose;
                }
                c => self.value.push(c),
            },
            State::ElementClose => match current {
                '>' => {
                    self.close_element()?;
                    self.state = State::WaitForElementOpen;
                }
                '/' => {}
                c => self.close_name.push(c),
            },
        }
        Ok(())
    }

    fn finish_attribute(&mut self) {
        let key = std::mem::take(&mut self.attribute_name);
        let value = std::mem::take(&mut self.attribute_value);
        self.builder.push_attribute(Attribute::new(key, value));
    }

    fn open_element(&mut self, kind: ElementKind) -> Result<()> {
        if self.config.max_depth > 0 && self.builder.depth() >= usize::from(self.config.max_depth)
        {
            return Err(self.error_here(ErrorKind::MaxDepthExceeded {
                max: self.config.max_depth,
            }));
        }
        if self.config.strict && self.name.is_empty() {
            return Err(self.error_here(ErrorKind::EmptyName));
        }
        let name = std::mem::take(&mut self.name);
        self.builder.open(name, kind);
        Ok(())
    }

    fn close_element(&mut self) -> Result<()> {
        let found = std::mem::take(&mut self.close_name);
        if self.config.strict {
            let found = found.trim();
            match self.builder.top_name() {
                Some(expected) if expected != found => {
                    let kind = ErrorKind::MismatchedTag {
                        expected: expected.to_string(),
                        found: found.to_string(),
                    };
                    return Err(self.error_here(kind));
                }
                Some(_) => {}
                None => {
                    let kind = ErrorKind::UnexpectedClosingTag {
                        name: found.to_string(),
                    };
                    return Err(self.error_here(kind));
                }
            }
        }
        self.builder.close();
        self.builder.discard_attributes();
        self.name.clear();
        self.value.clear();
        Ok(())
    }

    fn check_self_closing(&self) -> Result<()> {
        if self.config.strict && !self.name.is_empty() {
            return Err(self.error_here(ErrorKind::SelfClosingTag {
                name: self.name.clone(),
            }));
        }
        Ok(())
    }

    /// Validate the end of input in strict mode
    ///
    /// The final character was never stepped; a `>` there completes the
    /// closing tag that is in progress.
    fn finish_strict(&mut self) -> Result<()> {
        let last = self.cursor.current();
        match self.state {
            State::Declaration => return Err(self.error_here(ErrorKind::MissingDeclaration)),
            State::ElementClose if last == Some('>') => {
                self.close_element()?;
                self.state = State::WaitForElementOpen;
            }
            State::WaitForElementOpen => match last {
                None => {}
                Some(c) if c.is_whitespace() => {}
                Some('<') => return Err(self.unclosed_error()),
                Some(c) => {
                    return Err(self.error_here(ErrorKind::TextOutsideElement { found: c }));
                }
            },
            _ => return Err(self.unclosed_error()),
        }

        if self.builder.depth() > 0 {
            return Err(self.unclosed_error());
        }
        if self.builder.is_empty() {
            return Err(self.error_here(ErrorKind::EmptyDocument));
        }
        Ok(())
    }

    fn unclosed_error(&self) -> Error {
        match self.builder.top_name() {
            Some(name) => self.error_here(ErrorKind::UnclosedElement {
                name: name.to_string(),
            }),
            None => self.error_here(ErrorKind::UnexpectedEof),
        }
    }

    fn error_here(&self, kind: ErrorKind) -> Error {
        let pos: Pos = self.cursor.position();
        Error::at(kind, pos)
    }
}
