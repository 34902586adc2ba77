//! Attribute selectors for widget queries.
//!
//! Supports:
//! - `"[data-testid='login']"` - by test ID
//! - `"[aria-label='Power']"` - by accessible name
//! - `"[role='switch']"` - by accessible role

use neumorph_core::Widget;
use thiserror::Error;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by test ID
    TestId(String),
    /// Match by accessible name
    Label(String),
    /// Match by accessible role name
    Role(String),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Label(name) => widget.accessible_name() == Some(name.as_str()),
            Self::Role(role) => widget.accessible_role().as_str() == role,
        }
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a single `[name='value']` term.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        let first = self.peek_char().ok_or(SelectorError::Empty)?;
        if first != '[' {
            return Err(SelectorError::UnexpectedChar(first));
        }
        let selector = self.parse_attribute()?;

        self.skip_whitespace();
        match self.peek_char() {
            None => Ok(selector),
            Some(c) => Err(SelectorError::UnexpectedChar(c)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '['

        let name = self.read_until_any(&['=', ']']);
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }
        self.advance(); // Skip '='

        let quote = self.peek_char();
        if quote == Some('\'') || quote == Some('"') {
            self.advance();
        }

        let value = self.read_until_any(&['\'', '"', ']']);

        if self.peek_char() == Some('\'') || self.peek_char() == Some('"') {
            self.advance();
        }

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        match name.as_str() {
            "data-testid" => Ok(Selector::TestId(value)),
            "aria-label" => Ok(Selector::Label(value)),
            "role" => Ok(Selector::Role(value)),
            _ => Err(SelectorError::UnknownAttribute(name)),
        }
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].trim().to_string()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Invalid attribute syntax
    #[error("invalid attribute syntax")]
    InvalidAttribute,
    /// Unclosed attribute bracket
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
    /// Attribute the selector cannot match on
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}
