use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use winnow::token::{any, take_while};

use crate::scanner::token::Span;

type Input<'a> = LocatingSlice<&'a str>;

/// Scan position over an immutable source buffer.
///
/// `start` marks the first byte of the lexeme being recognized, the stream's
/// location is `current`, and `line` counts newlines consumed so far.
/// `start <= current <= source.len()` holds throughout and `line` only grows.
#[derive(Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    input: Input<'a>,
    start: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            input: LocatingSlice::new(source),
            start: 0,
            line: 1,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.input.is_empty()
    }

    pub fn current(&self) -> usize {
        self.input.current_token_start()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn newline(&mut self) {
        self.line += 1;
    }

    /// Start a new lexeme at the current position.
    pub fn begin_lexeme(&mut self) {
        self.start = self.current();
    }

    /// Consume one character. `None` only at end of input.
    pub fn advance(&mut self) -> Option<char> {
        any::<_, ContextError>.parse_next(&mut self.input).ok()
    }

    pub fn peek(&self) -> Option<char> {
        self.input.chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.input.chars().nth(1)
    }

    /// Consume the next character only if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the maximal run of characters satisfying `pred`.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        take_while::<_, _, ContextError>(0.., pred)
            .parse_next(&mut self.input)
            .unwrap_or_default()
    }

    /// Source text of the current lexeme, `[start, current)`.
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current()]
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.current() - self.start)
    }
}
