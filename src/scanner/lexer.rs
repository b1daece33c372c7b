use tracing::{debug, trace};

use crate::error::ScanError;
use crate::scanner::DiagnosticSink;
use crate::scanner::cursor::Cursor;
use crate::scanner::token::{Literal, Token, TokenKind, keyword_kind};

/// What a lexeme's first character commits the scanner to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Punctuation(TokenKind),
    /// `!`, `=`, `<` or `>`, optionally followed by `=`.
    Operator {
        single: TokenKind,
        with_equal: TokenKind,
    },
    Slash,
    Whitespace,
    Newline,
    Quote,
    Digit,
    Alpha,
    Other,
}

fn classify(c: char) -> CharClass {
    match c {
        '(' => CharClass::Punctuation(TokenKind::LeftParen),
        ')' => CharClass::Punctuation(TokenKind::RightParen),
        '{' => CharClass::Punctuation(TokenKind::LeftBrace),
        '}' => CharClass::Punctuation(TokenKind::RightBrace),
        ',' => CharClass::Punctuation(TokenKind::Comma),
        '.' => CharClass::Punctuation(TokenKind::Dot),
        '-' => CharClass::Punctuation(TokenKind::Minus),
        '+' => CharClass::Punctuation(TokenKind::Plus),
        ';' => CharClass::Punctuation(TokenKind::Semicolon),
        '*' => CharClass::Punctuation(TokenKind::Star),
        '!' => CharClass::Operator {
            single: TokenKind::Bang,
            with_equal: TokenKind::BangEqual,
        },
        '=' => CharClass::Operator {
            single: TokenKind::Equal,
            with_equal: TokenKind::EqualEqual,
        },
        '<' => CharClass::Operator {
            single: TokenKind::Less,
            with_equal: TokenKind::LessEqual,
        },
        '>' => CharClass::Operator {
            single: TokenKind::Greater,
            with_equal: TokenKind::GreaterEqual,
        },
        '/' => CharClass::Slash,
        ' ' | '\r' | '\t' => CharClass::Whitespace,
        '\n' => CharClass::Newline,
        '"' => CharClass::Quote,
        c if is_digit(c) => CharClass::Digit,
        c if is_alpha(c) => CharClass::Alpha,
        _ => CharClass::Other,
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Single-pass scanner over one source buffer.
///
/// Lexical errors go to the sink and never stop the scan, so one pass can
/// surface several of them. The token list always ends with exactly one EOF.
pub struct Scanner<'a, 's, D: DiagnosticSink + ?Sized> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    lexeme_line: usize,
    sink: &'s mut D,
}

impl<'a, 's, D: DiagnosticSink + ?Sized> Scanner<'a, 's, D> {
    pub fn new(source: &'a str, sink: &'s mut D) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            lexeme_line: 1,
            sink,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut errors = 0usize;
        while !self.cursor.is_at_end() {
            self.cursor.begin_lexeme();
            self.lexeme_line = self.cursor.line();
            if let Err(error) = self.scan_token() {
                errors += 1;
                debug!(target: "lox::scanner", line = error.line(), "{error}");
                self.sink.report(error);
            }
        }

        let eof = Token::eof(self.cursor.line(), self.cursor.current());
        self.tokens.push(eof);
        debug!(
            target: "lox::scanner",
            tokens = self.tokens.len(),
            errors,
            lines = self.cursor.line(),
            "scan finished"
        );
        self.tokens
    }

    fn scan_token(&mut self) -> Result<(), ScanError> {
        let Some(c) = self.cursor.advance() else {
            return Ok(());
        };
        match classify(c) {
            CharClass::Punctuation(kind) => self.add_token(kind, None),
            CharClass::Operator { single, with_equal } => {
                let kind = if self.cursor.match_char('=') {
                    with_equal
                } else {
                    single
                };
                self.add_token(kind, None);
            }
            CharClass::Slash => {
                if self.cursor.match_char('/') {
                    self.cursor.eat_while(|c| c != '\n');
                } else {
                    self.add_token(TokenKind::Slash, None);
                }
            }
            CharClass::Whitespace => {}
            CharClass::Newline => self.cursor.newline(),
            CharClass::Quote => self.string()?,
            CharClass::Digit => self.number(),
            CharClass::Alpha => self.identifier(),
            CharClass::Other => {
                return Err(ScanError::unexpected_character(
                    c,
                    self.cursor.line(),
                    self.cursor.span(),
                ));
            }
        }
        Ok(())
    }

    fn string(&mut self) -> Result<(), ScanError> {
        let body = self.cursor.eat_while(|c| c != '"');
        for _ in body.matches('\n') {
            self.cursor.newline();
        }

        if !self.cursor.match_char('"') {
            return Err(ScanError::unterminated_string(
                self.cursor.line(),
                self.cursor.span(),
            ));
        }

        self.add_token(TokenKind::String, Some(Literal::Str(body.to_string())));
        Ok(())
    }

    fn number(&mut self) {
        self.cursor.eat_while(is_digit);

        // A '.' only belongs to the number when a digit follows it.
        if self.cursor.peek() == Some('.') && self.cursor.peek_next().is_some_and(is_digit) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        let value: f64 = self
            .cursor
            .lexeme()
            .parse()
            .expect("digit run with optional fraction");
        self.add_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        self.cursor.eat_while(is_alphanumeric);
        let kind = keyword_kind(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(
            kind,
            self.cursor.lexeme(),
            literal,
            self.lexeme_line,
            self.cursor.span(),
        );
        trace!(target: "lox::scanner", %token, line = token.line, "token");
        self.tokens.push(token);
    }
}
