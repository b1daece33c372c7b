pub mod cursor;
pub mod lexer;
pub mod token;

use crate::error::ScanError;
use lexer::Scanner;
use token::Token;

/// Receives lexical errors as the scanner finds them.
///
/// Each `ScanError` carries its line and message. Reporting never affects
/// the token sequence.
pub trait DiagnosticSink {
    fn report(&mut self, error: ScanError);
}

impl DiagnosticSink for Vec<ScanError> {
    fn report(&mut self, error: ScanError) {
        self.push(error);
    }
}

/// Tokens plus every lexical error found while producing them.
#[derive(Debug)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl Scanned {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan source code into a list of tokens, collecting lexical errors.
pub fn scan(source: &str) -> Scanned {
    let mut errors = Vec::new();
    let tokens = scan_with(source, &mut errors);
    Scanned { tokens, errors }
}

/// Scan source code, sending lexical errors to `sink`.
pub fn scan_with<D: DiagnosticSink + ?Sized>(source: &str, sink: &mut D) -> Vec<Token> {
    Scanner::new(source, sink).scan_tokens()
}
