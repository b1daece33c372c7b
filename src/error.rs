use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::token::Span;

/// Lexical errors. Both are recoverable: the scanner reports them and keeps going.
#[derive(Error, Debug, Diagnostic)]
pub enum ScanError {
    #[error("unexpected character '{character}'")]
    #[diagnostic(code(lox::scan::unexpected_character))]
    UnexpectedCharacter {
        character: char,
        line: usize,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("unterminated string")]
    #[diagnostic(
        code(lox::scan::unterminated_string),
        help("close the string with '\"'")
    )]
    UnterminatedString {
        line: usize,
        #[label("string starts here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl ScanError {
    pub fn unexpected_character(character: char, line: usize, span: Span) -> Self {
        Self::UnexpectedCharacter {
            character,
            line,
            span: span.into(),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    pub fn unterminated_string(line: usize, span: Span) -> Self {
        Self::UnterminatedString {
            line,
            span: span.into(),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    /// Line the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        let src = miette::NamedSource::new(name.into(), source.into());
        match self {
            Self::UnexpectedCharacter {
                character,
                line,
                span,
                ..
            } => Self::UnexpectedCharacter {
                character,
                line,
                span,
                src,
            },
            Self::UnterminatedString { line, span, .. } => {
                Self::UnterminatedString { line, span, src }
            }
        }
    }
}
