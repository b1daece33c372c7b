use lox_scan::scanner::token::{Literal, Token, TokenKind};
use lox_scan::{ScanError, scan};
use rstest::rstest;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

const PROGRAM_A: &str = "var greeting = \"hi\";\nprint greeting;";
const PROGRAM_B: &str = "fun add(a, b) {\n  return a + b; // sum\n}\nprint add(1, 2.5) >= 3;";

#[rstest]
#[case("")]
#[case("print 1;")]
#[case("@#$")]
#[case("\"open")]
#[case("// only a comment")]
#[case(PROGRAM_B)]
fn exactly_one_trailing_eof(#[case] source: &str) {
    let tokens = scan(source).tokens;
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eofs, 1);
    let eof = tokens.last().expect("eof token");
    assert_eq!(eof.lexeme, "");
    assert_eq!(eof.literal, None);
}

#[rstest]
#[case("   \t\r ")]
#[case("// comment")]
#[case("\n\n// a\n   // b\n")]
fn whitespace_and_comments_only(#[case] source: &str) {
    let scanned = scan(source);
    assert!(!scanned.has_errors());
    assert_eq!(kinds(&scanned.tokens), vec![TokenKind::Eof]);
    let newlines = source.matches('\n').count();
    assert_eq!(scanned.tokens[0].line, newlines + 1);
}

#[test]
fn concatenation_offsets_lines() {
    let first = scan(PROGRAM_A).tokens;
    let second = scan(PROGRAM_B).tokens;
    let joined = scan(&format!("{PROGRAM_A}\n{PROGRAM_B}")).tokens;

    let offset = PROGRAM_A.matches('\n').count() + 1;
    let mut expected: Vec<(TokenKind, String, Option<Literal>, usize)> = first
        [..first.len() - 1]
        .iter()
        .map(|t| (t.kind, t.lexeme.clone(), t.literal.clone(), t.line))
        .collect();
    expected.extend(
        second
            .iter()
            .map(|t| (t.kind, t.lexeme.clone(), t.literal.clone(), t.line + offset)),
    );

    let actual: Vec<(TokenKind, String, Option<Literal>, usize)> = joined
        .iter()
        .map(|t| (t.kind, t.lexeme.clone(), t.literal.clone(), t.line))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn realistic_program() {
    let scanned = scan(PROGRAM_B);
    assert!(!scanned.has_errors());
    assert_eq!(
        kinds(&scanned.tokens),
        vec![
            TokenKind::Fun,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Print,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    let lines: Vec<usize> = scanned.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines[..8], [1; 8]);
    assert_eq!(lines[8..13], [2; 5]);
    assert_eq!(lines[13], 3);
    assert!(lines[14..].iter().all(|&l| l == 4));
}

#[test]
fn lexeme_is_exact_source_slice() {
    let source = "var pi = 3.50; print \"pi\" != nil;";
    for token in scan(source).tokens {
        let slice = &source[token.span.offset..token.span.offset + token.span.len];
        assert_eq!(slice, token.lexeme, "{token}");
    }
}

#[test]
fn string_spanning_lines() {
    let scanned = scan("\"a\nb\"");
    assert_eq!(
        scanned.tokens[0].literal,
        Some(Literal::Str("a\nb".to_string()))
    );
    assert_eq!(scanned.tokens[1].kind, TokenKind::Eof);
    assert_eq!(scanned.tokens[1].line, 2);
}

#[test]
fn unterminated_string_yields_only_eof() {
    let scanned = scan("\"abc");
    assert_eq!(kinds(&scanned.tokens), vec![TokenKind::Eof]);
    assert_eq!(scanned.errors.len(), 1);
    assert!(matches!(
        scanned.errors[0],
        ScanError::UnterminatedString { line: 1, .. }
    ));
}

#[test]
fn unexpected_character_is_skipped() {
    let scanned = scan("@ 1");
    assert_eq!(kinds(&scanned.tokens), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(scanned.tokens[0].literal, Some(Literal::Number(1.0)));
    assert_eq!(scanned.errors.len(), 1);
    assert!(matches!(
        scanned.errors[0],
        ScanError::UnexpectedCharacter { character: '@', line: 1, .. }
    ));
}

#[rstest]
#[case("class", TokenKind::Class)]
#[case("Class", TokenKind::Identifier)]
#[case("classy", TokenKind::Identifier)]
#[case("nil", TokenKind::Nil)]
#[case("NIL", TokenKind::Identifier)]
#[case("_", TokenKind::Identifier)]
fn keyword_versus_identifier(#[case] source: &str, #[case] expected: TokenKind) {
    let tokens = scan(source).tokens;
    assert_eq!(kinds(&tokens), vec![expected, TokenKind::Eof]);
}
