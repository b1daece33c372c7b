use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;

use lox_scan::scanner::{self, DiagnosticSink, token::Token};
use lox_scan::{ScanError, logging};

/// Exit status for malformed input data.
const EXIT_DATA_ERROR: u8 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `KIND lexeme literal` line per token
    Text,
    /// The token array as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "lox-scan", about = "Scan Lox source into tokens")]
struct Cli {
    /// Lox source file to scan (omit or `-` for stdin)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

impl Cli {
    fn source_name(&self) -> String {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }
}

fn read_source(cli: &Cli) -> Result<String> {
    match &cli.file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("read source file '{}'", path.display())),
        _ => io::read_to_string(io::stdin()).context("read source from stdin"),
    }
}

fn print_tokens(tokens: &[Token], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for token in tokens {
                println!("{token}");
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(tokens).context("serialize tokens to JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Renders each lexical error to stderr through miette, with the source attached.
struct MietteSink<'a> {
    name: String,
    source: &'a str,
    reported: usize,
}

impl<'a> MietteSink<'a> {
    fn new(name: String, source: &'a str) -> Self {
        Self {
            name,
            source,
            reported: 0,
        }
    }
}

impl DiagnosticSink for MietteSink<'_> {
    fn report(&mut self, error: ScanError) {
        self.reported += 1;
        let report = miette::Report::new(error.with_source_code(self.name.as_str(), self.source));
        eprintln!("{report:?}");
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let source = read_source(&cli)?;
    let mut sink = MietteSink::new(cli.source_name(), &source);
    let tokens = scanner::scan_with(&source, &mut sink);
    print_tokens(&tokens, cli.format)?;

    if sink.reported > 0 {
        eprintln!("{} error(s)", sink.reported);
        return Ok(ExitCode::from(EXIT_DATA_ERROR));
    }
    Ok(ExitCode::SUCCESS)
}
