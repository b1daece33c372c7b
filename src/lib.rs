pub mod error;
pub mod logging;
pub mod scanner;

// Re-export error types for convenience
pub use error::ScanError;
pub use scanner::{DiagnosticSink, Scanned, scan, scan_with};
