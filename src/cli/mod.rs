//! CLI module for the sml driver
//!
//! Reads one source file, parses it as a named document, prints the tree, reduces it and prints the
//! result.
//!
//! ## Usage
//!
//! - `sml [FILE]` - parse, print, reduce and print again (default file: `example.sml`)
//! - `sml --lex FILE` - tokenize only
//! - `sml --parse FILE` - parse only
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `report` - Error rendering (miette or plain text)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod report;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source read when no file is given.
pub const DEFAULT_FILE: &str = "example.sml";
/// Document name used when the file name has no usable stem.
pub const DEFAULT_DOCUMENT_NAME: &str = "hello";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// How compile errors are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorFormat {
    /// Graphical report with the offending source line labelled.
    #[default]
    Fancy,
    /// `error --> file:line:col` with a caret under the position.
    Plain,
}

/// Parse and reduce sml shape documents
#[derive(Parser, Debug)]
#[command(name = "sml")]
#[command(version = VERSION)]
#[command(about = "Parse and reduce sml shape documents", long_about = None)]
pub struct Cli {
    /// Source file
    #[arg(value_name = "FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Document name used in diagnostics (default: the file stem)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", conflicts_with = "parse_only")]
    pub lex_only: bool,

    /// Parse only (debug)
    #[arg(long = "parse")]
    pub parse_only: bool,

    /// Run the scanner on its own thread
    #[arg(long)]
    pub threaded: bool,

    /// Error output style
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = ErrorFormat::Fancy)]
    pub error_format: ErrorFormat,
}

impl Cli {
    /// The document name: `--name`, else the file stem, else `hello`.
    pub fn document_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        document_name_for(&self.file)
    }
}

fn document_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_DOCUMENT_NAME.to_string())
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let name = cli.document_name();
    let settings = commands::Settings {
        threaded: cli.threaded,
        error_format: cli.error_format,
    };
    let file = cli.file.to_string_lossy();

    // Handle debug flags first
    if cli.lex_only {
        return commands::lex_file(&file, &name, &settings);
    }
    if cli.parse_only {
        return commands::parse_file(&file, &name, &settings);
    }
    commands::reduce_file(&file, &name, &settings)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["sml"]).unwrap();
        assert_eq!(cli.file, PathBuf::from(DEFAULT_FILE));
        assert_eq!(cli.document_name(), "example");
        assert!(!cli.lex_only && !cli.parse_only && !cli.threaded);
        assert_eq!(cli.error_format, ErrorFormat::Fancy);
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["sml", "--lex", "shapes.sml"]).unwrap();
        assert!(cli.lex_only);
        assert_eq!(cli.file, PathBuf::from("shapes.sml"));

        let cli = Cli::try_parse_from(["sml", "--parse", "--threaded", "shapes.sml"]).unwrap();
        assert!(cli.parse_only);
        assert!(cli.threaded);

        assert!(Cli::try_parse_from(["sml", "--lex", "--parse", "shapes.sml"]).is_err());
    }

    #[test]
    fn test_cli_name_and_error_format() {
        let cli = Cli::try_parse_from(["sml", "--name", "hello", "--error-format", "plain", "a.sml"]).unwrap();
        assert_eq!(cli.document_name(), "hello");
        assert_eq!(cli.error_format, ErrorFormat::Plain);

        assert!(Cli::try_parse_from(["sml", "--error-format", "json"]).is_err());
    }

    #[test]
    fn test_document_name_falls_back() {
        assert_eq!(document_name_for(Path::new("dir/shapes.sml")), "shapes");
        assert_eq!(document_name_for(Path::new("/")), DEFAULT_DOCUMENT_NAME);
    }
}
