//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;

use sml_syntax::ast::Tree;
use sml_syntax::diagnostics::CompileError;
use sml_syntax::documents::{DocumentError, Documents};
use sml_syntax::lexer::{self, Token};
use sml_syntax::parser::{self, ParseOptions};

use super::report;
use super::{CliError, CliResult, ErrorFormat, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Flags shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub threaded: bool,
    pub error_format: ErrorFormat,
}

impl Settings {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions::new().with_threaded_scanner(self.threaded)
    }
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

fn compile_failure(format: ErrorFormat, file_path: &str, source: &str, error: &CompileError) -> CliError {
    CliError::failure(report::render(format, file_path, source, error).trim_end())
}

/// One token per line: offset, kind and diagnostic rendering.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        let _ = writeln!(out, "{:>4}  {:<24} {}", tok.pos.offset(), format!("{:?}", tok.kind), tok);
    }
    out
}

/// Lex and display tokens.
#[tracing::instrument(skip(settings))]
pub fn lex_file(file_path: &str, name: &str, settings: &Settings) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(name, &source).map_err(|e| compile_failure(settings.error_format, file_path, &source, &e))?;
    print!("{}", render_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the tree.
#[tracing::instrument(skip(settings))]
pub fn parse_file(file_path: &str, name: &str, settings: &Settings) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tree = parser::parse_with_options(name, &source, &settings.parse_options())
        .map_err(|e| compile_failure(settings.error_format, file_path, &source, &e))?;
    println!("{}", tree.root);
    Ok(ExitCode::SUCCESS)
}

/// Parse, reduce and display both trees.
#[tracing::instrument(skip(settings))]
pub fn reduce_file(file_path: &str, name: &str, settings: &Settings) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let output = drive(name, &source, &settings.parse_options()).map_err(|e| match e {
        DocumentError::Compile(e) => compile_failure(settings.error_format, file_path, &source, &e),
        other => CliError::failure(other.to_string()),
    })?;
    print!("{output}");
    Ok(ExitCode::SUCCESS)
}

/// Register `source` as document `name`, then render its root, reduce it, and render the root again
/// followed by the reduced tree. The second line matching the first shows the root was not changed.
pub fn drive(name: &str, source: &str, options: &ParseOptions) -> Result<String, DocumentError> {
    let mut documents = Documents::with_options(options.clone());
    let tree: &Tree = documents.parse(name, source)?;

    let mut out = format!("{}\n", tree.root);
    let reduced = tree.reduce()?;
    let _ = writeln!(out, "{}", tree.root);
    let _ = writeln!(out, "{}", reduced.root);
    Ok(out)
}
