//! Error rendering for the CLI.
//!
//! `Fancy` output goes through miette's graphical handler; `Plain` output reuses
//! [`sml_syntax::diagnostics::format_error`].

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;

use sml_syntax::diagnostics::{self, CompileError};

use super::ErrorFormat;

/// A [`CompileError`] attached to the document it was raised for.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}: {message}")]
pub struct SourceDiagnostic {
    kind: String,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: Option<SourceSpan>,
    #[help]
    help: Option<String>,
}

impl SourceDiagnostic {
    pub fn new(file_name: &str, source: &str, error: &CompileError) -> Self {
        let span = error.pos.map(|pos| {
            let offset = pos.offset().min(source.len());
            // Cover one char; zero width at end of input.
            let len = source
                .get(offset..)
                .and_then(|rest| rest.chars().next())
                .map_or(0, char::len_utf8);
            SourceSpan::from((offset, len))
        });
        let help = (!error.hints.is_empty()).then(|| error.hints.join("\n"));
        Self {
            kind: error.kind.to_string(),
            message: error.message.clone(),
            src: NamedSource::new(file_name, source.to_string()),
            span,
            help,
        }
    }
}

/// Render `error` for the terminal.
pub fn render(format: ErrorFormat, file_name: &str, source: &str, error: &CompileError) -> String {
    match format {
        ErrorFormat::Plain => diagnostics::format_error(file_name, source, error),
        ErrorFormat::Fancy => render_fancy(file_name, source, error),
    }
}

fn render_fancy(file_name: &str, source: &str, error: &CompileError) -> String {
    let diagnostic = SourceDiagnostic::new(file_name, source, error);
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    if handler.render_report(&mut out, &diagnostic).is_err() {
        tracing::debug!("graphical report failed; falling back to plain output");
        return diagnostics::format_error(file_name, source, error);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sml_syntax::ast::Pos;

    #[test]
    fn fancy_report_names_file_and_message() {
        let err = CompileError::syntax("unclosed left paren: expected right paren, found EOF", Pos(0))
            .with_hint("add `)` to close the group opened here");
        let out = render(ErrorFormat::Fancy, "hello.sml", "(1 - 2", &err);
        assert!(out.contains("syntax error: unclosed left paren"), "{out}");
        assert!(out.contains("hello.sml"), "{out}");
        assert!(out.contains("add `)` to close the group"), "{out}");
    }

    #[test]
    fn span_stays_inside_source() {
        let err = CompileError::scan("bad number syntax: \"+\"", Pos(2));
        let diag = SourceDiagnostic::new("x", "1 +", &err);
        assert_eq!(diag.span, Some(SourceSpan::from((2, 1))));

        let err = CompileError::syntax("unexpected EOF in operand", Pos(3));
        let diag = SourceDiagnostic::new("x", "1 -", &err);
        assert_eq!(diag.span, Some(SourceSpan::from((3, 0))));

        let diag = SourceDiagnostic::new("x", "1", &CompileError::cancelled());
        assert_eq!(diag.span, None);
    }

    #[test]
    fn plain_report_has_caret() {
        let err = CompileError::scan("bad number syntax: \"+\"", Pos(2));
        let out = render(ErrorFormat::Plain, "hello.sml", "1 +", &err);
        assert!(out.starts_with("scan error: bad number syntax"), "{out}");
        assert!(out.contains("hello.sml:1:3"), "{out}");
        assert!(out.contains('^'), "{out}");
    }
}
