//! Diagnostics and error reporting for the sml front end.
//!
//! Every failure in scanning, parsing or reduction surfaces as a single [`CompileError`] carrying a
//! human-readable message and, where available, the byte position it refers to.

use std::fmt;

use thiserror::Error;

use crate::ast::Pos;

/// A front-end error with optional location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub pos: Option<Pos>,
    /// Name of the document the error was raised for, when known.
    pub document: Option<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, pos: Option<Pos>) -> Self {
        Self {
            kind,
            message: message.into(),
            pos,
            document: None,
            hints: Vec::new(),
        }
    }

    /// A scanner failure. `message` is the error token's text, kept verbatim.
    pub fn scan(message: impl Into<String>, pos: Pos) -> Self {
        Self::new(ErrorKind::Scan, message, Some(pos))
    }

    pub fn syntax(message: impl Into<String>, pos: Pos) -> Self {
        Self::new(ErrorKind::Syntax, message, Some(pos))
    }

    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, "operation cancelled", None)
    }

    pub fn in_document(mut self, name: impl Into<String>) -> Self {
        self.document = Some(name.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Scan,
    Syntax,
    Cancelled,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Scan => write!(f, "scan error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Resolve a byte offset to a 1-based line number, 1-based column and the text of that line.
///
/// Offsets past the end of `source` are clamped to it.
pub fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_num = 1 + source[..line_start].matches('\n').count();
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = source[line_start..line_end].trim_end_matches('\r');
    let col_num = source[line_start..offset].chars().count() + 1;

    (line_num, col_num, line_text)
}

/// Format an error with source context as plain text (no colour codes).
///
/// ```text
/// syntax error: unclosed left paren
///  --> hello:1:1
///   |
/// 1 | (1 - 2
///   | ^
/// ```
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let mut out = format!("{error}\n");

    let Some(pos) = error.pos else {
        out.push_str(&format!(" --> {file_name}\n"));
        return out;
    };

    let (line_num, col_num, line_text) = line_info(source, pos.offset());
    let width = line_num.to_string().len();

    out.push_str(&format!("{:>width$}--> {file_name}:{line_num}:{col_num}\n", ""));
    out.push_str(&format!("{:>width$} |\n", ""));
    out.push_str(&format!("{line_num} | {line_text}\n"));
    out.push_str(&format!("{:>width$} | {}^\n", "", " ".repeat(col_num - 1)));

    for hint in &error.hints {
        out.push_str(&format!("{:>width$} = hint: {hint}\n", ""));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_info_counts_lines_and_columns() {
        let source = "rect 1\n  - rect 2\n";
        assert_eq!(line_info(source, 0), (1, 1, "rect 1"));
        assert_eq!(line_info(source, 9), (2, 3, "  - rect 2"));
        assert_eq!(line_info(source, source.len()), (3, 1, ""));
    }

    #[test]
    fn line_info_clamps_out_of_range_offsets() {
        assert_eq!(line_info("ab", 99), (1, 3, "ab"));
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = CompileError::scan("unclosed comment", Pos(3));
        assert_eq!(err.to_string(), "scan error: unclosed comment");
        assert_eq!(CompileError::cancelled().to_string(), "cancelled: operation cancelled");
    }

    #[test]
    fn format_error_points_at_the_column() {
        let err = CompileError::syntax("unclosed left paren", Pos(2)).with_hint("close the group with `)`");
        let text = format_error("hello", "1 (2", &err);
        assert_eq!(
            text,
            "syntax error: unclosed left paren\n --> hello:1:3\n  |\n1 | 1 (2\n  |   ^\n  = hint: close the group with `)`\n"
        );
    }
}
