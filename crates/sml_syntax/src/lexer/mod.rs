//! Scanner for the sml shape language.
//!
//! Handles tokenization including:
//! - Keywords (`rect`) and identifiers, booleans (`true`/`false`)
//! - Numbers: signed, hex, float, exponent, imaginary, and `1+2i` complex pairs
//! - Set operators `-`, `&&`, `||` and the location marker `@`
//! - Parentheses (depth-checked), whitespace runs, `//` and `/* */` comments, quoted strings
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `numbers` - Numeric literal scanning
//! - `strings` - Quoted string scanning
//!
//! ## Token contract
//!
//! The stream ends with exactly one `Eof` token, or stops early after exactly one `Error` token whose
//! text is the message. Whitespace is emitted as `Space` tokens; the parser decides whether it
//! matters. Tokens come out in strictly increasing position order and, comments aside, their
//! literal texts concatenate back to the input.

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use std::collections::VecDeque;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use crate::ast::Pos;
use crate::diagnostics::CompileError;
use sml_core::lang::operators::{self, OperatorId};

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// State diagram (simplified):
//
// [Base] → "//" → [LineComment] → [Base]
//        → "/*" → [BlockComment] → [Base]     (unclosed: error)
//        → ws   → [Space] → [Base]
//        → +-0-9 → [Number] → [Base]          ("-" alone: diff operator)
//        → a-z_ → [Identifier] → [Base]
//        → '"'  → [Quote] → [Base]
//        → &&, ||, (, ), @ → emit → [Base]
//        → EOF  → emit Eof → stop
// ============================================================================

const LINE_COMMENT: &str = "//";
const LEFT_COMMENT: &str = "/*";
const RIGHT_COMMENT: &str = "*/";

/// The next step of the scanner's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Base,
    LineComment,
    BlockComment,
    Space,
    Identifier,
    Number,
    Quote,
}

/// Pull-based scanner for sml source code.
///
/// Tokens are produced lazily: each call to [`Iterator::next`] runs the state machine only until
/// the next token is emitted, so the parser never needs the whole token list.
pub struct Scanner<'a> {
    /// Name of the input; used only for diagnostics.
    name: &'a str,
    input: &'a str,
    state: Option<State>,
    /// Current position in the input.
    pos: usize,
    /// Start position of the token being scanned.
    start: usize,
    /// Width of the last char read, for `backup`.
    width: usize,
    /// Nesting depth of `( )`.
    paren_depth: usize,
    pending: VecDeque<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over `input`.
    pub fn new(name: &'a str, input: &'a str) -> Self {
        Self {
            name,
            input,
            state: Some(State::Base),
            pos: 0,
            start: 0,
            width: 0,
            paren_depth: 0,
            pending: VecDeque::new(),
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Consume and return the next char, or `None` at end of input.
    fn next_char(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Step back one char. Only valid once per call of `next_char`.
    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Consume the next char if it is in `valid`.
    fn accept(&mut self, valid: &str) -> bool {
        match self.next_char() {
            Some(c) if valid.contains(c) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consume a run of chars from `valid`; report whether any were consumed.
    fn accept_run(&mut self, valid: &str) -> bool {
        let before = self.pos;
        while self.accept(valid) {}
        self.pos > before
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Text of the token scanned so far.
    fn pending_text(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    fn emit(&mut self, kind: TokenKind) {
        let token = Token::new(kind, Pos(self.start), self.pending_text());
        tracing::trace!(document = self.name, token = ?token, "emit");
        self.pending.push_back(token);
        self.start = self.pos;
    }

    /// Skip over the pending input before this point.
    fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Emit an error token and stop the state machine.
    fn errorf(&mut self, message: String) -> Option<State> {
        tracing::debug!(document = self.name, pos = self.start, %message, "scan error");
        self.pending.push_back(Token::new(TokenKind::Error, Pos(self.start), message));
        None
    }

    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Base => self.lex_base(),
            State::LineComment => self.lex_line_comment(),
            State::BlockComment => self.lex_block_comment(),
            State::Space => self.lex_space(),
            State::Identifier => self.lex_identifier(),
            State::Number => self.lex_number(),
            State::Quote => self.lex_quote(),
        }
    }

    // ========================================================================
    // States
    // ========================================================================

    fn lex_base(&mut self) -> Option<State> {
        let rest = self.rest();
        if rest.starts_with(LINE_COMMENT) {
            return Some(State::LineComment);
        }
        if rest.starts_with(LEFT_COMMENT) {
            return Some(State::BlockComment);
        }
        for id in [OperatorId::Intersection, OperatorId::Union] {
            let spelling = operators::as_str(id);
            if rest.starts_with(spelling) {
                self.pos += spelling.len();
                self.emit(TokenKind::Operator(id));
                return Some(State::Base);
            }
        }

        match self.next_char() {
            None => {
                self.emit(TokenKind::Eof);
                None
            }
            Some(c) if is_space(c) => Some(State::Space),
            Some('+' | '-' | '0'..='9') => {
                self.backup();
                Some(State::Number)
            }
            Some(c) if is_alphanumeric(c) => {
                self.backup();
                Some(State::Identifier)
            }
            Some('"') => Some(State::Quote),
            Some('(') => {
                self.paren_depth += 1;
                self.emit(TokenKind::LeftParen);
                Some(State::Base)
            }
            Some(')') => {
                if self.paren_depth == 0 {
                    return self.errorf(format!("unexpected right paren {}", describe(')')));
                }
                self.paren_depth -= 1;
                self.emit(TokenKind::RightParen);
                Some(State::Base)
            }
            Some('@') => {
                self.emit(TokenKind::Operator(OperatorId::Location));
                Some(State::Base)
            }
            Some(c) => self.errorf(format!("unrecognized character in action: {}", describe(c))),
        }
    }

    /// Skip a `//` comment up to (not including) the end of the line.
    fn lex_line_comment(&mut self) -> Option<State> {
        self.pos += LINE_COMMENT.len();
        match self.rest().find('\n') {
            Some(i) => self.pos += i,
            None => self.pos = self.input.len(),
        }
        self.ignore();
        Some(State::Base)
    }

    /// Skip a `/* */` comment. The left marker is known to be present.
    fn lex_block_comment(&mut self) -> Option<State> {
        self.pos += LEFT_COMMENT.len();
        let Some(i) = self.rest().find(RIGHT_COMMENT) else {
            return self.errorf("unclosed comment".to_string());
        };
        self.pos += i + RIGHT_COMMENT.len();
        self.ignore();
        Some(State::Base)
    }

    /// Scan a run of space characters. One has already been seen.
    fn lex_space(&mut self) -> Option<State> {
        while self.peek().is_some_and(is_space) {
            self.next_char();
        }
        self.emit(TokenKind::Space);
        Some(State::Base)
    }

    /// Scan an alphanumeric word: keyword, boolean or identifier.
    fn lex_identifier(&mut self) -> Option<State> {
        while self.peek().is_some_and(is_alphanumeric) {
            self.next_char();
        }
        if !self.at_terminator() {
            // `at_terminator` accepts end of input, so there is a char here.
            let c = self.peek().unwrap_or_default();
            return self.errorf(format!("bad character {}", describe(c)));
        }

        let word = self.pending_text();
        let kind = if let Some(id) = keyword_id(word) {
            TokenKind::Keyword(id)
        } else if word == "true" || word == "false" {
            TokenKind::Bool
        } else {
            TokenKind::Ident
        };
        self.emit(kind);
        Some(State::Base)
    }

    /// Report whether the next char may follow an identifier.
    fn at_terminator(&self) -> bool {
        match self.peek() {
            None => true,
            Some(c) if is_space(c) => true,
            Some('.' | ',' | '|' | ':' | ')' | '(') => true,
            Some(_) => false,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            let state = self.state.take()?;
            self.state = self.step(state);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a char is a space character (end-of-line included).
fn is_space(c: char) -> bool {
    c == ' ' || c == '\t' || is_end_of_line(c)
}

fn is_end_of_line(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Check if a char is alphabetic, a digit, or underscore.
fn is_alphanumeric(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Render a char as `U+0029 ')'` for diagnostics.
fn describe(c: char) -> String {
    format!("U+{:04X} {c:?}", c as u32)
}

/// Convenience function to scan a whole source string.
///
/// Returns every token up to and including `Eof`, or the scan error that stopped the scanner.
#[tracing::instrument(skip_all, fields(document = name, source_len = source.len()))]
pub fn lex(name: &str, source: &str) -> Result<Vec<Token>, CompileError> {
    let tokens: Vec<Token> = Scanner::new(name, source).collect();
    match tokens.last() {
        Some(last) if last.kind == TokenKind::Error => {
            Err(CompileError::scan(last.text.clone(), last.pos).in_document(name))
        }
        _ => Ok(tokens),
    }
}

// ============================================================================
// Threaded scanning
// ============================================================================

/// Tokens produced by a scanner running on its own thread.
///
/// The hand-off channel is a rendezvous: the scanner blocks after each token until the consumer
/// takes it, and the consumer blocks until the next token exists. Dropping the stream early
/// unblocks and stops the scanner thread.
pub struct TokenStream {
    rx: Option<Receiver<Token>>,
    handle: Option<JoinHandle<()>>,
}

/// Start scanning `source` on a dedicated thread.
///
/// ## Errors
/// Returns the OS error if the thread cannot be spawned.
pub fn spawn(name: impl Into<String>, source: impl Into<String>) -> io::Result<TokenStream> {
    let name = name.into();
    let source = source.into();
    let (tx, rx) = mpsc::sync_channel(0);

    let handle = thread::Builder::new().name("sml-scanner".to_string()).spawn(move || {
        for token in Scanner::new(&name, &source) {
            if tx.send(token).is_err() {
                tracing::trace!(document = %name, "consumer hung up; scanner stopping");
                break;
            }
        }
    })?;

    Ok(TokenStream {
        rx: Some(rx),
        handle: Some(handle),
    })
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.rx.as_ref()?.recv().ok()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        // Hang up first so a scanner blocked in `send` can exit before we join it.
        self.rx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("scanner thread panicked");
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
