/// Deepest tree the parser builds. Groups and each operator in a chain add one level.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and fail-fast: the first error (including a scan error surfaced
///   from the token stream) aborts the parse and no partial tree is returned.
/// - Tokens are pulled lazily from any token source, so the scanner may run inline
///   ([`Scanner`]) or on its own thread ([`lexer::TokenStream`]).
pub struct Parser<I> {
    tokens: I,
    /// One token of lookahead, never a `Space`.
    lookahead: Option<Token>,
    /// End offset of the last token pulled; where a missing `Eof` is placed.
    end: usize,
    cancel: CancelToken,
    /// Tree depth of the node under construction.
    depth: usize,
    max_depth: usize,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `sml_syntax::lexer`.
    /// - `cancel`: polled before every token pulled from the stream.
    pub fn new(tokens: I, cancel: CancelToken) -> Self {
        Self {
            tokens,
            lookahead: None,
            end: 0,
            cancel,
            depth: 0,
            max_depth: MAX_NESTING_DEPTH,
        }
    }

    /// Override [`MAX_NESTING_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a single top-level expression followed by end of input.
    ///
    /// ## Errors
    /// Returns the first [`CompileError`] met: a surfaced scan error, an unexpected token, an
    /// unclosed group, or trailing input after a complete expression.
    pub fn parse(mut self) -> Result<Node, CompileError> {
        let root = self.expression()?;

        let next = self.peek()?;
        if next.kind != TokenKind::Eof {
            return Err(CompileError::syntax(
                format!("unexpected {next} after expression"),
                next.pos,
            ));
        }
        Ok(root)
    }
}
