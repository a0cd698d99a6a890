/// Options for a parse run.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Run the scanner on its own thread, handing tokens over one at a time.
    pub threaded: bool,
    /// Polled before every token pulled; cancel it to abandon the parse.
    pub cancel: CancelToken,
    /// Tree depth limit; `None` means [`MAX_NESTING_DEPTH`].
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threaded_scanner(mut self, threaded: bool) -> Self {
        self.threaded = threaded;
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Parse source text into a [`Tree`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `name`: document name; a diagnostic label only.
/// - `source`: the full source text.
///
/// ## Errors
/// Returns the first scan or syntax error, tagged with `name`.
pub fn parse(name: &str, source: &str) -> Result<Tree, CompileError> {
    parse_with_options(name, source, &ParseOptions::default())
}

/// Parse with explicit [`ParseOptions`].
#[tracing::instrument(skip_all, fields(document = name, source_len = source.len(), threaded = options.threaded))]
pub fn parse_with_options(name: &str, source: &str, options: &ParseOptions) -> Result<Tree, CompileError> {
    let max_depth = options.max_depth.unwrap_or(MAX_NESTING_DEPTH);
    let inline = || Parser::new(Scanner::new(name, source), options.cancel.clone()).with_max_depth(max_depth);
    let result = if options.threaded {
        match lexer::spawn(name, source) {
            Ok(stream) => Parser::new(stream, options.cancel.clone()).with_max_depth(max_depth).parse(),
            Err(e) => {
                tracing::warn!(error = %e, "cannot spawn scanner thread; scanning inline");
                inline().parse()
            }
        }
    } else {
        inline().parse()
    };

    let root = result.map_err(|e| {
        tracing::debug!(error = %e, "parse failed");
        e.in_document(name)
    })?;
    tracing::debug!(root = %root, "parsed");
    Ok(Tree::new(name, source, root))
}
