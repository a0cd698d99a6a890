/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing: pulling tokens from the
/// scanner (skipping `Space`, surfacing scan errors, honouring cancellation), peeking and consuming.
impl<I: Iterator<Item = Token>> Parser<I> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Pull the next significant token from the scanner.
    fn pull(&mut self) -> Result<Token, CompileError> {
        loop {
            self.cancel.check()?;
            let Some(token) = self.tokens.next() else {
                // The stream ends after `Eof`; keep answering `Eof` from then on.
                return Ok(Token::new(TokenKind::Eof, Pos(self.end), ""));
            };
            self.end = token.end();
            match token.kind {
                kind if kind.is_trivia() => continue,
                TokenKind::Error => return Err(CompileError::scan(token.text, token.pos)),
                _ => return Ok(token),
            }
        }
    }

    /// Return the current token without consuming it.
    fn peek(&mut self) -> Result<&Token, CompileError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        Ok(self.lookahead.insert(token))
    }

    fn peek_kind(&mut self) -> Result<TokenKind, CompileError> {
        Ok(self.peek()?.kind)
    }

    /// Consume and return the current token.
    fn advance(&mut self) -> Result<Token, CompileError> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.pull(),
        }
    }

    /// Go one tree level deeper, failing at `pos` past the depth limit.
    fn descend(&mut self, pos: Pos) -> Result<(), CompileError> {
        if self.depth >= self.max_depth {
            return Err(CompileError::syntax("expression nested too deeply", pos)
                .with_hint(format!("at most {} levels of groups and chained operators are allowed", self.max_depth)));
        }
        self.depth += 1;
        Ok(())
    }

    fn unexpected(token: &Token, context: &str) -> CompileError {
        CompileError::syntax(format!("unexpected {token} in {context}"), token.pos)
    }
}
