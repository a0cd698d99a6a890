//! Quoted string scanning for the sml scanner.

use super::tokens::TokenKind;
use super::{Scanner, State};

impl Scanner<'_> {
    /// Scan a quoted string. The opening quote has already been consumed.
    ///
    /// Backslash escapes any char except a newline; a raw newline or end of input before the
    /// closing quote is an error.
    pub(super) fn lex_quote(&mut self) -> Option<State> {
        loop {
            match self.next_char() {
                Some('\\') => match self.next_char() {
                    None | Some('\n') => return self.errorf("unterminated quoted string".to_string()),
                    Some(_) => {}
                },
                None | Some('\n') => return self.errorf("unterminated quoted string".to_string()),
                Some('"') => break,
                Some(_) => {}
            }
        }
        self.emit(TokenKind::String);
        Some(State::Base)
    }
}
