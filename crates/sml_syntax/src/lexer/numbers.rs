//! Number scanning for the sml scanner.
//!
//! Handles decimal, hex, float, exponent and imaginary literals, plus `<num>+<num>i` complex pairs.
//! This is deliberately permissive (it accepts `089` or `0x1.2`); when the text is wrong, literal
//! classification in the parser rejects it.

use super::tokens::TokenKind;
use super::{Scanner, State};
use sml_core::lang::operators::OperatorId;

const DECIMAL_DIGITS: &str = "0123456789";
const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

impl Scanner<'_> {
    pub(super) fn lex_number(&mut self) -> Option<State> {
        // A `-` that does not begin a numeral is the difference operator.
        if self.peek() == Some('-') && !self.sign_starts_numeral() {
            self.next_char();
            self.emit(TokenKind::Operator(OperatorId::Diff));
            return Some(State::Base);
        }

        if !self.scan_number() {
            return self.errorf(format!("bad number syntax: {:?}", self.pending_text()));
        }
        if let Some('+' | '-') = self.peek() {
            // Complex: 1+2i. No spaces, must end in 'i'.
            if !self.scan_number() || !self.pending_text().ends_with('i') {
                return self.errorf(format!("bad number syntax: {:?}", self.pending_text()));
            }
            self.emit(TokenKind::Complex);
        } else {
            self.emit(TokenKind::Number);
        }
        Some(State::Base)
    }

    /// Report whether the sign at the current position is followed by a digit or `.`.
    fn sign_starts_numeral(&self) -> bool {
        let mut chars = self.rest().chars();
        chars.next();
        matches!(chars.next(), Some('0'..='9' | '.'))
    }

    /// Scan one (possibly signed) numeral. Returns `false` if it is malformed.
    fn scan_number(&mut self) -> bool {
        self.accept("+-");

        let mut digits = DECIMAL_DIGITS;
        let mut seen_digit = false;
        if self.accept("0") {
            seen_digit = true;
            if self.accept("xX") {
                digits = HEX_DIGITS;
            }
        }
        seen_digit |= self.accept_run(digits);
        if self.accept(".") {
            seen_digit |= self.accept_run(digits);
        }
        if self.accept("eE") {
            self.accept("+-");
            self.accept_run(DECIMAL_DIGITS);
        }
        // Imaginary?
        self.accept("i");

        // Next thing mustn't be alphanumeric.
        if self.peek().is_some_and(super::is_alphanumeric) {
            self.next_char();
            return false;
        }
        seen_digit
    }
}
