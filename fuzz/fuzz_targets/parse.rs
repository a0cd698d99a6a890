#![no_main]

use libfuzzer_sys::fuzz_target;
use sml::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the scanner on its own
        let _ = lexer::lex("fuzz", s);
        // Then the parser, and reduction when parsing succeeds
        if let Ok(tree) = parser::parse("fuzz", s) {
            let _ = tree.reduce();
        }
    }
});
