//! Lexer for RPN expressions using logos.
//!
//! Two stages, mirroring a scan-then-cook design:
//!
//! ```text
//! source → RawToken::Word (logos) → cook() → Token
//! ```
//!
//! The raw scanner only knows about whitespace; every maximal run of
//! non-whitespace characters is a word. Cooking decides what a word means.
//! Tokenization never fails: a word that is nothing else is a variable.

mod cooker;

use logos::Logos;
use rpn_ir::Token;

pub use cooker::cook;

/// Raw token from logos (before classification).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
enum RawToken {
    #[regex(r"[^ \t\r\n\x0B\f]+")]
    Word,
}

/// Lazy token stream over an RPN source string.
pub struct Tokens<'src> {
    raw: logos::Lexer<'src, RawToken>,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        // The word pattern covers every non-whitespace character, so an
        // error slice is cooked like any other word.
        match self.raw.next()? {
            Ok(RawToken::Word) | Err(()) => Some(cook(self.raw.slice())),
        }
    }
}

/// Tokenize `source`. Tokens are produced on demand.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        raw: RawToken::lexer(source),
    }
}

#[cfg(test)]
mod tests;
