//! Token types produced by `rpn_lexer`.

use std::fmt;

use crate::Operator;

/// What a token means to the parser.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TokenKind<'src> {
    /// A numeric literal.
    Number(f64),
    /// Any word that is not a number, operator, `?:` or function call.
    Variable(&'src str),
    /// One of `+ - * / ^`.
    Operator(Operator),
    /// The ternary marker `?:`.
    CondOp,
    /// A word ending in `()`; holds the name without the suffix.
    Function(&'src str),
}

/// A token together with the raw source text it was read from.
#[derive(Copy, Clone, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind<'src>, text: &'src str) -> Self {
        Token { kind, text }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.text)
    }
}
