//! Classification of raw words into typed tokens.
//!
//! Order matters: operators and `?:` are exact matches, numbers are tried
//! before the `()` suffix, and whatever is left is a variable name.

use rpn_ir::{parse_number, Operator, Token, TokenKind, CALL_SUFFIX, COND_OP};

/// Turn one whitespace-free word into a token.
pub fn cook(word: &str) -> Token<'_> {
    Token::new(classify(word), word)
}

fn classify(word: &str) -> TokenKind<'_> {
    if let Some(op) = Operator::from_symbol(word) {
        return TokenKind::Operator(op);
    }
    if word == COND_OP {
        return TokenKind::CondOp;
    }
    if let Some(value) = parse_number(word) {
        return TokenKind::Number(value);
    }
    if let Some(name) = word.strip_suffix(CALL_SUFFIX) {
        return TokenKind::Function(name);
    }
    TokenKind::Variable(word)
}

#[cfg(test)]
mod tests;
