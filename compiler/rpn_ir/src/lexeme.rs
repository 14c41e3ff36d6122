//! Spellings shared by the renderers and the tokenizer.
//!
//! Whatever [`format_number`] prints, [`parse_number`] reads back as the same
//! value, non-finite values included, so constants survive a trip through
//! postfix text.

use crate::Operator;

/// The conditional marker.
pub const COND_OP: &str = "?:";

/// The suffix that marks a function application.
pub const CALL_SUFFIX: &str = "()";

const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";
const NAN: &str = "NaN";

/// Format a number the way every renderer in the workspace prints constants.
///
/// Uses the shortest representation that parses back to the same `f64`,
/// and always keeps a fractional part on integral values (`3.0`, not `3`).
/// Non-finite values print as `inf`, `-inf` and `NaN`.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

/// Read a numeric word: a decimal literal (scientific notation allowed) or
/// one of the exact non-finite spellings [`format_number`] emits.
///
/// Only words that look numeric are handed to `f64::from_str`, so names
/// like `infinity`, `nan` or `+inf` are not numbers.
pub fn parse_number(word: &str) -> Option<f64> {
    match word {
        INFINITY => return Some(f64::INFINITY),
        NEG_INFINITY => return Some(f64::NEG_INFINITY),
        NAN => return Some(f64::NAN),
        _ => {}
    }
    let unsigned = word.strip_prefix(['+', '-']).unwrap_or(word);
    let first = unsigned.bytes().next()?;
    if !(first.is_ascii_digit() || first == b'.') {
        return None;
    }
    word.parse().ok()
}

/// Characters that separate words in RPN source.
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Whether the tokenizer would read `word` back as a variable reference.
pub fn is_variable_word(word: &str) -> bool {
    !word.is_empty()
        && !word.contains(is_separator)
        && Operator::from_symbol(word).is_none()
        && word != COND_OP
        && parse_number(word).is_none()
        && !word.ends_with(CALL_SUFFIX)
}
