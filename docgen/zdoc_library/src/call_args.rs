//! Call argument extraction from a tokenized source line.

use zdoc_ir::{TokenKind, TokenSequence};

/// The literal at 1-based argument `position` of the first call in `tokens`.
///
/// Arguments are delimited by commas at the call's own paren depth; the last
/// one ends at the call's closing paren. The argument counts only when the
/// token that ends it is directly preceded by a string literal, so
/// `Foo("a" + b, ..)` yields `None` for position 1. The returned text keeps
/// its quotes.
pub fn argument_if_string(tokens: &TokenSequence, position: usize) -> Option<&str> {
    let start = tokens.position_of(TokenKind::OpenParen)?;
    let mut depth = 0usize;
    let mut argument = 0;
    for (i, token) in tokens.iter().enumerate().skip(start) {
        let ends_argument = match token.kind {
            TokenKind::OpenParen => {
                depth += 1;
                false
            }
            TokenKind::CloseParen => {
                depth = depth.saturating_sub(1);
                depth == 0
            }
            TokenKind::Comma => depth == 1,
            _ => false,
        };
        if !ends_argument {
            continue;
        }
        argument += 1;
        if argument == position {
            return tokens
                .get(i - 1)
                .filter(|t| t.is(TokenKind::StringLiteral))
                .map(|t| t.text.as_str());
        }
        if depth == 0 {
            break;
        }
    }
    None
}
