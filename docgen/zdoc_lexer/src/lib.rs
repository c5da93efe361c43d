//! Tokenizer for type strings, parameter lists and single source lines.
//!
//! One forward pass, no backtracking, O(n) in the input length. Whitespace
//! and comments are dropped. The tokenizer never fails: text no rule accepts
//! (an unterminated literal, a stray control character) becomes a
//! [`TokenKind::Symbol`] token carrying that text, and scanning continues.
//!
//! ```text
//! "const Zero::Real3Param& v"
//!   ──► [const] [Zero] [::] [Real3Param] [&] [v]
//! ```

use logos::Logos;
use zdoc_ir::{Token, TokenKind, TokenSequence};

mod raw_token;

use raw_token::RawToken;

/// Tokenize a fragment into a new sequence.
pub fn tokenize(text: &str) -> TokenSequence {
    let mut tokens = TokenSequence::new();
    append_tokens(text, &mut tokens);
    tokens
}

/// Tokenize a fragment, appending to an existing sequence.
pub fn append_tokens(text: &str, out: &mut TokenSequence) {
    let mut lexer = RawToken::lexer(text);
    while let Some(raw) = lexer.next() {
        let slice = lexer.slice();
        let token = match raw {
            Ok(RawToken::Word) => Token::word(slice),
            Ok(RawToken::Number) => Token::new(slice, TokenKind::Number),
            Ok(RawToken::Literal) => Token::new(slice, TokenKind::StringLiteral),
            Ok(RawToken::Scope) => Token::scope(),
            Ok(RawToken::OpenParen) => Token::new(slice, TokenKind::OpenParen),
            Ok(RawToken::CloseParen) => Token::new(slice, TokenKind::CloseParen),
            Ok(RawToken::Comma) => Token::new(slice, TokenKind::Comma),
            Ok(RawToken::Semicolon) => Token::new(slice, TokenKind::Semicolon),
            Ok(RawToken::Pound) => Token::new(slice, TokenKind::Pound),
            Ok(RawToken::Punct) => Token::new(slice, TokenKind::Symbol),
            Err(()) => {
                let text = slice.trim();
                if text.is_empty() {
                    continue;
                }
                tracing::trace!(text, span = ?lexer.span(), "unrecognized input");
                Token::new(text, TokenKind::Symbol)
            }
        };
        out.push(token);
    }
}

#[cfg(test)]
mod tests;
