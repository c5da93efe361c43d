//! Canonical display strings for type tokens.
//!
//! ```text
//! [const] [Zero] [::] [Real3] [&]           ──► "const Real3&"
//! [Zero] [::] [Direction] [::] [Enum]       ──► "Zero::Direction"
//! ```
//!
//! Scope chains collapse to their last segment, except the `Ns::Enum` idiom,
//! which keeps the chain minus the marker. Qualifier words are followed by a
//! space; every other token is glued to its successor, except that two words
//! never touch (`Real3 const &` stays three tokens when read back).

use zdoc_ir::{Token, TokenSequence};

mod scope;

use scope::{scan_chain, starts_chain};

/// Render a normalized type for display.
pub fn canonicalize(tokens: &TokenSequence) -> String {
    let tokens = tokens.as_slice();
    let mut out = String::new();
    let mut i = 0;
    while i < tokens.len() {
        if starts_chain(tokens, i) {
            let chain = scan_chain(tokens, i);
            push_text(&chain.render(), &mut out);
            i = chain.end;
            continue;
        }
        push_token(&tokens[i], &mut out);
        i += 1;
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Tokenize and canonicalize raw type text.
pub fn canonicalize_text(text: &str) -> String {
    canonicalize(&zdoc_lexer::tokenize(text))
}

/// Display form of a `::`-qualified name such as a class or enum name.
///
/// `display_name("Zero::Direction::Enum")` is `"Zero::Direction"`;
/// `display_name("Zero::Cog")` is `"Cog"`.
pub fn display_name(name: &str) -> String {
    canonicalize_text(name)
}

fn push_token(token: &Token, out: &mut String) {
    push_text(&token.text, out);
    if token.kind.is_qualifier() {
        out.push(' ');
    }
}

fn push_text(text: &str, out: &mut String) {
    let touches_word = out.chars().next_back().is_some_and(is_word_char)
        && text.chars().next().is_some_and(is_word_char);
    if touches_word {
        out.push(' ');
    }
    out.push_str(text);
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests;
