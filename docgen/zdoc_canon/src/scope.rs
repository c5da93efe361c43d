//! Scope chains: `seg (:: seg)*`, optionally led or trailed by `::`.

use zdoc_ir::{Token, TokenKind};

pub(crate) struct Chain<'a> {
    segments: Vec<&'a str>,
    trailing_scope: bool,
    /// Index just past the chain.
    pub(crate) end: usize,
}

fn is_segment(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Identifier | TokenKind::EnumMarker)
}

/// A chain starts at a `::`, or at a segment directly followed by `::`.
pub(crate) fn starts_chain(tokens: &[Token], i: usize) -> bool {
    match tokens.get(i) {
        Some(t) if t.is(TokenKind::ScopeResolution) => true,
        Some(t) if is_segment(t) => tokens
            .get(i + 1)
            .is_some_and(|next| next.is(TokenKind::ScopeResolution)),
        _ => false,
    }
}

pub(crate) fn scan_chain(tokens: &[Token], start: usize) -> Chain<'_> {
    let mut i = start;
    if tokens.get(i).is_some_and(|t| t.is(TokenKind::ScopeResolution)) {
        i += 1;
    }
    let mut segments = Vec::new();
    let mut trailing_scope = false;
    loop {
        match tokens.get(i) {
            Some(t) if is_segment(t) => {
                segments.push(t.text.as_str());
                i += 1;
            }
            _ => {
                trailing_scope = true;
                break;
            }
        }
        match tokens.get(i) {
            Some(t) if t.is(TokenKind::ScopeResolution) => i += 1,
            _ => break,
        }
    }
    Chain {
        segments,
        trailing_scope,
        end: i,
    }
}

impl Chain<'_> {
    pub(crate) fn render(&self) -> String {
        let mut segments = self.segments.as_slice();
        if self.trailing_scope {
            segments = segments.split_last().map_or(segments, |(_, rest)| rest);
        }
        match segments.split_last() {
            Some((&"Enum", rest)) if !rest.is_empty() => rest.join("::"),
            Some((last, _)) => (*last).to_string(),
            None => String::new(),
        }
    }
}
