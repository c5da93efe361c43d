//! Ordered token sequences.
//!
//! A `TokenSequence` is the representation of one type or expression. Order is
//! significant; element equality is text+kind, while [`TokenSequence::text_eq`]
//! compares text only (what signature matching uses).

use std::fmt;
use std::ops::{Index, Range};

use crate::{Token, TokenKind};

/// Ordered list of tokens owned by a single declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new() -> Self {
        TokenSequence { tokens: Vec::new() }
    }

    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenSequence { tokens }
    }

    /// Build a sequence from pre-split token texts.
    ///
    /// Each text is classified the way the tokenizer would classify it on its
    /// own, so `from_words(["const", "Real", "&"])` equals the tokenization of
    /// `"const Real &"`.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        words.into_iter().map(classify).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token> {
        self.tokens.get_mut(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn extend(&mut self, other: &TokenSequence) {
        self.tokens.extend(other.tokens.iter().cloned());
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Remove and return the first token.
    pub fn pop_front(&mut self) -> Option<Token> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.remove(0))
        }
    }

    /// Remove and return the last token.
    pub fn pop_back(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Copy of the tokens in `range`, clamped to the sequence bounds.
    pub fn sub_range(&self, range: Range<usize>) -> TokenSequence {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        TokenSequence::from_vec(self.tokens[start..end].to_vec())
    }

    /// Replace the token at `position` with the tokens of `replacement`.
    ///
    /// Returns the index just past the inserted region, which is where a
    /// left-to-right scan resumes. Out-of-range positions leave the sequence
    /// untouched and return `position`.
    pub fn splice_at(&mut self, position: usize, replacement: &TokenSequence) -> usize {
        if position >= self.tokens.len() {
            return position;
        }
        self.tokens
            .splice(position..=position, replacement.tokens.iter().cloned());
        position + replacement.len()
    }

    /// Remove the last token whose text equals `text`.
    ///
    /// Returns `true` if a token was removed.
    pub fn remove_last_with_text(&mut self, text: &str) -> bool {
        match self.tokens.iter().rposition(|t| t.text == text) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the sequence contains a token equal to `token`.
    pub fn contains_token(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    /// Returns `true` if any token has the given kind.
    pub fn contains_kind(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|t| t.kind == kind)
    }

    /// Returns `true` if any token has the given text.
    pub fn contains_text(&self, text: &str) -> bool {
        self.tokens.iter().any(|t| t.text == text)
    }

    /// Index of the first token of the given kind.
    pub fn position_of(&self, kind: TokenKind) -> Option<usize> {
        self.tokens.iter().position(|t| t.kind == kind)
    }

    /// Returns `true` if `self` occurs as a contiguous run inside `other`.
    ///
    /// The empty sequence is never considered contained.
    pub fn is_contained_in(&self, other: &TokenSequence) -> bool {
        if self.is_empty() || self.len() > other.len() {
            return false;
        }
        other
            .tokens
            .windows(self.len())
            .any(|window| window == self.tokens.as_slice())
    }

    /// Text-only elementwise equality.
    pub fn text_eq(&self, other: &TokenSequence) -> bool {
        self.len() == other.len()
            && self
                .tokens
                .iter()
                .zip(&other.tokens)
                .all(|(a, b)| a.text == b.text)
    }

    /// Token texts joined by single spaces.
    ///
    /// The tokenizer reads this form back to an equal sequence, so it is the
    /// serialized definition format of the typedef table.
    pub fn joined_text(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&token.text);
        }
        out
    }
}

fn classify(text: &str) -> Token {
    let kind = match text {
        "::" => TokenKind::ScopeResolution,
        "(" => TokenKind::OpenParen,
        ")" => TokenKind::CloseParen,
        "," => TokenKind::Comma,
        ";" => TokenKind::Semicolon,
        "#" => TokenKind::Pound,
        _ => match text.as_bytes().first() {
            Some(b'"' | b'\'') => TokenKind::StringLiteral,
            Some(b'0'..=b'9') => TokenKind::Number,
            Some(b) if b.is_ascii_alphabetic() || *b == b'_' => return Token::word(text),
            _ => TokenKind::Symbol,
        },
    };
    Token::new(text, kind)
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenSequence {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        TokenSequence { tokens }
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined_text())
    }
}
