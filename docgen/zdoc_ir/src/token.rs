//! Tokens of a type or declaration fragment.

use std::fmt;

/// Token kind.
///
/// The declaration order is significant: kinds form a strict total order and
/// the canonicalizer separates a token from its successor only when its kind
/// sorts beyond [`TokenKind::QualifiersBoundary`]. Everything structural is
/// declared before the boundary, the qualifier words after it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum TokenKind {
    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a reserved word.
    Identifier,
    /// The identifier `Enum`, used by the engine's `Namespace::Enum` idiom.
    EnumMarker,
    /// The literal `void`.
    Void,
    /// Numeric literal (e.g. an array extent).
    Number,
    /// `::`
    ScopeResolution,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `#`
    Pound,
    /// Quoted literal, quotes included in the text.
    StringLiteral,
    /// Any other punctuation, including unrecognized input.
    Symbol,

    /// Boundary marker. Never produced by the tokenizer.
    QualifiersBoundary,

    Const,
    Static,
    Volatile,
    Mutable,
    Unsigned,
    Signed,
    Long,
    Short,
    Inline,
    Virtual,
    Explicit,
    Extern,
    Friend,
    Typename,
    Typedef,
    Struct,
    Class,
    Enum,
}

impl TokenKind {
    /// Returns `true` for the qualifier family.
    #[inline]
    pub fn is_qualifier(self) -> bool {
        self > TokenKind::QualifiersBoundary
    }

    /// Resolve a reserved word to its kind.
    ///
    /// Returns `None` for ordinary identifiers.
    pub fn reserved(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "void" => TokenKind::Void,
            "Enum" => TokenKind::EnumMarker,
            "const" => TokenKind::Const,
            "static" => TokenKind::Static,
            "volatile" => TokenKind::Volatile,
            "mutable" => TokenKind::Mutable,
            "unsigned" => TokenKind::Unsigned,
            "signed" => TokenKind::Signed,
            "long" => TokenKind::Long,
            "short" => TokenKind::Short,
            "inline" => TokenKind::Inline,
            "virtual" => TokenKind::Virtual,
            "explicit" => TokenKind::Explicit,
            "extern" => TokenKind::Extern,
            "friend" => TokenKind::Friend,
            "typename" => TokenKind::Typename,
            "typedef" => TokenKind::Typedef,
            "struct" => TokenKind::Struct,
            "class" => TokenKind::Class,
            "enum" => TokenKind::Enum,
            _ => return None,
        };
        Some(kind)
    }
}

/// A single token: its source text and kind.
///
/// Equality compares both text and kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            kind,
        }
    }

    /// Build a word token, classifying reserved words.
    pub fn word(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = TokenKind::reserved(&text).unwrap_or(TokenKind::Identifier);
        Token { text, kind }
    }

    /// The `::` token.
    pub fn scope() -> Self {
        Token::new("::", TokenKind::ScopeResolution)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns `true` if this is the wildcard type `any`.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.text == crate::WILDCARD_TYPE
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
