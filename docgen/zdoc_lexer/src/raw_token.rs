//! Raw token DFA.
//!
//! Logos produces the raw classes below in one forward pass. Word
//! classification (reserved words, `void`, `Enum`) happens afterwards in
//! [`zdoc_ir::TokenKind::reserved`], which keeps the DFA small and free of
//! keyword/identifier priority conflicts.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub(crate) enum RawToken {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex(r"[0-9][A-Za-z0-9_.]*")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Literal,

    #[token("::")]
    Scope,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("#")]
    Pound,

    /// Any other single character.
    #[regex(r#"[^ \t\r\n\fA-Za-z0-9_"'(),;#]"#)]
    Punct,
}
