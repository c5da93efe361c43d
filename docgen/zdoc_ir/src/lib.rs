//! Shared data types for the zdoc type token engine.
//!
//! Everything downstream of the tokenizer speaks in these types:
//!
//! ```text
//! raw text ──► TokenSequence ──► (typedef expansion) ──► display string
//!                   ▲
//!             NamespacePath (scope of the declaration)
//! ```
//!
//! All types are plain owned values. A `TokenSequence` belongs to exactly one
//! declaration (parameter, property, typedef entry) and is cloned or moved as
//! needed; nothing here holds references into another table.

mod namespace;
mod sequence;
mod token;

pub use namespace::NamespacePath;
pub use sequence::TokenSequence;
pub use token::{Token, TokenKind};

/// Sentinel type text used by the scripting binding layer for untyped slots.
pub const WILDCARD_TYPE: &str = "any";
