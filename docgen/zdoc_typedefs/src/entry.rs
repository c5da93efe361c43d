//! A single typedef.

use zdoc_ir::{NamespacePath, TokenKind, TokenSequence};

/// An alias and its definition.
///
/// `key` is the namespace segments concatenated with `name`; it is the
/// identity of the entry inside a [`TypedefDatabase`](crate::TypedefDatabase).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypedefEntry {
    pub key: String,
    pub name: String,
    pub definition: TokenSequence,
    pub namespace: NamespacePath,
}

impl TypedefEntry {
    pub fn new(namespace: NamespacePath, name: impl Into<String>, definition: TokenSequence) -> Self {
        let name = name.into();
        TypedefEntry {
            key: namespace.qualify(&name),
            name,
            definition,
            namespace,
        }
    }

    /// Build an entry from raw declaration text such as
    /// `typedef const Real3& Real3Param`.
    ///
    /// The leading `typedef` and the last token spelling the alias name are
    /// removed; whatever remains is the definition. Text without either is
    /// taken as-is, so `from_declaration(ns, "Real", "float")` also works.
    pub fn from_declaration(namespace: NamespacePath, name: impl Into<String>, declaration: &str) -> Self {
        let name = name.into();
        let mut definition = zdoc_lexer::tokenize(declaration);
        if definition.first().is_some_and(|t| t.is(TokenKind::Typedef)) {
            definition.pop_front();
        }
        definition.remove_last_with_text(&name);
        Self::new(namespace, name, definition)
    }
}

#[cfg(test)]
mod tests;
