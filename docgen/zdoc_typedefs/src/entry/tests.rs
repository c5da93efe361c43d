use super::*;
use pretty_assertions::assert_eq;

#[test]
fn key_concatenates_namespace_and_name() {
    let entry = TypedefEntry::new(
        NamespacePath::from_names(["Zero", "Math"]),
        "Real",
        TokenSequence::from_words(["float"]),
    );
    assert_eq!(entry.key, "ZeroMathReal");
}

#[test]
fn declaration_drops_typedef_keyword_and_alias() {
    let entry = TypedefEntry::from_declaration(
        NamespacePath::from_names(["Zero"]),
        "Real3Param",
        "typedef const Real3& Real3Param",
    );
    assert_eq!(
        entry.definition,
        TokenSequence::from_words(["const", "Real3", "&"])
    );
    assert_eq!(entry.key, "ZeroReal3Param");
}

#[test]
fn declaration_keeps_qualified_self_name() {
    // Only the last spelling of the alias is the declared name.
    let entry = TypedefEntry::from_declaration(
        NamespacePath::from_names(["Zero"]),
        "Handle",
        "typedef Math::Handle Handle",
    );
    assert_eq!(
        entry.definition,
        TokenSequence::from_words(["Math", "::", "Handle"])
    );
}

#[test]
fn bare_definition_text() {
    let entry = TypedefEntry::from_declaration(NamespacePath::new(), "Real", "float");
    assert_eq!(entry.definition, TokenSequence::from_words(["float"]));
}
