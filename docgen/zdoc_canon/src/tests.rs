use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn scope_chain_collapses_to_last_segment() {
    assert_eq!(canonicalize_text("Zero::Foo"), "Foo");
    assert_eq!(canonicalize_text("Zero::Math::Vector3"), "Vector3");
    assert_eq!(canonicalize_text("::Foo"), "Foo");
}

#[test]
fn enum_idiom_keeps_the_enclosing_chain() {
    assert_eq!(canonicalize_text("Zero::Direction::Enum"), "Zero::Direction");
    assert_eq!(canonicalize_text("Namespace::Enum"), "Namespace");
    assert_eq!(canonicalize_text("Enum"), "Enum");
}

#[test]
fn trailing_scope_drops_its_segment() {
    assert_eq!(canonicalize_text("Foo::Bar::"), "Foo");
    assert_eq!(canonicalize_text("Foo::"), "");
}

#[test]
fn qualifiers_are_followed_by_a_space() {
    assert_eq!(canonicalize_text("const Zero::Real3 &"), "const Real3&");
    assert_eq!(canonicalize_text("unsigned int"), "unsigned int");
    assert_eq!(canonicalize_text("static const"), "static const");
    assert_eq!(canonicalize_text("struct Zero::Cog*"), "struct Cog*");
}

#[test]
fn everything_else_is_glued() {
    assert_eq!(canonicalize_text("Array < Zero::Real >"), "Array<Real>");
    assert_eq!(canonicalize_text("Handle<Zero::Cog> *"), "Handle<Cog>*");
    assert_eq!(canonicalize_text("void"), "void");
}

#[test]
fn adjacent_words_stay_separate() {
    assert_eq!(canonicalize_text("Real3 const &"), "Real3 const &");
    assert_eq!(canonicalize_text("int const const"), "int const const");
    assert_eq!(canonicalize_text("Zero::Real3 const"), "Real3 const");
    assert_eq!(canonicalize_text("Cog * const"), "Cog*const");
}

#[test]
fn empty_sequence_renders_empty() {
    assert_eq!(canonicalize(&TokenSequence::new()), "");
}

#[test]
fn display_name_follows_chain_rules() {
    assert_eq!(display_name("Zero::Direction::Enum"), "Zero::Direction");
    assert_eq!(display_name("Zero::Cog"), "Cog");
    assert_eq!(display_name("Cog"), "Cog");
}

const WORDS: &[&str] = &[
    "const", "unsigned", "static", "int", "Real", "Cog", "*", "&", "<", ">", ",", "3",
];

proptest! {
    #[test]
    fn output_is_trimmed_and_single_spaced(picks in prop::collection::vec(0..WORDS.len(), 0..12)) {
        let text: Vec<&str> = picks.iter().map(|&i| WORDS[i]).collect();
        let out = canonicalize(&TokenSequence::from_words(text));
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn chain_free_output_reads_back_to_the_same_tokens(picks in prop::collection::vec(0..WORDS.len(), 0..12)) {
        let text: Vec<&str> = picks.iter().map(|&i| WORDS[i]).collect();
        let out = canonicalize(&TokenSequence::from_words(text.iter().copied()));
        let read_back: Vec<String> = zdoc_lexer::tokenize(&out).into_iter().map(|t| t.text).collect();
        prop_assert_eq!(read_back, text);
    }

    #[test]
    fn chain_free_output_is_stable(picks in prop::collection::vec(0..WORDS.len(), 0..12)) {
        let text: Vec<&str> = picks.iter().map(|&i| WORDS[i]).collect();
        let once = canonicalize(&TokenSequence::from_words(text));
        prop_assert_eq!(canonicalize_text(&once), once);
    }
}
