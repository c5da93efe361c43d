use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn texts(source: &str) -> Vec<String> {
    tokenize(source).into_iter().map(|t| t.text).collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

#[test]
fn type_fragment() {
    assert_eq!(
        texts("const Zero::Real3Param& value"),
        vec!["const", "Zero", "::", "Real3Param", "&", "value"]
    );
    assert_eq!(
        kinds("const Zero::Real3Param& value"),
        vec![
            TokenKind::Const,
            TokenKind::Identifier,
            TokenKind::ScopeResolution,
            TokenKind::Identifier,
            TokenKind::Symbol,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn matches_from_words() {
    let expected = TokenSequence::from_words(["unsigned", "int", "*", "Ns", "::", "Enum"]);
    assert_eq!(tokenize("unsigned int* Ns::Enum"), expected);
}

#[test]
fn reserved_words() {
    assert_eq!(
        kinds("void Enum typedef static"),
        vec![
            TokenKind::Void,
            TokenKind::EnumMarker,
            TokenKind::Typedef,
            TokenKind::Static,
        ]
    );
}

#[test]
fn source_line_with_call() {
    assert_eq!(
        texts(r#"  DoNotifyException("Invalid", "Bad value"); // trailing"#),
        vec!["DoNotifyException", "(", "\"Invalid\"", ",", "\"Bad value\"", ")", ";"]
    );
}

#[test]
fn literal_keeps_escaped_quote() {
    assert_eq!(texts(r#""say \"hi\"" x"#), vec![r#""say \"hi\"""#, "x"]);
    assert_eq!(kinds("'c'"), vec![TokenKind::StringLiteral]);
}

#[test]
fn comments_are_discarded() {
    assert_eq!(texts("Real /* scalar */ x // trailing"), vec!["Real", "x"]);
}

#[test]
fn block_comments_with_inner_stars() {
    assert_eq!(texts("a /**/ b"), vec!["a", "b"]);
    assert_eq!(texts("a /* x * y */ c"), vec!["a", "c"]);
    assert_eq!(texts("a /** doc **/ c"), vec!["a", "c"]);
    assert_eq!(texts("Real/*a*//*b*/x"), vec!["Real", "x"]);
}

#[test]
fn pound_and_numbers() {
    assert_eq!(
        kinds("#define SIZE 16"),
        vec![
            TokenKind::Pound,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Number,
        ]
    );
}

#[test]
fn single_colon_is_punctuation() {
    assert_eq!(
        kinds("a : b :: c"),
        vec![
            TokenKind::Identifier,
            TokenKind::Symbol,
            TokenKind::Identifier,
            TokenKind::ScopeResolution,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn unterminated_literal_does_not_abort() {
    let tokens = tokenize("Foo( \"unterminated");
    assert_eq!(tokens.first().map(|t| t.text.as_str()), Some("Foo"));
    assert!(tokens.contains_kind(TokenKind::OpenParen));
    assert!(tokens.iter().all(|t| !t.text.is_empty()));
}

#[test]
fn stray_characters_become_symbols() {
    assert_eq!(
        kinds("a @ b \u{1}"),
        vec![
            TokenKind::Identifier,
            TokenKind::Symbol,
            TokenKind::Identifier,
            TokenKind::Symbol,
        ]
    );
}

#[test]
fn append_extends_existing_sequence() {
    let mut tokens = tokenize("Array<");
    append_tokens("Real>", &mut tokens);
    assert_eq!(
        tokens.into_iter().map(|t| t.text).collect::<Vec<_>>(),
        vec!["Array", "<", "Real", ">"]
    );
}

#[test]
fn empty_and_blank_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\r\n ").is_empty());
}

proptest! {
    #[test]
    fn never_panics(source in "\\PC{0,64}") {
        let tokens = tokenize(&source);
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }

    #[test]
    fn token_text_covers_non_whitespace_input(source in "[A-Za-z0-9_:(),;#&*<> ]{0,48}") {
        let joined: String = tokenize(&source).iter().map(|t| t.text.as_str()).collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn reading_joined_text_is_stable(source in "[A-Za-z0-9_:(),;#&*<> ]{0,48}") {
        let tokens = tokenize(&source);
        prop_assert_eq!(tokenize(&tokens.joined_text()), tokens);
    }
}
