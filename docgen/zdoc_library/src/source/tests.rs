#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use zdoc_diagnostic::DiagnosticQueue;

use crate::{ClassDoc, EventList, MethodDoc};

fn library(classes: Vec<ClassDoc>, events: &[&str]) -> Library {
    let mut diags = DiagnosticQueue::new();
    let mut library = Library::new(EventList::from_names(events.iter().copied()));
    for class in classes {
        library.add_class(class, &mut diags);
    }
    library
}

fn with_methods(name: &str, methods: &[&str]) -> ClassDoc {
    let mut class = ClassDoc::new(name);
    for method in methods {
        class.add_method(MethodDoc::new(*method).returning("void"));
    }
    class
}

fn exceptions(library: &Library, class: &str, method: &str) -> Vec<(String, String)> {
    library
        .class(class)
        .and_then(|c| c.methods_named(method).next())
        .map(|m| {
            m.exceptions
                .iter()
                .map(|e| (e.title.clone(), e.message.clone()))
                .collect()
        })
        .unwrap()
}

const COG_SOURCE: &[&str] = &[
    "#include \"Cog.hpp\"",
    "void Cog::Load(StringParam path)",
    "{",
    "  if (path.Empty())",
    "    DoNotifyException(\"Invalid path\", \"Path was empty\");",
    "  DoNotifyException(\"Invalid path\", \"Path was empty\");",
    "}",
    "",
    "void Cog::Save()",
    "{",
    "  DoNotifyException(message, \"Cannot save\");",
    "  Warn(\"not an exception\", \"x\");",
    "}",
];

#[test]
fn exceptions_attach_to_the_current_function() {
    let mut library = library(vec![with_methods("Cog", &["Load", "Save"])], &[]);
    let summary = library.scan_source_lines("Cog", COG_SOURCE);

    assert_eq!(summary.exceptions, 2);
    assert_eq!(
        exceptions(&library, "Cog", "Load"),
        vec![("Invalid path".to_string(), "Path was empty".to_string())]
    );
    assert_eq!(
        exceptions(&library, "Cog", "Save"),
        vec![("[variable]".to_string(), "Cannot save".to_string())]
    );
}

#[test]
fn lines_before_any_function_are_ignored() {
    let mut library = library(vec![with_methods("Cog", &["Load"])], &[]);
    let summary = library.scan_source_lines("Cog", ["DoNotifyException(\"Early\", \"x\");"]);
    assert_eq!(summary.exceptions, 0);
}

#[test]
fn split_definition_line_still_starts_a_function() {
    let mut library = library(vec![with_methods("Cog", &["Load"])], &[]);
    let summary = library.scan_source_lines(
        "Cog",
        ["void", "Cog::Load", "{", "  DoNotifyException(\"a\", \"b\");", "}"],
    );
    assert_eq!(summary.exceptions, 1);
    assert_eq!(exceptions(&library, "Cog", "Load"), vec![("a".to_string(), "b".to_string())]);
}

#[test]
fn defining_another_class_switches_the_current_class() {
    let mut library = library(
        vec![with_methods("Cog", &["Load"]), with_methods("ZilchTransform", &["SetScale"])],
        &[],
    );
    library.scan_source_lines(
        "Cog",
        [
            "void Transform::SetScale(Real3Param scale)",
            "{",
            "  DoNotifyException(\"Bad scale\", \"Scale was zero\");",
            "}",
        ],
    );
    assert_eq!(
        exceptions(&library, "ZilchTransform", "SetScale"),
        vec![("Bad scale".to_string(), "Scale was zero".to_string())]
    );
    assert!(exceptions(&library, "Cog", "Load").is_empty());
}

#[test]
fn event_calls_record_both_sides() {
    let mut library = library(vec![with_methods("Cog", &["Initialize"])], &["LogicUpdate", "Destroyed"]);
    let summary = library.scan_source_lines(
        "Cog",
        [
            "  Connect(space, Events::LogicUpdate, this, &Cog::OnLogicUpdate);",
            "  GetOwner()->DispatchEvent(Events::Destroyed, &event);",
            "  DispatchEvent(Events::NotAnEvent, &event);",
        ],
    );

    assert_eq!(summary.event_uses, 2);
    let cog = library.class("Cog").cloned().unwrap();
    assert_eq!(cog.events_listened, vec!["LogicUpdate".to_string()]);
    assert_eq!(cog.events_sent, vec!["Destroyed".to_string()]);
    assert_eq!(
        library.events().get("LogicUpdate").map(|e| e.listeners.clone()),
        Some(vec!["Cog".to_string()])
    );
    assert_eq!(
        library.events().get("Destroyed").map(|e| e.senders.clone()),
        Some(vec!["Cog".to_string()])
    );
}

#[test]
fn header_declares_events_once_per_line() {
    let mut library = library(vec![ClassDoc::new("Mouse")], &[]);
    let declared = library.scan_header_lines(
        "Mouse",
        [
            "namespace Events",
            "{",
            "  DeclareEvent(Events::MouseEnter); DeclareEvent(Events::MouseExit);",
            "  DeclareEvent(Events::MouseMove);",
            "}",
        ],
    );

    assert_eq!(declared, 2);
    assert!(library.events().contains("MouseEnter"));
    assert!(library.events().contains("MouseMove"));
    assert!(!library.events().contains("MouseExit"));
    assert_eq!(
        library.class("Mouse").map(|c| c.events_sent.clone()),
        Some(vec!["MouseEnter".to_string(), "MouseMove".to_string()])
    );
}

#[test]
fn unknown_class_scans_nothing() {
    let mut library = library(vec![], &["LogicUpdate"]);
    assert_eq!(
        library.scan_source_lines("Nobody", ["Connect(a, Events::LogicUpdate, b);"]),
        SourceSummary::default()
    );
    assert_eq!(library.scan_header_lines("Nobody", ["Events::A"]), 0);
}
