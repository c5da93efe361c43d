//! End-to-end builds over a small document set.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use pretty_assertions::assert_eq;
use zdoc_diagnostic::ErrorCode;
use zdoc_library::raw::DocSet;
use zdoc_library::trim::TrimmedLibrary;
use zdoc_library::ExceptionDoc;
use zdoc_typedefs::TypedefTable;
use zdocc::commands::{build_docs, dump_typedefs, BuildOptions};
use zdocc::{run_pipeline, PipelineInput};

const DOC_SET: &str = r#"{
    "typedefs": [
        { "namespace": ["Zero"], "name": "StringParam", "declaration": "typedef const String& StringParam" },
        { "namespace": ["Zero"], "name": "Real3Param", "declaration": "typedef const Real3& Real3Param" }
    ],
    "classes": [
        {
            "name": "Cog",
            "namespace": ["Zero"],
            "description": "The base object.",
            "methods": [
                { "name": "GetName", "return_type": "StringParam" },
                {
                    "name": "SetTranslation",
                    "description": "Sets translation.",
                    "return_type": "void",
                    "parameters": [{ "name": "translation", "type": "Real3Param" }]
                },
                {
                    "name": "Attach",
                    "description": "Attaches a child.",
                    "return_type": "void",
                    "parameters": [{ "name": "child", "type": "Cog*" }]
                }
            ],
            "properties": [
                { "name": "Name", "type": "String" },
                { "name": "Translation", "type": "Real3" }
            ],
            "header_lines": ["  Events::Changed;"],
            "source_lines": [
                "void Cog::Attach(Cog* child)",
                "{",
                "  DoNotifyException(\"Cog\", \"Bad child\");",
                "  DispatchEvent(Events::Changed, event);",
                "}"
            ]
        },
        { "name": "Sprite", "base": "Cog", "namespace": ["Zero"], "description": "Draws." }
    ],
    "comments": [
        { "class": "Sprite", "method": { "name": "GetName", "return_type": "String", "description": "The name." } },
        { "class": "Missing", "method": { "name": "Run", "return_type": "void" } }
    ]
}"#;

fn doc_set() -> DocSet {
    DocSet::from_json(DOC_SET).unwrap()
}

fn build(no_report: bool) -> zdocc::PipelineOutput {
    run_pipeline(
        &doc_set(),
        PipelineInput {
            no_report,
            ..PipelineInput::default()
        },
    )
}

#[test]
fn accessors_fold_and_types_display() {
    let output = build(true);
    let cog = output.trimmed.class("Cog").cloned().unwrap();

    let methods: Vec<&str> = cog.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, vec!["Attach"]);
    assert_eq!(cog.methods[0].parameters, "(Cog* child)");

    let translation = cog.properties.iter().find(|p| p.name == "Translation");
    assert_eq!(translation.map(|p| p.description.as_str()), Some("Sets translation."));
}

#[test]
fn source_scan_finds_exceptions_and_events() {
    let output = build(true);
    let cog = output.trimmed.class("Cog").cloned().unwrap();

    assert_eq!(
        cog.methods[0].exceptions,
        vec![ExceptionDoc {
            title: "Cog".into(),
            message: "Bad child".into(),
        }]
    );
    assert_eq!(cog.events_sent, vec!["Changed".to_string()]);

    let events = &output.trimmed.events;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Changed");
    assert_eq!(events[0].senders, vec!["Cog".to_string()]);
}

#[test]
fn comments_merge_into_inherited_methods() {
    let output = build(true);
    let sprite = output.trimmed.class("Sprite").cloned().unwrap();
    assert_eq!(sprite.methods.len(), 1);
    assert_eq!(sprite.methods[0].name, "GetName");
    assert_eq!(sprite.methods[0].return_type, "String");
    assert_eq!(sprite.methods[0].description, "The name.");

    // The comment naming an unknown class.
    assert_eq!(output.diagnostics.count_of(ErrorCode::W2003), 1);
}

#[test]
fn report_lists_missing_descriptions() {
    let quiet = build(true);
    assert_eq!(quiet.missing_descriptions, 0);

    // Cog.Name is the only undocumented item.
    let output = build(false);
    assert_eq!(output.missing_descriptions, 1);
    assert_eq!(output.diagnostics.count_of(ErrorCode::W2002), 1);
}

#[test]
fn build_writes_library_and_typedef_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("docset.json");
    std::fs::write(&input, DOC_SET).unwrap();

    let options = BuildOptions {
        output: Some(dir.path().join("library.json")),
        emit_typedefs: Some(dir.path().join("typedefs.json")),
        no_report: true,
        ..BuildOptions::default()
    };
    let (summary, printed) = build_docs(&input, &options).expect("build failed");
    assert_eq!(printed, None);
    assert_eq!(summary.classes, 2);
    assert_eq!(summary.typedefs, 2);

    let library_text = std::fs::read_to_string(dir.path().join("library.json")).unwrap();
    let library: TrimmedLibrary = serde_json::from_str(&library_text).unwrap();
    assert_eq!(library.classes.len(), 2);

    let table = TypedefTable::load(&dir.path().join("typedefs.json")).unwrap();
    let definitions: Vec<(&str, &str)> = table
        .typedefs
        .iter()
        .map(|r| (r.name.as_str(), r.definition.as_str()))
        .collect();
    assert_eq!(
        definitions,
        vec![("Real3Param", "const Real3 &"), ("StringParam", "const String &")]
    );
}

#[test]
fn typedef_dump_matches_emitted_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("docset.json");
    std::fs::write(&input, DOC_SET).unwrap();

    let json = dump_typedefs(&input, None).unwrap();
    assert!(json.contains("\"definition\": \"const Real3 &\""));
}

#[test]
fn unreadable_doc_set_is_a_load_error() {
    let result = build_docs(Path::new("/nonexistent/zdoc/docset.json"), &BuildOptions::default());
    assert!(matches!(result, Err(zdocc::BuildError::Load(_))));
}
