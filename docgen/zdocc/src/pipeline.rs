//! The documentation build, phase by phase.
//!
//! ```text
//! DocSet typedefs (+ table) ─► TypedefDatabase ─► expand_all ─► ExpandedTypedefs
//! DocSet classes ─► Library ─► normalize ─► comments ─► overloads
//!                           ─► headers ─► sources ─► sort ─► TrimmedLibrary ─► report
//! ```

use rustc_hash::FxHashSet;
use zdoc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use zdoc_library::raw::DocSet;
use zdoc_library::report::{report_missing_descriptions, IgnoreList};
use zdoc_library::trim::TrimmedLibrary;
use zdoc_library::{FillOutcome, Library};
use zdoc_typedefs::{ExpandedTypedefs, TypedefTable};

/// Inputs of one build besides the document set.
#[derive(Debug, Default)]
pub struct PipelineInput {
    /// Extra typedefs, inserted after the document set's own.
    pub table: Option<TypedefTable>,
    pub ignore: Option<IgnoreList>,
    /// Skip the missing-description report.
    pub no_report: bool,
}

/// Everything a build produces.
#[derive(Debug)]
pub struct PipelineOutput {
    pub trimmed: TrimmedLibrary,
    pub typedefs: ExpandedTypedefs,
    pub missing_descriptions: usize,
    pub diagnostics: DiagnosticQueue,
}

/// Build the typedef closure of a document set plus an optional table.
pub fn expand_typedefs(
    doc_set: &DocSet,
    table: Option<TypedefTable>,
    diagnostics: &mut DiagnosticQueue,
) -> ExpandedTypedefs {
    let mut db = doc_set.typedef_database(diagnostics);
    if let Some(table) = table {
        let added = table.insert_into(&mut db, diagnostics);
        tracing::debug!(added, "merged typedef table");
    }
    db.expand_all(diagnostics)
}

#[tracing::instrument(level = "debug", skip_all, fields(classes = doc_set.classes.len()))]
pub fn run_pipeline(doc_set: &DocSet, input: PipelineInput) -> PipelineOutput {
    let mut diagnostics = DiagnosticQueue::new();
    let typedefs = expand_typedefs(doc_set, input.table, &mut diagnostics);

    let mut library = doc_set.library(&mut diagnostics);
    library.normalize_all_types(&typedefs);
    merge_comments(&mut library, doc_set, &typedefs, &mut diagnostics);
    let filled = library.fill_overload_descriptions();
    tracing::debug!(filled, "overload descriptions");

    // A duplicate class was dropped; its lines would land on the first one.
    let mut seen = FxHashSet::default();
    let scanned: Vec<_> = doc_set
        .classes
        .iter()
        .filter(|raw| seen.insert(raw.name.as_str()))
        .collect();
    for raw in &scanned {
        library.scan_header_lines(&raw.name, &raw.header_lines);
    }
    for raw in &scanned {
        let summary = library.scan_source_lines(&raw.name, &raw.source_lines);
        tracing::trace!(class = %raw.name, ?summary, "scanned source");
    }

    library.prune_events();
    library.sort();
    let trimmed = TrimmedLibrary::from_library(&library);

    let missing_descriptions = if input.no_report {
        0
    } else {
        report_missing_descriptions(&trimmed, input.ignore.as_ref(), &mut diagnostics)
    };

    PipelineOutput {
        trimmed,
        typedefs,
        missing_descriptions,
        diagnostics,
    }
}

fn merge_comments(
    library: &mut Library,
    doc_set: &DocSet,
    typedefs: &ExpandedTypedefs,
    diagnostics: &mut DiagnosticQueue,
) {
    for comment in &doc_set.comments {
        let method = comment.method.to_method();
        let name = method.name.clone();
        match library.fill_matching_method(&comment.class, method, typedefs) {
            FillOutcome::Merged | FillOutcome::Inherited => {}
            FillOutcome::Unmatched => diagnostics.push(
                Diagnostic::warning(ErrorCode::W2003)
                    .with_message(format!("no method of `{}` matches comment for `{name}`", comment.class)),
            ),
            FillOutcome::UnknownClass => diagnostics.push(
                Diagnostic::warning(ErrorCode::W2003)
                    .with_message(format!("comment for `{name}` names unknown class `{}`", comment.class)),
            ),
        }
    }
}
