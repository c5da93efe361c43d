//! Command handlers for the `zdoc` CLI.
//!
//! Each submodule implements one command. Input loading shared between them
//! lives here.

use std::path::Path;

use zdoc_diagnostic::DiagnosticQueue;
use zdoc_library::raw::DocSet;
use zdoc_library::report::IgnoreList;
use zdoc_typedefs::TypedefTable;

use crate::LoadError;

pub mod build;
mod canon;
mod typedefs;

pub use build::{build_docs, parse_build_options, BuildOptions, BuildSummary, TYPEDEFS_ENV};
pub use canon::canon_type;
pub use typedefs::dump_typedefs;

pub(crate) fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_doc_set(path: &Path) -> Result<DocSet, LoadError> {
    let text = read_file(path)?;
    DocSet::from_json(&text).map_err(|source| LoadError::DocSet {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_ignore_list(path: &Path) -> Result<IgnoreList, LoadError> {
    let text = read_file(path)?;
    IgnoreList::from_json(&text).map_err(|source| LoadError::IgnoreList {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn load_table(path: Option<&Path>) -> Result<Option<TypedefTable>, LoadError> {
    path.map(TypedefTable::load).transpose().map_err(LoadError::from)
}

/// Print every diagnostic and a per-code summary to stderr.
pub fn print_diagnostics(diagnostics: &DiagnosticQueue) {
    for diag in diagnostics.iter() {
        eprintln!("{diag}");
    }
    let summary = diagnostics.summary();
    if !summary.is_empty() {
        let parts: Vec<String> = summary
            .iter()
            .map(|(code, count)| format!("{code} x{count}"))
            .collect();
        eprintln!("{} warning(s): {}", diagnostics.warning_count(), parts.join(", "));
    }
}
