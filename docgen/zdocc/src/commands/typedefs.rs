//! The `typedefs` command: print the expanded typedef table.

use std::path::Path;

use zdoc_diagnostic::DiagnosticQueue;

use crate::commands::{load_doc_set, load_table, print_diagnostics};
use crate::pipeline::expand_typedefs;
use crate::BuildError;

/// Expand the typedefs of a document set, plus an optional table, and
/// return the reloadable table JSON.
pub fn dump_typedefs(input: &Path, table: Option<&Path>) -> Result<String, BuildError> {
    let doc_set = load_doc_set(input)?;
    let table = load_table(table)?;
    let mut diagnostics = DiagnosticQueue::new();
    let typedefs = expand_typedefs(&doc_set, table, &mut diagnostics);
    print_diagnostics(&diagnostics);
    tracing::debug!(passes = typedefs.report().passes, "expanded typedefs");
    Ok(typedefs.to_table().to_json()?)
}
