//! The `canon` command: show the display form of one type.

use std::path::Path;

use zdoc_diagnostic::DiagnosticQueue;
use zdoc_ir::NamespacePath;
use zdoc_typedefs::ExpandedTypedefs;

use crate::commands::{load_table, print_diagnostics};
use crate::BuildError;

/// Normalize `text` against an optional typedef table, as seen from
/// `namespace` (`Zero::Math` style), and canonicalize it.
pub fn canon_type(text: &str, table: Option<&Path>, namespace: Option<&str>) -> Result<String, BuildError> {
    let mut diagnostics = DiagnosticQueue::new();
    let typedefs = match load_table(table)? {
        Some(table) => table.into_database(&mut diagnostics).expand_all(&mut diagnostics),
        None => ExpandedTypedefs::default(),
    };
    print_diagnostics(&diagnostics);

    let namespace = namespace.map_or_else(NamespacePath::new, |ns| {
        NamespacePath::from_names(ns.split("::").filter(|s| !s.is_empty()))
    });
    let mut tokens = zdoc_lexer::tokenize(text);
    typedefs.normalize(&mut tokens, &namespace);
    Ok(zdoc_canon::canonicalize(&tokens))
}
