//! Merging a matched declaration into an existing method.

use crate::signature::Side;
use crate::{MethodDoc, SignatureMatch};

/// Fold `incoming` into `existing` after `match_signatures(existing, incoming)`
/// returned `verdict`.
///
/// - The method description prefers `incoming` when it is non-empty.
/// - Parameter names come from `incoming` when it names them; an empty
///   parameter description is filled from `incoming`.
/// - Types are replaced only when `existing` alone carried a wildcard.
/// - Exceptions are unioned.
pub fn merge_method(existing: &mut MethodDoc, incoming: &MethodDoc, verdict: SignatureMatch) {
    if !incoming.description.is_empty() {
        existing.description.clone_from(&incoming.description);
    }

    let adopt_types = verdict.canonical() == Side::Rhs;
    if adopt_types {
        existing.return_type = incoming.return_type.clone();
    }

    for (mine, theirs) in existing.parameters.iter_mut().zip(&incoming.parameters) {
        if !theirs.name.is_empty() {
            mine.name.clone_from(&theirs.name);
        }
        if mine.description.is_empty() {
            mine.description.clone_from(&theirs.description);
        }
        if adopt_types {
            mine.tokens = theirs.tokens.clone();
        }
    }

    for exception in &incoming.exceptions {
        existing.add_exception(exception.clone());
    }
    existing.is_static |= incoming.is_static;
}
