//! Guarded lookup and in-place typedef substitution.

use zdoc_ir::{NamespacePath, TokenKind, TokenSequence};

use crate::{TypedefDatabase, TypedefEntry};

const PARAM_SUFFIX: &str = "Param";

/// Why a resolved typedef was not substituted.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Guard {
    /// The candidate is the entry being expanded.
    OwnKey,
    /// The definition already occurs contiguously in the window.
    AlreadyExpanded,
    /// The window ends in `Namespace :: Alias`, matching the start of the
    /// definition.
    AliasPattern,
}

/// Outcome of looking up one token.
#[derive(Clone, Debug)]
pub enum Lookup<'db> {
    /// No key exists for the token.
    Miss,
    /// The first key exists but a guard rejected it.
    Guarded { key: &'db str, guard: Guard },
    /// Substitute this entry's definition.
    Hit(&'db TypedefEntry),
}

impl Lookup<'_> {
    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }
}

/// Look up `window[position]` from inside `namespace`.
///
/// Only the first existing key is considered; if a guard rejects it the more
/// qualified keys are not tried. `current_key` is the entry under expansion
/// when normalizing a definition, `None` for declarations.
pub fn lookup<'db>(
    db: &'db TypedefDatabase,
    window: &TokenSequence,
    position: usize,
    namespace: &NamespacePath,
    current_key: Option<&str>,
) -> Lookup<'db> {
    let Some(token) = window.get(position) else {
        return Lookup::Miss;
    };
    let Some(pos) = db.resolve_position(&token.text, namespace) else {
        return Lookup::Miss;
    };
    let entry = db.entry_at(pos);

    let guard = if current_key == Some(entry.key.as_str()) {
        Some(Guard::OwnKey)
    } else if entry.definition.is_contained_in(window) {
        Some(Guard::AlreadyExpanded)
    } else if is_alias_pattern(window, position, &entry.definition) {
        Some(Guard::AliasPattern)
    } else {
        None
    };

    match guard {
        Some(guard) => Lookup::Guarded {
            key: &entry.key,
            guard,
        },
        None => Lookup::Hit(entry),
    }
}

/// `window[position-2..=position]` spells the first three tokens of
/// `definition`.
pub(crate) fn is_alias_pattern(window: &TokenSequence, position: usize, definition: &TokenSequence) -> bool {
    if definition.len() < 3 || position < 2 {
        return false;
    }
    let tail = &window.as_slice()[position - 2..=position];
    tail.iter()
        .zip(definition.iter())
        .all(|(a, b)| a.text == b.text)
}

/// Which side of the pipeline a scan runs for.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Mode<'k> {
    /// Class declarations: strip `Param` suffixes, no own key.
    Declaration,
    /// A typedef's own definition during the closure.
    Definition { key: &'k str },
}

/// Scan `tokens` left to right, splicing in every unguarded typedef.
///
/// Scanning resumes after each spliced region, so a definition is never
/// re-examined within the same call. Returns `true` if a typedef was
/// substituted; `Param` stripping alone does not count.
pub(crate) fn normalize_tokens(
    db: &TypedefDatabase,
    tokens: &mut TokenSequence,
    namespace: &NamespacePath,
    mode: Mode<'_>,
) -> bool {
    let current_key = match mode {
        Mode::Declaration => None,
        Mode::Definition { key } => Some(key),
    };

    let mut changed = false;
    let mut i = 0;
    while i < tokens.len() {
        if matches!(mode, Mode::Declaration) {
            if let Some(token) = tokens.get_mut(i) {
                strip_param_suffix(&mut token.text, token.kind);
            }
        }
        match lookup(db, tokens, i, namespace, current_key) {
            Lookup::Hit(entry) => {
                tracing::trace!(key = %entry.key, position = i, "substitute");
                i = tokens.splice_at(i, &entry.definition);
                changed = true;
            }
            Lookup::Miss | Lookup::Guarded { .. } => i += 1,
        }
    }
    changed
}

fn strip_param_suffix(text: &mut String, kind: TokenKind) {
    if kind == TokenKind::Identifier && text.len() > PARAM_SUFFIX.len() && text.ends_with(PARAM_SUFFIX) {
        text.truncate(text.len() - PARAM_SUFFIX.len());
    }
}
