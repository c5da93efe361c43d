//! Typedef storage.
//!
//! Entries live in an owning `Vec`; the key index stores positions into it.
//! Any reordering goes through [`TypedefDatabase::sort`], which rebuilds the
//! index in full, so positions never go stale.

use rustc_hash::FxHashMap;
use zdoc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use zdoc_ir::NamespacePath;

use crate::TypedefEntry;

/// Typedefs in their building phase.
///
/// Call [`expand_all`](TypedefDatabase::expand_all) once every entry is in to
/// obtain the [`ExpandedTypedefs`](crate::ExpandedTypedefs) used for
/// normalization.
#[derive(Clone, Debug, Default)]
pub struct TypedefDatabase {
    entries: Vec<TypedefEntry>,
    index: FxHashMap<String, usize>,
}

impl TypedefDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TypedefEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&TypedefEntry> {
        self.position(key).map(|pos| &self.entries[pos])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert an entry.
    ///
    /// A key that is already present is rejected with a [`ErrorCode::W1001`]
    /// warning; the first entry stays. Returns `true` if the entry was added.
    pub fn insert(&mut self, entry: TypedefEntry, diagnostics: &mut DiagnosticQueue) -> bool {
        if let Some(&pos) = self.index.get(&entry.key) {
            let kept = &self.entries[pos];
            diagnostics.push(
                Diagnostic::warning(ErrorCode::W1001)
                    .with_message(format!("duplicate typedef `{}`", entry.key))
                    .with_note(format!("kept definition `{}`", kept.definition))
                    .with_note(format!("ignored definition `{}`", entry.definition)),
            );
            return false;
        }
        self.index.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Order entries by `(name, key)` and rebuild the index.
    pub fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.key.cmp(&b.key)));
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        self.index.reserve(self.entries.len());
        for (pos, entry) in self.entries.iter().enumerate() {
            self.index.insert(entry.key.clone(), pos);
        }
    }

    #[inline]
    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    #[inline]
    pub(crate) fn entry_at(&self, pos: usize) -> &TypedefEntry {
        &self.entries[pos]
    }

    pub(crate) fn entry_at_mut(&mut self, pos: usize) -> &mut TypedefEntry {
        &mut self.entries[pos]
    }

    /// Position of the first key that exists for `name` seen from inside
    /// `namespace`, least qualified first.
    pub(crate) fn resolve_position(&self, name: &str, namespace: &NamespacePath) -> Option<usize> {
        namespace
            .lookup_keys(name)
            .find_map(|key| self.position(&key))
    }

    /// The entry a bare `name` refers to from inside `namespace`, ignoring
    /// guards.
    pub fn resolve(&self, name: &str, namespace: &NamespacePath) -> Option<&TypedefEntry> {
        self.resolve_position(name, namespace)
            .map(|pos| self.entry_at(pos))
    }
}

impl Extend<TypedefEntry> for TypedefDatabase {
    /// Insert without diagnostics; duplicates are dropped silently.
    fn extend<I: IntoIterator<Item = TypedefEntry>>(&mut self, iter: I) {
        let mut sink = DiagnosticQueue::new();
        for entry in iter {
            self.insert(entry, &mut sink);
        }
    }
}
