//! Whole-database closure.
//!
//! ```text
//! pass 1:  normalize every definition ──► changed entries = worklist
//! pass n:  normalize the worklist     ──► entries still changing
//!          stop when nothing changes, or after `len` passes (cycle)
//! ```
//!
//! A definition mentioning a typedef that is still being expanded gets that
//! typedef's current definition; later passes pick up the rest. An acyclic
//! table of `n` entries settles within `n` passes.

use rustc_hash::FxHashSet;
use zdoc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use zdoc_ir::{NamespacePath, TokenSequence};

use crate::normalize::{is_alias_pattern, normalize_tokens, Mode};
use crate::{TypedefDatabase, TypedefEntry, TypedefTable};

/// What the closure did.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClosureReport {
    /// Passes run, counting the last one that changed nothing.
    pub passes: usize,
    /// Entries changed by at least one pass.
    pub expanded: usize,
    /// Keys reported as cyclic, in table order.
    pub cycles: Vec<String>,
}

/// Typedefs after the closure. Read-only.
#[derive(Clone, Debug, Default)]
pub struct ExpandedTypedefs {
    db: TypedefDatabase,
    report: ClosureReport,
}

impl TypedefDatabase {
    /// Sort the entries and expand every definition to a fixed point.
    ///
    /// Cycles are reported as [`ErrorCode::W1002`] warnings; the affected
    /// entries keep whatever partial expansion they reached.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = self.len()))]
    pub fn expand_all(self, diagnostics: &mut DiagnosticQueue) -> ExpandedTypedefs {
        let bound = self.len();
        self.expand_bounded(bound, diagnostics)
    }

    pub(crate) fn expand_bounded(mut self, max_passes: usize, diagnostics: &mut DiagnosticQueue) -> ExpandedTypedefs {
        self.sort();

        let max_passes = max_passes.max(1);
        let mut expanded = FxHashSet::default();
        let mut worklist: Vec<usize> = (0..self.len()).collect();
        let mut passes = 0;
        let mut unsettled = Vec::new();

        while !worklist.is_empty() {
            if passes >= max_passes {
                tracing::debug!(passes, remaining = worklist.len(), "closure bound reached");
                unsettled = worklist;
                break;
            }
            worklist.retain(|&pos| self.expand_entry(pos));
            expanded.extend(worklist.iter().copied());
            passes += 1;
            tracing::debug!(pass = passes, changed = worklist.len(), "closure pass");
        }

        let mut cyclic: FxHashSet<usize> = unsettled.iter().copied().collect();
        cyclic.extend(self.residual_cycles());

        let mut cycles = Vec::with_capacity(cyclic.len());
        for pos in 0..self.len() {
            if !cyclic.contains(&pos) {
                continue;
            }
            let entry = self.entry_at(pos);
            let mut diag = Diagnostic::warning(ErrorCode::W1002)
                .with_message(format!("typedef `{}` is part of a cycle", entry.key))
                .with_note(format!("definition left as `{}`", entry.definition));
            if unsettled.contains(&pos) {
                diag = diag.with_note(format!("expansion did not settle after {passes} passes"));
            }
            diagnostics.push(diag);
            cycles.push(entry.key.clone());
        }

        ExpandedTypedefs {
            db: self,
            report: ClosureReport {
                passes,
                expanded: expanded.len(),
                cycles,
            },
        }
    }

    /// Re-normalize one definition. Returns `true` if it changed.
    fn expand_entry(&mut self, pos: usize) -> bool {
        let entry = self.entry_at(pos);
        let mut definition = entry.definition.clone();
        let changed = normalize_tokens(
            self,
            &mut definition,
            &entry.namespace,
            Mode::Definition { key: &entry.key },
        );
        if changed {
            self.entry_at_mut(pos).definition = definition;
        }
        changed
    }

    /// Entries whose settled definition still resolves to themselves, plus
    /// every entry that refers to one of those.
    fn residual_cycles(&self) -> FxHashSet<usize> {
        let mut cyclic: FxHashSet<usize> = (0..self.len())
            .filter(|&pos| self.refers_to(pos, |target| target == pos))
            .collect();
        if cyclic.is_empty() {
            return cyclic;
        }
        loop {
            let reached: Vec<usize> = (0..self.len())
                .filter(|pos| !cyclic.contains(pos))
                .filter(|&pos| self.refers_to(pos, |target| cyclic.contains(&target)))
                .collect();
            if reached.is_empty() {
                break;
            }
            cyclic.extend(reached);
        }
        cyclic
    }

    /// Does any token of entry `pos` resolve to an entry accepted by
    /// `target`, outside the `Namespace :: Alias` shape?
    fn refers_to(&self, pos: usize, target: impl Fn(usize) -> bool) -> bool {
        let entry = self.entry_at(pos);
        entry.definition.iter().enumerate().any(|(i, token)| {
            self.resolve_position(&token.text, &entry.namespace)
                .is_some_and(|hit| {
                    target(hit) && !is_alias_pattern(&entry.definition, i, &self.entry_at(hit).definition)
                })
        })
    }
}

impl ExpandedTypedefs {
    /// Expand every typedef in a declaration's tokens.
    ///
    /// `Param` suffixes are stripped before lookup, so `Real3Param` resolves
    /// through `Real3`. Returns `true` if a typedef was substituted.
    pub fn normalize(&self, tokens: &mut TokenSequence, namespace: &NamespacePath) -> bool {
        normalize_tokens(&self.db, tokens, namespace, Mode::Declaration)
    }

    pub fn database(&self) -> &TypedefDatabase {
        &self.db
    }

    pub fn report(&self) -> &ClosureReport {
        &self.report
    }

    pub fn get(&self, key: &str) -> Option<&TypedefEntry> {
        self.db.get(key)
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Serializable form of the expanded table.
    pub fn to_table(&self) -> TypedefTable {
        TypedefTable::from_database(&self.db)
    }
}
