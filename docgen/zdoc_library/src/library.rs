//! The class table.

use rustc_hash::{FxHashMap, FxHashSet};
use zdoc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use zdoc_typedefs::ExpandedTypedefs;

use crate::{merge_method, ClassDoc, EnumDoc, EventList, MethodDoc};

/// Namespace prefixes tried when a source line names a class.
pub(crate) const CLASS_PREFIXES: &[&str] = &["Zero", "Zilch"];

/// All documented classes plus the known events.
#[derive(Clone, Debug, Default)]
pub struct Library {
    classes: Vec<ClassDoc>,
    index: FxHashMap<String, usize>,
    pub(crate) events: EventList,
    enums: Vec<EnumDoc>,
    flags: Vec<EnumDoc>,
}

/// Result of [`Library::fill_matching_method`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FillOutcome {
    /// Merged into a method of the class itself.
    Merged,
    /// Matched a base class method, which was copied into the class first.
    Inherited,
    /// No method along the chain matches.
    Unmatched,
    /// The class is not in the library.
    UnknownClass,
}

impl Library {
    pub fn new(events: EventList) -> Self {
        Library {
            events,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[ClassDoc] {
        &self.classes
    }

    pub fn events(&self) -> &EventList {
        &self.events
    }

    pub fn enums(&self) -> &[EnumDoc] {
        &self.enums
    }

    pub fn flags(&self) -> &[EnumDoc] {
        &self.flags
    }

    pub fn add_enum(&mut self, doc: EnumDoc) {
        self.enums.push(doc);
    }

    pub fn add_flags(&mut self, doc: EnumDoc) {
        self.flags.push(doc);
    }

    pub fn class(&self, name: &str) -> Option<&ClassDoc> {
        self.position(name).map(|i| &self.classes[i])
    }

    pub fn class_mut(&mut self, name: &str) -> Option<&mut ClassDoc> {
        self.position(name).map(|i| &mut self.classes[i])
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn class_at_mut(&mut self, i: usize) -> &mut ClassDoc {
        &mut self.classes[i]
    }

    pub(crate) fn class_at(&self, i: usize) -> &ClassDoc {
        &self.classes[i]
    }

    /// Add a class. A name already present is a [`ErrorCode::W2001`]
    /// warning and the first class stays.
    pub fn add_class(&mut self, class: ClassDoc, diagnostics: &mut DiagnosticQueue) -> bool {
        if self.index.contains_key(&class.name) {
            diagnostics.push(
                Diagnostic::warning(ErrorCode::W2001)
                    .with_message(format!("duplicate class `{}`", class.name))
                    .with_note("the first declaration is kept"),
            );
            return false;
        }
        self.index.insert(class.name.clone(), self.classes.len());
        self.classes.push(class);
        true
    }

    /// Find a class by the name a source line uses: as written, then with
    /// each of `prefixes` prepended.
    pub fn find_class(&self, name: &str, prefixes: &[&str]) -> Option<usize> {
        self.position(name).or_else(|| {
            prefixes
                .iter()
                .find_map(|prefix| self.position(&format!("{prefix}{name}")))
        })
    }

    /// Base classes of `name`, nearest first.
    ///
    /// The walk ends at a base missing from the table, or at a class it has
    /// already visited.
    pub fn base_chain<'a>(&'a self, name: &str) -> BaseChain<'a> {
        let mut visited = FxHashSet::default();
        let next = self.position(name).and_then(|i| {
            visited.insert(i);
            self.classes[i].base.as_deref()
        });
        BaseChain {
            library: self,
            next,
            visited,
        }
    }

    /// Sort classes by name, their members, and rebuild the index.
    pub fn sort(&mut self) {
        self.classes.sort_by(|a, b| a.name.cmp(&b.name));
        for class in &mut self.classes {
            class.sort();
        }
        self.index.clear();
        for (i, class) in self.classes.iter().enumerate() {
            self.index.insert(class.name.clone(), i);
        }
    }

    /// Expand typedefs in every member type of every class.
    #[tracing::instrument(level = "debug", skip_all, fields(classes = self.classes.len()))]
    pub fn normalize_all_types(&mut self, typedefs: &ExpandedTypedefs) {
        for class in &mut self.classes {
            class.normalize_types(typedefs);
        }
    }

    /// Merge a declaration found outside the class listing (a source
    /// comment) into the matching method of `class_name` or of a base.
    ///
    /// `incoming` is normalized in the class's namespace first. When only a
    /// base class declares the method, a copy is added to `class_name` and
    /// the merge happens on that copy.
    pub fn fill_matching_method(
        &mut self,
        class_name: &str,
        mut incoming: MethodDoc,
        typedefs: &ExpandedTypedefs,
    ) -> FillOutcome {
        let Some(ci) = self.position(class_name) else {
            return FillOutcome::UnknownClass;
        };
        incoming.normalize(typedefs, &self.classes[ci].namespace);
        let signature = incoming.signature();

        if let Some((mi, verdict)) = self.classes[ci].find_matching_method(&signature) {
            merge_method(&mut self.classes[ci].methods[mi], &incoming, verdict);
            return FillOutcome::Merged;
        }

        let inherited = self.base_chain(class_name).find_map(|base| {
            base.find_matching_method(&signature)
                .map(|(mi, verdict)| (base.methods[mi].clone(), verdict, base.name.clone()))
        });
        match inherited {
            Some((mut copy, verdict, from)) => {
                tracing::debug!(class = class_name, method = %copy.name, from = %from, "inherited method");
                merge_method(&mut copy, &incoming, verdict);
                self.classes[ci].insert_method(copy);
                FillOutcome::Inherited
            }
            None => FillOutcome::Unmatched,
        }
    }

    /// Give methods without a description the description of a same-named
    /// sibling, or else of the nearest base class method of that name.
    pub fn fill_overload_descriptions(&mut self) -> usize {
        let mut fills = Vec::new();
        for (ci, class) in self.classes.iter().enumerate() {
            for (mi, method) in class.methods.iter().enumerate() {
                if !method.description.is_empty() {
                    continue;
                }
                let found = class.description_for(&method.name).or_else(|| {
                    self.base_chain(&class.name)
                        .find_map(|base| base.description_for(&method.name))
                });
                if let Some(description) = found {
                    fills.push((ci, mi, description.to_string()));
                }
            }
        }
        let filled = fills.len();
        for (ci, mi, description) in fills {
            self.classes[ci].methods[mi].description = description;
        }
        filled
    }

    /// Sort and deduplicate every event list.
    pub fn prune_events(&mut self) {
        self.events.sort_and_prune();
        for class in &mut self.classes {
            class.prune_events();
        }
    }
}

/// Iterator over a class's base chain. See [`Library::base_chain`].
pub struct BaseChain<'a> {
    library: &'a Library,
    next: Option<&'a str>,
    visited: FxHashSet<usize>,
}

impl<'a> Iterator for BaseChain<'a> {
    type Item = &'a ClassDoc;

    fn next(&mut self) -> Option<&'a ClassDoc> {
        let name = self.next.take()?;
        let i = self.library.position(name)?;
        if !self.visited.insert(i) {
            tracing::debug!(class = name, "base chain revisits a class");
            return None;
        }
        let class = &self.library.classes[i];
        self.next = class.base.as_deref();
        Some(class)
    }
}
