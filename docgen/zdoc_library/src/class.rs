//! Per-class documentation.

use zdoc_ir::NamespacePath;
use zdoc_typedefs::ExpandedTypedefs;

use crate::{match_signatures, merge_method, ExceptionDoc, MethodDoc, MethodSignature, PropertyDoc, SignatureMatch};

/// A documented class.
///
/// Methods are kept grouped by name; overloads keep the order they were
/// added in.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ClassDoc {
    pub name: String,
    pub base: Option<String>,
    pub namespace: NamespacePath,
    pub description: String,
    pub methods: Vec<MethodDoc>,
    pub properties: Vec<PropertyDoc>,
    pub events_sent: Vec<String>,
    pub events_listened: Vec<String>,
}

impl ClassDoc {
    pub fn new(name: impl Into<String>) -> Self {
        ClassDoc {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDoc> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }

    /// First declared method matching `signature`.
    pub fn find_matching_method(&self, signature: &MethodSignature<'_>) -> Option<(usize, SignatureMatch)> {
        self.methods
            .iter()
            .enumerate()
            .find_map(|(i, m)| match_signatures(&m.signature(), signature).map(|v| (i, v)))
    }

    /// Add a method, merging it into an already declared overload with a
    /// matching signature. Returns `true` if it was added as a new method.
    pub fn add_method(&mut self, method: MethodDoc) -> bool {
        if let Some((i, verdict)) = self.find_matching_method(&method.signature()) {
            merge_method(&mut self.methods[i], &method, verdict);
            return false;
        }
        self.insert_method(method);
        true
    }

    /// Insert after the last method of the same name, or at the end.
    pub(crate) fn insert_method(&mut self, method: MethodDoc) {
        match self.methods.iter().rposition(|m| m.name == method.name) {
            Some(last) => self.methods.insert(last + 1, method),
            None => self.methods.push(method),
        }
    }

    /// Add a property unless one of that name exists.
    pub fn add_property(&mut self, property: PropertyDoc) -> bool {
        if self.properties.iter().any(|p| p.name == property.name) {
            return false;
        }
        self.properties.push(property);
        true
    }

    /// First non-empty description among the methods called `name`.
    pub fn description_for(&self, name: &str) -> Option<&str> {
        self.methods
            .iter()
            .filter(|m| m.name == name)
            .map(|m| m.description.as_str())
            .find(|d| !d.is_empty())
    }

    /// Attach an exception to the first overload of `method`.
    pub fn add_exception(&mut self, method: &str, exception: ExceptionDoc) -> bool {
        match self.methods.iter_mut().find(|m| m.name == method) {
            Some(first) => first.add_exception(exception),
            None => false,
        }
    }

    /// Expand typedefs in every member type, then merge overloads that have
    /// become identical.
    pub fn normalize_types(&mut self, typedefs: &ExpandedTypedefs) {
        for property in &mut self.properties {
            typedefs.normalize(&mut property.tokens, &self.namespace);
        }
        for method in &mut self.methods {
            method.normalize(typedefs, &self.namespace);
        }
        self.dedupe_methods();
    }

    fn dedupe_methods(&mut self) {
        let methods = std::mem::take(&mut self.methods);
        let before = methods.len();
        for method in methods {
            self.add_method(method);
        }
        if self.methods.len() != before {
            tracing::debug!(class = %self.name, merged = before - self.methods.len(), "merged overloads");
        }
    }

    /// Order members by name. Overloads keep their relative order.
    pub fn sort(&mut self) {
        self.methods.sort_by(|a, b| a.name.cmp(&b.name));
        self.properties.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Sort and deduplicate the event name lists.
    pub fn prune_events(&mut self) {
        self.events_sent.sort();
        self.events_sent.dedup();
        self.events_listened.sort();
        self.events_listened.dedup();
    }
}

#[cfg(test)]
mod tests;
