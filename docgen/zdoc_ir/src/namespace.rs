//! Enclosing scope of a declaration.

use std::fmt;

/// Ordered namespace names, outermost first.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NamespacePath {
    names: Vec<String>,
}

impl NamespacePath {
    pub fn new() -> Self {
        NamespacePath { names: Vec::new() }
    }

    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        NamespacePath {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Key of `name` declared directly in this scope: every segment
    /// concatenated without separators, then `name`.
    pub fn qualify(&self, name: &str) -> String {
        let mut key = String::with_capacity(
            self.names.iter().map(String::len).sum::<usize>() + name.len(),
        );
        for segment in &self.names {
            key.push_str(segment);
        }
        key.push_str(name);
        key
    }

    /// Candidate keys for `name`, least qualified first.
    ///
    /// For `[n0, n1]` and `T` this yields `T`, `n0T`, `n0n1T`.
    pub fn lookup_keys<'a>(&'a self, name: &'a str) -> impl Iterator<Item = String> + 'a {
        (0..=self.names.len()).map(move |depth| {
            let mut key = String::new();
            for segment in &self.names[..depth] {
                key.push_str(segment);
            }
            key.push_str(name);
            key
        })
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join("::"))
    }
}
