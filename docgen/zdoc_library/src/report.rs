//! Missing-description report over the trimmed output.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use zdoc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};

use crate::trim::TrimmedLibrary;

/// Names left out of the report.
///
/// Serialized as a plain JSON array of names. Entries may be qualified;
/// both stored and looked-up names compare after the last `:`.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IgnoreList {
    names: FxHashSet<String>,
}

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.names.insert(unqualified(&name).to_string());
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(unqualified(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = IgnoreList::new();
        for name in iter {
            list.insert(name);
        }
        list
    }
}

impl From<Vec<String>> for IgnoreList {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<IgnoreList> for Vec<String> {
    fn from(list: IgnoreList) -> Self {
        let mut names: Vec<String> = list.names.into_iter().collect();
        names.sort();
        names
    }
}

fn unqualified(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

/// `X`, `GetXy`, `setZW`: component accessors generated for vector types.
pub fn is_swizzle_name(name: &str) -> bool {
    let rest = match name.get(..3).map(str::to_ascii_lowercase).as_deref() {
        Some("get" | "set") => &name[3..],
        _ => name,
    };
    !rest.is_empty()
        && rest.len() <= 4
        && rest
            .chars()
            .all(|c| matches!(c.to_ascii_uppercase(), 'X' | 'Y' | 'Z' | 'W'))
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MemberKind {
    Class,
    Method,
    Property,
}

/// One undocumented item.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MissingDescription {
    pub kind: MemberKind,
    pub class: String,
    /// Empty for [`MemberKind::Class`].
    pub member: String,
}

impl fmt::Display for MissingDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MemberKind::Class => write!(f, "Class '{}' missing description", self.class),
            MemberKind::Method => {
                write!(f, "Method '{}.{}' missing description", self.class, self.member)
            }
            MemberKind::Property => {
                write!(f, "Property '{}.{}' missing description", self.class, self.member)
            }
        }
    }
}

/// Every class, method and property of `library` without a description.
///
/// Ignored classes are skipped entirely. Ignored and swizzle member names
/// are skipped.
pub fn missing_descriptions(
    library: &TrimmedLibrary,
    ignore: Option<&IgnoreList>,
) -> Vec<MissingDescription> {
    let ignored = |name: &str| ignore.is_some_and(|list| list.contains_name(name));
    let skip_member = |name: &str| ignored(name) || is_swizzle_name(name);

    let mut missing = Vec::new();
    for class in &library.classes {
        if ignored(&class.name) {
            continue;
        }
        if class.description.is_empty() {
            missing.push(MissingDescription {
                kind: MemberKind::Class,
                class: class.name.clone(),
                member: String::new(),
            });
        }
        for method in &class.methods {
            if method.description.is_empty() && !skip_member(&method.name) {
                missing.push(MissingDescription {
                    kind: MemberKind::Method,
                    class: class.name.clone(),
                    member: method.name.clone(),
                });
            }
        }
        for property in &class.properties {
            if property.description.is_empty() && !skip_member(&property.name) {
                missing.push(MissingDescription {
                    kind: MemberKind::Property,
                    class: class.name.clone(),
                    member: property.name.clone(),
                });
            }
        }
    }
    missing
}

/// Push a [`ErrorCode::W2002`] warning per missing description. Returns the
/// number pushed.
#[tracing::instrument(level = "debug", skip_all)]
pub fn report_missing_descriptions(
    library: &TrimmedLibrary,
    ignore: Option<&IgnoreList>,
    diagnostics: &mut DiagnosticQueue,
) -> usize {
    let missing = missing_descriptions(library, ignore);
    for item in &missing {
        diagnostics.push(Diagnostic::warning(ErrorCode::W2002).with_message(item.to_string()));
    }
    tracing::debug!(count = missing.len(), "missing descriptions");
    missing.len()
}
