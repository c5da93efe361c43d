//! Publishable output: display-string types, folded accessors.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use zdoc_canon::{canonicalize, display_name};
use zdoc_ir::TokenKind;

use crate::{ClassDoc, EnumDoc, EventDoc, ExceptionDoc, Library, MethodDoc, ParameterDoc};

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TrimmedLibrary {
    pub classes: Vec<TrimmedClass>,
    pub events: Vec<EventDoc>,
    #[serde(default)]
    pub enums: Vec<TrimmedEnum>,
    #[serde(default)]
    pub flags: Vec<TrimmedEnum>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TrimmedEnum {
    pub name: String,
    pub description: String,
    pub values: Vec<String>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TrimmedClass {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    pub description: String,
    pub methods: Vec<TrimmedMethod>,
    pub properties: Vec<TrimmedProperty>,
    #[serde(default)]
    pub events_sent: Vec<String>,
    #[serde(default)]
    pub events_listened: Vec<String>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TrimmedMethod {
    pub name: String,
    pub description: String,
    pub return_type: String,
    /// `(Type name, ..)` as shown in a method listing.
    pub parameters: String,
    pub parameter_list: Vec<TrimmedParameter>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<ExceptionDoc>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TrimmedParameter {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TrimmedProperty {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl TrimmedLibrary {
    /// Render every class, event, enum and flags set, each ordered by name.
    pub fn from_library(library: &Library) -> Self {
        let mut classes: Vec<TrimmedClass> = library.classes().iter().map(trim_class).collect();
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        let mut events: Vec<EventDoc> = library.events().iter().cloned().collect();
        events.sort_by(|a, b| a.name.cmp(&b.name));
        TrimmedLibrary {
            classes,
            events,
            enums: trim_enums(library.enums()),
            flags: trim_enums(library.flags()),
        }
    }

    pub fn class(&self, name: &str) -> Option<&TrimmedClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn trim_class(class: &ClassDoc) -> TrimmedClass {
    let mut properties: Vec<TrimmedProperty> = class
        .properties
        .iter()
        .map(|p| TrimmedProperty {
            name: p.name.clone(),
            description: clean_description(&p.description),
            type_name: canonicalize(&p.tokens),
            read_only: p.read_only,
            is_static: p.is_static,
        })
        .collect();
    let by_name: FxHashMap<String, usize> = properties
        .iter()
        .enumerate()
        .map(|(i, p)| (p.name.clone(), i))
        .collect();

    let mut methods = Vec::new();
    for method in &class.methods {
        // Constructors and destructors carry no return type.
        if method.return_type.is_empty() {
            continue;
        }
        let trimmed = trim_method(method);
        if !fold_accessor(&trimmed, &by_name, &mut properties) {
            methods.push(trimmed);
        }
    }

    let mut events_sent = class.events_sent.clone();
    events_sent.sort();
    events_sent.dedup();
    let mut events_listened = class.events_listened.clone();
    events_listened.sort();
    events_listened.dedup();

    TrimmedClass {
        name: class.name.clone(),
        base: class.base.clone(),
        description: clean_description(&class.description),
        methods,
        properties,
        events_sent,
        events_listened,
    }
}

fn trim_enums(docs: &[EnumDoc]) -> Vec<TrimmedEnum> {
    let mut trimmed: Vec<TrimmedEnum> = docs
        .iter()
        .map(|e| TrimmedEnum {
            name: display_name(&e.name),
            description: clean_description(&e.description),
            values: e.values.clone(),
        })
        .collect();
    trimmed.sort_by(|a, b| a.name.cmp(&b.name));
    trimmed
}

fn trim_method(method: &MethodDoc) -> TrimmedMethod {
    let parameter_list: Vec<TrimmedParameter> = method
        .parameters
        .iter()
        .take_while(|p| is_listed(p))
        .map(|p| TrimmedParameter {
            name: p.name.clone(),
            description: clean_description(&p.description),
            type_name: canonicalize(&p.tokens),
        })
        .collect();

    let mut parameters = String::from("(");
    for (i, p) in parameter_list.iter().enumerate() {
        if i > 0 {
            parameters.push_str(", ");
        }
        parameters.push_str(&p.type_name);
        if !p.name.is_empty() {
            parameters.push(' ');
            parameters.push_str(&p.name);
        }
    }
    parameters.push(')');

    TrimmedMethod {
        name: method.name.clone(),
        description: clean_description(&method.description),
        return_type: canonicalize(&method.return_type),
        parameters,
        parameter_list,
        is_static: method.is_static,
        exceptions: method.exceptions.clone(),
    }
}

/// An empty or `void` parameter ends the listed parameters.
fn is_listed(parameter: &ParameterDoc) -> bool {
    parameter
        .tokens
        .first()
        .is_some_and(|t| !t.is(TokenKind::Void))
}

/// Fold a `Get`/`Is`/`Set` accessor into its property. Returns `true` if the
/// method was absorbed and should not be listed.
fn fold_accessor(
    method: &TrimmedMethod,
    by_name: &FxHashMap<String, usize>,
    properties: &mut [TrimmedProperty],
) -> bool {
    if method.name.chars().count() < 4 {
        return false;
    }
    let (prefix, rest) = method.name.split_at(accessor_prefix_len(&method.name));
    let Some(&i) = by_name.get(rest) else {
        return false;
    };
    let property = &mut properties[i];
    match prefix.to_ascii_lowercase().as_str() {
        "get" => {
            if !method.description.is_empty() {
                property.description.clone_from(&method.description);
            }
            true
        }
        "is" if property.type_name == method.return_type => {
            if !method.description.is_empty() {
                property.description.clone_from(&method.description);
            }
            true
        }
        "set" => {
            if property.description.is_empty() {
                property.description.clone_from(&method.description);
            }
            true
        }
        _ => false,
    }
}

fn accessor_prefix_len(name: &str) -> usize {
    let lower = |n: usize| name.get(..n).map(str::to_ascii_lowercase);
    match lower(3).as_deref() {
        Some("get" | "set") => 3,
        _ if lower(2).as_deref() == Some("is") => 2,
        _ => 0,
    }
}

/// Collapse runs of spaces to one.
pub fn clean_description(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        out.push(c);
    }
    out
}
