//! The input document set as read from JSON.
//!
//! Everything here is raw text: type strings are tokenized and typedef
//! declarations parsed when converting into the working model.

use serde::{Deserialize, Serialize};
use zdoc_diagnostic::DiagnosticQueue;
use zdoc_ir::NamespacePath;
use zdoc_typedefs::{TypedefDatabase, TypedefEntry};

use crate::{ClassDoc, EnumDoc, EventList, Library, MethodDoc, ParameterDoc, PropertyDoc};

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct DocSet {
    #[serde(default)]
    pub typedefs: Vec<RawTypedef>,
    #[serde(default)]
    pub classes: Vec<RawClass>,
    #[serde(default)]
    pub events: Vec<String>,
    /// Method declarations found in source comments, merged after the
    /// class listing is loaded.
    #[serde(default)]
    pub comments: Vec<RawComment>,
    #[serde(default)]
    pub enums: Vec<RawEnum>,
    #[serde(default)]
    pub flags: Vec<RawEnum>,
}

/// `typedef <definition> <name>` as written, with its enclosing namespaces.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RawTypedef {
    #[serde(default)]
    pub namespace: Vec<String>,
    pub name: String,
    pub declaration: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RawClass {
    pub name: String,
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub namespace: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub source_lines: Vec<String>,
    #[serde(default)]
    pub header_lines: Vec<String>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RawMethod {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RawParameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_text: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RawProperty {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RawEnum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RawComment {
    pub class: String,
    pub method: RawMethod,
}

impl RawTypedef {
    pub fn to_entry(&self) -> TypedefEntry {
        TypedefEntry::from_declaration(
            NamespacePath::from_names(self.namespace.iter().cloned()),
            self.name.clone(),
            &self.declaration,
        )
    }
}

impl RawClass {
    /// The class without its source text.
    pub fn to_class(&self) -> ClassDoc {
        let mut class = ClassDoc::new(self.name.clone());
        if !self.base.is_empty() {
            class.base = Some(self.base.clone());
        }
        class.namespace = NamespacePath::from_names(self.namespace.iter().cloned());
        class.description.clone_from(&self.description);
        for method in &self.methods {
            class.add_method(method.to_method());
        }
        for property in &self.properties {
            class.add_property(property.to_property());
        }
        class
    }
}

impl RawMethod {
    pub fn to_method(&self) -> MethodDoc {
        let mut method = MethodDoc::new(self.name.clone())
            .with_description(self.description.clone())
            .returning(&self.return_type);
        method.is_static = self.is_static;
        method.parameters = self
            .parameters
            .iter()
            .map(|p| ParameterDoc {
                name: p.name.clone(),
                description: p.description.clone(),
                tokens: zdoc_lexer::tokenize(&p.type_text),
            })
            .collect();
        method
    }
}

impl RawEnum {
    pub fn to_enum(&self) -> EnumDoc {
        EnumDoc {
            name: self.name.clone(),
            description: self.description.clone(),
            values: self.values.clone(),
        }
    }
}

impl RawProperty {
    pub fn to_property(&self) -> PropertyDoc {
        PropertyDoc {
            description: self.description.clone(),
            read_only: self.read_only,
            is_static: self.is_static,
            ..PropertyDoc::new(self.name.clone(), &self.type_text)
        }
    }
}

impl DocSet {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// All raw typedefs, in order. Duplicates are reported and skipped.
    pub fn typedef_database(&self, diagnostics: &mut DiagnosticQueue) -> TypedefDatabase {
        let mut db = TypedefDatabase::new();
        for typedef in &self.typedefs {
            db.insert(typedef.to_entry(), diagnostics);
        }
        db
    }

    pub fn event_list(&self) -> EventList {
        EventList::from_names(self.events.iter().cloned())
    }

    /// The class listing as a [`Library`]. Types are left unnormalized.
    pub fn library(&self, diagnostics: &mut DiagnosticQueue) -> Library {
        let mut library = Library::new(self.event_list());
        for raw in &self.classes {
            library.add_class(raw.to_class(), diagnostics);
        }
        for raw in &self.enums {
            library.add_enum(raw.to_enum());
        }
        for raw in &self.flags {
            library.add_flags(raw.to_enum());
        }
        library
    }
}
