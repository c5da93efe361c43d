//! Reloadable typedef table.
//!
//! ```json
//! { "typedefs": [ { "namespace": ["Zero"], "name": "Real", "definition": "float" } ] }
//! ```
//!
//! `definition` is the space-joined token text, which the tokenizer reads
//! back to the same sequence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zdoc_diagnostic::DiagnosticQueue;
use zdoc_ir::NamespacePath;

use crate::{TypedefDatabase, TypedefEntry};

/// Failure to read or write a typedef table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("cannot read typedef table `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write typedef table `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed typedef table: {0}")]
    Json(#[from] serde_json::Error),
}

/// One serialized typedef.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TypedefRecord {
    #[serde(default)]
    pub namespace: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub definition: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TypedefTable {
    #[serde(default)]
    pub typedefs: Vec<TypedefRecord>,
}

impl TypedefTable {
    /// Records in database order.
    pub fn from_database(db: &TypedefDatabase) -> Self {
        let typedefs = db
            .entries()
            .iter()
            .map(|entry| TypedefRecord {
                namespace: entry.namespace.names().to_vec(),
                name: entry.name.clone(),
                definition: entry.definition.joined_text(),
            })
            .collect();
        TypedefTable { typedefs }
    }

    /// Tokenize every record into a fresh database.
    ///
    /// Duplicate keys are reported through `diagnostics` like any other
    /// insertion.
    pub fn into_database(self, diagnostics: &mut DiagnosticQueue) -> TypedefDatabase {
        let mut db = TypedefDatabase::new();
        self.insert_into(&mut db, diagnostics);
        db
    }

    /// Add every record to an existing database. Returns how many were new.
    pub fn insert_into(self, db: &mut TypedefDatabase, diagnostics: &mut DiagnosticQueue) -> usize {
        let mut added = 0;
        for record in self.typedefs {
            let entry = TypedefEntry::new(
                NamespacePath::from_names(record.namespace),
                record.name,
                zdoc_lexer::tokenize(&record.definition),
            );
            if db.insert(entry, diagnostics) {
                added += 1;
            }
        }
        added
    }

    pub fn from_json(text: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, TableError> {
        let text = fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), records = table.typedefs.len(), "loaded typedef table");
        Ok(table)
    }

    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| TableError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests;
