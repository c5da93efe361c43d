//! Documentation records for members.

use serde::{Deserialize, Serialize};
use zdoc_ir::{NamespacePath, TokenSequence};
use zdoc_typedefs::ExpandedTypedefs;

use crate::MethodSignature;

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParameterDoc {
    pub name: String,
    pub description: String,
    pub tokens: TokenSequence,
}

/// An exception a method may raise, from a `DoNotifyException` call.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ExceptionDoc {
    pub title: String,
    pub message: String,
}

/// An enum or flags set with its value names.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct EnumDoc {
    pub name: String,
    pub description: String,
    pub values: Vec<String>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct MethodDoc {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterDoc>,
    pub return_type: TokenSequence,
    pub is_static: bool,
    pub exceptions: Vec<ExceptionDoc>,
}

impl MethodDoc {
    pub fn new(name: impl Into<String>) -> Self {
        MethodDoc {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the return type from raw type text.
    #[must_use]
    pub fn returning(mut self, type_text: &str) -> Self {
        self.return_type = zdoc_lexer::tokenize(type_text);
        self
    }

    /// Append a parameter from raw type text.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, type_text: &str) -> Self {
        self.parameters.push(ParameterDoc {
            name: name.into(),
            description: String::new(),
            tokens: zdoc_lexer::tokenize(type_text),
        });
        self
    }

    pub fn signature(&self) -> MethodSignature<'_> {
        MethodSignature {
            name: &self.name,
            parameters: self.parameters.iter().map(|p| &p.tokens).collect(),
            return_type: &self.return_type,
        }
    }

    /// Record an exception unless an equal one is already listed.
    pub fn add_exception(&mut self, exception: ExceptionDoc) -> bool {
        if self.exceptions.contains(&exception) {
            return false;
        }
        self.exceptions.push(exception);
        true
    }

    pub(crate) fn normalize(&mut self, typedefs: &ExpandedTypedefs, namespace: &NamespacePath) {
        typedefs.normalize(&mut self.return_type, namespace);
        for parameter in &mut self.parameters {
            typedefs.normalize(&mut parameter.tokens, namespace);
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct PropertyDoc {
    pub name: String,
    pub description: String,
    pub tokens: TokenSequence,
    pub read_only: bool,
    pub is_static: bool,
}

impl PropertyDoc {
    pub fn new(name: impl Into<String>, type_text: &str) -> Self {
        PropertyDoc {
            name: name.into(),
            tokens: zdoc_lexer::tokenize(type_text),
            ..Self::default()
        }
    }
}
