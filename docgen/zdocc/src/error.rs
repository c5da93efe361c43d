//! Hard failures of a build: inputs that cannot be read or outputs that
//! cannot be written. Everything else is a diagnostic.

use std::io;
use std::path::PathBuf;

use zdoc_typedefs::TableError;

/// An input file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse document set `{}`: {source}", .path.display())]
    DocSet {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot parse ignore list `{}`: {source}", .path.display())]
    IgnoreList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Any failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("cannot write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Table(#[from] TableError),
}

impl BuildError {
    /// Diagnostic code printed with the error.
    pub fn code(&self) -> zdoc_diagnostic::ErrorCode {
        use zdoc_diagnostic::ErrorCode;
        match self {
            BuildError::Load(LoadError::Table(_)) => ErrorCode::E0002,
            BuildError::Load(_) => ErrorCode::E0001,
            BuildError::Table(TableError::Write { .. }) | BuildError::Write { .. } | BuildError::Serialize(_) => {
                ErrorCode::E0003
            }
            BuildError::Table(_) => ErrorCode::E0002,
        }
    }
}
