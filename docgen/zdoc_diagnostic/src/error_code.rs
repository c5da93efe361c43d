//! Error codes for all pipeline diagnostics.
//!
//! Format: a letter and four digits. `E` codes are hard failures, `W` codes
//! are warnings. The first digit names the phase:
//! - x0xxx: Input loading
//! - x1xxx: Typedef database
//! - x2xxx: Class library

use std::fmt;

/// Error codes for all pipeline diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Document set could not be read or parsed
    E0001,
    /// Typedef table could not be read or parsed
    E0002,
    /// Output could not be written
    E0003,

    /// Duplicate typedef key
    W1001,
    /// Typedef cycle
    W1002,

    /// Duplicate class name
    W2001,
    /// Missing description
    W2002,
    /// Source comment matches no declared method
    W2003,
}

impl ErrorCode {
    /// All error codes, in declaration order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::W1001,
        ErrorCode::W1002,
        ErrorCode::W2001,
        ErrorCode::W2002,
        ErrorCode::W2003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::W1001 => "W1001",
            ErrorCode::W1002 => "W1002",
            ErrorCode::W2001 => "W2001",
            ErrorCode::W2002 => "W2002",
            ErrorCode::W2003 => "W2003",
        }
    }

    /// Short description used in summaries.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unreadable document set",
            ErrorCode::E0002 => "unreadable typedef table",
            ErrorCode::E0003 => "unwritable output",
            ErrorCode::W1001 => "duplicate typedef",
            ErrorCode::W1002 => "typedef cycle",
            ErrorCode::W2001 => "duplicate class",
            ErrorCode::W2002 => "missing description",
            ErrorCode::W2003 => "unmatched source comment",
        }
    }

    /// Returns `true` for warning codes.
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"W1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
