//! Typedef database and normalizer.
//!
//! # Lifecycle
//!
//! ```text
//! TypedefDatabase::insert (many)      building, duplicates rejected
//!     │
//!     ▼
//! TypedefDatabase::expand_all         sort, then closure to a fixed point
//!     │
//!     ▼
//! ExpandedTypedefs::normalize         per-declaration expansion, read-only
//! ```
//!
//! Declaration normalization is only reachable through [`ExpandedTypedefs`],
//! so class members and signatures are always compared against fully
//! expanded definitions, never raw aliases.
//!
//! # Lookup
//!
//! A bare name `T` inside namespaces `[n0, .., nk]` is looked up under `T`,
//! `n0T`, `n0n1T`, .. in that order and the first key present wins. That hit
//! is then checked against the redundancy and alias-pattern guards in
//! [`lookup`](crate::lookup()).

mod closure;
mod database;
mod entry;
mod normalize;
mod table;

pub use closure::{ClosureReport, ExpandedTypedefs};
pub use database::TypedefDatabase;
pub use entry::TypedefEntry;
pub use normalize::{lookup, Guard, Lookup};
pub use table::{TableError, TypedefRecord, TypedefTable};
