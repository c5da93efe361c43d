//! Class documentation library.
//!
//! # Architecture
//!
//! ```text
//! raw::DocSet ──► Library (ClassDoc table + EventList)
//!                   │  normalize_all_types(&ExpandedTypedefs)
//!                   │  fill_matching_method / fill_overload_descriptions
//!                   │  scan_header_lines / scan_source_lines
//!                   ▼
//!              TrimmedLibrary ──► report::missing_descriptions
//! ```
//!
//! Every type comparison goes through the signature matcher in
//! [`signature`], on tokens that have already been normalized against an
//! [`ExpandedTypedefs`](zdoc_typedefs::ExpandedTypedefs).

mod call_args;
mod class;
mod doc;
mod events;
mod library;
mod merge;
pub mod raw;
pub mod report;
pub mod signature;
mod source;
pub mod trim;

pub use call_args::argument_if_string;
pub use class::ClassDoc;
pub use doc::{EnumDoc, ExceptionDoc, MethodDoc, ParameterDoc, PropertyDoc};
pub use events::{detect_event_call, EventCallSite, EventDoc, EventList, EventRole, EVENT_CALL_SITES};
pub use library::{BaseChain, FillOutcome, Library};
pub use merge::merge_method;
pub use signature::{match_signatures, MethodSignature, SignatureMatch};
pub use source::SourceSummary;
