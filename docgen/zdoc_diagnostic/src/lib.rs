//! Diagnostic system for the documentation pipeline.
//!
//! Every finding the engine makes (duplicate typedefs, typedef cycles,
//! undocumented members) is a [`Diagnostic`] with a stable [`ErrorCode`].
//! Diagnostics are non-fatal: they are collected in a [`DiagnosticQueue`]
//! and logged through `tracing` as they arrive. Only failure to read the
//! inputs aborts a build, and that travels as a `Result` error instead.

mod diagnostic;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
