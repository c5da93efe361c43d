//! zdoc documentation build driver.
//!
//! The binary in `main.rs` is a thin argument parser over [`commands`]; the
//! build itself is [`run_pipeline`], usable without touching the filesystem.

pub mod commands;
mod error;
mod pipeline;
mod tracing_setup;

pub use error::{BuildError, LoadError};
pub use pipeline::{expand_typedefs, run_pipeline, PipelineInput, PipelineOutput};
pub use tracing_setup::{init_tracing, TRACE_TREE_ENV};
