//! The `build` command: document set in, trimmed library out.

use std::path::{Path, PathBuf};

use crate::commands::{load_doc_set, load_ignore_list, load_table};
use crate::pipeline::{run_pipeline, PipelineInput, PipelineOutput};
use crate::BuildError;

/// Environment variable naming the default typedef table.
pub const TYPEDEFS_ENV: &str = "ZDOC_TYPEDEFS";

/// Options of `zdoc build`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Output file (-o). Stdout when absent.
    pub output: Option<PathBuf>,
    /// Typedef table to load (--typedefs=<path>)
    pub typedefs: Option<PathBuf>,
    /// Write the expanded typedef table here (--emit-typedefs=<path>)
    pub emit_typedefs: Option<PathBuf>,
    /// Names left out of the report (--ignore=<path>)
    pub ignore: Option<PathBuf>,
    /// Skip the missing-description report (--no-report)
    pub no_report: bool,
}

impl BuildOptions {
    /// Merge another set of options into this one. Present values win.
    pub fn merge(&mut self, other: &Self) {
        if other.output.is_some() {
            self.output.clone_from(&other.output);
        }
        if other.typedefs.is_some() {
            self.typedefs.clone_from(&other.typedefs);
        }
        if other.emit_typedefs.is_some() {
            self.emit_typedefs.clone_from(&other.emit_typedefs);
        }
        if other.ignore.is_some() {
            self.ignore.clone_from(&other.ignore);
        }
        self.no_report |= other.no_report;
    }

    /// Fill the typedef table from `ZDOC_TYPEDEFS` unless one was given.
    #[must_use]
    pub fn with_env_defaults(mut self) -> Self {
        if self.typedefs.is_none() {
            self.typedefs = std::env::var_os(TYPEDEFS_ENV).map(PathBuf::from);
        }
        self
    }
}

/// Parse `--flag` style options. `-o <path>` takes a separate argument and
/// is handled by the caller.
pub fn parse_build_options(args: &[String]) -> BuildOptions {
    let mut options = BuildOptions::default();

    for arg in args {
        if let Some(path) = arg.strip_prefix("--typedefs=") {
            options.typedefs = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--emit-typedefs=") {
            options.emit_typedefs = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--ignore=") {
            options.ignore = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(path));
        } else if arg == "--no-report" {
            options.no_report = true;
        } else {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

/// Counts shown after a build.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub classes: usize,
    pub events: usize,
    pub typedefs: usize,
    pub missing_descriptions: usize,
    pub warnings: usize,
}

/// Run a full build of the document set at `input`.
///
/// The trimmed library is written to `options.output`. Without an output
/// path its JSON is returned for the caller to print.
pub fn build_docs(input: &Path, options: &BuildOptions) -> Result<(BuildSummary, Option<String>), BuildError> {
    let doc_set = load_doc_set(input)?;
    let table = load_table(options.typedefs.as_deref())?;
    let ignore = options.ignore.as_deref().map(load_ignore_list).transpose()?;

    let output = run_pipeline(
        &doc_set,
        PipelineInput {
            table,
            ignore,
            no_report: options.no_report,
        },
    );
    crate::commands::print_diagnostics(&output.diagnostics);

    if let Some(path) = &options.emit_typedefs {
        output.typedefs.to_table().save(path)?;
        tracing::info!(path = %path.display(), "wrote typedef table");
    }

    let summary = summarize(&output);
    let json = output.trimmed.to_json()?;
    match &options.output {
        Some(path) => {
            std::fs::write(path, json).map_err(|source| BuildError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote library");
            Ok((summary, None))
        }
        None => Ok((summary, Some(json))),
    }
}

fn summarize(output: &PipelineOutput) -> BuildSummary {
    BuildSummary {
        classes: output.trimmed.classes.len(),
        events: output.trimmed.events.len(),
        typedefs: output.typedefs.len(),
        missing_descriptions: output.missing_descriptions,
        warnings: output.diagnostics.warning_count(),
    }
}
