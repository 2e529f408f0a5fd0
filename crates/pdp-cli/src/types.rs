use std::path::PathBuf;

use pdp_model::{Sport, ValidationReport};
use pdp_output::ExportSummary;

/// Settings threaded from the command line into a generator run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Directory for import files (falls back to `PDP_BENCHMARKS_DIR`).
    pub output_dir: Option<PathBuf>,
    /// Replaces the generator's default file name.
    pub output_file: Option<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct SportRun {
    pub sport: Sport,
    pub export: ExportSummary,
    pub validation: ValidationReport,
    /// Set when validation errors kept the file from being written.
    pub blocked: bool,
}

impl SportRun {
    pub fn has_errors(&self) -> bool {
        self.blocked || self.validation.has_errors()
    }
}

#[derive(Debug)]
pub struct CheckResult {
    pub path: PathBuf,
    pub report: ValidationReport,
}
