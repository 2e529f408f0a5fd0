//! Generate, validate and export one sport.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use pdp_core::{BenchmarkGenerator, validate_records};
use pdp_output::{export, read_document, resolve_output_path};

use crate::types::{CheckResult, GenerateOptions, SportRun};

/// Runs a generator end to end.
///
/// Generated records are validated before export. Validation errors block
/// the write; the summary is still computed so the caller can report it.
pub fn run_generator(
    generator: &dyn BenchmarkGenerator,
    options: &GenerateOptions,
) -> Result<SportRun> {
    let sport = generator.sport();
    let span = info_span!("sport", sport = sport.code());
    let _guard = span.enter();
    let start = Instant::now();

    let records = generator.generate();
    let validation = validate_records(&records);
    let blocked = validation.has_errors();
    if blocked {
        warn!(
            errors = validation.error_count(),
            "generated benchmarks failed validation, output blocked"
        );
    } else if !validation.is_clean() {
        warn!(
            warnings = validation.warning_count(),
            "generated benchmarks have validation warnings"
        );
    }

    let path = resolve_output_path(
        options.output_dir.as_deref(),
        options.output_file.as_deref(),
        generator.default_file_name(),
    );
    let export = export(&records, &path, options.dry_run || blocked)
        .with_context(|| format!("export {} benchmarks", sport.code()))?;
    info!(
        records = export.records,
        sha256 = %export.sha256,
        duration_ms = start.elapsed().as_millis(),
        "sport complete"
    );

    Ok(SportRun {
        sport,
        export,
        validation,
        blocked,
    })
}

/// Reads an import file and validates its records.
pub fn check_file(path: &Path) -> Result<CheckResult> {
    let document = read_document(path).with_context(|| format!("check {}", path.display()))?;
    let report = validate_records(&document.benchmarks);
    info!(
        path = %path.display(),
        records = report.records,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "check complete"
    );
    Ok(CheckResult {
        path: path.to_path_buf(),
        report,
    })
}
