//! JSON rendering and file export.

use std::fs;
use std::path::Path;

use pdp_model::{BenchmarkDocument, BenchmarkRecord};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{OutputError, Result};
use crate::hash::sha256_hex;
use crate::summary::{BenchmarkSummary, ExportSummary};

#[derive(Serialize)]
struct DocumentRef<'a> {
    benchmarks: &'a [BenchmarkRecord],
}

/// Serializes records exactly as [`export`] writes them.
pub fn render(records: &[BenchmarkRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&DocumentRef {
        benchmarks: records,
    })?)
}

/// Writes the import file at `path`, replacing any existing file.
///
/// Missing parent directories are created. With `dry_run` the bytes are
/// rendered and summarized but nothing touches the filesystem.
pub fn export(records: &[BenchmarkRecord], path: &Path, dry_run: bool) -> Result<ExportSummary> {
    let bytes = render(records)?;
    let summary = ExportSummary {
        path: path.to_path_buf(),
        records: records.len(),
        bytes: bytes.len(),
        sha256: sha256_hex(&bytes),
        counts: BenchmarkSummary::from_records(records),
        dry_run,
    };
    if dry_run {
        debug!(path = %path.display(), records = records.len(), "dry run, skipping write");
        return Ok(summary);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::write(parent, source))?;
    }
    fs::write(path, &bytes).map_err(|source| OutputError::write(path, source))?;
    info!(
        path = %path.display(),
        records = summary.records,
        bytes = summary.bytes,
        "benchmarks written"
    );
    Ok(summary)
}

/// Reads an import file back.
pub fn read_document(path: &Path) -> Result<BenchmarkDocument> {
    let contents = fs::read_to_string(path).map_err(|source| OutputError::read(path, source))?;
    BenchmarkDocument::from_json_str(&contents).map_err(|source| OutputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
