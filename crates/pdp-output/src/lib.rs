#![deny(unsafe_code)]

//! Writing benchmark import files.
//!
//! The exporter serializes `{ "benchmarks": [...] }` pretty-printed with
//! two-space indentation and no trailing newline, overwriting whatever is
//! at the target path.

pub mod error;
pub mod hash;
pub mod json;
pub mod paths;
pub mod summary;

pub use error::{OutputError, Result};
pub use hash::sha256_hex;
pub use json::{export, read_document, render};
pub use paths::{OUTPUT_DIR_ENV_VAR, output_root, resolve_output_path};
pub use summary::{BenchmarkSummary, ExportSummary};
