//! Output path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the output directory.
pub const OUTPUT_DIR_ENV_VAR: &str = "PDP_BENCHMARKS_DIR";

/// Directory import files are written to when no directory is given.
///
/// Resolution order:
/// 1. `PDP_BENCHMARKS_DIR` environment variable
/// 2. the current directory
pub fn output_root() -> PathBuf {
    match std::env::var(OUTPUT_DIR_ENV_VAR) {
        Ok(root) if !root.trim().is_empty() => PathBuf::from(root),
        _ => PathBuf::from("."),
    }
}

/// Path a generator writes to.
///
/// The file name is `output_file` when given, else `default_file`. It is
/// placed in `output_dir`, falling back to [`output_root`]. An absolute
/// `output_file` ignores the directory.
pub fn resolve_output_path(
    output_dir: Option<&Path>,
    output_file: Option<&Path>,
    default_file: &str,
) -> PathBuf {
    let root = output_dir.map_or_else(output_root, Path::to_path_buf);
    match output_file {
        Some(file) => root.join(file),
        None => root.join(default_file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_replaces_default_name() {
        let path = resolve_output_path(
            Some(Path::new("out")),
            Some(Path::new("custom.json")),
            "rugby-benchmarks-IMPORT.json",
        );
        assert_eq!(path, Path::new("out").join("custom.json"));
    }

    #[test]
    fn absolute_file_ignores_output_dir() {
        let absolute = std::env::temp_dir().join("custom.json");
        let path = resolve_output_path(
            Some(Path::new("out")),
            Some(&absolute),
            "rugby-benchmarks-IMPORT.json",
        );
        assert_eq!(path, absolute);
    }

    #[test]
    fn default_file_goes_into_output_dir() {
        let path = resolve_output_path(Some(Path::new("out")), None, "rugby-benchmarks-IMPORT.json");
        assert_eq!(path, Path::new("out").join("rugby-benchmarks-IMPORT.json"));
    }
}
