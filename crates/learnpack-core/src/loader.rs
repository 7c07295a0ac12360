//! Pack file loading.
//!
//! Reads pack JSON from disk and runs it through [`validate_pack`]. Invalid
//! pack content is returned as a [`ValidationResult`]; only I/O failures and
//! unparseable JSON are errors.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::validate::{validate_pack, ValidationResult};

/// Parse and validate a single pack file.
pub fn load_pack_file(path: &Path) -> Result<ValidationResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pack file: {}", path.display()))?;

    load_pack_str(&content, path)
}

/// Parse and validate pack JSON (useful for testing).
pub fn load_pack_str(content: &str, source_path: &Path) -> Result<ValidationResult> {
    let value: serde_json::Value = serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;

    Ok(validate_pack(&value))
}

/// Recursively load every `.json` pack under a directory, sorted by path.
///
/// Files that cannot be read or are not JSON are skipped with a warning.
pub fn load_pack_directory(dir: &Path) -> Result<Vec<(PathBuf, ValidationResult)>> {
    let mut packs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            packs.extend(load_pack_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            match load_pack_file(&path) {
                Ok(result) => packs.push((path, result)),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(packs)
}
