//! Matrix filtering and OS selection
//!
//! Supports:
//! - Dropping entries by architecture: --exclude linux_arm64;windows_amd64
//! - Narrowing the output to one OS subtree: --select_os windows

use crate::matrix::Matrix;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Set of `duckdb_arch` values to drop from every `include` list
#[derive(Debug, Clone)]
pub struct ArchExclusions {
    excluded: HashSet<String>,
}

impl ArchExclusions {
    /// Parse a semicolon-separated exclusion list, e.g. "linux_arm64;osx_arm64".
    ///
    /// Segments are taken verbatim; an empty segment (trailing `;`) simply
    /// never matches an architecture.
    pub fn from_expr(expr: &str) -> Self {
        let excluded = expr.split(';').map(str::to_string).collect();
        Self { excluded }
    }

    /// Check if an architecture value should be dropped
    pub fn is_excluded(&self, arch: &str) -> bool {
        self.excluded.contains(arch)
    }
}

/// Remove excluded entries from every OS's `include` list, in place.
///
/// The filter is stable: surviving entries keep their order. A list that
/// ends up empty is removed from its config altogether, though the OS key
/// itself survives. A config that never had an `include` attribute is left
/// unchanged rather than treated as an error.
pub fn filter_matrix(matrix: &mut Matrix, exclusions: &ArchExclusions) {
    for (os, config) in matrix.iter_mut() {
        let Some(entries) = config.include.take() else {
            continue;
        };

        let before = entries.len();
        let kept: Vec<_> = entries
            .into_iter()
            .filter(|entry| !exclusions.is_excluded(&entry.duckdb_arch))
            .collect();

        if before != kept.len() {
            tracing::debug!("{}: dropped {} of {} entries", os, before - kept.len(), before);
        }

        if kept.is_empty() {
            tracing::debug!("{}: include list emptied, removing attribute", os);
        } else {
            config.include = Some(kept);
        }
    }
}

/// Narrow the filtered matrix to a single OS config when one is requested.
///
/// A matching name yields that config unwrapped from the outer mapping. An
/// unmatched name is not an error: the full matrix comes back unchanged.
pub fn select_os(matrix: &Matrix, os_name: Option<&str>) -> Result<Value> {
    if let Some(name) = os_name {
        if let Some(config) = matrix.get(name) {
            tracing::debug!("selected OS config: {}", name);
            return serde_json::to_value(config).context("Failed to serialize OS config");
        }
        tracing::debug!("no OS key matches {:?}, keeping full matrix", name);
    }
    serde_json::to_value(matrix).context("Failed to serialize matrix")
}
