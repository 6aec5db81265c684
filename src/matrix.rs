//! Distribution-matrix data model
//!
//! The matrix document maps OS names to build configurations. Unknown
//! attributes at every level round-trip verbatim, and object key order is
//! preserved end to end (serde_json is built with `preserve_order`).

use anyhow::{bail, Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

/// A single build entry inside an OS's `include` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEntry {
    /// Architecture/variant identifier this entry builds
    pub duckdb_arch: String,

    /// Remaining entry attributes, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-OS build configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsConfig {
    /// Build entries this OS contributes to the overall matrix.
    ///
    /// `None` means the attribute is absent from the document; it is never
    /// serialized as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<MatrixEntry>>,

    /// Remaining config attributes, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The top-level matrix: an ordered mapping of OS name to [`OsConfig`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    configs: Vec<(String, OsConfig)>,
}

impl Matrix {
    /// Load and parse a matrix from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            bail!("Input file not found: {}", path_ref.display());
        }

        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read input file: {}", path_ref.display()))?;

        let matrix: Matrix = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid matrix JSON in {}", path_ref.display()))?;

        Ok(matrix)
    }

    /// Look up a single OS config by name
    pub fn get(&self, os: &str) -> Option<&OsConfig> {
        self.configs
            .iter()
            .find(|(name, _)| name == os)
            .map(|(_, config)| config)
    }

    /// Append an OS config, keeping insertion order
    pub fn insert(&mut self, os: impl Into<String>, config: OsConfig) {
        self.configs.push((os.into(), config));
    }

    /// Iterate OS configs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OsConfig)> {
        self.configs.iter().map(|(os, config)| (os.as_str(), config))
    }

    /// Iterate OS configs mutably, in document order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut OsConfig)> {
        self.configs
            .iter_mut()
            .map(|(os, config)| (os.as_str(), config))
    }

    /// Number of top-level OS keys
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

// The top level is serialized by hand so OS keys keep their document order
// exactly, with typed OsConfig values underneath.
impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.configs.len()))?;
        for (os, config) in &self.configs {
            map.serialize_entry(os, config)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MatrixVisitor;

        impl<'de> Visitor<'de> for MatrixVisitor {
            type Value = Matrix;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object mapping OS names to build configurations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Matrix, A::Error> {
                let mut configs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((os, config)) = access.next_entry::<String, OsConfig>()? {
                    configs.push((os, config));
                }
                Ok(Matrix { configs })
            }
        }

        deserializer.deserialize_map(MatrixVisitor)
    }
}
