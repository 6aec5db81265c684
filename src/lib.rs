//! matrix-prune - CI distribution-matrix filtering
//!
//! This library provides the core functionality for pruning a statically
//! defined build-matrix JSON document: dropping entries with excluded
//! `duckdb_arch` values, removing `include` lists that end up empty, and
//! optionally narrowing the output to a single OS subtree.

pub mod cli;
pub mod filter;
pub mod json_output;
pub mod matrix;
