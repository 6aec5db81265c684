//! JSON output rendering for the filtered matrix

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render a JSON document for the CI pipeline.
///
/// Pretty output uses 2-space indentation; compact output has no added
/// whitespace. Object key order follows the input document, never re-sorted.
pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("Failed to serialize output JSON")
}

/// Write the rendered document to a file, or stdout when no path is given.
///
/// No trailing newline is appended beyond what the serializer produced.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")
        }
    }
}
