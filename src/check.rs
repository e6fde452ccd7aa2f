//! Document Checker
//!
//! Loads documents from disk and runs them through a catalog specification.
//! Kept out of the binary so it can be driven from tests.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::specification::Specification;
use crate::value::Value;

/// Read a document, as TOML when the extension says so and JSON otherwise
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))
    }
}

/// Check a single document against `spec`
pub fn check_file(spec: &Specification, path: &Path) -> Result<bool> {
    let document = load_document(path)?;
    let valid = spec
        .validate(&document)
        .with_context(|| format!("cannot check {}", path.display()))?;
    log::info!(
        "{}: {}",
        path.display(),
        if valid { "valid" } else { "invalid" }
    );
    Ok(valid)
}

/// Run the checker, writing one line per document to `out`.
///
/// Returns whether every document conforms.
pub fn run(config: &Config, catalog: &Catalog, out: &mut impl Write) -> Result<bool> {
    if config.list_only {
        for name in catalog.list() {
            writeln!(out, "{}", name)?;
        }
        return Ok(true);
    }

    let spec = catalog.get(&config.spec_name).with_context(|| {
        format!(
            "unknown specification '{}' (available: {})",
            config.spec_name,
            catalog.list().join(", ")
        )
    })?;

    let mut all_valid = true;
    for path in &config.files {
        let valid = check_file(&spec, path)?;
        writeln!(
            out,
            "{}: {}",
            path.display(),
            if valid { "valid" } else { "invalid" }
        )?;
        all_valid &= valid;
    }

    Ok(all_valid)
}
