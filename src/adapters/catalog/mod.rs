//! Catalog loader - reads a YAML programme catalog from disk.
//!
//! Without a configured path the built-in 12-week plan is used.

use std::path::Path;

use tokio::fs;

use crate::domain::program::{parse_catalog_yaml, reference_program, CatalogError, Program};

/// Loads the programme from `path`, or the built-in plan when `path` is `None`.
pub async fn load_program(path: Option<&Path>) -> Result<Program, CatalogError> {
    let Some(path) = path else {
        tracing::info!("Using built-in programme catalog");
        return Ok(reference_program().clone());
    };

    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
    let program = parse_catalog_yaml(&yaml)?;

    tracing::info!(
        path = %path.display(),
        segments = program.len(),
        activities = program.total_activities(),
        "Loaded programme catalog"
    );
    Ok(program)
}
