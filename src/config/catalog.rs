//! Programme catalog configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Catalog configuration. Without a path the built-in 12-week plan is served.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// YAML catalog file
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.path.as_ref().and_then(|p| p.extension()) {
            None if self.path.is_none() => Ok(()),
            Some(ext) if ext == "yaml" || ext == "yml" => Ok(()),
            _ => Err(ValidationError::InvalidCatalogPath),
        }
    }
}
