//! Rule catalog loading.
//!
//! Catalogs come from the built-in tables unless a JSON override file is
//! configured. Override files hold a plain array of rules; the domain's
//! catalog invariants are enforced while deserializing.

use std::path::{Path, PathBuf};

use pokedream_domain::{DomainError, RuleCatalog};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
    #[error("Invalid catalog {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Load the catalog at `path`, or build `builtin` when no path is given.
pub async fn load_catalog(
    path: Option<&Path>,
    builtin: fn() -> Result<RuleCatalog, DomainError>,
) -> Result<RuleCatalog, CatalogLoadError> {
    let Some(path) = path else {
        return Ok(builtin()?);
    };

    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| CatalogLoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let catalog: RuleCatalog =
        serde_json::from_str(&raw).map_err(|e| CatalogLoadError::Invalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::info!(
        path = %path.display(),
        rules = catalog.len(),
        "Loaded rule catalog override"
    );
    Ok(catalog)
}
