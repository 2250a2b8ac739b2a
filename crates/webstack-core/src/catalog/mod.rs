//! Catalog loading and resolution
//!
//! This module provides:
//! - The forest data model (Node, Category, Dependency)
//! - The YAML catalog document format and its loader
//! - The built-in catalog and default constraint rules
//! - Version compatibility checking
//!
//! Resolution order for a session's catalog:
//! 1. an explicit `--catalog-file` path
//! 2. the `WEBSTACK_CATALOG` environment variable
//! 3. the built-in catalog

pub mod builtin;
pub mod model;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};

pub use builtin::{builtin_catalog, default_rules};
pub use model::{Catalog, CatalogFile, Category, Dependency, Node};
pub use version::check_compatibility;

/// Environment variable naming a catalog file to use by default
pub const CATALOG_ENV: &str = "WEBSTACK_CATALOG";

/// Resolve the catalog for a session
pub fn resolve_catalog(path: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = path {
        return load_catalog_file(path);
    }
    if let Ok(env_path) = std::env::var(CATALOG_ENV) {
        return load_catalog_file(Path::new(&env_path));
    }
    Ok(builtin::builtin_catalog())
}

/// Load a catalog document from a YAML file
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let file: CatalogFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    Ok(Catalog {
        version: file.version,
        nodes: file.catalog,
        rules: file.rules.unwrap_or_else(builtin::default_rules),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "version: 0.3.0\n\
             catalog:\n\
             \x20 - label: Frameworks\n\
             \x20   children:\n\
             \x20     - label: Vite\n\
             \x20       value: frontend-vite\n"
        )
        .unwrap();

        let catalog = load_catalog_file(file.path()).unwrap();
        assert_eq!(catalog.version, "0.3.0");
        assert_eq!(catalog.nodes.len(), 1);
        // No rules section: the built-in rules apply.
        assert!(catalog.rules.is_single_select("Frameworks"));
    }

    #[test]
    fn test_load_catalog_file_with_rules_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "version: 0.3.0\n\
             catalog: []\n\
             rules:\n\
             \x20 single_select: [Only]\n"
        )
        .unwrap();

        let catalog = load_catalog_file(file.path()).unwrap();
        assert!(catalog.rules.is_single_select("Only"));
        assert!(!catalog.rules.is_single_select("Frameworks"));
        assert!(catalog.rules.base_for("shadcn").is_none());
    }

    #[test]
    fn test_load_missing_catalog_file() {
        let err = load_catalog_file(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[test]
    fn test_resolve_catalog_defaults_to_builtin() {
        // No explicit path; the env var is not set in the test environment.
        if std::env::var(CATALOG_ENV).is_ok() {
            return;
        }
        let catalog = resolve_catalog(None).unwrap();
        assert!(!catalog.nodes.is_empty());
    }
}
