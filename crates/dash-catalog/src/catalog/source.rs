//! Catalog sources.

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Where a catalog comes from.
///
/// A source is consulted once at start-up; the catalog it returns is never
/// altered afterwards.
pub trait CatalogSource {
    /// Load the full catalog.
    fn load(&self) -> Result<Catalog, CatalogError>;

    /// Human-readable description for logs and reports.
    fn describe(&self) -> String;
}

/// The static catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(Catalog::builtin().clone())
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

/// A JSON file containing an array of products.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::load(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_source() {
        let catalog = BuiltinSource.load().unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().len());
        assert_eq!(BuiltinSource.describe(), "built-in catalog");
    }

    #[test]
    fn test_json_source_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("dash-catalog-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"sku": 1, "name": "Sonance - VP62", "category": "In-Wall Speakers", "regularPrice": 350}]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let catalog = source.load().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].listed_price(), Some(350.0));
        assert!(source.describe().ends_with("catalog.json"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
