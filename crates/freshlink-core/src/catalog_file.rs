use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::listing::{validate_listings, Product, Vendor};
use crate::ConfigError;

/// Catalog records loaded from YAML in place of the built-in mocks.
///
/// Vendors with `coordinates` also appear on the map page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

impl CatalogFile {
    /// Vendors that can be placed on the map.
    #[must_use]
    pub fn map_vendors(&self) -> Vec<Vendor> {
        self.vendors
            .iter()
            .filter(|v| v.coordinates.is_some())
            .cloned()
            .collect()
    }
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog_file(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    validate_catalog_file(&catalog)?;

    Ok(catalog)
}

fn validate_catalog_file(catalog: &CatalogFile) -> Result<(), ConfigError> {
    validate_listings(&catalog.products)
        .map_err(|reason| ConfigError::Validation(format!("products: {reason}")))?;
    validate_listings(&catalog.vendors)
        .map_err(|reason| ConfigError::Validation(format!("vendors: {reason}")))?;

    if let Some(blank) = catalog
        .products
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .chain(catalog.vendors.iter().map(|v| (v.id, v.name.as_str())))
        .find(|(_, name)| name.trim().is_empty())
    {
        return Err(ConfigError::Validation(format!(
            "listing {} has an empty name",
            blank.0
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const VALID: &str = r#"
products:
  - id: 1
    name: Tomate Orgânico
    vendor: Fazenda Verde
    vendor_id: 1
    vendor_distance: 0.8
    price: "8.50"
    unit: kg
    image: https://images.example.com/tomate.jpg
    distance: 0.8
    rating: 4.8
    review_count: 45
    available: true
    is_organic: true
    category: organicos
    categories: [Orgânicos, Legumes]
vendors:
  - id: 1
    name: Fazenda Verde
    image: https://images.example.com/fazenda.jpg
    rating: 4.8
    review_count: 127
    distance: 0.8
    location: Vila Madalena
    is_open: true
    hours: "6:00 - 18:00"
    phone: "11987654321"
    product_count: 24
    coordinates: { lat: -23.5505, lng: -46.6333 }
  - id: 2
    name: Hortifruti do João
    image: https://images.example.com/joao.jpg
    rating: 4.6
    review_count: 89
    distance: 1.2
    location: Pinheiros
    is_open: true
    hours: "7:00 - 19:00"
    phone: "11987654322"
    product_count: 18
"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_valid_catalog() {
        let file = write_temp(VALID);
        let catalog = load_catalog_file(file.path()).expect("valid catalog");
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.vendors.len(), 2);
        assert_eq!(catalog.map_vendors().len(), 1);
        assert_eq!(catalog.products[0].categories, vec!["Orgânicos", "Legumes"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog_file(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let file = write_temp("products: [ {id: ");
        let err = load_catalog_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileParse(_)));
    }

    #[test]
    fn duplicate_vendor_ids_fail_validation() {
        let file = write_temp(&VALID.replace(
            "  - id: 2\n    name: Hortifruti",
            "  - id: 1\n    name: Hortifruti",
        ));
        let err = load_catalog_file(file.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.starts_with("vendors:")),
            "got: {err:?}"
        );
    }
}
