//! Product catalogs.
//!
//! A catalog is a JSON array of products:
//!
//! ```text
//! [
//!   { "name": "Apple", "color": "green", "size": "small" },
//!   { "name": "House", "color": "blue",  "size": "large" }
//! ]
//! ```

use crate::error::{Result, SiftError};
use crate::model::{Color, Product, Size};
use std::fs;
use std::path::Path;

/// The built-in catalog used when none is configured.
pub fn sample() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

/// Load a catalog from a JSON file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path.as_ref()).map_err(SiftError::Io)?;
    let products: Vec<Product> =
        serde_json::from_str(&content).map_err(SiftError::Serialization)?;
    tracing::debug!(
        "Loaded {} products from {}",
        products.len(),
        path.as_ref().display()
    );
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sample_has_three_products_in_order() {
        let names: Vec<_> = sample().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Apple", "Tree", "House"]);
    }

    #[test]
    fn load_reads_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"name":"Sky","color":"blue","size":"large"},{"name":"Leaf","color":"green","size":"small"}]"#,
        )
        .unwrap();

        let products = load(&path).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0], Product::new("Sky", Color::Blue, Size::Large));
    }

    #[test]
    fn load_rejects_unknown_color() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"name":"Grape","color":"purple","size":"small"}]"#,
        )
        .unwrap();

        assert!(matches!(load(&path), Err(SiftError::Serialization(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path().join("nope.json")).unwrap_err();
        assert!(err.is_not_found());
    }
}
