//! Catalog data files.

use std::path::Path;

use tracing::debug;

use pixel_guess_core::types::CatalogKind;
use pixel_guess_core::{Catalog, GameError, Result};

/// Flat list of every character name, offered by the autocomplete.
pub const CHARACTER_NAMES_FILE: &str = "champions_list.json";

/// Catalog document for a game mode, relative to the asset root.
pub fn catalog_file_name(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Characters => "game_data.json",
        CatalogKind::Items => "items_data.json",
    }
}

/// Load and parse the catalog for `kind` from `root`.
///
/// Character catalogs also load the name list. Any unreadable or malformed
/// file is a [`GameError::DataLoad`].
pub fn load_catalog(root: &Path, kind: CatalogKind) -> Result<Catalog> {
    let json = read(root, catalog_file_name(kind))?;
    let mut catalog = Catalog::from_json(kind, &json)?;

    if kind == CatalogKind::Characters {
        let names = Catalog::names_from_json(&read(root, CHARACTER_NAMES_FILE)?)?;
        catalog = catalog.with_names(names);
    }

    debug!(kind = kind.as_str(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn read(root: &Path, file: &str) -> Result<String> {
    let path = root.join(file);
    std::fs::read_to_string(&path).map_err(|e| GameError::data_load(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_guess_core::types::Category;
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, content: &str) {
        std::fs::write(dir.path().join(file), content).unwrap();
    }

    #[test]
    fn loads_characters_with_name_list() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "game_data.json",
            r#"{"images":[
                {"file":"Ashe_0.jpg","champion":"Ashe","category":"default"},
                {"file":"Ashe_1.jpg","champion":"Ashe","category":"skin"}
            ]}"#,
        );
        write(&dir, "champions_list.json", r#"["Ashe","Annie","Kai'Sa"]"#);

        let catalog = load_catalog(dir.path(), CatalogKind::Characters).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[1].category, Category::Extended);
        assert_eq!(catalog.names().unwrap().len(), 3);
    }

    #[test]
    fn loads_items_without_name_list() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "items_data.json",
            r#"{"images":[{"file":"1001.png","name":"Boots","category":"classique"}]}"#,
        );
        let catalog = load_catalog(dir.path(), CatalogKind::Items).unwrap();
        assert_eq!(catalog.entries()[0].name, "Boots");
        assert!(catalog.names().is_none());
    }

    #[test]
    fn missing_or_malformed_files_are_data_load_errors() {
        let dir = TempDir::new().unwrap();
        let err = load_catalog(dir.path(), CatalogKind::Items).unwrap_err();
        assert!(matches!(err, GameError::DataLoad { .. }));

        write(&dir, "game_data.json", r#"{"images":[]}"#);
        // Name list still missing.
        let err = load_catalog(dir.path(), CatalogKind::Characters).unwrap_err();
        assert!(err.to_string().contains("champions_list.json"));

        write(
            &dir,
            "items_data.json",
            r#"{"images":[{"file":"x.png","name":"X","category":"mythic"}]}"#,
        );
        let err = load_catalog(dir.path(), CatalogKind::Items).unwrap_err();
        assert!(matches!(err, GameError::DataLoad { .. }));
    }
}
