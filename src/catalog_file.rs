//! Tile catalog loading.
//!
//! The binary plays with the built-in fruit catalog unless
//! `TILE_MATCH_CATALOG` names a JSON file of the form
//! `{"tiles": [{"id": 0, "name": "apple", "category": "item"}, ..]}`.
//! A file that cannot be read or fails validation stops startup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use tile_match_core::Catalog;

pub const CATALOG_ENV: &str = "TILE_MATCH_CATALOG";

/// Load the catalog at `path`, or the built-in one when there is none
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("invalid tile catalog {}", path.display()))?;
    info!(
        path = %path.display(),
        variants = catalog.variants().len(),
        block = %catalog.block().name,
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load the catalog named by `TILE_MATCH_CATALOG`
pub fn catalog_from_env() -> Result<Catalog> {
    let path = std::env::var_os(CATALOG_ENV);
    load_catalog(path.as_deref().map(Path::new))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tile-match-catalog-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn no_path_gives_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.variants(), Catalog::builtin().variants());
    }

    #[test]
    fn file_catalog_loads() {
        let path = temp_path("gems");
        fs::write(
            &path,
            r#"{"tiles": [
                {"id": 0, "name": "ruby", "category": "item"},
                {"id": 1, "name": "sapphire", "category": "item"},
                {"id": 2, "name": "emerald", "category": "item"},
                {"id": 3, "name": "topaz", "category": "item"},
                {"id": 9, "name": "rock", "category": "block", "swappable": false}
            ]}"#,
        )
        .unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();

        assert_eq!(catalog.items().count(), 4);
        assert_eq!(catalog.block().name, "rock");
        assert_eq!(catalog.active_items(4).unwrap()[0].name, "ruby");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn catalog_without_block_is_rejected() {
        let path = temp_path("no-block");
        fs::write(
            &path,
            r#"{"tiles": [
                {"id": 0, "name": "ruby", "category": "item"},
                {"id": 1, "name": "sapphire", "category": "item"},
                {"id": 2, "name": "emerald", "category": "item"},
                {"id": 3, "name": "topaz", "category": "item"}
            ]}"#,
        )
        .unwrap();

        let err = load_catalog(Some(&path)).unwrap_err();

        assert!(err.to_string().contains("invalid tile catalog"), "{err:#}");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        assert!(load_catalog(Some(&path)).is_err());
    }
}
