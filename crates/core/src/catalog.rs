//! Catalog module - the ordered list of tile variant definitions
//!
//! A catalog is loaded once at startup (from JSON or the built-in set) and
//! never changes afterwards. It must define exactly one Block variant and at
//! least [`MIN_TILE_TYPE_COUNT`] Item variants; anything else is rejected
//! before a board is ever built.
//!
//! JSON format:
//!
//! ```json
//! { "tiles": [
//!     { "id": 0, "name": "apple", "category": "item", "icon": "apple.png" },
//!     { "id": 8, "name": "stone", "category": "block", "swappable": false }
//! ] }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{Category, Tile, TileId, VariantId, MIN_TILE_TYPE_COUNT};

fn default_swappable() -> bool {
    true
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDef {
    pub id: VariantId,
    pub name: String,
    pub category: Category,
    #[serde(default = "default_swappable")]
    pub swappable: bool,
    /// Asset reference for the renderer; the core never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl VariantDef {
    pub fn item(id: u16, name: &str) -> Self {
        Self {
            id: VariantId(id),
            name: name.to_string(),
            category: Category::Item,
            swappable: true,
            icon: None,
        }
    }

    pub fn block(id: u16, name: &str) -> Self {
        Self {
            id: VariantId(id),
            name: name.to_string(),
            category: Category::Block,
            swappable: false,
            icon: None,
        }
    }

    /// Build a tile of this variant with the given pool handle
    pub fn instantiate(&self, id: TileId) -> Tile {
        Tile {
            id,
            variant: self.id,
            category: self.category,
            swappable: self.swappable,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tiles: Vec<VariantDef>,
}

/// Validated, immutable catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    variants: Vec<VariantDef>,
    block_index: usize,
}

impl Catalog {
    /// Validate and wrap a list of definitions
    pub fn new(variants: Vec<VariantDef>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for def in &variants {
            if !seen.insert(def.id) {
                return Err(CatalogError::DuplicateId { id: def.id });
            }
        }

        let blocks: Vec<usize> = variants
            .iter()
            .enumerate()
            .filter(|(_, d)| d.category == Category::Block)
            .map(|(i, _)| i)
            .collect();
        let block_index = match blocks.as_slice() {
            [] => return Err(CatalogError::MissingBlock),
            [one] => *one,
            many => return Err(CatalogError::MultipleBlocks { count: many.len() }),
        };
        if variants[block_index].swappable {
            return Err(CatalogError::SwappableBlock {
                id: variants[block_index].id,
            });
        }

        let available = variants.len() - 1;
        if available < MIN_TILE_TYPE_COUNT as usize {
            return Err(CatalogError::TooFewItems {
                available,
                requested: MIN_TILE_TYPE_COUNT as usize,
            });
        }

        Ok(Self {
            variants,
            block_index,
        })
    }

    /// Parse a catalog from its JSON form
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.tiles)
    }

    /// Eight fruit Items plus a stone Block
    pub fn builtin() -> Self {
        let variants = vec![
            VariantDef::item(0, "apple"),
            VariantDef::item(1, "banana"),
            VariantDef::item(2, "cherry"),
            VariantDef::item(3, "grape"),
            VariantDef::item(4, "kiwi"),
            VariantDef::item(5, "lemon"),
            VariantDef::item(6, "orange"),
            VariantDef::item(7, "plum"),
            VariantDef::block(8, "stone"),
        ];
        Self {
            variants,
            block_index: 8,
        }
    }

    pub fn variants(&self) -> &[VariantDef] {
        &self.variants
    }

    /// Look up a definition by id
    pub fn get(&self, id: VariantId) -> Result<&VariantDef, CatalogError> {
        self.variants
            .iter()
            .find(|d| d.id == id)
            .ok_or(CatalogError::UnknownVariant { id })
    }

    /// The single Block variant
    pub fn block(&self) -> &VariantDef {
        &self.variants[self.block_index]
    }

    /// Item variants in catalog order
    pub fn items(&self) -> impl Iterator<Item = &VariantDef> {
        self.variants
            .iter()
            .filter(|d| d.category == Category::Item)
    }

    /// The first `count` Item variants, the set boards are drawn from
    pub fn active_items(&self, count: u8) -> Result<Vec<VariantDef>, CatalogError> {
        let active: Vec<VariantDef> = self.items().take(count as usize).cloned().collect();
        if active.len() < count as usize {
            return Err(CatalogError::TooFewItems {
                available: active.len(),
                requested: count as usize,
            });
        }
        Ok(active)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
