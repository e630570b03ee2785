//! Game configuration
//!
//! Board dimensions, the number of active Item variants, the Block quota and
//! the RNG seed. Values come from defaults or environment variables and are
//! checked by [`GameConfig::validate`] before a board is built.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_BLOCKS_COUNT, DEFAULT_HEIGHT, DEFAULT_TILE_TYPE_COUNT, DEFAULT_WIDTH,
    MAX_BLOCKS_COUNT, MAX_BOARD_SIDE, MAX_TILE_TYPE_COUNT, MIN_BOARD_SIDE, MIN_TILE_TYPE_COUNT,
    POOL_CAPACITY_DENOMINATOR, POOL_CAPACITY_NUMERATOR,
};

/// Board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Number of Item variants in play (4-8)
    pub tile_type_count: u8,
    /// Blocks placed at generation (0-8)
    pub blocks_count: u8,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_type_count: DEFAULT_TILE_TYPE_COUNT,
            blocks_count: DEFAULT_BLOCKS_COUNT,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Read configuration from `TILE_MATCH_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        fn var<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            width: var("TILE_MATCH_WIDTH").unwrap_or(defaults.width),
            height: var("TILE_MATCH_HEIGHT").unwrap_or(defaults.height),
            tile_type_count: var("TILE_MATCH_TILE_TYPES").unwrap_or(defaults.tile_type_count),
            blocks_count: var("TILE_MATCH_BLOCKS").unwrap_or(defaults.blocks_count),
            seed: var("TILE_MATCH_SEED").unwrap_or(defaults.seed),
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Check every value against its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !side.contains(&self.width) {
            return Err(ConfigError::Width {
                value: self.width,
                min: MIN_BOARD_SIDE,
                max: MAX_BOARD_SIDE,
            });
        }
        if !side.contains(&self.height) {
            return Err(ConfigError::Height {
                value: self.height,
                min: MIN_BOARD_SIDE,
                max: MAX_BOARD_SIDE,
            });
        }
        if !(MIN_TILE_TYPE_COUNT..=MAX_TILE_TYPE_COUNT).contains(&self.tile_type_count) {
            return Err(ConfigError::TileTypeCount {
                value: self.tile_type_count,
                min: MIN_TILE_TYPE_COUNT,
                max: MAX_TILE_TYPE_COUNT,
            });
        }
        if self.blocks_count > MAX_BLOCKS_COUNT {
            return Err(ConfigError::BlocksCount {
                value: self.blocks_count,
                max: MAX_BLOCKS_COUNT,
            });
        }
        Ok(())
    }

    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Tile pool size hint: `ceil(1.5 * width * height)`
    pub fn pool_capacity(&self) -> usize {
        (self.cells() * POOL_CAPACITY_NUMERATOR).div_ceil(POOL_CAPACITY_DENOMINATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (6, 6));
        assert_eq!(config.tile_type_count, 4);
        assert_eq!(config.blocks_count, 3);
    }

    #[test]
    fn pool_capacity_rounds_up() {
        let config = GameConfig::default();
        assert_eq!(config.pool_capacity(), 54);

        let odd = GameConfig {
            width: 3,
            height: 3,
            ..GameConfig::default()
        };
        // ceil(1.5 * 9) = 14
        assert_eq!(odd.pool_capacity(), 14);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let base = GameConfig::default();

        assert!(matches!(
            GameConfig { width: 2, ..base }.validate(),
            Err(ConfigError::Width { value: 2, .. })
        ));
        assert!(matches!(
            GameConfig { height: 17, ..base }.validate(),
            Err(ConfigError::Height { value: 17, .. })
        ));
        assert!(matches!(
            GameConfig { tile_type_count: 3, ..base }.validate(),
            Err(ConfigError::TileTypeCount { value: 3, .. })
        ));
        assert!(matches!(
            GameConfig { tile_type_count: 9, ..base }.validate(),
            Err(ConfigError::TileTypeCount { value: 9, .. })
        ));
        assert!(matches!(
            GameConfig { blocks_count: 9, ..base }.validate(),
            Err(ConfigError::BlocksCount { value: 9, .. })
        ));
    }

    #[test]
    fn from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
