//! Engine configuration, loadable from JSON

use crate::checkers::Side;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default alpha-beta depth limit in plies
pub const DEFAULT_DEPTH_LIMIT: u32 = 10;

/// Default cap on the length of a self-played checkers game
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// Checkers search and game-loop settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckersConfig {
    /// Plies searched below the root
    pub depth_limit: u32,
    /// Stop the game loop after this many plies (None = play until no move)
    pub max_plies: Option<u32>,
    /// Side that moves first
    pub first_side: Side,
}

impl Default for CheckersConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            max_plies: Some(DEFAULT_MAX_PLIES),
            first_side: Side::Red,
        }
    }
}

impl CheckersConfig {
    pub fn with_depth(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }
}

/// Puzzle search settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Give up after this many expansions (None = run until the frontier is empty)
    pub max_expansions: Option<usize>,
}

/// Settings for both engines
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub checkers: CheckersConfig,
    pub puzzle: PuzzleConfig,
}

impl EngineConfig {
    /// Load from JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.checkers.depth_limit, 10);
        assert_eq!(config.checkers.first_side, Side::Red);
        assert_eq!(config.puzzle.max_expansions, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "checkers": { "depth_limit": 4 } }"#).unwrap();
        assert_eq!(config.checkers.depth_limit, 4);
        assert_eq!(config.checkers.max_plies, Some(DEFAULT_MAX_PLIES));
        assert_eq!(config.puzzle, PuzzleConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("boardsearch-config-{}.json", std::process::id()));
        let config = EngineConfig {
            checkers: CheckersConfig::default().with_depth(6).with_max_plies(None),
            puzzle: PuzzleConfig { max_expansions: Some(1000) },
        };
        config.save(&path).unwrap();
        let loaded = EngineConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/boardsearch.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
