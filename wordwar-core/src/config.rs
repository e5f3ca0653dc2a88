//! GameConfig - board size, rack size and canvas

use crate::board::MAX_SIDE_LENGTH;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a new game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fields per side of the hexagon
    pub side_length: u32,
    /// Tiles each player holds after drawing
    pub rack_size: usize,
    /// Canvas size in pixels at render scale
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Random seed for the letter bag (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side_length: 11,
            rack_size: 12,
            canvas_width: 1500.0,
            canvas_height: 1300.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Config for a board of the given side length, everything else default
    pub fn with_side_length(side_length: u32) -> Self {
        Self {
            side_length,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.side_length == 0 {
            return Err(GameError::InvalidConfig("side length must be positive".to_string()));
        }
        if self.side_length > MAX_SIDE_LENGTH {
            return Err(GameError::InvalidConfig(format!(
                "side length must be at most {}, got {}",
                MAX_SIDE_LENGTH, self.side_length
            )));
        }
        if self.rack_size == 0 {
            return Err(GameError::InvalidConfig("rack size must be positive".to_string()));
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }

    /// Load from JSON file; missing keys fall back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
