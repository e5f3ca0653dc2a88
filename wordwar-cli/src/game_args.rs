//! Game settings shared by every command
//!
//! Values come from the defaults, then the `--config` file, then flags.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use wordwar_core::GameConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct GameArgs {
    /// Fields per side of the hexagonal board
    #[arg(long)]
    pub side_length: Option<u32>,

    /// Letters per player rack
    #[arg(long)]
    pub rack_size: Option<usize>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<f64>,
}

impl GameArgs {
    /// Resolve the final configuration
    pub fn to_config(&self, file: Option<&Path>, seed: Option<u64>) -> Result<GameConfig> {
        let mut config = match file {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(side_length) = self.side_length {
            config.side_length = side_length;
        }
        if let Some(rack_size) = self.rack_size {
            config.rack_size = rack_size;
        }
        if let Some(width) = self.width {
            config.canvas_width = width;
        }
        if let Some(height) = self.height {
            config.canvas_height = height;
        }
        if seed.is_some() {
            config.seed = seed;
        }

        config.validate()?;
        Ok(config)
    }
}
