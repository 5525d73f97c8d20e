use std::{fs, path::Path};

use anyhow::Context;
use minefield_core::{CellCount, Coord, GameConfig};
use serde::{Deserialize, Serialize};

/// Game settings as read from a TOML file, missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    /// Show covered mines while playing.
    pub show_mines: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let config = GameConfig::DEFAULT;
        Self {
            width: config.width(),
            height: config.height(),
            mines: config.mines(),
            show_mines: false,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_toml(&text)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        log::debug!("loaded {settings:?} from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn game_config(&self) -> minefield_core::Result<GameConfig> {
        GameConfig::new(self.width, self.height, self.mines)
    }
}
