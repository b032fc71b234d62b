use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::state::Grid;
use crate::i18n::Language;

/// Side of one grid cell in pixels
pub const CELL_SIZE: u32 = 20;

/// Fixed simulation rate: 10 steps per second
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Screen resolutions offered in the settings screen
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Resolution {
    #[serde(rename = "800x600")]
    #[value(name = "800x600")]
    R800x600,
    #[default]
    #[serde(rename = "1000x700")]
    #[value(name = "1000x700")]
    R1000x700,
    #[serde(rename = "1200x800")]
    #[value(name = "1200x800")]
    R1200x800,
    #[serde(rename = "1366x768")]
    #[value(name = "1366x768")]
    R1366x768,
    #[serde(rename = "1920x1080")]
    #[value(name = "1920x1080")]
    R1920x1080,
}

impl Resolution {
    /// All resolutions in settings-menu order
    pub const ALL: [Resolution; 5] = [
        Resolution::R800x600,
        Resolution::R1000x700,
        Resolution::R1200x800,
        Resolution::R1366x768,
        Resolution::R1920x1080,
    ];

    /// Width and height in pixels
    pub fn size(&self) -> (u32, u32) {
        match self {
            Resolution::R800x600 => (800, 600),
            Resolution::R1000x700 => (1000, 700),
            Resolution::R1200x800 => (1200, 800),
            Resolution::R1366x768 => (1366, 768),
            Resolution::R1920x1080 => (1920, 1080),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resolution::R800x600 => "800x600",
            Resolution::R1000x700 => "1000x700",
            Resolution::R1200x800 => "1200x800",
            Resolution::R1366x768 => "1366x768",
            Resolution::R1920x1080 => "1920x1080",
        }
    }

    /// Grid derived from this resolution and [`CELL_SIZE`]
    pub fn grid(&self) -> Grid {
        let (width, height) = self.size();
        Grid::new((width / CELL_SIZE) as i32, (height / CELL_SIZE) as i32)
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen resolution; the grid size is derived from it
    pub resolution: Resolution,
    /// Language of menus and labels
    pub interface_language: Language,
    /// Language of quiz questions and collected letters
    pub content_language: Language,
}

impl GameConfig {
    /// Create a configuration with the given resolution and default languages
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Smallest resolution, handy for tests
    pub fn small() -> Self {
        Self::new(Resolution::R800x600)
    }

    pub fn grid(&self) -> Grid {
        self.resolution.grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.resolution, Resolution::R1000x700);
        assert_eq!(config.interface_language, Language::Russian);
        assert_eq!(config.content_language, Language::Russian);
        assert_eq!(config.grid(), Grid::new(50, 35));
    }

    #[test]
    fn test_grid_derived_from_resolution() {
        assert_eq!(Resolution::R800x600.grid(), Grid::new(40, 30));
        assert_eq!(Resolution::R1366x768.grid(), Grid::new(68, 38));
        assert_eq!(Resolution::R1920x1080.grid(), Grid::new(96, 54));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "resolution": "1200x800", "content_language": "ko" }"#)
                .unwrap();
        assert_eq!(config.resolution, Resolution::R1200x800);
        assert_eq!(config.interface_language, Language::Russian);
        assert_eq!(config.content_language, Language::Korean);
    }
}
