//! Game tuning configuration
//!
//! All gameplay constants live in [`GameConfig`]. Values are read from
//! `assets/config/game.json` when present; every field is optional in the
//! file and falls back to the built-in default.
//!
//! # Example
//!
//! ```json
//! {
//!     "enemy_escape_damage": 25,
//!     "starting_lives": 5
//! }
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Default location of the tuning file, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config/game.json";

/// Errors that can occur while reading the tuning file
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Io(std::io::Error),

    /// File is not valid JSON for `GameConfig`
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Gameplay and presentation tunables
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical drawing surface width
    pub width: u32,
    /// Logical drawing surface height
    pub height: u32,
    pub target_fps: u32,

    pub player_radius: f32,
    /// Horizontal pixels per frame while a direction is held
    pub player_speed: f32,
    /// Distance of the player's centre from the bottom edge at session start
    pub player_start_offset: f32,

    pub bullet_radius: f32,
    /// Upward pixels per frame
    pub bullet_speed: f32,
    /// Frames between shots while shoot is held
    pub shoot_cooldown_frames: u32,

    /// Enemy square side length
    pub enemy_size: f32,
    /// Downward pixels per frame before the difficulty bonus
    pub enemy_base_speed: f32,
    /// Health removed when an enemy reaches the bottom
    pub enemy_escape_damage: i32,

    pub max_health: i32,
    pub starting_lives: u32,
    pub score_per_kill: u32,

    /// Clicks are ignored for this long after every screen change
    pub click_guard_ms: u64,

    pub audio_enabled: bool,
    pub sound_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 1920,
            height: 1080,
            target_fps: 60,
            player_radius: 30.0,
            player_speed: 8.0,
            player_start_offset: 100.0,
            bullet_radius: 5.0,
            bullet_speed: 10.0,
            shoot_cooldown_frames: 10,
            enemy_size: 40.0,
            enemy_base_speed: 3.0,
            enemy_escape_damage: 34,
            max_health: 100,
            starting_lives: 3,
            score_per_kill: 10,
            click_guard_ms: 200,
            audio_enabled: true,
            sound_dir: "assets/sounds".to_string(),
        }
    }
}

impl GameConfig {
    /// Reads a config file, propagating IO and parse failures
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Reads `path` if it exists, otherwise returns the defaults
    ///
    /// A file that exists but fails to parse is reported and ignored so a
    /// typo in tuning never keeps the game from starting.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return GameConfig::default();
        }

        match GameConfig::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                GameConfig::default()
            }
        }
    }
}
