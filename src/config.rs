//! On-disk configuration (`config.toml`).
//!
//! Every field has a default, so an empty or missing file is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::Side;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    White,
    Black,
}

impl From<ColorChoice> for Side {
    fn from(c: ColorChoice) -> Side {
        match c {
            ColorChoice::White => Side::White,
            ColorChoice::Black => Side::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub user_color: ColorChoice,
    /// Opponent "thinking" pause, `[min, max]` in milliseconds.
    pub think_time_ms: [u64; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            user_color: ColorChoice::White,
            think_time_ms: [1000, 2000],
        }
    }
}

impl GameConfig {
    /// The think-time range with the bounds put in order.
    pub fn think_time(&self) -> (Duration, Duration) {
        let [a, b] = self.think_time_ms;
        (
            Duration::from_millis(a.min(b)),
            Duration::from_millis(a.max(b)),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Fixed seed for a reproducible opponent; entropy when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Extra `[wrong, right]` pairs applied after the built-in homophones.
    pub corrections: Vec<(String, String)>,
    pub prompt_each_turn: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            corrections: Vec::new(),
            prompt_each_turn: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_board: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// An `EnvFilter` directive such as `info` or `voice_chess=debug`.
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub opponent: OpponentConfig,
    pub speech: SpeechConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn from_toml(path: &Path, text: &str) -> Result<Config> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_toml(path, &text)
    }

    /// Like [`load`](Self::load), but a file that does not exist yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Config> {
        if path.exists() {
            Config::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// `<config dir>/voice-chess/config.toml` for the current platform.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "voice-chess")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
