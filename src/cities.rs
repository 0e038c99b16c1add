use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::clock::{ClockBoard, ClockOptions};
use crate::config::{ClockConfig, PartialClockConfig};
use crate::error::{ClockError, ConfigError};

const BUILT_IN: &str = include_str!("cities.toml");

/// One `[[clock]]` entry of a clock list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityClock {
    pub id: String,
    pub label: Option<String>,
    #[serde(default)]
    pub offset_minutes: i32,
    #[serde(flatten)]
    pub style: PartialClockConfig,
}

/// A declarative list of clocks, optionally with shared defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClockList {
    /// Layered over the built-in defaults before any clock is resolved.
    #[serde(default)]
    pub defaults: PartialClockConfig,
    #[serde(default, rename = "clock")]
    pub clocks: Vec<CityClock>,
}

impl ClockList {
    /// The nine reference cities.
    ///
    /// # Errors
    /// Only if the bundled document were malformed.
    pub fn built_in() -> Result<Self, ConfigError> {
        Self::parse(BUILT_IN, "built-in")
    }

    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::TomlParse`]
    /// if it does not match the schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    /// # Errors
    /// [`ConfigError::TomlParse`] if `text` does not match the schema.
    pub fn parse(text: &str, location: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::TomlParse {
            location: location.to_string(),
            details: e.to_string(),
        })
    }

    /// Defaults table every clock of this list resolves against.
    ///
    /// # Errors
    /// [`ConfigError::InvalidDefault`] if the layered table is malformed.
    pub fn defaults_table(&self) -> Result<ClockConfig, ConfigError> {
        self.defaults.apply_to(&ClockConfig::defaults())
    }

    /// Creates every listed clock on a fresh board.
    ///
    /// # Errors
    /// The first construction error; no partially built board is returned.
    pub fn build_board(&self, options: ClockOptions) -> Result<ClockBoard, ClockError> {
        let defaults = self.defaults_table()?;
        let mut board = ClockBoard::new();
        for (index, city) in self.clocks.iter().enumerate() {
            // one seed per list still gives each clock its own color stream
            let options = ClockOptions {
                seed: options.seed.map(|seed| seed.wrapping_add(index as u64)),
                ..options
            };
            let clock = board.create_clock_with_defaults(
                city.id.clone(),
                city.offset_minutes,
                &defaults,
                &city.style,
                options,
            )?;
            if let Some(label) = &city.label {
                info!(clock = clock.id(), label = %label, "clock bound to city");
            }
        }
        Ok(board)
    }
}
