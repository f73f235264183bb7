//! Configuration system for the simulator.
//!
//! This module defines all configuration structures used to parameterize a run. It
//! provides:
//! 1. **Defaults:** The fixed machine (x = 1, 40x6 CRT, checkpoints at 20, 60, ..., 220).
//! 2. **Structures:** Hierarchical config for general, cpu, crt and checksum settings.
//! 3. **Loading:** JSON deserialization from a file; every field is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants;
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    pub const INITIAL_X: i64 = constants::INITIAL_X;
    pub const RESET_ON_WRAP: bool = true;
    pub const CRT_WIDTH: usize = constants::CRT_WIDTH;
    pub const CRT_HEIGHT: usize = constants::CRT_HEIGHT;
    pub const PIXEL_LIT: char = constants::PIXEL_LIT;
    pub const PIXEL_DARK: char = constants::PIXEL_DARK;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use crtsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.cpu.initial_x, 1);
/// assert_eq!(config.crt.width, 40);
/// assert_eq!(config.checksum.checkpoints, vec![20, 60, 100, 140, 180, 220]);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use crtsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "crt": { "lit": "@", "continuous": true },
///     "checksum": { "checkpoints": [10, 20] }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.crt.lit, '@');
/// assert_eq!(config.crt.dark, '.');
/// assert_eq!(config.checksum.checkpoints, vec![10, 20]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Register and wrap-around behavior
    pub cpu: CpuConfig,
    /// Display geometry and glyphs
    pub crt: CrtConfig,
    /// Signal-strength checkpoints
    pub checksum: ChecksumConfig,
}

impl Config {
    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and [`SimError::Config`] if it
    /// is not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| SimError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] for a zero-sized display or one larger than
    /// [`MAX_CRT_PIXELS`](constants::MAX_CRT_PIXELS).
    pub fn validate(&self) -> Result<(), SimError> {
        let (width, height) = (self.crt.width, self.crt.height);
        if width == 0 || height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "crt must be at least 1x1, got {width}x{height}"
            )));
        }
        match width.checked_mul(height) {
            Some(pixels) if pixels <= constants::MAX_CRT_PIXELS => Ok(()),
            _ => Err(SimError::InvalidConfig(format!(
                "crt {width}x{height} exceeds {} pixels",
                constants::MAX_CRT_PIXELS
            ))),
        }
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a `trace` event for every retired instruction.
    pub trace_instructions: bool,
}

/// CPU register and program-sequencing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CpuConfig {
    /// Power-on value of `x`.
    pub initial_x: i64,

    /// Restore `x` to `initial_x` each time the program wraps back to its first
    /// instruction, so every pass observes the same register timeline.
    pub reset_registers_on_wrap: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            initial_x: defaults::INITIAL_X,
            reset_registers_on_wrap: defaults::RESET_ON_WRAP,
        }
    }
}

/// CRT geometry and glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrtConfig {
    /// Columns per row.
    pub width: usize,
    /// Rows per frame.
    pub height: usize,
    /// Glyph for a lit pixel.
    pub lit: char,
    /// Glyph for a dark pixel.
    pub dark: char,
    /// Restart the beam at (0, 0) after the last row instead of parking it.
    pub continuous: bool,
}

impl CrtConfig {
    /// Number of cycles needed to scan one full frame (saturating).
    pub const fn frame_cycles(&self) -> u64 {
        self.width.saturating_mul(self.height) as u64
    }
}

impl Default for CrtConfig {
    fn default() -> Self {
        Self {
            width: defaults::CRT_WIDTH,
            height: defaults::CRT_HEIGHT,
            lit: defaults::PIXEL_LIT,
            dark: defaults::PIXEL_DARK,
            continuous: false,
        }
    }
}

/// Signal-strength sampling settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksumConfig {
    /// 1-based cycles at which `x * cycle` is accumulated.
    pub checkpoints: Vec<u64>,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            checkpoints: constants::CHECKPOINT_CYCLES.to_vec(),
        }
    }
}
