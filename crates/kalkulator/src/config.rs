//! # Configuration
//!
//! Loaded once at startup from an optional TOML file. Every key is
//! optional; CLI flags are applied on top with [`AppConfig::apply`].
//!
//! ```toml
//! precision = 2
//! mode = "standard"
//!
//! [preloader]
//! min_duration_ms = 2200
//! reduced_motion = false
//! caption = "Ridhwan Zakki"
//!
//! [display]
//! width = 44
//! color = false
//! ```

use std::path::Path;
use std::time::Duration;

use kalkulator_core::{CalcMode, Precision};
use kalkulator_ui::{PreloaderConfig, Theme};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Minimum preloader duration on the calculator page.
pub const PAGE_MIN_DURATION_MS: u64 = 2200;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Starting precision.
    pub precision: Precision,
    /// Starting mode.
    pub mode: CalcMode,
    /// Loading screen settings.
    pub preloader: PreloaderSettings,
    /// Output settings.
    pub display: DisplaySettings,
}

/// `[preloader]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloaderSettings {
    /// Show the loading screen at all.
    pub enabled: bool,
    /// Shortest time the loading screen stays up.
    pub min_duration_ms: u64,
    /// Static caption, no easing.
    pub reduced_motion: bool,
    /// Typewriter text.
    pub caption: String,
}

impl Default for PreloaderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_duration_ms: PAGE_MIN_DURATION_MS,
            reduced_motion: false,
            caption: PreloaderConfig::default().caption,
        }
    }
}

impl PreloaderSettings {
    /// Builds the widget configuration.
    #[must_use]
    pub fn to_preloader_config(&self) -> PreloaderConfig {
        PreloaderConfig {
            min_duration: Duration::from_millis(self.min_duration_ms),
            caption: self.caption.clone(),
            reduced_motion: self.reduced_motion,
            ..PreloaderConfig::default()
        }
    }
}

/// Color theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light card.
    #[default]
    Light,
    /// Dark card.
    Dark,
}

impl ThemeName {
    /// Returns the palette.
    #[must_use]
    pub const fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::LIGHT,
            Self::Dark => Theme::DARK,
        }
    }
}

/// `[display]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Card width in cells.
    pub width: u16,
    /// Emit ANSI colors.
    pub color: bool,
    /// Palette.
    pub theme: ThemeName,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: 44,
            color: false,
            theme: ThemeName::default(),
        }
    }
}

/// Values given on the command line; `None`/`false` leave the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--precision`.
    pub precision: Option<Precision>,
    /// `--mode`.
    pub mode: Option<CalcMode>,
    /// `--min-duration-ms`.
    pub min_duration_ms: Option<u64>,
    /// `--no-preloader`.
    pub no_preloader: bool,
    /// `--reduced-motion`.
    pub reduced_motion: bool,
    /// `--color`.
    pub color: bool,
}

impl AppConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConfigParse`] on malformed TOML or invalid values
    /// (e.g. `precision = 3`).
    pub fn from_toml_str(text: &str) -> AppResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConfigRead`] if the file cannot be read, or
    /// [`AppError::ConfigParse`] if its contents are invalid.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Applies command line overrides.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(precision) = overrides.precision {
            self.precision = precision;
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(ms) = overrides.min_duration_ms {
            self.preloader.min_duration_ms = ms;
        }
        if overrides.no_preloader {
            self.preloader.enabled = false;
        }
        if overrides.reduced_motion {
            self.preloader.reduced_motion = true;
        }
        if overrides.color {
            self.display.color = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.precision, Precision::Two);
        assert_eq!(config.preloader.min_duration_ms, 2200);
        assert!(config.preloader.enabled);
    }

    #[test]
    fn test_partial_tables() {
        let config = AppConfig::from_toml_str(
            r#"
            precision = 6
            mode = "scientific"

            [display]
            theme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(config.precision, Precision::Six);
        assert_eq!(config.mode, CalcMode::Scientific);
        assert_eq!(config.display.theme, ThemeName::Dark);
        assert_eq!(config.display.width, 44);
        assert_eq!(config.preloader.caption, "Ridhwan Zakki");
    }

    #[test]
    fn test_invalid_precision_rejected() {
        let err = AppConfig::from_toml_str("precision = 3").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = AppConfig::default();
        config.apply(&Overrides {
            precision: Some(Precision::Zero),
            min_duration_ms: Some(10),
            no_preloader: true,
            ..Overrides::default()
        });

        assert_eq!(config.precision, Precision::Zero);
        assert_eq!(config.mode, CalcMode::Standard);
        assert_eq!(config.preloader.min_duration_ms, 10);
        assert!(!config.preloader.enabled);
    }
}
