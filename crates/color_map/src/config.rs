use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::{ContrastRule, Rgb};

/// The shipped configuration, kept in sync with [`Config::default`].
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dark luminance threshold must be within 0..=1, got {0}")]
    Threshold(f32),
    #[error("marker radii must be positive and shrink inwards, got {0:?}")]
    MarkerRadii([f32; 3]),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale for screen labels, e.g. `pt-BR` or `en`.
    pub locale: String,
    pub color_map: ColorMapConfig,
    pub hex_composer: HexComposerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".to_string(),
            color_map: ColorMapConfig::default(),
            hex_composer: HexComposerConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMapConfig {
    /// Shown until the surface is first measured.
    pub initial_color: Rgb,
    /// Swatch labels turn white below this luminance.
    pub dark_luminance_threshold: f32,
    /// Outer, middle and inner marker ring radii.
    pub marker_radii: [f32; 3],
}

impl Default for ColorMapConfig {
    fn default() -> Self {
        Self {
            initial_color: Rgb::WHITE,
            dark_luminance_threshold: 0.4,
            marker_radii: [14.0, 10.0, 7.0],
        }
    }
}

impl ColorMapConfig {
    pub fn contrast(&self) -> ContrastRule {
        ContrastRule::LuminanceBelow(self.dark_luminance_threshold)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexComposerConfig {
    /// Shown until the first successful commit.
    pub initial_color: Rgb,
}

impl Default for HexComposerConfig {
    fn default() -> Self {
        Self {
            initial_color: Rgb::WHITE,
        }
    }
}

impl Config {
    /// Parse a JSON config. Missing fields fall back to defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&source)?;
        tracing::debug!(path = %path.display(), locale = %config.locale, "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.color_map.dark_luminance_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Threshold(threshold));
        }

        let [outer, middle, inner] = self.color_map.marker_radii;
        if !(inner > 0.0 && middle > inner && outer > middle) {
            return Err(ConfigError::MarkerRadii(self.color_map.marker_radii));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_matches_default() {
        assert_eq!(Config::from_json(DEFAULT_CONFIG).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_json(
            r##"{ "locale": "en", "hex_composer": { "initial_color": "#101010" } }"##,
        )
        .unwrap();

        assert_eq!(config.locale, "en");
        assert_eq!(config.hex_composer.initial_color, Rgb::from_u8(0x10, 0x10, 0x10));
        assert_eq!(config.color_map, ColorMapConfig::default());
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let err =
            Config::from_json(r##"{ "color_map": { "initial_color": "#12345" } }"##).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let err = Config::from_json(r#"{ "color_map": { "dark_luminance_threshold": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Threshold(t) if t == 1.5));
    }

    #[test]
    fn test_invalid_radii_are_rejected() {
        let err = Config::from_json(r#"{ "color_map": { "marker_radii": [7.0, 10.0, 14.0] } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MarkerRadii(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/color-map.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/color-map.json"));
    }

    #[test]
    fn test_contrast_uses_threshold() {
        let config = ColorMapConfig {
            dark_luminance_threshold: 0.1,
            ..Default::default()
        };
        assert_eq!(config.contrast(), ContrastRule::LuminanceBelow(0.1));
        assert_eq!(config.contrast().label_color(Rgb::RED), Rgb::BLACK);
    }
}
