//! Theme configuration files
//!
//! A TOML document selects a preset and scheme and may override individual
//! color tokens per scheme:
//!
//! ```toml
//! preset = "zinc"
//! scheme = "dark"
//! radius_scale = 1.25
//!
//! [colors.light]
//! primary = "#2563eb"
//!
//! [colors.dark]
//! primary = "#3b82f6"
//! ```
//!
//! Configuration is resolved into a [`ThemeBundle`] before
//! [`ThemeState::install`](crate::ThemeState::install); nothing is reloaded
//! or mutated afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use weft_core::Color;

use crate::presets::ThemePreset;
use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::ColorToken;

/// Theme configuration errors
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error("unknown color scheme `{0}` (expected `light` or `dark`)")]
    UnknownScheme(String),

    #[error("unknown color token `{0}` in [colors.{1}]")]
    UnknownToken(String, &'static str),

    #[error("invalid color `{value}` for token `{token}` (expected #RRGGBB)")]
    InvalidColor { token: String, value: String },

    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-scheme color token overrides, token name to hex string
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ColorOverrides {
    #[serde(default)]
    pub light: FxHashMap<String, String>,
    #[serde(default)]
    pub dark: FxHashMap<String, String>,
}

/// Deserialized theme configuration
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ThemeConfig {
    /// Preset id, see [`ThemePreset::id`]
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Initial color scheme, `light` or `dark`
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Uniform radius scale factor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_scale: Option<f32>,

    /// Per-scheme color token overrides
    #[serde(default)]
    pub colors: ColorOverrides,
}

fn default_preset() -> String {
    ThemePreset::Weft.id().to_string()
}

fn default_scheme() -> String {
    "light".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            scheme: default_scheme(),
            radius_scale: None,
            colors: ColorOverrides::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a TOML configuration document
    pub fn from_toml_str(s: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(s)?)
    }

    /// The configured initial scheme
    pub fn color_scheme(&self) -> Result<ColorScheme, ThemeError> {
        ColorScheme::from_str(&self.scheme)
            .ok_or_else(|| ThemeError::UnknownScheme(self.scheme.clone()))
    }

    /// Resolve the configuration into a theme bundle.
    ///
    /// Fails on unknown preset ids, unknown token names, and malformed hex
    /// colors; a theme config mistake is a programming error and surfaces
    /// instead of degrading.
    pub fn bundle(&self) -> Result<ThemeBundle, ThemeError> {
        let preset = ThemePreset::from_id(&self.preset)
            .ok_or_else(|| ThemeError::UnknownPreset(self.preset.clone()))?;
        let mut bundle = preset.bundle();

        if let Some(scale) = self.radius_scale {
            for scheme in [ColorScheme::Light, ColorScheme::Dark] {
                let theme = bundle.for_scheme_mut(scheme);
                theme.radii = theme.radii.scaled(scale);
            }
        }

        apply_overrides(&mut bundle, ColorScheme::Light, &self.colors.light, "light")?;
        apply_overrides(&mut bundle, ColorScheme::Dark, &self.colors.dark, "dark")?;

        tracing::debug!(preset = preset.id(), "resolved theme config");
        Ok(bundle)
    }
}

fn apply_overrides(
    bundle: &mut ThemeBundle,
    scheme: ColorScheme,
    overrides: &FxHashMap<String, String>,
    section: &'static str,
) -> Result<(), ThemeError> {
    // Sort for deterministic application and error reporting
    let mut entries: Vec<_> = overrides.iter().collect();
    entries.sort();

    for (name, value) in entries {
        let token = ColorToken::from_name(name)
            .ok_or_else(|| ThemeError::UnknownToken(name.clone(), section))?;
        let color = Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
            token: name.clone(),
            value: value.clone(),
        })?;
        bundle.for_scheme_mut(scheme).colors.set(token, color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config.preset, "weft");
        assert_eq!(config.color_scheme().unwrap(), ColorScheme::Light);
        assert!(config.bundle().is_ok());
    }

    #[test]
    fn test_override_applies_to_one_scheme() {
        let config = ThemeConfig::from_toml_str(
            r##"
            preset = "zinc"
            scheme = "dark"

            [colors.dark]
            primary = "#3b82f6"
            "##,
        )
        .unwrap();

        let bundle = config.bundle().unwrap();
        assert_eq!(
            bundle
                .for_scheme(ColorScheme::Dark)
                .color(ColorToken::Primary),
            Color::from_hex(0x3B82F6)
        );
        assert_eq!(
            bundle
                .for_scheme(ColorScheme::Light)
                .color(ColorToken::Primary),
            ThemePreset::Zinc
                .bundle()
                .for_scheme(ColorScheme::Light)
                .color(ColorToken::Primary)
        );
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let config = ThemeConfig {
            preset: "catppuccin".into(),
            ..ThemeConfig::default()
        };
        assert!(matches!(
            config.bundle(),
            Err(ThemeError::UnknownPreset(p)) if p == "catppuccin"
        ));
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [colors.light]
            highlight = "#ff00ff"
            "##,
        )
        .unwrap();
        assert!(matches!(
            config.bundle(),
            Err(ThemeError::UnknownToken(t, "light")) if t == "highlight"
        ));
    }

    #[test]
    fn test_bad_hex_is_an_error() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [colors.dark]
            primary = "blue"
            "##,
        )
        .unwrap();
        assert!(matches!(
            config.bundle(),
            Err(ThemeError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = ThemeConfig {
            preset: "slate".into(),
            scheme: "dark".into(),
            radius_scale: Some(1.25),
            colors: ColorOverrides::default(),
        };
        config
            .colors
            .dark
            .insert("primary".into(), "#3b82f6".into());

        let serialized = toml::to_string(&config).unwrap();
        let reparsed = ThemeConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_radius_scale() {
        let config = ThemeConfig::from_toml_str("radius_scale = 2.0").unwrap();
        let bundle = config.bundle().unwrap();
        assert_eq!(
            bundle
                .for_scheme(ColorScheme::Light)
                .radius(crate::tokens::RadiusToken::Md),
            12.0
        );
    }
}
