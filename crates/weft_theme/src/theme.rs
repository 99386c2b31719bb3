//! Theme and theme bundle types

use crate::tokens::*;

/// Light or dark color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// A complete named token set for one color scheme
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub scheme: ColorScheme,
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub shadows: ShadowTokens,
    pub typography: TypographyTokens,
    pub opacities: OpacityTokens,
}

impl Theme {
    /// Get a color token value
    pub fn color(&self, token: ColorToken) -> weft_core::Color {
        self.colors.get(token)
    }

    /// Get a radius token value
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    /// Get a spacing token value
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }
}

/// A light/dark theme pair
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    pub name: &'static str,
    light: Theme,
    dark: Theme,
}

impl ThemeBundle {
    pub fn new(name: &'static str, light: Theme, dark: Theme) -> Self {
        Self { name, light, dark }
    }

    /// Get the theme for a color scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Mutable access, used by theme configuration to apply overrides
    /// before the bundle is installed
    pub fn for_scheme_mut(&mut self, scheme: ColorScheme) -> &mut Theme {
        match scheme {
            ColorScheme::Light => &mut self.light,
            ColorScheme::Dark => &mut self.dark,
        }
    }
}
