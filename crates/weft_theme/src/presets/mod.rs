//! Built-in theme presets.
//!
//! Each preset is a base palette expanded into a full light/dark
//! [`ThemeBundle`]. The neutral/slate/zinc palettes follow the shadcn base
//! color conventions the component class vocabulary assumes.

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;
use std::fmt::{Display, Formatter};
use weft_core::Color;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Default Weft theme with a blue brand primary.
    Weft,
    /// Gray-neutral preset.
    Neutral,
    /// Blue-gray preset.
    Slate,
    /// Cool-gray preset.
    Zinc,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Weft => "weft",
            Self::Neutral => "neutral",
            Self::Slate => "slate",
            Self::Zinc => "zinc",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Weft => "Weft",
            Self::Neutral => "Neutral",
            Self::Slate => "Slate",
            Self::Zinc => "Zinc",
        }
    }

    /// Look up a preset by its stable id.
    pub fn from_id(id: &str) -> Option<ThemePreset> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::Weft,
            ThemePreset::Neutral,
            ThemePreset::Slate,
            ThemePreset::Zinc,
        ];
        &PRESETS
    }

    /// Build a light/dark theme bundle for this preset.
    pub fn bundle(self) -> ThemeBundle {
        match self {
            Self::Weft => build_bundle("Weft", weft_light(), weft_dark()),
            Self::Neutral => build_bundle("Neutral", neutral_light(), neutral_dark()),
            Self::Slate => build_bundle("Slate", slate_light(), slate_dark()),
            Self::Zinc => build_bundle("Zinc", zinc_light(), zinc_dark()),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_bundle(preset: ThemePreset) -> ThemeBundle {
    preset.bundle()
}

/// Base palette a preset is expanded from.
///
/// Popover and card foregrounds are derived rather than declared; they track
/// `foreground` in every shipped preset.
#[derive(Clone, Copy)]
struct BasePalette {
    background: Color,
    foreground: Color,
    card: Color,
    primary: Color,
    primary_foreground: Color,
    secondary: Color,
    secondary_foreground: Color,
    muted: Color,
    muted_foreground: Color,
    accent: Color,
    accent_foreground: Color,
    destructive: Color,
    destructive_foreground: Color,
    border: Color,
    input: Color,
    ring: Color,
}

fn build_bundle(name: &'static str, light: BasePalette, dark: BasePalette) -> ThemeBundle {
    ThemeBundle::new(
        name,
        Theme {
            name,
            scheme: ColorScheme::Light,
            colors: build_colors(light),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::light(),
            typography: TypographyTokens::default(),
            opacities: OpacityTokens::default(),
        },
        Theme {
            name,
            scheme: ColorScheme::Dark,
            colors: build_colors(dark),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::dark(),
            typography: TypographyTokens::default(),
            opacities: OpacityTokens::default(),
        },
    )
}

fn build_colors(base: BasePalette) -> ColorTokens {
    ColorTokens {
        background: base.background,
        foreground: base.foreground,
        card: base.card,
        card_foreground: base.foreground,
        popover: base.card,
        popover_foreground: base.foreground,
        primary: base.primary,
        primary_foreground: base.primary_foreground,
        secondary: base.secondary,
        secondary_foreground: base.secondary_foreground,
        muted: base.muted,
        muted_foreground: base.muted_foreground,
        accent: base.accent,
        accent_foreground: base.accent_foreground,
        destructive: base.destructive,
        destructive_foreground: base.destructive_foreground,
        border: base.border,
        input: base.input,
        ring: base.ring,
    }
}

fn weft_light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x0C0A09),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x2563EB),
        primary_foreground: Color::from_hex(0xF8FAFC),
        secondary: Color::from_hex(0xF1F5F9),
        secondary_foreground: Color::from_hex(0x0F172A),
        muted: Color::from_hex(0xF1F5F9),
        muted_foreground: Color::from_hex(0x64748B),
        accent: Color::from_hex(0xF1F5F9),
        accent_foreground: Color::from_hex(0x0F172A),
        destructive: Color::from_hex(0xDC2626),
        destructive_foreground: Color::from_hex(0xF8FAFC),
        border: Color::from_hex(0xE2E8F0),
        input: Color::from_hex(0xE2E8F0),
        ring: Color::from_hex(0x2563EB),
    }
}

fn weft_dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x0C0A09),
        foreground: Color::from_hex(0xF8FAFC),
        card: Color::from_hex(0x0C0A09),
        primary: Color::from_hex(0x3B82F6),
        primary_foreground: Color::from_hex(0x0F172A),
        secondary: Color::from_hex(0x1E293B),
        secondary_foreground: Color::from_hex(0xF8FAFC),
        muted: Color::from_hex(0x1E293B),
        muted_foreground: Color::from_hex(0x94A3B8),
        accent: Color::from_hex(0x1E293B),
        accent_foreground: Color::from_hex(0xF8FAFC),
        destructive: Color::from_hex(0x7F1D1D),
        destructive_foreground: Color::from_hex(0xF8FAFC),
        border: Color::from_hex(0x1E293B),
        input: Color::from_hex(0x1E293B),
        ring: Color::from_hex(0x3B82F6),
    }
}

fn neutral_light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x0A0A0A),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x171717),
        primary_foreground: Color::from_hex(0xFAFAFA),
        secondary: Color::from_hex(0xF5F5F5),
        secondary_foreground: Color::from_hex(0x171717),
        muted: Color::from_hex(0xF5F5F5),
        muted_foreground: Color::from_hex(0x737373),
        accent: Color::from_hex(0xF5F5F5),
        accent_foreground: Color::from_hex(0x171717),
        destructive: Color::from_hex(0xEF4444),
        destructive_foreground: Color::from_hex(0xFAFAFA),
        border: Color::from_hex(0xE5E5E5),
        input: Color::from_hex(0xE5E5E5),
        ring: Color::from_hex(0x0A0A0A),
    }
}

fn neutral_dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x0A0A0A),
        foreground: Color::from_hex(0xFAFAFA),
        card: Color::from_hex(0x0A0A0A),
        primary: Color::from_hex(0xFAFAFA),
        primary_foreground: Color::from_hex(0x171717),
        secondary: Color::from_hex(0x262626),
        secondary_foreground: Color::from_hex(0xFAFAFA),
        muted: Color::from_hex(0x262626),
        muted_foreground: Color::from_hex(0xA3A3A3),
        accent: Color::from_hex(0x262626),
        accent_foreground: Color::from_hex(0xFAFAFA),
        destructive: Color::from_hex(0x7F1D1D),
        destructive_foreground: Color::from_hex(0xFAFAFA),
        border: Color::from_hex(0x262626),
        input: Color::from_hex(0x262626),
        ring: Color::from_hex(0xD4D4D4),
    }
}

fn slate_light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x020817),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x0F172A),
        primary_foreground: Color::from_hex(0xF8FAFC),
        secondary: Color::from_hex(0xF1F5F9),
        secondary_foreground: Color::from_hex(0x0F172A),
        muted: Color::from_hex(0xF1F5F9),
        muted_foreground: Color::from_hex(0x64748B),
        accent: Color::from_hex(0xF1F5F9),
        accent_foreground: Color::from_hex(0x0F172A),
        destructive: Color::from_hex(0xEF4444),
        destructive_foreground: Color::from_hex(0xF8FAFC),
        border: Color::from_hex(0xE2E8F0),
        input: Color::from_hex(0xE2E8F0),
        ring: Color::from_hex(0x020817),
    }
}

fn slate_dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x020817),
        foreground: Color::from_hex(0xF8FAFC),
        card: Color::from_hex(0x020817),
        primary: Color::from_hex(0xF8FAFC),
        primary_foreground: Color::from_hex(0x0F172A),
        secondary: Color::from_hex(0x1E293B),
        secondary_foreground: Color::from_hex(0xF8FAFC),
        muted: Color::from_hex(0x1E293B),
        muted_foreground: Color::from_hex(0x94A3B8),
        accent: Color::from_hex(0x1E293B),
        accent_foreground: Color::from_hex(0xF8FAFC),
        destructive: Color::from_hex(0x7F1D1D),
        destructive_foreground: Color::from_hex(0xF8FAFC),
        border: Color::from_hex(0x1E293B),
        input: Color::from_hex(0x1E293B),
        ring: Color::from_hex(0xCBD5E1),
    }
}

fn zinc_light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x09090B),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x18181B),
        primary_foreground: Color::from_hex(0xFAFAFA),
        secondary: Color::from_hex(0xF4F4F5),
        secondary_foreground: Color::from_hex(0x18181B),
        muted: Color::from_hex(0xF4F4F5),
        muted_foreground: Color::from_hex(0x71717A),
        accent: Color::from_hex(0xF4F4F5),
        accent_foreground: Color::from_hex(0x18181B),
        destructive: Color::from_hex(0xEF4444),
        destructive_foreground: Color::from_hex(0xFAFAFA),
        border: Color::from_hex(0xE4E4E7),
        input: Color::from_hex(0xE4E4E7),
        ring: Color::from_hex(0x09090B),
    }
}

fn zinc_dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x09090B),
        foreground: Color::from_hex(0xFAFAFA),
        card: Color::from_hex(0x09090B),
        primary: Color::from_hex(0xFAFAFA),
        primary_foreground: Color::from_hex(0x18181B),
        secondary: Color::from_hex(0x27272A),
        secondary_foreground: Color::from_hex(0xFAFAFA),
        muted: Color::from_hex(0x27272A),
        muted_foreground: Color::from_hex(0xA1A1AA),
        accent: Color::from_hex(0x27272A),
        accent_foreground: Color::from_hex(0xFAFAFA),
        destructive: Color::from_hex(0x7F1D1D),
        destructive_foreground: Color::from_hex(0xFAFAFA),
        border: Color::from_hex(0x27272A),
        input: Color::from_hex(0x27272A),
        ring: Color::from_hex(0xD4D4D8),
    }
}
