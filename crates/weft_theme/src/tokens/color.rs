//! Color tokens

use weft_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
}

impl ColorToken {
    /// Every token, in stylesheet emission order
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 19] = [
            ColorToken::Background,
            ColorToken::Foreground,
            ColorToken::Card,
            ColorToken::CardForeground,
            ColorToken::Popover,
            ColorToken::PopoverForeground,
            ColorToken::Primary,
            ColorToken::PrimaryForeground,
            ColorToken::Secondary,
            ColorToken::SecondaryForeground,
            ColorToken::Muted,
            ColorToken::MutedForeground,
            ColorToken::Accent,
            ColorToken::AccentForeground,
            ColorToken::Destructive,
            ColorToken::DestructiveForeground,
            ColorToken::Border,
            ColorToken::Input,
            ColorToken::Ring,
        ];
        &TOKENS
    }

    /// Stable kebab-case name, used for CSS variables and config files
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popover-foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
        }
    }

    /// Look up a token by its stable name
    pub fn from_name(name: &str) -> Option<ColorToken> {
        ColorToken::all().iter().copied().find(|t| t.name() == name)
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub background: Color,
    pub foreground: Color,
    pub card: Color,
    pub card_foreground: Color,
    pub popover: Color,
    pub popover_foreground: Color,
    pub primary: Color,
    pub primary_foreground: Color,
    pub secondary: Color,
    pub secondary_foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,
    pub accent: Color,
    pub accent_foreground: Color,
    pub destructive: Color,
    pub destructive_foreground: Color,
    pub border: Color,
    pub input: Color,
    pub ring: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Foreground => self.foreground,
            ColorToken::Card => self.card,
            ColorToken::CardForeground => self.card_foreground,
            ColorToken::Popover => self.popover,
            ColorToken::PopoverForeground => self.popover_foreground,
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryForeground => self.primary_foreground,
            ColorToken::Secondary => self.secondary,
            ColorToken::SecondaryForeground => self.secondary_foreground,
            ColorToken::Muted => self.muted,
            ColorToken::MutedForeground => self.muted_foreground,
            ColorToken::Accent => self.accent,
            ColorToken::AccentForeground => self.accent_foreground,
            ColorToken::Destructive => self.destructive,
            ColorToken::DestructiveForeground => self.destructive_foreground,
            ColorToken::Border => self.border,
            ColorToken::Input => self.input,
            ColorToken::Ring => self.ring,
        }
    }

    /// Set a color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        match token {
            ColorToken::Background => self.background = color,
            ColorToken::Foreground => self.foreground = color,
            ColorToken::Card => self.card = color,
            ColorToken::CardForeground => self.card_foreground = color,
            ColorToken::Popover => self.popover = color,
            ColorToken::PopoverForeground => self.popover_foreground = color,
            ColorToken::Primary => self.primary = color,
            ColorToken::PrimaryForeground => self.primary_foreground = color,
            ColorToken::Secondary => self.secondary = color,
            ColorToken::SecondaryForeground => self.secondary_foreground = color,
            ColorToken::Muted => self.muted = color,
            ColorToken::MutedForeground => self.muted_foreground = color,
            ColorToken::Accent => self.accent = color,
            ColorToken::AccentForeground => self.accent_foreground = color,
            ColorToken::Destructive => self.destructive = color,
            ColorToken::DestructiveForeground => self.destructive_foreground = color,
            ColorToken::Border => self.border = color,
            ColorToken::Input => self.input = color,
            ColorToken::Ring => self.ring = color,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Neutral light palette
        Self {
            background: Color::from_hex(0xFFFFFF),
            foreground: Color::from_hex(0x0A0A0A),
            card: Color::from_hex(0xFFFFFF),
            card_foreground: Color::from_hex(0x0A0A0A),
            popover: Color::from_hex(0xFFFFFF),
            popover_foreground: Color::from_hex(0x0A0A0A),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for token in ColorToken::all() {
            assert_eq!(ColorToken::from_name(token.name()), Some(*token));
        }
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut tokens = ColorTokens::default();
        let red = Color::from_hex(0xFF0000);
        tokens.set(ColorToken::Ring, red);
        assert_eq!(tokens.get(ColorToken::Ring), red);
    }
}
