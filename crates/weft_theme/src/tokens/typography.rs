//! Typography tokens

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    /// Sans-serif font stack
    pub font_sans: &'static str,
    /// Monospace font stack
    pub font_mono: &'static str,

    // Font sizes (px)
    pub text_xs: f32,
    pub text_sm: f32,
    pub text_base: f32,
    pub text_lg: f32,
    pub text_xl: f32,

    // Font weights
    pub weight_normal: u16,
    pub weight_medium: u16,
    pub weight_semibold: u16,

    // Line heights (unitless multipliers)
    pub leading_tight: f32,
    pub leading_normal: f32,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_sans: "ui-sans-serif, system-ui, sans-serif",
            font_mono: "ui-monospace, SFMono-Regular, Menlo, monospace",
            text_xs: 12.0,
            text_sm: 14.0,
            text_base: 16.0,
            text_lg: 18.0,
            text_xl: 20.0,
            weight_normal: 400,
            weight_medium: 500,
            weight_semibold: 600,
            leading_tight: 1.25,
            leading_normal: 1.5,
        }
    }
}
