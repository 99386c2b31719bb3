//! CSS custom property generation
//!
//! Renders a theme bundle as the stylesheet artifact consumers load next to
//! the component bundle: color, radius and shadow tokens become CSS
//! variables, with the light scheme on `:root` and the dark scheme under a
//! `.dark` class.

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::{ColorToken, RadiusToken, ShadowToken};

/// Render one scheme's tokens as a CSS declaration block body
fn declarations(theme: &Theme, out: &mut String) {
    for token in ColorToken::all() {
        out.push_str("  --");
        out.push_str(token.name());
        out.push_str(": ");
        out.push_str(&theme.colors.get(*token).to_css());
        out.push_str(";\n");
    }
    for token in [RadiusToken::Sm, RadiusToken::Md, RadiusToken::Lg, RadiusToken::Xl] {
        out.push_str("  --");
        out.push_str(token.name());
        out.push_str(": ");
        out.push_str(&format!("{}px", theme.radii.get(token)));
        out.push_str(";\n");
    }
    for token in [ShadowToken::Sm, ShadowToken::Md, ShadowToken::Lg] {
        out.push_str("  --");
        out.push_str(token.name());
        out.push_str(": ");
        out.push_str(theme.shadows.get(token));
        out.push_str(";\n");
    }
}

/// Render a bundle as a complete stylesheet
pub fn stylesheet(bundle: &ThemeBundle) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str(":root {\n");
    declarations(bundle.for_scheme(ColorScheme::Light), &mut out);
    out.push_str("}\n\n.dark {\n");
    declarations(bundle.for_scheme(ColorScheme::Dark), &mut out);
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ThemePreset;

    #[test]
    fn test_stylesheet_contains_every_color_token_twice() {
        let css = stylesheet(&ThemePreset::Weft.bundle());
        for token in ColorToken::all() {
            let var = format!("--{}:", token.name());
            assert_eq!(
                css.matches(&var).count(),
                2,
                "token {} should appear in :root and .dark",
                token.name()
            );
        }
    }

    #[test]
    fn test_stylesheet_has_root_and_dark_blocks() {
        let css = stylesheet(&ThemePreset::Slate.bundle());
        assert!(css.starts_with(":root {"));
        assert!(css.contains(".dark {"));
        assert!(css.contains("--radius-md: 6px;"));
        assert!(css.contains("--shadow-lg:"));
    }

    #[test]
    fn test_stylesheet_is_deterministic() {
        let bundle = ThemePreset::Zinc.bundle();
        assert_eq!(stylesheet(&bundle), stylesheet(&bundle));
    }
}
