//! Helpers shared across components

use weft_core::Point;
use weft_theme::{ShadowToken, ThemeState};

/// Inline position declarations for a floating element
pub(crate) fn position_style(point: Point) -> String {
    format!("position: absolute; left: {}px; top: {}px;", point.x, point.y)
}

/// Themed box-shadow declaration for overlay surfaces.
///
/// Falls back to class-only styling when no theme is installed, so pure
/// rendering keeps working in isolation.
pub(crate) fn overlay_shadow() -> Option<String> {
    let theme = ThemeState::try_get()?;
    Some(format!(
        "box-shadow: {};",
        theme.shadows().get(ShadowToken::Md)
    ))
}

/// Join inline style fragments, skipping empties
pub(crate) fn join_styles(fragments: &[Option<String>]) -> String {
    let mut out = String::new();
    for fragment in fragments.iter().flatten() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out
}
