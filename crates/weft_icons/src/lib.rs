//! # Weft Icons
//!
//! Curated Lucide-based glyph set for the Weft component library.
//!
//! Icons are available as `pub const` path data and by kebab-case name via
//! [`lookup`], for registry-driven callers that only hold a string.
//!
//! ## Usage
//!
//! ```
//! use weft_icons::{icons, lookup, to_svg};
//!
//! // Direct const access (DCE-friendly)
//! let svg = to_svg(icons::CHECK, 24.0);
//! assert!(svg.contains("<path"));
//!
//! // Name-to-glyph lookup
//! assert_eq!(lookup("check"), Some(icons::CHECK));
//! assert_eq!(lookup("does-not-exist"), None);
//! ```

pub mod icons;

pub use icons::*;

/// Default Lucide viewBox (all icons are 24x24)
pub const VIEW_BOX: (f32, f32, f32, f32) = (0.0, 0.0, 24.0, 24.0);

/// Default stroke width for Lucide icons
pub const STROKE_WIDTH: f32 = 2.0;

/// Look up icon path data by kebab-case name
pub fn lookup(name: &str) -> Option<&'static str> {
    let data = match name {
        "check" => icons::CHECK,
        "check-circle" => icons::CHECK_CIRCLE,
        "chevron-down" => icons::CHEVRON_DOWN,
        "chevron-up" => icons::CHEVRON_UP,
        "chevron-right" => icons::CHEVRON_RIGHT,
        "chevron-left" => icons::CHEVRON_LEFT,
        "circle" => icons::CIRCLE,
        "circle-alert" => icons::CIRCLE_ALERT,
        "circle-x" => icons::CIRCLE_X,
        "info" => icons::INFO,
        "loader" => icons::LOADER,
        "minus" => icons::MINUS,
        "plus" => icons::PLUS,
        "search" => icons::SEARCH,
        "triangle-alert" => icons::TRIANGLE_ALERT,
        "x" => icons::X,
        _ => return None,
    };
    Some(data)
}

/// Every registered icon name, in lookup order
pub fn names() -> &'static [&'static str] {
    &[
        "check",
        "check-circle",
        "chevron-down",
        "chevron-up",
        "chevron-right",
        "chevron-left",
        "circle",
        "circle-alert",
        "circle-x",
        "info",
        "loader",
        "minus",
        "plus",
        "search",
        "triangle-alert",
        "x",
    ]
}

/// Generate a complete SVG string from icon path data
pub fn to_svg(path_data: &str, size: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{path_data}</svg>"#
    )
}

/// Generate SVG with custom stroke width
pub fn to_svg_with_stroke(path_data: &str, size: f32, stroke_width: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round">{path_data}</svg>"#
    )
}
