//! Tooltip component
//!
//! Hover/focus timing and visibility are host concerns; this module only
//! describes the bubble and positions it through the host's [`Positioner`].

use std::sync::OnceLock;

use weft_core::{el, text, Node, Placement, Positioner, Rect, Side, Size};

use crate::cn;
use crate::components::shared::{join_styles, overlay_shadow, position_style};
use crate::registry::ComponentSpec;
use crate::variant::VariantMap;

const BASE: &str = "z-50 overflow-hidden rounded-md bg-primary px-3 py-1.5 text-xs \
                    text-primary-foreground animate-in fade-in-0 zoom-in-95";

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| VariantMap::new("tooltip", BASE))
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants()).with_text("text", true)
}

pub struct TooltipBuilder {
    text: String,
    side: Side,
    class: Option<String>,
}

impl TooltipBuilder {
    /// Which side of the anchor the bubble goes on (default top)
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Caller class override, merged last so it wins conflicts
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        cn([BASE, self.class.as_deref().unwrap_or("")])
    }

    /// Build the bubble, positioned against the anchor rect
    pub fn render(&self, positioner: &dyn Positioner, anchor: Rect) -> Node {
        let size = self.estimated_size();
        let point = positioner.position(anchor, size, Placement::side(self.side));
        let style = join_styles(&[Some(position_style(point)), overlay_shadow()]);
        el("div")
            .attr("role", "tooltip")
            .attr("style", style)
            .class(self.classes())
            .child(text(self.text.clone()))
            .into_node()
    }

    // Rough estimate for positioning, 6px per character plus padding.
    fn estimated_size(&self) -> Size {
        Size::new(self.text.len() as f32 * 6.0 + 24.0, 26.0)
    }
}

/// Create a tooltip with its text
pub fn tooltip(text: impl Into<String>) -> TooltipBuilder {
    TooltipBuilder {
        text: text.into(),
        side: Side::Top,
        class: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::FlowPositioner;

    #[test]
    fn test_tooltip_role_and_text() {
        let positioner = FlowPositioner::default();
        let anchor = Rect::new(100.0, 100.0, 40.0, 20.0);
        let node = tooltip("Save").render(&positioner, anchor);
        let el = node.find("div").unwrap();
        assert_eq!(el.attr_value("role"), Some("tooltip"));
        assert!(node.to_html().contains("Save"));
    }

    #[test]
    fn test_default_side_is_above_anchor() {
        let positioner = FlowPositioner::default();
        let anchor = Rect::new(100.0, 100.0, 40.0, 20.0);
        let node = tooltip("Save").render(&positioner, anchor);
        let style = node.find("div").unwrap().attr_value("style").unwrap();
        // top side: anchor.y (100) - height (26) - gap (4) = 70
        assert!(style.contains("top: 70px"));
    }

    #[test]
    fn test_side_override() {
        let positioner = FlowPositioner::default();
        let anchor = Rect::new(100.0, 100.0, 40.0, 20.0);
        let node = tooltip("Save").side(Side::Bottom).render(&positioner, anchor);
        let style = node.find("div").unwrap().attr_value("style").unwrap();
        assert!(style.contains("top: 124px"));
    }
}
