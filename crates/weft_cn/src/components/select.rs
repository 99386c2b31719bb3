//! Select component
//!
//! The trigger is pure. The floating option list is positioned through
//! the host's [`Positioner`]; the host owns selection and open state.

use std::sync::OnceLock;

use weft_core::{el, raw, text, Node, Placement, Positioner, Rect, Size};
use weft_icons::{self as icons};

use crate::cn;
use crate::components::shared::{join_styles, overlay_shadow, position_style};
use crate::registry::ComponentSpec;
use crate::variant::VariantMap;

const TRIGGER: &str = "flex h-9 w-full items-center justify-between whitespace-nowrap \
                       rounded-md border border-input bg-transparent px-3 py-2 text-sm \
                       shadow-sm focus:outline-none focus:ring-1 focus:ring-ring \
                       disabled:cursor-not-allowed disabled:opacity-50";

const CONTENT: &str = "z-50 min-w-[8rem] overflow-hidden rounded-md border bg-popover \
                       text-popover-foreground shadow-md";

const ITEM: &str = "relative flex w-full cursor-default select-none items-center rounded-sm \
                    py-1.5 pl-2 pr-8 text-sm outline-none focus:bg-accent \
                    focus:text-accent-foreground";

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| VariantMap::new("select", TRIGGER))
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants())
        .with_text("placeholder", false)
        .with_text("value", false)
        .with_bool("disabled", false)
}

pub struct SelectBuilder {
    placeholder: String,
    options: Vec<(String, String)>,
    selected: Option<String>,
    disabled: bool,
    class: Option<String>,
}

impl SelectBuilder {
    /// Add an option as a value/label pair
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push((value.into(), label.into()));
        self
    }

    /// Reflect the host-owned selection
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Caller class override for the trigger, merged last so it wins conflicts
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        cn([TRIGGER, self.class.as_deref().unwrap_or("")])
    }

    fn selected_label(&self) -> Option<&str> {
        let selected = self.selected.as_deref()?;
        self.options
            .iter()
            .find(|(value, _)| value == selected)
            .map(|(_, label)| label.as_str())
    }

    /// Build the trigger description
    pub fn render(&self) -> Node {
        let label = self
            .selected_label()
            .map(str::to_string)
            .unwrap_or_else(|| self.placeholder.clone());
        let muted = self.selected_label().is_none();
        let mut node = el("button")
            .attr("type", "button")
            .attr("role", "combobox")
            .class(self.classes());
        if self.disabled {
            node = node.attr("disabled", "");
        }
        let mut value = el("span").child(text(label));
        if muted {
            value = value.class("text-muted-foreground");
        }
        node.child(value)
            .child(raw(icons::to_svg(icons::CHEVRON_DOWN, 16.0)))
            .into_node()
    }

    /// Build the floating option list, positioned below the trigger's
    /// anchor rect by the host's positioner.
    pub fn render_content(&self, positioner: &dyn Positioner, anchor: Rect) -> Node {
        let size = Size::new(anchor.width.max(128.0), self.content_height());
        let point = positioner.position(anchor, size, Placement::default());
        let style = join_styles(&[Some(position_style(point)), overlay_shadow()]);
        let mut list = el("div")
            .attr("role", "listbox")
            .attr("style", style)
            .class(cn([CONTENT, "p-1"]));
        for (value, label) in &self.options {
            let is_selected = self.selected.as_deref() == Some(value.as_str());
            let mut item = el("div")
                .attr("role", "option")
                .attr("data-value", value.clone())
                .attr("aria-selected", if is_selected { "true" } else { "false" })
                .class(ITEM)
                .child(text(label.clone()));
            if is_selected {
                item = item.child(
                    el("span")
                        .class("absolute right-2 flex h-3.5 w-3.5 items-center justify-center")
                        .child(raw(icons::to_svg(icons::CHECK, 14.0))),
                );
            }
            list = list.child(item);
        }
        list.into_node()
    }

    // Rough estimate for positioning; hosts with real measurement
    // can position the node themselves.
    fn content_height(&self) -> f32 {
        8.0 + self.options.len() as f32 * 32.0
    }
}

/// Create a select with a placeholder
pub fn select(placeholder: impl Into<String>) -> SelectBuilder {
    SelectBuilder {
        placeholder: placeholder.into(),
        options: Vec::new(),
        selected: None,
        disabled: false,
        class: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::FlowPositioner;

    fn sample() -> SelectBuilder {
        select("Pick a fruit")
            .option("apple", "Apple")
            .option("pear", "Pear")
    }

    #[test]
    fn test_placeholder_when_nothing_selected() {
        let html = sample().render().to_html();
        assert!(html.contains("Pick a fruit"));
        assert!(html.contains("text-muted-foreground"));
    }

    #[test]
    fn test_selected_label_shown() {
        let html = sample().selected("pear").render().to_html();
        assert!(html.contains("Pear"));
        assert!(!html.contains("text-muted-foreground"));
    }

    #[test]
    fn test_content_marks_selection() {
        let positioner = FlowPositioner::default();
        let anchor = Rect::new(10.0, 10.0, 200.0, 36.0);
        let node = sample().selected("apple").render_content(&positioner, anchor);
        let html = node.to_html();
        assert!(html.contains(r#"aria-selected="true""#));
        assert!(html.contains(r#"data-value="apple""#));
    }

    #[test]
    fn test_content_positioned_below_anchor() {
        let positioner = FlowPositioner::default();
        let anchor = Rect::new(10.0, 10.0, 200.0, 36.0);
        let node = sample().render_content(&positioner, anchor);
        let style = node.find("div").unwrap().attr_value("style").unwrap();
        assert!(style.contains("top: 50px"));
    }
}
