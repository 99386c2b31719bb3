//! Checkbox component
//!
//! The host owns the checked state and passes it in per render.

use std::sync::OnceLock;

use weft_core::{el, raw, Node};
use weft_icons::{self as icons};

use crate::cn;
use crate::registry::ComponentSpec;
use crate::variant::VariantMap;

const BASE: &str = "peer h-4 w-4 shrink-0 rounded-sm border border-primary shadow \
                    focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
                    disabled:cursor-not-allowed disabled:opacity-50";

const CHECKED: &str = "bg-primary text-primary-foreground";

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| VariantMap::new("checkbox", BASE))
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants())
        .with_bool("checked", false)
        .with_bool("disabled", false)
}

pub struct CheckboxBuilder {
    id: Option<String>,
    checked: bool,
    disabled: bool,
    class: Option<String>,
}

impl CheckboxBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Reflect the host-owned checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Caller class override, merged last so it wins conflicts
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        cn([
            BASE,
            if self.checked { CHECKED } else { "" },
            self.class.as_deref().unwrap_or(""),
        ])
    }

    pub fn render(self) -> Node {
        let classes = self.classes();
        let mut node = el("button")
            .attr("type", "button")
            .attr("role", "checkbox")
            .attr("aria-checked", if self.checked { "true" } else { "false" })
            .class(classes);
        if let Some(id) = self.id {
            node = node.attr("id", id);
        }
        if self.disabled {
            node = node.attr("disabled", "");
        }
        if self.checked {
            node = node.child(raw(icons::to_svg(icons::CHECK, 16.0)));
        }
        node.into_node()
    }
}

/// Create a checkbox
pub fn checkbox() -> CheckboxBuilder {
    CheckboxBuilder {
        id: None,
        checked: false,
        disabled: false,
        class: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_state() {
        let node = checkbox().render();
        let el = node.find("button").unwrap();
        assert_eq!(el.attr_value("aria-checked"), Some("false"));
        assert!(!node.to_html().contains("<svg"));
    }

    #[test]
    fn test_checked_state_shows_mark() {
        let node = checkbox().checked(true).render();
        let el = node.find("button").unwrap();
        assert_eq!(el.attr_value("aria-checked"), Some("true"));
        assert!(el.classes.contains("bg-primary"));
        assert!(node.to_html().contains("<svg"));
    }

    #[test]
    fn test_same_state_renders_identically() {
        let a = checkbox().checked(true).render().to_html();
        let b = checkbox().checked(true).render().to_html();
        assert_eq!(a, b);
    }
}
