//! Label component

use std::sync::OnceLock;

use weft_core::{el, text, Node};

use crate::cn;
use crate::registry::ComponentSpec;
use crate::variant::VariantMap;

const BASE: &str = "text-sm font-medium leading-none \
                    peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| VariantMap::new("label", BASE))
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants())
        .with_text("text", true)
        .with_text("for", false)
}

pub struct LabelBuilder {
    text: String,
    html_for: Option<String>,
    class: Option<String>,
}

impl LabelBuilder {
    /// Set the id of the control this label describes
    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
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

    pub fn render(self) -> Node {
        let classes = self.classes();
        let mut node = el("label").class(classes);
        if let Some(html_for) = self.html_for {
            node = node.attr("for", html_for);
        }
        node.child(text(self.text)).into_node()
    }
}

/// Create a label with its text
pub fn label(text: impl Into<String>) -> LabelBuilder {
    LabelBuilder {
        text: text.into(),
        html_for: None,
        class: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_attribute() {
        let node = label("Email").html_for("email").render();
        let el = node.find("label").unwrap();
        assert_eq!(el.attr_value("for"), Some("email"));
    }

    #[test]
    fn test_override_beats_base() {
        let classes = label("x").class("text-base").classes();
        assert!(classes.contains("text-base"));
        assert!(!classes.contains("text-sm"));
    }
}
