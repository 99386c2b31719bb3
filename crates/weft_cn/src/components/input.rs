//! Input component
//!
//! Single-line text field. The host owns the value; the builder only
//! reflects it into the render description.

use std::sync::OnceLock;

use weft_core::{el, Node};

use crate::cn;
use crate::registry::ComponentSpec;
use crate::variant::VariantMap;

const BASE: &str = "flex h-9 w-full rounded-md border border-input bg-transparent px-3 py-1 \
                    text-sm shadow-sm transition-colors file:border-0 file:bg-transparent \
                    file:text-sm file:font-medium placeholder:text-muted-foreground \
                    focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
                    disabled:cursor-not-allowed disabled:opacity-50";

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| VariantMap::new("input", BASE))
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants())
        .with_text("placeholder", false)
        .with_text("value", false)
        .with_bool("disabled", false)
}

pub struct InputBuilder {
    input_type: &'static str,
    id: Option<String>,
    placeholder: Option<String>,
    value: Option<String>,
    disabled: bool,
    class: Option<String>,
}

impl InputBuilder {
    /// Set the input type ("text", "email", "password", ...)
    pub fn input_type(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Reflect the host-owned value into the description
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
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
        cn([BASE, self.class.as_deref().unwrap_or("")])
    }

    pub fn render(self) -> Node {
        let classes = self.classes();
        let mut node = el("input").attr("type", self.input_type).class(classes);
        if let Some(id) = self.id {
            node = node.attr("id", id);
        }
        if let Some(placeholder) = self.placeholder {
            node = node.attr("placeholder", placeholder);
        }
        if let Some(value) = self.value {
            node = node.attr("value", value);
        }
        if self.disabled {
            node = node.attr("disabled", "");
        }
        node.into_node()
    }
}

/// Create a text input
pub fn input() -> InputBuilder {
    InputBuilder {
        input_type: "text",
        id: None,
        placeholder: None,
        value: None,
        disabled: false,
        class: None,
    }
}
