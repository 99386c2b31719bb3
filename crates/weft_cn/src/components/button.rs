//! Button component
//!
//! # Example
//!
//! ```
//! use weft_cn::prelude::*;
//!
//! let node = button("Save").render();
//!
//! button("Delete")
//!     .variant(ButtonVariant::Destructive)
//!     .size(ButtonSize::Large)
//!     .render();
//!
//! // Caller overrides merge last and win conflicts
//! button("Wide").class("w-full").render();
//! ```

use std::sync::OnceLock;

use weft_core::{el, text, Node};

use crate::cn;
use crate::registry::ComponentSpec;
use crate::variant::{VariantAxis, VariantMap};

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md \
                    text-sm font-medium transition-colors focus-visible:outline-none \
                    focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none \
                    disabled:opacity-50";

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Square button sized for a single icon
    Icon,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
            Self::Icon => "icon",
        }
    }

    /// Classes this size selects
    pub fn classes(self) -> &'static str {
        match self {
            Self::Small => "h-8 rounded-md px-3 text-xs",
            Self::Medium => "h-9 px-4 py-2",
            Self::Large => "h-10 rounded-md px-8",
            Self::Icon => "h-9 w-9",
        }
    }

    pub fn all() -> &'static [ButtonSize] {
        &[Self::Small, Self::Medium, Self::Large, Self::Icon]
    }
}

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Classes this variant selects
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            Self::Secondary => {
                "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"
            }
            Self::Destructive => {
                "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background shadow-sm hover:bg-accent \
                 hover:text-accent-foreground"
            }
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }

    pub fn all() -> &'static [ButtonVariant] {
        &[
            Self::Default,
            Self::Secondary,
            Self::Destructive,
            Self::Outline,
            Self::Ghost,
            Self::Link,
        ]
    }
}

/// The button's variant map, built from the typed enums
pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut size = VariantAxis::new("size");
        for s in ButtonSize::all() {
            size = size.option(s.as_str(), s.classes());
        }
        let mut variant = VariantAxis::new("variant");
        for v in ButtonVariant::all() {
            variant = variant.option(v.as_str(), v.classes());
        }
        VariantMap::new("button", BASE)
            .axis(size.default_value(ButtonSize::default().as_str()))
            .axis(variant.default_value(ButtonVariant::default().as_str()))
    })
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants())
        .with_bool("disabled", false)
        .with_text("label", true)
}

/// Builder for button render descriptions
pub struct ButtonBuilder {
    label: String,
    size: ButtonSize,
    variant: ButtonVariant,
    disabled: bool,
    class: Option<String>,
    leading: Option<Node>,
}

impl ButtonBuilder {
    /// Set the size variant
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the visual variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Caller class override, merged last so it wins conflicts
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Prepend a node (usually an icon) before the label
    pub fn leading(mut self, node: impl Into<Node>) -> Self {
        self.leading = Some(node.into());
        self
    }

    /// The merged class string for the current props
    pub fn classes(&self) -> String {
        cn([
            BASE,
            self.size.classes(),
            self.variant.classes(),
            self.class.as_deref().unwrap_or(""),
        ])
    }

    /// Build the render description
    pub fn render(self) -> Node {
        let classes = self.classes();
        let mut node = el("button").attr("type", "button").class(classes);
        if self.disabled {
            node = node.attr("disabled", "");
        }
        if let Some(leading) = self.leading {
            node = node.child(leading);
        }
        node.child(text(self.label)).into_node()
    }
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        label: label.into(),
        size: ButtonSize::default(),
        variant: ButtonVariant::default(),
        disabled: false,
        class: None,
        leading: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_classes() {
        let classes = button("Save").classes();
        assert!(classes.contains("inline-flex"));
        assert!(classes.contains("h-9"));
        assert!(classes.contains("bg-primary"));
    }

    #[test]
    fn test_typed_path_matches_variant_map() {
        for size in ButtonSize::all() {
            for variant in ButtonVariant::all() {
                let typed = button("x").size(*size).variant(*variant).classes();
                let resolved = variants()
                    .resolve(&[("size", size.as_str()), ("variant", variant.as_str())])
                    .unwrap();
                assert_eq!(typed, cn([resolved.to_string().as_str()]));
            }
        }
    }

    #[test]
    fn test_caller_override_wins() {
        let classes = button("x").class("bg-accent").classes();
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        assert!(tokens.contains(&"bg-accent"));
        // The bare background is replaced; the hover-scoped one is a
        // different modifier context and survives.
        assert!(!tokens.contains(&"bg-primary"));
        assert!(tokens.contains(&"hover:bg-primary/90"));
    }

    #[test]
    fn test_disabled_attribute() {
        let node = button("x").disabled(true).render();
        let el = node.find("button").unwrap();
        assert_eq!(el.attr_value("disabled"), Some(""));
    }

    #[test]
    fn test_render_is_deterministic() {
        let build = || {
            button("Delete")
                .variant(ButtonVariant::Destructive)
                .size(ButtonSize::Large)
                .render()
                .to_html()
        };
        assert_eq!(build(), build());
    }
}
