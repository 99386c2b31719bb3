//! Badge component
//!
//! Small status label. Purely presentational.

use std::sync::OnceLock;

use weft_core::{el, text, Node};

use crate::cn;
use crate::registry::ComponentSpec;
use crate::variant::{VariantAxis, VariantMap};

const BASE: &str = "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs \
                    font-semibold transition-colors focus:outline-none focus:ring-2 \
                    focus:ring-ring focus:ring-offset-2";

/// Badge visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => {
                "border-transparent bg-primary text-primary-foreground shadow hover:bg-primary/80"
            }
            Self::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            Self::Destructive => {
                "border-transparent bg-destructive text-destructive-foreground shadow \
                 hover:bg-destructive/80"
            }
            Self::Outline => "text-foreground",
        }
    }

    pub fn all() -> &'static [BadgeVariant] {
        &[Self::Default, Self::Secondary, Self::Destructive, Self::Outline]
    }
}

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut variant = VariantAxis::new("variant");
        for v in BadgeVariant::all() {
            variant = variant.option(v.as_str(), v.classes());
        }
        VariantMap::new("badge", BASE)
            .axis(variant.default_value(BadgeVariant::default().as_str()))
    })
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants()).with_text("label", true)
}

pub struct BadgeBuilder {
    label: String,
    variant: BadgeVariant,
    class: Option<String>,
}

impl BadgeBuilder {
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
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
            self.variant.classes(),
            self.class.as_deref().unwrap_or(""),
        ])
    }

    pub fn render(self) -> Node {
        let classes = self.classes();
        el("span").class(classes).child(text(self.label)).into_node()
    }
}

/// Create a badge with a label
pub fn badge(label: impl Into<String>) -> BadgeBuilder {
    BadgeBuilder {
        label: label.into(),
        variant: BadgeVariant::default(),
        class: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_badge_classes() {
        let classes = badge("New").classes();
        assert!(classes.contains("rounded-md"));
        assert!(classes.contains("bg-primary"));
    }

    #[test]
    fn test_outline_has_no_fill() {
        let classes = badge("New").variant(BadgeVariant::Outline).classes();
        assert!(!classes.contains("bg-primary"));
        assert!(classes.contains("text-foreground"));
    }

    #[test]
    fn test_typed_path_matches_variant_map() {
        for v in BadgeVariant::all() {
            let typed = badge("x").variant(*v).classes();
            let resolved = variants().resolve(&[("variant", v.as_str())]).unwrap();
            assert_eq!(typed, cn([resolved.to_string().as_str()]));
        }
    }
}
