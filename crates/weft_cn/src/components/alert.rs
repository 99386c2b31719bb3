//! Alert component
//!
//! Inline callout with an optional icon, title and description.

use std::sync::OnceLock;

use weft_core::{el, text, Node};
use weft_icons::{self as icons};

use crate::cn;
use crate::registry::ComponentSpec;
use crate::variant::{VariantAxis, VariantMap};

const BASE: &str = "relative w-full rounded-lg border px-4 py-3 text-sm \
                    [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg~*]:pl-7";

/// Alert visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl AlertVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-background text-foreground",
            Self::Destructive => {
                "border-destructive/50 text-destructive [&>svg]:text-destructive"
            }
        }
    }

    pub fn all() -> &'static [AlertVariant] {
        &[Self::Default, Self::Destructive]
    }

    fn icon_path(self) -> &'static str {
        match self {
            Self::Default => icons::INFO,
            Self::Destructive => icons::CIRCLE_ALERT,
        }
    }
}

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut variant = VariantAxis::new("variant");
        for v in AlertVariant::all() {
            variant = variant.option(v.as_str(), v.classes());
        }
        VariantMap::new("alert", BASE)
            .axis(variant.default_value(AlertVariant::default().as_str()))
    })
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants())
        .with_text("title", true)
        .with_text("description", false)
        .with_bool("icon", true)
}

pub struct AlertBuilder {
    title: String,
    description: Option<String>,
    variant: AlertVariant,
    icon: bool,
    class: Option<String>,
}

impl AlertBuilder {
    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Hide the leading icon
    pub fn without_icon(mut self) -> Self {
        self.icon = false;
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
        let mut node = el("div").attr("role", "alert").class(classes);
        if self.icon {
            node = node.child(weft_core::raw(icons::to_svg_with_stroke(
                self.variant.icon_path(),
                16.0,
                2.0,
            )));
        }
        node = node.child(
            el("h5")
                .class("mb-1 font-medium leading-none tracking-tight")
                .child(text(self.title)),
        );
        if let Some(description) = self.description {
            node = node.child(
                el("div")
                    .class("text-sm [&_p]:leading-relaxed")
                    .child(text(description)),
            );
        }
        node.into_node()
    }
}

/// Create an alert with a title
pub fn alert(title: impl Into<String>) -> AlertBuilder {
    AlertBuilder {
        title: title.into(),
        description: None,
        variant: AlertVariant::default(),
        icon: true,
        class: None,
    }
}
