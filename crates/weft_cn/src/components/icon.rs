//! Icon component
//!
//! Wraps the icon set's SVG output in a sized span. Icons can be picked
//! by constant or looked up by kebab-case name.

use std::sync::OnceLock;

use weft_core::{el, raw, Node};
use weft_icons::{self as icons};

use crate::cn;
use crate::error::ConfigurationError;
use crate::registry::ComponentSpec;
use crate::variant::{VariantAxis, VariantMap};

const BASE: &str = "inline-flex shrink-0 items-center justify-center";

/// Icon size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl IconSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Self::Small => "h-4 w-4",
            Self::Medium => "h-5 w-5",
            Self::Large => "h-6 w-6",
        }
    }

    pub fn all() -> &'static [IconSize] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    fn pixels(self) -> f32 {
        match self {
            Self::Small => 16.0,
            Self::Medium => 20.0,
            Self::Large => 24.0,
        }
    }
}

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut size = VariantAxis::new("size");
        for s in IconSize::all() {
            size = size.option(s.as_str(), s.classes());
        }
        VariantMap::new("icon", BASE)
            .axis(size.default_value(IconSize::default().as_str()))
    })
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants()).with_text("name", true)
}

#[derive(Debug)]
pub struct IconBuilder {
    path_data: &'static str,
    size: IconSize,
    class: Option<String>,
}

impl IconBuilder {
    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
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
            self.size.classes(),
            self.class.as_deref().unwrap_or(""),
        ])
    }

    pub fn render(self) -> Node {
        let classes = self.classes();
        el("span")
            .attr("aria-hidden", "true")
            .class(classes)
            .child(raw(icons::to_svg(self.path_data, self.size.pixels())))
            .into_node()
    }
}

/// Create an icon from path data (one of the [`weft_icons`] constants)
pub fn icon(path_data: &'static str) -> IconBuilder {
    IconBuilder {
        path_data,
        size: IconSize::default(),
        class: None,
    }
}

/// Create an icon by kebab-case name
pub fn icon_named(name: &str) -> Result<IconBuilder, ConfigurationError> {
    let path_data = icons::lookup(name).ok_or_else(|| ConfigurationError::UnknownIcon {
        name: name.to_string(),
    })?;
    Ok(icon(path_data))
}
