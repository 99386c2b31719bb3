//! Toast component
//!
//! Builds the notification markup and hands it to the host's
//! [`ToastSurface`]; stacking, timing and dismissal are host concerns.

use std::sync::OnceLock;

use weft_core::{el, raw, text, Corner, Node, ToastMessage, ToastSurface};
use weft_icons::{self as icons};

use crate::cn;
use crate::registry::ComponentSpec;
use crate::variant::{VariantAxis, VariantMap};

const BASE: &str = "pointer-events-auto relative flex w-full items-center gap-3 \
                    overflow-hidden rounded-md border p-4 pr-6 shadow-lg transition-all";

/// Default auto-dismiss window in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 5000;

/// Toast visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Destructive,
}

impl ToastVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Destructive => "destructive",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "border bg-background text-foreground",
            Self::Success => "border bg-background text-foreground [&>svg]:text-primary",
            Self::Destructive => {
                "destructive group border-destructive bg-destructive \
                 text-destructive-foreground"
            }
        }
    }

    pub fn all() -> &'static [ToastVariant] {
        &[Self::Default, Self::Success, Self::Destructive]
    }

    fn icon_path(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Success => Some(icons::CHECK_CIRCLE),
            Self::Destructive => Some(icons::CIRCLE_ALERT),
        }
    }
}

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut variant = VariantAxis::new("variant");
        for v in ToastVariant::all() {
            variant = variant.option(v.as_str(), v.classes());
        }
        VariantMap::new("toast", BASE)
            .axis(variant.default_value(ToastVariant::default().as_str()))
    })
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants())
        .with_text("title", true)
        .with_text("description", false)
}

pub struct ToastBuilder {
    title: String,
    description: Option<String>,
    variant: ToastVariant,
    duration_ms: u32,
    corner: Corner,
    class: Option<String>,
}

impl ToastBuilder {
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Auto-dismiss window; 0 requests a persistent toast
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Screen corner to stack in (default bottom-right)
    pub fn corner(mut self, corner: Corner) -> Self {
        self.corner = corner;
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

    /// Build the notification markup without dispatching it
    pub fn markup(&self) -> Node {
        let mut node = el("div")
            .attr("role", "status")
            .class(self.classes());
        if let Some(path) = self.variant.icon_path() {
            node = node.child(raw(icons::to_svg(path, 16.0)));
        }
        let mut body = el("div").class("grid gap-1");
        body = body.child(
            el("div")
                .class("text-sm font-semibold")
                .child(text(self.title.clone())),
        );
        if let Some(description) = &self.description {
            body = body.child(
                el("div")
                    .class("text-sm opacity-90")
                    .child(text(description.clone())),
            );
        }
        node.child(body).into_node()
    }

    /// Dispatch to the host's toast surface
    pub fn show(self, surface: &dyn ToastSurface) {
        let message = ToastMessage {
            markup: self.markup(),
            duration_ms: self.duration_ms,
            corner: self.corner,
        };
        surface.push(message);
    }
}

/// Create a toast with a title
pub fn toast(title: impl Into<String>) -> ToastBuilder {
    ToastBuilder {
        title: title.into(),
        description: None,
        variant: ToastVariant::default(),
        duration_ms: DEFAULT_DURATION_MS,
        corner: Corner::default(),
        class: None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Recorder(Mutex<Vec<ToastMessage>>);

    impl ToastSurface for Recorder {
        fn push(&self, message: ToastMessage) {
            self.0.lock().unwrap().push(message);
        }
    }

    #[test]
    fn test_show_pushes_to_surface() {
        let surface = Recorder(Mutex::new(Vec::new()));
        toast("Saved").description("Your changes were saved.").show(&surface);
        let messages = surface.0.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(messages[0].corner, Corner::BottomRight);
        assert!(messages[0].markup.to_html().contains("Saved"));
    }

    #[test]
    fn test_persistent_toast() {
        let surface = Recorder(Mutex::new(Vec::new()));
        toast("Offline").duration_ms(0).corner(Corner::TopRight).show(&surface);
        let messages = surface.0.lock().unwrap();
        assert_eq!(messages[0].duration_ms, 0);
        assert_eq!(messages[0].corner, Corner::TopRight);
    }

    #[test]
    fn test_destructive_markup() {
        let html = toast("Failed").variant(ToastVariant::Destructive).markup().to_html();
        assert!(html.contains("bg-destructive"));
        assert!(html.contains("<svg"));
    }
}
