//! Dialog component
//!
//! Modal overlay plus centered panel. The host owns the open flag and the
//! focus trap; [`DialogBuilder::sync_focus`] bridges open/close edges to
//! the host's [`FocusScope`].

use std::sync::OnceLock;

use weft_core::{el, text, FocusScope, Node};

use crate::cn;
use crate::components::shared::{join_styles, overlay_shadow};
use crate::registry::ComponentSpec;
use crate::variant::VariantMap;

const OVERLAY: &str = "fixed inset-0 z-50 bg-black/80";

const PANEL: &str = "fixed left-1/2 top-1/2 z-50 grid w-full max-w-lg -translate-x-1/2 \
                     -translate-y-1/2 gap-4 border bg-background p-6 shadow-lg sm:rounded-lg";

pub fn variants() -> &'static VariantMap {
    static MAP: OnceLock<VariantMap> = OnceLock::new();
    MAP.get_or_init(|| VariantMap::new("dialog", PANEL))
}

pub(crate) fn spec() -> ComponentSpec {
    ComponentSpec::from_variants(variants())
        .with_text("title", true)
        .with_text("description", false)
        .with_bool("open", false)
}

pub struct DialogBuilder {
    title: String,
    description: Option<String>,
    body: Vec<Node>,
    open: bool,
    class: Option<String>,
}

impl DialogBuilder {
    /// Reflect the host-owned open flag
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a node to the dialog body
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    /// Caller class override for the panel, merged last so it wins conflicts
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        cn([PANEL, self.class.as_deref().unwrap_or("")])
    }

    /// Activate or release the host focus trap to match the open flag.
    /// Call once per open/close edge, not per render.
    pub fn sync_focus(&self, scope: &dyn FocusScope) {
        if self.open {
            scope.activate();
        } else {
            scope.release();
        }
    }

    /// Build the overlay and panel, or `None` when closed
    pub fn render(self) -> Option<Node> {
        if !self.open {
            return None;
        }
        let style = join_styles(&[overlay_shadow()]);
        let mut panel = el("div")
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .class(self.classes());
        if !style.is_empty() {
            panel = panel.attr("style", style);
        }
        panel = panel.child(
            el("h2")
                .class("text-lg font-semibold leading-none tracking-tight")
                .child(text(self.title)),
        );
        if let Some(description) = self.description {
            panel = panel.child(
                el("p")
                    .class("text-sm text-muted-foreground")
                    .child(text(description)),
            );
        }
        for node in self.body {
            panel = panel.child(node);
        }
        Some(
            el("div")
                .child(el("div").class(OVERLAY))
                .child(panel)
                .into_node(),
        )
    }
}

/// Create a dialog with a title
pub fn dialog(title: impl Into<String>) -> DialogBuilder {
    DialogBuilder {
        title: title.into(),
        description: None,
        body: Vec::new(),
        open: false,
        class: None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI32, Ordering};

    use super::*;

    #[test]
    fn test_closed_dialog_renders_nothing() {
        assert!(dialog("Confirm").render().is_none());
    }

    #[test]
    fn test_open_dialog_has_overlay_and_panel() {
        let html = dialog("Confirm").open(true).render().unwrap().to_html();
        assert!(html.contains("bg-black/80"));
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains(r#"aria-modal="true""#));
    }

    #[test]
    fn test_sync_focus_follows_open_flag() {
        struct Counter(AtomicI32);
        impl FocusScope for Counter {
            fn activate(&self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
            fn release(&self) {
                self.0.fetch_sub(1, Ordering::SeqCst);
            }
        }
        let scope = Counter(AtomicI32::new(0));
        dialog("x").open(true).sync_focus(&scope);
        assert_eq!(scope.0.load(Ordering::SeqCst), 1);
        dialog("x").open(false).sync_focus(&scope);
        assert_eq!(scope.0.load(Ordering::SeqCst), 0);
    }
}
