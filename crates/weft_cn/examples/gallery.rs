//! Renders one of everything to stdout as a static HTML page.
//!
//! ```sh
//! cargo run -p weft_cn --example gallery > gallery.html
//! ```

use weft_cn::catalog;
use weft_cn::prelude::*;
use weft_theme::{stylesheet, ThemePreset, ThemeState};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    ThemeState::install(ThemePreset::Weft.bundle(), weft_theme::ColorScheme::Light);
    tracing::info!(components = catalog().len(), "rendering gallery");

    let positioner = FlowPositioner::default();
    let anchor = Rect::new(40.0, 200.0, 160.0, 36.0);

    let mut body = weft_core::el("div").class("mx-auto flex max-w-xl flex-col gap-6 p-8");

    body = body.child(
        weft_core::el("div")
            .class("flex flex-wrap gap-2")
            .child(button("Default").render())
            .child(button("Secondary").variant(ButtonVariant::Secondary).render())
            .child(button("Delete").variant(ButtonVariant::Destructive).size(ButtonSize::Large).render())
            .child(button("Ghost").variant(ButtonVariant::Ghost).size(ButtonSize::Small).render())
            .child(
                button("Search")
                    .variant(ButtonVariant::Outline)
                    .leading(icon_named("search").unwrap().size(IconSize::Small).render())
                    .render(),
            ),
    );

    body = body.child(
        weft_core::el("div")
            .class("flex gap-2")
            .child(badge("New").render())
            .child(badge("Beta").variant(BadgeVariant::Secondary).render())
            .child(badge("Deprecated").variant(BadgeVariant::Destructive).render()),
    );

    body = body.child(
        alert("Heads up")
            .description("You can theme every component through CSS variables.")
            .render(),
    );
    body = body.child(
        alert("Something went wrong")
            .variant(AlertVariant::Destructive)
            .description("Your session has expired.")
            .render(),
    );

    body = body.child(
        weft_core::el("div")
            .class("flex flex-col gap-2")
            .child(label("Email").html_for("email").render())
            .child(input().id("email").input_type("email").placeholder("you@example.com").render())
            .child(checkbox().id("remember").checked(true).render()),
    );

    let fruit = select("Pick a fruit")
        .option("apple", "Apple")
        .option("pear", "Pear")
        .option("plum", "Plum")
        .selected("pear");
    body = body.child(fruit.render());
    body = body.child(fruit.render_content(&positioner, anchor));
    body = body.child(tooltip("Tooltips float too").render(&positioner, anchor));

    if let Some(node) = dialog("Delete file?")
        .description("This cannot be undone.")
        .child(button("Cancel").variant(ButtonVariant::Outline).render())
        .child(button("Delete").variant(ButtonVariant::Destructive).render())
        .open(true)
        .render()
    {
        body = body.child(node);
    }

    body = body.child(toast("Saved").variant(ToastVariant::Success).markup());

    println!(
        "<!doctype html><html><head><style>{}</style></head><body class=\"bg-background text-foreground\">{}</body></html>",
        stylesheet(&ThemePreset::Weft.bundle()),
        body.into_node().to_html()
    );
}
