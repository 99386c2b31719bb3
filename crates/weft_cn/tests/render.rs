//! End-to-end render descriptions, including caller overrides and
//! host capability wiring

use weft_cn::prelude::*;

#[test]
fn test_button_render_is_pure() {
    let build = || {
        button("Delete")
            .size(ButtonSize::Large)
            .variant(ButtonVariant::Destructive)
            .render()
            .to_html()
    };
    let html = build();
    assert_eq!(html, build());
    assert!(html.starts_with("<button"));
    assert!(html.contains("bg-destructive"));
    assert!(html.contains("Delete"));
}

#[test]
fn test_caller_override_beats_variant_color() {
    // The link variant paints text-primary; a caller text color replaces it.
    let classes = button("x")
        .variant(ButtonVariant::Link)
        .class("text-blue-500")
        .classes();
    let tokens: Vec<&str> = classes.split_whitespace().collect();
    assert!(tokens.contains(&"text-blue-500"));
    assert!(!tokens.contains(&"text-primary"));
}

#[test]
fn test_merged_classes_are_idempotent() {
    let once = button("x").class("px-6 text-blue-500").classes();
    let twice = cn([once.as_str()]);
    assert_eq!(once, twice);
}

#[test]
fn test_text_content_is_escaped() {
    let html = badge("<script>").render().to_html();
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_floating_pieces_share_the_positioner() {
    let positioner = FlowPositioner::default();
    let anchor = Rect::new(0.0, 0.0, 100.0, 30.0);

    let content = select("Pick")
        .option("a", "A")
        .render_content(&positioner, anchor);
    let style = content.find("div").unwrap().attr_value("style").unwrap();
    assert!(style.contains("position: absolute"));

    let bubble = tooltip("hi").side(Side::Right).render(&positioner, anchor);
    let style = bubble.find("div").unwrap().attr_value("style").unwrap();
    // right side: anchor.right (100) + gap (4)
    assert!(style.contains("left: 104px"));
}

#[test]
fn test_dialog_lifecycle() {
    assert!(dialog("Confirm").render().is_none());
    let open = dialog("Confirm")
        .description("This cannot be undone.")
        .child(button("Cancel").variant(ButtonVariant::Outline).render())
        .child(button("Continue").variant(ButtonVariant::Destructive).render())
        .open(true)
        .render()
        .unwrap();
    let html = open.to_html();
    assert!(html.contains("This cannot be undone."));
    assert!(html.contains("Cancel"));
    assert!(html.contains("bg-destructive"));
}

#[test]
fn test_icon_inside_button() {
    let html = button("Search")
        .leading(icon_named("search").unwrap().render())
        .render()
        .to_html();
    assert!(html.contains("<svg"));
    assert!(html.contains("Search"));
}
