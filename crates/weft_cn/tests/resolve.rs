//! String-driven resolution through the component catalog

use weft_cn::prelude::*;
use weft_cn::{catalog, PropKind, VariantAxis, VariantMap};

#[test]
fn test_catalog_lists_every_component() {
    let names: Vec<_> = catalog().keys().copied().collect();
    assert_eq!(
        names,
        [
            "button", "badge", "alert", "label", "input", "checkbox", "select", "tooltip",
            "dialog", "toast", "icon",
        ]
    );
}

#[test]
fn test_button_large_destructive_is_fixed() {
    let map = weft_cn::button::variants();
    let a = map
        .resolve(&[("size", "lg"), ("variant", "destructive")])
        .unwrap();
    let b = map
        .resolve(&[("variant", "destructive"), ("size", "lg")])
        .unwrap();
    // Axis declaration order decides output order, not caller order.
    assert_eq!(a, b);
    let classes = a.to_string();
    assert!(classes.starts_with("inline-flex"));
    assert!(classes.contains("h-10 rounded-md px-8"));
    assert!(classes.contains("bg-destructive"));
}

#[test]
fn test_resolution_is_deterministic() {
    let map = weft_cn::button::variants();
    let first = map.resolve(&[("size", "sm")]).unwrap().to_string();
    for _ in 0..10 {
        assert_eq!(map.resolve(&[("size", "sm")]).unwrap().to_string(), first);
    }
}

#[test]
fn test_unrecognized_value_uses_axis_default() {
    // Every button axis declares a default, so a bad value degrades to it
    // instead of erroring.
    let map = weft_cn::button::variants();
    let fallback = map.resolve(&[("size", "gigantic")]).unwrap();
    assert_eq!(fallback, map.resolve(&[]).unwrap());
    assert!(fallback.contains("h-9"));
}

#[test]
fn test_unknown_value_names_prop_and_value() {
    let map = VariantMap::new("chip", "inline-flex")
        .axis(VariantAxis::new("tone").option("brand", "bg-primary"));
    let err = map.resolve(&[("tone", "loud")]).unwrap_err();
    match &err {
        ConfigurationError::UnknownValue { component, prop, value } => {
            assert_eq!(*component, "chip");
            assert_eq!(*prop, "tone");
            assert_eq!(value, "loud");
        }
        other => panic!("expected UnknownValue, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("tone"));
    assert!(message.contains("loud"));
}

#[test]
fn test_unknown_prop_rejected() {
    let err = weft_cn::badge::variants()
        .resolve(&[("tone", "brand")])
        .unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::UnknownProp {
            component: "badge",
            prop: "tone".into(),
        }
    );
}

#[test]
fn test_every_catalog_enum_value_resolves() {
    for (name, spec) in catalog() {
        let variants = match *name {
            "button" => weft_cn::button::variants(),
            "badge" => weft_cn::badge::variants(),
            "alert" => weft_cn::alert::variants(),
            "label" => weft_cn::label::variants(),
            "input" => weft_cn::input::variants(),
            "checkbox" => weft_cn::checkbox::variants(),
            "select" => weft_cn::select::variants(),
            "tooltip" => weft_cn::tooltip::variants(),
            "dialog" => weft_cn::dialog::variants(),
            "toast" => weft_cn::toast::variants(),
            "icon" => weft_cn::icon::variants(),
            other => panic!("unexpected component {other}"),
        };
        for prop in spec.props() {
            if let PropKind::Enum(values) = &prop.kind {
                for value in values {
                    variants
                        .resolve(&[(prop.name, *value)])
                        .unwrap_or_else(|err| panic!("{name}.{}: {err}", prop.name));
                }
            }
        }
    }
}
