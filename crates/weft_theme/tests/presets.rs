use weft_theme::{ColorScheme, ColorToken, RadiusToken, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["neutral", "slate", "weft", "zinc"]);
}

#[test]
fn preset_ids_round_trip() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(ThemePreset::from_id("nord"), None);
}

#[test]
fn bundles_have_distinct_light_and_dark_primary() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);
        let dark = bundle.for_scheme(ColorScheme::Dark);

        assert_ne!(
            light.color(ColorToken::Primary),
            dark.color(ColorToken::Primary),
            "Preset {:?} should have distinct light/dark primary colors",
            preset
        );
    }
}

#[test]
fn bundles_keep_foreground_contrast_pairs() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = bundle.for_scheme(scheme);
            assert_ne!(
                theme.color(ColorToken::Primary),
                theme.color(ColorToken::PrimaryForeground),
                "preset={preset:?} scheme={scheme:?}"
            );
            assert_ne!(
                theme.color(ColorToken::Background),
                theme.color(ColorToken::Foreground),
                "preset={preset:?} scheme={scheme:?}"
            );
        }
    }
}

#[test]
fn presets_share_the_default_radius_scale() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);
        assert_eq!(light.radius(RadiusToken::Sm), 4.0);
        assert_eq!(light.radius(RadiusToken::Md), 6.0);
        assert_eq!(light.radius(RadiusToken::Lg), 8.0);
    }
}

#[test]
fn popover_tokens_track_card_and_foreground() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = bundle.for_scheme(scheme);
            assert_eq!(
                theme.color(ColorToken::Popover),
                theme.color(ColorToken::Card),
                "preset={preset:?} scheme={scheme:?}"
            );
            assert_eq!(
                theme.color(ColorToken::PopoverForeground),
                theme.color(ColorToken::Foreground),
                "preset={preset:?} scheme={scheme:?}"
            );
        }
    }
}

#[test]
fn resolving_a_bundle_twice_is_identical() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.bundle(), preset.bundle());
    }
}
