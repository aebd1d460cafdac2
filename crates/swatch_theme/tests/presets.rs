use swatch_theme::{ColorScheme, ColorToken, RadiusToken, Theme, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["neutral", "slate", "swatch"]);
}

#[test]
fn preset_ids_round_trip() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(ThemePreset::from_id("zinc"), None);
}

#[test]
fn bundles_have_distinct_light_and_dark_primary() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);
        let dark = bundle.for_scheme(ColorScheme::Dark);

        assert_ne!(
            light.colors().get(ColorToken::Primary),
            dark.colors().get(ColorToken::Primary),
            "Preset {:?} should have distinct light/dark primary colors",
            preset
        );
        assert_eq!(light.color_scheme(), ColorScheme::Light);
        assert_eq!(dark.color_scheme(), ColorScheme::Dark);
    }
}

#[test]
fn palette_presets_use_expected_radii() {
    for preset in [ThemePreset::Neutral, ThemePreset::Slate] {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);

        assert_eq!(
            light.radii().get(RadiusToken::Md),
            10.0,
            "Preset {:?} should use md=10.0",
            preset
        );
        assert_eq!(light.radii().get(RadiusToken::Sm), 6.0, "preset={preset:?}");
        assert_eq!(light.radii().get(RadiusToken::Lg), 14.0, "preset={preset:?}");
    }
}

#[test]
fn bundle_name_matches_display_name() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.bundle().name(), preset.display_name());
        assert_eq!(preset.to_string(), preset.display_name());
    }
}
