use pretty_assertions::assert_eq;
use serde::Deserialize;
use swatch_core::{px, Color, CssFragment, CssValue};

#[test]
fn color_serializes_as_hex() {
    let json = serde_json::to_string(&Color::from_hex(0x1e66f5)).unwrap();
    assert_eq!(json, "\"#1e66f5\"");

    let translucent: Color = serde_json::from_str("\"#00000080\"").unwrap();
    assert!((translucent.a - 128.0 / 255.0).abs() < 1e-3);
}

#[test]
fn colors_in_toml_tables() {
    #[derive(Deserialize)]
    struct Palette {
        primary: Color,
        accent: Color,
    }

    let palette: Palette = toml::from_str("primary = \"#fff\"\naccent = \"#8839ef\"").unwrap();
    assert_eq!(palette.primary, Color::WHITE);
    assert_eq!(palette.accent, Color::from_hex(0x8839ef));
}

#[test]
fn fragment_json_keeps_order_and_nesting() {
    let fragment = CssFragment::new()
        .with("padding", px(12.0))
        .with("opacity", 0.5)
        .with("&:hover", CssFragment::new().with("color", "#000000"));

    let json = serde_json::to_string(&fragment).unwrap();
    assert_eq!(
        json,
        r##"{"padding":"12px","opacity":0.5,"&:hover":{"color":"#000000"}}"##
    );

    let back: CssFragment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fragment);
    assert!(matches!(back.get("&:hover"), Some(CssValue::Nested(_))));
}
