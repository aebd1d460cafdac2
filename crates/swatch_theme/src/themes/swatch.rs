//! Default Swatch theme derived from the Catppuccin palette
//!
//! Latte backs the light variant and Mocha the dark variant.

use swatch_core::{Color, Gradient};

use crate::theme::{ColorScheme, ThemeBundle, ThemeTokens};
use crate::tokens::*;

/// Catppuccin Latte palette (light theme)
pub mod latte {
    use swatch_core::Color;

    pub const PINK: Color = Color::rgb(234.0 / 255.0, 118.0 / 255.0, 203.0 / 255.0);
    pub const MAUVE: Color = Color::rgb(136.0 / 255.0, 57.0 / 255.0, 239.0 / 255.0);
    pub const RED: Color = Color::rgb(210.0 / 255.0, 15.0 / 255.0, 57.0 / 255.0);
    pub const PEACH: Color = Color::rgb(254.0 / 255.0, 100.0 / 255.0, 11.0 / 255.0);
    pub const YELLOW: Color = Color::rgb(223.0 / 255.0, 142.0 / 255.0, 29.0 / 255.0);
    pub const GREEN: Color = Color::rgb(64.0 / 255.0, 160.0 / 255.0, 43.0 / 255.0);
    pub const SKY: Color = Color::rgb(4.0 / 255.0, 165.0 / 255.0, 229.0 / 255.0);
    pub const BLUE: Color = Color::rgb(30.0 / 255.0, 102.0 / 255.0, 245.0 / 255.0);
    pub const LAVENDER: Color = Color::rgb(114.0 / 255.0, 135.0 / 255.0, 253.0 / 255.0);

    pub const TEXT: Color = Color::rgb(76.0 / 255.0, 79.0 / 255.0, 105.0 / 255.0);
    pub const SUBTEXT1: Color = Color::rgb(92.0 / 255.0, 95.0 / 255.0, 119.0 / 255.0);
    pub const OVERLAY0: Color = Color::rgb(156.0 / 255.0, 160.0 / 255.0, 176.0 / 255.0);
    pub const SURFACE1: Color = Color::rgb(188.0 / 255.0, 192.0 / 255.0, 204.0 / 255.0);
    pub const SURFACE0: Color = Color::rgb(204.0 / 255.0, 208.0 / 255.0, 218.0 / 255.0);
    pub const BASE: Color = Color::rgb(239.0 / 255.0, 241.0 / 255.0, 245.0 / 255.0);
    pub const MANTLE: Color = Color::rgb(230.0 / 255.0, 233.0 / 255.0, 239.0 / 255.0);
    pub const CRUST: Color = Color::rgb(220.0 / 255.0, 224.0 / 255.0, 232.0 / 255.0);
}

/// Catppuccin Mocha palette (dark theme)
pub mod mocha {
    use swatch_core::Color;

    pub const PINK: Color = Color::rgb(245.0 / 255.0, 194.0 / 255.0, 231.0 / 255.0);
    pub const MAUVE: Color = Color::rgb(203.0 / 255.0, 166.0 / 255.0, 247.0 / 255.0);
    pub const RED: Color = Color::rgb(243.0 / 255.0, 139.0 / 255.0, 168.0 / 255.0);
    pub const PEACH: Color = Color::rgb(250.0 / 255.0, 179.0 / 255.0, 135.0 / 255.0);
    pub const YELLOW: Color = Color::rgb(249.0 / 255.0, 226.0 / 255.0, 175.0 / 255.0);
    pub const GREEN: Color = Color::rgb(166.0 / 255.0, 227.0 / 255.0, 161.0 / 255.0);
    pub const SKY: Color = Color::rgb(137.0 / 255.0, 220.0 / 255.0, 235.0 / 255.0);
    pub const BLUE: Color = Color::rgb(137.0 / 255.0, 180.0 / 255.0, 250.0 / 255.0);
    pub const LAVENDER: Color = Color::rgb(180.0 / 255.0, 190.0 / 255.0, 254.0 / 255.0);

    pub const TEXT: Color = Color::rgb(205.0 / 255.0, 214.0 / 255.0, 244.0 / 255.0);
    pub const SUBTEXT1: Color = Color::rgb(186.0 / 255.0, 194.0 / 255.0, 222.0 / 255.0);
    pub const OVERLAY0: Color = Color::rgb(108.0 / 255.0, 112.0 / 255.0, 134.0 / 255.0);
    pub const SURFACE2: Color = Color::rgb(88.0 / 255.0, 91.0 / 255.0, 112.0 / 255.0);
    pub const SURFACE1: Color = Color::rgb(69.0 / 255.0, 71.0 / 255.0, 90.0 / 255.0);
    pub const SURFACE0: Color = Color::rgb(49.0 / 255.0, 50.0 / 255.0, 68.0 / 255.0);
    pub const BASE: Color = Color::rgb(30.0 / 255.0, 30.0 / 255.0, 46.0 / 255.0);
    pub const MANTLE: Color = Color::rgb(24.0 / 255.0, 24.0 / 255.0, 37.0 / 255.0);
    pub const CRUST: Color = Color::rgb(17.0 / 255.0, 17.0 / 255.0, 27.0 / 255.0);
}

/// Default Swatch theme
#[derive(Clone, Copy, Debug)]
pub struct SwatchTheme;

impl SwatchTheme {
    pub const NAME: &'static str = "Swatch";

    /// Light variant (Catppuccin Latte)
    pub fn light() -> ThemeTokens {
        ThemeTokens {
            name: Self::NAME.to_string(),
            scheme: ColorScheme::Light,
            color: ColorTokens {
                primary: latte::BLUE,
                primary_hover: Color::from_hex(0x1758D1),
                primary_active: Color::from_hex(0x114AB3),
                secondary: latte::MAUVE,
                success: latte::GREEN,
                warning: latte::YELLOW,
                error: latte::RED,
                info: latte::SKY,
                background: latte::BASE,
                surface1: Color::WHITE,
                surface2: latte::BASE,
                surface3: latte::MANTLE,
                surface4: latte::CRUST,
                text_primary: latte::TEXT,
                text_secondary: latte::SUBTEXT1,
                text_tertiary: latte::OVERLAY0,
                text_inverse: Color::WHITE,
                text_link: latte::BLUE,
                border: latte::SURFACE0,
                border_hover: latte::SURFACE1,
                border_focus: latte::BLUE,
                border_error: latte::RED,
                accent: latte::BLUE,
                accent_subtle: latte::BLUE.with_alpha(0.1),
                selection: latte::BLUE.with_alpha(0.3),
            },
            gradient_color: GradientTokens {
                primary: Gradient::linear(135.0, latte::BLUE, latte::LAVENDER),
                accent: Gradient::linear(135.0, latte::MAUVE, latte::PINK),
                surface: Gradient::linear(180.0, Color::WHITE, latte::BASE),
                highlight: Gradient::linear(90.0, latte::YELLOW, latte::PEACH),
            },
            border: BorderTokens::default(),
            outline: OutlineTokens::default(),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            size: SizeTokens::default(),
            border_radius: RadiusTokens::default(),
            element_effect: EffectTokens::light(),
        }
    }

    /// Dark variant (Catppuccin Mocha)
    pub fn dark() -> ThemeTokens {
        ThemeTokens {
            name: Self::NAME.to_string(),
            scheme: ColorScheme::Dark,
            color: ColorTokens {
                primary: mocha::BLUE,
                primary_hover: Color::from_hex(0x9ECBFC),
                primary_active: Color::from_hex(0xB5D7FD),
                secondary: mocha::MAUVE,
                success: mocha::GREEN,
                warning: mocha::YELLOW,
                error: mocha::RED,
                info: mocha::SKY,
                background: mocha::BASE,
                surface1: mocha::MANTLE,
                surface2: mocha::SURFACE0,
                surface3: mocha::SURFACE1,
                surface4: mocha::SURFACE2,
                text_primary: mocha::TEXT,
                text_secondary: mocha::SUBTEXT1,
                text_tertiary: mocha::OVERLAY0,
                text_inverse: mocha::CRUST,
                text_link: mocha::BLUE,
                border: mocha::SURFACE1,
                border_hover: mocha::SURFACE2,
                border_focus: mocha::BLUE,
                border_error: mocha::RED,
                accent: mocha::BLUE,
                accent_subtle: mocha::BLUE.with_alpha(0.15),
                selection: mocha::BLUE.with_alpha(0.3),
            },
            gradient_color: GradientTokens {
                primary: Gradient::linear(135.0, mocha::BLUE, mocha::LAVENDER),
                accent: Gradient::linear(135.0, mocha::MAUVE, mocha::PINK),
                surface: Gradient::linear(180.0, mocha::SURFACE0, mocha::BASE),
                highlight: Gradient::linear(90.0, mocha::YELLOW, mocha::PEACH),
            },
            border: BorderTokens::default(),
            outline: OutlineTokens::default(),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            size: SizeTokens::default(),
            border_radius: RadiusTokens::default(),
            element_effect: EffectTokens::dark(),
        }
    }

    /// Theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new(Self::NAME, Self::light(), Self::dark())
    }
}
