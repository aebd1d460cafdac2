//! Built-in theme presets.
//!
//! Besides the Catppuccin-based default, the neutral and slate presets derive a
//! full token tree from a small base palette.

use std::fmt::{Display, Formatter};

use swatch_core::{Color, Gradient};

use crate::theme::{ColorScheme, ThemeBundle, ThemeTokens};
use crate::themes::SwatchTheme;
use crate::tokens::*;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Catppuccin-based default theme.
    Swatch,
    /// Grayscale preset with a near-black primary.
    Neutral,
    /// Cool blue-gray preset.
    Slate,
}

impl ThemePreset {
    /// Stable preset id for config files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Swatch => "swatch",
            Self::Neutral => "neutral",
            Self::Slate => "slate",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Swatch => "Swatch",
            Self::Neutral => "Neutral",
            Self::Slate => "Slate",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] =
            [ThemePreset::Swatch, ThemePreset::Neutral, ThemePreset::Slate];
        &PRESETS
    }

    /// Look a preset up by its id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// Build a light/dark theme bundle for this preset.
    pub fn bundle(self) -> ThemeBundle {
        match self {
            Self::Swatch => SwatchTheme::bundle(),
            Self::Neutral => palette_bundle("Neutral", NEUTRAL_LIGHT, NEUTRAL_DARK),
            Self::Slate => palette_bundle("Slate", SLATE_LIGHT, SLATE_DARK),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_bundle(preset: ThemePreset) -> ThemeBundle {
    preset.bundle()
}

#[derive(Clone, Copy)]
struct BasePalette {
    background: Color,
    foreground: Color,
    card: Color,
    primary: Color,
    primary_foreground: Color,
    secondary: Color,
    muted: Color,
    muted_foreground: Color,
    accent: Color,
    destructive: Color,
    border: Color,
    ring: Color,
}

fn palette_bundle(name: &'static str, light: PaletteHex, dark: PaletteHex) -> ThemeBundle {
    ThemeBundle::new(
        name,
        palette_theme(name, BasePalette::from_hex(light), ColorScheme::Light),
        palette_theme(name, BasePalette::from_hex(dark), ColorScheme::Dark),
    )
}

fn palette_theme(name: &'static str, base: BasePalette, scheme: ColorScheme) -> ThemeTokens {
    ThemeTokens {
        name: name.to_string(),
        scheme,
        color: build_colors(base, scheme),
        gradient_color: build_gradients(base),
        border: BorderTokens::default(),
        outline: OutlineTokens::default(),
        typography: TypographyTokens::default(),
        spacing: SpacingTokens::default(),
        size: SizeTokens::default(),
        border_radius: palette_radii(),
        element_effect: match scheme {
            ColorScheme::Light => EffectTokens::light(),
            ColorScheme::Dark => EffectTokens::dark(),
        },
    }
}

fn build_colors(base: BasePalette, scheme: ColorScheme) -> ColorTokens {
    let (primary_hover_mix, primary_active_mix) = match scheme {
        ColorScheme::Light => (0.10, 0.20),
        ColorScheme::Dark => (0.06, 0.12),
    };
    let state_target = match scheme {
        ColorScheme::Light => Color::BLACK,
        ColorScheme::Dark => Color::WHITE,
    };
    let (selection_alpha, subtle_alpha) = match scheme {
        ColorScheme::Light => (0.22, 0.14),
        ColorScheme::Dark => (0.28, 0.24),
    };
    let (success, warning, info) = match scheme {
        ColorScheme::Light => (
            Color::from_hex(0x16A34A),
            Color::from_hex(0xD97706),
            Color::from_hex(0x0EA5E9),
        ),
        ColorScheme::Dark => (
            Color::from_hex(0x22C55E),
            Color::from_hex(0xF59E0B),
            Color::from_hex(0x38BDF8),
        ),
    };

    ColorTokens {
        primary: base.primary,
        primary_hover: blend(base.primary, state_target, primary_hover_mix),
        primary_active: blend(base.primary, state_target, primary_active_mix),
        secondary: base.secondary,
        success,
        warning,
        error: base.destructive,
        info,
        background: base.background,
        surface1: base.card,
        surface2: blend(base.card, state_target, 0.02),
        surface3: base.muted,
        surface4: blend(base.muted, state_target, 0.06),
        text_primary: base.foreground,
        text_secondary: base.muted_foreground,
        text_tertiary: blend(base.muted_foreground, base.background, 0.25),
        text_inverse: base.primary_foreground,
        text_link: base.primary,
        border: base.border,
        border_hover: blend(base.border, state_target, 0.16),
        border_focus: base.ring,
        border_error: base.destructive,
        accent: base.accent,
        accent_subtle: base.accent.with_alpha(subtle_alpha),
        selection: base.primary.with_alpha(selection_alpha),
    }
}

fn build_gradients(base: BasePalette) -> GradientTokens {
    GradientTokens {
        primary: Gradient::linear(135.0, base.primary, blend(base.primary, base.ring, 0.5)),
        accent: Gradient::linear(135.0, base.accent, base.secondary),
        surface: Gradient::linear(180.0, base.card, base.muted),
        highlight: Gradient::linear(90.0, base.muted, base.accent),
    }
}

fn palette_radii() -> RadiusTokens {
    RadiusTokens {
        radius_none: 0.0,
        radius_sm: 6.0,
        radius_default: 8.0,
        radius_md: 10.0,
        radius_lg: 14.0,
        radius_xl: 18.0,
        radius_2xl: 22.0,
        radius_3xl: 26.0,
        radius_full: 9999.0,
    }
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t)
}

/// Base palette hex values, in [`BasePalette`] field order
type PaletteHex = [u32; 12];

impl BasePalette {
    fn from_hex(hex: PaletteHex) -> Self {
        let [
            background,
            foreground,
            card,
            primary,
            primary_foreground,
            secondary,
            muted,
            muted_foreground,
            accent,
            destructive,
            border,
            ring,
        ] = hex.map(Color::from_hex);
        Self {
            background,
            foreground,
            card,
            primary,
            primary_foreground,
            secondary,
            muted,
            muted_foreground,
            accent,
            destructive,
            border,
            ring,
        }
    }
}

#[rustfmt::skip]
const NEUTRAL_LIGHT: PaletteHex = [
    0xFFFFFF, 0x0A0A0A, 0xFFFFFF, 0x171717,
    0xFAFAFA, 0xF5F5F5, 0xF5F5F5, 0x737373,
    0xF5F5F5, 0xEF4444, 0xE5E5E5, 0x0A0A0A,
];

#[rustfmt::skip]
const NEUTRAL_DARK: PaletteHex = [
    0x0A0A0A, 0xFAFAFA, 0x0A0A0A, 0xFAFAFA,
    0x171717, 0x262626, 0x262626, 0xA3A3A3,
    0x262626, 0x7F1D1D, 0x262626, 0xD4D4D4,
];

#[rustfmt::skip]
const SLATE_LIGHT: PaletteHex = [
    0xFFFFFF, 0x020817, 0xFFFFFF, 0x0F172A,
    0xF8FAFC, 0xF1F5F9, 0xF1F5F9, 0x64748B,
    0xF1F5F9, 0xEF4444, 0xE2E8F0, 0x020817,
];

#[rustfmt::skip]
const SLATE_DARK: PaletteHex = [
    0x020817, 0xF8FAFC, 0x020817, 0xF8FAFC,
    0x0F172A, 0x1E293B, 0x1E293B, 0x94A3B8,
    0x1E293B, 0x7F1D1D, 0x1E293B, 0xCBD5E1,
];
