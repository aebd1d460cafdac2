//! Color tokens for theming

use serde::{Deserialize, Serialize};
use swatch_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,

    // Semantic colors
    Success,
    Warning,
    Error,
    Info,

    // Surface colors, from the page background upwards
    Background,
    Surface1,
    Surface2,
    Surface3,
    Surface4,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextInverse,
    TextLink,

    // Border colors
    Border,
    BorderHover,
    BorderFocus,
    BorderError,

    // Accent
    Accent,
    AccentSubtle,
    Selection,
}

token_names!(ColorToken {
    Primary => "primary",
    PrimaryHover => "primary-hover",
    PrimaryActive => "primary-active",
    Secondary => "secondary",
    Success => "success",
    Warning => "warning",
    Error => "error",
    Info => "info",
    Background => "background",
    Surface1 => "surface1",
    Surface2 => "surface2",
    Surface3 => "surface3",
    Surface4 => "surface4",
    TextPrimary => "text-primary",
    TextSecondary => "text-secondary",
    TextTertiary => "text-tertiary",
    TextInverse => "text-inverse",
    TextLink => "text-link",
    Border => "border",
    BorderHover => "border-hover",
    BorderFocus => "border-focus",
    BorderError => "border-error",
    Accent => "accent",
    AccentSubtle => "accent-subtle",
    Selection => "selection",
});

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub background: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub surface3: Color,
    pub surface4: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_inverse: Color,
    pub text_link: Color,

    pub border: Color,
    pub border_hover: Color,
    pub border_focus: Color,
    pub border_error: Color,

    pub accent: Color,
    pub accent_subtle: Color,
    pub selection: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        *self.slot(token)
    }

    /// Replace a single color
    pub fn set(&mut self, token: ColorToken, color: Color) {
        *self.slot_mut(token) = color;
    }

    fn slot(&self, token: ColorToken) -> &Color {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::PrimaryHover => &self.primary_hover,
            ColorToken::PrimaryActive => &self.primary_active,
            ColorToken::Secondary => &self.secondary,
            ColorToken::Success => &self.success,
            ColorToken::Warning => &self.warning,
            ColorToken::Error => &self.error,
            ColorToken::Info => &self.info,
            ColorToken::Background => &self.background,
            ColorToken::Surface1 => &self.surface1,
            ColorToken::Surface2 => &self.surface2,
            ColorToken::Surface3 => &self.surface3,
            ColorToken::Surface4 => &self.surface4,
            ColorToken::TextPrimary => &self.text_primary,
            ColorToken::TextSecondary => &self.text_secondary,
            ColorToken::TextTertiary => &self.text_tertiary,
            ColorToken::TextInverse => &self.text_inverse,
            ColorToken::TextLink => &self.text_link,
            ColorToken::Border => &self.border,
            ColorToken::BorderHover => &self.border_hover,
            ColorToken::BorderFocus => &self.border_focus,
            ColorToken::BorderError => &self.border_error,
            ColorToken::Accent => &self.accent,
            ColorToken::AccentSubtle => &self.accent_subtle,
            ColorToken::Selection => &self.selection,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryHover => &mut self.primary_hover,
            ColorToken::PrimaryActive => &mut self.primary_active,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::Success => &mut self.success,
            ColorToken::Warning => &mut self.warning,
            ColorToken::Error => &mut self.error,
            ColorToken::Info => &mut self.info,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface1 => &mut self.surface1,
            ColorToken::Surface2 => &mut self.surface2,
            ColorToken::Surface3 => &mut self.surface3,
            ColorToken::Surface4 => &mut self.surface4,
            ColorToken::TextPrimary => &mut self.text_primary,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::TextTertiary => &mut self.text_tertiary,
            ColorToken::TextInverse => &mut self.text_inverse,
            ColorToken::TextLink => &mut self.text_link,
            ColorToken::Border => &mut self.border,
            ColorToken::BorderHover => &mut self.border_hover,
            ColorToken::BorderFocus => &mut self.border_focus,
            ColorToken::BorderError => &mut self.border_error,
            ColorToken::Accent => &mut self.accent,
            ColorToken::AccentSubtle => &mut self.accent_subtle,
            ColorToken::Selection => &mut self.selection,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Default to a basic light theme
        Self {
            primary: Color::from_hex(0x1E66F5),
            primary_hover: Color::from_hex(0x1758D1),
            primary_active: Color::from_hex(0x114AB3),
            secondary: Color::from_hex(0x8839EF),
            success: Color::from_hex(0x40A02B),
            warning: Color::from_hex(0xDF8E1D),
            error: Color::from_hex(0xD20F39),
            info: Color::from_hex(0x04A5E5),
            background: Color::from_hex(0xEFF1F5),
            surface1: Color::WHITE,
            surface2: Color::from_hex(0xF7F8FA),
            surface3: Color::from_hex(0xE6E9EF),
            surface4: Color::from_hex(0xDCE0E8),
            text_primary: Color::from_hex(0x4C4F69),
            text_secondary: Color::from_hex(0x6C6F85),
            text_tertiary: Color::from_hex(0x9CA0B0),
            text_inverse: Color::WHITE,
            text_link: Color::from_hex(0x1E66F5),
            border: Color::from_hex(0xCCD0DA),
            border_hover: Color::from_hex(0xBCC0CC),
            border_focus: Color::from_hex(0x1E66F5),
            border_error: Color::from_hex(0xD20F39),
            accent: Color::from_hex(0x1E66F5),
            accent_subtle: Color::from_hex(0x1E66F5).with_alpha(0.1),
            selection: Color::from_hex(0x1E66F5).with_alpha(0.3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_for_every_token() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_name(token.name()), Some(*token));
        }
        assert_eq!(ColorToken::from_name("surface-3"), None);
    }

    #[test]
    fn set_replaces_only_the_addressed_slot() {
        let mut colors = ColorTokens::default();
        colors.set(ColorToken::Surface3, Color::BLACK);
        assert_eq!(colors.get(ColorToken::Surface3), Color::BLACK);
        assert_eq!(colors.get(ColorToken::Surface2), ColorTokens::default().surface2);
    }
}
