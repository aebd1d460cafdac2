//! Gradient color tokens

use serde::{Deserialize, Serialize};
use swatch_core::{Color, Gradient};

/// Gradient color token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum GradientToken {
    Primary,
    Accent,
    Surface,
    Highlight,
}

token_names!(GradientToken {
    Primary => "primary",
    Accent => "accent",
    Surface => "surface",
    Highlight => "highlight",
});

/// Complete set of gradient color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientTokens {
    pub primary: Gradient,
    pub accent: Gradient,
    pub surface: Gradient,
    pub highlight: Gradient,
}

impl GradientTokens {
    /// Get a gradient by token key
    pub fn get(&self, token: GradientToken) -> &Gradient {
        match token {
            GradientToken::Primary => &self.primary,
            GradientToken::Accent => &self.accent,
            GradientToken::Surface => &self.surface,
            GradientToken::Highlight => &self.highlight,
        }
    }
}

impl Default for GradientTokens {
    fn default() -> Self {
        Self {
            primary: Gradient::linear(135.0, Color::from_hex(0x1E66F5), Color::from_hex(0x7287FD)),
            accent: Gradient::linear(135.0, Color::from_hex(0x8839EF), Color::from_hex(0xEA76CB)),
            surface: Gradient::linear(180.0, Color::WHITE, Color::from_hex(0xEFF1F5)),
            highlight: Gradient::linear(90.0, Color::from_hex(0xDF8E1D), Color::from_hex(0xFE640B)),
        }
    }
}
