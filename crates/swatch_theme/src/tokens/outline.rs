//! Outline tokens for theming
//!
//! Outlines are focus indicators. They sit outside the border box and never
//! affect layout.

use serde::{Deserialize, Serialize};

use super::border::token_name;
use super::{ColorToken, LineStyle};

/// Outline token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum OutlineToken {
    Focus,
    Error,
    Subtle,
}

token_names!(OutlineToken {
    Focus => "focus",
    Error => "error",
    Subtle => "subtle",
});

/// An outline definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub width: f32,
    /// Gap between the border box and the outline
    #[serde(default)]
    pub offset: f32,
    #[serde(default)]
    pub style: LineStyle,
    #[serde(with = "token_name")]
    pub color: ColorToken,
}

impl Outline {
    pub const fn new(width: f32, offset: f32, color: ColorToken) -> Self {
        Self {
            width,
            offset,
            style: LineStyle::Solid,
            color,
        }
    }
}

/// Complete set of outline tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutlineTokens {
    pub focus: Outline,
    pub error: Outline,
    pub subtle: Outline,
}

impl OutlineTokens {
    /// Get an outline by token key
    pub fn get(&self, token: OutlineToken) -> &Outline {
        match token {
            OutlineToken::Focus => &self.focus,
            OutlineToken::Error => &self.error,
            OutlineToken::Subtle => &self.subtle,
        }
    }
}

impl Default for OutlineTokens {
    fn default() -> Self {
        Self {
            focus: Outline::new(2.0, 2.0, ColorToken::BorderFocus),
            error: Outline::new(2.0, 2.0, ColorToken::BorderError),
            subtle: Outline::new(1.0, 0.0, ColorToken::Border),
        }
    }
}
