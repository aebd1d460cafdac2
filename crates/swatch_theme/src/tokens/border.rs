//! Border tokens for theming

use serde::{Deserialize, Serialize};

use super::ColorToken;

/// Border token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum BorderToken {
    Thin,
    Default,
    Thick,
    Dashed,
}

token_names!(BorderToken {
    Thin => "thin",
    Default => "default",
    Thick => "thick",
    Dashed => "dashed",
});

/// CSS `border-style` keyword
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl LineStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::Double => "double",
        }
    }
}

/// A border definition. The color refers back into the theme's color tokens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f32,
    #[serde(default)]
    pub style: LineStyle,
    #[serde(with = "token_name")]
    pub color: ColorToken,
}

impl Border {
    pub const fn new(width: f32, style: LineStyle, color: ColorToken) -> Self {
        Self {
            width,
            style,
            color,
        }
    }
}

/// Complete set of border tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderTokens {
    pub thin: Border,
    pub default: Border,
    pub thick: Border,
    pub dashed: Border,
}

impl BorderTokens {
    /// Get a border by token key
    pub fn get(&self, token: BorderToken) -> &Border {
        match token {
            BorderToken::Thin => &self.thin,
            BorderToken::Default => &self.default,
            BorderToken::Thick => &self.thick,
            BorderToken::Dashed => &self.dashed,
        }
    }
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            thin: Border::new(0.5, LineStyle::Solid, ColorToken::Border),
            default: Border::new(1.0, LineStyle::Solid, ColorToken::Border),
            thick: Border::new(2.0, LineStyle::Solid, ColorToken::BorderHover),
            dashed: Border::new(1.0, LineStyle::Dashed, ColorToken::Border),
        }
    }
}

/// Serde adapter storing a [`ColorToken`] by its kebab-case name
pub(crate) mod token_name {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::tokens::ColorToken;

    pub fn serialize<S: Serializer>(token: &ColorToken, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(token.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ColorToken, D::Error> {
        let name = String::deserialize(deserializer)?;
        ColorToken::from_name(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown color token `{name}`")))
    }
}
