//! Typography tokens for theming

use serde::{Deserialize, Serialize};

/// Text style token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TypographyToken {
    Display,
    Heading1,
    Heading2,
    Heading3,
    Body,
    BodyStrong,
    BodySmall,
    Caption,
    Label,
    Code,
}

token_names!(TypographyToken {
    Display => "display",
    Heading1 => "heading1",
    Heading2 => "heading2",
    Heading3 => "heading3",
    Body => "body",
    BodyStrong => "body-strong",
    BodySmall => "body-small",
    Caption => "caption",
    Label => "label",
    Code => "code",
});

/// Which of the theme's font stacks a text style uses
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Mono,
}

/// A single text style
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub family: FontFamily,
    /// Font size in pixels
    pub size: f32,
    pub weight: u16,
    /// Unitless line height multiplier
    pub line_height: f32,
    /// Letter spacing in pixels
    #[serde(default)]
    pub letter_spacing: f32,
}

impl TextStyle {
    pub const fn new(size: f32, weight: u16, line_height: f32) -> Self {
        Self {
            family: FontFamily::Sans,
            size,
            weight,
            line_height,
            letter_spacing: 0.0,
        }
    }

    pub const fn mono(mut self) -> Self {
        self.family = FontFamily::Mono;
        self
    }

    pub const fn tracking(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    /// Sans-serif font stack
    pub font_sans: String,
    /// Monospace font stack
    pub font_mono: String,

    pub display: TextStyle,
    pub heading1: TextStyle,
    pub heading2: TextStyle,
    pub heading3: TextStyle,
    pub body: TextStyle,
    pub body_strong: TextStyle,
    pub body_small: TextStyle,
    pub caption: TextStyle,
    pub label: TextStyle,
    pub code: TextStyle,
}

impl TypographyTokens {
    /// Get a text style by token key
    pub fn get(&self, token: TypographyToken) -> &TextStyle {
        match token {
            TypographyToken::Display => &self.display,
            TypographyToken::Heading1 => &self.heading1,
            TypographyToken::Heading2 => &self.heading2,
            TypographyToken::Heading3 => &self.heading3,
            TypographyToken::Body => &self.body,
            TypographyToken::BodyStrong => &self.body_strong,
            TypographyToken::BodySmall => &self.body_small,
            TypographyToken::Caption => &self.caption,
            TypographyToken::Label => &self.label,
            TypographyToken::Code => &self.code,
        }
    }

    /// Font stack for a family
    pub fn family(&self, family: FontFamily) -> &str {
        match family {
            FontFamily::Sans => &self.font_sans,
            FontFamily::Mono => &self.font_mono,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_sans: "Inter, system-ui, -apple-system, \"Segoe UI\", sans-serif".to_string(),
            font_mono: "\"JetBrains Mono\", ui-monospace, Menlo, monospace".to_string(),
            display: TextStyle::new(36.0, 700, 1.2).tracking(-0.5),
            heading1: TextStyle::new(30.0, 700, 1.25),
            heading2: TextStyle::new(24.0, 600, 1.3),
            heading3: TextStyle::new(20.0, 600, 1.35),
            body: TextStyle::new(14.0, 400, 1.5),
            body_strong: TextStyle::new(14.0, 600, 1.5),
            body_small: TextStyle::new(13.0, 400, 1.45),
            caption: TextStyle::new(12.0, 400, 1.4),
            label: TextStyle::new(12.0, 500, 1.3).tracking(0.2),
            code: TextStyle::new(13.0, 400, 1.5).mono(),
        }
    }
}
