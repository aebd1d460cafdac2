//! Theme schema
//!
//! [`Theme`] is the abstract shape every theme exposes: one read-only token set
//! per category. The style builder is generic over it, so any type that can
//! hand out the nine token sets can drive style resolution.
//!
//! [`ThemeTokens`] is the concrete, serializable implementation produced by
//! presets and theme files.

use serde::{Deserialize, Serialize};

use crate::tokens::*;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The other scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// Abstract theme shape: one token set per category
pub trait Theme {
    /// Theme display name
    fn name(&self) -> &str;

    /// Appearance this theme is designed for
    fn color_scheme(&self) -> ColorScheme;

    fn colors(&self) -> &ColorTokens;

    fn gradients(&self) -> &GradientTokens;

    fn borders(&self) -> &BorderTokens;

    fn outlines(&self) -> &OutlineTokens;

    fn typography(&self) -> &TypographyTokens;

    fn spacing(&self) -> &SpacingTokens;

    fn sizes(&self) -> &SizeTokens;

    fn radii(&self) -> &RadiusTokens;

    fn effects(&self) -> &EffectTokens;
}

/// Concrete design-token tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub name: String,
    #[serde(default)]
    pub scheme: ColorScheme,
    pub color: ColorTokens,
    pub gradient_color: GradientTokens,
    pub border: BorderTokens,
    pub outline: OutlineTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub size: SizeTokens,
    pub border_radius: RadiusTokens,
    pub element_effect: EffectTokens,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            scheme: ColorScheme::Light,
            color: ColorTokens::default(),
            gradient_color: GradientTokens::default(),
            border: BorderTokens::default(),
            outline: OutlineTokens::default(),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            size: SizeTokens::default(),
            border_radius: RadiusTokens::default(),
            element_effect: EffectTokens::default(),
        }
    }
}

impl Theme for ThemeTokens {
    fn name(&self) -> &str {
        &self.name
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.color
    }

    fn gradients(&self) -> &GradientTokens {
        &self.gradient_color
    }

    fn borders(&self) -> &BorderTokens {
        &self.border
    }

    fn outlines(&self) -> &OutlineTokens {
        &self.outline
    }

    fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    fn sizes(&self) -> &SizeTokens {
        &self.size
    }

    fn radii(&self) -> &RadiusTokens {
        &self.border_radius
    }

    fn effects(&self) -> &EffectTokens {
        &self.element_effect
    }
}

/// A light/dark pair of themes sharing a name
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    name: String,
    light: ThemeTokens,
    dark: ThemeTokens,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: ThemeTokens, dark: ThemeTokens) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Theme to use for a color scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &ThemeTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Consume the bundle, keeping the theme for one scheme
    pub fn into_scheme(self, scheme: ColorScheme) -> ThemeTokens {
        match scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
        }
    }
}
