//! Element effect tokens for theming
//!
//! Effects cover elevation shadows and the timing used by the theme's base
//! transition rule.

use serde::{Deserialize, Serialize};
use swatch_core::{format_number, units::px_string, Color};

/// Semantic effect token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum EffectToken {
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    Xxl,
    Inner,
    None,
}

token_names!(EffectToken {
    Sm => "sm",
    Default => "default",
    Md => "md",
    Lg => "lg",
    Xl => "xl",
    Xxl => "2xl",
    Inner => "inner",
    None => "none",
});

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
    #[serde(default)]
    pub inset: bool,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
            inset: false,
        }
    }

    pub const fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
            inset: false,
        }
    }

    pub fn is_none(&self) -> bool {
        self.color.a == 0.0
            || (self.offset_x == 0.0
                && self.offset_y == 0.0
                && self.blur == 0.0
                && self.spread == 0.0)
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        if self.is_none() {
            return "none".to_string();
        }
        let prefix = if self.inset { "inset " } else { "" };
        format!(
            "{prefix}{} {} {} {} {}",
            px_string(self.offset_x),
            px_string(self.offset_y),
            px_string(self.blur),
            px_string(self.spread),
            self.color.to_css()
        )
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Timing shared by every property in the base transition rule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub duration_ms: u32,
    pub easing: String,
}

impl TransitionTiming {
    /// `<duration>ms <easing>` suffix for a transition entry
    pub fn to_css(&self) -> String {
        format!("{}ms {}", format_number(self.duration_ms as f32), self.easing)
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration_ms: 150,
            easing: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
        }
    }
}

/// Complete set of element effect tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectTokens {
    pub shadow_sm: Shadow,
    pub shadow_default: Shadow,
    pub shadow_md: Shadow,
    pub shadow_lg: Shadow,
    pub shadow_xl: Shadow,
    pub shadow_2xl: Shadow,
    pub shadow_inner: Shadow,
    pub shadow_none: Shadow,
    #[serde(default)]
    pub transition: TransitionTiming,
}

impl EffectTokens {
    /// Get shadow by token key
    pub fn get(&self, token: EffectToken) -> &Shadow {
        match token {
            EffectToken::Sm => &self.shadow_sm,
            EffectToken::Default => &self.shadow_default,
            EffectToken::Md => &self.shadow_md,
            EffectToken::Lg => &self.shadow_lg,
            EffectToken::Xl => &self.shadow_xl,
            EffectToken::Xxl => &self.shadow_2xl,
            EffectToken::Inner => &self.shadow_inner,
            EffectToken::None => &self.shadow_none,
        }
    }

    /// Effect tokens for a light color scheme
    pub fn light() -> Self {
        let base_color = Color::BLACK;
        Self {
            shadow_sm: Shadow::new(0.0, 1.0, 2.0, 0.0, base_color.with_alpha(0.05)),
            shadow_default: Shadow::new(0.0, 1.0, 3.0, 0.0, base_color.with_alpha(0.1)),
            shadow_md: Shadow::new(0.0, 4.0, 6.0, -1.0, base_color.with_alpha(0.1)),
            shadow_lg: Shadow::new(0.0, 10.0, 15.0, -3.0, base_color.with_alpha(0.1)),
            shadow_xl: Shadow::new(0.0, 20.0, 25.0, -5.0, base_color.with_alpha(0.1)),
            shadow_2xl: Shadow::new(0.0, 25.0, 50.0, -12.0, base_color.with_alpha(0.25)),
            shadow_inner: Shadow::new(0.0, 2.0, 4.0, 0.0, base_color.with_alpha(0.05)).inset(),
            shadow_none: Shadow::none(),
            transition: TransitionTiming::default(),
        }
    }

    /// Effect tokens for a dark color scheme
    pub fn dark() -> Self {
        let base_color = Color::BLACK;
        Self {
            shadow_sm: Shadow::new(0.0, 1.0, 2.0, 0.0, base_color.with_alpha(0.2)),
            shadow_default: Shadow::new(0.0, 1.0, 3.0, 0.0, base_color.with_alpha(0.3)),
            shadow_md: Shadow::new(0.0, 4.0, 6.0, -1.0, base_color.with_alpha(0.3)),
            shadow_lg: Shadow::new(0.0, 10.0, 15.0, -3.0, base_color.with_alpha(0.3)),
            shadow_xl: Shadow::new(0.0, 20.0, 25.0, -5.0, base_color.with_alpha(0.3)),
            shadow_2xl: Shadow::new(0.0, 25.0, 50.0, -12.0, base_color.with_alpha(0.5)),
            shadow_inner: Shadow::new(0.0, 2.0, 4.0, 0.0, base_color.with_alpha(0.15)).inset(),
            shadow_none: Shadow::none(),
            transition: TransitionTiming::default(),
        }
    }
}

impl Default for EffectTokens {
    fn default() -> Self {
        Self::light()
    }
}
