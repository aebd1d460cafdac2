//! Border radius tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum RadiusToken {
    None,
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Full,
}

token_names!(RadiusToken {
    None => "none",
    Sm => "sm",
    Default => "default",
    Md => "md",
    Lg => "lg",
    Xl => "xl",
    Xxl => "2xl",
    Xxxl => "3xl",
    Full => "full",
});

/// Complete set of border radius tokens, in pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub radius_none: f32,
    pub radius_sm: f32,
    pub radius_default: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_2xl: f32,
    pub radius_3xl: f32,
    pub radius_full: f32,
}

impl RadiusTokens {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        *self.slot(token)
    }

    /// Replace a single radius
    pub fn set(&mut self, token: RadiusToken, value: f32) {
        *self.slot_mut(token) = value;
    }

    fn slot(&self, token: RadiusToken) -> &f32 {
        match token {
            RadiusToken::None => &self.radius_none,
            RadiusToken::Sm => &self.radius_sm,
            RadiusToken::Default => &self.radius_default,
            RadiusToken::Md => &self.radius_md,
            RadiusToken::Lg => &self.radius_lg,
            RadiusToken::Xl => &self.radius_xl,
            RadiusToken::Xxl => &self.radius_2xl,
            RadiusToken::Xxxl => &self.radius_3xl,
            RadiusToken::Full => &self.radius_full,
        }
    }

    fn slot_mut(&mut self, token: RadiusToken) -> &mut f32 {
        match token {
            RadiusToken::None => &mut self.radius_none,
            RadiusToken::Sm => &mut self.radius_sm,
            RadiusToken::Default => &mut self.radius_default,
            RadiusToken::Md => &mut self.radius_md,
            RadiusToken::Lg => &mut self.radius_lg,
            RadiusToken::Xl => &mut self.radius_xl,
            RadiusToken::Xxl => &mut self.radius_2xl,
            RadiusToken::Xxxl => &mut self.radius_3xl,
            RadiusToken::Full => &mut self.radius_full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_none: 0.0,
            radius_sm: 4.0,
            radius_default: 6.0,
            radius_md: 8.0,
            radius_lg: 12.0,
            radius_xl: 16.0,
            radius_2xl: 20.0,
            radius_3xl: 24.0,
            radius_full: 9999.0,
        }
    }
}
