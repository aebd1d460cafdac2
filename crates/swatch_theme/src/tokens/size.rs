//! Size tokens for icons and interactive controls

use serde::{Deserialize, Serialize};

/// Size token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum SizeToken {
    IconSm,
    IconMd,
    IconLg,
    ControlSm,
    ControlMd,
    ControlLg,
    Avatar,
}

token_names!(SizeToken {
    IconSm => "icon-sm",
    IconMd => "icon-md",
    IconLg => "icon-lg",
    ControlSm => "control-sm",
    ControlMd => "control-md",
    ControlLg => "control-lg",
    Avatar => "avatar",
});

/// Complete set of size tokens, in pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeTokens {
    pub icon_sm: f32,
    pub icon_md: f32,
    pub icon_lg: f32,
    pub control_sm: f32,
    pub control_md: f32,
    pub control_lg: f32,
    pub avatar: f32,
}

impl SizeTokens {
    /// Get size by token key
    pub fn get(&self, token: SizeToken) -> f32 {
        *self.slot(token)
    }

    /// Replace a single size
    pub fn set(&mut self, token: SizeToken, value: f32) {
        *self.slot_mut(token) = value;
    }

    fn slot(&self, token: SizeToken) -> &f32 {
        match token {
            SizeToken::IconSm => &self.icon_sm,
            SizeToken::IconMd => &self.icon_md,
            SizeToken::IconLg => &self.icon_lg,
            SizeToken::ControlSm => &self.control_sm,
            SizeToken::ControlMd => &self.control_md,
            SizeToken::ControlLg => &self.control_lg,
            SizeToken::Avatar => &self.avatar,
        }
    }

    fn slot_mut(&mut self, token: SizeToken) -> &mut f32 {
        match token {
            SizeToken::IconSm => &mut self.icon_sm,
            SizeToken::IconMd => &mut self.icon_md,
            SizeToken::IconLg => &mut self.icon_lg,
            SizeToken::ControlSm => &mut self.control_sm,
            SizeToken::ControlMd => &mut self.control_md,
            SizeToken::ControlLg => &mut self.control_lg,
            SizeToken::Avatar => &mut self.avatar,
        }
    }
}

impl Default for SizeTokens {
    fn default() -> Self {
        Self {
            icon_sm: 16.0,
            icon_md: 20.0,
            icon_lg: 24.0,
            control_sm: 28.0,
            control_md: 36.0,
            control_lg: 44.0,
            avatar: 40.0,
        }
    }
}
