//! Spacing tokens for theming
//!
//! A 4px-based scale. `SpaceN` is `N * 4` pixels in the default set.

use serde::{Deserialize, Serialize};

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum SpacingToken {
    Space0,
    Space1,
    Space2,
    Space3,
    Space4,
    Space5,
    Space6,
    Space8,
    Space10,
    Space12,
    Space16,
}

token_names!(SpacingToken {
    Space0 => "space-0",
    Space1 => "space-1",
    Space2 => "space-2",
    Space3 => "space-3",
    Space4 => "space-4",
    Space5 => "space-5",
    Space6 => "space-6",
    Space8 => "space-8",
    Space10 => "space-10",
    Space12 => "space-12",
    Space16 => "space-16",
});

/// Complete set of spacing tokens, in pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub space_0: f32,
    pub space_1: f32,
    pub space_2: f32,
    pub space_3: f32,
    pub space_4: f32,
    pub space_5: f32,
    pub space_6: f32,
    pub space_8: f32,
    pub space_10: f32,
    pub space_12: f32,
    pub space_16: f32,
}

impl SpacingTokens {
    /// Get spacing by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        *self.slot(token)
    }

    /// Replace a single spacing value
    pub fn set(&mut self, token: SpacingToken, value: f32) {
        *self.slot_mut(token) = value;
    }

    /// Scale built from a base unit, `SpaceN = N * unit`
    pub fn with_unit(unit: f32) -> Self {
        Self {
            space_0: 0.0,
            space_1: unit,
            space_2: unit * 2.0,
            space_3: unit * 3.0,
            space_4: unit * 4.0,
            space_5: unit * 5.0,
            space_6: unit * 6.0,
            space_8: unit * 8.0,
            space_10: unit * 10.0,
            space_12: unit * 12.0,
            space_16: unit * 16.0,
        }
    }

    fn slot(&self, token: SpacingToken) -> &f32 {
        match token {
            SpacingToken::Space0 => &self.space_0,
            SpacingToken::Space1 => &self.space_1,
            SpacingToken::Space2 => &self.space_2,
            SpacingToken::Space3 => &self.space_3,
            SpacingToken::Space4 => &self.space_4,
            SpacingToken::Space5 => &self.space_5,
            SpacingToken::Space6 => &self.space_6,
            SpacingToken::Space8 => &self.space_8,
            SpacingToken::Space10 => &self.space_10,
            SpacingToken::Space12 => &self.space_12,
            SpacingToken::Space16 => &self.space_16,
        }
    }

    fn slot_mut(&mut self, token: SpacingToken) -> &mut f32 {
        match token {
            SpacingToken::Space0 => &mut self.space_0,
            SpacingToken::Space1 => &mut self.space_1,
            SpacingToken::Space2 => &mut self.space_2,
            SpacingToken::Space3 => &mut self.space_3,
            SpacingToken::Space4 => &mut self.space_4,
            SpacingToken::Space5 => &mut self.space_5,
            SpacingToken::Space6 => &mut self.space_6,
            SpacingToken::Space8 => &mut self.space_8,
            SpacingToken::Space10 => &mut self.space_10,
            SpacingToken::Space12 => &mut self.space_12,
            SpacingToken::Space16 => &mut self.space_16,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::with_unit(4.0)
    }
}
