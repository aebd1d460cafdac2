use swatch_core::CssFragment;

use crate::theme::Theme;
use crate::tokens::EffectToken;

/// `box-shadow` from an element effect token
pub fn element_effect<T: Theme + ?Sized>(theme: &T, token: EffectToken) -> CssFragment {
    CssFragment::new().with("box-shadow", theme.effects().get(token).to_css())
}
