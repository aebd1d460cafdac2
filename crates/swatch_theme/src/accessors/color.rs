use swatch_core::CssFragment;

use crate::theme::Theme;
use crate::tokens::{ColorToken, GradientToken};

/// `color` from a color token
pub fn text_color<T: Theme + ?Sized>(theme: &T, token: ColorToken) -> CssFragment {
    CssFragment::new().with("color", theme.colors().get(token))
}

/// `background-color` from a color token
pub fn background<T: Theme + ?Sized>(theme: &T, token: ColorToken) -> CssFragment {
    CssFragment::new().with("background-color", theme.colors().get(token))
}

/// `background-image` from a gradient color token
pub fn background_gradient<T: Theme + ?Sized>(theme: &T, token: GradientToken) -> CssFragment {
    CssFragment::new().with("background-image", theme.gradients().get(token))
}
