use swatch_core::{px, CssFragment};

use crate::theme::Theme;
use crate::tokens::SizeToken;

pub fn width<T: Theme + ?Sized>(theme: &T, token: SizeToken) -> CssFragment {
    CssFragment::new().with("width", px(theme.sizes().get(token)))
}

pub fn height<T: Theme + ?Sized>(theme: &T, token: SizeToken) -> CssFragment {
    CssFragment::new().with("height", px(theme.sizes().get(token)))
}

/// Square box: `width` and `height` both set to the token
pub fn size<T: Theme + ?Sized>(theme: &T, token: SizeToken) -> CssFragment {
    let value = theme.sizes().get(token);
    CssFragment::new()
        .with("width", px(value))
        .with("height", px(value))
}
