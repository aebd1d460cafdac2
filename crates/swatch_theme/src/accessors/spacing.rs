use swatch_core::{px, CssFragment};

use super::Sides;
use crate::theme::Theme;
use crate::tokens::SpacingToken;

fn spaced<T: Theme + ?Sized>(
    theme: &T,
    base: &str,
    sides: Sides,
    token: SpacingToken,
) -> CssFragment {
    let value = theme.spacing().get(token);
    sides
        .properties(base)
        .into_iter()
        .fold(CssFragment::new(), |fragment, property| {
            fragment.with(property, px(value))
        })
}

/// `padding` on the given sides
pub fn padding<T: Theme + ?Sized>(theme: &T, sides: Sides, token: SpacingToken) -> CssFragment {
    spaced(theme, "padding", sides, token)
}

/// `margin` on the given sides
pub fn margin<T: Theme + ?Sized>(theme: &T, sides: Sides, token: SpacingToken) -> CssFragment {
    spaced(theme, "margin", sides, token)
}

/// `gap` between flex or grid children
pub fn gap<T: Theme + ?Sized>(theme: &T, token: SpacingToken) -> CssFragment {
    CssFragment::new().with("gap", px(theme.spacing().get(token)))
}
