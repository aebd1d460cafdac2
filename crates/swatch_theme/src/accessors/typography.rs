use swatch_core::{px, CssFragment};

use crate::theme::Theme;
use crate::tokens::TypographyToken;

/// Font declarations for a text style
pub fn typography<T: Theme + ?Sized>(theme: &T, token: TypographyToken) -> CssFragment {
    let tokens = theme.typography();
    let style = tokens.get(token);

    CssFragment::new()
        .with("font-family", tokens.family(style.family))
        .with("font-size", px(style.size))
        .with("font-weight", style.weight)
        .with("line-height", style.line_height)
        .with("letter-spacing", px(style.letter_spacing))
}
