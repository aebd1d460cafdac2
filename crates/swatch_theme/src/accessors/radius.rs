use swatch_core::{px, CssFragment};

use crate::theme::Theme;
use crate::tokens::RadiusToken;

/// Which corners a border radius applies to
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Corners {
    #[default]
    All,
    /// Top-left and top-right
    Top,
    /// Top-right and bottom-right
    Right,
    /// Bottom-right and bottom-left
    Bottom,
    /// Top-left and bottom-left
    Left,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corners {
    fn properties(self) -> &'static [&'static str] {
        const TL: &str = "border-top-left-radius";
        const TR: &str = "border-top-right-radius";
        const BR: &str = "border-bottom-right-radius";
        const BL: &str = "border-bottom-left-radius";
        match self {
            Corners::All => &["border-radius"],
            Corners::Top => &[TL, TR],
            Corners::Right => &[TR, BR],
            Corners::Bottom => &[BR, BL],
            Corners::Left => &[TL, BL],
            Corners::TopLeft => &[TL],
            Corners::TopRight => &[TR],
            Corners::BottomRight => &[BR],
            Corners::BottomLeft => &[BL],
        }
    }
}

/// `border-radius` (or per-corner longhands) from a radius token
pub fn border_radius<T: Theme + ?Sized>(
    theme: &T,
    corners: Corners,
    token: RadiusToken,
) -> CssFragment {
    let value = theme.radii().get(token);
    corners
        .properties()
        .iter()
        .fold(CssFragment::new(), |fragment, property| {
            fragment.with(*property, px(value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeTokens;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_corners_use_the_shorthand() {
        let fragment = border_radius(&ThemeTokens::default(), Corners::All, RadiusToken::Md);
        assert_eq!(fragment, CssFragment::new().with("border-radius", "8px"));
    }

    #[test]
    fn edge_subsets_expand_to_two_longhands() {
        let theme = ThemeTokens::default();
        assert_eq!(
            border_radius(&theme, Corners::Top, RadiusToken::Md),
            CssFragment::new()
                .with("border-top-left-radius", "8px")
                .with("border-top-right-radius", "8px")
        );
        assert_eq!(
            border_radius(&theme, Corners::Left, RadiusToken::Md),
            CssFragment::new()
                .with("border-top-left-radius", "8px")
                .with("border-bottom-left-radius", "8px")
        );
    }

    #[test]
    fn single_corner() {
        let mut theme = ThemeTokens::default();
        theme.border_radius.set(RadiusToken::Lg, 12.5);
        assert_eq!(
            border_radius(&theme, Corners::BottomRight, RadiusToken::Lg),
            CssFragment::new().with("border-bottom-right-radius", "12.5px")
        );
    }
}
