use swatch_core::{units::px_string, CssFragment};

use super::{Edge, Sides};
use crate::theme::Theme;
use crate::tokens::{ColorToken, OutlineToken};

/// Directional and color variants of an outline token
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct OutlineVariant {
    pub sides: Sides,
    /// Overrides the token's own color
    pub color: Option<ColorToken>,
}

impl OutlineVariant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }

    pub fn color(mut self, token: ColorToken) -> Self {
        self.color = Some(token);
        self
    }
}

/// Outline declarations for an outline token.
///
/// CSS outlines cannot be limited to some edges, so a partial outline is drawn
/// as one inset `box-shadow` line per edge instead.
pub fn outline<T: Theme + ?Sized>(
    theme: &T,
    token: OutlineToken,
    variant: &OutlineVariant,
) -> CssFragment {
    let spec = theme.outlines().get(token);
    let color = theme.colors().get(variant.color.unwrap_or(spec.color)).to_css();

    if variant.sides == Sides::All {
        return CssFragment::new()
            .with(
                "outline",
                format!("{} {} {}", px_string(spec.width), spec.style.as_css(), color),
            )
            .with("outline-offset", px_string(spec.offset));
    }

    let width = px_string(spec.width);
    let negative = px_string(-spec.width);
    let lines: Vec<String> = variant
        .sides
        .edges()
        .iter()
        .map(|edge| {
            let (x, y) = match edge {
                Edge::Top => ("0px", width.as_str()),
                Edge::Right => (negative.as_str(), "0px"),
                Edge::Bottom => ("0px", negative.as_str()),
                Edge::Left => (width.as_str(), "0px"),
            };
            format!("inset {x} {y} 0px 0px {color}")
        })
        .collect();

    CssFragment::new().with("box-shadow", lines.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeTokens;
    use pretty_assertions::assert_eq;
    use swatch_core::Color;

    fn theme() -> ThemeTokens {
        let mut theme = ThemeTokens::default();
        theme.color.set(ColorToken::BorderFocus, Color::from_hex(0x0000ff));
        theme
    }

    #[test]
    fn full_outline_with_offset() {
        let fragment = outline(&theme(), OutlineToken::Focus, &OutlineVariant::new());
        assert_eq!(
            fragment,
            CssFragment::new()
                .with("outline", "2px solid #0000ff")
                .with("outline-offset", "2px")
        );
    }

    #[test]
    fn side_subset_becomes_inset_shadows() {
        let variant = OutlineVariant::new().sides(Sides::Y);
        let fragment = outline(&theme(), OutlineToken::Focus, &variant);
        assert_eq!(
            fragment.get_str("box-shadow"),
            Some("inset 0px 2px 0px 0px #0000ff, inset 0px -2px 0px 0px #0000ff")
        );
        assert!(!fragment.contains("outline"));
    }
}
