use swatch_core::{units::px_string, CssFragment};

use super::Sides;
use crate::theme::Theme;
use crate::tokens::{BorderToken, ColorToken, GradientToken};

/// Where a border's color comes from
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Paint {
    Color(ColorToken),
    Gradient(GradientToken),
}

/// Directional and color variants of a border token
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct BorderVariant {
    pub sides: Sides,
    /// Overrides the token's own color
    pub paint: Option<Paint>,
}

impl BorderVariant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }

    pub fn color(mut self, token: ColorToken) -> Self {
        self.paint = Some(Paint::Color(token));
        self
    }

    pub fn gradient(mut self, token: GradientToken) -> Self {
        self.paint = Some(Paint::Gradient(token));
        self
    }
}

/// Border shorthand(s) for a border token.
///
/// Gradient paints draw a transparent border and fill it through
/// `border-image`, which only paints edges that have a border width.
pub fn border<T: Theme + ?Sized>(
    theme: &T,
    token: BorderToken,
    variant: &BorderVariant,
) -> CssFragment {
    let spec = theme.borders().get(token);
    let paint = variant.paint.unwrap_or(Paint::Color(spec.color));

    let color = match paint {
        Paint::Color(color) => theme.colors().get(color).to_css(),
        Paint::Gradient(_) => "transparent".to_string(),
    };
    let value = format!("{} {} {}", px_string(spec.width), spec.style.as_css(), color);

    let fragment = variant
        .sides
        .properties("border")
        .into_iter()
        .fold(CssFragment::new(), |fragment, property| {
            fragment.with(property, value.as_str())
        });

    match paint {
        Paint::Gradient(gradient) => fragment.with(
            "border-image",
            format!("{} 1", theme.gradients().get(gradient).to_css()),
        ),
        Paint::Color(_) => fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeTokens;
    use pretty_assertions::assert_eq;
    use swatch_core::Color;

    fn theme() -> ThemeTokens {
        let mut theme = ThemeTokens::default();
        theme.color.set(ColorToken::Border, Color::from_hex(0x112233));
        theme.color.set(ColorToken::Error, Color::from_hex(0xff0000));
        theme
    }

    #[test]
    fn token_color_on_all_sides() {
        let fragment = border(&theme(), BorderToken::Default, &BorderVariant::new());
        assert_eq!(fragment, CssFragment::new().with("border", "1px solid #112233"));
    }

    #[test]
    fn color_variant_on_one_side() {
        let variant = BorderVariant::new().sides(Sides::Bottom).color(ColorToken::Error);
        let fragment = border(&theme(), BorderToken::Thin, &variant);
        assert_eq!(
            fragment,
            CssFragment::new().with("border-bottom", "0.5px solid #ff0000")
        );
    }

    #[test]
    fn gradient_variant_uses_border_image() {
        let theme = theme();
        let variant = BorderVariant::new().gradient(GradientToken::Accent);
        let fragment = border(&theme, BorderToken::Thick, &variant);

        assert_eq!(fragment.get_str("border"), Some("2px solid transparent"));
        assert_eq!(
            fragment.get_str("border-image"),
            Some(format!("{} 1", theme.gradient_color.accent.to_css()).as_str())
        );
    }
}
