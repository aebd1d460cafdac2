//! Style builder
//!
//! The `o` handed to a style spec. Every method looks its token up in the
//! borrowed theme straight away and returns an owned [`Descriptor`] (or a
//! [`Modified`] wrapper around one), so nothing a spec returns borrows from the
//! builder.

use swatch_core::CssFragment;

use crate::accessors::{self, BorderVariant, Corners, OutlineVariant, Sides};
use crate::context::{ContextKey, Contribution, TransitionProperty};
use crate::descriptor::Descriptor;
use crate::modifier::{FocusState, InteractionState, Modified};
use crate::theme::Theme;
use crate::tokens::*;

/// Token-aware builder passed to style specs
pub struct StyleBuilder<'t, T: Theme + ?Sized> {
    theme: &'t T,
}

impl<'t, T: Theme + ?Sized> StyleBuilder<'t, T> {
    pub fn new(theme: &'t T) -> Self {
        Self { theme }
    }

    /// The theme this builder reads tokens from
    pub fn theme(&self) -> &'t T {
        self.theme
    }

    fn animated(&self, property: TransitionProperty, fragment: CssFragment) -> Descriptor {
        Descriptor::fixed(Contribution::new().transition(property), fragment)
    }

    fn plain(&self, fragment: CssFragment) -> Descriptor {
        Descriptor::fixed(Contribution::new(), fragment)
    }

    // ========== Color ==========

    /// Text color
    pub fn color(&self, token: ColorToken) -> Modified<InteractionState> {
        Modified::new(self.animated(
            TransitionProperty::Color,
            accessors::text_color(self.theme, token),
        ))
    }

    /// Background color
    pub fn bg(&self, token: ColorToken) -> Modified<InteractionState> {
        Modified::new(self.animated(
            TransitionProperty::BackgroundColor,
            accessors::background(self.theme, token),
        ))
    }

    /// Background gradient
    pub fn bg_gradient(&self, token: GradientToken) -> Modified<InteractionState> {
        Modified::new(self.animated(
            TransitionProperty::BackgroundColor,
            accessors::background_gradient(self.theme, token),
        ))
    }

    // ========== Typography, spacing, sizes ==========

    pub fn typography(&self, token: TypographyToken) -> Descriptor {
        self.plain(accessors::typography(self.theme, token))
    }

    pub fn padding(&self, sides: Sides, token: SpacingToken) -> Descriptor {
        self.plain(accessors::padding(self.theme, sides, token))
    }

    pub fn margin(&self, sides: Sides, token: SpacingToken) -> Descriptor {
        self.plain(accessors::margin(self.theme, sides, token))
    }

    pub fn gap(&self, token: SpacingToken) -> Descriptor {
        self.plain(accessors::gap(self.theme, token))
    }

    pub fn width(&self, token: SizeToken) -> Descriptor {
        self.plain(accessors::width(self.theme, token))
    }

    pub fn height(&self, token: SizeToken) -> Descriptor {
        self.plain(accessors::height(self.theme, token))
    }

    /// Width and height
    pub fn size(&self, token: SizeToken) -> Descriptor {
        self.plain(accessors::size(self.theme, token))
    }

    // ========== Borders & outlines ==========

    /// Border on every side, in the token's own color
    pub fn border(&self, token: BorderToken) -> Modified<InteractionState> {
        self.border_with(token, BorderVariant::new())
    }

    /// Border with a directional and/or color variant
    pub fn border_with(
        &self,
        token: BorderToken,
        variant: BorderVariant,
    ) -> Modified<InteractionState> {
        Modified::new(self.animated(
            TransitionProperty::BorderColor,
            accessors::border(self.theme, token, &variant),
        ))
    }

    pub fn border_radius(&self, token: RadiusToken) -> Descriptor {
        self.border_radius_on(Corners::All, token)
    }

    pub fn border_radius_on(&self, corners: Corners, token: RadiusToken) -> Descriptor {
        self.plain(accessors::border_radius(self.theme, corners, token))
    }

    pub fn outline(&self, token: OutlineToken) -> Modified<FocusState> {
        self.outline_with(token, OutlineVariant::new())
    }

    /// Outline with a directional and/or color variant.
    ///
    /// Side subsets are drawn with `box-shadow` and request its transition.
    pub fn outline_with(
        &self,
        token: OutlineToken,
        variant: OutlineVariant,
    ) -> Modified<FocusState> {
        let fragment = accessors::outline(self.theme, token, &variant);
        let descriptor = if variant.sides == Sides::All {
            self.plain(fragment)
        } else {
            self.animated(TransitionProperty::BoxShadow, fragment)
        };
        Modified::new(descriptor)
    }

    // ========== Effects ==========

    /// Elevation shadow
    pub fn effect(&self, token: EffectToken) -> Modified<InteractionState> {
        Modified::new(self.animated(
            TransitionProperty::BoxShadow,
            accessors::element_effect(self.theme, token),
        ))
    }

    // ========== Escape hatches ==========

    /// Raw fragment, rendered verbatim
    pub fn css(&self, fragment: CssFragment) -> Descriptor {
        self.plain(fragment)
    }

    /// Ask the base transition rule to animate `property`
    pub fn transition(&self, property: TransitionProperty) -> Descriptor {
        Descriptor::declaration(Contribution::new().transition(property))
    }

    /// Cancel a transition an earlier declaration requested
    pub fn no_transition(&self, property: TransitionProperty) -> Descriptor {
        Descriptor::declaration(Contribution::new().set(ContextKey::Transition(property), false))
    }

    /// `descriptor` when `condition` holds, a blank entry otherwise
    pub fn when(&self, condition: bool, descriptor: impl Into<Descriptor>) -> Option<Descriptor> {
        condition.then(|| descriptor.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StyleContext;
    use crate::theme::ThemeTokens;
    use pretty_assertions::assert_eq;

    #[test]
    fn color_declares_its_transition() {
        let theme = ThemeTokens::default();
        let o = StyleBuilder::new(&theme);
        let descriptor = o.color(ColorToken::Primary).plain();
        assert_eq!(
            descriptor.contribution(),
            &Contribution::new().transition(TransitionProperty::Color)
        );
    }

    #[test]
    fn full_outline_declares_nothing() {
        let theme = ThemeTokens::default();
        let o = StyleBuilder::new(&theme);
        assert!(o.outline(OutlineToken::Focus).plain().contribution().is_empty());

        let sided = o.outline_with(
            OutlineToken::Focus,
            OutlineVariant::new().sides(Sides::Bottom),
        );
        assert_eq!(
            sided.plain().contribution(),
            &Contribution::new().transition(TransitionProperty::BoxShadow)
        );
    }

    #[test]
    fn radius_uses_px() {
        let theme = ThemeTokens::default();
        let o = StyleBuilder::new(&theme);
        let fragment = o.border_radius(RadiusToken::Md).render(&StyleContext::new());
        assert_eq!(fragment.get_str("border-radius"), Some("8px"));
    }

    #[test]
    fn when_false_is_blank() {
        let theme = ThemeTokens::default();
        let o = StyleBuilder::new(&theme);
        assert!(o.when(false, o.gap(SpacingToken::Space2)).is_none());
        assert!(o.when(true, o.bg(ColorToken::Surface1)).is_some());
    }

    #[test]
    fn css_is_verbatim() {
        let theme = ThemeTokens::default();
        let o = StyleBuilder::new(&theme);
        let fragment = CssFragment::new().with("display", "flex");
        assert_eq!(o.css(fragment.clone()).render(&StyleContext::new()), fragment);
    }
}
