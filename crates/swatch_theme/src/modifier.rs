//! State modifiers
//!
//! [`Modified`] is what token accessors hand back when their result can be
//! qualified by an element state. Used as-is it is the plain declaration; a
//! modifier such as [`Modified::hover`] nests the same declaration under the
//! state's selector. Modifiers are purely structural: the declared context
//! stays exactly what the base accessor declared.
//!
//! Every category shares this one protocol. They differ only in which closed
//! [`StateSet`] they accept: interactive tokens take [`InteractionState`],
//! outlines take [`FocusState`].

use std::marker::PhantomData;

use crate::descriptor::Descriptor;

/// A closed set of element states usable as modifiers
pub trait StateSet: Copy {
    /// Nested selector key, e.g. `&:hover`
    fn selector(self) -> &'static str;
}

/// Pointer and keyboard interaction states
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum InteractionState {
    Hover,
    Active,
    Focus,
    FocusVisible,
    Disabled,
}

impl StateSet for InteractionState {
    fn selector(self) -> &'static str {
        match self {
            InteractionState::Hover => "&:hover",
            InteractionState::Active => "&:active",
            InteractionState::Focus => "&:focus",
            InteractionState::FocusVisible => "&:focus-visible",
            InteractionState::Disabled => "&:disabled",
        }
    }
}

/// Focus states, used by outlines
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FocusState {
    Focus,
    FocusVisible,
    FocusWithin,
}

impl StateSet for FocusState {
    fn selector(self) -> &'static str {
        match self {
            FocusState::Focus => "&:focus",
            FocusState::FocusVisible => "&:focus-visible",
            FocusState::FocusWithin => "&:focus-within",
        }
    }
}

/// A declaration that can be used directly or qualified by a state in `S`
#[derive(Debug)]
pub struct Modified<S: StateSet> {
    base: Descriptor,
    _states: PhantomData<S>,
}

impl<S: StateSet> Modified<S> {
    pub fn new(base: Descriptor) -> Self {
        Self {
            base,
            _states: PhantomData,
        }
    }

    /// The declaration nested under `state`'s selector
    pub fn with(self, state: S) -> Descriptor {
        self.base.nest(state.selector())
    }

    /// The unmodified declaration
    pub fn plain(self) -> Descriptor {
        self.base
    }
}

impl Modified<InteractionState> {
    pub fn hover(self) -> Descriptor {
        self.with(InteractionState::Hover)
    }

    pub fn active(self) -> Descriptor {
        self.with(InteractionState::Active)
    }

    pub fn focus(self) -> Descriptor {
        self.with(InteractionState::Focus)
    }

    pub fn focus_visible(self) -> Descriptor {
        self.with(InteractionState::FocusVisible)
    }

    pub fn disabled(self) -> Descriptor {
        self.with(InteractionState::Disabled)
    }
}

impl Modified<FocusState> {
    pub fn focus(self) -> Descriptor {
        self.with(FocusState::Focus)
    }

    pub fn focus_visible(self) -> Descriptor {
        self.with(FocusState::FocusVisible)
    }

    pub fn focus_within(self) -> Descriptor {
        self.with(FocusState::FocusWithin)
    }
}

impl<S: StateSet> From<Modified<S>> for Descriptor {
    fn from(modified: Modified<S>) -> Self {
        modified.plain()
    }
}

impl<S: StateSet> From<Modified<S>> for Option<Descriptor> {
    fn from(modified: Modified<S>) -> Self {
        Some(modified.plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Contribution, StyleContext, TransitionProperty};
    use swatch_core::CssFragment;

    fn red() -> Modified<InteractionState> {
        Modified::new(Descriptor::fixed(
            Contribution::new().transition(TransitionProperty::Color),
            CssFragment::new().with("color", "red"),
        ))
    }

    #[test]
    fn plain_form_is_the_base_fragment() {
        let fragment = red().plain().render(&StyleContext::new());
        assert_eq!(fragment, CssFragment::new().with("color", "red"));
    }

    #[test]
    fn modifier_nests_under_selector() {
        let fragment = red().hover().render(&StyleContext::new());
        assert_eq!(
            fragment,
            CssFragment::new().with("&:hover", CssFragment::new().with("color", "red"))
        );
    }

    #[test]
    fn modifier_does_not_change_contribution() {
        let plain = red().plain();
        let hovered = red().disabled();
        assert_eq!(plain.contribution(), hovered.contribution());
    }

    #[test]
    fn focus_states_have_their_own_selectors() {
        assert_eq!(FocusState::FocusWithin.selector(), "&:focus-within");
        assert_eq!(InteractionState::FocusVisible.selector(), "&:focus-visible");
    }
}
