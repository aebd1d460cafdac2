//! Style descriptors
//!
//! A [`Descriptor`] is what every builder call produces: a deferred CSS
//! computation plus the context entries it declares. Its internals are private
//! to this crate. User code can create descriptors, move them around and hand
//! them back to the resolver, but never read what they contain, so the only
//! way one declaration can influence another is through the shared
//! [`StyleContext`].

use std::fmt;

use swatch_core::CssFragment;

use crate::context::{Contribution, StyleContext};

type Projection = Box<dyn Fn(&StyleContext) -> CssFragment>;

/// Opaque unit of deferred CSS computation
pub struct Descriptor {
    contribution: Contribution,
    project: Projection,
}

impl Descriptor {
    /// Descriptor that declares nothing and renders `project(context)`.
    ///
    /// `project` must only depend on its argument and on values it captured.
    pub fn new(project: impl Fn(&StyleContext) -> CssFragment + 'static) -> Self {
        Self::with_contribution(Contribution::new(), project)
    }

    /// Descriptor that declares `contribution` and renders `project(context)`.
    pub fn with_contribution(
        contribution: Contribution,
        project: impl Fn(&StyleContext) -> CssFragment + 'static,
    ) -> Self {
        Self {
            contribution,
            project: Box::new(project),
        }
    }

    /// Descriptor rendering a fixed fragment regardless of context
    pub fn fixed(contribution: Contribution, fragment: CssFragment) -> Self {
        Self::with_contribution(contribution, move |_| fragment.clone())
    }

    /// Descriptor that only declares context and renders an empty fragment
    pub fn declaration(contribution: Contribution) -> Self {
        Self::with_contribution(contribution, |_| CssFragment::new())
    }

    pub(crate) fn contribution(&self) -> &Contribution {
        &self.contribution
    }

    pub(crate) fn render(&self, context: &StyleContext) -> CssFragment {
        (self.project)(context)
    }

    /// Same declaration, rendered under a nested selector. The contribution is untouched.
    pub(crate) fn nest(self, selector: &'static str) -> Descriptor {
        let Descriptor {
            contribution,
            project,
        } = self;
        Descriptor::with_contribution(contribution, move |cx| project(cx).nest(selector))
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TransitionProperty;

    #[test]
    fn new_has_empty_contribution() {
        let descriptor = Descriptor::new(|_| CssFragment::new().with("color", "red"));
        assert!(descriptor.contribution().is_empty());
        assert_eq!(
            descriptor.render(&StyleContext::new()).get_str("color"),
            Some("red")
        );
    }

    #[test]
    fn projection_sees_the_context() {
        let descriptor = Descriptor::new(|cx| {
            let value = if cx.transition(TransitionProperty::Color) { "on" } else { "off" };
            CssFragment::new().with("state", value)
        });

        let mut cx = StyleContext::new();
        assert_eq!(descriptor.render(&cx).get_str("state"), Some("off"));
        cx.merge(&Contribution::new().transition(TransitionProperty::Color));
        assert_eq!(descriptor.render(&cx).get_str("state"), Some("on"));
    }

    #[test]
    fn nest_keeps_contribution() {
        let contribution = Contribution::new().transition(TransitionProperty::BackgroundColor);
        let nested = Descriptor::fixed(contribution.clone(), CssFragment::new().with("color", "red"))
            .nest("&:hover");

        assert_eq!(nested.contribution(), &contribution);
        let fragment = nested.render(&StyleContext::new());
        assert_eq!(fragment.len(), 1);
        assert!(fragment.contains("&:hover"));
    }
}
