//! Two-pass style resolution
//!
//! 1. Flatten the spec result and append the base transition.
//! 2. Fold every contribution, in order, into one [`StyleContext`].
//! 3. Render every descriptor against that final context.
//!
//! Because rendering only starts after folding, a declaration can react to
//! contributions made by declarations that come after it.

use swatch_core::CssFragment;

use crate::context::StyleContext;
use crate::descriptor::Descriptor;
use crate::spec::SpecResult;
use crate::theme::Theme;
use crate::transition::base_transition;

/// Resolve a spec result into ordered fragments. The last fragment is always the base transition.
pub fn resolve<T: Theme + ?Sized>(theme: &T, result: SpecResult) -> Vec<CssFragment> {
    let mut descriptors = result.flatten();
    descriptors.push(base_transition(theme));

    let context = fold_context(&descriptors);
    tracing::trace!(
        "resolve: {} descriptors, context {:?}",
        descriptors.len(),
        context
    );

    descriptors
        .iter()
        .map(|descriptor| descriptor.render(&context))
        .collect()
}

/// Shallow left-to-right merge of every contribution
pub(crate) fn fold_context(descriptors: &[Descriptor]) -> StyleContext {
    descriptors
        .iter()
        .fold(StyleContext::new(), |mut context, descriptor| {
            context.merge(descriptor.contribution());
            context
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ContextKey, Contribution, TransitionProperty};
    use crate::theme::ThemeTokens;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_spec_renders_only_the_transition() {
        let fragments = resolve(&ThemeTokens::default(), SpecResult::None);
        assert_eq!(fragments, vec![CssFragment::new()]);
    }

    #[test]
    fn earlier_declarations_see_later_contributions() {
        let probe = Descriptor::new(|cx| {
            CssFragment::new().with(
                "probe",
                if cx.transition(TransitionProperty::Opacity) { "yes" } else { "no" },
            )
        });
        let late = Descriptor::declaration(Contribution::new().transition(TransitionProperty::Opacity));

        let fragments = resolve(
            &ThemeTokens::default(),
            SpecResult::Many(vec![Some(probe), Some(late)]),
        );
        assert_eq!(fragments[0].get_str("probe"), Some("yes"));
    }

    #[test]
    fn fold_is_last_write_wins() {
        let key = ContextKey::Transition(TransitionProperty::Color);
        let descriptors = vec![
            Descriptor::declaration(Contribution::new().set(key, true)),
            Descriptor::declaration(Contribution::new().set(key, false)),
        ];
        assert!(!fold_context(&descriptors).flag(key));
    }
}
