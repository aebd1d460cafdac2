//! Implicit base transition
//!
//! Appended after every user declaration. It renders a single `transition`
//! rule listing each property whose context flag ended up true.

use swatch_core::CssFragment;

use crate::context::StyleContext;
use crate::descriptor::Descriptor;
use crate::theme::Theme;

pub(crate) fn base_transition<T: Theme + ?Sized>(theme: &T) -> Descriptor {
    let timing = theme.effects().transition.to_css();
    Descriptor::new(move |cx| render(cx, &timing))
}

fn render(cx: &StyleContext, timing: &str) -> CssFragment {
    let entries: Vec<String> = cx
        .transitions()
        .map(|property| format!("{} {timing}", property.as_css()))
        .collect();

    if entries.is_empty() {
        return CssFragment::new();
    }
    CssFragment::new().with("transition", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Contribution, TransitionProperty};
    use crate::theme::ThemeTokens;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_without_flags() {
        let descriptor = base_transition(&ThemeTokens::default());
        assert!(descriptor.render(&StyleContext::new()).is_empty());
    }

    #[test]
    fn lists_properties_in_rule_order() {
        let descriptor = base_transition(&ThemeTokens::default());
        let mut cx = StyleContext::new();
        cx.merge(
            &Contribution::new()
                .transition(TransitionProperty::BoxShadow)
                .transition(TransitionProperty::Color),
        );

        assert_eq!(
            descriptor.render(&cx).get_str("transition"),
            Some(
                "color 150ms cubic-bezier(0.4, 0, 0.2, 1), \
                 box-shadow 150ms cubic-bezier(0.4, 0, 0.2, 1)"
            )
        );
    }
}
