//! Token accessors
//!
//! Pure functions from a theme and a token key to a [`CssFragment`]. They
//! never format units themselves (every length goes through
//! [`swatch_core::px`]) and hold no state, so calling one twice with the same
//! theme and key always yields the same fragment.
//!
//! [`CssFragment`]: swatch_core::CssFragment

mod border;
mod color;
mod effect;
mod outline;
mod radius;
mod size;
mod spacing;
mod typography;

pub use border::{border, BorderVariant, Paint};
pub use color::{background, background_gradient, text_color};
pub use effect::element_effect;
pub use outline::{outline, OutlineVariant};
pub use radius::{border_radius, Corners};
pub use size::{height, size, width};
pub use spacing::{gap, margin, padding};
pub use typography::typography;

/// A box edge
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

/// Which edges a directional declaration applies to
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Sides {
    #[default]
    All,
    Top,
    Right,
    Bottom,
    Left,
    /// Left and right
    X,
    /// Top and bottom
    Y,
}

impl Sides {
    /// Edges covered, in CSS order (top, right, bottom, left)
    pub fn edges(self) -> &'static [Edge] {
        match self {
            Sides::All => &[Edge::Top, Edge::Right, Edge::Bottom, Edge::Left],
            Sides::Top => &[Edge::Top],
            Sides::Right => &[Edge::Right],
            Sides::Bottom => &[Edge::Bottom],
            Sides::Left => &[Edge::Left],
            Sides::X => &[Edge::Right, Edge::Left],
            Sides::Y => &[Edge::Top, Edge::Bottom],
        }
    }

    /// Property names for `base` on these sides.
    ///
    /// [`Sides::All`] uses the shorthand (`padding`); everything else uses the
    /// longhands (`padding-top`, ...).
    pub(crate) fn properties(self, base: &str) -> Vec<String> {
        match self {
            Sides::All => vec![base.to_string()],
            sides => sides
                .edges()
                .iter()
                .map(|edge| format!("{base}-{}", edge.as_str()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sides_use_the_shorthand() {
        assert_eq!(Sides::All.properties("margin"), vec!["margin"]);
    }

    #[test]
    fn axis_sides_expand_in_css_order() {
        assert_eq!(
            Sides::X.properties("padding"),
            vec!["padding-right", "padding-left"]
        );
        assert_eq!(
            Sides::Y.properties("padding"),
            vec!["padding-top", "padding-bottom"]
        );
    }
}
