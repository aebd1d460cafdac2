//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system. Each category has
//! a closed key enum (so an unknown token is a compile error) and a token set
//! struct holding the values:
//! - Colors and gradient colors
//! - Typography (families, sizes, weights)
//! - Spacing (padding, margin, gap)
//! - Sizes (icons and controls)
//! - Borders, border radii and outlines
//! - Element effects (shadows and transition timing)

/// Declares how a token key enum maps to and from its kebab-case name.
///
/// Names are what theme files use to address tokens.
macro_rules! token_names {
    ($token:ident { $($variant:ident => $name:literal),* $(,)? }) => {
        impl $token {
            /// Every key in this category, in declaration order
            pub const ALL: &'static [$token] = &[$($token::$variant),*];

            /// Kebab-case name used in theme files
            pub fn name(self) -> &'static str {
                match self {
                    $($token::$variant => $name,)*
                }
            }

            /// Look a key up by its kebab-case name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($token::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

mod border;
mod color;
mod effect;
mod gradient;
mod outline;
mod radius;
mod size;
mod spacing;
mod typography;

pub use border::*;
pub use color::*;
pub use effect::*;
pub use gradient::*;
pub use outline::*;
pub use radius::*;
pub use size::*;
pub use spacing::*;
pub use typography::*;
