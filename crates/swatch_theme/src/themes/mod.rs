//! Built-in themes

mod swatch;

pub use swatch::{latte, mocha, SwatchTheme};
