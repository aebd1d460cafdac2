//! Theme files
//!
//! A theme file picks a preset and scheme, then overrides individual tokens by
//! name:
//!
//! ```toml
//! preset = "slate"
//! scheme = "dark"
//! name = "Acme"
//!
//! [colors]
//! primary = "#7c3aed"
//! surface3 = "#1e1b2e"
//!
//! [radius]
//! md = 12
//!
//! [transition]
//! duration_ms = 200
//! ```

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swatch_core::Color;

use crate::error::ConfigError;
use crate::presets::ThemePreset;
use crate::theme::{ColorScheme, ThemeTokens};
use crate::tokens::*;

/// Font stack overrides
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub sans: Option<String>,
    pub mono: Option<String>,
}

/// Base transition timing overrides
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: Option<u32>,
    pub easing: Option<String>,
}

/// A parsed theme file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preset id, `swatch` when omitted
    pub preset: Option<String>,
    pub scheme: ColorScheme,
    /// Overrides the preset's display name
    pub name: Option<String>,
    pub colors: IndexMap<String, Color>,
    pub spacing: IndexMap<String, f32>,
    pub radius: IndexMap<String, f32>,
    pub sizes: IndexMap<String, f32>,
    pub fonts: FontConfig,
    pub transition: TransitionConfig,
}

impl ThemeConfig {
    /// Read and parse a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = text.parse()?;
        tracing::debug!("ThemeConfig::load - loaded {}", path.display());
        Ok(config)
    }

    /// Preset this config starts from
    pub fn base_preset(&self) -> Result<ThemePreset, ConfigError> {
        match self.preset.as_deref() {
            None => Ok(ThemePreset::Swatch),
            Some(id) => {
                ThemePreset::from_id(id).ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))
            }
        }
    }

    /// Apply every override on top of the base preset
    pub fn build(&self) -> Result<ThemeTokens, ConfigError> {
        let mut theme = self.base_preset()?.bundle().into_scheme(self.scheme);

        if let Some(name) = &self.name {
            theme.name = name.clone();
        }
        for (name, color) in &self.colors {
            theme.color.set(lookup("color", name, ColorToken::from_name)?, *color);
        }
        for (name, value) in &self.spacing {
            let token = lookup("spacing", name, SpacingToken::from_name)?;
            theme.spacing.set(token, finite("spacing", name, *value)?);
        }
        for (name, value) in &self.radius {
            let token = lookup("radius", name, RadiusToken::from_name)?;
            theme.border_radius.set(token, finite("radius", name, *value)?);
        }
        for (name, value) in &self.sizes {
            let token = lookup("size", name, SizeToken::from_name)?;
            theme.size.set(token, finite("size", name, *value)?);
        }
        if let Some(sans) = &self.fonts.sans {
            theme.typography.font_sans = sans.clone();
        }
        if let Some(mono) = &self.fonts.mono {
            theme.typography.font_mono = mono.clone();
        }
        if let Some(duration_ms) = self.transition.duration_ms {
            theme.element_effect.transition.duration_ms = duration_ms;
        }
        if let Some(easing) = &self.transition.easing {
            theme.element_effect.transition.easing = easing.clone();
        }

        Ok(theme)
    }
}

impl FromStr for ThemeConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn lookup<K>(
    category: &'static str,
    name: &str,
    find: impl Fn(&str) -> Option<K>,
) -> Result<K, ConfigError> {
    find(name).ok_or_else(|| ConfigError::UnknownToken {
        category,
        name: name.to_string(),
    })
}

fn finite(category: &'static str, name: &str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFiniteValue {
            category,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn empty_file_is_the_default_preset() {
        let config: ThemeConfig = "".parse().unwrap();
        let theme = config.build().unwrap();
        assert_eq!(theme, ThemePreset::Swatch.bundle().into_scheme(ColorScheme::Light));
    }

    #[test]
    fn unknown_preset() {
        let config: ThemeConfig = "preset = \"solarized\"".parse().unwrap();
        assert!(matches!(config.build(), Err(ConfigError::UnknownPreset(id)) if id == "solarized"));
    }

    #[test]
    fn non_finite_lengths_are_rejected() {
        for (source, category) in [
            ("[spacing]\nspace-4 = nan", "spacing"),
            ("[radius]\nmd = inf", "radius"),
            ("[sizes]\navatar = -inf", "size"),
        ] {
            let config: ThemeConfig = source.parse().unwrap();
            match config.build() {
                Err(ConfigError::NonFiniteValue { category: got, .. }) => {
                    assert_eq!(got, category)
                }
                other => panic!("expected NonFiniteValue for {source:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn large_finite_lengths_are_kept() {
        let config: ThemeConfig = "[radius]\nfull = 1e20".parse().unwrap();
        let theme = config.build().unwrap();
        assert_eq!(theme.radii().get(RadiusToken::Full), 1e20);
    }

    #[test]
    fn scheme_selects_bundle_half() {
        let config: ThemeConfig = "preset = \"neutral\"\nscheme = \"dark\"".parse().unwrap();
        let theme = config.build().unwrap();
        assert_eq!(theme.color_scheme(), ColorScheme::Dark);
    }
}
