//! Settings file handling
//!
//! `spacing` reads the same settings shape the shell persists, as TOML:
//!
//! ```toml
//! [backgroundAnimation]
//! type = "particles"
//! intensity = "high"
//!
//! [accessibilitySettings]
//! reducedMotion = false
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use anyhow::{Context, Result};
use spacing_particles::{EffectKind, FieldSettings, Intensity};
use std::fs;
use std::path::Path;

/// Load settings from `path`, or the defaults when no file is given
pub fn load_settings(path: Option<&Path>) -> Result<FieldSettings> {
    let Some(path) = path else {
        return Ok(FieldSettings::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let settings: FieldSettings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(settings)
}

/// Command-line overrides for a loaded settings file
#[derive(Debug, Default)]
pub struct Overrides {
    pub effect: Option<EffectKind>,
    pub intensity: Option<Intensity>,
    pub reduced_motion: bool,
}

impl Overrides {
    pub fn apply(&self, mut settings: FieldSettings) -> FieldSettings {
        if let Some(effect) = self.effect {
            settings.background_animation.effect_kind = effect;
        }
        if let Some(intensity) = self.intensity {
            settings.background_animation.intensity = intensity;
        }
        if self.reduced_motion {
            settings.accessibility_settings.reduced_motion = true;
        }
        settings
    }
}

/// Serialize settings back to the file format
pub fn to_toml(settings: &FieldSettings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize settings")
}
