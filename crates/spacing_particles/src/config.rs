//! Field configuration and tunables
//!
//! `SimulationConfig` and `AccessibilitySettings` are owned by the host shell
//! and only ever read here. Their serde shape matches the settings the shell
//! persists (`backgroundAnimation.type`, `accessibilitySettings.reducedMotion`
//! and so on).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Population cap, enforced once per frame
pub const MAX_PARTICLES: usize = 200;
/// Particles at or above this size never merge
pub const MAX_MERGE_SIZE: f32 = 8.0;
/// Size ceiling for a merge result
pub const MAX_MERGED_SIZE: f32 = 10.0;
pub const MERGE_SIZE_MULTIPLIER: f32 = 1.2;
pub const MAX_MERGED_OPACITY: f32 = 0.8;

pub const CLICK_RADIUS_MULTIPLIER: f32 = 2.0;
pub const CLICK_RADIUS_BASE: f32 = 20.0;

/// Pairs closer than this are joined by a connection line
pub const CONNECTION_DISTANCE: f32 = 100.0;
pub const CONNECTION_OPACITY_BASE: f32 = 0.1;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;
pub const CONNECTION_SATURATION: f32 = 0.5;
pub const CONNECTION_LIGHTNESS: f32 = 0.5;

pub const PARTICLE_SATURATION: f32 = 0.7;
pub const PARTICLE_LIGHTNESS: f32 = 0.6;

/// Velocity components are drawn from `[-SPEED/2, SPEED/2)`
pub const PARTICLE_SPEED_BASE: f32 = 0.5;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_MAX: f32 = 0.3;

/// Fragment speed as a fraction of the parent size
pub const BURST_SPEED_FACTOR: f32 = 0.5;
/// Fragments per unit of parent size
pub const BURST_COUNT_FACTOR: f32 = 2.0;
pub const BURST_SIZE_FACTOR: f32 = 0.3;
pub const BURST_MIN_SIZE: f32 = 0.5;

/// Errors from parsing configuration values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown effect kind '{0}' (expected particles, waves or gradient)")]
    UnknownEffect(String),

    #[error("Unknown intensity '{0}' (expected low, medium or high)")]
    UnknownIntensity(String),
}

/// Which background effect the shell shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    #[default]
    Particles,
    Waves,
    Gradient,
}

impl FromStr for EffectKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "particles" => Ok(EffectKind::Particles),
            "waves" => Ok(EffectKind::Waves),
            "gradient" => Ok(EffectKind::Gradient),
            _ => Err(ConfigError::UnknownEffect(s.to_string())),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EffectKind::Particles => "particles",
            EffectKind::Waves => "waves",
            EffectKind::Gradient => "gradient",
        })
    }
}

/// Coarse effect strength
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    #[default]
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Number of particles seeded at mount
    pub fn initial_population(self) -> usize {
        match self {
            Intensity::Low => 30,
            Intensity::Medium => 50,
            Intensity::High => 80,
        }
    }

    /// Whether connection lines are drawn between nearby particles
    pub fn draws_connections(self) -> bool {
        self == Intensity::High
    }
}

impl FromStr for Intensity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(ConfigError::UnknownIntensity(s.to_string())),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        })
    }
}

/// Animation configuration: which effect, how strong
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    #[serde(rename = "type")]
    pub effect_kind: EffectKind,
    pub intensity: Intensity,
}

impl SimulationConfig {
    pub fn new(effect_kind: EffectKind, intensity: Intensity) -> Self {
        Self {
            effect_kind,
            intensity,
        }
    }

    /// Particle effect at the given intensity
    pub fn particles(intensity: Intensity) -> Self {
        Self::new(EffectKind::Particles, intensity)
    }

    /// Whether the frame loop keeps rescheduling itself
    pub fn keeps_animating(&self) -> bool {
        self.effect_kind == EffectKind::Particles
    }
}

/// Text size preference. Carried for the shell, unused by the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Accessibility preferences. Only `reduced_motion` affects the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub font_size: FontSize,
}

/// The slice of shell settings the field reacts to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSettings {
    pub background_animation: SimulationConfig,
    pub accessibility_settings: AccessibilitySettings,
}

impl FieldSettings {
    pub fn reduced_motion(&self) -> bool {
        self.accessibility_settings.reduced_motion
    }
}
