//! Spacing Particles
//!
//! The ambient dust-mote field drawn behind the relaxation screen. Small
//! tinted particles drift and wrap around the edges, merge with same-group
//! neighbours they overlap, and burst into fragments when clicked or touched.
//!
//! # Components
//!
//! - [`ParticleFactory`] - seeded particles, merge results, burst fragments
//! - [`spatial`] - pairwise merge detection and connection lines
//! - [`Population`] - growth, the population cap, atomic per-frame deltas
//! - [`renderer`] - paints a frame onto any [`spacing_core::DrawContext`]
//! - [`interaction`] - click/touch bursts
//! - [`ParticleField`] - mount, frame loop, resize and teardown against a
//!   [`spacing_platform::Host`]
//!
//! # Example
//!
//! ```
//! use spacing_core::Size;
//! use spacing_particles::{FieldContext, HeadlessHost, Intensity, ParticleField, SimulationConfig};
//!
//! let mut host = HeadlessHost::new(Size::new(800.0, 600.0));
//! let context = FieldContext::new(SimulationConfig::particles(Intensity::Low), false);
//! let mut field = ParticleField::new(context);
//!
//! assert!(field.mount(&mut host).is_mounted());
//! host.pump(&mut field, 10);
//! assert!(field.particles().len() <= 200);
//! field.unmount(&mut host);
//! ```

pub mod config;
pub mod factory;
pub mod headless;
pub mod interaction;
pub mod lifecycle;
pub mod particle;
pub mod population;
pub mod renderer;
pub mod settings;
pub mod spatial;

pub use config::{
    AccessibilitySettings, ConfigError, EffectKind, FieldSettings, FontSize, Intensity,
    SimulationConfig, MAX_PARTICLES,
};
pub use factory::{BurstFragments, ParticleFactory};
pub use headless::HeadlessHost;
pub use lifecycle::{FieldContext, LifecycleState, MountOutcome, ParticleField};
pub use particle::{Particle, ParticleGroup, ParticleId, ParticleKind};
pub use population::{FrameStats, Population, PopulationDelta};
pub use settings::{SettingsStore, SettingsWatch};
