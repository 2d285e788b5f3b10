//! Particle Factory
//!
//! Creates seeded particles, merge results and burst fragments. Every
//! attribute is drawn from a bounded range, so the invariants `size > 0` and
//! `0 <= opacity <= 1` hold for anything the factory returns.

use crate::config::{
    BURST_COUNT_FACTOR, BURST_MIN_SIZE, BURST_SIZE_FACTOR, BURST_SPEED_FACTOR,
    MAX_MERGED_OPACITY, MAX_MERGED_SIZE, MERGE_SIZE_MULTIPLIER, PARTICLE_OPACITY_MAX,
    PARTICLE_OPACITY_MIN, PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN, PARTICLE_SPEED_BASE,
};
use crate::particle::{Particle, ParticleGroup, ParticleId, ParticleKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use spacing_core::{Point, Vec2};
use std::f32::consts::TAU;
use std::ops::Range;

/// Fragments produced by one burst. The largest possible burst
/// (`MAX_MERGED_SIZE * BURST_COUNT_FACTOR`) fits inline.
pub type BurstFragments = SmallVec<[Particle; 20]>;

/// Creates particles from an owned random source
#[derive(Debug)]
pub struct ParticleFactory<R: Rng = StdRng> {
    rng: R,
    next_id: u64,
}

impl ParticleFactory<StdRng> {
    /// Factory seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Factory with a reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 0 }
    }

    fn next_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Uniform sample from `range`; an empty range yields its start
    fn sample(&mut self, range: Range<f32>) -> f32 {
        range.start + self.rng.gen::<f32>() * (range.end - range.start)
    }

    /// A fresh particle somewhere in `[0, width) x [0, height)`
    pub fn create_particle(&mut self, width: f32, height: f32) -> Particle {
        let group = ParticleGroup::ALL[self.rng.gen_range(0..ParticleGroup::ALL.len())];
        let half_speed = PARTICLE_SPEED_BASE / 2.0;

        Particle {
            id: self.next_id(),
            kind: ParticleKind::Seeded,
            position: Point::new(self.sample(0.0..width), self.sample(0.0..height)),
            velocity: Vec2::new(
                self.sample(-half_speed..half_speed),
                self.sample(-half_speed..half_speed),
            ),
            size: self.sample(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            opacity: self.sample(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX),
            hue: self.sample(group.hue_range()),
            group,
        }
    }

    /// Consolidate two particles into one. Colour and group come from `a`.
    pub fn create_merged_particle(&mut self, a: &Particle, b: &Particle) -> Particle {
        Particle {
            id: self.next_id(),
            kind: ParticleKind::Merged,
            position: a.position.midpoint(b.position),
            velocity: a.velocity.average(b.velocity),
            size: ((a.size + b.size) * MERGE_SIZE_MULTIPLIER).min(MAX_MERGED_SIZE),
            opacity: ((a.opacity + b.opacity) / 2.0).min(MAX_MERGED_OPACITY),
            hue: a.hue,
            group: a.group,
        }
    }

    /// Fragment a particle into `floor(size * 2)` pieces flying outward at
    /// evenly spaced angles. Particles smaller than 0.5 yield nothing.
    pub fn create_burst_particles(&mut self, parent: &Particle) -> BurstFragments {
        let count = (parent.size * BURST_COUNT_FACTOR).floor().max(0.0) as usize;
        let speed = parent.size * BURST_SPEED_FACTOR;
        let size = (parent.size * BURST_SIZE_FACTOR).max(BURST_MIN_SIZE);

        (0..count)
            .map(|i| {
                let angle = TAU * i as f32 / count as f32;
                Particle {
                    id: self.next_id(),
                    kind: ParticleKind::Burst,
                    position: parent.position,
                    velocity: Vec2::from_angle(angle, speed),
                    size,
                    opacity: parent.opacity,
                    hue: parent.hue,
                    group: parent.group,
                }
            })
            .collect()
    }
}
