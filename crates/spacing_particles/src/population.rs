//! Population Manager
//!
//! Owns the live particle collection and applies each frame's changes:
//! growth toward the cap, movement, merges, and externally produced deltas
//! (bursts). Removals and additions are applied together so a reader never
//! sees a half-applied frame.

use crate::config::MAX_PARTICLES;
use crate::factory::ParticleFactory;
use crate::particle::{Particle, ParticleId};
use crate::spatial;
use rand::Rng;
use rustc_hash::FxHashSet;
use spacing_core::Size;

/// A batch of removals and additions, applied atomically
#[derive(Clone, Debug, Default)]
pub struct PopulationDelta {
    pub remove: FxHashSet<ParticleId>,
    pub add: Vec<Particle>,
}

impl PopulationDelta {
    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_empty()
    }
}

/// What one simulation step did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Whether a new particle was grown this frame
    pub grown: bool,
    /// Number of pairs merged
    pub merges: usize,
    /// Oldest particles dropped to respect the cap
    pub dropped: usize,
    /// Population after the step
    pub population: usize,
}

/// The live particle collection
#[derive(Clone, Debug, Default)]
pub struct Population {
    particles: Vec<Particle>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view of the particles. The count can't change through it.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Replace the collection with `count` fresh particles
    pub fn seed<R: Rng>(&mut self, count: usize, bounds: Size, factory: &mut ParticleFactory<R>) {
        self.particles = (0..count)
            .map(|_| factory.create_particle(bounds.width, bounds.height))
            .collect();
    }

    /// Add a particle directly (hosts restoring a scene, tests)
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Remove every marked particle, then append the additions
    pub fn apply(&mut self, delta: PopulationDelta) {
        if !delta.remove.is_empty() {
            self.particles.retain(|p| !delta.remove.contains(&p.id));
        }
        self.particles.extend(delta.add);
    }

    /// Drop the oldest particles until the cap holds. Returns how many went.
    pub fn enforce_cap(&mut self) -> usize {
        let excess = self.particles.len().saturating_sub(MAX_PARTICLES);
        if excess > 0 {
            self.particles.drain(..excess);
        }
        excess
    }

    /// Pull every particle back inside new bounds. Nothing is created or
    /// destroyed.
    pub fn clamp_to(&mut self, bounds: Size) {
        for particle in &mut self.particles {
            particle.clamp_to(bounds);
        }
    }

    /// One simulation step: grow by one while below the cap, move everything,
    /// merge overlapping same-group pairs, then enforce the cap.
    pub fn step<R: Rng>(&mut self, bounds: Size, factory: &mut ParticleFactory<R>) -> FrameStats {
        let grown = self.particles.len() < MAX_PARTICLES;
        if grown {
            self.particles
                .push(factory.create_particle(bounds.width, bounds.height));
        }

        for particle in &mut self.particles {
            particle.advance(bounds);
        }

        let plan = spatial::find_merges(&self.particles);
        let merges = plan.pairs.len();
        if !plan.is_empty() {
            let add = plan
                .pairs
                .iter()
                .map(|pair| {
                    factory.create_merged_particle(
                        &self.particles[pair.first],
                        &self.particles[pair.second],
                    )
                })
                .collect();
            self.apply(PopulationDelta {
                remove: plan.consumed,
                add,
            });
        }

        let dropped = self.enforce_cap();

        FrameStats {
            grown,
            merges,
            dropped,
            population: self.particles.len(),
        }
    }
}
