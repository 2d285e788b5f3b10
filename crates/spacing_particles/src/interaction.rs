//! Click and touch interaction
//!
//! A press bursts every particle whose click radius contains the press point.
//! Burst parents are removed and their fragments appended in one delta.

use crate::config::{CLICK_RADIUS_BASE, CLICK_RADIUS_MULTIPLIER};
use crate::factory::ParticleFactory;
use crate::particle::Particle;
use crate::population::PopulationDelta;
use rand::Rng;
use spacing_core::Point;

/// Hit radius around a particle. Larger than the particle itself so small
/// motes are easy to hit.
pub fn click_radius(particle: &Particle) -> f32 {
    particle.size * CLICK_RADIUS_MULTIPLIER + CLICK_RADIUS_BASE
}

/// Whether a press at `point` hits `particle`
pub fn hits(particle: &Particle, point: Point) -> bool {
    particle.position.distance(point) < click_radius(particle)
}

/// Burst everything hit by a press at `point` (surface coordinates)
pub fn burst_at<R: Rng>(
    particles: &[Particle],
    point: Point,
    factory: &mut ParticleFactory<R>,
) -> PopulationDelta {
    let mut delta = PopulationDelta::default();

    for particle in particles.iter().filter(|p| hits(p, point)) {
        delta.remove.insert(particle.id);
        delta.add.extend(factory.create_burst_particles(particle));
    }

    if !delta.is_empty() {
        tracing::debug!(
            "burst at ({:.1}, {:.1}): {} hit, {} fragments",
            point.x,
            point.y,
            delta.remove.len(),
            delta.add.len()
        );
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleKind;
    use crate::population::Population;

    #[test]
    fn test_click_radius() {
        let mut factory = ParticleFactory::seeded(1);
        let mut p = factory.create_particle(100.0, 100.0);
        p.size = 3.0;

        assert_eq!(click_radius(&p), 26.0);
    }

    #[test]
    fn test_hit_is_strict() {
        let mut factory = ParticleFactory::seeded(1);
        let mut p = factory.create_particle(100.0, 100.0);
        p.position = Point::new(0.0, 0.0);
        p.size = 5.0;

        assert!(hits(&p, Point::new(29.9, 0.0)));
        assert!(!hits(&p, Point::new(30.0, 0.0)));
    }

    #[test]
    fn test_burst_replaces_hit_particle() {
        let mut factory = ParticleFactory::seeded(2);
        let mut population = Population::new();
        let mut target = factory.create_particle(400.0, 400.0);
        target.position = Point::new(100.0, 100.0);
        target.size = 4.0;
        let target_id = target.id;
        let mut far = factory.create_particle(400.0, 400.0);
        far.position = Point::new(350.0, 350.0);
        population.push(target);
        population.push(far);

        let delta = burst_at(population.particles(), Point::new(105.0, 100.0), &mut factory);
        assert_eq!(delta.remove.len(), 1);
        assert_eq!(delta.add.len(), 8);
        population.apply(delta);

        assert_eq!(population.len(), 9);
        assert!(population.particles().iter().all(|p| p.id != target_id));
        assert_eq!(
            population
                .particles()
                .iter()
                .filter(|p| p.kind == ParticleKind::Burst)
                .count(),
            8
        );
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut factory = ParticleFactory::seeded(3);
        let mut p = factory.create_particle(400.0, 400.0);
        p.position = Point::new(10.0, 10.0);

        let delta = burst_at(&[p], Point::new(300.0, 300.0), &mut factory);

        assert!(delta.is_empty());
    }
}
