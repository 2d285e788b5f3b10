//! Individual particle data

use spacing_core::{Point, Size, Vec2};
use std::fmt;
use std::ops::Range;

/// Colour family of a particle. Only particles of the same group merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleGroup {
    Blue,
    Purple,
    Cyan,
    Indigo,
}

impl ParticleGroup {
    pub const ALL: [ParticleGroup; 4] = [
        ParticleGroup::Blue,
        ParticleGroup::Purple,
        ParticleGroup::Cyan,
        ParticleGroup::Indigo,
    ];

    /// Hue band (degrees) reserved for this group. Bands are disjoint and
    /// 30 degrees wide so each group reads as its own cluster.
    pub fn hue_range(self) -> Range<f32> {
        match self {
            ParticleGroup::Cyan => 180.0..210.0,
            ParticleGroup::Blue => 210.0..240.0,
            ParticleGroup::Indigo => 240.0..270.0,
            ParticleGroup::Purple => 270.0..300.0,
        }
    }
}

/// Opaque particle identity, used only for removal marking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub(crate) u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a particle came to exist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Initial seeding or natural growth
    Seeded,
    /// Result of two particles merging
    Merged,
    /// Fragment of a burst
    Burst,
}

/// A single dust mote
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub kind: ParticleKind,
    /// Position in surface space
    pub position: Point,
    /// Displacement per frame
    pub velocity: Vec2,
    /// Radius
    pub size: f32,
    pub opacity: f32,
    /// Hue in degrees, fixed at creation
    pub hue: f32,
    pub group: ParticleGroup,
}

impl Particle {
    /// Advance one frame, wrapping around the edges of `bounds`
    pub fn advance(&mut self, bounds: Size) {
        let moved = self.position.offset(self.velocity);
        self.position = Point::new(wrap(moved.x, bounds.width), wrap(moved.y, bounds.height));
    }

    /// Pull the particle back inside `[0, w] x [0, h]`
    pub fn clamp_to(&mut self, bounds: Size) {
        self.position = bounds.clamp_point(self.position);
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }
}

/// Wrap a coordinate into `[0, extent]`. A coordinate that leaves one edge
/// re-enters from the opposite edge carrying its overshoot.
fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    if (0.0..=extent).contains(&value) {
        value
    } else {
        value.rem_euclid(extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            id: ParticleId(1),
            kind: ParticleKind::Seeded,
            position: Point::new(x, y),
            velocity: Vec2::new(vx, vy),
            size: 2.0,
            opacity: 0.2,
            hue: 220.0,
            group: ParticleGroup::Blue,
        }
    }

    #[test]
    fn test_hue_bands_are_disjoint() {
        for (i, a) in ParticleGroup::ALL.iter().enumerate() {
            let ra = a.hue_range();
            assert_eq!(ra.end - ra.start, 30.0);
            for b in &ParticleGroup::ALL[i + 1..] {
                let rb = b.hue_range();
                assert!(ra.end <= rb.start || rb.end <= ra.start);
            }
        }
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut p = particle_at(10.0, 10.0, 0.25, -0.25);
        p.advance(Size::new(100.0, 100.0));

        assert_eq!(p.position, Point::new(10.25, 9.75));
    }

    #[test]
    fn test_advance_wraps_right_edge() {
        let mut p = particle_at(99.9, 50.0, 1.0, 0.0);
        p.advance(Size::new(100.0, 100.0));

        assert!((p.position.x - 0.9).abs() < 1e-3);
        assert_eq!(p.position.y, 50.0);
    }

    #[test]
    fn test_advance_wraps_left_and_top_edges() {
        let mut p = particle_at(0.5, 0.2, -1.0, -0.5);
        p.advance(Size::new(100.0, 80.0));

        assert!((p.position.x - 99.5).abs() < 1e-3);
        assert!((p.position.y - 79.7).abs() < 1e-3);
    }

    #[test]
    fn test_advance_in_empty_bounds() {
        let mut p = particle_at(5.0, 5.0, 1.0, 1.0);
        p.advance(Size::ZERO);

        assert_eq!(p.position, Point::ZERO);
    }

    #[test]
    fn test_clamp_to() {
        let mut p = particle_at(300.0, -4.0, 0.0, 0.0);
        p.clamp_to(Size::new(200.0, 100.0));

        assert_eq!(p.position, Point::new(200.0, 0.0));
    }
}
