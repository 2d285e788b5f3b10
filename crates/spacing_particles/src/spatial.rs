//! Spatial Interaction Engine
//!
//! Pairwise proximity over the live population: which pairs merge this frame,
//! and which pairs are close enough to be joined by a connection line.
//!
//! Both scans are O(n^2). The population is capped at `MAX_PARTICLES`, which
//! keeps a full scan well inside a frame budget.

use crate::config::{CONNECTION_DISTANCE, CONNECTION_OPACITY_BASE, MAX_MERGE_SIZE};
use crate::particle::{Particle, ParticleId};
use rustc_hash::FxHashSet;

/// Two particles are merged when they overlap, share a group, and are both
/// still below the merge-size ceiling. Symmetric in `a` and `b`.
pub fn should_merge(a: &Particle, b: &Particle, distance: f32) -> bool {
    distance < a.size + b.size
        && a.group == b.group
        && a.size < MAX_MERGE_SIZE
        && b.size < MAX_MERGE_SIZE
}

/// A pair chosen for merging, as indices into the scanned slice.
/// `first` precedes `second` in collection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergePair {
    pub first: usize,
    pub second: usize,
}

/// Result of the per-frame merge scan
#[derive(Clone, Debug, Default)]
pub struct MergePlan {
    pub pairs: Vec<MergePair>,
    /// Every particle consumed by a pair
    pub consumed: FxHashSet<ParticleId>,
}

impl MergePlan {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Find this frame's merges.
///
/// Particles are visited in collection order and each takes part in at most
/// one merge: the first eligible partner found wins, and a consumed particle
/// is skipped for the rest of the scan.
pub fn find_merges(particles: &[Particle]) -> MergePlan {
    let mut plan = MergePlan::default();

    for (i, a) in particles.iter().enumerate() {
        if plan.consumed.contains(&a.id) {
            continue;
        }
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            if plan.consumed.contains(&b.id) {
                continue;
            }
            if should_merge(a, b, a.distance_to(b)) {
                plan.consumed.insert(a.id);
                plan.consumed.insert(b.id);
                plan.pairs.push(MergePair {
                    first: i,
                    second: j,
                });
                break;
            }
        }
    }

    plan
}

/// Line opacity for a pair `distance` apart: fades linearly from
/// `CONNECTION_OPACITY_BASE` at zero to nothing at `CONNECTION_DISTANCE`.
/// `None` when the pair is too far apart to connect.
pub fn connection_alpha(distance: f32) -> Option<f32> {
    if distance < CONNECTION_DISTANCE {
        Some(CONNECTION_OPACITY_BASE * (1.0 - distance / CONNECTION_DISTANCE))
    } else {
        None
    }
}

/// A connection line between two nearby particles
#[derive(Clone, Copy, Debug)]
pub struct Connection<'a> {
    pub from: &'a Particle,
    pub to: &'a Particle,
    pub alpha: f32,
}

/// Every unordered pair within `CONNECTION_DISTANCE`, each yielded once
pub fn connections(particles: &[Particle]) -> impl Iterator<Item = Connection<'_>> + '_ {
    particles.iter().enumerate().flat_map(move |(i, from)| {
        particles[i + 1..].iter().filter_map(move |to| {
            connection_alpha(from.distance_to(to)).map(|alpha| Connection { from, to, alpha })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{ParticleGroup, ParticleKind};
    use spacing_core::{Point, Vec2};

    fn mote(id: u64, x: f32, y: f32, size: f32, group: ParticleGroup) -> Particle {
        Particle {
            id: ParticleId(id),
            kind: ParticleKind::Seeded,
            position: Point::new(x, y),
            velocity: Vec2::ZERO,
            size,
            opacity: 0.2,
            hue: group.hue_range().start,
            group,
        }
    }

    #[test]
    fn test_should_merge_overlapping_same_group() {
        let a = mote(0, 0.0, 0.0, 2.0, ParticleGroup::Blue);
        let b = mote(1, 3.0, 0.0, 2.0, ParticleGroup::Blue);

        assert!(should_merge(&a, &b, 3.0));
        assert!(!should_merge(&a, &b, 4.0));
    }

    #[test]
    fn test_should_merge_rejects_other_group() {
        let a = mote(0, 0.0, 0.0, 2.0, ParticleGroup::Blue);
        let b = mote(1, 1.0, 0.0, 2.0, ParticleGroup::Purple);

        assert!(!should_merge(&a, &b, 1.0));
    }

    #[test]
    fn test_should_merge_rejects_large_particles() {
        let a = mote(0, 0.0, 0.0, 8.0, ParticleGroup::Cyan);
        let b = mote(1, 1.0, 0.0, 2.0, ParticleGroup::Cyan);

        assert!(!should_merge(&a, &b, 1.0));
        assert!(!should_merge(&b, &a, 1.0));
    }

    #[test]
    fn test_should_merge_is_symmetric() {
        let sizes = [0.5, 1.0, 2.5, 7.9, 8.0, 9.5];
        let distances = [0.0, 1.0, 3.0, 10.0, 20.0];

        for &sa in &sizes {
            for &sb in &sizes {
                for &d in &distances {
                    for ga in ParticleGroup::ALL {
                        for gb in ParticleGroup::ALL {
                            let a = mote(0, 0.0, 0.0, sa, ga);
                            let b = mote(1, d, 0.0, sb, gb);
                            assert_eq!(should_merge(&a, &b, d), should_merge(&b, &a, d));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_find_merges_empty_and_single() {
        assert!(find_merges(&[]).is_empty());
        assert!(find_merges(&[mote(0, 0.0, 0.0, 2.0, ParticleGroup::Blue)]).is_empty());
    }

    #[test]
    fn test_each_particle_merges_once() {
        // Three overlapping same-group particles: only the first pair merges
        let particles = vec![
            mote(0, 0.0, 0.0, 2.0, ParticleGroup::Indigo),
            mote(1, 1.0, 0.0, 2.0, ParticleGroup::Indigo),
            mote(2, 2.0, 0.0, 2.0, ParticleGroup::Indigo),
        ];

        let plan = find_merges(&particles);

        assert_eq!(plan.pairs, vec![MergePair { first: 0, second: 1 }]);
        assert_eq!(plan.consumed.len(), 2);
        assert!(!plan.consumed.contains(&ParticleId(2)));
    }

    #[test]
    fn test_find_merges_multiple_pairs() {
        let particles = vec![
            mote(0, 0.0, 0.0, 2.0, ParticleGroup::Blue),
            mote(1, 500.0, 500.0, 2.0, ParticleGroup::Cyan),
            mote(2, 1.0, 0.0, 2.0, ParticleGroup::Blue),
            mote(3, 501.0, 500.0, 2.0, ParticleGroup::Cyan),
        ];

        let plan = find_merges(&particles);

        assert_eq!(
            plan.pairs,
            vec![
                MergePair { first: 0, second: 2 },
                MergePair { first: 1, second: 3 },
            ]
        );
    }

    #[test]
    fn test_connection_alpha() {
        assert_eq!(connection_alpha(0.0), Some(CONNECTION_OPACITY_BASE));
        assert!((connection_alpha(50.0).unwrap() - 0.05).abs() < 1e-6);
        assert_eq!(connection_alpha(100.0), None);
        assert_eq!(connection_alpha(150.0), None);
    }

    #[test]
    fn test_connections_once_per_pair() {
        let particles = vec![
            mote(0, 0.0, 0.0, 1.0, ParticleGroup::Blue),
            mote(1, 30.0, 0.0, 1.0, ParticleGroup::Purple),
            mote(2, 60.0, 0.0, 1.0, ParticleGroup::Cyan),
            mote(3, 1000.0, 0.0, 1.0, ParticleGroup::Cyan),
        ];

        let pairs: Vec<_> = connections(&particles)
            .map(|c| (c.from.id, c.to.id))
            .collect();

        assert_eq!(
            pairs,
            vec![
                (ParticleId(0), ParticleId(1)),
                (ParticleId(0), ParticleId(2)),
                (ParticleId(1), ParticleId(2)),
            ]
        );
    }
}
