//! Collision detection and resolution for axis-aligned boxes
//!
//! Everything that moves is an [`Aabb`], so a single overlap test drives
//! both player pickups/damage and blast hits.

use super::aabb::Aabb;
use super::group::EntityGroup;
use super::state::{Blast, Player};

/// Anything with a collision box
pub trait Bounded {
    fn bounds(&self) -> &Aabb;
    fn bounds_mut(&mut self) -> &mut Aabb;
}

/// A blast target that may survive a hit
pub trait Breakable: Bounded {
    /// True when the next hit destroys this target
    fn is_cracked(&self) -> bool;
    /// Absorb a non-lethal hit
    fn crack(&mut self);
}

/// Tally of what a blast pass did to one target group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlastReport {
    /// Targets cracked (blast survived)
    pub cracked: u32,
    /// Targets destroyed (blast consumed)
    pub destroyed: u32,
}

/// Strict box overlap test. Boxes that only share an edge do not overlap.
#[inline]
pub fn boxes_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right()
        && a.right() > b.left()
        && a.top() < b.bottom()
        && a.bottom() > b.top()
}

/// Check the player against a group.
///
/// The first overlapping entity in spawn order is removed and `true` is
/// returned. At most one entity is consumed per call, even if several
/// overlap the player.
pub fn detect_player_collision<T: Bounded>(player: &Player, group: &mut EntityGroup<T>) -> bool {
    group
        .take_first(|entity| boxes_overlap(&player.bounds, entity.bounds()))
        .is_some()
}

/// Resolve every blast against one target group.
///
/// Each blast is checked against the first target it overlaps; that target
/// absorbs the hit whatever happens to it. If the hit is lethal
/// (`destroys_on_first_hit`, or the target was already cracked) both the
/// target and the blast are removed. Otherwise the target cracks and the
/// blast keeps flying.
pub fn resolve_blast_vs_group<T: Breakable>(
    blasts: &mut EntityGroup<Blast>,
    targets: &mut EntityGroup<T>,
    destroys_on_first_hit: bool,
) -> BlastReport {
    let mut report = BlastReport::default();

    blasts.update_or_cull(|blast| {
        let Some(idx) = targets.position(|target| boxes_overlap(&blast.bounds, target.bounds()))
        else {
            return true;
        };

        let Some(target) = targets.get_mut(idx) else {
            return true;
        };

        if destroys_on_first_hit || target.is_cracked() {
            targets.remove(idx);
            report.destroyed += 1;
            false
        } else {
            target.crack();
            report.cracked += 1;
            true
        }
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Asteroid, SmallAsteroid};
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Aabb::new(x, y, 20.0, 10.0), 100)
    }

    #[test]
    fn test_box_overlaps_itself() {
        let a = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(boxes_overlap(&a, &a));
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(50.0, 50.0, 10.0, 10.0);
        assert!(!boxes_overlap(&a, &b));
        assert!(!boxes_overlap(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!boxes_overlap(&a, &right));
        assert!(!boxes_overlap(&a, &below));
    }

    #[test]
    fn test_contained_box_overlaps() {
        // A narrow box inside a wide one: catches comparisons against the wrong box's edge
        let wide = Aabb::new(0.0, 0.0, 100.0, 10.0);
        let narrow = Aabb::new(60.0, 2.0, 5.0, 5.0);
        assert!(boxes_overlap(&wide, &narrow));
        assert!(boxes_overlap(&narrow, &wide));
    }

    #[test]
    fn test_player_collision_consumes_only_first() {
        let player = player_at(40.0, 80.0);
        let mut group: EntityGroup<Asteroid> = [
            Asteroid::new(Aabb::new(0.0, 0.0, 10.0, 10.0)),
            Asteroid::new(Aabb::new(45.0, 75.0, 10.0, 10.0)),
            Asteroid::new(Aabb::new(50.0, 82.0, 10.0, 10.0)),
        ]
        .into_iter()
        .collect();

        assert!(detect_player_collision(&player, &mut group));
        assert_eq!(group.len(), 2);
        assert_eq!(group.get(1).map(|a| a.bounds.pos.x), Some(50.0));

        assert!(detect_player_collision(&player, &mut group));
        assert!(!detect_player_collision(&player, &mut group));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_blast_cracks_then_destroys() {
        let rock = Aabb::new(40.0, 40.0, 20.0, 20.0);
        let mut asteroids: EntityGroup<Asteroid> = [Asteroid::new(rock)].into_iter().collect();
        let mut blasts: EntityGroup<Blast> = [Blast::new(Aabb::new(45.0, 50.0, 4.0, 8.0))]
            .into_iter()
            .collect();

        let report = resolve_blast_vs_group(&mut blasts, &mut asteroids, false);
        assert_eq!(report, BlastReport { cracked: 1, destroyed: 0 });
        assert_eq!(blasts.len(), 1);
        assert_eq!(asteroids.len(), 1);
        assert!(asteroids.get(0).is_some_and(|a| a.cracked));

        let report = resolve_blast_vs_group(&mut blasts, &mut asteroids, false);
        assert_eq!(report, BlastReport { cracked: 0, destroyed: 1 });
        assert!(blasts.is_empty());
        assert!(asteroids.is_empty());
    }

    #[test]
    fn test_small_blast_mode_destroys_immediately() {
        let mut asteroids: EntityGroup<Asteroid> = [Asteroid::new(Aabb::new(0.0, 0.0, 20.0, 20.0))]
            .into_iter()
            .collect();
        let mut blasts: EntityGroup<Blast> = [Blast::new(Aabb::new(5.0, 5.0, 4.0, 8.0))]
            .into_iter()
            .collect();

        let report = resolve_blast_vs_group(&mut blasts, &mut asteroids, true);
        assert_eq!(report.destroyed, 1);
        assert!(asteroids.is_empty());
        assert!(blasts.is_empty());
    }

    #[test]
    fn test_first_overlap_absorbs_hit() {
        // Cracked rock sits second; the uncracked first one takes the hit
        let mut asteroids: EntityGroup<Asteroid> = [
            Asteroid::new(Aabb::new(0.0, 0.0, 20.0, 20.0)),
            Asteroid {
                bounds: Aabb::new(5.0, 5.0, 20.0, 20.0),
                cracked: true,
            },
        ]
        .into_iter()
        .collect();
        let mut blasts: EntityGroup<Blast> = [Blast::new(Aabb::new(10.0, 10.0, 4.0, 8.0))]
            .into_iter()
            .collect();

        let report = resolve_blast_vs_group(&mut blasts, &mut asteroids, false);
        assert_eq!(report, BlastReport { cracked: 1, destroyed: 0 });
        assert_eq!(asteroids.len(), 2);
        assert!(asteroids.iter().all(|a| a.cracked));
        assert_eq!(blasts.len(), 1);
    }

    #[test]
    fn test_blasts_processed_in_order() {
        // Two blasts on one rock in the same pass: first cracks, second destroys
        let mut asteroids: EntityGroup<Asteroid> = [Asteroid::new(Aabb::new(0.0, 0.0, 20.0, 20.0))]
            .into_iter()
            .collect();
        let mut blasts: EntityGroup<Blast> = [
            Blast::new(Aabb::new(2.0, 2.0, 4.0, 8.0)),
            Blast::new(Aabb::new(12.0, 2.0, 4.0, 8.0)),
        ]
        .into_iter()
        .collect();

        let report = resolve_blast_vs_group(&mut blasts, &mut asteroids, false);
        assert_eq!(report, BlastReport { cracked: 1, destroyed: 1 });
        assert!(asteroids.is_empty());
        assert_eq!(blasts.len(), 1);
        assert_eq!(blasts.get(0).map(|b| b.bounds.pos.x), Some(2.0));
    }

    #[test]
    fn test_small_asteroids_always_break() {
        let mut rocks: EntityGroup<SmallAsteroid> =
            [SmallAsteroid::new(Aabb::new(0.0, 0.0, 10.0, 10.0))]
                .into_iter()
                .collect();
        let mut blasts: EntityGroup<Blast> = [Blast::new(Aabb::new(2.0, 2.0, 4.0, 8.0))]
            .into_iter()
            .collect();

        let report = resolve_blast_vs_group(&mut blasts, &mut rocks, false);
        assert_eq!(report.destroyed, 1);
        assert!(rocks.is_empty());
    }

    #[test]
    fn test_missed_blast_survives() {
        let mut asteroids: EntityGroup<Asteroid> = [Asteroid::new(Aabb::new(0.0, 0.0, 20.0, 20.0))]
            .into_iter()
            .collect();
        let mut blasts: EntityGroup<Blast> = [Blast::new(Aabb::new(80.0, 80.0, 4.0, 8.0))]
            .into_iter()
            .collect();

        let report = resolve_blast_vs_group(&mut blasts, &mut asteroids, true);
        assert_eq!(report, BlastReport::default());
        assert_eq!(blasts.len(), 1);
        assert_eq!(asteroids.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            aw in 0.5f32..50.0, ah in 0.5f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            bw in 0.5f32..50.0, bh in 0.5f32..50.0
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            prop_assert_eq!(boxes_overlap(&a, &b), boxes_overlap(&b, &a));
            prop_assert!(boxes_overlap(&a, &a));
        }

        #[test]
        fn prop_separated_boxes_never_overlap(
            x in -100.0f32..100.0, y in -100.0f32..100.0,
            w in 0.5f32..50.0, h in 0.5f32..50.0,
            gap in 0.0f32..50.0
        ) {
            let a = Aabb::new(x, y, w, h);
            let beside = Aabb::new(a.right() + gap, y, w, h);
            let under = Aabb::new(x, a.bottom() + gap, w, h);
            prop_assert!(!boxes_overlap(&a, &beside));
            prop_assert!(!boxes_overlap(&a, &under));
        }
    }
}
