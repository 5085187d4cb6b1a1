//! Collision resolution.
//!
//! Both tests are "near enough" checks on centre distance per axis with a fixed threshold,
//! not overlap of the drawn rectangles.
//!
//! Single ordered pass over the adversaries:
//! 1. the first bullet within `bullet_hit_radius` kills the adversary; both are removed and
//!    the adversary gets no player check.
//! 2. otherwise, an adversary within `player_hit_radius` of the player costs a life (unless
//!    invincible) and is removed. Invincibility is raised immediately, so a pile-up of
//!    adversaries costs at most one life per tick.

use bevy::math::Vec2;

use crate::common::tunables::Tunables;

use super::entities::EntityStore;
use super::lifecycle::Lifecycle;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionReport {
    pub kills: u32,
    pub lives_lost: u32,
}

#[inline]
pub fn near(a: Vec2, b: Vec2, threshold: f32) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}

pub fn resolve(
    store: &mut EntityStore,
    lifecycle: &mut Lifecycle,
    score: &mut u32,
    now: u64,
    tunables: &Tunables,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let player = store.player.pos;
    let bullets = &mut store.bullets;

    store.adversaries.retain(|adversary| {
        let hit_by = bullets
            .iter()
            .position(|b| near(b.pos, adversary.pos, tunables.bullet_hit_radius));
        if let Some(i) = hit_by {
            bullets.remove(i);
            report.kills += 1;
            return false;
        }

        if near(player, adversary.pos, tunables.player_hit_radius) && lifecycle.register_hit(now) {
            report.lives_lost += 1;
            return false;
        }

        true
    });

    *score = score.saturating_add(report.kills.saturating_mul(tunables.kill_reward));
    report
}
