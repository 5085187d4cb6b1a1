//! Per-tick motion.
//!
//! Purely vertical: bullets rise, adversaries fall. Anything past its exit edge is
//! removed in the same step, independent of collisions.

use super::entities::EntityStore;

pub fn step(store: &mut EntityStore, play_height: f32) {
    for bullet in &mut store.bullets {
        bullet.pos.y -= bullet.speed;
    }
    for adversary in &mut store.adversaries {
        adversary.pos.y += adversary.speed;
    }
    store.compact(play_height);
}
