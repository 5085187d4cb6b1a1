//! Entity records and their storage.
//!
//! Fixed-shape value types inside ordered `Vec`s. Removal always goes through
//! `retain` (compaction), never index juggling while iterating.

use bevy::math::Vec2;

use crate::common::tunables::Tunables;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Centre, playfield coordinates (y down).
    pub pos: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    /// Units per tick, upward.
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adversary {
    pub pos: Vec2,
    /// Units per tick, downward.
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub adversaries: Vec<Adversary>,
}

impl EntityStore {
    pub fn new(tunables: &Tunables) -> Self {
        Self {
            player: Player { pos: tunables.player_start() },
            bullets: Vec::new(),
            adversaries: Vec::new(),
        }
    }

    #[inline]
    pub fn push_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    #[inline]
    pub fn push_adversary(&mut self, adversary: Adversary) {
        self.adversaries.push(adversary);
    }

    /// Drop bullets above the top edge and adversaries below the bottom edge.
    pub fn compact(&mut self, play_height: f32) {
        self.bullets.retain(|b| b.pos.y >= 0.0);
        self.adversaries.retain(|a| a.pos.y <= play_height);
    }
}
