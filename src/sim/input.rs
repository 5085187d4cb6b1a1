//! Input boundary: hand samples in, player target and fire intent out.
//!
//! The tracker delivers a normalized palm position plus a presence flag. A missing,
//! stale or non-finite sample is not an error; it degrades to "no hand" for that tick.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::entities::Player;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSample {
    pub present: bool,
    /// Normalized [0..1] horizontal position.
    pub x: f32,
    /// Normalized [0..1] vertical position, 0 at the top.
    pub y: f32,
}

impl HandSample {
    #[inline]
    pub const fn absent() -> Self {
        Self { present: false, x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn at(x: f32, y: f32) -> Self {
        Self { present: true, x, y }
    }

    /// Normalized position, or `None` when there is no usable hand.
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        (self.present && self.x.is_finite() && self.y.is_finite()).then(|| Vec2::new(self.x, self.y))
    }
}

impl Default for HandSample {
    fn default() -> Self {
        Self::absent()
    }
}

/// Mailbox between a hand producer and the fixed tick.
///
/// Producers publish whenever they have something; the tick only ever reads the newest
/// sample and never waits for a fresh one.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct HandFeed {
    latest: Option<(HandSample, u64)>,
}

impl HandFeed {
    /// Store `sample`, stamped with the simulation tick it was taken on.
    pub fn publish(&mut self, sample: HandSample, stamp: u64) {
        self.latest = Some((sample, stamp));
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }

    /// Newest sample if it is at most `max_age` ticks old, otherwise "no hand".
    pub fn latest(&self, now: u64, max_age: u64) -> HandSample {
        match self.latest {
            Some((sample, stamp)) if now.saturating_sub(stamp) <= max_age => sample,
            _ => HandSample::absent(),
        }
    }
}

/// Converts samples into player movement and fire intent; owns the shot cooldown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputMapper {
    last_shot: Option<u64>,
}

impl InputMapper {
    /// Teleport the player to the tracked position and report whether to fire.
    ///
    /// No hand: the player stays put and nothing fires.
    pub fn apply(&mut self, sample: HandSample, now: u64, player: &mut Player, tunables: &Tunables) -> bool {
        let Some(norm) = sample.position() else {
            return false;
        };

        player.pos = target_position(norm, tunables);

        let cooldown = tunables.shoot_cooldown_ticks();
        let ready = self.last_shot.is_none_or(|last| now.saturating_sub(last) >= cooldown);
        if ready {
            self.last_shot = Some(now);
        }
        ready
    }
}

/// Scale a normalized position onto the playfield, keeping the whole ship inside it.
pub fn target_position(norm: Vec2, tunables: &Tunables) -> Vec2 {
    let half = tunables.half_size();
    Vec2::new(
        (norm.x * tunables.play_width).clamp(half, tunables.play_width - half),
        (norm.y * tunables.play_height).clamp(half, tunables.play_height - half),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player { pos: Vec2::new(400.0, 500.0) }
    }

    #[test]
    fn absent_hand_is_a_no_op() {
        let t = Tunables::default();
        let mut mapper = InputMapper::default();
        let mut p = player();

        assert!(!mapper.apply(HandSample::absent(), 0, &mut p, &t));
        assert_eq!(p, player());
    }

    #[test]
    fn present_hand_teleports_and_clamps() {
        let t = Tunables::default();
        let mut mapper = InputMapper::default();
        let mut p = player();

        mapper.apply(HandSample::at(0.5, 0.25), 0, &mut p, &t);
        assert_eq!(p.pos, Vec2::new(400.0, 150.0));

        mapper.apply(HandSample::at(-3.0, 7.0), 60, &mut p, &t);
        assert_eq!(p.pos, Vec2::new(15.0, 585.0));

        mapper.apply(HandSample::at(1.0, 0.0), 120, &mut p, &t);
        assert_eq!(p.pos, Vec2::new(785.0, 15.0));
    }

    #[test]
    fn non_finite_sample_counts_as_absent() {
        let t = Tunables::default();
        let mut mapper = InputMapper::default();
        let mut p = player();

        assert!(!mapper.apply(HandSample::at(f32::NAN, 0.5), 0, &mut p, &t));
        assert!(!mapper.apply(HandSample::at(0.5, f32::INFINITY), 0, &mut p, &t));
        assert_eq!(p, player());
    }

    #[test]
    fn fire_respects_cooldown() {
        let t = Tunables::default();
        let mut mapper = InputMapper::default();
        let mut p = player();
        let hand = HandSample::at(0.5, 0.5);

        assert!(mapper.apply(hand, 60, &mut p, &t));
        assert!(!mapper.apply(hand, 68, &mut p, &t));
        assert!(mapper.apply(hand, 69, &mut p, &t));
        assert!(!mapper.apply(hand, 70, &mut p, &t));
    }

    #[test]
    fn held_hand_fires_every_nine_ticks() {
        let t = Tunables::default();
        let mut mapper = InputMapper::default();
        let mut p = player();
        let hand = HandSample::at(0.5, 0.5);

        let fired: Vec<u64> = (13..13 + 9 * 12).filter(|&tick| mapper.apply(hand, tick, &mut p, &t)).collect();

        assert_eq!(fired.len(), 12);
        assert!(fired.windows(2).all(|w| w[1] - w[0] == 9), "shots: {fired:?}");
    }

    #[test]
    fn feed_returns_absent_when_empty_or_stale() {
        let mut feed = HandFeed::default();
        assert_eq!(feed.latest(0, 15), HandSample::absent());

        feed.publish(HandSample::at(0.2, 0.3), 60);
        assert_eq!(feed.latest(66, 15), HandSample::at(0.2, 0.3));
        assert_eq!(feed.latest(75, 15), HandSample::at(0.2, 0.3));
        assert_eq!(feed.latest(76, 15), HandSample::absent());

        feed.clear();
        assert_eq!(feed.latest(60, 15), HandSample::absent());
    }
}
