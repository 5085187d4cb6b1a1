//! Lives, invincibility and game over.
//!
//! Invincibility is a flag layered on top of `Playing`, not a phase of its own:
//!
//! ```text
//!   Playing ──hit──► Playing + invincible ──2 s──► Playing
//!      │                     │
//!      └── lives == 0 ───────┴──► GameOver ──restart──► (fresh session)
//! ```
//!
//! Timestamps are tick indices from the simulation clock.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifecycle {
    lives: u32,
    phase: Phase,
    invincible_since: Option<u64>,
    invincibility_ticks: u64,
}

impl Lifecycle {
    pub fn new(starting_lives: u32, invincibility_ticks: u64) -> Self {
        Self {
            lives: starting_lives,
            phase: if starting_lives == 0 { Phase::GameOver } else { Phase::Playing },
            invincible_since: None,
            invincibility_ticks,
        }
    }

    #[inline]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincible_since.is_some()
    }

    /// Tick the current invincibility window started on.
    #[inline]
    pub fn invincible_since(&self) -> Option<u64> {
        self.invincible_since
    }

    /// Clear invincibility once its window has fully elapsed.
    pub fn refresh(&mut self, now: u64) {
        let expired = self
            .invincible_since
            .is_some_and(|since| now.saturating_sub(since) >= self.invincibility_ticks);
        if expired {
            self.invincible_since = None;
        }
    }

    /// Apply a player hit at `now`. Returns `true` if it cost a life.
    ///
    /// Ignored while invincible or after game over. The flag is set before returning, so a
    /// second hit in the same pass is already absorbed.
    pub fn register_hit(&mut self, now: u64) -> bool {
        if self.is_invincible() || self.is_game_over() {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        self.invincible_since = Some(now);
        debug!("Life lost at tick {now}, {} left", self.lives);

        if self.lives == 0 {
            self.phase = Phase::GameOver;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_costs_a_life_and_grants_invincibility() {
        let mut life = Lifecycle::new(3, 120);
        assert!(life.register_hit(0));
        assert_eq!(life.lives(), 2);
        assert!(life.is_invincible());
        assert_eq!(life.invincible_since(), Some(0));
    }

    #[test]
    fn hits_inside_the_window_are_absorbed() {
        let mut life = Lifecycle::new(3, 120);
        life.register_hit(600);

        for now in [600, 630, 660, 719] {
            life.refresh(now);
            assert!(!life.register_hit(now));
        }
        assert_eq!(life.lives(), 2);
    }

    #[test]
    fn window_closes_at_exactly_the_duration() {
        let mut life = Lifecycle::new(3, 120);
        life.register_hit(61);

        life.refresh(180);
        assert!(life.is_invincible());
        life.refresh(181);
        assert!(!life.is_invincible());

        assert!(life.register_hit(181));
        assert_eq!(life.lives(), 1);
    }

    #[test]
    fn last_life_ends_the_game() {
        let mut life = Lifecycle::new(1, 120);
        assert!(life.register_hit(0));
        assert_eq!(life.lives(), 0);
        assert_eq!(life.phase(), Phase::GameOver);

        life.refresh(6_000);
        assert!(!life.register_hit(6_000));
        assert_eq!(life.lives(), 0);
    }
}
