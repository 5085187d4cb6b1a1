//! Time-gated adversary spawner.
//!
//! Every `spawn_interval` (converted to whole ticks) the gate opens for exactly one Bernoulli trial. The gate
//! re-arms whether or not the trial succeeds, so the rate is capped at one adversary per
//! interval. This is not a Poisson process and must not be approximated as one.

use bevy::math::Vec2;
use rand::Rng;

use crate::common::tunables::Tunables;

use super::entities::{Adversary, EntityStore};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnScheduler {
    last_attempt: Option<u64>,
}

impl SpawnScheduler {
    /// Run the gate at tick `now`. Returns the adversary that was added, if any.
    pub fn update(
        &mut self,
        now: u64,
        rng: &mut impl Rng,
        store: &mut EntityStore,
        tunables: &Tunables,
    ) -> Option<Adversary> {
        let interval = tunables.spawn_interval_ticks();
        let open = self.last_attempt.is_none_or(|last| now.saturating_sub(last) >= interval);
        if !open {
            return None;
        }
        self.last_attempt = Some(now);

        if rng.r#gen::<f64>() >= tunables.spawn_chance {
            return None;
        }

        let adversary = roll_adversary(rng, tunables);
        store.push_adversary(adversary);
        Some(adversary)
    }
}

fn roll_adversary(rng: &mut impl Rng, tunables: &Tunables) -> Adversary {
    let margin = tunables.adversary_spawn_margin;
    let x = rng.gen_range(margin..=tunables.play_width - margin);
    let y = rng.gen_range(tunables.adversary_spawn_y_min..=tunables.adversary_spawn_y_max);
    let speed = rng.gen_range(tunables.adversary_speed_min..=tunables.adversary_speed_max);
    Adversary { pos: Vec2::new(x, y), speed }
}
