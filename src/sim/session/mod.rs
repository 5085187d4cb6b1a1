//! Game session: owns the world and runs one fixed tick at a time.
//!
//! Everything that a restart throws away lives in `SessionState`, which is replaced
//! wholesale. The RNG and tunables survive restarts.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::common::tunables::Tunables;

use super::clock;
use super::collision;
use super::entities::{Adversary, Bullet, EntityStore, Player};
use super::input::{HandSample, InputMapper};
use super::lifecycle::{Lifecycle, Phase};
use super::physics;
use super::snapshot::RenderSnapshot;
use super::spawn::SpawnScheduler;

#[derive(Debug, Clone, PartialEq)]
struct SessionState {
    store: EntityStore,
    score: u32,
    lifecycle: Lifecycle,
    input: InputMapper,
    spawner: SpawnScheduler,
}

impl SessionState {
    fn fresh(tunables: &Tunables) -> Self {
        Self {
            store: EntityStore::new(tunables),
            score: 0,
            lifecycle: Lifecycle::new(tunables.starting_lives, tunables.invincibility_ticks()),
            input: InputMapper::default(),
            spawner: SpawnScheduler::default(),
        }
    }
}

#[derive(Resource, Debug)]
pub struct GameSession {
    tunables: Tunables,
    rng: StdRng,
    state: SessionState,
}

impl GameSession {
    /// Seeded from `tunables.rng_seed`, or from OS entropy when unset.
    pub fn new(tunables: Tunables) -> Self {
        let rng = match tunables.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(tunables, rng)
    }

    pub fn with_rng(tunables: Tunables, rng: StdRng) -> Self {
        let state = SessionState::fresh(&tunables);
        info!("Session started with {} lives", state.lifecycle.lives());
        Self { tunables, rng, state }
    }

    /// Advance one tick at `now` (seconds, monotonic) and describe the resulting frame.
    ///
    /// `now` is mapped to the nearest tick of `tick_rate_hz`; see [`GameSession::tick_at`].
    pub fn tick(&mut self, sample: HandSample, now: f64) -> RenderSnapshot {
        let tick = clock::tick_at(now, self.tunables.tick_rate_hz);
        self.tick_at(sample, tick)
    }

    /// Advance one tick whose index on the simulation clock is `now`.
    ///
    /// After game over the world is frozen: only the snapshot is produced.
    pub fn tick_at(&mut self, sample: HandSample, now: u64) -> RenderSnapshot {
        if self.state.lifecycle.is_game_over() {
            return self.snapshot(sample);
        }

        let tunables = &self.tunables;
        let state = &mut self.state;

        if state.input.apply(sample, now, &mut state.store.player, tunables) {
            let origin = state.store.player.pos;
            state.store.push_bullet(Bullet {
                pos: Vec2::new(origin.x, origin.y - tunables.bullet_spawn_offset),
                speed: tunables.bullet_speed,
            });
        }

        state.spawner.update(now, &mut self.rng, &mut state.store, tunables);
        physics::step(&mut state.store, tunables.play_height);

        state.lifecycle.refresh(now);
        let report = collision::resolve(
            &mut state.store,
            &mut state.lifecycle,
            &mut state.score,
            now,
            tunables,
        );
        if report.kills > 0 {
            debug!("{} adversaries destroyed, score {}", report.kills, state.score);
        }
        if report.lives_lost > 0 && state.lifecycle.phase() == Phase::GameOver {
            info!("Game over, final score {}", state.score);
        }

        self.snapshot(sample)
    }

    /// Throw the whole session away and start fresh.
    pub fn restart(&mut self) {
        self.state = SessionState::fresh(&self.tunables);
        info!("Session restarted");
    }

    pub fn snapshot(&self, sample: HandSample) -> RenderSnapshot {
        RenderSnapshot::capture(
            &self.state.store,
            self.state.score,
            &self.state.lifecycle,
            sample.position(),
            &self.tunables,
        )
    }

    #[inline]
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[inline]
    pub fn lives(&self) -> u32 {
        self.state.lifecycle.lives()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.lifecycle.phase()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.lifecycle.is_game_over()
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.state.lifecycle.is_invincible()
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.state.store.player
    }

    #[inline]
    pub fn bullets(&self) -> &[Bullet] {
        &self.state.store.bullets
    }

    #[inline]
    pub fn adversaries(&self) -> &[Adversary] {
        &self.state.store.adversaries
    }

    #[inline]
    pub fn store(&self) -> &EntityStore {
        &self.state.store
    }

    /// Direct access to the entity records, e.g. to stage a scenario.
    #[inline]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.state.store
    }
}
