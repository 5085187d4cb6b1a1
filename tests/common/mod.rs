//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime + time.
//! - `StatesPlugin` backs `AppState`.
//! - we then call `gesture_fighter::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use gesture_fighter::common::tunables::Tunables;
use gesture_fighter::sim::HandSample;

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(tunables);

    gesture_fighter::game::configure_headless(&mut app);
    app
}

/// Seeded, and the spawner never succeeds: only staged adversaries exist.
pub fn quiet() -> Tunables {
    Tunables { spawn_chance: 0.0, rng_seed: Some(42), ..Tunables::default() }
}

/// Run `n` fixed ticks directly, independent of wall-clock time.
pub fn fixed_ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Hand sample that puts the player at `pos` on the default playfield.
pub fn hand_at(pos: Vec2) -> HandSample {
    HandSample::at(pos.x / 800.0, pos.y / 600.0)
}
