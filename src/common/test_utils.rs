//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) executes a system without
//! building a full schedule. Systems that use `Commands` only enqueue structural changes,
//! so we call `world.flush()` afterwards to apply them before assertions.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::sim::HandSample;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Default tunables with a fixed seed and no random spawns.
pub fn quiet_tunables() -> Tunables {
    Tunables { spawn_chance: 0.0, rng_seed: Some(7), ..Tunables::default() }
}

/// Normalized coordinates that put the player at `pos` on the default 800x600 playfield.
pub fn hand_at(pos: Vec2) -> HandSample {
    HandSample::at(pos.x / 800.0, pos.y / 600.0)
}
