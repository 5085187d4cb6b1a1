//! Global state machine.
//!
//! Mirrors the session lifecycle so boundary systems (restart key, overlay) can be gated
//! with `run_if(in_state(..))`. The session itself stays the source of truth.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum AppState {
    #[default]
    Playing,
    GameOver,
}
