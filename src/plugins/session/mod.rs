//! Session plugin: drives the simulation core from Bevy's fixed timestep.
//!
//! Pipeline:
//! - FixedUpdate (tick_rate_hz): advance clock -> read newest hand sample -> `GameSession::tick`
//!   -> store the snapshot -> mirror the lifecycle into `AppState`
//! - Update: control boundary (R restarts while game over, Escape quits)
//!
//! Quitting only ever happens between frames, so a tick is never cut short.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::{state::AppState, tunables::Tunables};
use crate::sim::{GameSession, HandFeed, HandSample, Phase, RenderSnapshot, SimulationClock};

/// Snapshot produced by the most recent tick, for the render layer.
#[derive(Resource, Debug, Clone)]
pub struct LatestSnapshot(pub RenderSnapshot);

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();
    let session = GameSession::new(tunables.clone());
    let initial = session.snapshot(HandSample::absent());

    app.insert_resource(Time::<Fixed>::from_hz(tunables.tick_rate_hz))
        .insert_resource(SimulationClock::new(tunables.tick_rate_hz))
        .insert_resource(session)
        .insert_resource(LatestSnapshot(initial))
        .init_resource::<HandFeed>()
        .add_systems(FixedUpdate, (run_tick, sync_app_state).chain())
        .add_systems(Update, restart_on_key.run_if(in_state(AppState::GameOver)))
        .add_systems(Update, quit_on_escape);
}

fn run_tick(
    mut clock: ResMut<SimulationClock>,
    feed: Res<HandFeed>,
    mut session: ResMut<GameSession>,
    mut latest: ResMut<LatestSnapshot>,
) {
    // One tick index per tick; every timer comparison inside uses it.
    let now = clock.advance();
    let sample = feed.latest(now, session.tunables().sample_max_age_ticks());
    latest.0 = session.tick_at(sample, now);
}

fn sync_app_state(
    session: Res<GameSession>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
) {
    let wanted = match session.phase() {
        Phase::Playing => AppState::Playing,
        Phase::GameOver => AppState::GameOver,
    };
    if *state.get() != wanted {
        next.set(wanted);
    }
}

fn restart_on_key(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut session: ResMut<GameSession>,
    mut latest: ResMut<LatestSnapshot>,
    mut next: ResMut<NextState<AppState>>,
) {
    let Some(keys) = keys else { return; };
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }

    session.restart();
    latest.0 = session.snapshot(HandSample::absent());
    next.set(AppState::Playing);
}

fn quit_on_escape(keys: Option<Res<ButtonInput<KeyCode>>>, mut exit: MessageWriter<AppExit>) {
    let Some(keys) = keys else { return; };
    if keys.just_pressed(KeyCode::Escape) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}
