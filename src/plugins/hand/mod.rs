//! Hand plugin: the input boundary.
//!
//! The real producer is a camera + hand-landmark tracker running at its own cadence. Here
//! the mouse cursor stands in for it: a cursor over the playfield is a tracked palm, a
//! cursor over the side panel or outside the window is "no hand".
//!
//! Pipeline:
//! - Update: sample cursor, publish into `HandFeed` stamped with the current clock tick
//! - FixedUpdate (session plugin): read the newest non-stale sample

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::sim::{HandFeed, HandSample, SimulationClock};

pub fn plugin(app: &mut App) {
    app.init_resource::<HandFeed>()
        .add_systems(Update, publish_cursor_sample);
}

/// Map a window cursor position (logical pixels, origin top-left) to a hand sample.
pub fn cursor_to_sample(cursor: Option<Vec2>, tunables: &Tunables) -> HandSample {
    match cursor {
        Some(c) if c.x < tunables.play_width && c.y < tunables.play_height => {
            HandSample::at(c.x / tunables.play_width, c.y / tunables.play_height)
        }
        _ => HandSample::absent(),
    }
}

fn publish_cursor_sample(
    windows: Query<&Window>,
    clock: Res<SimulationClock>,
    tunables: Res<Tunables>,
    mut feed: ResMut<HandFeed>,
) {
    let window = match windows.single() {
        Ok(w) => w,
        Err(e) => { debug!("No single Window: {e:?}"); return; }
    };

    feed.publish(cursor_to_sample(window.cursor_position(), &tunables), clock.ticks());
}
