//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::AppState;
use crate::common::tunables::{Tunables, TUNABLES_FILE};
use crate::plugins;

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    // Window starts at the default size; the camera plugin fits it to loaded tunables.
    let size = Tunables::default().window_size().as_uvec2();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Gesture Fighter".into(),
            resolution: WindowResolution::new(size.x, size.y),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    // After DefaultPlugins so the load outcome is logged.
    app.insert_resource(Tunables::load_or_default(TUNABLES_FILE));
    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera/sprites/text).
/// - Insert `Tunables` beforehand to override the defaults.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<AppState>();
    plugins::register_gameplay(app);
}
