//! Camera plugin (render-only).
//!
//! A single fixed 2D camera at the world origin. The window is sized to the playfield plus
//! side panel, so one world unit is one logical pixel and `render::to_world` is the whole
//! projection.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, (spawn_camera, fit_window));
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}

fn fit_window(tunables: Res<Tunables>, mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.single_mut() else {
        debug!("No single Window to fit");
        return;
    };
    let size = tunables.window_size();
    window.resolution.set(size.x, size.y);
}
