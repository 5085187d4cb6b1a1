use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::Tunables;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert_eq!(app.world().get_resource::<Tunables>(), Some(&Tunables::default()));
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_preloaded_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { spawn_chance: 0.9, ..Tunables::default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().spawn_chance, 0.9);
}
