//! Pre-spawned sprite slots for snapshot rectangles.
//!
//! Rectangle counts change every tick. Instead of spawning and despawning sprites per frame
//! we keep a fixed pool and only rewrite component values (colour, size, position,
//! visibility). No structural changes on the hot path.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::session::LatestSnapshot;
use crate::sim::{RectKind, RenderSnapshot};

use super::to_world;

pub const ENTITY_Z: f32 = 1.0;
/// Player alpha while invincible.
pub const INVINCIBLE_ALPHA: f32 = 0.35;

#[derive(Component)]
pub struct PooledRect;

#[derive(Resource, Debug)]
pub struct RectPool {
    pub slots: Vec<Entity>,
    pub capacity: usize,
}

impl RectPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }
}

/// Pre-spawn pooled sprites (hidden).
pub fn init_rect_pool(mut commands: Commands, mut pool: ResMut<RectPool>) {
    pool.slots.clear();
    let cap = pool.capacity;
    pool.slots.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Rect(Pooled)"),
                PooledRect,
                Sprite {
                    color: Color::WHITE,
                    custom_size: Some(Vec2::ONE),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, ENTITY_Z),
                Visibility::Hidden,
            ))
            .id();

        pool.slots.push(e);
    }
}

/// Write the latest snapshot's rectangles into the pool, in draw order.
///
/// Slots past the rectangle count are hidden. Rectangles past the pool capacity are not
/// drawn (capacity decision, not a correctness failure).
pub fn draw_snapshot_rects(
    latest: Res<LatestSnapshot>,
    pool: Res<RectPool>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut Sprite, &mut Transform, &mut Visibility), With<PooledRect>>,
) {
    let snapshot: &RenderSnapshot = &latest.0;
    if snapshot.rects.len() > pool.slots.len() {
        debug!(
            "RectPool exhausted: {} rects, {} slots",
            snapshot.rects.len(),
            pool.slots.len()
        );
    }

    for (i, &e) in pool.slots.iter().enumerate() {
        let (mut sprite, mut tf, mut vis) =
            q.get_mut(e).expect("RectPool contained an entity missing pooled rect components");

        let Some(rect) = snapshot.rects.get(i) else {
            *vis = Visibility::Hidden;
            continue;
        };

        sprite.color = if rect.kind == RectKind::Player && snapshot.hud.invincible {
            rect.color.with_alpha(INVINCIBLE_ALPHA)
        } else {
            rect.color
        };
        sprite.custom_size = Some(rect.size);
        // Later rects draw on top of earlier ones.
        let z = ENTITY_Z + i as f32 * 1e-4;
        tf.translation = to_world(rect.center(), &tunables).extend(z);
        *vis = Visibility::Visible;
    }
}
