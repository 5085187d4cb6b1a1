//! Render plugin (render-only): turns the latest `RenderSnapshot` into sprites and text.
//!
//! ```text
//! Startup: frame borders, side-panel separator, HUD + overlay text, rect pool
//! PostUpdate:
//!   draw_snapshot_rects   pool slots <- snapshot.rects
//!   draw_hud              score / lives / hand / fighter text
//!   draw_overlay          dim + three lines, only while game over
//! ```
//!
//! Snapshot coordinates are playfield units (origin top-left, y down). The camera sits at the
//! window centre, so `to_world` shifts and flips into Bevy's y-up world space.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::session::LatestSnapshot;
use crate::sim::RenderSnapshot;

pub mod pool;

const FRAME_THICKNESS: f32 = 2.0;
const OVERLAY_Z: f32 = 10.0;
const TEXT_Z: f32 = 11.0;
const HUD_FONT: f32 = 36.0;
const PANEL_FONT: f32 = 28.0;
const OVERLAY_FONT: f32 = 72.0;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudText {
    Score,
    Lives,
    Hand,
    Fighter,
}

#[derive(Component)]
pub struct OverlayDim;

/// Overlay text line (0 = title, 1 = final score, 2 = prompt).
#[derive(Component)]
pub struct OverlayLine(pub usize);

pub fn plugin(app: &mut App) {
    let capacity = 512;
    app.insert_resource(pool::RectPool::new(capacity))
        .add_systems(Startup, (pool::init_rect_pool, spawn_frame, spawn_text))
        .add_systems(
            PostUpdate,
            (pool::draw_snapshot_rects, draw_hud, draw_overlay)
                .before(TransformSystems::Propagate),
        );
}

/// Playfield point (y down, origin top-left) to world point (y up, origin window centre).
#[inline]
pub fn to_world(p: Vec2, tunables: &Tunables) -> Vec2 {
    let window = tunables.window_size();
    Vec2::new(p.x - window.x * 0.5, window.y * 0.5 - p.y)
}

/// Outline the playfield and side panel, plus the separator under the hand readout.
fn spawn_frame(mut commands: Commands, tunables: Res<Tunables>) {
    let t = FRAME_THICKNESS;
    let play = tunables.play_size();
    let panel = Vec2::new(tunables.aux_panel_width, tunables.play_height);

    let mut spawn_line = |name: String, center: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name),
            Sprite::from_color(Color::WHITE, size),
            Transform::from_translation(to_world(center, &tunables).extend(0.0)),
        ));
    };

    for (label, min, size) in [("Playfield", Vec2::ZERO, play), ("Panel", Vec2::new(play.x, 0.0), panel)] {
        let max = min + size;
        let mid = (min + max) * 0.5;
        spawn_line(format!("{label}Top"), Vec2::new(mid.x, min.y + t * 0.5), Vec2::new(size.x, t));
        spawn_line(format!("{label}Bottom"), Vec2::new(mid.x, max.y - t * 0.5), Vec2::new(size.x, t));
        spawn_line(format!("{label}Left"), Vec2::new(min.x + t * 0.5, mid.y), Vec2::new(t, size.y));
        spawn_line(format!("{label}Right"), Vec2::new(max.x - t * 0.5, mid.y), Vec2::new(t, size.y));
    }

    spawn_line(
        "PanelSeparator".into(),
        Vec2::new(play.x + panel.x * 0.5, 350.0),
        Vec2::new(panel.x - 20.0, 1.0),
    );
}

fn spawn_text(mut commands: Commands, tunables: Res<Tunables>) {
    let play = tunables.play_size();
    let panel_mid = play.x + tunables.aux_panel_width * 0.5;

    let hud = [
        (HudText::Score, Vec2::new(90.0, 25.0), HUD_FONT),
        (HudText::Lives, Vec2::new(90.0, 65.0), HUD_FONT),
        (HudText::Hand, Vec2::new(panel_mid, 330.0), PANEL_FONT),
        (HudText::Fighter, Vec2::new(panel_mid, 370.0), PANEL_FONT),
    ];
    for (field, pos, font_size) in hud {
        commands.spawn((
            Name::new(format!("Hud{field:?}")),
            field,
            Text2d::new(""),
            TextFont { font_size, ..default() },
            TextColor(Color::WHITE),
            Transform::from_translation(to_world(pos, &tunables).extend(TEXT_Z)),
        ));
    }

    commands.spawn((
        Name::new("OverlayDim"),
        OverlayDim,
        Sprite::from_color(Color::NONE, play),
        Transform::from_translation(to_world(play * 0.5, &tunables).extend(OVERLAY_Z)),
        Visibility::Hidden,
    ));

    for (i, dy) in [-100.0, 0.0, 100.0].into_iter().enumerate() {
        commands.spawn((
            Name::new(format!("OverlayLine{i}")),
            OverlayLine(i),
            Text2d::new(""),
            TextFont { font_size: OVERLAY_FONT, ..default() },
            TextColor(Color::WHITE),
            Transform::from_translation(to_world(Vec2::new(play.x * 0.5, play.y * 0.5 + dy), &tunables).extend(TEXT_Z)),
            Visibility::Hidden,
        ));
    }
}

fn hud_line(snapshot: &RenderSnapshot, field: HudText) -> String {
    match field {
        HudText::Score => snapshot.hud.score_text(),
        HudText::Lives => snapshot.hud.lives_text(),
        HudText::Hand => snapshot.hud.hand_text(),
        HudText::Fighter => snapshot.hud.fighter_text(),
    }
}

fn draw_hud(latest: Res<LatestSnapshot>, mut q: Query<(&HudText, &mut Text2d)>) {
    for (field, mut text) in &mut q {
        let line = hud_line(&latest.0, *field);
        if text.0 != line {
            text.0 = line;
        }
    }
}

fn draw_overlay(
    latest: Res<LatestSnapshot>,
    mut q_dim: Query<(&mut Sprite, &mut Visibility), (With<OverlayDim>, Without<OverlayLine>)>,
    mut q_lines: Query<(&OverlayLine, &mut Text2d, &mut Visibility), Without<OverlayDim>>,
) {
    let overlay = latest.0.overlay;
    let shown = if overlay.is_some() { Visibility::Visible } else { Visibility::Hidden };

    if let Ok((mut sprite, mut vis)) = q_dim.single_mut() {
        if let Some(o) = &overlay {
            sprite.color = o.dim.color;
        }
        *vis = shown;
    }

    let lines = overlay.map(|o| o.lines());
    for (line, mut text, mut vis) in &mut q_lines {
        *vis = shown;
        if let Some(lines) = &lines {
            text.0.clone_from(&lines[line.0]);
        }
    }
}
