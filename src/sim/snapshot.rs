//! Render snapshot: the complete, immutable description of one frame.
//!
//! Coordinates are playfield units with the origin at the top-left and y pointing down.
//! `DrawRect::min` is the top-left corner of the rectangle.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::entities::EntityStore;
use super::lifecycle::Lifecycle;

pub const PLAYER_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const BULLET_COLOR: Color = Color::WHITE;
pub const ADVERSARY_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const DIM_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectKind {
    Player,
    Bullet,
    Adversary,
    Dim,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub kind: RectKind,
    pub min: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl DrawRect {
    pub fn centered(kind: RectKind, center: Vec2, size: Vec2, color: Color) -> Self {
        Self { kind, min: center - size * 0.5, size, color }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    /// The render layer fades the player while this is set.
    pub invincible: bool,
    /// Normalized palm position, if a hand was tracked this tick.
    pub hand: Option<Vec2>,
    /// Player centre in playfield units.
    pub fighter: Vec2,
    pub play_height: f32,
}

impl Hud {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }

    /// Side panel shows the palm with y flipped so "up" reads as larger.
    pub fn hand_text(&self) -> String {
        match self.hand {
            Some(p) => format!("Hand: Palm Position: ({:.2}, {:.2})", p.x, 1.0 - p.y),
            None => "Hand: No Hand".to_owned(),
        }
    }

    pub fn fighter_text(&self) -> String {
        format!("Fighter: ({:.0}, {:.0})", self.fighter.x, self.play_height - self.fighter.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOverOverlay {
    pub dim: DrawRect,
    pub final_score: u32,
}

impl GameOverOverlay {
    pub const TITLE: &'static str = "Game Over";
    pub const PROMPT: &'static str = "Press R to Restart";

    /// Title, final score and restart prompt, top to bottom.
    pub fn lines(&self) -> [String; 3] {
        [
            Self::TITLE.to_owned(),
            format!("Final Score: {}", self.final_score),
            Self::PROMPT.to_owned(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// Player first, then bullets, then adversaries (draw order).
    pub rects: Vec<DrawRect>,
    pub hud: Hud,
    pub overlay: Option<GameOverOverlay>,
}

impl RenderSnapshot {
    pub fn capture(
        store: &EntityStore,
        score: u32,
        lifecycle: &Lifecycle,
        hand: Option<Vec2>,
        tunables: &Tunables,
    ) -> Self {
        let ship = Vec2::splat(tunables.ship_size);
        let bullet = tunables.bullet_size();

        let mut rects = Vec::with_capacity(1 + store.bullets.len() + store.adversaries.len());
        rects.push(DrawRect::centered(RectKind::Player, store.player.pos, ship, PLAYER_COLOR));
        rects.extend(
            store
                .bullets
                .iter()
                .map(|b| DrawRect::centered(RectKind::Bullet, b.pos, bullet, BULLET_COLOR)),
        );
        rects.extend(
            store
                .adversaries
                .iter()
                .map(|a| DrawRect::centered(RectKind::Adversary, a.pos, ship, ADVERSARY_COLOR)),
        );

        let overlay = lifecycle.is_game_over().then(|| GameOverOverlay {
            dim: DrawRect {
                kind: RectKind::Dim,
                min: Vec2::ZERO,
                size: tunables.play_size(),
                color: DIM_COLOR,
            },
            final_score: score,
        });

        Self {
            rects,
            hud: Hud {
                score,
                lives: lifecycle.lives(),
                invincible: lifecycle.is_invincible(),
                hand,
                fighter: store.player.pos,
                play_height: tunables.play_height,
            },
            overlay,
        }
    }

    pub fn count(&self, kind: RectKind) -> usize {
        self.rects.iter().filter(|r| r.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::{Adversary, Bullet};

    fn capture(store: &EntityStore, life: &Lifecycle, hand: Option<Vec2>) -> RenderSnapshot {
        RenderSnapshot::capture(store, 40, life, hand, &Tunables::default())
    }

    #[test]
    fn rects_are_ordered_and_sized() {
        let t = Tunables::default();
        let mut store = EntityStore::new(&t);
        store.push_bullet(Bullet { pos: Vec2::new(100.0, 100.0), speed: 10.0 });
        store.push_adversary(Adversary { pos: Vec2::new(200.0, 50.0), speed: 1.0 });
        let life = Lifecycle::new(3, 120);

        let snap = capture(&store, &life, None);

        let kinds: Vec<RectKind> = snap.rects.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RectKind::Player, RectKind::Bullet, RectKind::Adversary]);

        assert_eq!(snap.rects[0].min, Vec2::new(385.0, 485.0));
        assert_eq!(snap.rects[0].size, Vec2::splat(30.0));
        assert_eq!(snap.rects[1].min, Vec2::new(98.0, 95.0));
        assert_eq!(snap.rects[1].size, Vec2::new(4.0, 10.0));
        assert_eq!(snap.rects[2].center(), Vec2::new(200.0, 50.0));
        assert!(snap.overlay.is_none());
    }

    #[test]
    fn hud_text_matches_side_panel_format() {
        let t = Tunables::default();
        let store = EntityStore::new(&t);
        let life = Lifecycle::new(3, 120);

        let snap = capture(&store, &life, Some(Vec2::new(0.25, 0.75)));
        assert_eq!(snap.hud.score_text(), "Score: 40");
        assert_eq!(snap.hud.lives_text(), "Lives: 3");
        assert_eq!(snap.hud.hand_text(), "Hand: Palm Position: (0.25, 0.25)");
        assert_eq!(snap.hud.fighter_text(), "Fighter: (400, 100)");

        let snap = capture(&store, &life, None);
        assert_eq!(snap.hud.hand_text(), "Hand: No Hand");
    }

    #[test]
    fn overlay_only_when_game_over() {
        let t = Tunables::default();
        let store = EntityStore::new(&t);
        let mut life = Lifecycle::new(1, 120);
        life.register_hit(0);

        let snap = capture(&store, &life, None);
        let overlay = snap.overlay.expect("game over overlay");
        assert_eq!(overlay.dim.size, Vec2::new(800.0, 600.0));
        assert_eq!(
            overlay.lines(),
            ["Game Over".to_owned(), "Final Score: 40".to_owned(), "Press R to Restart".to_owned()]
        );
    }
}
