//! Tunable gameplay constants.
//!
//! Defaults reproduce the arcade feel the game was balanced for: an 800x600 playfield,
//! a 60 Hz tick, a 0.15 s fire cooldown and a 0.8 s spawn gate with a 30% coin flip.
//!
//! Values can be overridden from a RON file. Every field is `#[serde(default)]`, so a file
//! that only sets `spawn_chance: 0.5` is valid and everything else keeps its default.

use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::sim::clock::ticks_for;

/// File the binary looks for in the working directory.
pub const TUNABLES_FILE: &str = "tunables.ron";

#[derive(Debug, Error)]
pub enum TunablesError {
    #[error("failed to read tunables file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tunables file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid tunables: {0}")]
    Invalid(String),
}

#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Tunables {
    pub play_width: f32,
    pub play_height: f32,
    /// Side panel to the right of the playfield (hand telemetry).
    pub aux_panel_width: f32,

    /// Edge length of the player and adversary squares.
    pub ship_size: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    /// Units per tick.
    pub bullet_speed: f32,
    /// New bullets start this far above the player centre.
    pub bullet_spawn_offset: f32,

    pub shoot_cooldown: f64,
    pub spawn_interval: f64,
    pub spawn_chance: f64,
    pub adversary_speed_min: f32,
    pub adversary_speed_max: f32,
    pub adversary_spawn_margin: f32,
    pub adversary_spawn_y_min: f32,
    pub adversary_spawn_y_max: f32,

    pub bullet_hit_radius: f32,
    pub player_hit_radius: f32,
    pub kill_reward: u32,

    pub starting_lives: u32,
    pub invincibility_duration: f64,

    pub tick_rate_hz: f64,
    /// Hand samples older than this (seconds) count as "no hand".
    pub sample_max_age: f64,
    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            play_width: 800.0,
            play_height: 600.0,
            aux_panel_width: 400.0,
            ship_size: 30.0,
            bullet_width: 4.0,
            bullet_height: 10.0,
            bullet_speed: 10.0,
            bullet_spawn_offset: 30.0,
            shoot_cooldown: 0.15,
            spawn_interval: 0.8,
            spawn_chance: 0.3,
            adversary_speed_min: 1.0,
            adversary_speed_max: 3.0,
            adversary_spawn_margin: 50.0,
            adversary_spawn_y_min: -100.0,
            adversary_spawn_y_max: -20.0,
            bullet_hit_radius: 20.0,
            player_hit_radius: 30.0,
            kill_reward: 20,
            starting_lives: 3,
            invincibility_duration: 2.0,
            tick_rate_hz: 60.0,
            sample_max_age: 0.25,
            rng_seed: None,
        }
    }
}

impl Tunables {
    #[inline]
    pub fn half_size(&self) -> f32 {
        self.ship_size * 0.5
    }

    #[inline]
    pub fn bullet_size(&self) -> Vec2 {
        Vec2::new(self.bullet_width, self.bullet_height)
    }

    #[inline]
    pub fn play_size(&self) -> Vec2 {
        Vec2::new(self.play_width, self.play_height)
    }

    /// Full window size: playfield plus side panel.
    #[inline]
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.play_width + self.aux_panel_width, self.play_height)
    }

    /// Where the player starts: horizontally centred, 100 units above the bottom edge.
    #[inline]
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.play_width * 0.5, self.play_height - 100.0)
    }

    #[inline]
    pub fn shoot_cooldown_ticks(&self) -> u64 {
        ticks_for(self.shoot_cooldown, self.tick_rate_hz)
    }

    #[inline]
    pub fn spawn_interval_ticks(&self) -> u64 {
        ticks_for(self.spawn_interval, self.tick_rate_hz)
    }

    #[inline]
    pub fn invincibility_ticks(&self) -> u64 {
        ticks_for(self.invincibility_duration, self.tick_rate_hz)
    }

    #[inline]
    pub fn sample_max_age_ticks(&self) -> u64 {
        ticks_for(self.sample_max_age, self.tick_rate_hz)
    }

    /// Parse and validate a RON document.
    pub fn from_ron(text: &str) -> Result<Self, TunablesError> {
        let tunables: Tunables = ron::from_str(text)?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TunablesError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load from `path`, falling back to defaults when the file is missing or unusable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No tunables file at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(tunables) => {
                info!("Loaded tunables from {:?}", path);
                tunables
            }
            Err(e) => {
                warn!("{e}. Using default tunables.");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TunablesError> {
        let invalid = |msg: &str| Err(TunablesError::Invalid(msg.to_owned()));

        if !(self.ship_size > 0.0) {
            return invalid("ship_size must be positive");
        }
        if !(self.play_width >= self.ship_size && self.play_height >= self.ship_size) {
            return invalid("playfield must be at least one ship wide and tall");
        }
        if !(self.aux_panel_width >= 0.0) {
            return invalid("aux_panel_width must not be negative");
        }
        if !(self.bullet_width > 0.0 && self.bullet_height > 0.0) {
            return invalid("bullet dimensions must be positive");
        }
        // Zero or negative speeds never reach an exit edge, so nothing would be culled.
        if !(self.bullet_speed > 0.0) {
            return invalid("bullet_speed must be positive");
        }
        if !(self.adversary_speed_min > 0.0) {
            return invalid("adversary_speed_min must be positive");
        }
        if !(self.adversary_speed_min <= self.adversary_speed_max) {
            return invalid("adversary_speed_min exceeds adversary_speed_max");
        }
        if !(self.tick_rate_hz > 0.0 && self.tick_rate_hz.is_finite()) {
            return invalid("tick_rate_hz must be positive");
        }
        let durations = [
            self.shoot_cooldown,
            self.spawn_interval,
            self.invincibility_duration,
            self.sample_max_age,
        ];
        if !durations.iter().all(|d| *d >= 0.0 && d.is_finite()) {
            return invalid("durations must not be negative");
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return invalid("spawn_chance must be within [0, 1]");
        }
        if !(self.adversary_spawn_y_min <= self.adversary_spawn_y_max) {
            return invalid("adversary_spawn_y_min exceeds adversary_spawn_y_max");
        }
        if !(self.adversary_spawn_margin >= 0.0 && self.adversary_spawn_margin * 2.0 <= self.play_width) {
            return invalid("adversary_spawn_margin leaves no room to spawn");
        }
        if !(self.bullet_hit_radius >= 0.0 && self.player_hit_radius >= 0.0) {
            return invalid("hit radii must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Tunables::default().validate().is_ok());
    }

    #[test]
    fn partial_ron_fills_from_defaults() {
        let t = Tunables::from_ron("(spawn_chance: 0.5, rng_seed: Some(7))").unwrap();
        assert_eq!(t.spawn_chance, 0.5);
        assert_eq!(t.rng_seed, Some(7));
        assert_eq!(t.play_width, 800.0);
        assert_eq!(t.starting_lives, 3);
    }

    #[test]
    fn rejects_out_of_range_chance() {
        let err = Tunables::from_ron("(spawn_chance: 1.5)").unwrap_err();
        assert!(matches!(err, TunablesError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = Tunables::from_ron("(spawn_chance: ").unwrap_err();
        assert!(matches!(err, TunablesError::Parse(_)));
    }

    #[test]
    fn rejects_speeds_that_never_leave_the_playfield() {
        for ron in [
            "(bullet_speed: 0.0)",
            "(bullet_speed: -10.0)",
            "(adversary_speed_min: 0.0)",
            "(adversary_speed_min: -1.0, adversary_speed_max: 3.0)",
        ] {
            let err = Tunables::from_ron(ron).unwrap_err();
            assert!(matches!(err, TunablesError::Invalid(_)), "{ron} was accepted");
        }
    }

    #[test]
    fn rejects_negative_age_and_nan_geometry() {
        assert!(Tunables::from_ron("(sample_max_age: -0.1)").is_err());

        let nan_width = Tunables { play_width: f32::NAN, ..Tunables::default() };
        assert!(matches!(nan_width.validate(), Err(TunablesError::Invalid(_))));
        let nan_height = Tunables { play_height: f32::NAN, ..Tunables::default() };
        assert!(matches!(nan_height.validate(), Err(TunablesError::Invalid(_))));
    }

    #[test]
    fn durations_in_ticks() {
        let t = Tunables::default();
        assert_eq!(t.shoot_cooldown_ticks(), 9);
        assert_eq!(t.spawn_interval_ticks(), 48);
        assert_eq!(t.invincibility_ticks(), 120);
        assert_eq!(t.sample_max_age_ticks(), 15);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let t = Tunables::load_or_default("definitely/not/here/tunables.ron");
        assert_eq!(t, Tunables::default());
    }

    #[test]
    fn shipped_file_matches_defaults() {
        let t = Tunables::load(concat!(env!("CARGO_MANIFEST_DIR"), "/", "tunables.ron")).unwrap();
        assert_eq!(t, Tunables::default());
    }

    #[test]
    fn derived_geometry() {
        let t = Tunables::default();
        assert_eq!(t.half_size(), 15.0);
        assert_eq!(t.window_size(), Vec2::new(1200.0, 600.0));
        assert_eq!(t.player_start(), Vec2::new(400.0, 500.0));
    }
}
