//! Simulation core.
//!
//! Engine-agnostic game rules: plain value types in ordered `Vec`s, advanced one fixed tick
//! at a time by [`GameSession::tick`]. Bevy math/colour types are used as values only; no
//! ECS access happens in here, which keeps every rule testable with a seeded RNG and
//! hand-picked timestamps.
//!
//! ```text
//! tick(sample, now)
//!   ├─ GameOver? ──────────────────────────────────────────┐
//!   │                                                      │
//!   ├─ input::map_sample       move player, fire intent    │
//!   ├─ SpawnScheduler::update  gate, then coin flip        │
//!   ├─ physics::step           advance + cull              │
//!   ├─ Lifecycle::refresh      invincibility timeout       │
//!   ├─ collision::resolve      kills, score, life loss     │
//!   └─ RenderSnapshot::capture ◄───────────────────────────┘
//! ```

pub mod clock;
pub mod collision;
pub mod entities;
pub mod input;
pub mod lifecycle;
pub mod physics;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use clock::SimulationClock;
pub use entities::{Adversary, Bullet, EntityStore, Player};
pub use input::{HandFeed, HandSample};
pub use lifecycle::{Lifecycle, Phase};
pub use session::GameSession;
pub use snapshot::{DrawRect, GameOverOverlay, Hud, RectKind, RenderSnapshot};
pub use spawn::SpawnScheduler;
