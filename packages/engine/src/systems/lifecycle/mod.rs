//! Medal lifecycle
//!
//! Medals are created by the spawn timer (and the initial pile), fall through
//! the cabinet under the host's physics, and are scored once they drop below
//! the despawn threshold. The controller only does the bookkeeping; bodies
//! and labels live behind the collaborator traits.

mod collaborators;
mod controller;
mod scoreboard;
mod spawn_timer;

pub use collaborators::{MedalEngine, ScoreDisplay};
pub use controller::{FrameReport, MedalLifecycle};
pub use scoreboard::Scoreboard;
pub use spawn_timer::SpawnTimer;
