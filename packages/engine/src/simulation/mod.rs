//! Pusher core - per-frame orchestration
//!
//! The core only sequences the systems:
//! - Lifecycle (score fallen medals, drop new ones) is in systems/lifecycle
//! - Pusher motion is in systems/pusher
//! - View mode bookkeeping is in systems/view
//!
//! The host calls `frame` once per rendered frame, after its own physics step.

use crate::core::random::{RandomSource, Xorshift32};
use crate::core::vec3::Vec3;
use crate::domain::settings::PusherConfig;
use crate::systems::lifecycle::{FrameReport, MedalEngine, MedalLifecycle, ScoreDisplay};
use crate::systems::pusher::PusherAnimator;
use crate::systems::view::ViewState;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "bridge/js_bridge.rs"]
mod js_bridge;
mod facade;

pub use facade::MedalPusher;
pub use js_bridge::{JsDisplay, JsEngine};
pub use perf_stats::FrameStats;

/// Game state for one cabinet
pub struct PusherCore<E: MedalEngine, D, R = Xorshift32> {
    lifecycle: MedalLifecycle<E, D, R>,
    pusher: PusherAnimator,
    view: ViewState,

    // State
    started: bool,
    frame: u64,

    // Perf metrics
    stats_enabled: bool,
    stats: FrameStats,
}

impl<E, D, R> PusherCore<E, D, R>
where
    E: MedalEngine,
    D: ScoreDisplay,
    R: RandomSource,
{
    pub fn new(config: PusherConfig, engine: E, display: D, rng: R) -> Self {
        init::create_core(config, engine, display, rng)
    }

    /// Seed the initial pile, reset the labels and park the pusher.
    /// Only the first call has an effect.
    pub fn start(&mut self) -> u32 {
        if self.started {
            return 0;
        }
        self.started = true;

        let seeded = self.lifecycle.seed_initial_medals();
        self.lifecycle.sync_display();
        let home = self.pusher.position();
        self.lifecycle.engine_mut().place_pusher(home);

        let config = self.lifecycle.config();
        console_log!(
            "medal pusher started: {} medals, drop every {} ms, despawn below y={}",
            seeded,
            config.spawn_interval_ms,
            config.despawn_threshold_y
        );
        seeded
    }

    /// Advance one rendered frame. The pusher moves by the delta the
    /// lifecycle actually applied.
    pub fn frame(&mut self, delta_ms: f64) -> FrameReport {
        let started = self.stats_enabled.then(perf_stats::now_ms);

        let report = self.lifecycle.on_frame(delta_ms);
        let pusher_at = self.pusher.advance(report.elapsed_ms);
        self.lifecycle.engine_mut().place_pusher(pusher_at);

        self.frame += 1;

        if let Some(started) = started {
            self.stats.record(
                started,
                &report,
                self.lifecycle.active_count() as u32,
                self.frame,
            );
        }
        report
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn inserted_count(&self) -> u32 {
        self.lifecycle.inserted_count()
    }

    pub fn score(&self) -> u32 {
        self.lifecycle.score()
    }

    pub fn active_medals(&self) -> usize {
        self.lifecycle.active_count()
    }

    pub fn pusher_position(&self) -> Vec3 {
        self.pusher.position()
    }

    pub fn config(&self) -> &PusherConfig {
        self.lifecycle.config()
    }

    pub fn lifecycle(&self) -> &MedalLifecycle<E, D, R> {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut MedalLifecycle<E, D, R> {
        &mut self.lifecycle
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Enable or disable per-frame stats (adds timing overhead when enabled)
    pub fn enable_frame_stats(&mut self, enabled: bool) {
        self.stats_enabled = enabled;
        if !enabled {
            self.stats.reset();
        }
    }

    /// Last frame snapshot (zeros when stats are disabled)
    pub fn frame_stats(&self) -> FrameStats {
        self.stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
