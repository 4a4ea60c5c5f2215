use crate::core::random::RandomSource;
use crate::domain::medal::{Medal, MedalId};
use crate::domain::settings::PusherConfig;
use crate::systems::placement::{drop_placement, initial_placement};

use super::collaborators::{MedalEngine, ScoreDisplay};
use super::scoreboard::Scoreboard;
use super::spawn_timer::SpawnTimer;

/// What one frame did
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Frame time actually applied, after clamping bad deltas to zero
    pub elapsed_ms: f64,
    pub despawned: u32,
    pub spawned: Option<MedalId>,
}

/// Owns the active medal set, the counters and the spawn timer.
///
/// Invariant: every entry in `medals` holds exactly one live engine body and
/// ids are never reused.
pub struct MedalLifecycle<E: MedalEngine, D, R> {
    config: PusherConfig,
    engine: E,
    display: D,
    rng: R,
    medals: Vec<Medal<E::Handle>>,
    scoreboard: Scoreboard,
    timer: SpawnTimer,
    next_drop_id: u32,
    seeded: bool,
}

impl<E, D, R> MedalLifecycle<E, D, R>
where
    E: MedalEngine,
    D: ScoreDisplay,
    R: RandomSource,
{
    pub fn new(config: PusherConfig, engine: E, display: D, rng: R) -> Self {
        let scoreboard = Scoreboard::new(config.medal_value);
        let timer = SpawnTimer::new(config.spawn_interval_ms);
        let next_drop_id = config.initial_medals;
        Self {
            config,
            engine,
            display,
            rng,
            medals: Vec::new(),
            scoreboard,
            timer,
            next_drop_id,
            seeded: false,
        }
    }

    /// Place the initial pile. Only the first call does anything; returns the
    /// number of medals the engine actually created.
    pub fn seed_initial_medals(&mut self) -> u32 {
        if self.seeded {
            console_warn!("initial medals already placed, ignoring");
            return 0;
        }
        self.seeded = true;

        let count = self.config.initial_medals;
        self.medals.reserve(count as usize);
        let mut created = 0;
        for i in 0..count {
            let placement = initial_placement(&self.config, &mut self.rng, MedalId(i));
            if let Some(handle) = self.engine.create_body(&placement) {
                self.medals.push(Medal { id: placement.id, handle });
                created += 1;
            }
        }
        if created < count {
            console_warn!("engine created {} of {} initial medals", created, count);
        }
        created
    }

    /// Write both counters to the display
    pub fn sync_display(&mut self) {
        self.display.set_insert_text(&self.scoreboard.insert_text());
        self.display.set_score_text(&self.scoreboard.score_text());
    }

    /// Per-frame update: score fallen medals, then advance the spawn timer.
    ///
    /// Negative or non-finite deltas count as zero.
    pub fn on_frame(&mut self, delta_ms: f64) -> FrameReport {
        let delta_ms = if delta_ms.is_finite() && delta_ms > 0.0 { delta_ms } else { 0.0 };

        let despawned = self.sweep();
        let spawned = if self.timer.tick(delta_ms) {
            self.drop_medal()
        } else {
            None
        };

        FrameReport { elapsed_ms: delta_ms, despawned, spawned }
    }

    /// Remove every medal below the despawn threshold in one pass.
    ///
    /// The set is partitioned up front so no medal is skipped when its
    /// neighbour is removed. A NaN position never compares below, so such
    /// medals stay in play.
    pub fn sweep(&mut self) -> u32 {
        let threshold = self.config.despawn_threshold_y;
        let engine = &self.engine;
        let (fallen, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.medals)
            .into_iter()
            .partition(|medal| engine.position(&medal.handle).y < threshold);
        self.medals = live;

        let removed = fallen.len() as u32;
        for medal in fallen {
            self.engine.destroy_body(medal.handle);
            self.scoreboard.record_scored();
            self.display.set_score_text(&self.scoreboard.score_text());
        }
        removed
    }

    /// Drop one medal into the slot and count it as inserted. A medal the
    /// engine fails to create is neither tracked nor counted; its id is
    /// still consumed.
    pub fn drop_medal(&mut self) -> Option<MedalId> {
        let id = MedalId(self.next_drop_id);
        self.next_drop_id = self.next_drop_id.saturating_add(1);

        let placement = drop_placement(&self.config, &mut self.rng, id);
        let handle = self.engine.create_body(&placement)?;
        self.medals.push(Medal { id, handle });

        self.scoreboard.record_insert();
        self.display.set_insert_text(&self.scoreboard.insert_text());
        Some(id)
    }

    pub fn medals(&self) -> &[Medal<E::Handle>] {
        &self.medals
    }

    pub fn active_count(&self) -> usize {
        self.medals.len()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn inserted_count(&self) -> u32 {
        self.scoreboard.inserted()
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn timer(&self) -> &SpawnTimer {
        &self.timer
    }

    pub fn config(&self) -> &PusherConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
