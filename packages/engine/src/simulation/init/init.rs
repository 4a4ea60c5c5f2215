use crate::core::random::RandomSource;
use crate::domain::settings::PusherConfig;
use crate::systems::lifecycle::{MedalEngine, MedalLifecycle, ScoreDisplay};
use crate::systems::pusher::PusherAnimator;
use crate::systems::view::ViewState;

use super::{FrameStats, PusherCore};

pub(super) fn create_core<E: MedalEngine, D: ScoreDisplay, R: RandomSource>(
    config: PusherConfig,
    engine: E,
    display: D,
    rng: R,
) -> PusherCore<E, D, R> {
    PusherCore {
        lifecycle: MedalLifecycle::new(config, engine, display, rng),
        pusher: PusherAnimator::default(),
        view: ViewState::new(),
        started: false,
        frame: 0,
        stats_enabled: false,
        stats: FrameStats::default(),
    }
}
