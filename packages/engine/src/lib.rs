//! Medal Pusher Engine - game logic for the coin pusher diorama in WASM
//!
//! The host page owns rendering, rigid-body physics and XR sessions. This
//! crate owns what happens to the medals: the initial pile, timed drops,
//! scoring medals that fall off the playfield, the pusher stroke and the
//! cabinet layout the host builds from.
//!
//! Architecture:
//! - core/        - Logging macros, RNG, vector math
//! - domain/      - Medals, configuration, stage layout
//! - systems/     - Lifecycle, placement, pusher motion, view mode
//! - simulation/  - Per-frame orchestration and the JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("medal pusher engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Cabinet description for the host scene builder
#[wasm_bindgen(js_name = stageLayoutJson)]
pub fn stage_layout_json() -> Result<String, JsValue> {
    domain::stage::StageLayout::coin_pusher()
        .to_json()
        .map_err(|e| JsValue::from_str(&e))
}

/// Default tunables, for the host's settings panel
#[wasm_bindgen(js_name = defaultConfigJson)]
pub fn default_config_json() -> String {
    domain::settings::PusherConfig::default().to_json()
}

// Re-export main types
pub use crate::core::random::{random_number, RandomSource, Xorshift32};
pub use crate::core::vec3::Vec3;
pub use domain::medal::{Medal, MedalBody, MedalId, Placement};
pub use domain::settings::{PusherConfig, Span};
pub use domain::stage::StageLayout;
pub use simulation::{FrameStats, MedalPusher, PusherCore};
pub use systems::lifecycle::{FrameReport, MedalEngine, MedalLifecycle, ScoreDisplay, Scoreboard};
