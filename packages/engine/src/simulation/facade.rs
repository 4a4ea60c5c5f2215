use wasm_bindgen::prelude::*;

use crate::core::random::Xorshift32;
use crate::domain::settings::PusherConfig;

use super::perf_stats::FrameStats;
use super::js_bridge::{JsDisplay, JsEngine};
use super::PusherCore;

#[wasm_bindgen]
pub struct MedalPusher {
    core: PusherCore<JsEngine, JsDisplay, Xorshift32>,
}

#[wasm_bindgen]
impl MedalPusher {
    /// Create a cabinet bound to the host object (see the bridge for its
    /// shape). `config_json` overrides any subset of the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(host: JsValue, config_json: Option<String>) -> Result<MedalPusher, JsValue> {
        let config = match config_json {
            Some(json) => PusherConfig::from_json(&json).map_err(|e| {
                console_warn!("rejected pusher config: {}", e);
                JsValue::from_str(&e)
            })?,
            None => PusherConfig::default(),
        };
        let engine = JsEngine::from_host(&host).map_err(|e| JsValue::from_str(&e))?;
        let display = JsDisplay::from_host(&host).map_err(|e| JsValue::from_str(&e))?;
        let rng = match config.seed {
            Some(seed) => Xorshift32::new(seed),
            None => Xorshift32::from_clock(),
        };

        Ok(Self {
            core: PusherCore::new(config, engine, display, rng),
        })
    }

    /// Place the initial medals and reset the labels. Returns the number of
    /// medals placed (0 if already started).
    pub fn start(&mut self) -> u32 {
        self.core.start()
    }

    /// Advance one frame; call from the host's before-render hook with the
    /// engine's frame delta
    pub fn frame(&mut self, delta_ms: f64) {
        self.core.frame(delta_ms);
    }

    #[wasm_bindgen(getter)]
    pub fn inserted_count(&self) -> u32 { self.core.inserted_count() }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 { self.core.score() }

    #[wasm_bindgen(getter)]
    pub fn active_medals(&self) -> u32 { self.core.active_medals() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame_count() }

    /// Enable or disable per-frame stats (adds timing overhead when enabled)
    pub fn enable_frame_stats(&mut self, enabled: bool) {
        self.core.enable_frame_stats(enabled);
    }

    /// Get last frame snapshot (zeros when stats are disabled)
    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.frame_stats()
    }

    // === VIEW MODE ===

    #[wasm_bindgen(js_name = sessionStarted)]
    pub fn session_started(&mut self) {
        self.core.view_mut().session_started();
    }

    #[wasm_bindgen(js_name = sessionEnded)]
    pub fn session_ended(&mut self) {
        self.core.view_mut().session_ended();
    }

    /// Report a rejected immersive session request; the cabinet stays on the
    /// fixed view
    #[wasm_bindgen(js_name = sessionFailed)]
    pub fn session_failed(&mut self, reason: String) {
        self.core.view_mut().session_failed(&reason);
    }

    #[wasm_bindgen(getter)]
    pub fn skybox_visible(&self) -> bool { self.core.view().skybox_visible() }

    #[wasm_bindgen(getter)]
    pub fn immersive(&self) -> bool {
        self.core.view().mode() == crate::systems::view::ViewMode::Immersive
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}
