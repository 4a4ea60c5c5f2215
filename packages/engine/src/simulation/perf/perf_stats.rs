use wasm_bindgen::prelude::*;

use crate::systems::lifecycle::FrameReport;

/// Snapshot of the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frame_ms: f64,
    pub(super) despawned: u32,
    pub(super) spawned: u32,
    pub(super) active_medals: u32,
    pub(super) frame: u64,
}

/// Wall clock in milliseconds, for timing a frame against `FrameStats::record`
pub(super) fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }

    /// Snapshot a frame that began at `started_ms` (from `now_ms`). A clock
    /// that steps backwards reads as a zero-length frame.
    pub(super) fn record(&mut self, started_ms: f64, report: &FrameReport, active_medals: u32, frame: u64) {
        self.frame_ms = (now_ms() - started_ms).max(0.0);
        self.despawned = report.despawned;
        self.spawned = u32::from(report.spawned.is_some());
        self.active_medals = active_medals;
        self.frame = frame;
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn despawned(&self) -> u32 { self.despawned }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn active_medals(&self) -> u32 { self.active_medals }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
