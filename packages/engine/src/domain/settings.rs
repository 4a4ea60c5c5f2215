//! Pusher tunables
//!
//! Every field has a default matching the stock cabinet, so a host can pass
//! `{}` or a partial object and only override what it cares about.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

pub const SPAWN_INTERVAL_MS: f64 = 3000.0;
pub const DESPAWN_THRESHOLD_Y: f32 = -0.5;
pub const MEDAL_VALUE: u32 = 10;
pub const INITIAL_MEDALS: u32 = 100;
/// Largest initial pile a config may ask for
pub const MAX_INITIAL_MEDALS: u32 = 10_000;

/// Closed interval sampled per axis by the placement helper
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f32) -> Self {
        Self { min: value, max: value }
    }

    fn validate(&self, field: &str) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(format!("{}: bounds must be finite", field));
        }
        if self.min > self.max {
            return Err(format!("{}: min {} is greater than max {}", field, self.min, self.max));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PusherConfig {
    /// Time between dropped medals
    pub spawn_interval_ms: f64,
    /// Medals whose y falls below this are scored and removed
    pub despawn_threshold_y: f32,
    /// Points per scored medal, also the display multiplier for inserts
    pub medal_value: u32,
    pub initial_medals: u32,
    /// Centre of the initial pile on the playfield
    pub initial_spawn_point: Vec3,
    pub initial_jitter_x: Span,
    pub initial_jitter_y: Span,
    pub initial_jitter_z: Span,
    /// Horizontal span of the drop slot
    pub drop_span_x: Span,
    pub drop_height: f32,
    pub drop_depth: f32,
    pub drop_tilt_x: f32,
    /// Fixed RNG seed, `None` seeds from the clock
    pub seed: Option<u32>,
}

impl Default for PusherConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            despawn_threshold_y: DESPAWN_THRESHOLD_Y,
            medal_value: MEDAL_VALUE,
            initial_medals: INITIAL_MEDALS,
            initial_spawn_point: Vec3::new(0.0, 0.01, -0.08),
            initial_jitter_x: Span::new(-0.03, 0.03),
            initial_jitter_y: Span::new(-0.008, 0.012),
            initial_jitter_z: Span::new(-0.03, 0.03),
            drop_span_x: Span::new(-0.03, 0.03),
            drop_height: 0.22,
            drop_depth: 0.05,
            drop_tilt_x: FRAC_PI_2,
            seed: None,
        }
    }
}

impl PusherConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: PusherConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain numbers and options only, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms <= 0.0 {
            return Err(format!(
                "spawnIntervalMs must be positive, got {}",
                self.spawn_interval_ms
            ));
        }
        if !self.despawn_threshold_y.is_finite() {
            return Err("despawnThresholdY must be finite".to_string());
        }
        if self.medal_value == 0 {
            return Err("medalValue must be at least 1".to_string());
        }
        if self.initial_medals > MAX_INITIAL_MEDALS {
            return Err(format!(
                "initialMedals must be at most {}, got {}",
                MAX_INITIAL_MEDALS, self.initial_medals
            ));
        }
        if !self.initial_spawn_point.is_finite() {
            return Err("initialSpawnPoint must be finite".to_string());
        }
        self.initial_jitter_x.validate("initialJitterX")?;
        self.initial_jitter_y.validate("initialJitterY")?;
        self.initial_jitter_z.validate("initialJitterZ")?;
        self.drop_span_x.validate("dropSpanX")?;
        if !self.drop_height.is_finite() || !self.drop_depth.is_finite() || !self.drop_tilt_x.is_finite() {
            return Err("drop height, depth and tilt must be finite".to_string());
        }
        Ok(())
    }
}
