use crate::core::vec3::Vec3;
use crate::domain::stage::PUSHER_HOME;

use super::easing::sine_ease_in_out;

/// Keyframe position at an animation frame. The segment starting at a key is
/// eased with sine ease-in-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub frame: f32,
    pub position: Vec3,
}

/// Looping keyframe track
#[derive(Clone, Debug)]
pub struct PusherTrack {
    keys: Vec<Keyframe>,
    frames_per_second: f32,
}

impl PusherTrack {
    pub const FRAMES_PER_SECOND: f32 = 30.0;
    /// Forward travel of one stroke
    pub const STROKE: f32 = 0.12 - 0.05;

    /// Home, forward by one stroke at frame 120, home again at frame 240
    pub fn stroke_from(home: Vec3) -> Self {
        let forward = home + Vec3::new(0.0, 0.0, Self::STROKE);
        Self::new(
            vec![
                Keyframe { frame: 0.0, position: home },
                Keyframe { frame: 120.0, position: forward },
                Keyframe { frame: 240.0, position: home },
            ],
            Self::FRAMES_PER_SECOND,
        )
    }

    /// Keys must be sorted by frame and start at frame 0. A track with fewer
    /// than two keys is static.
    pub fn new(keys: Vec<Keyframe>, frames_per_second: f32) -> Self {
        debug_assert!(keys.windows(2).all(|w| w[0].frame < w[1].frame));
        Self { keys, frames_per_second }
    }

    /// Length of one loop in milliseconds
    pub fn period_ms(&self) -> f64 {
        match self.keys.last() {
            Some(last) if self.frames_per_second > 0.0 => {
                last.frame as f64 / self.frames_per_second as f64 * 1000.0
            }
            _ => 0.0,
        }
    }

    /// Position at `elapsed_ms` into the (looping) track
    pub fn sample(&self, elapsed_ms: f64) -> Vec3 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return PUSHER_HOME,
        };
        let period = self.period_ms();
        if self.keys.len() < 2 || period <= 0.0 {
            return first.position;
        }

        let t = elapsed_ms.rem_euclid(period);
        let frame = (t / 1000.0 * self.frames_per_second as f64) as f32;

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if frame < b.frame {
                let gradient = ((frame - a.frame) / (b.frame - a.frame)).clamp(0.0, 1.0);
                return a.position.lerp(b.position, sine_ease_in_out(gradient));
            }
        }
        last.position
    }
}

/// Accumulates frame time and samples the track
#[derive(Clone, Debug)]
pub struct PusherAnimator {
    track: PusherTrack,
    elapsed_ms: f64,
}

impl PusherAnimator {
    pub fn new(track: PusherTrack) -> Self {
        Self { track, elapsed_ms: 0.0 }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn position(&self) -> Vec3 {
        self.track.sample(self.elapsed_ms)
    }

    pub fn advance(&mut self, delta_ms: f64) -> Vec3 {
        self.elapsed_ms += delta_ms;
        // Wrap to keep precision over long sessions.
        let period = self.track.period_ms();
        if period > 0.0 && self.elapsed_ms >= period {
            self.elapsed_ms = self.elapsed_ms.rem_euclid(period);
        }
        self.position()
    }
}

impl Default for PusherAnimator {
    fn default() -> Self {
        Self::new(PusherTrack::stroke_from(PUSHER_HOME))
    }
}
