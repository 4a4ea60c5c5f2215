/// Accumulates frame time and fires once the interval is reached.
///
/// Firing resets the accumulator to zero rather than carrying the overshoot,
/// so at most one medal drops per frame however long the frame was.
#[derive(Clone, Debug)]
pub struct SpawnTimer {
    interval_ms: f64,
    elapsed_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, elapsed_ms: 0.0 }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Add frame time; returns true when a spawn is due
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0.0;
            return true;
        }
        false
    }
}
