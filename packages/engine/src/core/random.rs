//! Random numbers for medal placement
//!
//! Placement only needs a uniform `[0, 1)` source; the default generator is
//! xorshift32, the same cheap generator the rest of the engine state uses.

/// Uniform source of values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// Xorshift32 step
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Xorshift32 generator. A zero state is a fixed point, so seeds of 0 are
/// replaced by a default.
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub const DEFAULT_SEED: u32 = 12345;

    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { Self::DEFAULT_SEED } else { seed };
        Self { state }
    }

    /// Seed from the wall clock (browser `Date.now()` on wasm32)
    pub fn from_clock() -> Self {
        #[cfg(target_arch = "wasm32")]
        let millis = js_sys::Date::now() as u64;
        #[cfg(not(target_arch = "wasm32"))]
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self::new((millis ^ (millis >> 32)) as u32)
    }

    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly, so 1.0 is never produced.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Uniform value in `[min, max]`. A degenerate interval returns `min`
/// without consuming randomness.
pub fn random_number<R: RandomSource + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min == max {
        return min;
    }
    min + rng.next_unit() * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_interval_returns_min() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..100 {
            assert_eq!(random_number(&mut rng, 0.22, 0.22), 0.22);
            assert_eq!(random_number(&mut rng, -3.0, -3.0), -3.0);
        }
    }

    #[test]
    fn degenerate_interval_does_not_advance_state() {
        let mut a = Xorshift32::new(99);
        let mut b = Xorshift32::new(99);
        random_number(&mut a, 1.0, 1.0);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn unit_interval_stays_half_open() {
        let mut rng = Xorshift32::new(1);
        for _ in 0..100_000 {
            let v = random_number(&mut rng, 0.0, 1.0);
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn unit_interval_is_roughly_uniform() {
        const BUCKETS: usize = 10;
        const SAMPLES: usize = 100_000;
        let mut rng = Xorshift32::new(2024);
        let mut counts = [0usize; BUCKETS];
        for _ in 0..SAMPLES {
            let v = random_number(&mut rng, 0.0, 1.0);
            counts[((v * BUCKETS as f32) as usize).min(BUCKETS - 1)] += 1;
        }

        // Chi-square with 9 degrees of freedom; 27.88 is the 0.001 critical value.
        let expected = (SAMPLES / BUCKETS) as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(chi2 < 27.88, "chi2 = {}, counts = {:?}", chi2, counts);
    }

    #[test]
    fn scaled_interval_respects_bounds() {
        let mut rng = Xorshift32::new(3);
        for _ in 0..10_000 {
            let v = random_number(&mut rng, -0.03, 0.03);
            assert!(v >= -0.03 && v <= 0.03);
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }
}
