use std::f32::consts::FRAC_PI_2;

/// Sine ease-in on `[0, 1]`
#[inline]
pub fn sine_ease_in(t: f32) -> f32 {
    1.0 - (FRAC_PI_2 * (1.0 - t)).sin()
}

/// Sine ease-in-out: ease-in over the first half, mirrored over the second
#[inline]
pub fn sine_ease_in_out(t: f32) -> f32 {
    if t >= 0.5 {
        (1.0 - sine_ease_in((1.0 - t) * 2.0)) * 0.5 + 0.5
    } else {
        sine_ease_in(t * 2.0) * 0.5
    }
}
