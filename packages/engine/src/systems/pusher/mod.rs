//! Pusher block motion
//!
//! The pusher slides forward and back on a fixed looping track. The track is
//! sampled from accumulated frame time and the result handed to the engine.

mod easing;
mod track;

pub use easing::{sine_ease_in, sine_ease_in_out};
pub use track::{Keyframe, PusherAnimator, PusherTrack};
