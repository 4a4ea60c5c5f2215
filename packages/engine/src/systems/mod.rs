//! Per-frame systems driven by the simulation core.

pub mod lifecycle;
pub mod placement;
pub mod pusher;
pub mod view;
