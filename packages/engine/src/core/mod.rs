//! Core building blocks shared by every system: console logging macros,
//! the medal RNG and the small 3D vector type.

#[macro_use]
pub mod utils;
pub mod random;
pub mod vec3;
