//! Domain data: medals, tunables and the cabinet layout.

pub mod medal;
pub mod settings;
pub mod stage;
