use serde::Serialize;

use crate::core::vec3::Vec3;

/// Sequence number of a medal. Initial medals take `0..initial_medals`,
/// dropped medals continue from there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MedalId(pub u32);

impl MedalId {
    /// Name handed to the engine for the medal's mesh instance
    pub fn name(&self) -> String {
        format!("medal{}", self.0)
    }
}

/// A live medal: its identity plus whatever handle the engine gave back
#[derive(Debug)]
pub struct Medal<H> {
    pub id: MedalId,
    pub handle: H,
}

/// Where and how a new medal body should be placed
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub id: MedalId,
    pub position: Vec3,
    /// Rotation about the x axis (radians). Dropped medals enter edge-first.
    pub tilt_x: f32,
}

/// Physical description of a medal body
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedalBody {
    pub height: f32,
    pub diameter: f32,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl MedalBody {
    pub const fn standard() -> Self {
        Self {
            height: 0.003,
            diameter: 0.02,
            mass: 0.02,
            friction: 0.01,
            restitution: 0.1,
        }
    }
}

impl Default for MedalBody {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_uses_sequence_number() {
        assert_eq!(MedalId(0).name(), "medal0");
        assert_eq!(MedalId(103).name(), "medal103");
    }
}
