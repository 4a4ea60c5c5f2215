//! Cabinet layout handed to the host as JSON
//!
//! The host builds meshes and physics aggregates from this description; the
//! engine itself never touches geometry after start-up.

use serde::Serialize;

use crate::core::vec3::Vec3;
use crate::domain::medal::MedalBody;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MotionType {
    Static,
    Dynamic,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsProps {
    pub motion: MotionType,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl PhysicsProps {
    pub const fn fixed(friction: f32) -> Self {
        Self { motion: MotionType::Static, mass: 0.0, friction, restitution: 0.0 }
    }
}

/// Axis-aligned box before yaw, `size` is (width, height, depth)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPart {
    pub name: String,
    pub size: Vec3,
    pub position: Vec3,
    /// Rotation about y (radians)
    pub yaw: f32,
    pub receive_shadows: bool,
    pub cast_shadows: bool,
    pub physics: Option<PhysicsProps>,
}

impl BoxPart {
    fn wall(name: &str, size: Vec3, position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            name: name.to_string(),
            size,
            position,
            yaw: yaw_degrees.to_radians(),
            receive_shadows: true,
            cast_shadows: true,
            physics: Some(PhysicsProps::fixed(0.1)),
        }
    }
}

/// The pusher's collision box is one medal diameter deeper than its mesh so
/// medals cannot slip underneath at the back of the stroke.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PusherPart {
    pub mesh: BoxPart,
    pub collision_size: Vec3,
    pub physics: PhysicsProps,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRig {
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
    pub target: Vec3,
    pub near: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lighting {
    pub hemispheric_direction: Vec3,
    pub directional_direction: Vec3,
    pub directional_intensity: f32,
    pub shadow_map_size: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageLayout {
    pub gravity: Vec3,
    pub housing: BoxPart,
    pub floor: BoxPart,
    pub walls: Vec<BoxPart>,
    pub pusher: PusherPart,
    pub medal: MedalBody,
    pub camera: CameraRig,
    pub lighting: Lighting,
}

impl StageLayout {
    pub fn coin_pusher() -> Self {
        let wall_size = Vec3::new(0.01, 0.05, 0.2);
        let walls = vec![
            BoxPart::wall("wall_center", Vec3::new(0.11, 0.1, 0.02), Vec3::new(0.0, 0.08, 0.08), 0.0),
            BoxPart::wall("wall_left1", wall_size, Vec3::new(0.06, 0.025, 0.1), 0.0),
            BoxPart::wall("wall_left2", wall_size, Vec3::new(0.1051, 0.025, -0.0882), -25.0),
            BoxPart::wall("wall_right1", wall_size, Vec3::new(-0.06, 0.025, 0.1), 0.0),
            BoxPart::wall("wall_right2", wall_size, Vec3::new(-0.1051, 0.025, -0.0882), 25.0),
        ];

        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            housing: BoxPart {
                name: "housing".to_string(),
                size: Vec3::new(0.6, 0.05, 0.37),
                position: Vec3::new(0.0, -0.035, 0.0),
                yaw: 0.0,
                receive_shadows: true,
                cast_shadows: false,
                physics: None,
            },
            floor: BoxPart {
                name: "floor".to_string(),
                size: Vec3::new(0.5, 0.01, 0.37),
                position: Vec3::new(0.0, -0.005, 0.0),
                yaw: 0.0,
                receive_shadows: true,
                cast_shadows: false,
                physics: Some(PhysicsProps::fixed(0.01)),
            },
            walls,
            pusher: PusherPart {
                mesh: BoxPart {
                    name: "pusher".to_string(),
                    size: Vec3::new(0.11, 0.03, 0.1),
                    position: PUSHER_HOME,
                    yaw: 0.0,
                    receive_shadows: true,
                    cast_shadows: false,
                    physics: None,
                },
                collision_size: Vec3::new(0.11, 0.03, 0.12),
                physics: PhysicsProps {
                    motion: MotionType::Dynamic,
                    mass: 10.0,
                    friction: 0.1,
                    restitution: 0.1,
                },
            },
            medal: MedalBody::standard(),
            camera: CameraRig {
                alpha: -std::f32::consts::FRAC_PI_2,
                beta: 70f32.to_radians(),
                radius: 0.5,
                target: Vec3::zero(),
                near: 0.01,
            },
            lighting: Lighting {
                hemispheric_direction: Vec3::new(0.5, 1.0, 0.0),
                directional_direction: Vec3::new(-1.0, -2.0, 2.0),
                directional_intensity: 0.3,
                shadow_map_size: 1024,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}

/// Rest position of the pusher at the back of its stroke
pub const PUSHER_HOME: Vec3 = Vec3::new(0.0, 0.015, 0.05);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_are_static_and_mirrored() {
        let stage = StageLayout::coin_pusher();
        assert_eq!(stage.walls.len(), 5);
        for wall in &stage.walls {
            let physics = wall.physics.expect("walls collide");
            assert_eq!(physics.motion, MotionType::Static);
            assert_eq!(physics.mass, 0.0);
        }

        let left = stage.walls.iter().find(|w| w.name == "wall_left2").unwrap();
        let right = stage.walls.iter().find(|w| w.name == "wall_right2").unwrap();
        assert_eq!(left.position.x, -right.position.x);
        assert_eq!(left.yaw, -right.yaw);
    }

    #[test]
    fn pusher_collision_is_deeper_than_mesh() {
        let pusher = StageLayout::coin_pusher().pusher;
        let extra = pusher.collision_size.z - pusher.mesh.size.z;
        assert!((extra - MedalBody::standard().diameter).abs() < 1e-6);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = StageLayout::coin_pusher().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pusher"]["physics"]["motion"], "dynamic");
        assert_eq!(value["lighting"]["shadowMapSize"], 1024);
        assert!(value["housing"]["physics"].is_null());
        assert!(value["floor"]["receiveShadows"].as_bool().unwrap());
    }
}
