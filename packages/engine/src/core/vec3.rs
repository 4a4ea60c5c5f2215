use serde::{Deserialize, Serialize};

/// 3D vector in engine units (metres, y up)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Linear interpolation, exact at both ends: `t = 0` gives `self`,
    /// `t = 1` gives `other`
    pub fn lerp(&self, other: Vec3, t: f32) -> Self {
        *self * (1.0 - t) + other * t
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends_and_midpoint() {
        let a = Vec3::new(0.0, 0.015, 0.05);
        let b = Vec3::new(0.0, 0.015, 0.12);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.z - 0.085).abs() < 1e-6);
    }

    #[test]
    fn lerp_end_is_exact_for_uneven_values() {
        let a = Vec3::new(0.1, -0.035, 0.05);
        let b = Vec3::new(0.3, 0.22, 0.12);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(b.lerp(a, 1.0), a);
    }

    #[test]
    fn nan_component_is_not_finite() {
        assert!(Vec3::new(0.0, 1.0, 2.0).is_finite());
        assert!(!Vec3::new(0.0, f32::NAN, 2.0).is_finite());
    }
}
