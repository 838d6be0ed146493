use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Right-handed, Z-up world: X forward, Y left, Z up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

pub const AXIS_UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub const AXIS_FORWARD: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const AXIS_BACK: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
pub const AXIS_LEFT: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const AXIS_RIGHT: Vec3 = Vec3::new(0.0, -1.0, 0.0);

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` for a degenerate input.
    pub fn normalize_or_zero(self) -> Vec3 {
        let len_sq = self.length_squared();
        if len_sq <= f32::EPSILON {
            return Vec3::ZERO;
        }
        self * (1.0 / len_sq.sqrt())
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_constants_are_unit_length() {
        for axis in [AXIS_UP, AXIS_FORWARD, AXIS_BACK, AXIS_LEFT, AXIS_RIGHT] {
            assert!((axis.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn opposite_axes_cancel() {
        assert_eq!(AXIS_FORWARD + AXIS_BACK, Vec3::ZERO);
        assert_eq!(AXIS_LEFT + AXIS_RIGHT, Vec3::ZERO);
    }

    #[test]
    fn normalize_handles_degenerate_input() {
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);

        let unit = Vec3::new(3.0, 0.0, 4.0).normalize_or_zero();
        assert!((unit.length() - 1.0).abs() < 1e-6);
        assert!((unit.x - 0.6).abs() < 1e-6);
        assert!((unit.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn scaling_and_dot_products() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(v.dot(AXIS_UP), 3.0);
        assert_eq!(-v, Vec3::new(-1.0, -2.0, -3.0));
    }
}
