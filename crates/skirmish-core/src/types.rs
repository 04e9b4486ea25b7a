//! Fundamental geometric types.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// 3D vector in simulation space. Value type: every operation returns
/// a new instance, there is no shared mutable vector state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm. Returns 0 for the zero vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Unit vector in this vector's direction.
    ///
    /// Normalizing a zero-length vector is a checked error, never a
    /// silent NaN.
    pub fn to_unit(&self) -> Result<Vec3, SimError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(SimError::DivisionByZero);
        }
        Ok(Vec3::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Unit vector pointing from this point toward another.
    /// Fails like [`Vec3::to_unit`] when the two points coincide.
    pub fn normal_toward(&self, other: &Vec3) -> Result<Vec3, SimError> {
        (*other - *self).to_unit()
    }

    /// Angle in radians `[0, π]` between this vector and another, both
    /// taken relative to the origin. The cosine is clamped before
    /// `acos` so rounding can never produce NaN.
    pub fn angle_between(&self, other: &Vec3) -> Result<f64, SimError> {
        let mags = self.magnitude() * other.magnitude();
        if mags == 0.0 {
            return Err(SimError::DivisionByZero);
        }
        Ok((self.dot(other) / mags).clamp(-1.0, 1.0).acos())
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

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}
