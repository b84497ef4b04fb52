use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector in scene units.
///
/// Scenes use a centered coordinate frame: the origin is the middle of the
/// screen, +x is right, +y is up. Storyboard literals are written with the
/// direction constants, e.g. `Vec2::LEFT * 5.0` or `Vec2::RIGHT * 3.0 +
/// Vec2::UP * 2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ORIGIN: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const UP: Vec2 = Vec2 { x: 0.0, y: 1.0 };
    pub const DOWN: Vec2 = Vec2 { x: 0.0, y: -1.0 };
    pub const LEFT: Vec2 = Vec2 { x: -1.0, y: 0.0 };
    pub const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two vectors.
    pub fn lerp(&self, other: &Vec2, t: f64) -> Vec2 {
        Vec2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance to another vector.
    pub fn distance(&self, other: &Vec2) -> f64 {
        (*other - *self).length()
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// A 2D transform applied to a mobject: position, per-axis scale, rotation,
/// and opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Position of the mobject center, in scene units.
    pub position: Vec2,
    /// Scale factors.
    pub scale: Vec2,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f64,
    /// Opacity (0.0–1.0).
    pub opacity: f64,
}

impl Transform2D {
    /// Identity transform: origin, unit scale, no rotation, fully opaque.
    pub fn identity() -> Self {
        Self {
            position: Vec2::ORIGIN,
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            opacity: 1.0,
        }
    }

    /// Linear interpolation between two transforms.
    pub fn lerp(&self, other: &Transform2D, t: f64) -> Transform2D {
        let t = t.clamp(0.0, 1.0);
        Transform2D {
            position: self.position.lerp(&other.position, t),
            scale: self.scale.lerp(&other.scale, t),
            rotation: self.rotation + (other.rotation - self.rotation) * t,
            opacity: self.opacity + (other.opacity - self.opacity) * t,
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_algebra() {
        let p = Vec2::LEFT * 5.0 + Vec2::UP * 0.5;
        assert!((p.x + 5.0).abs() < 0.001);
        assert!((p.y - 0.5).abs() < 0.001);
        assert_eq!(-Vec2::RIGHT, Vec2::LEFT);
    }

    #[test]
    fn test_vec2_lerp() {
        let a = Vec2::ORIGIN;
        let b = Vec2::new(10.0, 20.0);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.x - 5.0).abs() < 0.001);
        assert!((mid.y - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_length_and_distance() {
        assert!((Vec2::new(3.0, 4.0).length() - 5.0).abs() < 0.001);
        assert!((Vec2::ORIGIN.distance(&Vec2::new(0.0, 2.0)) - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_transform_identity() {
        let t = Transform2D::identity();
        assert_eq!(t.position, Vec2::ORIGIN);
        assert_eq!(t.scale, Vec2::new(1.0, 1.0));
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn test_transform_lerp() {
        let a = Transform2D::identity();
        let mut b = Transform2D::identity();
        b.position = Vec2::new(100.0, 200.0);
        b.opacity = 0.0;
        let mid = a.lerp(&b, 0.5);
        assert!((mid.position.x - 50.0).abs() < 0.001);
        assert!((mid.opacity - 0.5).abs() < 0.001);
    }
}
