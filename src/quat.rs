use std::ops::Mul;

use crate::{matrix::Matrix4x4, vec3::Vec3};

/// Rotation quaternion, `w + xi + yj + zk`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quat {
    pub w: f32,
    pub v: Vec3<f32>,
}

impl Default for Quat {
    fn default() -> Self {
        Quat::identity()
    }
}

impl Quat {
    #[inline]
    pub const fn identity() -> Self {
        Quat { w: 1.0, v: Vec3::new(0.0, 0.0, 0.0) }
    }

    /// Rotation by `angle` radians counter-clockwise about `axis`, which is
    /// expected to be of unit length.
    pub fn from_axis_angle(axis: Vec3<f32>, angle: f32) -> Self {
        let (sin, cos) = (angle / 2.0).sin_cos();
        Quat { w: cos, v: axis.scale(sin) }
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        (self.w * self.w + self.v.len_sq()).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let norm = self.norm();
        if norm <= f32::EPSILON {
            return Quat::identity();
        }

        Quat { w: self.w / norm, v: self.v.scale(1.0 / norm) }
    }

    /// Rotation angle in radians, in `[0, 2π]`.
    #[inline]
    pub fn angle(&self) -> f32 {
        2.0 * self.w.max(-1.0).min(1.0).acos()
    }

    /// Scales the rotation angle by `t` about the same axis.
    ///
    /// For an angular velocity expressed as rotation-per-second,
    /// `powf(dt)` is the rotation accumulated over `dt` seconds.
    pub fn powf(&self, t: f32) -> Self {
        let q = self.normalize();
        let sin = q.v.len();
        if sin < 1.0e-6 {
            return Quat::identity();
        }

        Quat::from_axis_angle(q.v.scale(1.0 / sin), q.angle() * t)
    }

    pub fn rotate(&self, p: &Vec3<f32>) -> Vec3<f32> {
        let t = self.v.cross(p).scale(2.0);
        *p + t.scale(self.w) + self.v.cross(&t)
    }

    pub fn to_matrix(&self) -> Matrix4x4<f32> {
        let Quat { w, v: Vec3 { x, y, z } } = *self;

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix4x4::new([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy), 0.0],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx), 0.0],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

/// Hamilton product; `a * b` rotates by `b` first, then by `a`.
impl Mul for Quat {
    type Output = Quat;

    fn mul(self, o: Quat) -> Self::Output {
        Quat {
            w: self.w * o.w - self.v.dot(&o.v),
            v: o.v.scale(self.w) + self.v.scale(o.w) + self.v.cross(&o.v),
        }
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for Quat {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.w, &other.w, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

#[test]
fn rotate_quarter_turn_about_y() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Y, std::f32::consts::FRAC_PI_2);
    let p = q.rotate(&Vec3::new(1.0, 0.0, 0.0));

    approx::assert_abs_diff_eq!(p, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
}

#[test]
fn matrix_agrees_with_rotate() {
    let axis = Vec3::new(1.0, 2.0, -0.5).unit();
    let q = Quat::from_axis_angle(axis, 1.1);
    let p = Vec3::new(0.3, -2.0, 4.0);

    approx::assert_abs_diff_eq!(q.to_matrix().transform_point(&p), q.rotate(&p), epsilon = 1e-5);
}

#[test]
fn product_composes_rotations() {
    let a = Quat::from_axis_angle(Vec3::UNIT_Y, 0.4);
    let b = Quat::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), -0.7);
    let p = Vec3::new(1.0, 2.0, 3.0);

    approx::assert_abs_diff_eq!((a * b).rotate(&p), a.rotate(&b.rotate(&p)), epsilon = 1e-5);
}

#[test]
fn powf_scales_angle() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Y, 0.8);

    approx::assert_abs_diff_eq!(q.powf(0.5), Quat::from_axis_angle(Vec3::UNIT_Y, 0.4), epsilon = 1e-6);
    approx::assert_abs_diff_eq!(q.powf(0.0), Quat::identity(), epsilon = 1e-6);
    approx::assert_abs_diff_eq!(Quat::identity().powf(3.0), Quat::identity(), epsilon = 1e-6);
}
