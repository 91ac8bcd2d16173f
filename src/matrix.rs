use std::ops::{Add, Mul};

use crate::{vec3::Vec3, vec4::Vec4};

/// Row-major 4x4 matrix acting on column vectors, `M * v`.
///
/// Index notation is: i, j - row, column.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix4x4<T>([Vec4<T>; 4]);

impl<T: Copy> Matrix4x4<T> {
    pub fn new(v: [[T; 4]; 4]) -> Self {
        Matrix4x4([Vec4::from(v[0]), Vec4::from(v[1]), Vec4::from(v[2]), Vec4::from(v[3])])
    }
}

impl Matrix4x4<f32> {
    pub fn identity() -> Self {
        Matrix4x4::new([[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0]])
    }

    pub fn translation(t: Vec3<f32>) -> Self {
        Matrix4x4::new([
            [1.0, 0.0, 0.0, t.x],
            [0.0, 1.0, 0.0, t.y],
            [0.0, 0.0, 1.0, t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed perspective projection into OpenGL clip space, where the
    /// visible depth range maps to `[-1, 1]` after the perspective divide.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let depth = near - far;

        Matrix4x4::new([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) / depth, 2.0 * far * near / depth],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Right-handed view matrix looking from `eye` at `target`.
    pub fn look_at(eye: Vec3<f32>, target: Vec3<f32>, up: Vec3<f32>) -> Self {
        let f = (target - eye).unit();
        let s = f.cross(&up).unit();
        let u = s.cross(&f);

        Matrix4x4::new([
            [s.x, s.y, s.z, -s.dot(&eye)],
            [u.x, u.y, u.z, -u.dot(&eye)],
            [-f.x, -f.y, -f.z, f.dot(&eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Transforms a point, ignoring any projective part.
    pub fn transform_point(&self, p: &Vec3<f32>) -> Vec3<f32> {
        (self * Vec4::from(*p)).truncate()
    }

    /// Applies the upper 3x3 block to a direction.
    ///
    /// This is not the inverse transpose, so it is only correct for rigid
    /// transforms and uniform scale.
    pub fn transform_normal(&self, n: &Vec3<f32>) -> Vec3<f32> {
        let m = &self.0;
        Vec3 {
            x: m[0][0] * n.x + m[0][1] * n.y + m[0][2] * n.z,
            y: m[1][0] * n.x + m[1][1] * n.y + m[1][2] * n.z,
            z: m[2][0] * n.x + m[2][1] * n.y + m[2][2] * n.z,
        }
    }
}

impl<'a, T: Copy + Add<Output = T> + Mul<Output = T>> Mul<Vec4<T>> for &'a Matrix4x4<T> {
    type Output = Vec4<T>;

    fn mul(self, vec: Vec4<T>) -> Self::Output {
        let row = |i: usize| {
            vec[0] * self.0[i][0] + vec[1] * self.0[i][1] + vec[2] * self.0[i][2] + vec[3] * self.0[i][3]
        };

        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Matrix4x4<f32>> for Matrix4x4<f32> {
    type Output = Matrix4x4<f32>;

    fn mul(self, o: Matrix4x4<f32>) -> Self::Output {
        let mut out = [[0.0f32; 4]; 4];

        for (i, row) in out.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                for k in 0..4 {
                    *v += self.0[i][k] * o.0[k][j];
                }
            }
        }

        Matrix4x4::new(out)
    }
}

#[test]
fn mul_matrix_vec() {
    let matrix = &Matrix4x4::new([[1, 0, 0, 10], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]);
    let vec = Vec4::new(10, 10, 10, 1);

    assert_eq!(Vec4::new(20, 10, 10, 1), matrix * vec);
}

#[test]
fn mul_identity() {
    let t = Matrix4x4::translation(Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(t, Matrix4x4::identity() * t);
    assert_eq!(t, t * Matrix4x4::identity());
}

#[test]
fn look_at_moves_eye_to_origin() {
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let view = Matrix4x4::look_at(eye, Vec3::ZERO, Vec3::UNIT_Y);

    approx::assert_abs_diff_eq!(view.transform_point(&eye), Vec3::ZERO, epsilon = 1e-6);
    // The target lies straight ahead, down -z.
    approx::assert_abs_diff_eq!(view.transform_point(&Vec3::ZERO), Vec3::new(0.0, 0.0, -5.0), epsilon = 1e-6);
}

#[test]
fn perspective_maps_near_and_far_planes() {
    let p = Matrix4x4::perspective(60f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);

    let near = (&p * Vec4::new(0.0, 0.0, -0.1, 1.0)).project();
    let far = (&p * Vec4::new(0.0, 0.0, -100.0, 1.0)).project();

    approx::assert_abs_diff_eq!(near.z, -1.0, epsilon = 1e-4);
    approx::assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-4);
}
