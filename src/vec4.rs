use std::ops::Index;

use crate::vec3::Vec3;

/// Homogeneous coordinates, as produced by the vertex stage.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec4<T>([T; 4]);

impl<T> Vec4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Vec4([x, y, z, w])
    }

    #[inline]
    pub fn x(&self) -> &T {
        self.index(0)
    }

    #[inline]
    pub fn y(&self) -> &T {
        self.index(1)
    }

    #[inline]
    pub fn z(&self) -> &T {
        self.index(2)
    }

    #[inline]
    pub fn w(&self) -> &T {
        self.index(3)
    }
}

impl<T: Copy> From<[T; 4]> for Vec4<T> {
    #[inline]
    fn from(v: [T; 4]) -> Self {
        Vec4::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Vec3<f32>> for Vec4<f32> {
    /// Promotes a point, `w = 1`.
    #[inline]
    fn from(v: Vec3<f32>) -> Self {
        Vec4::new(v.x, v.y, v.z, 1.0)
    }
}

impl Vec4<f32> {
    /// Drops `w` without dividing by it.
    #[inline]
    pub fn truncate(&self) -> Vec3<f32> {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }

    /// Perspective divide.
    #[inline]
    pub fn project(&self) -> Vec3<f32> {
        let w = self.0[3];
        Vec3::new(self.0[0] / w, self.0[1] / w, self.0[2] / w)
    }
}

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[test]
fn promote_and_project() {
    let v = Vec4::from(Vec3::new(1.0f32, 2.0, 3.0));
    assert_eq!(Vec4::new(1.0, 2.0, 3.0, 1.0), v);

    let h = Vec4::new(2.0f32, 4.0, 6.0, 2.0);
    assert_eq!(Vec3::new(1.0, 2.0, 3.0), h.project());
    assert_eq!(Vec3::new(2.0, 4.0, 6.0), h.truncate());
}
