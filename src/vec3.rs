use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Deserializer};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(v: [T; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Vec3<T> {
    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Vec3<f32> {
    pub const ZERO: Vec3<f32> = Vec3::new(0.0, 0.0, 0.0);
    pub const UNIT_Y: Vec3<f32> = Vec3::new(0.0, 1.0, 0.0);

    #[inline]
    pub fn len_sq(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn len(&self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The result is not finite for a zero vector; callers that can see one
    /// must check `len_sq` first.
    #[inline]
    pub fn unit(&self) -> Vec3<f32> {
        let len = self.len();

        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, other: Vec3<T>) {
        *self = *self + other;
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, factor: T) -> Self::Output {
        self.scale(factor)
    }
}

/// Vectors are written as plain `[x, y, z]` triples in scene files.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vec3<T> {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z) = Deserialize::deserialize(de)?;

        Ok(Vec3 { x, y, z })
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for Vec3<f32> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.x, &other.x, epsilon)
            && f32::abs_diff_eq(&self.y, &other.y, epsilon)
            && f32::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

#[test]
fn cross_is_right_handed() {
    let x = Vec3::new(1.0f32, 0.0, 0.0);
    let y = Vec3::new(0.0f32, 1.0, 0.0);

    assert_eq!(Vec3::new(0.0, 0.0, 1.0), x.cross(&y));
    assert_eq!(Vec3::new(0.0, 0.0, -1.0), y.cross(&x));
}

#[test]
fn unit_has_length_one() {
    let v = Vec3::new(3.0f32, -4.0, 12.0).unit();

    approx::assert_abs_diff_eq!(v.len(), 1.0, epsilon = 1e-6);
    approx::assert_abs_diff_eq!(v, Vec3::new(3.0 / 13.0, -4.0 / 13.0, 12.0 / 13.0), epsilon = 1e-6);
}

#[test]
fn deserialize_from_triple() {
    let v: Vec3<f32> = serde_json::from_str("[0.0, -1.5, 2]").unwrap();

    assert_eq!(Vec3::new(0.0, -1.5, 2.0), v);
}
