use crate::{matrix::Matrix4x4, quat::Quat, vec3::Vec3};

/// Placement of an object in the world.
///
/// Mutated once per frame by its owner through [`Transform::update`]; the
/// renderer only ever reads it through [`Transform::model_matrix`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3<f32>,
    pub orientation: Quat,
    /// Rotation per second.
    pub angular_velocity: Quat,
}

impl Transform {
    pub fn at(position: Vec3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Integrates the angular velocity over `dt` seconds.
    ///
    /// The orientation is renormalized on every step so that rounding does
    /// not accumulate into a non-unit quaternion.
    pub fn update(&mut self, dt: f32) {
        let step = self.angular_velocity.powf(dt);
        self.orientation = (step * self.orientation).normalize();
    }

    pub fn model_matrix(&self) -> Matrix4x4<f32> {
        Matrix4x4::translation(self.position) * self.orientation.to_matrix()
    }
}

#[test]
fn constant_angular_velocity_over_one_second() {
    let mut transform = Transform::default();
    transform.angular_velocity = Quat::from_axis_angle(Vec3::UNIT_Y, 45f32.to_radians());

    // One second split into uneven frames.
    for dt in &[0.25, 0.1, 0.4, 0.25] {
        transform.update(*dt);
    }

    let rotated = transform.orientation.rotate(&Vec3::new(1.0, 0.0, 0.0));
    let half = std::f32::consts::FRAC_1_SQRT_2;

    approx::assert_abs_diff_eq!(rotated, Vec3::new(half, 0.0, -half), epsilon = 1e-5);
    approx::assert_abs_diff_eq!(transform.orientation.angle(), 45f32.to_radians(), epsilon = 1e-5);
}

#[test]
fn orientation_stays_unit_length() {
    let mut transform = Transform::default();
    transform.angular_velocity = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 3.0);

    for _ in 0..10_000 {
        transform.update(1.0 / 60.0);
    }

    approx::assert_abs_diff_eq!(transform.orientation.norm(), 1.0, epsilon = 1e-5);
}

#[test]
fn model_matrix_rotates_then_translates() {
    let mut transform = Transform::at(Vec3::new(0.0, -1.5, 0.0));
    transform.orientation = Quat::from_axis_angle(Vec3::UNIT_Y, std::f32::consts::PI);

    let p = transform.model_matrix().transform_point(&Vec3::new(1.0, 0.0, 0.0));

    approx::assert_abs_diff_eq!(p, Vec3::new(-1.0, -1.5, 0.0), epsilon = 1e-6);
}
