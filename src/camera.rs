use crate::config::CameraConfig;
use crate::input::InputState;
use crate::matrix::Matrix4x4;
use crate::vec3::Vec3;

/// Keeps the camera off the poles, where `look_at` has no defined up.
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Perspective camera orbiting a fixed target.
#[derive(Clone, Debug)]
pub struct Camera {
    target: Vec3<f32>,
    /// Radians around +y, 0 looks down -z.
    yaw: f32,
    /// Radians above the horizon.
    pitch: f32,
    distance: f32,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    orbit_speed: f32,
    zoom_speed: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            yaw: config.yaw.to_radians(),
            pitch: 0.0,
            distance: config.distance,
            fov_y: config.fov_y.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            orbit_speed: config.orbit_speed.to_radians(),
            zoom_speed: config.zoom_speed,
        };
        camera.set_pitch(config.pitch.to_radians());
        camera.set_distance(config.distance);
        camera
    }

    pub fn eye(&self) -> Vec3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw).scale(self.distance)
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Applies the orbit and zoom axes for `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        let (yaw, pitch) = input.orbit;

        self.yaw = (self.yaw + yaw * self.orbit_speed * dt) % (2.0 * std::f32::consts::PI);
        self.set_pitch(self.pitch + pitch * self.orbit_speed * dt);
        self.set_distance(self.distance + input.zoom * self.zoom_speed * dt);
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.max(-MAX_PITCH).min(MAX_PITCH);
    }

    fn set_distance(&mut self, distance: f32) {
        self.distance = distance.max(self.near * 2.0).min(self.far / 2.0);
    }

    pub fn view(&self) -> Matrix4x4<f32> {
        Matrix4x4::look_at(self.eye(), self.target, Vec3::UNIT_Y)
    }

    pub fn projection(&self) -> Matrix4x4<f32> {
        Matrix4x4::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Matrix4x4<f32> {
        self.projection() * self.view()
    }
}

#[test]
fn default_camera_looks_at_origin_from_front() {
    let config = CameraConfig {
        pitch: 0.0,
        ..Default::default()
    };
    let camera = Camera::new(&config, 4.0 / 3.0);

    approx::assert_abs_diff_eq!(camera.eye(), Vec3::new(0.0, 0.0, config.distance), epsilon = 1e-6);

    let centre = (&camera.view_projection() * crate::vec4::Vec4::from(Vec3::ZERO)).project();
    approx::assert_abs_diff_eq!(centre.x, 0.0, epsilon = 1e-6);
    approx::assert_abs_diff_eq!(centre.y, 0.0, epsilon = 1e-6);
    assert!(centre.z > -1.0 && centre.z < 1.0);
}

#[test]
fn orbit_and_zoom_follow_input() {
    let config = CameraConfig::default();
    let mut camera = Camera::new(&config, 1.0);
    let input = InputState {
        orbit: (1.0, 0.0),
        zoom: -1.0,
        ..Default::default()
    };

    camera.update(1.0, &input);

    // A quarter turn at the default 90 degrees per second.
    let eye = camera.eye();
    assert!(eye.x > 0.0);
    approx::assert_abs_diff_eq!(eye.z, 0.0, epsilon = 1e-5);
    approx::assert_abs_diff_eq!(camera.distance(), config.distance - config.zoom_speed, epsilon = 1e-6);
}

#[test]
fn pitch_and_distance_are_clamped() {
    let mut camera = Camera::new(&CameraConfig::default(), 1.0);
    let input = InputState {
        orbit: (0.0, 1.0),
        zoom: 1.0,
        ..Default::default()
    };

    camera.update(100.0, &input);

    approx::assert_abs_diff_eq!(camera.pitch(), MAX_PITCH, epsilon = 1e-6);
    approx::assert_abs_diff_eq!(camera.distance(), 50.0, epsilon = 1e-6);
}
