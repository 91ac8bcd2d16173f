use image::Rgb;

use crate::camera::Camera;
use crate::config::{Config, PatchSource};
use crate::error::Result;
use crate::geometry::PatchSet;
use crate::input::InputState;
use crate::model::{linear, RenderableMesh};
use crate::quat::Quat;
use crate::render::{Framebuffer, PointLight, Shader};
use crate::transform::Transform;
use crate::vec3::Vec3;

/// Owns everything drawn in a frame and the order it is updated in.
pub struct Scene {
    patches: PatchSet,
    mesh: RenderableMesh,
    camera: Camera,
    shader: Shader,
    resolution: u32,
    max_resolution: u32,
    /// Radians per second.
    rotation_speed: f32,
    background: Rgb<u8>,
}

impl Scene {
    pub fn new(config: &Config) -> Result<Self> {
        let patches = match &config.patches {
            PatchSource::Teapot => PatchSet::teapot()?,
            PatchSource::File(path) => PatchSet::load(path)?,
        };

        let max_resolution = config.max_resolution.max(1);
        let resolution = config.resolution.max(1).min(max_resolution);
        let buffers = patches.tessellate(resolution);
        log::info!(
            "{} patches at resolution {}: {} vertices, {} triangles",
            patches.len(),
            resolution,
            buffers.vertex_count(),
            buffers.triangle_count()
        );

        let mesh = RenderableMesh::new(buffers, config.material, Transform::at(config.position));

        let aspect = config.window.width.max(1) as f32 / config.window.height.max(1) as f32;
        let camera = Camera::new(&config.camera, aspect);

        let light = PointLight {
            position: config.light.position,
            color: linear(config.light.color),
            power: config.light.power,
        };
        let shader = Shader::new(Box::new(light), linear(config.ambient));

        Ok(Self {
            patches,
            mesh,
            camera,
            shader,
            resolution,
            max_resolution,
            rotation_speed: config.rotation_speed.to_radians(),
            background: config.background,
        })
    }

    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[inline]
    pub fn mesh(&self) -> &RenderableMesh {
        &self.mesh
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Advances the scene by `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        let angle = self.rotation_speed * input.rotate;
        self.mesh.set_angular_velocity(Quat::from_axis_angle(Vec3::UNIT_Y, angle));

        if input.resolution_step != 0 {
            self.set_resolution(self.resolution as i64 + input.resolution_step as i64);
        }

        self.camera.update(dt, input);
        self.mesh.update(dt);
    }

    fn set_resolution(&mut self, resolution: i64) {
        let resolution = resolution.max(1).min(self.max_resolution as i64) as u32;
        if resolution == self.resolution {
            return;
        }

        self.resolution = resolution;
        let buffers = self.patches.tessellate(resolution);
        log::info!(
            "resolution {}: {} vertices, {} triangles",
            resolution,
            buffers.vertex_count(),
            buffers.triangle_count()
        );
        self.mesh.build(buffers);
    }

    pub fn draw(&self, target: &mut Framebuffer) {
        target.clear(self.background);

        let drawn = self.mesh.draw(
            &self.camera.view_projection(),
            &self.camera.view(),
            &self.shader,
            target,
        );
        log::trace!("drew {} triangles", drawn);
    }
}

#[cfg(test)]
fn small_config() -> Config {
    let mut config = Config::default();
    config.resolution = 4;
    config.max_resolution = 6;
    config.window.width = 64;
    config.window.height = 48;
    config
}

#[test]
fn new_tessellates_the_teapot() {
    let scene = Scene::new(&small_config()).unwrap();

    assert_eq!(4, scene.resolution());
    assert_eq!(28 * 25, scene.mesh().buffers().vertex_count());
    assert_eq!(28 * 2 * 16, scene.mesh().buffers().triangle_count());
    assert_eq!(Vec3::new(0.0, -1.5, 0.0), scene.mesh().transform().position);
}

#[test]
fn resolution_steps_rebuild_and_clamp() {
    let mut scene = Scene::new(&small_config()).unwrap();

    let up = InputState {
        resolution_step: 5,
        ..Default::default()
    };
    scene.update(0.0, &up);
    assert_eq!(6, scene.resolution());
    assert_eq!(28 * 49, scene.mesh().buffers().vertex_count());

    let down = InputState {
        resolution_step: -100,
        ..Default::default()
    };
    scene.update(0.0, &down);
    assert_eq!(1, scene.resolution());
    assert_eq!(28 * 4, scene.mesh().buffers().vertex_count());
}

#[test]
fn holding_right_turns_at_rotation_speed() {
    let mut scene = Scene::new(&small_config()).unwrap();
    let right = InputState {
        rotate: 1.0,
        ..Default::default()
    };

    for _ in 0..4 {
        scene.update(0.25, &right);
    }

    let orientation = scene.mesh().transform().orientation;
    approx::assert_abs_diff_eq!(orientation.angle(), 45f32.to_radians(), epsilon = 1e-5);

    // Releasing the key stops the rotation.
    scene.update(1.0, &InputState::default());
    approx::assert_abs_diff_eq!(scene.mesh().transform().orientation, orientation, epsilon = 1e-6);
}

#[test]
fn draw_puts_the_teapot_in_the_middle() {
    let config = small_config();
    let scene = Scene::new(&config).unwrap();
    let mut fb = Framebuffer::new(config.window.width, config.window.height);

    scene.draw(&mut fb);

    assert_ne!(config.background, fb.pixel(32, 24));
    assert_eq!(config.background, fb.pixel(0, 0));
    assert_eq!(config.background, fb.pixel(63, 47));
}
