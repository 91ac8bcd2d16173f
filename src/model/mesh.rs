//! Model that owns a triangle mesh and its placement in the world.

use crate::geometry::Tessellation;
use crate::matrix::Matrix4x4;
use crate::model::Material;
use crate::quat::Quat;
use crate::render::{self, Framebuffer, Shader, Uniforms};
use crate::transform::Transform;

pub struct RenderableMesh {
    /// Only replaced wholesale by `build`, never edited in place.
    buffers: Tessellation,
    transform: Transform,
    material: Material,
}

impl RenderableMesh {
    pub fn new(buffers: Tessellation, material: Material, transform: Transform) -> Self {
        Self {
            buffers,
            transform,
            material,
        }
    }

    /// Replaces the geometry, e.g. after re-tessellating at a new resolution.
    pub fn build(&mut self, buffers: Tessellation) {
        self.buffers = buffers;
    }

    #[inline]
    pub fn buffers(&self) -> &Tessellation {
        &self.buffers
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Quat) {
        self.transform.angular_velocity = angular_velocity;
    }

    pub fn update(&mut self, dt: f32) {
        self.transform.update(dt);
    }

    /// Draws the mesh with the camera's combined view-projection and view
    /// matrices. Returns the number of triangles that reached the rasterizer.
    pub fn draw(
        &self,
        view_projection: &Matrix4x4<f32>,
        view: &Matrix4x4<f32>,
        shader: &Shader,
        target: &mut Framebuffer,
    ) -> usize {
        let model = self.transform.model_matrix();
        let uniforms = Uniforms {
            mvp: *view_projection * model,
            mv: *view * model,
            color: self.material.rgba(),
        };

        render::draw(target, shader, &uniforms, &self.buffers)
    }
}

#[test]
fn build_replaces_buffers_only() {
    use crate::geometry::PatchSet;
    use crate::vec3::Vec3;

    let patches = PatchSet::teapot().unwrap();
    let mut mesh = RenderableMesh::new(
        patches.tessellate(2),
        Material::default(),
        Transform::at(Vec3::new(0.0, -1.5, 0.0)),
    );
    mesh.update(0.5);

    mesh.build(patches.tessellate(4));

    assert_eq!(28 * 25, mesh.buffers().vertex_count());
    assert_eq!(Vec3::new(0.0, -1.5, 0.0), mesh.transform().position);
    assert_eq!(Material::default().color, mesh.material().color);
}

#[test]
fn update_integrates_angular_velocity() {
    use crate::vec3::Vec3;

    let mut mesh = RenderableMesh::new(Tessellation::default(), Material::default(), Transform::default());
    mesh.set_angular_velocity(Quat::from_axis_angle(Vec3::UNIT_Y, 45f32.to_radians()));

    mesh.update(1.0);

    approx::assert_abs_diff_eq!(mesh.transform().orientation.angle(), 45f32.to_radians(), epsilon = 1e-5);
}
