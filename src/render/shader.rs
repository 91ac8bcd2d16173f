//! The shading stage: a vertex stage that moves mesh data into clip and eye
//! space, and a fragment stage that lights it with a single point light.

use crate::matrix::Matrix4x4;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// Per-draw inputs shared by every vertex and fragment.
#[derive(Copy, Clone, Debug)]
pub struct Uniforms {
    /// Model-view-projection, object space to clip space.
    pub mvp: Matrix4x4<f32>,
    /// Model-view, object space to eye space. Also transforms normals.
    pub mv: Matrix4x4<f32>,
    /// Flat RGBA object colour in `[0, 1]`.
    pub color: [f32; 4],
}

/// Vertex stage outputs, interpolated across each triangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Varying {
    /// Eye space position.
    pub position: Vec3<f32>,
    /// Eye space normal, not normalized after interpolation.
    pub normal: Vec3<f32>,
}

impl Varying {
    /// Weighted sum of three varyings.
    #[inline]
    pub fn blend(v: &[Varying; 3], w: [f32; 3]) -> Varying {
        Varying {
            position: v[0].position.scale(w[0]) + v[1].position.scale(w[1]) + v[2].position.scale(w[2]),
            normal: v[0].normal.scale(w[0]) + v[1].normal.scale(w[1]) + v[2].normal.scale(w[2]),
        }
    }
}

pub trait Light {
    /// Diffuse light arriving at `point` on a surface facing `normal`, both in
    /// eye space, as an RGB triple.
    fn illuminate(&self, point: &Vec3<f32>, normal: &Vec3<f32>) -> Vec3<f32>;
}

/// Lambertian point light with inverse-square falloff.
#[derive(Copy, Clone, Debug)]
pub struct PointLight {
    /// Eye space position.
    pub position: Vec3<f32>,
    pub color: Vec3<f32>,
    pub power: f32,
}

impl Light for PointLight {
    fn illuminate(&self, point: &Vec3<f32>, normal: &Vec3<f32>) -> Vec3<f32> {
        let l = self.position - *point;
        let distance_sq = l.len_sq();
        if distance_sq <= f32::EPSILON {
            return Vec3::ZERO;
        }

        let intensity = normal.dot(&l.scale(1.0 / distance_sq.sqrt())).max(0.0).min(1.0);

        self.color.scale(intensity * self.power / distance_sq)
    }
}

pub struct Shader {
    light: Box<dyn Light + Sync>,
    ambient: Vec3<f32>,
}

impl Shader {
    pub fn new(light: Box<dyn Light + Sync>, ambient: Vec3<f32>) -> Self {
        Self { light, ambient }
    }

    pub fn vertex(&self, uniforms: &Uniforms, position: &Vec3<f32>, normal: &Vec3<f32>) -> (Vec4<f32>, Varying) {
        let clip = &uniforms.mvp * Vec4::from(*position);
        let varying = Varying {
            position: uniforms.mv.transform_point(position),
            normal: uniforms.mv.transform_normal(normal),
        };

        (clip, varying)
    }

    /// `(diffuse + ambient) * color`, clamped to `[0, 1]`.
    pub fn fragment(&self, uniforms: &Uniforms, varying: &Varying) -> [f32; 4] {
        let normal = if varying.normal.len_sq() > 0.0 {
            varying.normal.unit()
        } else {
            Vec3::ZERO
        };

        let light = self.light.illuminate(&varying.position, &normal) + self.ambient;
        let [r, g, b, a] = uniforms.color;

        [clamp(light.x * r), clamp(light.y * g), clamp(light.z * b), a]
    }
}

#[inline]
fn clamp(c: f32) -> f32 {
    c.max(0.0).min(1.0)
}

#[cfg(test)]
fn test_uniforms(color: [f32; 4]) -> Uniforms {
    Uniforms {
        mvp: Matrix4x4::identity(),
        mv: Matrix4x4::identity(),
        color,
    }
}

#[test]
fn point_light_falls_off_with_distance_squared() {
    let light = PointLight {
        position: Vec3::new(0.0, 0.0, 2.0),
        color: Vec3::new(1.0, 0.5, 0.25),
        power: 8.0,
    };
    let normal = Vec3::new(0.0, 0.0, 1.0);

    let near = light.illuminate(&Vec3::ZERO, &normal);
    let far = light.illuminate(&Vec3::new(0.0, 0.0, -2.0), &normal);

    approx::assert_abs_diff_eq!(near, Vec3::new(2.0, 1.0, 0.5), epsilon = 1e-6);
    approx::assert_abs_diff_eq!(far, near.scale(0.25), epsilon = 1e-6);
}

#[test]
fn surfaces_facing_away_get_no_diffuse_light() {
    let light = PointLight {
        position: Vec3::new(0.0, 0.0, 2.0),
        color: Vec3::new(1.0, 1.0, 1.0),
        power: 1.0,
    };

    let lit = light.illuminate(&Vec3::ZERO, &Vec3::new(0.0, 0.0, -1.0));

    assert_eq!(Vec3::ZERO, lit);
}

#[test]
fn fragment_adds_ambient_and_tints() {
    let light = PointLight {
        position: Vec3::new(0.0, 3.0, 0.0),
        color: Vec3::new(1.0, 1.0, 1.0),
        power: 4.5,
    };
    let shader = Shader::new(Box::new(light), Vec3::new(0.1, 0.1, 0.1));
    let uniforms = test_uniforms([1.0, 0.5, 0.0, 1.0]);

    // Normal at 60 degrees to the light, 3 units away: 0.5 * 4.5 / 9.
    let varying = Varying {
        position: Vec3::ZERO,
        normal: Vec3::new(3f32.sqrt(), 1.0, 0.0).scale(2.0),
    };
    let color = shader.fragment(&uniforms, &varying);

    approx::assert_abs_diff_eq!(color[0], 0.35, epsilon = 1e-5);
    approx::assert_abs_diff_eq!(color[1], 0.175, epsilon = 1e-5);
    approx::assert_abs_diff_eq!(color[2], 0.0, epsilon = 1e-6);
    approx::assert_abs_diff_eq!(color[3], 1.0, epsilon = 1e-6);
}

#[test]
fn fragment_saturates() {
    let light = PointLight {
        position: Vec3::new(0.0, 0.0, 0.1),
        color: Vec3::new(1.0, 1.0, 1.0),
        power: 10.0,
    };
    let shader = Shader::new(Box::new(light), Vec3::ZERO);
    let varying = Varying {
        position: Vec3::ZERO,
        normal: Vec3::new(0.0, 0.0, 1.0),
    };

    assert_eq!([1.0, 1.0, 1.0, 1.0], shader.fragment(&test_uniforms([1.0; 4]), &varying));
}

#[test]
fn vertex_stage_uses_both_matrices() {
    let shader = Shader::new(
        Box::new(PointLight {
            position: Vec3::ZERO,
            color: Vec3::ZERO,
            power: 0.0,
        }),
        Vec3::ZERO,
    );
    let uniforms = Uniforms {
        mvp: Matrix4x4::translation(Vec3::new(0.0, 0.0, 1.0)),
        mv: Matrix4x4::translation(Vec3::new(5.0, 0.0, 0.0)),
        color: [1.0; 4],
    };

    let (clip, varying) = shader.vertex(&uniforms, &Vec3::new(1.0, 2.0, 3.0), &Vec3::UNIT_Y);

    assert_eq!(Vec4::new(1.0, 2.0, 4.0, 1.0), clip);
    assert_eq!(Vec3::new(6.0, 2.0, 3.0), varying.position);
    // Translation does not touch directions.
    assert_eq!(Vec3::UNIT_Y, varying.normal);
}
