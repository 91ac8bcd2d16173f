//! Triangle rasterization.
//!
//! Vertices are shaded in parallel, triangles are set up in parallel, and the
//! framebuffer is then split into horizontal bands that are filled in
//! parallel. Each band owns its rows of the colour and depth buffers, so no
//! two threads ever touch the same pixel.

use rayon::prelude::*;

use crate::geometry::Tessellation;
use crate::render::framebuffer::{Framebuffer, BYTES_PER_PIXEL};
use crate::render::shader::{Shader, Uniforms, Varying};
use crate::vec4::Vec4;

/// Rows per parallel band.
const BAND_ROWS: usize = 8;

/// A triangle that survived clipping and culling, in pixel coordinates.
struct ScreenTriangle {
    x: [f32; 3],
    y: [f32; 3],
    /// NDC depth, affine in screen space.
    z: [f32; 3],
    /// `1 / w_clip`, for perspective-correct interpolation.
    inv_w: [f32; 3],
    varyings: [Varying; 3],
    /// Twice the signed screen area.
    area: f32,
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

/// Draws indexed triangles into `target`.
///
/// Triangles that are counter-clockwise in normalized device coordinates
/// are front facing; the rest are culled. Triangles reaching in front of the
/// near plane are dropped whole. Returns the number of triangles rasterized.
pub fn draw(target: &mut Framebuffer, shader: &Shader, uniforms: &Uniforms, mesh: &Tessellation) -> usize {
    let (width, height) = (target.width(), target.height());
    if width == 0 || height == 0 {
        return 0;
    }

    let vertices: Vec<(Vec4<f32>, Varying)> = mesh
        .positions
        .par_iter()
        .zip(mesh.normals.par_iter())
        .map(|(p, n)| shader.vertex(uniforms, p, n))
        .collect();

    let triangles: Vec<ScreenTriangle> = mesh
        .indices
        .par_chunks(3)
        .filter(|tri| tri.len() == 3)
        .filter_map(|tri| {
            let a = &vertices[tri[0] as usize];
            let b = &vertices[tri[1] as usize];
            let c = &vertices[tri[2] as usize];
            setup([a, b, c], width, height)
        })
        .collect();

    let (color, depth) = target.targets_mut();
    color
        .par_chunks_mut(width * BAND_ROWS * BYTES_PER_PIXEL)
        .zip(depth.par_chunks_mut(width * BAND_ROWS))
        .enumerate()
        .for_each(|(band, (color, depth))| {
            let top = band * BAND_ROWS;
            let bottom = top + depth.len() / width;

            for tri in triangles.iter().filter(|t| t.max_y >= top && t.min_y < bottom) {
                for y in tri.min_y.max(top)..=tri.max_y.min(bottom - 1) {
                    let row = y - top;
                    for x in tri.min_x..=tri.max_x {
                        let offset = row * width + x;
                        if let Some((z, varying)) = tri.sample(x as f32 + 0.5, y as f32 + 0.5) {
                            if z >= depth[offset] {
                                continue;
                            }

                            depth[offset] = z;
                            let [r, g, b, _] = shader.fragment(uniforms, &varying);
                            let c = &mut color[offset * BYTES_PER_PIXEL..(offset + 1) * BYTES_PER_PIXEL];
                            c[0] = to_byte(b);
                            c[1] = to_byte(g);
                            c[2] = to_byte(r);
                            c[3] = 0;
                        }
                    }
                }
            }
        });

    log::trace!(
        "rasterized {} of {} triangles",
        triangles.len(),
        mesh.indices.len() / 3
    );

    triangles.len()
}

fn setup(v: [&(Vec4<f32>, Varying); 3], width: usize, height: usize) -> Option<ScreenTriangle> {
    // Anything behind the eye or in front of the near plane.
    if v.iter().any(|(clip, _)| *clip.w() <= 0.0 || *clip.z() < -*clip.w()) {
        return None;
    }

    let ndc = [v[0].0.project(), v[1].0.project(), v[2].0.project()];
    let ndc_area = (ndc[1].x - ndc[0].x) * (ndc[2].y - ndc[0].y) - (ndc[2].x - ndc[0].x) * (ndc[1].y - ndc[0].y);
    if !(ndc_area > 0.0) {
        return None;
    }

    let (w, h) = (width as f32, height as f32);
    let x = [
        (ndc[0].x + 1.0) * 0.5 * w,
        (ndc[1].x + 1.0) * 0.5 * w,
        (ndc[2].x + 1.0) * 0.5 * w,
    ];
    let y = [
        (1.0 - ndc[0].y) * 0.5 * h,
        (1.0 - ndc[1].y) * 0.5 * h,
        (1.0 - ndc[2].y) * 0.5 * h,
    ];

    let (min_x, max_x) = (x[0].min(x[1]).min(x[2]), x[0].max(x[1]).max(x[2]));
    let (min_y, max_y) = (y[0].min(y[1]).min(y[2]), y[0].max(y[1]).max(y[2]));
    if max_x < 0.0 || max_y < 0.0 || min_x >= w || min_y >= h {
        return None;
    }

    let area = edge(x[0], y[0], x[1], y[1], x[2], y[2]);

    Some(ScreenTriangle {
        x,
        y,
        z: [ndc[0].z, ndc[1].z, ndc[2].z],
        inv_w: [1.0 / *v[0].0.w(), 1.0 / *v[1].0.w(), 1.0 / *v[2].0.w()],
        varyings: [v[0].1, v[1].1, v[2].1],
        area,
        min_x: min_x.max(0.0) as usize,
        max_x: (max_x as usize).min(width - 1),
        min_y: min_y.max(0.0) as usize,
        max_y: (max_y as usize).min(height - 1),
    })
}

impl ScreenTriangle {
    /// Depth and interpolated varying at a pixel centre, if it is covered.
    fn sample(&self, px: f32, py: f32) -> Option<(f32, Varying)> {
        let (x, y) = (&self.x, &self.y);

        // Dividing by the signed area makes inside positive for either
        // orientation of the screen space triangle.
        let b0 = edge(x[1], y[1], x[2], y[2], px, py) / self.area;
        let b1 = edge(x[2], y[2], x[0], y[0], px, py) / self.area;
        let b2 = edge(x[0], y[0], x[1], y[1], px, py) / self.area;
        if b0 < 0.0 || b1 < 0.0 || b2 < 0.0 {
            return None;
        }

        let z = b0 * self.z[0] + b1 * self.z[1] + b2 * self.z[2];
        if z > 1.0 {
            return None;
        }

        let w = [b0 * self.inv_w[0], b1 * self.inv_w[1], b2 * self.inv_w[2]];
        let sum = w[0] + w[1] + w[2];
        let varying = Varying::blend(&self.varyings, [w[0] / sum, w[1] / sum, w[2] / sum]);

        Some((z, varying))
    }
}

#[inline]
fn edge(ax: f32, ay: f32, bx: f32, by: f32, px: f32, py: f32) -> f32 {
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

#[inline]
fn to_byte(c: f32) -> u8 {
    (c * 255.0).round().max(0.0).min(255.0) as u8
}

#[cfg(test)]
use image::Rgb;
#[cfg(test)]
use crate::matrix::Matrix4x4;
#[cfg(test)]
use crate::render::shader::PointLight;
#[cfg(test)]
use crate::vec3::Vec3;

#[cfg(test)]
fn unlit_shader() -> Shader {
    let light = PointLight {
        position: Vec3::ZERO,
        color: Vec3::ZERO,
        power: 0.0,
    };
    Shader::new(Box::new(light), Vec3::new(1.0, 1.0, 1.0))
}

#[cfg(test)]
fn flat_uniforms(color: [f32; 4]) -> Uniforms {
    Uniforms {
        mvp: Matrix4x4::identity(),
        mv: Matrix4x4::identity(),
        color,
    }
}

#[cfg(test)]
fn triangle(points: [[f32; 3]; 3]) -> Tessellation {
    Tessellation {
        positions: points.iter().map(|&p| Vec3::from(p)).collect(),
        normals: vec![Vec3::new(0.0, 0.0, 1.0); 3],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn front_facing_triangle_covers_centre() {
    let mut fb = Framebuffer::new(32, 32);
    fb.clear(Rgb([0, 0, 0]));
    let mesh = triangle([[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]]);

    let drawn = draw(&mut fb, &unlit_shader(), &flat_uniforms([1.0, 0.0, 0.0, 1.0]), &mesh);

    assert_eq!(1, drawn);
    assert_eq!(Rgb([255, 0, 0]), fb.pixel(16, 16));
    assert_eq!(0.0, fb.depth(16, 16));
    // Outside the triangle.
    assert_eq!(Rgb([0, 0, 0]), fb.pixel(1, 1));
    assert_eq!(Rgb([0, 0, 0]), fb.pixel(16, 30));
}

#[test]
fn clockwise_triangle_is_culled() {
    let mut fb = Framebuffer::new(32, 32);
    fb.clear(Rgb([0, 0, 0]));
    let mesh = triangle([[-0.5, -0.5, 0.0], [0.0, 0.5, 0.0], [0.5, -0.5, 0.0]]);

    let drawn = draw(&mut fb, &unlit_shader(), &flat_uniforms([1.0; 4]), &mesh);

    assert_eq!(0, drawn);
    assert_eq!(Rgb([0, 0, 0]), fb.pixel(16, 16));
}

#[test]
fn nearer_triangle_wins_in_either_order() {
    let near = triangle([[-1.0, -1.0, -0.5], [1.0, -1.0, -0.5], [0.0, 1.0, -0.5]]);
    let far = triangle([[-1.0, -1.0, 0.5], [1.0, -1.0, 0.5], [0.0, 1.0, 0.5]]);
    let shader = unlit_shader();

    for order in &[[&near, &far], [&far, &near]] {
        let mut fb = Framebuffer::new(16, 16);
        fb.clear(Rgb([0, 0, 0]));

        let colors = [[0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]];
        for (mesh, &color) in order.iter().zip(colors.iter()) {
            draw(&mut fb, &shader, &flat_uniforms(color), mesh);
        }

        let expected = if std::ptr::eq(order[0], &near) {
            Rgb([0, 255, 0])
        } else {
            Rgb([0, 0, 255])
        };
        assert_eq!(expected, fb.pixel(8, 8));
        approx::assert_abs_diff_eq!(fb.depth(8, 8), -0.5, epsilon = 1e-6);
    }
}

#[test]
fn triangles_behind_the_near_plane_are_dropped() {
    let mut fb = Framebuffer::new(16, 16);
    fb.clear(Rgb([0, 0, 0]));
    let mesh = triangle([[-0.5, -0.5, -1.5], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]]);

    assert_eq!(0, draw(&mut fb, &unlit_shader(), &flat_uniforms([1.0; 4]), &mesh));
}

#[test]
fn bands_cover_rows_past_a_multiple_of_band_height() {
    // 13 rows is not a multiple of the band height.
    let mut fb = Framebuffer::new(10, 13);
    fb.clear(Rgb([0, 0, 0]));
    let mesh = Tessellation {
        positions: vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
        normals: vec![Vec3::new(0.0, 0.0, 1.0); 4],
        indices: vec![0, 1, 2, 1, 3, 2],
    };

    assert_eq!(2, draw(&mut fb, &unlit_shader(), &flat_uniforms([1.0; 4]), &mesh));
    for y in 0..13 {
        for x in 0..10 {
            assert_eq!(Rgb([255, 255, 255]), fb.pixel(x, y), "pixel ({}, {})", x, y);
        }
    }
}
