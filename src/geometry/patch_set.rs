use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::patch::{BezierPatch, ControlPoint};
use crate::geometry::{bpt, teapot, Surface};
use crate::vec3::Vec3;

/// Floats per patch in a flat control point table, 16 points of `x y z`.
pub const FLOATS_PER_PATCH: usize = 16 * 3;

/// Flat triangle buffers: matching position and normal arrays plus a `u32`
/// index buffer, three indices per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tessellation {
    pub positions: Vec<Vec3<f32>>,
    pub normals: Vec<Vec3<f32>>,
    pub indices: Vec<u32>,
}

impl Tessellation {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends `other`, shifting its indices past the vertices already here.
    fn append(&mut self, other: Tessellation) {
        let offset = self.positions.len() as u32;

        self.positions.extend(other.positions);
        self.normals.extend(other.normals);
        self.indices.extend(other.indices.into_iter().map(|i| i + offset));
    }
}

/// The ordered patches making up one object.
#[derive(Clone, Debug)]
pub struct PatchSet {
    patches: Vec<BezierPatch>,
}

impl PatchSet {
    /// Builds a set from one slice of control points per patch.
    ///
    /// Any invalid patch fails the whole set, as does an empty one.
    pub fn new<I, P>(patches: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[ControlPoint]>,
    {
        let patches = patches
            .into_iter()
            .enumerate()
            .map(|(index, points)| BezierPatch::new(index, points.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        if patches.is_empty() {
            return Err(Error::invalid_patch(0, "patch set has no patches"));
        }

        Ok(Self { patches })
    }

    /// Builds a set from a flat table of [`FLOATS_PER_PATCH`] floats per patch.
    pub fn from_flat(table: &[f32]) -> Result<Self> {
        if table.len() % FLOATS_PER_PATCH != 0 {
            return Err(Error::invalid_patch(
                table.len() / FLOATS_PER_PATCH,
                format!(
                    "table has {} trailing floats, expected {} per patch",
                    table.len() % FLOATS_PER_PATCH,
                    FLOATS_PER_PATCH
                ),
            ));
        }

        PatchSet::new(table.chunks(FLOATS_PER_PATCH).map(|patch| {
            patch
                .chunks(3)
                .map(|p| Vec3::new(p[0], p[1], p[2]))
                .collect::<Vec<_>>()
        }))
    }

    /// The built-in Utah teapot.
    pub fn teapot() -> Result<Self> {
        PatchSet::from_flat(&teapot::CONTROL_POINTS)
    }

    /// Reads a `.bpt` Bézier patch file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        PatchSet::new(bpt::parse(&text)?)
    }

    #[inline]
    pub fn patches(&self) -> &[BezierPatch] {
        &self.patches
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Samples every patch on a uniform `(N + 1)²` grid and triangulates it.
    ///
    /// Each patch contributes `(N + 1)²` vertices and `2N²` triangles, in
    /// patch order. Vertices on edges shared between patches are repeated,
    /// each with the normal of its own patch. A resolution of 0 is treated
    /// as 1.
    pub fn tessellate(&self, resolution: u32) -> Tessellation {
        let n = resolution.max(1);

        self.patches
            .par_iter()
            .map(|patch| tessellate_patch(patch, n))
            .collect::<Vec<_>>()
            .into_iter()
            .fold(Tessellation::default(), |mut mesh, part| {
                mesh.append(part);
                mesh
            })
    }
}

fn tessellate_patch<S: Surface>(patch: &S, n: u32) -> Tessellation {
    let side = n + 1;
    let step = 1.0 / n as f32;

    let mut mesh = Tessellation {
        positions: Vec::with_capacity((side * side) as usize),
        normals: Vec::with_capacity((side * side) as usize),
        indices: Vec::with_capacity((6 * n * n) as usize),
    };

    for i in 0..side {
        for j in 0..side {
            // Exact endpoints, so that edges do not move with the resolution.
            let u = if i == n { 1.0 } else { i as f32 * step };
            let v = if j == n { 1.0 } else { j as f32 * step };

            let sample = patch.evaluate(u, v);
            mesh.positions.push(sample.position);
            mesh.normals.push(sample.normal);
        }
    }

    // a = (i, j), b = (i + 1, j), c = (i, j + 1), d = (i + 1, j + 1).
    // Both triangles turn from u towards v, i.e. counter-clockwise around
    // the outward normal, and share the b-c diagonal.
    for i in 0..n {
        for j in 0..n {
            let a = i * side + j;
            let b = a + side;
            let c = a + 1;
            let d = b + 1;

            mesh.indices.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }

    mesh
}

#[cfg(test)]
fn wavy_points(seed: f32) -> Vec<Vec3<f32>> {
    (0..16)
        .map(|k| {
            let (i, j) = ((k / 4) as f32, (k % 4) as f32);
            Vec3::new(i, j, (seed + i * 0.9 - j * 1.3).sin())
        })
        .collect()
}

#[test]
fn sample_and_triangle_counts() {
    let set = PatchSet::new(vec![wavy_points(0.0), wavy_points(2.0)]).unwrap();

    for &n in &[1u32, 2, 5, 16] {
        let mesh = set.tessellate(n);
        let per_patch = ((n + 1) * (n + 1)) as usize;

        assert_eq!(2 * per_patch, mesh.vertex_count());
        assert_eq!(mesh.vertex_count(), mesh.normals.len());
        assert_eq!(2 * 2 * (n * n) as usize, mesh.triangle_count());
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }
}

#[test]
fn patches_keep_their_order_and_points() {
    let points = vec![wavy_points(0.0), wavy_points(1.0), wavy_points(2.0)];
    let set = PatchSet::new(points.clone()).unwrap();

    assert_eq!(3, set.len());
    for (index, patch) in set.patches().iter().enumerate() {
        assert_eq!(index, patch.index());
        assert_eq!(&points[index][..], &patch.control_points()[..]);
    }
}

#[test]
fn second_patch_indices_are_offset() {
    let set = PatchSet::new(vec![wavy_points(0.0), wavy_points(1.0)]).unwrap();
    let mesh = set.tessellate(3);

    let half = mesh.indices.len() / 2;
    assert!(mesh.indices[..half].iter().all(|&i| i < 16));
    assert!(mesh.indices[half..].iter().all(|&i| i >= 16 && i < 32));
}

#[test]
fn resolution_does_not_move_shared_samples() {
    let set = PatchSet::new(vec![wavy_points(0.5)]).unwrap();
    let coarse = set.tessellate(2);
    let fine = set.tessellate(8);

    // Grid point (i, j) at resolution 2 is (4i, 4j) at resolution 8.
    for i in 0..3 {
        for j in 0..3 {
            let c = coarse.positions[i * 3 + j];
            let f = fine.positions[(4 * i) * 9 + 4 * j];
            approx::assert_abs_diff_eq!(c, f, epsilon = 1e-6);
        }
    }
}

#[test]
fn triangles_wind_around_outward_normals() {
    let set = PatchSet::teapot().unwrap();
    let mesh = set.tessellate(6);

    let mut agreeing = 0;
    let mut checked = 0;
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (mesh.positions[b] - mesh.positions[a]).cross(&(mesh.positions[c] - mesh.positions[a]));
        // Slivers around the lid pole carry no reliable orientation.
        if face.len_sq() < 1e-6 {
            continue;
        }

        let normal = mesh.normals[a] + mesh.normals[b] + mesh.normals[c];
        checked += 1;
        if face.dot(&normal) > 0.0 {
            agreeing += 1;
        }
    }

    assert!(checked > mesh.triangle_count() / 2);
    assert!(agreeing * 100 >= checked * 99, "{} of {}", agreeing, checked);
}

#[test]
fn flat_patch_tessellates_with_one_normal() {
    let set = PatchSet::new(vec![(0..16)
        .map(|k| Vec3::new((k % 4) as f32, 0.0, (k / 4) as f32 * 0.7))
        .collect::<Vec<_>>()])
    .unwrap();

    let mesh = set.tessellate(7);
    let first = mesh.normals[0];
    approx::assert_abs_diff_eq!(first.len(), 1.0, epsilon = 1e-6);
    for normal in &mesh.normals {
        approx::assert_abs_diff_eq!(*normal, first, epsilon = 1e-6);
    }
}

#[test]
fn teapot_normals_are_unit_and_finite() {
    let set = PatchSet::teapot().unwrap();
    assert_eq!(teapot::PATCH_COUNT, set.len());

    let mesh = set.tessellate(10);
    for normal in &mesh.normals {
        assert!(normal.is_finite());
        approx::assert_abs_diff_eq!(normal.len(), 1.0, epsilon = 1e-4);
    }
}

#[test]
fn empty_set_is_rejected() {
    let patches: Vec<Vec<Vec3<f32>>> = Vec::new();

    match PatchSet::new(patches) {
        Err(Error::InvalidPatchData { .. }) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn short_patch_fails_whole_set() {
    let mut short = wavy_points(0.0);
    short.pop();

    match PatchSet::new(vec![wavy_points(1.0), short, wavy_points(2.0)]) {
        Err(Error::InvalidPatchData { patch, .. }) => assert_eq!(1, patch),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn truncated_flat_table_is_rejected() {
    let mut table: Vec<f32> = wavy_points(0.0).iter().flat_map(|p| p.to_array().to_vec()).collect();
    table.extend_from_slice(&[1.0, 2.0, 3.0]);

    assert!(PatchSet::from_flat(&table).is_err());
    assert!(PatchSet::from_flat(&[]).is_err());
}
