//! Bicubic Bézier patch evaluation.

use crate::error::{Error, Result};
use crate::vec3::Vec3;

pub type ControlPoint = Vec3<f32>;

/// Relative tolerance on squared lengths. Two vectors are parallel when
/// `|a × b|² <= EPSILON |a|² |b|²`, and a tangent vanishes when
/// `|t|² <= EPSILON` times the squared extent of the control net.
static EPSILON: f32 = 1.0e-10;

/// Parametric distances, in increasing order, at which a degenerate normal is
/// looked up again, stepping towards the centre of the patch.
static FALLBACK_STEPS: [f32; 6] = [1.0e-4, 1.0e-3, 1.0e-2, 0.05, 0.25, 1.0];

/// Surface position and unit normal at one `(u, v)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceSample {
    pub position: Vec3<f32>,
    pub normal: Vec3<f32>,
}

/// One bicubic patch: a 4x4 grid of control points, stored row-major.
///
/// `u` runs across rows and `v` across columns, so point `4 * i + j` sits in
/// row `i`, column `j`. With that layout the normal `∂P/∂u × ∂P/∂v` points
/// out of the surface when the triangles built over the `(u, v)` grid are
/// wound counter-clockwise.
#[derive(Clone, Debug)]
pub struct BezierPatch {
    index: usize,
    points: [ControlPoint; 16],
    /// Squared distance from the first control point to the farthest one.
    extent_sq: f32,
    /// Normal of the control net, the last resort for degenerate samples.
    net_normal: Vec3<f32>,
}

impl BezierPatch {
    /// Builds patch `index` from exactly 16 control points.
    ///
    /// Fails if the point count is wrong or if all of the points are
    /// collinear, in which case no normal is defined anywhere.
    pub fn new(index: usize, points: &[ControlPoint]) -> Result<Self> {
        if points.len() != 16 {
            return Err(Error::invalid_patch(
                index,
                format!("expected 16 control points, got {}", points.len()),
            ));
        }

        if points.iter().any(|p| !p.is_finite()) {
            return Err(Error::invalid_patch(index, "control point is not finite"));
        }

        let mut grid = [ControlPoint::default(); 16];
        grid.copy_from_slice(points);

        if is_collinear(&grid) {
            return Err(Error::invalid_patch(index, "control points are collinear"));
        }

        Ok(Self {
            index,
            points: grid,
            extent_sq: extent_sq(&grid),
            net_normal: net_normal(&grid),
        })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn control_points(&self) -> &[ControlPoint; 16] {
        &self.points
    }

    /// Corner points in `(u, v)` order: `(0, 0)`, `(1, 0)`, `(0, 1)`, `(1, 1)`.
    pub fn corners(&self) -> [ControlPoint; 4] {
        [self.points[0], self.points[12], self.points[3], self.points[15]]
    }

    /// Evaluates position and normal at `(u, v)` in `[0, 1]²`.
    ///
    /// Where the tangents are parallel or vanish (e.g. at the pole of a
    /// surface of revolution) the normal is taken from the closest
    /// non-degenerate neighbour towards the patch centre instead.
    pub fn evaluate(&self, u: f32, v: f32) -> SurfaceSample {
        let (position, du, dv) = self.derivatives(u, v);

        let normal = match self.surface_normal(&du, &dv) {
            Some(normal) => normal,
            None => self.fallback_normal(u, v),
        };

        SurfaceSample { position, normal }
    }

    /// Position plus the partial derivatives along `u` and `v`.
    pub fn derivatives(&self, u: f32, v: f32) -> (Vec3<f32>, Vec3<f32>, Vec3<f32>) {
        let bu = bernstein(u);
        let du = bernstein_derivative(u);

        // Collapse the rows at `u`, leaving one cubic curve in `v` for the
        // position and one for the `u` tangent.
        let mut curve = [Vec3::ZERO; 4];
        let mut curve_du = [Vec3::ZERO; 4];
        for j in 0..4 {
            for i in 0..4 {
                let p = self.points[4 * i + j];
                curve[j] += p.scale(bu[i]);
                curve_du[j] += p.scale(du[i]);
            }
        }

        let bv = bernstein(v);
        let dv = bernstein_derivative(v);

        let mut position = Vec3::ZERO;
        let mut tangent_u = Vec3::ZERO;
        let mut tangent_v = Vec3::ZERO;
        for j in 0..4 {
            position += curve[j].scale(bv[j]);
            tangent_u += curve_du[j].scale(bv[j]);
            tangent_v += curve[j].scale(dv[j]);
        }

        (position, tangent_u, tangent_v)
    }

    fn fallback_normal(&self, u: f32, v: f32) -> Vec3<f32> {
        let towards_centre = |t: f32| if t < 0.5 { 1.0 } else { -1.0 };
        let (su, sv) = (towards_centre(u), towards_centre(v));

        for step in FALLBACK_STEPS.iter() {
            // Stay inside the patch and do not overshoot its centre.
            let nu = u + su * step.min((0.5 - u).abs());
            let nv = v + sv * step.min((0.5 - v).abs());

            // Try moving along each direction alone first, so that a sample on
            // a degenerate edge picks up the normal right next to it.
            for &(nu, nv) in &[(u, nv), (nu, v), (nu, nv)] {
                let (_, du, dv) = self.derivatives(nu, nv);
                if let Some(normal) = self.surface_normal(&du, &dv) {
                    log::trace!(
                        "patch {}: degenerate normal at ({}, {}), using ({}, {})",
                        self.index,
                        u,
                        v,
                        nu,
                        nv
                    );
                    return normal;
                }
            }
        }

        log::trace!("patch {}: degenerate normal at ({}, {}), using control net", self.index, u, v);
        self.net_normal
    }

    /// Unit `du × dv`, or `None` where a tangent vanishes on the scale of
    /// this patch or the tangents are parallel.
    fn surface_normal(&self, du: &Vec3<f32>, dv: &Vec3<f32>) -> Option<Vec3<f32>> {
        let floor = EPSILON * self.extent_sq;
        if du.len_sq() <= floor || dv.len_sq() <= floor {
            return None;
        }

        unit_cross(du, dv)
    }
}

/// Cubic Bernstein basis at `t`.
#[inline]
pub fn bernstein(t: f32) -> [f32; 4] {
    let mt = 1.0 - t;
    [mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t]
}

/// Derivative of the cubic Bernstein basis at `t`.
///
/// Blending control points with these weights gives
/// `3[(1 - t)²(P1 - P0) + 2t(1 - t)(P2 - P1) + t²(P3 - P2)]`.
#[inline]
pub fn bernstein_derivative(t: f32) -> [f32; 4] {
    let mt = 1.0 - t;
    [
        -3.0 * mt * mt,
        3.0 * mt * mt - 6.0 * t * mt,
        6.0 * t * mt - 3.0 * t * t,
        3.0 * t * t,
    ]
}

/// Unit `a × b`, unless `a` and `b` are parallel or either is zero.
#[inline]
fn unit_cross(a: &Vec3<f32>, b: &Vec3<f32>) -> Option<Vec3<f32>> {
    let normal = a.cross(b);
    let mag_sq = normal.len_sq();

    if !(mag_sq > EPSILON * a.len_sq() * b.len_sq()) || !mag_sq.is_finite() {
        None
    } else {
        Some(normal.scale(1.0 / mag_sq.sqrt()))
    }
}

fn extent_sq(points: &[ControlPoint; 16]) -> f32 {
    let origin = points[0];
    points.iter().fold(0.0, |extent, p| extent.max((*p - origin).len_sq()))
}

fn is_collinear(points: &[ControlPoint; 16]) -> bool {
    let origin = points[0];
    let far = points.iter().fold(origin, |far, p| {
        if (*p - origin).len_sq() > (far - origin).len_sq() {
            *p
        } else {
            far
        }
    });

    let axis = far - origin;
    let axis_sq = axis.len_sq();
    if !(axis_sq > 0.0) {
        return true;
    }

    // Distances off the axis, relative to the size of the net.
    points
        .iter()
        .all(|p| axis.cross(&(*p - origin)).len_sq() <= EPSILON * axis_sq * axis_sq)
}

/// Sum of the unit normals of the control net quads, each split along the
/// same diagonal the tessellation uses.
fn net_normal(points: &[ControlPoint; 16]) -> Vec3<f32> {
    let mut sum = Vec3::ZERO;
    for i in 0..3 {
        for j in 0..3 {
            let a = points[4 * i + j];
            let b = points[4 * (i + 1) + j];
            let c = points[4 * i + j + 1];
            let d = points[4 * (i + 1) + j + 1];

            let halves = [unit_cross(&(b - a), &(c - a)), unit_cross(&(d - b), &(c - b))];
            for n in halves.iter().flatten() {
                sum += *n;
            }
        }
    }

    if sum.len_sq() < EPSILON {
        Vec3::UNIT_Y
    } else {
        sum.unit()
    }
}

#[cfg(test)]
pub(crate) fn grid_patch(f: impl Fn(f32, f32) -> Vec3<f32>) -> BezierPatch {
    let points: Vec<_> = (0..16).map(|k| f((k / 4) as f32, (k % 4) as f32)).collect();
    BezierPatch::new(0, &points).unwrap()
}

#[test]
fn corners_are_interpolated() {
    let patch = grid_patch(|i, j| Vec3::new(i, j, (i * 1.7 - j).sin() + i * j * 0.3));
    let [p00, p10, p01, p11] = patch.corners();

    approx::assert_abs_diff_eq!(patch.evaluate(0.0, 0.0).position, p00, epsilon = 1e-6);
    approx::assert_abs_diff_eq!(patch.evaluate(1.0, 0.0).position, p10, epsilon = 1e-6);
    approx::assert_abs_diff_eq!(patch.evaluate(0.0, 1.0).position, p01, epsilon = 1e-6);
    approx::assert_abs_diff_eq!(patch.evaluate(1.0, 1.0).position, p11, epsilon = 1e-6);
}

#[test]
fn flat_patch_has_constant_normal() {
    // Uneven spacing inside the plane must not tilt the normal.
    let patch = grid_patch(|i, j| Vec3::new(i * i * 0.5 + j * 0.1, j + i * 0.2, 0.0));

    for &(u, v) in &[(0.0, 0.0), (0.3, 0.7), (1.0, 0.5), (0.5, 1.0), (1.0, 1.0)] {
        let sample = patch.evaluate(u, v);
        approx::assert_abs_diff_eq!(sample.normal, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }
}

#[test]
fn tangents_match_central_differences() {
    let patch = grid_patch(|i, j| Vec3::new(i, j, (i - 1.5) * (j - 1.5) * 0.4));
    let h = 1.0e-2;

    let (_, du, dv) = patch.derivatives(0.4, 0.6);
    let fd_u = (patch.evaluate(0.4 + h, 0.6).position - patch.evaluate(0.4 - h, 0.6).position).scale(0.5 / h);
    let fd_v = (patch.evaluate(0.4, 0.6 + h).position - patch.evaluate(0.4, 0.6 - h).position).scale(0.5 / h);

    approx::assert_abs_diff_eq!(du, fd_u, epsilon = 1e-3);
    approx::assert_abs_diff_eq!(dv, fd_v, epsilon = 1e-3);
}

#[test]
fn degenerate_pole_falls_back_to_neighbour() {
    // A dome: row 0 collapses into a single pole at the top, and row 1 stays
    // level with it so the cap is flat around the pole.
    let patch = grid_patch(|i, j| {
        let angle = j / 3.0 * std::f32::consts::FRAC_PI_2;
        let radius = i / 3.0;
        let height = if i < 2.0 { 1.0 } else { 1.0 - radius * radius };
        Vec3::new(radius * angle.cos(), height, radius * angle.sin())
    });

    for &v in &[0.0, 0.25, 0.5, 1.0] {
        let sample = patch.evaluate(0.0, v);

        assert!(sample.normal.is_finite());
        approx::assert_abs_diff_eq!(sample.normal.len(), 1.0, epsilon = 1e-5);
        // Upwards or downwards, never sideways.
        assert!(sample.normal.y.abs() > 0.99, "{:?}", sample.normal);
        approx::assert_abs_diff_eq!(sample.normal, patch.evaluate(1.0e-3, v).normal, epsilon = 1e-2);
    }
}

#[test]
fn normals_do_not_depend_on_model_scale() {
    let saddle = |scale: f32| grid_patch(move |i, j| Vec3::new(i, j, (i - 1.5) * (j - 1.5) * 0.8).scale(scale));
    let unit = saddle(1.0);
    let tiny = saddle(1.0e-4);

    for &(u, v) in &[(0.0, 0.0), (0.1, 0.1), (0.5, 0.9), (1.0, 0.3)] {
        let expected = unit.evaluate(u, v).normal;
        approx::assert_abs_diff_eq!(tiny.evaluate(u, v).normal, expected, epsilon = 1e-4);
    }
    assert!(tiny.evaluate(0.1, 0.1).normal.y.abs() < 0.9);
}

#[test]
fn wrong_point_count_is_rejected() {
    let points = vec![Vec3::new(0.0, 0.0, 0.0); 15];

    match BezierPatch::new(7, &points) {
        Err(Error::InvalidPatchData { patch, .. }) => assert_eq!(7, patch),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn collinear_points_are_rejected() {
    let points: Vec<_> = (0..16).map(|k| Vec3::new(k as f32, 2.0 * k as f32, 0.0)).collect();

    assert!(BezierPatch::new(0, &points).is_err());
}

#[test]
fn bernstein_partition_of_unity() {
    for &t in &[0.0, 0.2, 0.5, 0.9, 1.0] {
        approx::assert_abs_diff_eq!(bernstein(t).iter().sum::<f32>(), 1.0, epsilon = 1e-6);
        approx::assert_abs_diff_eq!(bernstein_derivative(t).iter().sum::<f32>(), 0.0, epsilon = 1e-6);
    }
}
