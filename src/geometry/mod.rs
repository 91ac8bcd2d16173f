mod bpt;
mod patch;
mod patch_set;
pub mod teapot;

pub use self::patch::{BezierPatch, ControlPoint, SurfaceSample};
pub use self::patch_set::{PatchSet, Tessellation};

/// A parametric surface over the unit square.
pub trait Surface {
    fn evaluate(&self, u: f32, v: f32) -> SurfaceSample;
}

impl Surface for BezierPatch {
    #[inline]
    fn evaluate(&self, u: f32, v: f32) -> SurfaceSample {
        BezierPatch::evaluate(self, u, v)
    }
}
