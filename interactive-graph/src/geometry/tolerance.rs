// Centralized tolerances for coordinate comparisons

pub const EPS_POS: f64 = 1e-9;            // point coincidence threshold (graph units)
pub const EPS_LEN: f64 = 1e-12;           // zero-length vector threshold

#[inline] pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 { x.max(lo).min(hi) }
#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

/// A step that disables snapping on its axis.
#[inline]
pub fn is_snap_disabled(step: f64) -> bool { step == 0.0 || !step.is_finite() }
