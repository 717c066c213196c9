use std::f64::consts::PI;

use crate::foundation::core::Affine;

/// Horizontal shear that gives a layer its parallelogram silhouette.
///
/// The `c` slot carries `(angle / 180) * PI` directly; this is a skew factor, not `tan(angle)`.
pub fn shear(angle_deg: f64) -> Affine {
    Affine::new([1.0, 0.0, (angle_deg / 180.0) * PI, 1.0, 0.0, 0.0])
}

/// Denominator floor for speed-derived durations.
pub(crate) fn speed_floor(speed: f64) -> f64 {
    speed.max(1.0)
}

/// `ceil(total / unit)` as a count; zero when either side is not positive.
pub(crate) fn ceil_count(total: f64, unit: f64) -> usize {
    if !total.is_finite() || !unit.is_finite() || total <= 0.0 || unit <= 0.0 {
        return 0;
    }
    (total / unit).ceil() as usize
}
