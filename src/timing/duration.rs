use crate::{
    config::{ShimmerConfig, ShimmerStyle},
    foundation::math::speed_floor,
};

/// Geometry the duration formulas read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DurationInputs {
    pub container_width: f64,
    /// Band layer width from the most recent layout pass; `0` before the first one.
    pub band_layer_width: f64,
    /// Entries in the tiled palette currently on the band.
    pub tiled_colors: usize,
}

/// Playback duration in seconds.
///
/// With a speed, `ColorsFlow` prefers the laid-out band width (which may lag one layout pass
/// behind) and only falls back to `tiled_colors * band_width` when nothing is laid out yet.
/// Every other style divides the container width. Without a speed the configured period is used.
pub fn resolve_duration(cfg: &ShimmerConfig, inputs: &DurationInputs) -> f64 {
    let Some(speed) = cfg.speed else {
        return cfg.period_secs;
    };
    let denom = speed_floor(speed);
    let secs = match cfg.style {
        ShimmerStyle::ColorsFlow => {
            let w = inputs.band_layer_width.max(inputs.container_width);
            if w > 0.0 {
                w / denom
            } else {
                inputs.tiled_colors as f64 * cfg.band_width / denom
            }
        }
        _ => inputs.container_width / denom,
    };
    tracing::trace!(style = ?cfg.style, speed, secs, "resolved duration");
    secs
}

#[cfg(test)]
#[path = "../../tests/unit/timing/duration.rs"]
mod tests;
