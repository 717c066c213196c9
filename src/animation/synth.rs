//! Keyframe synthesis.
//!
//! Pure functions from a configuration plus resolved layout to the static band layer and
//! the timelines that animate it. Nothing here touches a render target.

use crate::{
    animation::timeline::{Keyframes, Timeline, Timing, TranslationTimeline},
    config::{ShimmerConfig, ShimmerStyle},
    foundation::{
        core::{Affine, Color},
        math::shear,
    },
    geometry::resolver::{LayerFrames, TextMetrics},
    palette::tiler::{coverage_width, tile_palette},
    timing::{
        curve::{CalculationMode, FillMode, Repeat},
        duration::{DurationInputs, resolve_duration},
    },
};

pub const INDICATOR_SHEAR_DEG: f64 = -30.0;
pub const FLOW_SHEAR_DEG: f64 = 45.0;
/// Indicator sweeps start this long after installation.
pub const INDICATOR_DELAY_SECS: f64 = 0.5;

pub const BLINK_VALUES: [f64; 4] = [1.0, 1.0, 0.25, 0.25];
pub const BLINK_KEY_TIMES: [f64; 4] = [0.0, 0.80, 0.95, 1.0];
pub const BLINK_DURATION_SECS: f64 = 1.0;

/// Soft-edged gradient of the indicator band: `[clear, opaque, opaque, clear]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BandShape {
    pub colors: [Color; 4],
    pub locations: [f64; 4],
}

impl BandShape {
    pub fn indicator(band_width: f64, edge_radius: f64) -> Self {
        let r = if band_width > 0.0 {
            (edge_radius / band_width) * 0.5
        } else {
            0.0
        };
        Self {
            colors: [Color::TRANSPARENT, Color::WHITE, Color::WHITE, Color::TRANSPARENT],
            locations: [0.0, 0.5 - r, 0.5 + r, 1.0],
        }
    }
}

/// Static state of the band layer and the text mask for one style.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BandLayer {
    pub colors: Vec<Color>,
    /// Gradient stop positions; `None` spreads stops evenly.
    pub locations: Option<Vec<f64>>,
    pub background: Color,
    pub band_transform: Affine,
    pub mask_transform: Affine,
    pub frames: LayerFrames,
}

/// Layout-side inputs that are not part of the configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthesisContext {
    pub metrics: TextMetrics,
    /// Band layer width from the previous layout pass, `0` if none.
    pub band_layer_width: f64,
    pub screen_width: f64,
}

/// Everything a render target needs for one playback.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Synthesis {
    pub band: Option<BandLayer>,
    pub timeline: Option<Timeline>,
    pub blink: Option<Timeline>,
}

impl Synthesis {
    pub fn is_empty(&self) -> bool {
        self.band.is_none() && self.timeline.is_none() && self.blink.is_none()
    }
}

#[tracing::instrument(skip_all, fields(style = ?cfg.style))]
pub fn synthesize(cfg: &ShimmerConfig, ctx: &SynthesisContext) -> Synthesis {
    let blink = cfg.blink.then(blink_overlay);
    if cfg.style.uses_palette() && cfg.palette.is_empty() {
        tracing::debug!("empty palette, nothing to draw");
        return Synthesis {
            band: None,
            timeline: None,
            blink,
        };
    }
    let (band, timeline) = match cfg.style {
        ShimmerStyle::IndicatorMove => indicator(cfg, ctx, false),
        ShimmerStyle::IndicatorMoveReverse => indicator(cfg, ctx, true),
        ShimmerStyle::ColorsFlow => colors_flow(cfg, ctx),
        ShimmerStyle::ColorsChange => colors_change(cfg, ctx),
        ShimmerStyle::None => return Synthesis::default(),
    };
    Synthesis {
        band: Some(band),
        timeline,
        blink,
    }
}

fn indicator(
    cfg: &ShimmerConfig,
    ctx: &SynthesisContext,
    reverse: bool,
) -> (BandLayer, Option<Timeline>) {
    let container = ctx.metrics.container;
    let shape = BandShape::indicator(cfg.band_width, cfg.edge_radius);
    let band = BandLayer {
        colors: shape.colors.to_vec(),
        locations: Some(shape.locations.to_vec()),
        background: Color::TRANSPARENT,
        band_transform: shear(INDICATOR_SHEAR_DEG),
        mask_transform: Affine::IDENTITY,
        frames: LayerFrames::layout(cfg.style, cfg.band_width, container, None),
    };

    let timeline = ctx.metrics.resolve_band(cfg.band_width).map(|geom| {
        let duration = resolve_duration(
            cfg,
            &DurationInputs {
                container_width: container.width,
                band_layer_width: ctx.band_layer_width,
                tiled_colors: 0,
            },
        );
        Timeline::Translation(TranslationTimeline {
            from: geom.from_offset,
            to: geom.to_offset,
            timing: Timing {
                delay_secs: INDICATOR_DELAY_SECS,
                autoreverse: reverse,
                ..Timing::new(duration, Repeat::from_flag(cfg.repeat))
            },
        })
    });
    (band, timeline)
}

fn colors_flow(cfg: &ShimmerConfig, ctx: &SynthesisContext) -> (BandLayer, Option<Timeline>) {
    let container = ctx.metrics.container;
    let target = coverage_width(ctx.band_layer_width, container.width, ctx.screen_width);
    let tiled = tile_palette(&cfg.palette, cfg.band_width, target);

    let band = BandLayer {
        colors: tiled.clone(),
        locations: None,
        background: Color::TRANSPARENT,
        band_transform: shear(-FLOW_SHEAR_DEG),
        mask_transform: shear(FLOW_SHEAR_DEG),
        frames: LayerFrames::layout(cfg.style, cfg.band_width, container, Some(tiled.len())),
    };
    if tiled.is_empty() {
        return (band, None);
    }

    let duration = resolve_duration(
        cfg,
        &DurationInputs {
            container_width: container.width,
            band_layer_width: ctx.band_layer_width,
            tiled_colors: tiled.len(),
        },
    );
    let values = flow_rotations(&tiled, cfg.palette.len());
    let timeline = Timeline::Colors(Keyframes {
        values,
        key_times: None,
        mode: CalculationMode::CubicPaced,
        timing: Timing {
            fill: FillMode::Backwards,
            ..Timing::new(duration, Repeat::Forever)
        },
    });
    (band, Some(timeline))
}

/// `steps + 1` snapshots of `colors`, each rotated right by one more position.
///
/// With `steps` equal to the palette length the last snapshot equals the first, since the
/// tiled list repeats with that period.
pub fn flow_rotations(colors: &[Color], steps: usize) -> Vec<Vec<Color>> {
    let mut current = colors.to_vec();
    let mut out = Vec::with_capacity(steps + 1);
    for _ in 0..=steps {
        out.push(current.clone());
        if !current.is_empty() {
            current.rotate_right(1);
        }
    }
    out
}

fn colors_change(cfg: &ShimmerConfig, ctx: &SynthesisContext) -> (BandLayer, Option<Timeline>) {
    let container = ctx.metrics.container;
    let first = cfg.palette.first().copied().unwrap_or(Color::TRANSPARENT);
    let band = BandLayer {
        colors: vec![first, first],
        locations: None,
        background: Color::TRANSPARENT,
        band_transform: Affine::IDENTITY,
        mask_transform: Affine::IDENTITY,
        frames: LayerFrames::layout(cfg.style, cfg.band_width, container, None),
    };

    let duration = resolve_duration(
        cfg,
        &DurationInputs {
            container_width: container.width,
            band_layer_width: ctx.band_layer_width,
            tiled_colors: 0,
        },
    );
    let timeline = Timeline::Colors(Keyframes {
        values: cfg.palette.iter().map(|c| vec![*c, *c]).collect(),
        key_times: None,
        mode: CalculationMode::CubicPaced,
        timing: Timing::new(duration, Repeat::Forever),
    });
    (band, Some(timeline))
}

/// Opacity pulse layered over any style when `blink` is set.
pub fn blink_overlay() -> Timeline {
    Timeline::Opacity(Keyframes {
        values: BLINK_VALUES.to_vec(),
        key_times: Some(BLINK_KEY_TIMES.to_vec()),
        mode: CalculationMode::Linear,
        timing: Timing {
            autoreverse: true,
            ..Timing::new(BLINK_DURATION_SECS, Repeat::Forever)
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/synth.rs"]
mod tests;
