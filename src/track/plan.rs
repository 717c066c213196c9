//! Single-text track variant.
//!
//! Instead of animating gradient stops, this variant slides one pre-rasterized strip (the
//! "track") under a text-shaped mask. The plan fixes the strip size and the tiles painted
//! into it; rasterizing those tiles is the host's job.

use crate::{
    animation::timeline::{Timing, TranslationTimeline},
    foundation::{
        core::{Affine, Color, Rect, Size, Vec2},
        math::{ceil_count, shear, speed_floor},
    },
    timing::curve::Repeat,
};

pub const TRACK_INDICATOR_ALPHA: f64 = 0.9;
pub const TRACK_INDICATOR_SHEAR_DEG: f64 = -30.0;
pub const TRACK_FLOW_SHEAR_DEG: f64 = -45.0;
/// Upper bound on tiles per strip half; narrower tiles leave the strip short.
pub const MAX_TRACK_TILES: usize = 512;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackStyle {
    Indicator(Color),
    ColorsFlow(Vec<Color>),
    ImageFlow {
        image_size: Size,
    },
    #[default]
    None,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackConfig {
    pub style: TrackStyle,
    /// Points per second.
    pub speed: f64,
    /// Indicator width, or per-color tile width for `ColorsFlow`.
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackTile {
    Gradient { frame: Rect, colors: Vec<Color> },
    Image { frame: Rect },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrackPlan {
    /// Where the strip sits, in label coordinates, before any translation.
    pub track_frame: Rect,
    /// Raster size of the strip image.
    pub canvas: Size,
    /// Offset of the tile group inside the canvas.
    pub content_offset: Vec2,
    pub content_transform: Affine,
    pub tiles: Vec<TrackTile>,
    /// Repeat count along the strip, per half.
    pub tile_count: usize,
    pub timeline: TranslationTimeline,
}

/// Palette with its first color appended when it does not already close the loop.
pub fn closed_palette(colors: &[Color]) -> Vec<Color> {
    match (colors.first(), colors.last()) {
        (Some(f), Some(l)) if f != l => {
            let mut out = colors.to_vec();
            out.push(*f);
            out
        }
        _ => colors.to_vec(),
    }
}

fn sweep(distance: f64, duration_secs: f64) -> TranslationTimeline {
    TranslationTimeline {
        from: 0.0,
        to: distance,
        timing: Timing::new(duration_secs, Repeat::Forever),
    }
}

/// Plan the strip for `text_frame`; `None` when the style draws nothing.
pub fn plan_track(cfg: &TrackConfig, text_frame: Rect, line_height: f64) -> Option<TrackPlan> {
    let origin = text_frame.origin();
    let text_w = text_frame.width();
    let h = line_height;
    let speed = speed_floor(cfg.speed);

    match &cfg.style {
        TrackStyle::Indicator(color) => {
            let w = cfg.width;
            let glow = color.with_alpha(TRACK_INDICATOR_ALPHA);
            Some(TrackPlan {
                track_frame: Rect::from_origin_size((origin.x - w, origin.y), (w, h)),
                canvas: Size::new(w + h, h),
                content_offset: Vec2::ZERO,
                content_transform: shear(TRACK_INDICATOR_SHEAR_DEG),
                tiles: vec![TrackTile::Gradient {
                    frame: Rect::new(0.0, 0.0, w, h),
                    colors: vec![Color::TRANSPARENT, glow, glow, Color::TRANSPARENT],
                }],
                tile_count: 1,
                timeline: sweep(text_w + w, text_w / speed),
            })
        }
        TrackStyle::ColorsFlow(colors) => {
            let raw = closed_palette(colors);
            if raw.is_empty() {
                return None;
            }
            let cw = raw.len() as f64 * cfg.width;
            let cc = ceil_count(text_w, cw).min(MAX_TRACK_TILES);
            let ww = cc as f64 * cw;
            let canvas = Size::new(ww * 2.0 - h, h);
            let tiles = (0..cc * 2)
                .map(|i| TrackTile::Gradient {
                    frame: Rect::from_origin_size((cw * i as f64, 0.0), (cw, h)),
                    colors: raw.clone(),
                })
                .collect();
            Some(TrackPlan {
                track_frame: Rect::from_origin_size((origin.x - ww - h, origin.y), canvas),
                canvas,
                content_offset: Vec2::new(-h, 0.0),
                content_transform: shear(TRACK_FLOW_SHEAR_DEG),
                tiles,
                tile_count: cc,
                timeline: sweep(ww, ww / speed),
            })
        }
        TrackStyle::ImageFlow { image_size } => {
            if image_size.height <= 0.0 {
                return None;
            }
            let tile_w = (image_size.width * (h / image_size.height)).floor();
            let cc = ceil_count(text_w, tile_w).min(MAX_TRACK_TILES);
            let ww = cc as f64 * tile_w;
            let canvas = Size::new(ww * 2.0, h);
            let tiles = (0..cc * 2)
                .map(|i| TrackTile::Image {
                    frame: Rect::from_origin_size((tile_w * i as f64, 0.0), (tile_w, h)),
                })
                .collect();
            Some(TrackPlan {
                track_frame: Rect::from_origin_size((origin.x - ww, origin.y), canvas),
                canvas,
                content_offset: Vec2::ZERO,
                content_transform: Affine::IDENTITY,
                tiles,
                tile_count: cc,
                timeline: sweep(ww, ww / speed),
            })
        }
        TrackStyle::None => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/plan.rs"]
mod tests;
