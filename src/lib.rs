//! Shimmerkit derives shimmer animations for text labels.
//!
//! Given a [`ShimmerConfig`] and the label's measured text, it computes band geometry,
//! durations, tiled palettes and keyframe [`Timeline`]s, then drives them through a
//! [`ShimmerLabel`] state machine against any host that implements [`RenderTarget`]:
//!
//! - Geometry: where the band starts and ends for the text's alignment
//! - Timing: period or speed-derived durations
//! - Palette: tiling so flowing colors cover the label
//! - Synthesis: per-style keyframes plus an optional blink overlay
//! - Playback: start, stop, suspension and debounced refresh
//!
//! Timelines are plain values; [`Timeline::sample`] evaluates them without a renderer.
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod foundation;
pub mod geometry;
pub mod palette;
pub mod playback;
pub mod timing;
pub mod track;

pub use crate::animation::synth::{BandLayer, Synthesis, SynthesisContext, synthesize};
pub use crate::animation::timeline::{Keyframes, Timeline, TimelineValue, Timing, TranslationTimeline};
pub use crate::config::{ShimmerConfig, ShimmerConfigBuilder, ShimmerStyle};
pub use crate::foundation::core::{Affine, Color, Rect, Size, TextAlign, Vec2};
pub use crate::foundation::error::{ShimmerError, ShimmerResult};
pub use crate::geometry::measure::{
    FixedAdvanceMeasure, FontSpec, ParleyMeasure, TextContent, TextMeasure,
};
pub use crate::geometry::resolver::{BandGeometry, LayerFrames, TextMetrics};
pub use crate::playback::label::{PlaybackState, ShimmerLabel};
pub use crate::playback::target::{
    MaskRelation, RecordingTarget, RenderTarget, Slot, TextColors, TrackTarget,
};
pub use crate::timing::duration::{DurationInputs, resolve_duration};
pub use crate::track::plan::{TrackConfig, TrackPlan, TrackStyle, plan_track};
pub use crate::track::view::TrackShimmer;
