//! Playback state machine for one shimmering label.
//!
//! All entry points run on the host's UI thread. Timelines are recomputed from scratch on
//! `start`, installed on the [`RenderTarget`], and released on `stop`. Suspension is cheaper:
//! it pulls the live handles but keeps the computed timelines for `resume`.

use crate::{
    animation::{
        synth::{Synthesis, SynthesisContext, synthesize},
        timeline::Timeline,
    },
    config::{ShimmerConfig, ShimmerStyle},
    foundation::core::{Color, Size, TextAlign},
    geometry::{
        measure::{FontSpec, TextContent, TextMeasure, TextRun},
        resolver::TextMetrics,
    },
    palette::tiler::DEFAULT_SCREEN_WIDTH,
    playback::{
        deferred::DeferredRefresh,
        target::{MaskRelation, RenderTarget, Slot, TextColors},
    },
};

/// What is currently installed for a label.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivePlayback {
    pub style: ShimmerStyle,
    pub synthesis: Synthesis,
}

impl ActivePlayback {
    fn slots(&self) -> impl Iterator<Item = (Slot, &Timeline)> {
        [
            (Slot::Band, self.synthesis.timeline.as_ref()),
            (Slot::Blink, self.synthesis.blink.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, tl)| tl.map(|tl| (slot, tl)))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(ActivePlayback),
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }

    pub fn active(&self) -> Option<&ActivePlayback> {
        match self {
            Self::Idle => None,
            Self::Playing(active) => Some(active),
        }
    }
}

/// Host-owned label state the shimmer reads.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelInputs {
    pub text: Option<TextContent>,
    pub font: FontSpec,
    pub align: TextAlign,
    pub bounds: Size,
    /// Whether the label is currently on a display.
    pub attached: bool,
}

impl Default for LabelInputs {
    fn default() -> Self {
        Self {
            text: None,
            font: FontSpec::default(),
            align: TextAlign::Left,
            bounds: Size::ZERO,
            attached: false,
        }
    }
}

/// Mask relationship and text colors each style draws with.
///
/// Palette styles without a palette draw nothing, so they keep the caller's plain text.
pub fn presentation(cfg: &ShimmerConfig, text_color: Color) -> (MaskRelation, TextColors) {
    if cfg.style.uses_palette() && cfg.palette.is_empty() {
        return (
            MaskRelation::None,
            TextColors {
                base: text_color,
                overlay: None,
            },
        );
    }
    match cfg.style {
        ShimmerStyle::IndicatorMove | ShimmerStyle::IndicatorMoveReverse => (
            MaskRelation::BandMasksOverlay,
            TextColors {
                base: text_color,
                overlay: Some(cfg.single_color),
            },
        ),
        ShimmerStyle::ColorsFlow | ShimmerStyle::ColorsChange => (
            MaskRelation::TextMasksBand,
            TextColors {
                base: Color::TRANSPARENT,
                overlay: Some(Color::BLACK),
            },
        ),
        ShimmerStyle::None => (
            MaskRelation::None,
            TextColors {
                base: text_color,
                overlay: None,
            },
        ),
    }
}

pub struct ShimmerLabel<T, M> {
    target: T,
    measurer: M,
    config: ShimmerConfig,
    inputs: LabelInputs,
    /// Caller-set text color; what the label shows when not shimmering.
    text_color: Color,
    state: PlaybackState,
    suspended: bool,
    deferred: bool,
    last_size: Size,
    band_layer_width: f64,
    screen_width: f64,
    refresh: DeferredRefresh,
}

impl<T, M> ShimmerLabel<T, M>
where
    T: RenderTarget,
    M: TextMeasure,
{
    pub fn new(target: T, measurer: M) -> Self {
        Self {
            target,
            measurer,
            config: ShimmerConfig::default(),
            inputs: LabelInputs::default(),
            text_color: Color::BLACK,
            state: PlaybackState::Idle,
            suspended: false,
            deferred: false,
            last_size: Size::ZERO,
            band_layer_width: 0.0,
            screen_width: DEFAULT_SCREEN_WIDTH,
            refresh: DeferredRefresh::default(),
        }
    }

    /// Width used for palette tiling before the label has been laid out.
    pub fn with_screen_width(mut self, screen_width: f64) -> Self {
        self.screen_width = screen_width;
        self
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// A configuration is waiting for a nonzero layout width.
    pub fn is_deferred(&self) -> bool {
        self.deferred
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn config(&self) -> &ShimmerConfig {
        &self.config
    }

    pub fn inputs(&self) -> &LabelInputs {
        &self.inputs
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn band_layer_width(&self) -> f64 {
        self.band_layer_width
    }

    pub fn refresh_pending(&self) -> bool {
        self.refresh.is_pending()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Replace the configuration; a different value tears down the current playback first.
    #[tracing::instrument(skip_all, fields(style = ?cfg.style))]
    pub fn apply_configuration(&mut self, cfg: ShimmerConfig) {
        if self.config != cfg {
            self.stop();
        }
        self.config = cfg;
        if self.inputs.bounds.width > 0.0 {
            self.start(false);
        } else {
            tracing::debug!("no layout width yet, deferring start");
            self.deferred = true;
        }
    }

    /// Build and install timelines. A no-op while playing unless `force` is set.
    pub fn start(&mut self, force: bool) {
        if self.state.is_playing() {
            if !force {
                return;
            }
            tracing::debug!("forced restart");
            self.stop();
        }
        if self.config.style == ShimmerStyle::None {
            self.stop();
            return;
        }
        if self.inputs.bounds.width <= 0.0 {
            self.deferred = true;
            return;
        }
        self.deferred = false;

        let metrics = TextMetrics::measure(
            &mut self.measurer,
            self.inputs.text.as_ref(),
            &self.inputs.font,
            self.inputs.bounds,
            self.inputs.align,
        );
        let ctx = SynthesisContext {
            metrics,
            band_layer_width: self.band_layer_width,
            screen_width: self.screen_width,
        };
        let synthesis = synthesize(&self.config, &ctx);
        if synthesis.is_empty() {
            tracing::debug!(style = ?self.config.style, "nothing to draw, staying idle");
            return;
        }

        let (mask, colors) = presentation(&self.config, self.text_color);
        self.target.set_text_colors(colors);
        self.target.set_mask(mask);
        if let Some(band) = &synthesis.band {
            self.band_layer_width = band.frames.band.width();
            self.target.apply_band(band);
        }

        let active = ActivePlayback {
            style: self.config.style,
            synthesis,
        };
        if !self.suspended {
            for (slot, timeline) in active.slots() {
                self.target.install_timeline(slot, timeline);
            }
        }
        tracing::debug!(
            style = ?active.style,
            suspended = self.suspended,
            "shimmer started"
        );
        self.state = PlaybackState::Playing(active);
    }

    /// Release every handle and restore the caller's text color. Idempotent.
    pub fn stop(&mut self) {
        let PlaybackState::Playing(active) = std::mem::take(&mut self.state) else {
            return;
        };
        if !self.suspended {
            for (slot, _) in active.slots() {
                self.target.remove_timeline(slot);
            }
        }
        self.target.set_mask(MaskRelation::None);
        self.target.set_text_colors(TextColors {
            base: self.text_color,
            overlay: None,
        });
        tracing::debug!(style = ?active.style, "shimmer stopped");
    }

    /// Layout pass. A changed size rebuilds the timelines for the new geometry.
    pub fn on_bounds_changed(&mut self, size: Size) {
        self.inputs.bounds = size;
        if size.width <= 0.0 {
            return;
        }
        let force = size != self.last_size;
        self.last_size = size;
        if !self.inputs.attached {
            return;
        }
        self.start(force);
    }

    pub fn on_attached_to_display(&mut self) {
        self.inputs.attached = true;
        if self.config.style != ShimmerStyle::None && !self.state.is_playing() {
            self.start(false);
        }
    }

    pub fn on_detached_from_display(&mut self) {
        self.inputs.attached = false;
        self.refresh.cancel();
        self.stop();
    }

    /// Host went to the background: pull live handles, keep everything else.
    pub fn on_visibility_lost(&mut self) {
        if self.suspended {
            return;
        }
        self.suspended = true;
        if let Some(active) = self.state.active() {
            for (slot, _) in active.slots() {
                self.target.remove_timeline(slot);
            }
            tracing::debug!("shimmer suspended");
        }
    }

    /// Host came back: reinstall the timelines computed before suspension.
    pub fn on_visibility_regained(&mut self) {
        if !self.suspended {
            return;
        }
        self.suspended = false;
        if let Some(active) = self.state.active() {
            for (slot, timeline) in active.slots() {
                self.target.install_timeline(slot, timeline);
            }
            tracing::debug!("shimmer resumed");
        }
    }

    pub fn set_text(&mut self, text: Option<TextContent>, now: f64) {
        if self.inputs.text == text {
            return;
        }
        self.stop();
        self.inputs.text = text;
        self.on_inputs_changed(now);
    }

    pub fn set_attributed_text(&mut self, runs: Vec<TextRun>, now: f64) {
        self.set_text(Some(TextContent::Attributed(runs)), now);
    }

    pub fn set_font(&mut self, font: FontSpec, now: f64) {
        self.inputs.font = font;
        self.on_inputs_changed(now);
    }

    pub fn set_alignment(&mut self, align: TextAlign, now: f64) {
        self.inputs.align = align;
        self.on_inputs_changed(now);
    }

    /// Store the caller's color; it reaches the target only while idle.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        if !self.state.is_playing() {
            self.target.set_text_colors(TextColors {
                base: color,
                overlay: None,
            });
        }
    }

    /// Single notification for any label property change; debounces a refresh check.
    pub fn on_inputs_changed(&mut self, now: f64) {
        self.refresh.cancel();
        if self.state.is_playing() {
            return;
        }
        self.refresh.schedule(now);
    }

    /// Drive the debounced refresh; call from the host's frame or timer callback.
    pub fn tick(&mut self, now: f64) {
        if !self.refresh.take_due(now) {
            return;
        }
        if self.inputs.attached && self.inputs.bounds.width > 0.0 {
            self.start(false);
        }
    }

    /// Drop back to the default configuration and the caller's plain text.
    pub fn reset_to_none(&mut self) {
        self.config = ShimmerConfig::default();
        self.stop();
        self.deferred = false;
        self.target.set_text_colors(TextColors {
            base: self.text_color,
            overlay: None,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/label.rs"]
mod tests;
