//! Capability seam between playback and the host's rendering surface.

use crate::{
    animation::{synth::BandLayer, timeline::Timeline},
    foundation::core::Color,
    track::plan::TrackPlan,
};

/// Independent animation slots on one label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// The style timeline on the band layer.
    Band,
    /// Opacity pulse on the label itself.
    Blink,
    /// Sliding track of the single-text variant.
    Track,
}

/// Which surface clips which.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskRelation {
    /// Text drawn plainly, nothing clipped.
    #[default]
    None,
    /// The band clips an overlay copy of the text drawn above the label text.
    BandMasksOverlay,
    /// The glyphs clip the band.
    TextMasksBand,
}

/// Colors the host should draw the label text (`base`) and its overlay copy with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TextColors {
    pub base: Color,
    /// `None` when no overlay copy is drawn.
    pub overlay: Option<Color>,
}

/// Host surface a [`ShimmerLabel`](crate::ShimmerLabel) drives.
///
/// Calls arrive in teardown-then-install order; a slot is always removed before it is
/// installed again.
pub trait RenderTarget {
    /// Attach `timeline` to `slot`, starting it now.
    fn install_timeline(&mut self, slot: Slot, timeline: &Timeline);
    /// Detach whatever runs in `slot`. Removing an empty slot is allowed.
    fn remove_timeline(&mut self, slot: Slot);
    fn set_mask(&mut self, mask: MaskRelation);
    fn set_text_colors(&mut self, colors: TextColors);
    /// Resize and restyle the band layer before its timeline is installed.
    fn apply_band(&mut self, band: &BandLayer);
}

/// Surface for the single-text track variant, driven by
/// [`TrackShimmer`](crate::TrackShimmer).
pub trait TrackTarget: RenderTarget {
    /// Rebuild the track strip and its tiles from `plan`.
    fn apply_track(&mut self, plan: &TrackPlan);
}

/// One call made against a [`RecordingTarget`].
#[derive(Clone, Debug, PartialEq)]
pub enum TargetCall {
    Install(Slot, Timeline),
    Remove(Slot),
    Mask(MaskRelation),
    TextColors(TextColors),
    Band(BandLayer),
    Track(TrackPlan),
}

/// In-memory target that keeps a call log and the currently installed timelines.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    /// Every call in arrival order, until [`RecordingTarget::clear_log`].
    pub calls: Vec<TargetCall>,
    /// Timelines currently attached, in install order.
    pub installed: Vec<(Slot, Timeline)>,
    pub mask: MaskRelation,
    /// Last colors set; `None` until the first call.
    pub text_colors: Option<TextColors>,
    /// Installs into a slot that still held a timeline.
    pub double_installs: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeline currently attached to `slot`.
    pub fn installed(&self, slot: Slot) -> Option<&Timeline> {
        self.installed
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, t)| t)
    }

    pub fn count_installs(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, TargetCall::Install(..)))
            .count()
    }

    pub fn count_removals(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, TargetCall::Remove(_)))
            .count()
    }

    /// Forget the call log; installed state is kept.
    pub fn clear_log(&mut self) {
        self.calls.clear();
    }
}

impl RenderTarget for RecordingTarget {
    fn install_timeline(&mut self, slot: Slot, timeline: &Timeline) {
        self.calls.push(TargetCall::Install(slot, timeline.clone()));
        if self.installed(slot).is_some() {
            self.double_installs += 1;
        }
        self.installed.retain(|(s, _)| *s != slot);
        self.installed.push((slot, timeline.clone()));
    }

    fn remove_timeline(&mut self, slot: Slot) {
        self.calls.push(TargetCall::Remove(slot));
        self.installed.retain(|(s, _)| *s != slot);
    }

    fn set_mask(&mut self, mask: MaskRelation) {
        self.calls.push(TargetCall::Mask(mask));
        self.mask = mask;
    }

    fn set_text_colors(&mut self, colors: TextColors) {
        self.calls.push(TargetCall::TextColors(colors));
        self.text_colors = Some(colors);
    }

    fn apply_band(&mut self, band: &BandLayer) {
        self.calls.push(TargetCall::Band(band.clone()));
    }
}

impl TrackTarget for RecordingTarget {
    fn apply_track(&mut self, plan: &TrackPlan) {
        self.calls.push(TargetCall::Track(plan.clone()));
    }
}
