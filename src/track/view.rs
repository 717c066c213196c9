use crate::{
    animation::timeline::Timeline,
    foundation::core::Rect,
    playback::target::{Slot, TrackTarget},
    track::plan::{TrackConfig, TrackPlan, plan_track},
};

/// Lifecycle driver for the track variant.
///
/// Much simpler than the label machine: every layout pass replans, there is no debounce,
/// and a zero-width layout only pauses.
pub struct TrackShimmer<T> {
    target: T,
    config: TrackConfig,
    plan: Option<TrackPlan>,
    installed: bool,
    hidden: bool,
}

impl<T: TrackTarget> TrackShimmer<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            config: TrackConfig::default(),
            plan: None,
            installed: false,
            hidden: true,
        }
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn plan(&self) -> Option<&TrackPlan> {
        self.plan.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.installed
    }

    /// The track surface is not drawn at all.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Takes effect on the next layout pass.
    pub fn set_config(&mut self, config: TrackConfig) {
        self.config = config;
    }

    #[tracing::instrument(skip(self))]
    pub fn on_layout(&mut self, bounds_width: f64, text_frame: Rect, line_height: f64) {
        if bounds_width <= 0.0 {
            self.pause();
            return;
        }
        self.rebuild(text_frame, line_height);
    }

    fn rebuild(&mut self, text_frame: Rect, line_height: f64) {
        if self.installed {
            self.target.remove_timeline(Slot::Track);
            self.installed = false;
        }
        self.plan = plan_track(&self.config, text_frame, line_height);
        let Some(plan) = &self.plan else {
            self.hidden = true;
            tracing::debug!("track style draws nothing");
            return;
        };
        self.hidden = false;
        self.target.apply_track(plan);
        self.target
            .install_timeline(Slot::Track, &Timeline::Translation(plan.timeline.clone()));
        self.installed = true;
        tracing::debug!(tiles = plan.tiles.len(), "track installed");
    }

    pub fn pause(&mut self) {
        if !self.installed {
            return;
        }
        self.target.remove_timeline(Slot::Track);
        self.installed = false;
    }

    /// Reinstall the last planned sweep without replanning.
    pub fn resume(&mut self) {
        if self.installed {
            return;
        }
        let Some(plan) = &self.plan else {
            return;
        };
        self.target
            .install_timeline(Slot::Track, &Timeline::Translation(plan.timeline.clone()));
        self.installed = true;
    }

    pub fn on_detached_from_display(&mut self) {
        self.pause();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/view.rs"]
mod tests;
