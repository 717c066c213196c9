use crate::foundation::{
    core::Color,
    error::{ShimmerError, ShimmerResult},
};

/// Visual effect a label plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShimmerStyle {
    /// A highlight band sweeps across the text once per period.
    IndicatorMove,
    /// Like `IndicatorMove`, but the band travels back and forth.
    IndicatorMoveReverse,
    /// Palette colors flow through the glyphs.
    ColorsFlow,
    /// The whole text cycles through the palette.
    ColorsChange,
    /// No animation; the text is drawn plainly.
    #[default]
    None,
}

impl ShimmerStyle {
    pub fn is_indicator(self) -> bool {
        matches!(self, Self::IndicatorMove | Self::IndicatorMoveReverse)
    }

    /// `ColorsFlow` and `ColorsChange` draw nothing without a palette.
    pub fn uses_palette(self) -> bool {
        matches!(self, Self::ColorsFlow | Self::ColorsChange)
    }
}

/// Declarative shimmer settings for one label.
///
/// Immutable in use: applying a different value replaces the previous configuration entirely.
/// Equality is structural, palette compared element-wise in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShimmerConfig {
    pub style: ShimmerStyle,
    /// Indicator styles loop forever when set; otherwise they play a single pass.
    pub repeat: bool,
    /// Band width for indicators; per-color tile width for `ColorsFlow`.
    pub band_width: f64,
    /// Soft edge of the indicator band.
    pub edge_radius: f64,
    /// Overlay text color for indicator styles.
    pub single_color: Color,
    /// Colors for the palette styles, in display order.
    pub palette: Vec<Color>,
    /// Playback period in seconds, used when `speed` is absent.
    pub period_secs: f64,
    /// Points per second; takes precedence over `period_secs`.
    pub speed: Option<f64>,
    /// Layer an opacity pulse over the style timeline.
    pub blink: bool,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            style: ShimmerStyle::None,
            repeat: true,
            band_width: 20.0,
            edge_radius: 5.0,
            single_color: Color::RED,
            palette: Vec::new(),
            period_secs: 2.0,
            speed: Some(30.0),
            blink: false,
        }
    }
}

impl ShimmerConfig {
    pub fn builder() -> ShimmerConfigBuilder {
        ShimmerConfigBuilder::new()
    }

    /// Explicit sanity check for callers that want one.
    ///
    /// Playback never calls this: degenerate values produce an inert timeline instead.
    pub fn validate(&self) -> ShimmerResult<()> {
        let finite = [
            ("band_width", self.band_width),
            ("edge_radius", self.edge_radius),
            ("period_secs", self.period_secs),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(ShimmerError::validation(format!("{name} must be finite")));
            }
            if v < 0.0 {
                return Err(ShimmerError::validation(format!("{name} must be >= 0")));
            }
        }
        if let Some(speed) = self.speed
            && (!speed.is_finite() || speed < 0.0)
        {
            return Err(ShimmerError::validation("speed must be finite and >= 0"));
        }
        if self.style.is_indicator() && self.band_width <= 0.0 {
            return Err(ShimmerError::validation(
                "indicator styles require band_width > 0",
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`ShimmerConfig`], starting from the defaults.
#[derive(Clone, Debug)]
pub struct ShimmerConfigBuilder {
    cfg: ShimmerConfig,
}

impl Default for ShimmerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShimmerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: ShimmerConfig::default(),
        }
    }

    pub fn style(mut self, style: ShimmerStyle) -> Self {
        self.cfg.style = style;
        self
    }

    pub fn repeat(mut self, repeat: bool) -> Self {
        self.cfg.repeat = repeat;
        self
    }

    pub fn band_width(mut self, band_width: f64) -> Self {
        self.cfg.band_width = band_width;
        self
    }

    pub fn edge_radius(mut self, edge_radius: f64) -> Self {
        self.cfg.edge_radius = edge_radius;
        self
    }

    pub fn single_color(mut self, color: Color) -> Self {
        self.cfg.single_color = color;
        self
    }

    pub fn palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        self.cfg.palette = palette.into_iter().collect();
        self
    }

    pub fn period_secs(mut self, period_secs: f64) -> Self {
        self.cfg.period_secs = period_secs;
        self
    }

    pub fn speed(mut self, speed: Option<f64>) -> Self {
        self.cfg.speed = speed;
        self
    }

    pub fn blink(mut self, blink: bool) -> Self {
        self.cfg.blink = blink;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> ShimmerResult<ShimmerConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }

    /// Returns the configuration without validation.
    pub fn build_unchecked(self) -> ShimmerConfig {
        self.cfg
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
