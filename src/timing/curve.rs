/// How intermediate keyframe times are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Explicit or evenly spaced key times, linear interpolation.
    #[default]
    Linear,
    /// Key times spread so the value changes at constant rate.
    Paced,
    /// Paced timing, smoothed between keys by the renderer.
    /// [`Timeline::sample`](crate::Timeline::sample) treats it like `Paced`.
    CubicPaced,
}

impl CalculationMode {
    pub fn is_paced(self) -> bool {
        matches!(self, Self::Paced | Self::CubicPaced)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    Once,
    Forever,
}

impl Repeat {
    pub fn from_flag(repeat: bool) -> Self {
        if repeat { Self::Forever } else { Self::Once }
    }
}

/// Whether the first keyframe is shown during the begin delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    #[default]
    Removed,
    Backwards,
}

#[cfg(test)]
#[path = "../../tests/unit/timing/curve.rs"]
mod tests;
