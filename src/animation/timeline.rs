use crate::{
    foundation::core::Color,
    timing::curve::{CalculationMode, FillMode, Repeat},
};

pub trait Interpolate: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
    /// Metric used to pace keyframes.
    fn distance(a: &Self, b: &Self) -> f64;
}

impl Interpolate for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }

    fn distance(a: &Self, b: &Self) -> f64 {
        (b - a).abs()
    }
}

impl Interpolate for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }

    fn distance(a: &Self, b: &Self) -> f64 {
        a.distance(*b)
    }
}

/// Gradient stop lists interpolate stop by stop.
impl Interpolate for Vec<Color> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| Color::lerp(x, y, t))
            .collect()
    }

    fn distance(a: &Self, b: &Self) -> f64 {
        a.iter().zip(b.iter()).map(|(x, y)| x.distance(*y)).sum()
    }
}

/// Playback envelope shared by every timeline variant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Timing {
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub autoreverse: bool,
    pub repeat: Repeat,
    pub fill: FillMode,
}

impl Timing {
    pub fn new(duration_secs: f64, repeat: Repeat) -> Self {
        Self {
            duration_secs,
            delay_secs: 0.0,
            autoreverse: false,
            repeat,
            fill: FillMode::Removed,
        }
    }

    /// Length of one forward (and, when autoreversing, backward) pass.
    pub fn cycle_secs(&self) -> f64 {
        if self.autoreverse {
            self.duration_secs * 2.0
        } else {
            self.duration_secs
        }
    }

    /// Linear progress in `[0, 1]` at time `t` since installation.
    ///
    /// `None` while the timeline contributes nothing: zero-length, still delayed without a
    /// backwards fill, or finished after a single pass.
    pub fn progress(&self, t: f64) -> Option<f64> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return None;
        }
        let active = t - self.delay_secs;
        if active < 0.0 {
            return match self.fill {
                FillMode::Backwards => Some(0.0),
                FillMode::Removed => None,
            };
        }
        let cycle = self.cycle_secs();
        if self.repeat == Repeat::Once && active >= cycle {
            return None;
        }
        let local = active % cycle;
        let mut p = local / self.duration_secs;
        if p > 1.0 {
            p = 2.0 - p;
        }
        Some(p)
    }
}

/// Horizontal translation between two offsets.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TranslationTimeline {
    pub from: f64,
    pub to: f64,
    pub timing: Timing,
}

impl TranslationTimeline {
    pub fn sample(&self, t: f64) -> Option<f64> {
        let p = self.timing.progress(t)?;
        Some(<f64 as Interpolate>::lerp(&self.from, &self.to, p))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Keyframes<T> {
    pub values: Vec<T>,
    /// Normalized key times; `None` lets `mode` decide.
    pub key_times: Option<Vec<f64>>,
    pub mode: CalculationMode,
    pub timing: Timing,
}

impl<T> Keyframes<T>
where
    T: Interpolate + Clone,
{
    /// Key times actually used: explicit, paced by value distance, or evenly spaced.
    pub fn resolved_key_times(&self) -> Vec<f64> {
        let n = self.values.len();
        if let Some(times) = &self.key_times
            && times.len() == n
            && !self.mode.is_paced()
        {
            return times.clone();
        }
        if n < 2 {
            return vec![0.0; n];
        }
        let even = || {
            (0..n)
                .map(|i| i as f64 / (n - 1) as f64)
                .collect::<Vec<_>>()
        };
        if !self.mode.is_paced() {
            return even();
        }

        let mut cumulative = Vec::with_capacity(n);
        let mut total = 0.0;
        cumulative.push(0.0);
        for w in self.values.windows(2) {
            total += T::distance(&w[0], &w[1]);
            cumulative.push(total);
        }
        if total <= 0.0 || !total.is_finite() {
            return even();
        }
        cumulative.into_iter().map(|d| d / total).collect()
    }

    pub fn sample(&self, t: f64) -> Option<T> {
        let p = self.timing.progress(t)?;
        self.value_at(p)
    }

    /// Interpolated value at normalized progress `p`.
    pub fn value_at(&self, p: f64) -> Option<T> {
        let first = self.values.first()?;
        if self.values.len() == 1 {
            return Some(first.clone());
        }
        let times = self.resolved_key_times();
        let idx = times.partition_point(|k| *k <= p);
        if idx == 0 {
            return Some(first.clone());
        }
        if idx >= self.values.len() {
            return self.values.last().cloned();
        }
        let (t0, t1) = (times[idx - 1], times[idx]);
        let (a, b) = (&self.values[idx - 1], &self.values[idx]);
        let span = t1 - t0;
        if span <= 0.0 {
            return Some(a.clone());
        }
        Some(T::lerp(a, b, (p - t0) / span))
    }
}

/// A synthesized animation, handed to the render target as a value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Timeline {
    Translation(TranslationTimeline),
    Colors(Keyframes<Vec<Color>>),
    Opacity(Keyframes<f64>),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineValue {
    TranslationX(f64),
    Colors(Vec<Color>),
    Opacity(f64),
}

impl Timeline {
    pub fn timing(&self) -> &Timing {
        match self {
            Self::Translation(t) => &t.timing,
            Self::Colors(k) => &k.timing,
            Self::Opacity(k) => &k.timing,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.timing().duration_secs
    }

    /// Reference evaluation for hosts without a native keyframe animator.
    pub fn sample(&self, t: f64) -> Option<TimelineValue> {
        match self {
            Self::Translation(tl) => tl.sample(t).map(TimelineValue::TranslationX),
            Self::Colors(k) => k.sample(t).map(TimelineValue::Colors),
            Self::Opacity(k) => k.sample(t).map(TimelineValue::Opacity),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
