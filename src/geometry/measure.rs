//! Text width measurement seam.
//!
//! The geometry resolver only needs single-line advance widths. Hosts plug their own
//! shaping in through [`TextMeasure`]; [`ParleyMeasure`] shapes with Parley and a font
//! supplied as raw bytes, and [`FixedAdvanceMeasure`] is a deterministic stand-in.

use crate::foundation::error::{ShimmerError, ShimmerResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    pub size_px: f64,
    pub line_height: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size_px: 17.0,
            line_height: 20.0,
        }
    }
}

/// One styled run of attributed text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextRun {
    pub text: String,
    /// Falls back to the label font when absent.
    pub font: Option<FontSpec>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TextContent {
    Plain(String),
    Attributed(Vec<TextRun>),
}

impl TextContent {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(s) => s.is_empty(),
            Self::Attributed(runs) => runs.iter().all(|r| r.text.is_empty()),
        }
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Attributed(runs) => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }
}

pub trait TextMeasure {
    /// Unconstrained single-line advance width of `text`.
    fn measure(&mut self, text: &str, font: &FontSpec) -> f64;

    /// Width of the whole content, or `None` when there is nothing to measure.
    fn measure_content(&mut self, content: &TextContent, font: &FontSpec) -> Option<f64> {
        if content.is_empty() {
            return None;
        }
        let w = match content {
            TextContent::Plain(s) => self.measure(s, font),
            TextContent::Attributed(runs) => runs
                .iter()
                .map(|r| self.measure(&r.text, r.font.as_ref().unwrap_or(font)))
                .sum(),
        };
        Some(w)
    }
}

/// Every character advances by the same amount regardless of font.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasure {
    pub advance: f64,
}

impl FixedAdvanceMeasure {
    pub fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&mut self, text: &str, _font: &FontSpec) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

/// Parley-backed measurement against a single registered font family.
pub struct ParleyMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
}

impl ParleyMeasure {
    /// Register `font_bytes` and measure everything with its first family.
    pub fn new(font_bytes: &[u8]) -> ShimmerResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ShimmerError::measure("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ShimmerError::measure("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl TextMeasure for ParleyMeasure {
    fn measure(&mut self, text: &str, font: &FontSpec) -> f64 {
        if text.is_empty() || !font.size_px.is_finite() || font.size_px <= 0.0 {
            return 0.0;
        }
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px as f32));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        f64::from(layout.width())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/measure.rs"]
mod tests;
