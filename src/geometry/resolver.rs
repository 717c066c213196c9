use crate::{
    config::ShimmerStyle,
    foundation::core::{Rect, Size, TextAlign},
    geometry::measure::{FontSpec, TextContent, TextMeasure},
};

/// Extra mask width past the container for `ColorsFlow`, so sheared glyph edges stay covered.
pub const FLOW_MASK_OVERHANG: f64 = 20.0;

/// Layout-derived inputs, recomputed whenever text, font or bounds change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// `None` when the label has no text.
    pub measured_width: Option<f64>,
    pub container: Size,
    pub align: TextAlign,
}

impl TextMetrics {
    pub fn measure(
        measurer: &mut dyn TextMeasure,
        content: Option<&TextContent>,
        font: &FontSpec,
        container: Size,
        align: TextAlign,
    ) -> Self {
        let measured_width = content.and_then(|c| measurer.measure_content(c, font));
        Self {
            measured_width,
            container,
            align,
        }
    }

    /// Visible text width, never wider than the container.
    pub fn effective_text_width(&self) -> f64 {
        let container_w = self.container.width;
        match self.measured_width {
            Some(w) => container_w.min(w.max(0.0)),
            None => container_w,
        }
    }

    /// Sweep extent of an indicator band of width `band_width`.
    ///
    /// Returns `None` while the container has no width yet; timeline construction waits for layout.
    pub fn resolve_band(&self, band_width: f64) -> Option<BandGeometry> {
        let container_w = self.container.width;
        if container_w <= 0.0 {
            return None;
        }
        let text_w = self.effective_text_width();
        let (from_offset, to_offset) = if self.align.is_trailing() {
            (container_w - text_w - band_width, container_w)
        } else {
            (-band_width, text_w)
        };
        Some(BandGeometry {
            container: self.container,
            effective_text_width: text_w,
            from_offset,
            to_offset,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BandGeometry {
    pub container: Size,
    pub effective_text_width: f64,
    pub from_offset: f64,
    pub to_offset: f64,
}

/// Frames of the band layer and the mask layer, in label coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerFrames {
    pub band: Rect,
    pub mask: Rect,
}

impl LayerFrames {
    /// `tiled_colors` is the length of the tiled palette on the band; `None` before one exists.
    pub fn layout(
        style: ShimmerStyle,
        band_width: f64,
        container: Size,
        tiled_colors: Option<usize>,
    ) -> Self {
        let (w, h) = (container.width, container.height);
        match style {
            ShimmerStyle::ColorsFlow => {
                let raw_width = tiled_colors.map_or(w, |n| n as f64 * band_width);
                Self {
                    band: Rect::new(-band_width, 0.0, raw_width + band_width, h),
                    mask: Rect::new(band_width, 0.0, band_width + w + FLOW_MASK_OVERHANG, h),
                }
            }
            ShimmerStyle::IndicatorMove | ShimmerStyle::IndicatorMoveReverse => Self {
                band: Rect::new(0.0, 0.0, band_width, h),
                mask: Rect::new(0.0, 0.0, w, h),
            },
            ShimmerStyle::ColorsChange | ShimmerStyle::None => Self {
                band: Rect::new(0.0, 0.0, w, h),
                mask: Rect::new(0.0, 0.0, w, h),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolver.rs"]
mod tests;
