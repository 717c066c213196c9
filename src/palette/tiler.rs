use crate::foundation::{core::Color, math::ceil_count};

/// Screen width assumed when nothing has been laid out yet.
pub const DEFAULT_SCREEN_WIDTH: f64 = 375.0;

/// Upper bound on tiled entries; tiny tile widths stop repeating here.
pub const MAX_TILED_COLORS: usize = 4096;

/// How many times a palette repeats to cover a target width.
///
/// The result may overshoot the target; the renderer clips the excess. Repeats are capped so
/// the tiled list never exceeds [`MAX_TILED_COLORS`] entries (a longer palette keeps one copy).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TilePlan {
    pub palette_len: usize,
    pub tile_width: f64,
    pub tile_set_width: f64,
    pub repeats: usize,
}

impl TilePlan {
    /// `None` for an empty palette.
    pub fn new(palette_len: usize, tile_width: f64, target_width: f64) -> Option<Self> {
        if palette_len == 0 {
            return None;
        }
        let tile_set_width = palette_len as f64 * tile_width;
        let repeats = if tile_set_width.is_finite() && tile_set_width > 0.0 {
            let max_repeats = (MAX_TILED_COLORS / palette_len).max(1);
            ceil_count(target_width, tile_set_width).min(max_repeats)
        } else {
            1
        };
        Some(Self {
            palette_len,
            tile_width,
            tile_set_width,
            repeats,
        })
    }

    pub fn color_count(&self) -> usize {
        self.palette_len.saturating_mul(self.repeats)
    }

    pub fn covered_width(&self) -> f64 {
        self.tile_set_width * self.repeats as f64
    }

    pub fn apply(&self, palette: &[Color]) -> Vec<Color> {
        debug_assert_eq!(palette.len(), self.palette_len);
        let mut out = Vec::with_capacity(self.color_count());
        for _ in 0..self.repeats {
            out.extend_from_slice(palette);
        }
        out
    }
}

/// Palette repeated whole until it spans `target_width` at `tile_width` per entry.
pub fn tile_palette(palette: &[Color], tile_width: f64, target_width: f64) -> Vec<Color> {
    match TilePlan::new(palette.len(), tile_width, target_width) {
        Some(plan) => {
            tracing::trace!(?plan, "tiled palette");
            plan.apply(palette)
        }
        None => Vec::new(),
    }
}

/// First positive width among the laid-out band, the container and the screen.
pub fn coverage_width(band_layer_width: f64, container_width: f64, screen_width: f64) -> f64 {
    [band_layer_width, container_width]
        .into_iter()
        .find(|w| *w > 0.0)
        .unwrap_or(screen_width)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/tiler.rs"]
mod tests;
