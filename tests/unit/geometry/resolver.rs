use super::*;
use crate::geometry::measure::FixedAdvanceMeasure;

fn metrics(measured: Option<f64>, width: f64, align: TextAlign) -> TextMetrics {
    TextMetrics {
        measured_width: measured,
        container: Size::new(width, 30.0),
        align,
    }
}

#[test]
fn left_alignment_sweeps_from_minus_band_to_text_end() {
    let g = metrics(Some(100.0), 150.0, TextAlign::Left)
        .resolve_band(20.0)
        .unwrap();
    assert_eq!(g.effective_text_width, 100.0);
    assert_eq!(g.from_offset, -20.0);
    assert_eq!(g.to_offset, 100.0);
}

#[test]
fn center_alignment_uses_leading_formula() {
    let g = metrics(Some(100.0), 150.0, TextAlign::Center)
        .resolve_band(20.0)
        .unwrap();
    assert_eq!((g.from_offset, g.to_offset), (-20.0, 100.0));
}

#[test]
fn right_alignment_anchors_to_trailing_edge() {
    let g = metrics(Some(100.0), 150.0, TextAlign::Right)
        .resolve_band(20.0)
        .unwrap();
    assert_eq!(g.from_offset, 30.0);
    assert_eq!(g.to_offset, 150.0);
}

#[test]
fn text_wider_than_container_is_clamped() {
    let m = metrics(Some(400.0), 150.0, TextAlign::Left);
    assert_eq!(m.effective_text_width(), 150.0);
}

#[test]
fn missing_text_falls_back_to_container_width() {
    let m = metrics(None, 150.0, TextAlign::Left);
    assert_eq!(m.effective_text_width(), 150.0);
}

#[test]
fn zero_width_container_defers() {
    assert!(
        metrics(Some(100.0), 0.0, TextAlign::Left)
            .resolve_band(20.0)
            .is_none()
    );
}

#[test]
fn measure_uses_content_when_present() {
    let mut m = FixedAdvanceMeasure::new(10.0);
    let content = TextContent::Plain("0123456789".into());
    let tm = TextMetrics::measure(
        &mut m,
        Some(&content),
        &FontSpec::default(),
        Size::new(150.0, 30.0),
        TextAlign::Left,
    );
    assert_eq!(tm.measured_width, Some(100.0));

    let empty = TextContent::Plain(String::new());
    let tm = TextMetrics::measure(
        &mut m,
        Some(&empty),
        &FontSpec::default(),
        Size::new(150.0, 30.0),
        TextAlign::Left,
    );
    assert_eq!(tm.measured_width, None);
    assert_eq!(tm.effective_text_width(), 150.0);
}

#[test]
fn flow_frames_extend_band_on_both_sides() {
    let f = LayerFrames::layout(ShimmerStyle::ColorsFlow, 20.0, Size::new(150.0, 30.0), Some(12));
    assert_eq!(f.band, Rect::new(-20.0, 0.0, 260.0, 30.0));
    assert_eq!(f.band.width(), 12.0 * 20.0 + 40.0);
    assert_eq!(f.mask, Rect::new(20.0, 0.0, 190.0, 30.0));
    assert_eq!(f.mask.width(), 170.0);
}

#[test]
fn flow_frames_without_tiles_use_container_width() {
    let f = LayerFrames::layout(ShimmerStyle::ColorsFlow, 20.0, Size::new(150.0, 30.0), None);
    assert_eq!(f.band.width(), 190.0);
}

#[test]
fn flow_frames_with_an_empty_tile_list_have_no_raw_width() {
    let f = LayerFrames::layout(ShimmerStyle::ColorsFlow, 20.0, Size::new(150.0, 30.0), Some(0));
    assert_eq!(f.band.width(), 40.0);
}

#[test]
fn indicator_band_is_band_wide() {
    let f = LayerFrames::layout(ShimmerStyle::IndicatorMove, 20.0, Size::new(150.0, 30.0), None);
    assert_eq!(f.band, Rect::new(0.0, 0.0, 20.0, 30.0));
    assert_eq!(f.mask, Rect::new(0.0, 0.0, 150.0, 30.0));
}

#[test]
fn colors_change_band_covers_container() {
    let f = LayerFrames::layout(ShimmerStyle::ColorsChange, 20.0, Size::new(150.0, 30.0), Some(6));
    assert_eq!(f.band, Rect::new(0.0, 0.0, 150.0, 30.0));
}
