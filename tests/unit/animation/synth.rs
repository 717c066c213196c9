use super::*;
use crate::{
    animation::timeline::TimelineValue,
    foundation::core::{Size, TextAlign},
};

fn demo_palette() -> Vec<Color> {
    [0x8845EB, 0x78ACFF, 0x6BDEB0, 0xECDC65, 0xE84DCC, 0x4B94FF]
        .into_iter()
        .map(Color::from_hex)
        .collect()
}

fn ctx(text_width: Option<f64>, container_width: f64, align: TextAlign) -> SynthesisContext {
    SynthesisContext {
        metrics: TextMetrics {
            measured_width: text_width,
            container: Size::new(container_width, 30.0),
            align,
        },
        band_layer_width: 0.0,
        screen_width: 375.0,
    }
}

fn cfg(style: ShimmerStyle) -> ShimmerConfig {
    ShimmerConfig {
        style,
        palette: demo_palette(),
        ..ShimmerConfig::default()
    }
}

#[test]
fn indicator_move_translates_from_minus_band_to_text_end() {
    let c = ShimmerConfig {
        band_width: 20.0,
        speed: Some(30.0),
        ..cfg(ShimmerStyle::IndicatorMove)
    };
    let out = synthesize(&c, &ctx(Some(100.0), 150.0, TextAlign::Left));
    let Some(Timeline::Translation(tl)) = out.timeline else {
        panic!("expected translation timeline");
    };
    assert_eq!(tl.from, -20.0);
    assert_eq!(tl.to, 100.0);
    assert_eq!(tl.timing.duration_secs, 5.0);
    assert_eq!(tl.timing.delay_secs, INDICATOR_DELAY_SECS);
    assert!(!tl.timing.autoreverse);
    assert_eq!(tl.timing.repeat, Repeat::Forever);
}

#[test]
fn indicator_reverse_sets_autoreverse_and_honors_repeat_flag() {
    let c = ShimmerConfig {
        repeat: false,
        ..cfg(ShimmerStyle::IndicatorMoveReverse)
    };
    let out = synthesize(&c, &ctx(Some(100.0), 150.0, TextAlign::Right));
    let Some(Timeline::Translation(tl)) = out.timeline else {
        panic!("expected translation timeline");
    };
    assert!(tl.timing.autoreverse);
    assert_eq!(tl.timing.repeat, Repeat::Once);
    assert_eq!(tl.from, 30.0);
    assert_eq!(tl.to, 150.0);
}

#[test]
fn indicator_band_shape_and_shear() {
    let c = ShimmerConfig {
        band_width: 20.0,
        edge_radius: 5.0,
        ..cfg(ShimmerStyle::IndicatorMove)
    };
    let band = synthesize(&c, &ctx(Some(100.0), 150.0, TextAlign::Left))
        .band
        .unwrap();
    assert_eq!(band.locations, Some(vec![0.0, 0.375, 0.625, 1.0]));
    assert_eq!(
        band.colors,
        vec![Color::TRANSPARENT, Color::WHITE, Color::WHITE, Color::TRANSPARENT]
    );
    assert_eq!(band.band_transform, shear(-30.0));
    assert_eq!(band.mask_transform, Affine::IDENTITY);
    assert_eq!(band.frames.band.width(), 20.0);
}

#[test]
fn indicator_waits_for_width() {
    let out = synthesize(&cfg(ShimmerStyle::IndicatorMove), &ctx(Some(100.0), 0.0, TextAlign::Left));
    assert!(out.timeline.is_none());
}

#[test]
fn colors_flow_has_palette_len_plus_one_keyframes_and_closes_the_loop() {
    let c = cfg(ShimmerStyle::ColorsFlow);
    let out = synthesize(&c, &ctx(Some(100.0), 300.0, TextAlign::Left));
    let band = out.band.unwrap();
    // 300 / (6 * 20) -> 3 sets.
    assert_eq!(band.colors.len(), 18);
    assert_eq!(band.band_transform, shear(-45.0));
    assert_eq!(band.mask_transform, shear(45.0));

    let Some(Timeline::Colors(k)) = out.timeline else {
        panic!("expected colors timeline");
    };
    assert_eq!(k.values.len(), c.palette.len() + 1);
    assert_eq!(k.values.first(), k.values.last());
    assert_eq!(k.values[0], band.colors);
    assert_eq!(k.values[1][0], *band.colors.last().unwrap());
    assert_eq!(k.mode, CalculationMode::CubicPaced);
    assert_eq!(k.timing.fill, FillMode::Backwards);
    assert_eq!(k.timing.repeat, Repeat::Forever);
    assert_eq!(k.timing.duration_secs, 10.0);
}

#[test]
fn colors_flow_prefers_stale_band_width_for_tiling_and_duration() {
    let c = cfg(ShimmerStyle::ColorsFlow);
    let mut context = ctx(Some(100.0), 150.0, TextAlign::Left);
    context.band_layer_width = 400.0;
    let out = synthesize(&c, &context);
    assert_eq!(out.band.unwrap().colors.len(), 24);
    assert_eq!(out.timeline.unwrap().duration_secs(), 400.0 / 30.0);
}

#[test]
fn colors_styles_without_palette_draw_nothing_but_blink() {
    for style in [ShimmerStyle::ColorsFlow, ShimmerStyle::ColorsChange] {
        let c = ShimmerConfig {
            palette: Vec::new(),
            ..cfg(style)
        };
        let out = synthesize(&c, &ctx(Some(100.0), 150.0, TextAlign::Left));
        assert!(out.is_empty());

        let blinking = ShimmerConfig { blink: true, ..c };
        let out = synthesize(&blinking, &ctx(Some(100.0), 150.0, TextAlign::Left));
        assert!(out.band.is_none());
        assert!(out.timeline.is_none());
        assert_eq!(out.blink, Some(blink_overlay()));
    }
}

#[test]
fn zero_width_indicator_band_has_finite_stops() {
    let c = ShimmerConfig {
        band_width: 0.0,
        ..cfg(ShimmerStyle::IndicatorMove)
    };
    let out = synthesize(&c, &ctx(Some(100.0), 150.0, TextAlign::Left));
    let stops = out.band.unwrap().locations.unwrap();
    assert!(stops.iter().all(|l| l.is_finite()));
    assert!(matches!(
        out.timeline,
        Some(Timeline::Translation(t)) if t.from == 0.0 && t.to == 100.0
    ));
}

#[test]
fn colors_change_pairs_each_palette_entry() {
    let c = cfg(ShimmerStyle::ColorsChange);
    let out = synthesize(&c, &ctx(Some(100.0), 150.0, TextAlign::Left));
    let band = out.band.unwrap();
    assert_eq!(band.colors, vec![c.palette[0], c.palette[0]]);
    assert_eq!(band.band_transform, Affine::IDENTITY);

    let Some(Timeline::Colors(k)) = out.timeline else {
        panic!("expected colors timeline");
    };
    assert_eq!(k.values.len(), c.palette.len());
    for (pair, color) in k.values.iter().zip(&c.palette) {
        assert_eq!(pair, &vec![*color, *color]);
    }
    assert_eq!(k.timing.repeat, Repeat::Forever);
    assert_eq!(k.timing.duration_secs, 5.0);
}

#[test]
fn none_style_produces_nothing_even_with_blink() {
    let c = ShimmerConfig {
        blink: true,
        ..cfg(ShimmerStyle::None)
    };
    assert!(synthesize(&c, &ctx(Some(100.0), 150.0, TextAlign::Left)).is_empty());
}

#[test]
fn blink_is_layered_on_top_of_style() {
    let c = ShimmerConfig {
        blink: true,
        ..cfg(ShimmerStyle::ColorsFlow)
    };
    let out = synthesize(&c, &ctx(Some(100.0), 150.0, TextAlign::Left));
    assert!(out.timeline.is_some());
    assert_eq!(out.blink, Some(blink_overlay()));
}

#[test]
fn blink_overlay_curve() {
    let Timeline::Opacity(k) = blink_overlay() else {
        panic!("expected opacity timeline");
    };
    assert_eq!(k.values, vec![1.0, 1.0, 0.25, 0.25]);
    assert_eq!(k.key_times, Some(vec![0.0, 0.8, 0.95, 1.0]));
    assert_eq!(k.timing.duration_secs, 1.0);
    assert!(k.timing.autoreverse);
    assert_eq!(k.timing.repeat, Repeat::Forever);

    let tl = blink_overlay();
    assert_eq!(tl.sample(0.5), Some(TimelineValue::Opacity(1.0)));
    assert_eq!(tl.sample(1.02), Some(TimelineValue::Opacity(0.25)));
}

#[test]
fn rotations_of_empty_list_stay_empty() {
    let r = flow_rotations(&[], 0);
    assert_eq!(r, vec![Vec::<Color>::new()]);
}
