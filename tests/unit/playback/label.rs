use super::*;
use crate::{
    geometry::measure::FixedAdvanceMeasure,
    playback::target::{RecordingTarget, TargetCall},
};

type Label = ShimmerLabel<RecordingTarget, FixedAdvanceMeasure>;

fn label() -> Label {
    let mut l = ShimmerLabel::new(RecordingTarget::new(), FixedAdvanceMeasure::new(10.0));
    l.set_text(Some(TextContent::Plain("0123456789".into())), 0.0);
    l
}

fn indicator() -> ShimmerConfig {
    ShimmerConfig {
        style: ShimmerStyle::IndicatorMove,
        ..ShimmerConfig::default()
    }
}

#[test]
fn presentation_per_style() {
    let (mask, colors) = presentation(&indicator(), Color::BLACK);
    assert_eq!(mask, MaskRelation::BandMasksOverlay);
    assert_eq!(colors.base, Color::BLACK);
    assert_eq!(colors.overlay, Some(Color::RED));

    let flow = ShimmerConfig {
        style: ShimmerStyle::ColorsFlow,
        palette: vec![Color::RED, Color::WHITE],
        ..ShimmerConfig::default()
    };
    let (mask, colors) = presentation(&flow, Color::BLACK);
    assert_eq!(mask, MaskRelation::TextMasksBand);
    assert_eq!(colors.base, Color::TRANSPARENT);
    assert_eq!(colors.overlay, Some(Color::BLACK));
}

#[test]
fn presentation_without_palette_keeps_caller_colors() {
    let blue = Color::from_hex(0x0000FF);
    for style in [ShimmerStyle::ColorsFlow, ShimmerStyle::ColorsChange] {
        let cfg = ShimmerConfig {
            style,
            ..ShimmerConfig::default()
        };
        let (mask, colors) = presentation(&cfg, blue);
        assert_eq!(mask, MaskRelation::None);
        assert_eq!(
            colors,
            TextColors {
                base: blue,
                overlay: None,
            }
        );
    }
}

#[test]
fn apply_without_width_defers_until_layout() {
    let mut l = label();
    l.on_attached_to_display();
    l.apply_configuration(indicator());
    assert!(l.is_deferred());
    assert!(!l.is_playing());
    assert_eq!(l.target().count_installs(), 0);

    l.on_bounds_changed(Size::new(150.0, 30.0));
    assert!(!l.is_deferred());
    assert!(l.is_playing());
    assert!(l.target().installed(Slot::Band).is_some());
}

#[test]
fn layout_while_detached_does_not_start() {
    let mut l = label();
    l.apply_configuration(indicator());
    l.on_bounds_changed(Size::new(150.0, 30.0));
    assert!(!l.is_playing());

    l.on_attached_to_display();
    assert!(l.is_playing());
}

#[test]
fn text_color_is_held_back_while_playing_and_restored_on_stop() {
    let mut l = label();
    l.on_attached_to_display();
    l.on_bounds_changed(Size::new(150.0, 30.0));
    l.apply_configuration(ShimmerConfig {
        style: ShimmerStyle::ColorsChange,
        palette: vec![Color::RED, Color::WHITE],
        ..ShimmerConfig::default()
    });
    assert_eq!(
        l.target().text_colors.map(|c| c.base),
        Some(Color::TRANSPARENT)
    );

    l.set_text_color(Color::from_hex(0x0000FF));
    assert_eq!(
        l.target().text_colors.map(|c| c.base),
        Some(Color::TRANSPARENT)
    );

    l.stop();
    assert_eq!(
        l.target().text_colors,
        Some(TextColors {
            base: Color::from_hex(0x0000FF),
            overlay: None,
        })
    );
    assert_eq!(l.target().mask, MaskRelation::None);
}

#[test]
fn text_change_stops_and_debounces_restart() {
    let mut l = label();
    l.on_attached_to_display();
    l.on_bounds_changed(Size::new(150.0, 30.0));
    l.apply_configuration(indicator());
    assert!(l.is_playing());

    l.set_text(Some(TextContent::Plain("abc".into())), 1.0);
    assert!(!l.is_playing());
    assert!(l.refresh_pending());

    l.set_alignment(TextAlign::Right, 1.2);
    l.tick(1.6);
    assert!(!l.is_playing());
    l.tick(1.8);
    assert!(l.is_playing());

    let Some(Timeline::Translation(tl)) = l.target().installed(Slot::Band) else {
        panic!("expected translation timeline");
    };
    assert_eq!(tl.from, 150.0 - 30.0 - 20.0);
    assert_eq!(tl.to, 150.0);
}

#[test]
fn setting_same_text_is_ignored() {
    let mut l = label();
    l.on_attached_to_display();
    l.on_bounds_changed(Size::new(150.0, 30.0));
    l.apply_configuration(indicator());
    l.target_mut().clear_log();

    l.set_text(Some(TextContent::Plain("0123456789".into())), 5.0);
    assert!(l.is_playing());
    assert!(l.target().calls.is_empty());
    assert!(!l.refresh_pending());
}

#[test]
fn inputs_change_while_playing_does_not_schedule() {
    let mut l = label();
    l.on_attached_to_display();
    l.on_bounds_changed(Size::new(150.0, 30.0));
    l.apply_configuration(indicator());
    l.set_font(FontSpec::default(), 2.0);
    assert!(!l.refresh_pending());
}

#[test]
fn refresh_is_dropped_on_detach() {
    let mut l = label();
    l.apply_configuration(indicator());
    assert!(l.is_deferred());
    l.set_font(FontSpec::default(), 0.0);
    assert!(l.refresh_pending());
    l.on_detached_from_display();
    assert!(!l.refresh_pending());
}

#[test]
fn reset_to_none_restores_defaults() {
    let mut l = label();
    l.on_attached_to_display();
    l.on_bounds_changed(Size::new(150.0, 30.0));
    l.set_text_color(Color::from_hex(0x00FF00));
    l.apply_configuration(ShimmerConfig {
        blink: true,
        ..indicator()
    });
    assert!(l.target().installed(Slot::Blink).is_some());

    l.reset_to_none();
    assert!(!l.is_playing());
    assert_eq!(l.config(), &ShimmerConfig::default());
    assert!(l.target().installed.is_empty());
    assert_eq!(
        l.target().calls.last(),
        Some(&TargetCall::TextColors(TextColors {
            base: Color::from_hex(0x00FF00),
            overlay: None,
        }))
    );
}

#[test]
fn band_layer_width_is_remembered_for_the_next_pass() {
    let mut l = label();
    l.on_attached_to_display();
    l.on_bounds_changed(Size::new(150.0, 30.0));
    l.apply_configuration(ShimmerConfig {
        style: ShimmerStyle::ColorsFlow,
        palette: vec![Color::RED, Color::WHITE, Color::BLACK],
        ..ShimmerConfig::default()
    });
    // 150 / (3 * 20) -> 3 sets of 3 colors, band spans 9 * 20 + 2 * 20.
    assert_eq!(l.band_layer_width(), 220.0);
    assert!(matches!(
        l.target().installed(Slot::Band),
        Some(Timeline::Colors(k)) if k.timing.duration_secs == 5.0
    ));

    l.start(true);
    assert!(matches!(
        l.target().installed(Slot::Band),
        Some(Timeline::Colors(k)) if k.values[0].len() == 12
    ));
}

#[test]
fn attributed_text_measures_all_runs() {
    let mut l = label();
    l.on_attached_to_display();
    l.on_bounds_changed(Size::new(150.0, 30.0));
    l.set_attributed_text(
        vec![
            TextRun::plain("abc"),
            TextRun {
                text: "de".into(),
                font: Some(FontSpec {
                    size_px: 30.0,
                    line_height: 34.0,
                }),
            },
        ],
        0.0,
    );
    l.apply_configuration(indicator());
    let Some(Timeline::Translation(tl)) = l.target().installed(Slot::Band) else {
        panic!("expected translation timeline");
    };
    assert_eq!(tl.to, 50.0);
}
