use shimmerkit::{FixedAdvanceMeasure, RecordingTarget, ShimmerConfig, ShimmerLabel, Size, TextContent};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/colors_flow.json");
    let cfg: ShimmerConfig = serde_json::from_str(s)?;
    cfg.validate()?;

    let mut label = ShimmerLabel::new(RecordingTarget::new(), FixedAdvanceMeasure::new(9.0));
    label.set_text(Some(TextContent::Plain("Shimmering label".into())), 0.0);
    label.on_attached_to_display();
    label.on_bounds_changed(Size::new(200.0, 30.0));
    label.apply_configuration(cfg);

    for (slot, timeline) in &label.target().installed {
        for t in [0.0, 0.5, 1.0, 2.5, 5.0] {
            println!("{slot:?} @ {t:.1}s: {:?}", timeline.sample(t));
        }
    }

    Ok(())
}
