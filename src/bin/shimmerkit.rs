use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use shimmerkit::{
    Color, FixedAdvanceMeasure, ParleyMeasure, RecordingTarget, Rect, ShimmerConfig, ShimmerLabel,
    ShimmerStyle, Size, TextAlign, TextContent, TextMeasure, Timeline, TrackConfig, TrackStyle,
    plan_track,
};

/// Palette used by `gallery` for the palette-driven styles.
const DEMO_PALETTE: [u32; 6] = [0x8845EB, 0x78ACFF, 0x6BDEB0, 0xECDC65, 0xE84DCC, 0x4B94FF];

#[derive(Parser, Debug)]
#[command(name = "shimmerkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the band layer and timelines for one label and print them as JSON.
    Timeline(TimelineArgs),
    /// Print a one-line summary per style using a demo palette.
    Gallery(LabelArgs),
    /// Plan the single-text track variant and print it as JSON.
    Track(TrackArgs),
}

#[derive(Parser, Debug)]
struct LabelArgs {
    /// Label width in points.
    #[arg(long, default_value_t = 150.0)]
    width: f64,

    /// Label height in points.
    #[arg(long, default_value_t = 30.0)]
    height: f64,

    /// Label text.
    #[arg(long, default_value = "Shimmering label")]
    text: String,

    /// Per-character advance when no font is given.
    #[arg(long, default_value_t = 9.0)]
    advance: f64,

    /// Font file to measure the text with instead of a fixed advance.
    #[arg(long)]
    font: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = AlignArg::Left)]
    align: AlignArg,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Shimmer configuration JSON; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured style.
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Also evaluate the installed timelines at these times (seconds).
    #[arg(long = "sample", value_delimiter = ',')]
    samples: Vec<f64>,

    #[command(flatten)]
    label: LabelArgs,
}

#[derive(Parser, Debug)]
struct TrackArgs {
    #[arg(long, value_enum, default_value_t = TrackStyleArg::Indicator)]
    style: TrackStyleArg,

    /// Indicator color as #RRGGBB.
    #[arg(long, default_value = "#FF0000")]
    color: String,

    /// Flow palette as comma-separated #RRGGBB values.
    #[arg(long, value_delimiter = ',')]
    palette: Vec<String>,

    /// Source image size for `image-flow`, as WIDTHxHEIGHT.
    #[arg(long, default_value = "100x50")]
    image: String,

    /// Points per second.
    #[arg(long, default_value_t = 30.0)]
    speed: f64,

    /// Indicator width, or per-color tile width.
    #[arg(long, default_value_t = 20.0)]
    width: f64,

    #[arg(long, default_value_t = 150.0)]
    text_width: f64,

    #[arg(long, default_value_t = 20.0)]
    line_height: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignArg {
    Left,
    Center,
    Right,
    Justified,
    Natural,
}

impl From<AlignArg> for TextAlign {
    fn from(value: AlignArg) -> Self {
        match value {
            AlignArg::Left => Self::Left,
            AlignArg::Center => Self::Center,
            AlignArg::Right => Self::Right,
            AlignArg::Justified => Self::Justified,
            AlignArg::Natural => Self::Natural,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    IndicatorMove,
    IndicatorMoveReverse,
    ColorsFlow,
    ColorsChange,
    None,
}

impl From<StyleArg> for ShimmerStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::IndicatorMove => Self::IndicatorMove,
            StyleArg::IndicatorMoveReverse => Self::IndicatorMoveReverse,
            StyleArg::ColorsFlow => Self::ColorsFlow,
            StyleArg::ColorsChange => Self::ColorsChange,
            StyleArg::None => Self::None,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TrackStyleArg {
    Indicator,
    ColorsFlow,
    ImageFlow,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Gallery(args) => cmd_gallery(args),
        Command::Track(args) => cmd_track(args),
    }
}

fn read_config_json(args: &TimelineArgs) -> anyhow::Result<ShimmerConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("open config '{}'", path.display()))?;
            serde_json::from_reader(BufReader::new(f)).with_context(|| "parse config JSON")?
        }
        None => ShimmerConfig::default(),
    };
    if let Some(style) = args.style {
        cfg.style = style.into();
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Run `cfg` through a label laid out per `args` and return what it installed.
fn play(args: &LabelArgs, cfg: ShimmerConfig) -> anyhow::Result<RecordingTarget> {
    match &args.font {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
            Ok(play_with(args, cfg, ParleyMeasure::new(&bytes)?))
        }
        None => Ok(play_with(args, cfg, FixedAdvanceMeasure::new(args.advance))),
    }
}

fn play_with<M: TextMeasure>(args: &LabelArgs, cfg: ShimmerConfig, measurer: M) -> RecordingTarget {
    let mut label = ShimmerLabel::new(RecordingTarget::new(), measurer);
    label.set_text(Some(TextContent::Plain(args.text.clone())), 0.0);
    label.set_alignment(args.align.into(), 0.0);
    label.on_attached_to_display();
    label.on_bounds_changed(Size::new(args.width, args.height));
    label.apply_configuration(cfg);
    label.into_target()
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let cfg = read_config_json(&args)?;
    let target = play(&args.label, cfg)?;

    let samples: Vec<_> = target
        .installed
        .iter()
        .map(|(slot, tl)| {
            let values: Vec<_> = args.samples.iter().map(|t| (t, tl.sample(*t))).collect();
            serde_json::json!({ "slot": slot, "values": values })
        })
        .collect();
    let installed: Vec<_> = target
        .installed
        .iter()
        .map(|(slot, tl)| serde_json::json!({ "slot": slot, "timeline": tl }))
        .collect();
    let out = serde_json::json!({
        "mask": target.mask,
        "text_colors": target.text_colors,
        "installed": installed,
        "samples": samples,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_gallery(args: LabelArgs) -> anyhow::Result<()> {
    let palette: Vec<Color> = DEMO_PALETTE.iter().map(|&c| Color::from_hex(c)).collect();
    let flow = ShimmerConfig::builder()
        .style(ShimmerStyle::ColorsFlow)
        .palette(palette.iter().copied());
    let demos = [
        ("none", ShimmerConfig::default()),
        (
            "indicator_move",
            ShimmerConfig::builder().style(ShimmerStyle::IndicatorMove).build()?,
        ),
        ("colors_flow", flow.clone().build()?),
        ("colors_flow+blink", flow.blink(true).build()?),
        (
            "colors_change",
            ShimmerConfig::builder()
                .style(ShimmerStyle::ColorsChange)
                .palette(palette.iter().copied())
                .build()?,
        ),
    ];
    for (name, cfg) in demos {
        let target = play(&args, cfg)?;
        let summary = match target.installed.first().map(|(_, tl)| tl) {
            Some(Timeline::Translation(t)) => {
                format!("translate {:.1} -> {:.1} over {:.2}s", t.from, t.to, t.timing.duration_secs)
            }
            Some(Timeline::Colors(k)) => format!(
                "{} keyframes x {} colors over {:.2}s",
                k.values.len(),
                k.values.first().map_or(0, Vec::len),
                k.timing.duration_secs
            ),
            Some(Timeline::Opacity(k)) => format!("opacity over {:.2}s", k.timing.duration_secs),
            None => "nothing installed".to_string(),
        };
        let extra = if target.installed.len() > 1 { " + blink" } else { "" };
        println!("{name}: {summary}{extra}");
    }
    Ok(())
}

fn parse_size(s: &str) -> anyhow::Result<Size> {
    let (w, h) = s
        .split_once('x')
        .with_context(|| format!("image size '{s}' must be WIDTHxHEIGHT"))?;
    Ok(Size::new(
        w.trim().parse().with_context(|| format!("image width '{w}'"))?,
        h.trim().parse().with_context(|| format!("image height '{h}'"))?,
    ))
}

fn cmd_track(args: TrackArgs) -> anyhow::Result<()> {
    let style = match args.style {
        TrackStyleArg::Indicator => TrackStyle::Indicator(Color::parse_hex(&args.color)?),
        TrackStyleArg::ColorsFlow => TrackStyle::ColorsFlow(
            args.palette
                .iter()
                .map(|c| Color::parse_hex(c))
                .collect::<Result<_, _>>()?,
        ),
        TrackStyleArg::ImageFlow => TrackStyle::ImageFlow {
            image_size: parse_size(&args.image)?,
        },
    };
    let cfg = TrackConfig {
        style,
        speed: args.speed,
        width: args.width,
    };
    let frame = Rect::new(0.0, 0.0, args.text_width, args.line_height);
    let Some(plan) = plan_track(&cfg, frame, args.line_height) else {
        anyhow::bail!("track style draws nothing for these inputs");
    };
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
