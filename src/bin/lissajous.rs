use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "lissajous", version, about = "Render Lissajous figures and animations")]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one full trajectory as PNG or SVG.
    Still(StillArgs),
    /// Render the figure alone as an animation.
    Animate(AnimArgs),
    /// Render the figure with its x and y waveforms on four side panels.
    Waves(AnimArgs),
}

#[derive(Args, Debug)]
struct ParamArgs {
    /// JSON config; flags below override its fields.
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    amp_x: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    freq_x: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    amp_y: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    freq_y: Option<f64>,

    /// Fixed phase of the y oscillator, in radians.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "vary_phase")]
    phase: Option<f64>,

    /// Sweep the phase over [0, 2π) across the animation.
    #[arg(long)]
    vary_phase: bool,

    /// Output width and height in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// TrueType/OpenType file used to draw titles and axis labels in PNG, GIF and MP4 output.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output directory for auto-named files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Explicit output path (overrides --out-dir and the generated name).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StillArgs {
    #[command(flatten)]
    common: ParamArgs,

    #[arg(long, value_enum, default_value_t = StillFormat::Png)]
    format: StillFormat,
}

#[derive(Args, Debug)]
struct AnimArgs {
    #[command(flatten)]
    common: ParamArgs,

    /// Trace the curve, then erase it.
    #[arg(long)]
    draw: bool,

    /// Mark the current point.
    #[arg(long)]
    dot: bool,

    #[arg(long)]
    frames: Option<u32>,

    #[arg(long)]
    fps: Option<u32>,

    #[arg(long, value_enum, default_value_t = AnimFormat::Gif)]
    format: AnimFormat,

    /// Write GIF bytes to stdout instead of a file.
    #[arg(long, conflicts_with = "out")]
    embed: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StillFormat {
    Png,
    Svg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AnimFormat {
    Gif,
    Mp4,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match cli.cmd {
        Command::Still(args) => cmd_still(args),
        Command::Animate(args) => cmd_animate(args, false),
        Command::Waves(args) => cmd_animate(args, true),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::INFO,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the optional config file, then apply flag overrides.
fn load_config(args: &ParamArgs, animated: bool) -> anyhow::Result<lissajous::RenderConfig> {
    let mut cfg = match &args.params {
        Some(path) => lissajous::RenderConfig::from_json_path(path)
            .with_context(|| format!("load params '{}'", path.display()))?,
        None => lissajous::RenderConfig::default(),
    };

    let p = &mut cfg.params;
    if let Some(v) = args.amp_x {
        p.x.amplitude = v;
    }
    if let Some(v) = args.freq_x {
        p.x.angular_frequency = v;
    }
    if let Some(v) = args.amp_y {
        p.y.amplitude = v;
    }
    if let Some(v) = args.freq_y {
        p.y.angular_frequency = v;
    }
    if let Some(v) = args.phase {
        p.phase = lissajous::PhaseSpec::Fixed(v);
    } else if args.vary_phase {
        p.phase = lissajous::PhaseSpec::Varying;
    }

    if let Some(side) = args.size {
        let canvas = Some(lissajous::Canvas::square(side));
        if animated {
            cfg.animation.canvas = canvas;
        } else {
            cfg.still.canvas = canvas;
        }
    }
    if let Some(font) = &args.font {
        if animated {
            cfg.animation.font = Some(font.clone());
        } else {
            cfg.still.font = Some(font.clone());
        }
    }
    Ok(cfg)
}

fn target(args: &ParamArgs, format: lissajous::OutputFormat) -> lissajous::OutputTarget {
    match &args.out {
        Some(path) => lissajous::OutputTarget::File {
            path: path.clone(),
            format,
        },
        None => lissajous::OutputTarget::Dir {
            dir: args.out_dir.clone(),
            format,
        },
    }
}

fn cmd_still(args: StillArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.common, false)?;
    cfg.validate()?;
    let format = match args.format {
        StillFormat::Png => lissajous::OutputFormat::Png,
        StillFormat::Svg => lissajous::OutputFormat::Svg,
    };
    let path = lissajous::render_still(&cfg.params, &cfg.still, &target(&args.common, format))
        .context("render still")?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_animate(args: AnimArgs, waves: bool) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.common, true)?;
    let anim = &mut cfg.animation;
    anim.draw |= args.draw;
    anim.show_dot |= args.dot;
    if let Some(frames) = args.frames {
        anim.frames = frames;
    }
    if let Some(fps) = args.fps {
        anim.fps = fps;
    }
    cfg.validate()?;

    let format = match args.format {
        AnimFormat::Gif => lissajous::OutputFormat::Gif,
        AnimFormat::Mp4 => lissajous::OutputFormat::Mp4,
    };
    let target = if args.embed {
        lissajous::OutputTarget::Embed
    } else {
        target(&args.common, format)
    };

    let rendered = if waves {
        lissajous::render_waves(&cfg.params, &cfg.animation, &target)
    } else {
        lissajous::render_animation(&cfg.params, &cfg.animation, &target)
    }
    .context("render animation")?;

    match rendered {
        lissajous::Rendered::Saved(path) => eprintln!("wrote {}", path.display()),
        lissajous::Rendered::Embedded(anim) => {
            let bytes = anim.to_gif_bytes().context("encode gif")?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("write gif to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
