use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pixmorph::{MorphConfig, PixelBuffer, PngSequenceRenderer, Renderer, TextRenderer};

#[derive(Parser, Debug)]
#[command(name = "pixmorph", version)]
struct Cli {
    /// Log decoder and morph progress to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a pixel map as rows of (r,g,b) triples.
    Print(InputArgs),
    /// Mirror an image horizontally or vertically.
    Flip(FlipArgs),
    /// Convert an image to grayscale.
    Gray(InputArgs),
    /// Nearest-neighbour resize.
    Scale(ScaleArgs),
    /// Blend two images of the same size.
    Blend(BlendArgs),
    /// Animate a morph from one image into another.
    Morph(MorphArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Input pixel map.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Parser, Debug)]
struct FlipArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long, value_enum, default_value_t = Axis::Horizontal)]
    axis: Axis,
}

#[derive(Parser, Debug)]
struct ScaleArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long)]
    width: u32,

    #[arg(long)]
    height: u32,
}

#[derive(Parser, Debug)]
struct BlendArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Second pixel map, weighted by `1 - alpha`.
    #[arg(long = "with")]
    with_path: PathBuf,

    /// Weight of the first image, in [0, 1].
    #[arg(long)]
    alpha: f64,
}

#[derive(Parser, Debug)]
struct MorphArgs {
    /// Source pixel map (first frame).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target pixel map (last frame). Rescaled to the source size if needed.
    #[arg(long)]
    target: PathBuf,

    /// Morph settings JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of blend steps (renders steps + 1 frames).
    #[arg(long)]
    steps: Option<u32>,

    /// Pause after each frame, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write PNG frames into this directory instead of printing them.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Size of one source pixel in PNG output.
    #[arg(long)]
    cell_size: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Print(args) => emit(&load(&args.in_path)?),
        Command::Flip(args) => cmd_flip(args),
        Command::Gray(args) => emit(&pixmorph::grayscale(&load(&args.in_path)?)),
        Command::Scale(args) => cmd_scale(args),
        Command::Blend(args) => cmd_blend(args),
        Command::Morph(args) => cmd_morph(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<PixelBuffer> {
    pixmorph::read_ppm(path).with_context(|| format!("load pixel map '{}'", path.display()))
}

fn emit(buf: &PixelBuffer) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "{buf}").context("write to stdout")?;
    out.flush().context("flush stdout")
}

fn cmd_flip(args: FlipArgs) -> anyhow::Result<()> {
    let img = load(&args.input.in_path)?;
    let out = match args.axis {
        Axis::Horizontal => pixmorph::flip_horizontal(&img),
        Axis::Vertical => pixmorph::flip_vertical(&img),
    };
    emit(&out)
}

fn cmd_scale(args: ScaleArgs) -> anyhow::Result<()> {
    let img = load(&args.input.in_path)?;
    let out = pixmorph::scale(&img, args.width, args.height)?;
    emit(&out)
}

fn cmd_blend(args: BlendArgs) -> anyhow::Result<()> {
    let a = load(&args.input.in_path)?;
    let b = load(&args.with_path)?;
    let out = pixmorph::blend_buffers(&a, &b, args.alpha)?;
    emit(&out)
}

fn cmd_morph(args: MorphArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => MorphConfig::from_path(path)?,
        None => MorphConfig::default(),
    };
    if let Some(steps) = args.steps {
        cfg.steps = steps;
    }
    if let Some(ms) = args.delay_ms {
        cfg.frame_delay_ms = ms;
    }
    if let Some(cell) = args.cell_size {
        cfg.cell_size = cell;
    }
    cfg.validate()?;

    let source = load(&args.in_path)?;
    let target = load(&args.target)?;
    let opts = cfg.to_opts();

    let mut renderer: Box<dyn Renderer> = match &args.frames_dir {
        Some(dir) => Box::new(PngSequenceRenderer::new(dir, cfg.cell_size)?),
        None => Box::new(TextRenderer::new(std::io::stdout().lock())),
    };

    let stats = pixmorph::morph(&source, &target, &opts, renderer.as_mut())?;

    if let Some(dir) = &args.frames_dir {
        eprintln!(
            "wrote {} frames to {} ({}ms between frames)",
            stats.frames_rendered,
            dir.display(),
            opts.frame_delay.as_millis()
        );
    }
    Ok(())
}
