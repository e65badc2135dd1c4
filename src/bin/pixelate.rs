use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pixelate", version)]
struct Cli {
    /// Log pipeline details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pixelate an image and write it as a PNG.
    Render(RenderArgs),
    /// Print the dimensions and block grid a render would use.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct BlockArgs {
    /// Block edge length in working-surface pixels.
    #[arg(long, short = 'b')]
    block_size: Option<u32>,

    /// Crop to whole blocks before sampling.
    #[arg(long)]
    align: bool,

    /// JSON pixelation config; explicit flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Smallest working dimension.
    #[arg(long, default_value_t = pixelate::MIN_RESOLUTION)]
    min_resolution: u32,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image: file path, file:// URL or base64 data: URL.
    #[arg(long = "in")]
    input: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    block: BlockArgs,

    /// Stroke block borders.
    #[arg(long)]
    borders: bool,

    #[arg(long, value_enum)]
    shape: Option<ShapeChoice>,

    #[arg(long, value_enum, default_value_t = BackendChoice::Crisp)]
    backend: BackendChoice,

    #[arg(long, value_enum, default_value_t = InterpolationChoice::Bilinear)]
    interpolation: InterpolationChoice,

    /// Fit the result into a WxH display surface (e.g. 300x300).
    #[arg(long, value_parser = parse_size)]
    fit: Option<(u32, u32)>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input image: file path, file:// URL or base64 data: URL.
    #[arg(long = "in")]
    input: String,

    #[command(flatten)]
    block: BlockArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Square,
    Circle,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Crisp,
    Antialiased,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InterpolationChoice {
    Nearest,
    Bilinear,
}

const DEFAULT_BLOCK_SIZE: u32 = 15;
const FIT_BACKGROUND: pixelate::Rgba8 = pixelate::Rgba8::opaque(0, 0, 0);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: bool) {
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

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X', ','])
        .ok_or_else(|| "expected WxH".to_string())?;
    let w: u32 = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let h: u32 = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    if w == 0 || h == 0 {
        return Err("width and height must be non-zero".to_string());
    }
    Ok((w, h))
}

fn read_config(path: &Path) -> anyhow::Result<pixelate::PixelationConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = pixelate::PixelationConfig::from_json(&raw)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(cfg)
}

fn base_config(args: &BlockArgs) -> anyhow::Result<pixelate::PixelationConfig> {
    let mut cfg = match &args.config {
        Some(path) => read_config(path)?,
        None => pixelate::PixelationConfig::new(DEFAULT_BLOCK_SIZE),
    };
    if let Some(bs) = args.block_size {
        cfg.block_size = bs;
    }
    if args.align {
        cfg.align_pixels = true;
    }
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = base_config(&args.block)?;
    if args.borders {
        cfg.draw_borders = true;
    }
    if let Some(shape) = args.shape {
        cfg.pixel_shape = match shape {
            ShapeChoice::Square => pixelate::PixelShape::Square,
            ShapeChoice::Circle => pixelate::PixelShape::Circle,
        };
    }

    let opts = pixelate::EngineOpts {
        min_resolution: args.block.min_resolution,
        interpolation: match args.interpolation {
            InterpolationChoice::Nearest => pixelate::Interpolation::Nearest,
            InterpolationChoice::Bilinear => pixelate::Interpolation::Bilinear,
        },
        backend: match args.backend {
            BackendChoice::Crisp => pixelate::BackendKind::Crisp,
            BackendChoice::Antialiased => pixelate::BackendKind::Antialiased,
        },
    };

    let source = pixelate::LocalSource::new();
    let mut surface = pixelate::pixelate_with(&source, &args.input, &cfg, &opts)
        .with_context(|| format!("pixelate '{}'", args.input))?;

    if let Some((w, h)) = args.fit {
        surface = pixelate::fit_contain(&surface, w, h, FIT_BACKGROUND)?;
    }

    pixelate::save_png(&surface, &args.out)?;
    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        surface.width(),
        surface.height()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let cfg = base_config(&args.block)?;
    let opts = pixelate::EngineOpts {
        min_resolution: args.block.min_resolution,
        ..pixelate::EngineOpts::default()
    };

    let source = pixelate::LocalSource::new();
    let surface = pixelate::ImageSource::load(&source, &args.input)
        .with_context(|| format!("load '{}'", args.input))?;
    let plan = pixelate::plan(surface.width(), surface.height(), &cfg, &opts)?;

    println!("source:  {}x{}", plan.source.0, plan.source.1);
    println!("working: {}x{}", plan.working.0, plan.working.1);
    println!(
        "output:  {}x{}{}",
        plan.extent.loop_width,
        plan.extent.loop_height,
        if plan.extent.aligned { " (aligned)" } else { "" }
    );
    println!(
        "blocks:  {}x{} of {}px",
        plan.blocks.0, plan.blocks.1, cfg.block_size
    );
    Ok(())
}
