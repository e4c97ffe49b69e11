use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "twostep", version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset of tasks.
    Generate(GenerateArgs),
    /// Render one animation frame of a sampled task as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory; tasks land in `<out>/<domain>_task/<task_id>/`.
    #[arg(long)]
    out: PathBuf,

    /// Number of tasks.
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Seed for the run's random number generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Task configuration JSON (defaults apply to omitted fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip ground-truth videos.
    #[arg(long, default_value_t = false)]
    no_video: bool,

    /// Override the number of frames per animation step.
    #[arg(long)]
    frames_per_phase: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Seed used to sample the task.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Frame index within the descriptor sequence (0 = question board).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Task configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twostep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<twostep::TaskConfig> {
    match path {
        Some(p) => twostep::TaskConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(twostep::TaskConfig::default()),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if args.no_video {
        config.video.enabled = false;
    }
    if let Some(n) = args.frames_per_phase {
        config.animation.frames_per_phase = n;
    }
    config.validate()?;

    let dirs = twostep::generate_dataset(&config, &args.out, args.count, args.seed)?;
    for dir in &dirs {
        eprintln!("wrote {}", dir.display());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let mut sampler = twostep::Sampler::new(config.catalog()?, config.sampler);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let sample = sampler.next_sample(&mut rng);

    let mut frames = twostep::sequence_frames(&sample, &config.animation);
    let total = frames.total_frames();
    let desc = usize::try_from(args.frame)
        .ok()
        .and_then(|i| frames.nth(i))
        .with_context(|| format!("frame {} out of range (sequence has {total} frames)", args.frame))?;

    let mut renderer = twostep::CpuRenderer::new(&config)?;
    let frame = twostep::FrameRenderer::render_frame(&mut renderer, &desc)?;
    twostep::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
