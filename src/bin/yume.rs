use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "yume", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Frame and arrange 1-5 images into a single collage.
    Collage(CollageArgs),
    /// Print the location prompt built from world and environment data.
    Location(LocationArgs),
    /// Load parsed scenes into a store and print the summary.
    Scenes(ScenesArgs),
}

#[derive(Parser, Debug)]
struct CollageArgs {
    /// Output image path (format from extension).
    #[arg(long)]
    out: PathBuf,

    /// Input images, in placement order.
    #[arg(required = true, num_args = 1..=yume::collage::MAX_IMAGES)]
    images: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct LocationArgs {
    /// Config file (YAML or JSON). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Location name as written in the script.
    name: String,

    /// Time of day, e.g. "dusk".
    #[arg(long)]
    time: Option<String>,
}

#[derive(Parser, Debug)]
struct ScenesArgs {
    /// JSON array of scene records.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write the stored (defaulted) scenes back out as JSON.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Collage(args) => cmd_collage(args),
        Command::Location(args) => cmd_location(args),
        Command::Scenes(args) => cmd_scenes(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(yume::config::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(yume::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_collage(args: CollageArgs) -> anyhow::Result<()> {
    yume::collage::create_collage_from_paths(args.images.as_slice(), &args.out)
        .with_context(|| format!("build collage '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<yume::YumeConfig> {
    let Some(path) = path else {
        return Ok(yume::YumeConfig::default());
    };
    let cfg = yume::YumeConfig::from_path(path)
        .with_context(|| format!("load config '{}'", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(cfg.rebase(base))
}

fn cmd_location(args: LocationArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let builder = cfg.location_builder()?;
    println!("{}", builder.build(&args.name, args.time.as_deref()));
    Ok(())
}

fn cmd_scenes(args: ScenesArgs) -> anyhow::Result<()> {
    let drafts: Vec<yume::SceneDraft> = yume::io::read_json(&args.in_path)?;

    let mut store = yume::SceneStore::new();
    store.insert_many(drafts)?;
    println!("{}", store.summary());

    if let Some(out) = &args.out {
        yume::io::write_json(out, store.all())?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}
