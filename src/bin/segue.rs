use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "segue", version)]
struct Cli {
    /// JSON config file (defaults apply when absent).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the normalized path and overlay label for an href.
    Label(LabelArgs),
    /// List posts, newest first.
    Posts(PostsArgs),
    /// List the category filter options.
    Categories(RootArgs),
    /// Print one post with its outline.
    Post(PostArgs),
    /// Run a headless transition and print one JSON frame per line.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct LabelArgs {
    href: String,

    /// Explicit label (wins over the derived one).
    #[arg(long)]
    label: Option<String>,
}

#[derive(Parser, Debug)]
struct RootArgs {
    /// Content directory (overrides the config).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Skip posts that fail to load instead of failing.
    #[arg(long, default_value_t = false)]
    lenient: bool,
}

#[derive(Parser, Debug)]
struct PostsArgs {
    #[command(flatten)]
    root: RootArgs,

    #[arg(long, default_value = "all")]
    category: String,

    #[arg(long, default_value = "")]
    query: String,

    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser, Debug)]
struct PostArgs {
    slug: String,

    #[command(flatten)]
    root: RootArgs,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Path shown when the session starts.
    #[arg(long, default_value = "/")]
    from: String,

    /// Link href to activate.
    #[arg(long)]
    to: String,

    #[arg(long)]
    label: Option<String>,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Frames between a navigation and the destination render.
    #[arg(long, default_value_t = 12)]
    mount_delay_frames: u32,

    /// After arriving, press back and play the history transition too.
    #[arg(long, default_value_t = false)]
    back: bool,

    /// Destination never renders (the transition stalls).
    #[arg(long, default_value_t = false)]
    stall: bool,

    /// Session-time budget per played transition, in seconds.
    #[arg(long, default_value_t = 10.0)]
    max_secs: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => segue::SegueConfig::from_json_file(path)?,
        None => segue::SegueConfig::default(),
    };
    tracing::debug!(?config, "config loaded");

    match cli.cmd {
        Command::Label(args) => cmd_label(args),
        Command::Posts(args) => cmd_posts(&config, args),
        Command::Categories(args) => cmd_categories(&config, args),
        Command::Post(args) => cmd_post(&config, args),
        Command::Simulate(args) => cmd_simulate(&config, args),
    }
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    serde_json::to_writer_pretty(&mut out, value).context("write json")?;
    writeln!(out).context("write stdout")?;
    out.flush().context("flush stdout")
}

fn loader(config: &segue::SegueConfig, args: &RootArgs) -> segue::ContentLoader {
    let mut content = config.content.clone();
    if let Some(root) = &args.root {
        content.root = root.clone();
    }
    segue::ContentLoader::new(content).lenient(args.lenient)
}

fn cmd_label(args: LabelArgs) -> anyhow::Result<()> {
    let path = segue::normalize_path(&args.href);
    let label = segue::resolve_label(args.label.as_deref(), &path);
    print_json(&serde_json::json!({
        "href": args.href,
        "path": path,
        "label": label,
    }))
}

fn cmd_posts(config: &segue::SegueConfig, args: PostsArgs) -> anyhow::Result<()> {
    let posts = loader(config, &args.root).list()?;
    let filtered = segue::filter_articles(&posts, &args.category, &args.query, args.limit);
    print_json(&filtered)
}

fn cmd_categories(config: &segue::SegueConfig, args: RootArgs) -> anyhow::Result<()> {
    print_json(&loader(config, &args).categories()?)
}

fn cmd_post(config: &segue::SegueConfig, args: PostArgs) -> anyhow::Result<()> {
    let post = loader(config, &args.root)
        .post(&args.slug)?
        .with_context(|| format!("post not found: {}", args.slug))?;
    let outline = segue::extract_outline(&post.body);
    print_json(&serde_json::json!({
        "post": post,
        "outline": outline,
    }))
}

fn cmd_simulate(config: &segue::SegueConfig, args: SimulateArgs) -> anyhow::Result<()> {
    let fps = segue::Fps::new(args.fps, 1)?;
    let mut session =
        segue::AppSession::new(config.transition.clone(), &args.from, args.mount_delay_frames)
            .with_fps(fps);
    if args.stall {
        session.stall(&args.to);
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut emit = |frame: &segue::SessionFrame| -> anyhow::Result<()> {
        serde_json::to_writer(&mut out, frame).context("write frame")?;
        writeln!(out).context("write stdout")
    };

    // Let the initial route render and announce.
    emit(&session.step_frame())?;

    let mut link = segue::TransitionLink::new(args.to.as_str());
    link.label = args.label.clone();
    let activation = session.click(&link, &segue::ActivationEvent::primary());
    tracing::info!(?activation, to = %args.to, "link activated");

    let mut frames = session.run_until_idle_for(args.max_secs);
    if args.back && !session.sequencer().is_transitioning() && session.back() {
        tracing::info!(location = %session.location(), "history back");
        frames.extend(session.run_until_idle_for(args.max_secs));
    }
    for frame in &frames {
        emit(frame)?;
    }

    if session.sequencer().is_transitioning() {
        tracing::warn!(
            phase = ?session.sequencer().phase(),
            budget_secs = args.max_secs,
            "transition did not finish"
        );
    }
    out.flush().context("flush stdout")
}
