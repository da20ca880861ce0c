//! Banner CLI - play the portfolio banner's typewriter rotation in a terminal
mod fmt;

use banner_core::{start_rotation, BannerConfig, Phase, PhraseList, TextRotator};
use clap::{Parser, Subcommand};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use owo_colors::OwoColorize as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::fmt::LevelFormatter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_env_filter(EnvFilter::builder().parse("warn,banner=info,banner_core=info")?)
            .compact()
            .without_time()
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .event_format(LevelFormatter)
            .with_writer(std::io::stderr)
            .init();
    }
    debug!("Command line arguments: {:?}", cli);

    // Handle subcommands
    if let Some(command) = cli.command.take() {
        return handle_command(command, &cli);
    }

    let config = build_config(&cli)?;

    if let Some(count) = cli.frames {
        return print_frames(config, count, &cli.output);
    }

    play(config, cli.cycles).await
}

const ABOUT: &str = "⌨️  Play the portfolio banner's typewriter rotation";
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = ABOUT)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Phrase to rotate through (repeat for several). Overrides the config
    #[arg(short, long = "phrase", value_name = "TEXT")]
    phrases: Vec<String>,

    /// Path to a banner config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pause after a phrase is fully typed, in milliseconds
    #[arg(long)]
    period_ms: Option<u64>,

    /// Fixed initial typing delay, in milliseconds (disables jitter)
    #[arg(long)]
    typing_ms: Option<u64>,

    /// Typing delay after a phrase has been deleted, in milliseconds
    #[arg(long)]
    reset_ms: Option<u64>,

    /// Stop after this many full type+delete cycles
    #[arg(short = 'n', long)]
    cycles: Option<usize>,

    /// Print the first N frames immediately instead of animating
    #[arg(long, value_name = "N")]
    frames: Option<usize>,

    /// Frame output format (with --frames): text, json
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the effective configuration as JSON
    Show,
    /// Print the default configuration file path
    Path,
}

/// Output format options
#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// One line of display text per frame
    Text,
    /// One JSON object per frame
    Json,
}

/// Merge the config file with command line overrides
fn build_config(cli: &Cli) -> anyhow::Result<BannerConfig> {
    let mut config = BannerConfig::load_or_default(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    if !cli.phrases.is_empty() {
        config.rotator.phrases = PhraseList::new(cli.phrases.iter().cloned())?;
    }
    if let Some(period) = cli.period_ms {
        config.rotator = config.rotator.with_period(Duration::from_millis(period));
    }
    if let Some(typing) = cli.typing_ms {
        config.rotator = config
            .rotator
            .with_fixed_typing_delay(Duration::from_millis(typing));
    }
    if let Some(reset) = cli.reset_ms {
        config.rotator = config.rotator.with_reset_delay(Duration::from_millis(reset));
    }

    config.rotator.validate()?;
    Ok(config)
}

/// Handle subcommands
fn handle_command(command: Commands, cli: &Cli) -> anyhow::Result<()> {
    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let config = build_config(cli)?;
                println!("{}", config.to_json_pretty()?);
            }
            ConfigCommands::Path => {
                println!("{}", BannerConfig::default_path()?.display());
            }
        },
    }

    Ok(())
}

/// Print frames without waiting between them
fn print_frames(config: BannerConfig, count: usize, output: &OutputFormat) -> anyhow::Result<()> {
    let rotator = TextRotator::new(config.rotator)?;
    let mut stdout = io::stdout().lock();

    for frame in rotator.take(count) {
        match output {
            OutputFormat::Text => writeln!(stdout, "{}", frame.text)?,
            OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string(&frame)?)?,
        }
    }
    stdout.flush()?;

    Ok(())
}

/// Animate the rotation until Ctrl-C or the requested number of cycles
async fn play(config: BannerConfig, cycles: Option<usize>) -> anyhow::Result<()> {
    println!("{}", config.tagline.cyan().bold());

    let line = ProgressBar::new_spinner();
    line.set_style(
        ProgressStyle::with_template("{prefix:.bold} {msg:.green}{spinner}")?
            .tick_strings(&["▌", " ", ""]),
    );
    line.set_prefix(config.greeting.clone());
    line.enable_steady_tick(Duration::from_millis(500));

    let mut receiver = start_rotation(config.rotator)?;
    let started = Instant::now();
    let mut frames = 0usize;
    let mut completed = 0usize;
    let mut last_phase = Phase::Typing;

    while !cycles.is_some_and(|limit| completed >= limit) {
        tokio::select! {
            frame = receiver.recv() => {
                let Some(frame) = frame else { break };
                frames += 1;
                if last_phase == Phase::Deleting && frame.phase == Phase::Typing {
                    completed += 1;
                }
                last_phase = frame.phase;
                line.set_message(frame.text);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    receiver.cancel().await?;
    line.finish_and_clear();

    println!(
        "{} {} frames, {} cycles in {:#}.",
        "Done:".green().bold(),
        frames,
        completed,
        HumanDuration(started.elapsed()).cyan()
    );

    Ok(())
}
