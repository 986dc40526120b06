//! pitchdeck CLI
//!
//! Present an animated pitch deck in the terminal, or print its outline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pitchdeck::loader::{load_deck, resolve_deck_source};
use pitchdeck::logging;
use pitchdeck::report::format_outline;
use pitchdeck::tui;
use pitchdeck::tui::animation::Motion;
use pitchdeck::types::OutputFormat;

#[derive(Parser)]
#[command(name = "pitchdeck")]
#[command(about = "Animated, keyboard-navigable pitch deck for the terminal")]
#[command(version)]
struct Cli {
    /// Log file (default: user cache dir). Filter with PITCHDECK_LOG.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present the deck (default)
    Present(PresentArgs),

    /// Print the deck outline without presenting
    Outline {
        /// Deck file (default: user config dir, then built-in deck)
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate a deck file
    Check {
        /// Deck file to validate
        path: PathBuf,
    },
}

#[derive(clap::Args, Default)]
struct PresentArgs {
    /// Deck file (default: user config dir, then built-in deck)
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Slide to open on, 1-based
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    start: u16,

    /// Animation frames per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..=120))]
    fps: u16,

    /// Render every slide settled, without transitions or counters
    #[arg(long)]
    no_motion: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
    Toml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Toml => OutputFormat::Toml,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Note: logging disabled ({}: {})", log_path.display(), e);
    }

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Present(PresentArgs {
            start: 1,
            fps: 30,
            ..Default::default()
        }));

    let result = match command {
        Commands::Present(args) => cmd_present(args),
        Commands::Outline { deck, format } => cmd_outline(deck, format.into()),
        Commands::Check { path } => cmd_check(path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_present(args: PresentArgs) -> Result<(), String> {
    let source = resolve_deck_source(args.deck);
    let deck = source.load().map_err(|e| e.to_string())?;

    let start = usize::from(args.start) - 1;
    if start >= deck.slides.len() {
        return Err(format!(
            "--start {} is past the last slide ({} slides in {})",
            args.start,
            deck.slides.len(),
            source
        ));
    }

    let motion = if args.no_motion {
        Motion::still()
    } else {
        Motion {
            enabled: true,
            fps: args.fps,
        }
    };

    tui::run(deck, start, motion).map_err(|e| e.to_string())
}

fn cmd_outline(deck: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let source = resolve_deck_source(deck);
    let deck = source.load().map_err(|e| e.to_string())?;

    if format == OutputFormat::Human {
        eprintln!("Deck: {}", source);
    }
    let out = format_outline(&deck, format).map_err(|e| e.to_string())?;
    println!("{}", out.trim_end());
    Ok(())
}

fn cmd_check(path: PathBuf) -> Result<(), String> {
    let deck = load_deck(&path).map_err(|e| e.to_string())?;
    println!("{}: ok ({} slides)", path.display(), deck.slides.len());
    Ok(())
}
