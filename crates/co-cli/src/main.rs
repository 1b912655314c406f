//! CLI frontend for Chronos Oracle.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::InsightArgs;

#[derive(Parser)]
#[command(
    name = "chronos",
    about = "Chronos Oracle: millisecond entropy and I-Ching readings",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Make a single draw and print its insight
    Draw {
        #[command(subcommand)]
        kind: commands::draw::DrawKind,

        /// Print the finished draw as JSON
        #[arg(long, global = true)]
        json: bool,

        #[command(flatten)]
        insight: InsightArgs,
    },

    /// Start an interactive session with a running history
    Session {
        #[command(flatten)]
        insight: InsightArgs,
    },

    /// Look up a hexagram by six-bit code (top line first) or King Wen number
    Hexagram {
        /// Six characters of 0 (broken) and 1 (solid), e.g. 010101, or 1-64
        code: String,

        /// Highlight this line (1 = bottom, 6 = top)
        #[arg(short, long)]
        line: Option<u8>,
    },

    /// List all sixty-four hexagrams
    Hexagrams,

    /// List the selection modes
    Modes,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw {
            kind,
            json,
            insight,
        } => commands::draw::run(kind, &insight, json).await,
        Commands::Session { insight } => commands::session::run(&insight).await,
        Commands::Hexagram { code, line } => commands::hexagram::run(&code, line),
        Commands::Hexagrams => commands::hexagram::list(),
        Commands::Modes => commands::modes(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
