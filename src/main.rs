//! kavya CLI - Short-form text generation from the terminal.

use clap::{Parser, Subcommand};
use kavya::cli;
use kavya::cli::generate::GenerateOptions;
use kavya::config::load_config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
/// - Dirty working directory: "0.1.0-dev (abc1234-dirty)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("KAVYA_GIT_HASH");
    const IS_RELEASE: &str = env!("KAVYA_IS_RELEASE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "kavya")]
#[command(author, version = version(), about = "Short-form text generation from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate content about a keyword.
    Generate {
        /// Topic to write about.
        keyword: Option<String>,

        /// Content type (see `kavya types`).
        #[arg(short = 't', long = "type")]
        content_type: Option<String>,

        /// Tone (funny, serious, romantic, motivational).
        #[arg(long)]
        tone: Option<String>,

        /// Length (short, medium, long).
        #[arg(short, long)]
        length: Option<String>,

        /// Use a random trending keyword.
        #[arg(long, conflicts_with = "keyword")]
        trending: bool,
    },

    /// Generate again with the parameters of a history entry.
    Regenerate {
        /// History entry ID. Defaults to the newest entry.
        id: Option<i64>,
    },

    /// Browse and manage saved generations.
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Show usage statistics.
    Stats,

    /// Suggest trending keywords.
    Trending {
        /// Number of keywords to show. Defaults to 8.
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Save a history entry's text to a file.
    Export {
        /// History entry ID.
        id: i64,

        /// Target directory. Defaults to the current directory.
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// List content types, tones, and lengths.
    Types,
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List saved generations, newest first.
    List {
        /// Maximum number of entries to show. Defaults to 20.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a saved generation in full.
    Show {
        /// History entry ID.
        id: i64,
    },

    /// Delete one saved generation.
    Remove {
        /// History entry ID.
        id: i64,
    },

    /// Delete all saved generations.
    Clear,
}

/// Send kavya's log lines to stderr. `KAVYA_LOG` takes a full filter
/// directive and wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env("KAVYA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("kavya={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kavya: error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging.level);

    let result = match cli.command {
        Commands::Generate {
            keyword,
            content_type,
            tone,
            length,
            trending,
        } => {
            let options = GenerateOptions {
                keyword,
                content_type,
                tone,
                length,
                trending,
            };
            cli::generate::run(&config, &options).await
        }
        Commands::Regenerate { id } => cli::generate::run_regenerate(&config, id).await,
        Commands::History { command } => match command {
            HistoryCommands::List { limit } => cli::history::list(&config, limit),
            HistoryCommands::Show { id } => cli::history::show(&config, id),
            HistoryCommands::Remove { id } => cli::history::remove(&config, id),
            HistoryCommands::Clear => cli::history::clear(&config),
        }
        .map(|()| true),
        Commands::Stats => cli::stats::run(&config).map(|()| true),
        Commands::Trending { count } => {
            cli::trending::run(count);
            Ok(true)
        }
        Commands::Export { id, dir } => cli::export::run(&config, id, dir).map(|()| true),
        Commands::Types => {
            cli::catalog::run();
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("kavya: error: {e}");
            ExitCode::FAILURE
        }
    }
}
