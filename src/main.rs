//! Urdle - CLI
//!
//! Slang Wordle with a TUI, a line mode and catalog tooling.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use urdle::{
    catalog::{Catalog, embedded, loader},
    commands::{build_schedule, run_check, run_simple, share_saved_daily},
    game::{
        Clock, DEFAULT_SHARE_URL, FileStore, GameConfig, KeyValueStore, NullStore, SystemClock,
    },
    output::{print_check_report, print_schedule, print_share},
    selector::{Route, WordSelector},
};

#[derive(Parser)]
#[command(
    name = "urdle",
    about = "Slang Wordle with progressive definition and letter hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog JSON file (default: the built-in word list)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory for saved daily games
    #[arg(short, long, global = true, default_value = ".urdle")]
    data_dir: PathBuf,

    /// Don't load or save daily progress
    #[arg(long, global = true)]
    no_save: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Base URL used in share links
    #[arg(long, global = true, default_value = DEFAULT_SHARE_URL)]
    share_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Share link or route to open, e.g. '#/w/hto' or '#/random'
        #[arg(short, long)]
        link: Option<String>,

        /// Start on a random word instead of today's
        #[arg(short, long, conflicts_with = "link")]
        random: bool,
    },

    /// Simple CLI mode (line-based, without TUI)
    Simple {
        /// Share link or route to open
        #[arg(short, long)]
        link: Option<String>,

        /// Start on a random word instead of today's
        #[arg(short, long, conflicts_with = "link")]
        random: bool,
    },

    /// Print the share text of today's saved daily game
    Share {
        /// Day to share (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List upcoming daily words
    Schedule {
        /// Number of days to list
        #[arg(short = 'n', long, default_value = "14")]
        days: usize,

        /// First day (default: today)
        #[arg(short, long)]
        from: Option<NaiveDate>,
    },

    /// Lint a catalog file
    Check,
}

/// Set up logging
///
/// Logs go to `log_file` when given. Without one, the TUI keeps logging off
/// so stderr output can't corrupt the screen.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if tui => {
            builder.filter_level(log::LevelFilter::Off);
        }
        None => {}
    }
    builder.init();
    Ok(())
}

/// Load the catalog from `--catalog` or the embedded list
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("cannot load catalog {}", path.display())),
        None => embedded().context("built-in catalog is broken"),
    }
}

fn open_store(cli: &Cli) -> Box<dyn KeyValueStore> {
    if cli.no_save {
        Box::new(NullStore)
    } else {
        Box::new(FileStore::new(&cli.data_dir))
    }
}

fn route_for(link: Option<&str>, random: bool) -> Route {
    if random {
        Route::Random
    } else {
        link.map_or(Route::Daily, Route::parse)
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play {
        link: None,
        random: false,
    });
    let tui = matches!(command, Commands::Play { .. });
    init_logging(cli.log_file.as_deref(), tui)?;

    let config = GameConfig::new(cli.share_url.clone());
    let today = SystemClock.today();

    match command {
        Commands::Play { link, random } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let route = route_for(link.as_deref(), random);
            run_play_command(&catalog, &route, config, &cli, today)
        }
        Commands::Simple { link, random } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let selection = WordSelector::new(&catalog).resolve(
                &route_for(link.as_deref(), random),
                today,
                &mut rand::rng(),
                None,
            );
            let mut store = open_store(&cli);
            run_simple(&catalog, selection, &config, store.as_mut())
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Share { date } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let store = open_store(&cli);
            let text = share_saved_daily(&catalog, config, store.as_ref(), date.unwrap_or(today))
                .map_err(|e| anyhow::anyhow!(e))?;
            print_share(&text);
            Ok(())
        }
        Commands::Schedule { days, from } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let report = build_schedule(&catalog, from.unwrap_or(today), days)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_schedule(&report);
            Ok(())
        }
        Commands::Check => run_check_command(cli.catalog.as_deref()),
    }
}

fn run_check_command(path: Option<&Path>) -> Result<()> {
    let entries = match path {
        Some(path) => loader::read_entries(path)
            .with_context(|| format!("cannot read catalog {}", path.display()))?,
        None => loader::parse_entries(urdle::catalog::EMBEDDED_CATALOG)
            .context("built-in catalog is broken")?,
    };

    let report = run_check(&entries);
    print_check_report(&report);
    if !report.is_playable() {
        anyhow::bail!("catalog has {} errors", report.errors().count());
    }
    Ok(())
}

fn run_play_command(
    catalog: &Catalog,
    route: &Route,
    config: GameConfig,
    cli: &Cli,
    today: NaiveDate,
) -> Result<()> {
    use urdle::interactive::{App, run_tui};

    let selection = WordSelector::new(catalog).resolve(route, today, &mut rand::rng(), None);
    let mut store = open_store(cli);
    let app = App::new(catalog, selection, config, store.as_mut())
        .context("selected word is outside the catalog")?;
    run_tui(app)
}
