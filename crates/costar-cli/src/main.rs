//! Costar CLI - degrees of separation between actors

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod prompt;

use commands::{completions, path, person, stats};
use config::Config;
use costar_core::Dataset;
use costar_storage::{CsvLoader, LoadReport};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "degrees")]
#[command(author, version, about = "Find how many movies separate two actors")]
pub struct Cli {
    /// Dataset directory containing people.csv, movies.csv and stars.csv
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format: table, json, csv
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file path
    #[arg(long, env = "COSTAR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output format: flag, then config
    pub fn format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.format)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the shortest connection between two people (prompts for missing names)
    Path(path::PathArgs),
    /// Show people matching a name and their movies
    Person(person::PersonArgs),
    /// Show dataset statistics
    Stats,
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded dataset
pub struct AppContext {
    pub config: Config,
    pub dataset: Dataset,
    pub report: LoadReport,
    pub data_dir: PathBuf,
}

impl AppContext {
    pub fn load(cli: &Cli, config: Config) -> anyhow::Result<Self> {
        let data_dir = config.resolve_data_dir(cli.data_dir.as_deref());
        let chatty = !cli.quiet && cli.format(&config) == OutputFormat::Table;

        if chatty {
            println!("Loading data...");
        }
        let (dataset, report) = CsvLoader::new(&data_dir)
            .load()
            .map_err(|e| anyhow::anyhow!("Failed to load dataset from {:?}: {}", data_dir, e))?;
        if chatty {
            println!("Data loaded.");
        }

        Ok(Self {
            config,
            dataset,
            report,
            data_dir,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting degrees CLI");

    let config_path = config::config_file_path(cli.config.as_deref());
    let config = Config::load(&config_path);

    match &cli.command {
        None => {
            let ctx = AppContext::load(&cli, config)?;
            path::run(&path::PathArgs::default(), &cli, &ctx)?
        }
        Some(Commands::Path(args)) => {
            let ctx = AppContext::load(&cli, config)?;
            path::run(args, &cli, &ctx)?
        }
        Some(Commands::Person(args)) => {
            let ctx = AppContext::load(&cli, config)?;
            person::run(args, &cli, &ctx)?
        }
        Some(Commands::Stats) => {
            let ctx = AppContext::load(&cli, config)?;
            stats::run(&cli, &ctx)?
        }
        Some(Commands::Config(args)) => commands::config::run(args, &config_path)?,
        Some(Commands::Completions(args)) => completions::run(args)?,
    }

    Ok(())
}
