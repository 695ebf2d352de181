#![forbid(unsafe_code)]
//! Nutrient Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use nutrient::commands::{
    execute_categories, execute_init, execute_list, execute_nutrients, execute_pick,
    execute_total, DataOptions, InitOptions, ListOptions, PickOptions, TotalOptions,
};
use nutrient::config::DEFAULT_CONFIG_FILE;
use nutrient::{Config, Level, NutrientKind, RenderFormat};

#[derive(Parser)]
#[command(name = "nutrient")]
#[command(about = "Split foods by potassium, sodium or fructose content and total a day's picks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Dataset file (overrides the config)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Default nutrient to record
        #[arg(short, long, value_enum)]
        nutrient: Option<NutrientArg>,
    },

    /// Show foods split into low and high content
    List {
        /// Nutrient to analyze (default from config)
        #[arg(short, long, value_enum)]
        nutrient: Option<NutrientArg>,

        /// Only show one side of the content threshold
        #[arg(short, long, value_enum)]
        level: Option<LevelArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle foods by name and show the portion-adjusted total
    Total {
        /// Nutrient to analyze (default from config)
        #[arg(short, long, value_enum)]
        nutrient: Option<NutrientArg>,

        /// Foods to toggle, in order
        #[arg(required = true)]
        foods: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactively pick foods and watch the running total
    Pick {
        /// Nutrient to start on (default from config)
        #[arg(short, long, value_enum)]
        nutrient: Option<NutrientArg>,
    },

    /// List nutrient thresholds
    Nutrients {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List food categories with portion sizes
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Tracked nutrient
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum NutrientArg {
    #[value(alias = "k", alias = "鉀")]
    Potassium,
    #[value(alias = "na", alias = "鈉")]
    Sodium,
    #[value(alias = "果糖")]
    Fructose,
}

impl From<NutrientArg> for NutrientKind {
    fn from(arg: NutrientArg) -> Self {
        match arg {
            NutrientArg::Potassium => NutrientKind::Potassium,
            NutrientArg::Sodium => NutrientKind::Sodium,
            NutrientArg::Fructose => NutrientKind::Fructose,
        }
    }
}

/// Side of the content threshold
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LevelArg {
    Low,
    High,
}

fn format_for(json: bool) -> RenderFormat {
    if json {
        RenderFormat::Json
    } else {
        RenderFormat::Text
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config = if cli.config.exists() {
        match Config::load(&cli.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} Invalid config {}", style("✗").red(), cli.config.display());
                return Err(e.into());
            }
        }
    } else {
        tracing::debug!("No config at {}, using defaults", cli.config.display());
        Config::default()
    };

    let data_options = |nutrient: Option<NutrientArg>| DataOptions {
        data: cli.data.clone(),
        nutrient: nutrient.map(NutrientKind::from),
    };

    match cli.command {
        Commands::Init { force, nutrient } => {
            let options = InitOptions {
                path: cli.config.clone(),
                force,
                data: cli.data.clone(),
                nutrient: nutrient.map(NutrientKind::from),
            };
            execute_init(options)?;
        }

        Commands::List { nutrient, level, json } => {
            let options = ListOptions {
                data: data_options(nutrient),
                level: level.map(|l| match l {
                    LevelArg::Low => Level::Low,
                    LevelArg::High => Level::High,
                }),
                format: format_for(json),
            };
            execute_list(options, &config).await?;
        }

        Commands::Total { nutrient, foods, json } => {
            let options = TotalOptions {
                data: data_options(nutrient),
                foods,
                format: format_for(json),
            };
            execute_total(options, &config).await?;
        }

        Commands::Pick { nutrient } => {
            let options = PickOptions {
                data: data_options(nutrient),
            };
            execute_pick(options, &config).await?;
        }

        Commands::Nutrients { json } => {
            execute_nutrients(&config, format_for(json))?;
        }

        Commands::Categories { json } => {
            execute_categories(&config, format_for(json))?;
        }
    }

    Ok(())
}
