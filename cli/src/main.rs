//! Krafty Brew Coffee - command-line brew planner
//!
//! Native host for the shared brewing core: estimate how a brew will taste
//! and print step-by-step pour-over recipes.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod handlers;

use config::{Config, LogConfig, LogFormat};
use error::AppResult;
use handlers::{RecipeOverrides, TasteOverrides};

/// Plan pour-over brews and preview how they will taste.
#[derive(Parser, Debug)]
#[command(name = "kbrew")]
#[command(version)]
#[command(about = "Plan pour-over brews and preview how they will taste.", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the flavor outcome of a brew
    Taste {
        /// Process type (Washed, Natural, Honey)
        #[arg(long)]
        process: Option<String>,

        /// Roast level (Light, Medium, Dark)
        #[arg(long)]
        roast: Option<String>,

        /// Grind level, 0 = fine, 100 = coarse
        #[arg(long, allow_negative_numbers = true)]
        grind: Option<i32>,

        /// Water temperature in °C
        #[arg(long)]
        temp: Option<Decimal>,

        /// Brew method (V60, "French Press", Espresso, AeroPress)
        #[arg(long)]
        method: Option<String>,

        /// Water ratio, the X in 1:X
        #[arg(long)]
        ratio: Option<i32>,

        /// Reject unknown labels and out-of-range values
        #[arg(long)]
        strict: bool,
    },

    /// Show the steps and tips for a recipe
    Recipe {
        /// Recipe id (see `kbrew recipes`)
        #[arg(long)]
        method: Option<String>,

        /// Coffee dose in grams (rescales the water)
        #[arg(long)]
        coffee: Option<Decimal>,

        /// Water in ml (rescales the coffee)
        #[arg(long)]
        water: Option<Decimal>,

        /// Ratio, the X in 1:X (rescales the water)
        #[arg(long)]
        ratio: Option<Decimal>,

        /// Reject non-positive quantities
        #[arg(long)]
        strict: bool,
    },

    /// List the recipe catalog
    Recipes,

    /// List the accepted process types, roast levels and brew methods
    Options,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            std::process::exit(err.exit_code());
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}

fn run(cli: &Cli) -> AppResult<String> {
    let config = Config::load()?;
    init_tracing(&config.log);

    tracing::debug!("Environment: {}", config.environment);

    match &cli.command {
        Commands::Taste {
            process,
            roast,
            grind,
            temp,
            method,
            ratio,
            strict,
        } => {
            let overrides = TasteOverrides {
                process_type: process.clone(),
                roast_level: roast.clone(),
                grind_level: *grind,
                water_temp: *temp,
                brew_method: method.clone(),
                water_ratio: *ratio,
            };
            let report = handlers::taste(&config.estimator, overrides, *strict)?;
            output(cli.json, &report, || report.render())
        }
        Commands::Recipe {
            method,
            coffee,
            water,
            ratio,
            strict,
        } => {
            let overrides = RecipeOverrides {
                method: method.clone(),
                coffee_grams: *coffee,
                water_ml: *water,
                ratio: *ratio,
            };
            let report = handlers::recipe(&config.recipe, overrides, *strict)?;
            output(cli.json, &report, || report.render())
        }
        Commands::Recipes => {
            let recipes = handlers::recipes();
            output(cli.json, &recipes, || handlers::render_recipes(&recipes))
        }
        Commands::Options => {
            let report = handlers::options();
            output(cli.json, &report, || report.render())
        }
    }
}

/// Render a report as pretty JSON or as text
fn output<T, F>(json: bool, report: &T, text: F) -> AppResult<String>
where
    T: serde::Serialize,
    F: FnOnce() -> String,
{
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(text())
    }
}

/// Initialize tracing. Logs go to stderr so stdout stays clean for output.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
