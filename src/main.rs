use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use networth::config::{default_config_path, Config};
use networth::format::render_summary;
use networth::models::{BalanceSheetModel, OutputModel};
use networth::net_worth::NetWorthCompiler;
use networth::rates::build_rate_provider;
use serde_json::{json, Value};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "networth")]
#[command(about = "Household net worth snapshot and projection")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute totals and the net worth projection for a balance sheet
    Compute {
        /// JSON balance sheet file, or "-" for stdin; the seed model is used when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Currency to convert all values into
        #[arg(long = "to")]
        currency_to: Option<String>,

        /// Print a plain-text summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
    /// Print the seed balance sheet
    Seed,
    /// Show current configuration
    Config,
}

fn read_input(path: &Path) -> Result<Value> {
    let body = if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read balance sheet from stdin")?;
        body
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read balance sheet: {}", path.display()))?
    };

    if body.trim().is_empty() {
        anyhow::bail!("Missing balance sheet input");
    }

    serde_json::from_str(&body).context("Balance sheet is not valid JSON")
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn compute(
    config: &Config,
    input: Option<&Path>,
    currency_to: Option<&str>,
) -> Result<OutputModel> {
    let compiler = NetWorthCompiler::new(build_rate_provider(&config.rates));
    let currency_to = currency_to.or(config.default_currency.as_deref());
    tracing::debug!(
        provider = compiler.provider_name().unwrap_or("none"),
        currency_to = currency_to.unwrap_or(""),
        "Computing output model"
    );

    let output = match input {
        Some(path) => {
            let body = read_input(path)?;
            compiler.compute_value(Some(&body), currency_to).await
        }
        None => compiler.compute(&BalanceSheetModel::seed(), currency_to).await,
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load networth config: {}", config_path.display()))?;

    match cli.command {
        Some(Command::Compute {
            input,
            currency_to,
            summary,
        }) => {
            let output = compute(&config, input.as_deref(), currency_to.as_deref()).await?;
            if summary {
                print!("{}", render_summary(&output, &config.display));
            } else {
                print_json(&json!({ "data": output }))?;
            }
        }
        Some(Command::Seed) => print_json(&BalanceSheetModel::seed())?,
        Some(Command::Config) => {
            println!("Config file: {}", config_path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        None => {
            println!("networth - household net worth projection");
            println!("==========================================\n");
            println!("Config: {}\n", config_path.display());
            println!("Commands:");
            println!("  compute   Compute totals and the 20-period projection");
            println!("  seed      Print the seed balance sheet");
            println!("  config    Show current configuration\n");
            println!("Run 'networth --help' for more options.");
        }
    }

    Ok(())
}
