use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use shootmap::config::Config;
use shootmap::geocode::GeocodeClient;
use shootmap::infra::layer_sink::JsonFileSink;
use shootmap::infra::nominatim::NominatimProvider;
use shootmap::pipeline::layer::ProgressCounter;
use shootmap::pipeline::orchestrator::{build_map, rank_countries, rank_locations};
use shootmap::types::RankedEntry;
use shootmap::years::YearFilter;

#[derive(Parser)]
#[command(name = "shootmap")]
#[command(about = "Maps the most popular film shooting countries and locations")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build both map layers and publish them as JSON
    Run {
        /// Path to the tab-delimited catalog file
        catalog: PathBuf,
        /// Years to include in the locations layer, e.g. "1994,2001-2003".
        /// Omit to include every year.
        #[arg(long)]
        years: Option<String>,
        /// Where to write the published layers
        #[arg(long, default_value = "map-layers.json")]
        output: PathBuf,
    },
    /// Print the most frequent shooting countries without geocoding
    Countries {
        catalog: PathBuf,
        /// How many entries to print
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
    /// Print the most frequent shooting locations without geocoding
    Locations {
        catalog: PathBuf,
        #[arg(long)]
        years: Option<String>,
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

fn parse_filter(years: Option<String>) -> shootmap::error::Result<YearFilter> {
    match years {
        Some(selection) => YearFilter::parse(&selection),
        None => Ok(YearFilter::all()),
    }
}

fn print_ranked(ranked: &[RankedEntry], top: usize) {
    for (rank, entry) in ranked.iter().take(top).enumerate() {
        println!("{:>4}. {:<50} {:>8}", rank + 1, entry.key, entry.count);
    }
}

/// Redraws a single progress line until the counter stops moving;
/// display only, the pipeline never prints its own progress.
fn spawn_progress_display(progress: ProgressCounter, total: u64) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        use std::io::Write;
        loop {
            let done = progress.get();
            let percent = if total == 0 { 100 } else { done * 100 / total };
            print!("\rResolving places: {}/{} ({}%)", done, total, percent);
            let _ = std::io::stdout().flush();
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = shootmap::logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load().context("loading config.toml")?;

    match cli.command {
        Commands::Run { catalog, years, output } => {
            println!("🎬 Building film shoot map layers...");

            let filter = parse_filter(years)?;
            if filter.is_empty() {
                info!("no year filter, counting every record");
            } else {
                info!(years = filter.len(), "year filter active");
            }

            let provider = Arc::new(NominatimProvider::new(&config.geocoder)?);
            let geocoder = GeocodeClient::new(
                provider,
                Duration::from_millis(config.geocoder.delay_ms),
            );
            let sink = JsonFileSink::new(&output);

            let progress = ProgressCounter::new();
            let total =
                (config.layers.countries_limit + config.layers.locations_limit) as u64;
            let display = spawn_progress_display(progress.clone(), total);

            let result =
                build_map(&catalog, &filter, &config, &geocoder, &sink, progress).await;
            display.abort();
            println!();

            match result {
                Ok(summary) => {
                    println!("\n📊 Map build results:");
                    println!("   Records scanned: {}", summary.records_scanned);
                    println!(
                        "   Countries layer: {} entries",
                        summary.countries.entries.len()
                    );
                    println!(
                        "   Locations layer: {} entries",
                        summary.locations.entries.len()
                    );
                    println!("   Output file: {}", output.display());
                }
                Err(e) => {
                    error!("Map build failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::Countries { catalog, top } => {
            let (ranked, scanned) = rank_countries(&catalog)?;
            println!("🌍 Top shooting countries ({} records scanned):", scanned);
            print_ranked(&ranked, top);
        }
        Commands::Locations { catalog, years, top } => {
            let filter = parse_filter(years)?;
            let ranked = rank_locations(&catalog, &filter)?;
            println!("📍 Top shooting locations:");
            print_ranked(&ranked, top);
        }
    }
    Ok(())
}
