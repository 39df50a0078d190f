use crate::app::ports::RenderSinkPort;
use crate::config::Config;
use crate::constants::{
    BOOSTED_COUNTRIES, BOOSTED_COUNTRY_MULTIPLIER, DEFAULT_COUNTRY_MULTIPLIER,
};
use crate::error::{MapError, Result};
use crate::geocode::GeocodeClient;
use crate::pipeline::aggregate::aggregate;
use crate::pipeline::layer::{LayerBuilder, ProgressCounter};
use crate::pipeline::scan::CatalogScanner;
use crate::types::{Layer, RankedEntry};
use crate::years::YearFilter;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Outcome of a full map build, handed back to the caller for
/// reporting and already published to the rendering sink.
pub struct MapSummary {
    pub records_scanned: u64,
    pub countries: Layer,
    pub locations: Layer,
}

/// Ranks countries across the whole catalog.
///
/// Failing to open the catalog is fatal; so is a catalog that yields
/// no parseable records, since no aggregation is possible.
pub fn rank_countries(catalog: &Path) -> Result<(Vec<RankedEntry>, u64)> {
    let reader = BufReader::new(File::open(catalog)?);
    let mut scanned = 0u64;
    let ranked = aggregate(
        CatalogScanner::new(reader, YearFilter::all()).map(|record| {
            scanned += 1;
            record.country
        }),
    );
    if ranked.is_empty() {
        return Err(MapError::EmptyCatalog(catalog.display().to_string()));
    }
    Ok((ranked, scanned))
}

/// Ranks shooting locations for the selected years. An empty result
/// here is not fatal: a valid catalog may simply have no records in
/// the requested span.
pub fn rank_locations(catalog: &Path, years: &YearFilter) -> Result<Vec<RankedEntry>> {
    let reader = BufReader::new(File::open(catalog)?);
    let scanner = CatalogScanner::new(reader, years.clone());
    Ok(aggregate(scanner.map(|record| record.location)))
}

fn country_weight(country: &str, count: u64) -> u64 {
    if BOOSTED_COUNTRIES.contains(&country) {
        count * BOOSTED_COUNTRY_MULTIPLIER
    } else {
        count * DEFAULT_COUNTRY_MULTIPLIER
    }
}

/// Runs both pipelines and publishes the finished layers.
///
/// The catalog is scanned twice because the scanner is forward-only:
/// once unfiltered for the countries facet, once under the year filter
/// for the locations facet.
pub async fn build_map(
    catalog: &Path,
    years: &YearFilter,
    config: &Config,
    geocoder: &GeocodeClient,
    sink: &dyn RenderSinkPort,
    progress: ProgressCounter,
) -> Result<MapSummary> {
    let (countries_ranked, records_scanned) = rank_countries(catalog)?;
    info!(
        distinct_countries = countries_ranked.len(),
        records_scanned, "countries facet aggregated"
    );

    let locations_ranked = rank_locations(catalog, years)?;
    info!(distinct_locations = locations_ranked.len(), "locations facet aggregated");

    let builder = LayerBuilder::new(geocoder, progress);
    let countries = builder
        .build(
            "Most popular countries",
            &countries_ranked,
            config.layers.countries_limit,
            country_weight,
            |country, _| country.to_string(),
        )
        .await;
    let locations = builder
        .build(
            "Most popular locations",
            &locations_ranked,
            config.layers.locations_limit,
            |_, count| count,
            |location, count| format!("{}\n{} films", location, count),
        )
        .await;

    sink.publish(&countries, &locations)
        .await
        .map_err(MapError::Sink)?;

    Ok(MapSummary { records_scanned, countries, locations })
}
