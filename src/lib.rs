pub mod aggregate;
pub mod classify;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod scraping;
pub mod store;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use aggregate::SourceReport;
use config::AppConfig;
use scraping::SourceAdapter;

#[derive(Debug)]
pub struct RunSummary {
    pub total: usize,
    pub failed: usize,
    pub output_path: PathBuf,
    pub reports: Vec<SourceReport>,
}

/// Scrapes every registered source and rewrites the events artifact.
pub fn run(config: &AppConfig) -> Result<RunSummary> {
    let client = scraping::base::http_client(config)?;
    let sources = scraping::active_sources(config, &client);
    run_with_sources(config, &sources)
}

/// Only writing the artifact can fail; source failures end up in the report.
pub fn run_with_sources(
    config: &AppConfig,
    sources: &[Box<dyn SourceAdapter>],
) -> Result<RunSummary> {
    info!(sources = sources.len(), "scrapers running");
    let aggregation = aggregate::aggregate(sources, &config.city);
    let failed = aggregation.failed_sources().count();
    let events = pipeline::finalize(aggregation.events, &config.city);

    let output_path = PathBuf::from(&config.output_path);
    store::write_events(&output_path, &events)?;
    info!(total = events.len(), path = %output_path.display(), "events written");

    Ok(RunSummary {
        total: events.len(),
        failed,
        output_path,
        reports: aggregation.reports,
    })
}
