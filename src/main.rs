use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zg_kultura::config::AppConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("zg-kultura v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    let summary = zg_kultura::run(&config)?;

    if summary.failed > 0 {
        warn!(
            failed = summary.failed,
            sources = summary.reports.len(),
            "some sources were skipped"
        );
    }
    info!(
        total = summary.total,
        failed = summary.failed,
        path = %summary.output_path.display(),
        "done"
    );
    Ok(())
}
