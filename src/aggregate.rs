use tracing::{debug, info, warn};

use crate::models::{Event, EventCollector};
use crate::scraping::SourceAdapter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub id: String,
    pub added: usize,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct Aggregation {
    pub events: Vec<Event>,
    pub reports: Vec<SourceReport>,
}

impl Aggregation {
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.reports.iter().filter(|report| report.error.is_some())
    }
}

/// Owns the event collection and runs sources one at a time.
pub struct Aggregator {
    collector: EventCollector,
    reports: Vec<SourceReport>,
}

impl Aggregator {
    pub fn new(city: &str) -> Self {
        Self {
            collector: EventCollector::new(city),
            reports: Vec::new(),
        }
    }

    /// A failing source contributes nothing and never stops the run.
    pub fn run_source(&mut self, adapter: &dyn SourceAdapter) -> &SourceReport {
        let before = self.collector.len();
        let error = match adapter.fetch() {
            Ok(items) => {
                debug!(source = adapter.id(), candidates = items.len(), "source fetched");
                for item in items {
                    self.collector.add(item, adapter.source());
                }
                None
            }
            Err(err) => {
                warn!(source = adapter.id(), error = %err, "source failed");
                Some(err.to_string())
            }
        };
        let added = self.collector.len() - before;
        info!(source = adapter.id(), added, "source done");

        self.reports.push(SourceReport {
            id: adapter.id().to_string(),
            added,
            error,
        });
        &self.reports[self.reports.len() - 1]
    }

    pub fn finish(self) -> Aggregation {
        Aggregation {
            events: self.collector.into_events(),
            reports: self.reports,
        }
    }
}

pub fn aggregate(sources: &[Box<dyn SourceAdapter>], city: &str) -> Aggregation {
    let mut aggregator = Aggregator::new(city);
    for source in sources {
        aggregator.run_source(source.as_ref());
    }
    aggregator.finish()
}
